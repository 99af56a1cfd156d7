use crate::card::{map_documents, Card};
use crate::client::ContentClient;
use crate::image::ImageUrlBuilder;
use crate::query::Query;
use crate::types::Section;

// ---------------------------------------------------------------------------
// SectionSpec
// ---------------------------------------------------------------------------

/// One content-backed page fragment: which documents it pulls, how many,
/// and whether it is scoped to home-page featured items. A single spec
/// drives every section on the site; the per-section components this
/// replaces differed only in these fields.
#[derive(Debug, Clone, Copy)]
pub struct SectionSpec {
    pub section: Section,
    /// Empty-state / heading copy.
    pub title: &'static str,
    pub home_only: bool,
    pub limit: usize,
}

impl SectionSpec {
    pub fn query(&self) -> Query {
        Query::new(self.section.content_type())
            .home_only(self.home_only)
            .limit(self.limit)
    }
}

/// Featured sections composing the home page, in render order.
pub fn home_sections() -> [SectionSpec; 3] {
    [
        SectionSpec {
            section: Section::Lab,
            title: "Featured Products",
            home_only: true,
            limit: 5,
        },
        SectionSpec {
            section: Section::Impact,
            title: "Stories of Impact",
            home_only: true,
            limit: 4,
        },
        SectionSpec {
            section: Section::Hub,
            title: "From the Hub",
            home_only: true,
            limit: 6,
        },
    ]
}

/// Full listing spec for a section's own page.
pub fn listing_spec(section: Section) -> SectionSpec {
    match section {
        Section::Lab => SectionSpec {
            section,
            title: "Savvy Lab",
            home_only: false,
            limit: 6,
        },
        Section::Impact => SectionSpec {
            section,
            title: "Savvy Impact",
            home_only: false,
            limit: 5,
        },
        Section::Hub => SectionSpec {
            section,
            title: "Savvy Hub",
            home_only: false,
            limit: 6,
        },
    }
}

// ---------------------------------------------------------------------------
// SectionData
// ---------------------------------------------------------------------------

/// Terminal render states. The in-flight fetch is the only "loading" a
/// server-rendered pipeline has, so it never reaches markup.
#[derive(Debug, Clone)]
pub enum SectionState {
    Empty,
    Populated(Vec<Card>),
}

#[derive(Debug, Clone)]
pub struct SectionData {
    pub spec: SectionSpec,
    pub state: SectionState,
}

impl SectionData {
    pub fn cards(&self) -> &[Card] {
        match &self.state {
            SectionState::Empty => &[],
            SectionState::Populated(cards) => cards,
        }
    }
}

/// Fetch and map one section. A fetch failure is logged and then treated
/// identically to an empty result: the page renders its explore CTA
/// instead of content, and the request as a whole still succeeds.
pub async fn fetch_section(
    client: &ContentClient,
    images: &ImageUrlBuilder,
    spec: SectionSpec,
) -> SectionData {
    let state = match client.fetch(&spec.query()).await {
        Ok(docs) if docs.is_empty() => SectionState::Empty,
        Ok(docs) => SectionState::Populated(map_documents(docs, spec.section, images)),
        Err(e) => {
            tracing::error!(section = %spec.section, error = %e, "section fetch failed");
            SectionState::Empty
        }
    };
    SectionData { spec, state }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
