use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// ContentType
// ---------------------------------------------------------------------------

/// Document types declared in the CMS schema. The wire name (camelCase) is
/// what appears in `_type` discriminators and query filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentType {
    LabProduct,
    Project,
    HubContent,
    BlogPost,
    Podcast,
    CaseStudy,
    Event,
    TeamMember,
}

impl ContentType {
    pub fn all() -> &'static [ContentType] {
        &[
            ContentType::LabProduct,
            ContentType::Project,
            ContentType::HubContent,
            ContentType::BlogPost,
            ContentType::Podcast,
            ContentType::CaseStudy,
            ContentType::Event,
            ContentType::TeamMember,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::LabProduct => "labProduct",
            ContentType::Project => "project",
            ContentType::HubContent => "hubContent",
            ContentType::BlogPost => "blogPost",
            ContentType::Podcast => "podcast",
            ContentType::CaseStudy => "caseStudy",
            ContentType::Event => "event",
            ContentType::TeamMember => "teamMember",
        }
    }

    /// Recency field used for default ordering. Editorial types carry an
    /// explicit publish date; the rest fall back to the CMS creation stamp.
    pub fn order_field(self) -> &'static str {
        match self {
            ContentType::LabProduct
            | ContentType::Project
            | ContentType::BlogPost
            | ContentType::Podcast
            | ContentType::Event => "date",
            ContentType::HubContent | ContentType::CaseStudy | ContentType::TeamMember => {
                "_createdAt"
            }
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ContentType {
    type Err = crate::error::SavvyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "labProduct" | "lab-product" => Ok(ContentType::LabProduct),
            "project" => Ok(ContentType::Project),
            "hubContent" | "hub-content" => Ok(ContentType::HubContent),
            "blogPost" | "blog-post" => Ok(ContentType::BlogPost),
            "podcast" => Ok(ContentType::Podcast),
            "caseStudy" | "case-study" => Ok(ContentType::CaseStudy),
            "event" => Ok(ContentType::Event),
            "teamMember" | "team-member" => Ok(ContentType::TeamMember),
            _ => Err(crate::error::SavvyError::UnknownContentType(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Section
// ---------------------------------------------------------------------------

/// The three content-backed areas of the site. Sections own their routes:
/// a listing page plus a detail base under which individual documents live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Lab,
    Impact,
    Hub,
}

impl Section {
    pub fn all() -> &'static [Section] {
        &[Section::Lab, Section::Impact, Section::Hub]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Lab => "lab",
            Section::Impact => "impact",
            Section::Hub => "hub",
        }
    }

    /// Listing page route.
    pub fn listing_path(self) -> &'static str {
        match self {
            Section::Lab => "/savvy-lab",
            Section::Impact => "/savvy-impact",
            Section::Hub => "/savvy-hub",
        }
    }

    /// Route prefix under which a single document renders.
    pub fn detail_base(self) -> &'static str {
        match self {
            Section::Lab => "/savvy-lab/project",
            Section::Impact => "/savvy-impact/project",
            Section::Hub => "/savvy-hub/video",
        }
    }

    /// Fallback href for a document that carries no explicit link.
    pub fn fallback_href(self, key: &str) -> String {
        format!("{}/{}", self.detail_base(), key)
    }

    /// Content type whose documents populate this section.
    pub fn content_type(self) -> ContentType {
        match self {
            Section::Lab => ContentType::LabProduct,
            Section::Impact => ContentType::Project,
            Section::Hub => ContentType::HubContent,
        }
    }

    /// Human heading used on listing pages and empty states.
    pub fn heading(self) -> &'static str {
        match self {
            Section::Lab => "Savvy Lab",
            Section::Impact => "Savvy Impact",
            Section::Hub => "Savvy Hub",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Section {
    type Err = crate::error::SavvyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lab" => Ok(Section::Lab),
            "impact" => Ok(Section::Impact),
            "hub" => Ok(Section::Hub),
            _ => Err(crate::error::SavvyError::UnknownSection(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// CardSize
// ---------------------------------------------------------------------------

/// Grid layout hint. Large cards span extra columns in the masonry grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardSize {
    Standard,
    Large,
}

impl CardSize {
    pub fn css_class(self) -> &'static str {
        match self {
            CardSize::Standard => "card",
            CardSize::Large => "card card--large",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
