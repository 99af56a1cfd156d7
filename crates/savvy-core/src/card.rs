use crate::document::ContentDocument;
use crate::image::ImageUrlBuilder;
use crate::types::{CardSize, Section};
use serde::Serialize;

/// CTA label applied when a document carries none of its own.
pub const DEFAULT_CTA: &str = "Explore";

// ---------------------------------------------------------------------------
// Card
// ---------------------------------------------------------------------------

/// The prop set a grid tile needs, shaped from a raw document. All the
/// defensive fallbacks the site applies live here and nowhere else.
#[derive(Debug, Clone, Serialize)]
pub struct Card {
    pub title: String,
    pub href: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub cta_text: String,
    pub size: CardSize,
}

impl Card {
    /// Map a fetched document into card props for the given section.
    ///
    /// Fallbacks: a missing `link` routes to the section's detail page for
    /// the document's slug (or raw id when no slug exists); a missing
    /// `ctaText` becomes the generic label; a missing or unresolvable image
    /// yields no URL and the renderer shows a placeholder block.
    pub fn from_document(doc: &ContentDocument, section: Section, images: &ImageUrlBuilder) -> Self {
        let href = match &doc.link {
            Some(link) if !link.is_empty() => link.clone(),
            _ => section.fallback_href(doc.route_key()),
        };
        let image_url = doc.image.as_ref().and_then(|i| images.url_for(i));
        let category = doc
            .category
            .clone()
            .or_else(|| doc.tags.first().cloned());
        let cta_text = doc
            .cta_text
            .clone()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_CTA.to_string());
        let size = if doc.highlight {
            CardSize::Large
        } else {
            CardSize::Standard
        };

        Self {
            title: doc.title.clone(),
            href,
            image_url,
            description: doc.description.clone(),
            category,
            cta_text,
            size,
        }
    }
}

/// Map a fetched batch, preserving curated ordering where the featured flag
/// makes `featuredOrder` meaningful and fetch order otherwise.
pub fn map_documents(
    mut docs: Vec<ContentDocument>,
    section: Section,
    images: &ImageUrlBuilder,
) -> Vec<Card> {
    docs.sort_by_key(ContentDocument::curated_order);
    docs.iter()
        .map(|d| Card::from_document(d, section, images))
        .collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
