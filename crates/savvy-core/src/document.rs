use crate::slug::Slug;
use crate::types::ContentType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// References
// ---------------------------------------------------------------------------

/// Pointer at an uploaded image asset. The `_ref` string encodes the asset
/// id, dimensions, and format; `ImageUrlBuilder` turns it into a delivery
/// URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    pub asset: AssetPointer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetPointer {
    #[serde(rename = "_ref")]
    pub r#ref: String,
}

impl ImageRef {
    pub fn new(r#ref: impl Into<String>) -> Self {
        Self {
            asset: AssetPointer { r#ref: r#ref.into() },
        }
    }
}

/// Weak link to another document (e.g. a blog post's authors referencing
/// team members). Resolved only at read time by the CMS; the site never
/// validates referential integrity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocRef {
    #[serde(rename = "_ref")]
    pub r#ref: String,
}

// ---------------------------------------------------------------------------
// ContentDocument
// ---------------------------------------------------------------------------

/// A single structured content record as returned by the CMS read API.
/// Field names mirror the wire shape (`_id`, `_type`, `_createdAt`,
/// camelCase flags); everything beyond identity and title is optional and
/// defaulted, because projections vary per section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentDocument {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "_type")]
    pub doc_type: ContentType,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<Slug>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageRef>,
    #[serde(default, rename = "videoUrl", skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default, rename = "_createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default, rename = "featuredOnHome")]
    pub featured_on_home: bool,
    #[serde(default, rename = "featuredOrder", skip_serializing_if = "Option::is_none")]
    pub featured_order: Option<u32>,
    #[serde(default, rename = "sortOrder", skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, rename = "ctaText", skip_serializing_if = "Option::is_none")]
    pub cta_text: Option<String>,
    #[serde(default)]
    pub highlight: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<DocRef>,
}

impl ContentDocument {
    /// Minimal constructor used by fixtures and tests. Everything optional
    /// starts empty.
    pub fn new(id: impl Into<String>, doc_type: ContentType, title: impl Into<String>) -> Self {
        let title = title.into();
        let slug = Slug::derive(&title);
        Self {
            id: id.into(),
            doc_type,
            title,
            slug: Some(slug),
            description: None,
            image: None,
            video_url: None,
            category: None,
            tags: Vec::new(),
            date: None,
            created_at: None,
            featured: false,
            featured_on_home: false,
            featured_order: None,
            sort_order: None,
            link: None,
            cta_text: None,
            highlight: false,
            authors: Vec::new(),
        }
    }

    /// Routing key: the slug when present, otherwise the raw document id.
    pub fn route_key(&self) -> &str {
        self.slug
            .as_ref()
            .map(|s| s.current.as_str())
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.id)
    }

    /// Position used when curated ordering applies. `featuredOrder` is only
    /// meaningful while the featured flag is set; otherwise documents keep
    /// their fetch order.
    pub fn curated_order(&self) -> u32 {
        if self.featured || self.featured_on_home {
            self.featured_order.or(self.sort_order).unwrap_or(u32::MAX)
        } else {
            u32::MAX
        }
    }
}

// ---------------------------------------------------------------------------
// CreatedDocument
// ---------------------------------------------------------------------------

/// Acknowledgement returned by the CMS write API for a single `create`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedDocument {
    pub id: String,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_wire_shape() {
        let json = serde_json::json!({
            "_id": "drafts.abc123",
            "_type": "labProduct",
            "title": "Vynl",
            "slug": { "current": "vynl" },
            "category": "everyone",
            "featuredOnHome": true,
            "featuredOrder": 2,
            "image": { "asset": { "_ref": "image-deadbeef-1200x800-jpg" } },
            "ctaText": "Try Vynl",
        });
        let doc: ContentDocument = serde_json::from_value(json).unwrap();
        assert_eq!(doc.id, "drafts.abc123");
        assert_eq!(doc.doc_type, ContentType::LabProduct);
        assert_eq!(doc.route_key(), "vynl");
        assert!(doc.featured_on_home);
        assert_eq!(doc.featured_order, Some(2));
        assert_eq!(doc.image.unwrap().asset.r#ref, "image-deadbeef-1200x800-jpg");
    }

    #[test]
    fn missing_optionals_default() {
        let json = serde_json::json!({
            "_id": "x1",
            "_type": "project",
            "title": "Rebrand",
        });
        let doc: ContentDocument = serde_json::from_value(json).unwrap();
        assert!(doc.slug.is_none());
        assert!(!doc.featured);
        assert!(doc.tags.is_empty());
        assert_eq!(doc.route_key(), "x1");
    }

    #[test]
    fn curated_order_requires_featured_flag() {
        let mut doc = ContentDocument::new("a", ContentType::LabProduct, "A");
        doc.featured_order = Some(1);
        assert_eq!(doc.curated_order(), u32::MAX);

        doc.featured = true;
        assert_eq!(doc.curated_order(), 1);
    }

    #[test]
    fn new_derives_slug_from_title() {
        let doc = ContentDocument::new("a", ContentType::Project, "Stories of Impact");
        assert_eq!(doc.route_key(), "stories-of-impact");
    }
}
