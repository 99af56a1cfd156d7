use crate::types::ContentType;
use std::fmt;

/// Projection requested for every section fetch. Fixed shape: sections all
/// consume the same card-sized slice of a document, so there is exactly one
/// projection in the codebase.
pub const CARD_PROJECTION: &str = "{_id, _type, title, slug, description, image, videoUrl, \
     category, tags, date, _createdAt, featured, featuredOnHome, featuredOrder, sortOrder, \
     link, ctaText, highlight, authors}";

// ---------------------------------------------------------------------------
// Query
// ---------------------------------------------------------------------------

/// Fixed-shape filter over one content type: optional home-page scoping or
/// slug equality, recency ordering, and a hard result cap. No user-input
/// filtering and no pagination exist in this path.
#[derive(Debug, Clone)]
pub struct Query {
    content_type: ContentType,
    home_only: bool,
    slug: Option<String>,
    order_field: &'static str,
    limit: usize,
}

impl Query {
    pub fn new(content_type: ContentType) -> Self {
        Self {
            content_type,
            home_only: false,
            slug: None,
            order_field: content_type.order_field(),
            limit: 6,
        }
    }

    /// Narrow to documents flagged for the home page.
    pub fn home_only(mut self, yes: bool) -> Self {
        self.home_only = yes;
        self
    }

    /// Select a single document by slug. Ordering and limit stop mattering;
    /// the first match wins.
    pub fn by_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Override the recency field (defaults to the type's own).
    pub fn order_desc(mut self, field: &'static str) -> Self {
        self.order_field = field;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn content_type(&self) -> ContentType {
        self.content_type
    }

    pub fn is_single(&self) -> bool {
        self.slug.is_some()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "*[_type == \"{}\"", self.content_type.as_str())?;
        if self.home_only {
            write!(f, " && featuredOnHome == true")?;
        }
        if let Some(slug) = &self.slug {
            write!(f, " && slug.current == \"{slug}\"")?;
        }
        write!(f, "]")?;
        if self.slug.is_some() {
            write!(f, "[0]{CARD_PROJECTION}")
        } else {
            write!(
                f,
                " | order({} desc)[0...{}]{}",
                self.order_field, self.limit, CARD_PROJECTION
            )
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_query_shape() {
        let q = Query::new(ContentType::LabProduct).limit(6).to_string();
        assert_eq!(
            q,
            format!(
                "*[_type == \"labProduct\"] | order(date desc)[0...6]{CARD_PROJECTION}"
            )
        );
    }

    #[test]
    fn home_scope_appends_flag_filter() {
        let q = Query::new(ContentType::Project).home_only(true).limit(4).to_string();
        assert!(q.starts_with(
            "*[_type == \"project\" && featuredOnHome == true] | order(date desc)[0...4]"
        ));
    }

    #[test]
    fn slug_query_selects_first_match() {
        let q = Query::new(ContentType::HubContent).by_slug("field-notes").to_string();
        assert!(q.starts_with(
            "*[_type == \"hubContent\" && slug.current == \"field-notes\"][0]"
        ));
        assert!(!q.contains("order("));
    }

    #[test]
    fn default_order_field_follows_type() {
        let q = Query::new(ContentType::HubContent).to_string();
        assert!(q.contains("order(_createdAt desc)"));
    }

    #[test]
    fn query_string_is_stable() {
        let a = Query::new(ContentType::LabProduct).home_only(true).limit(5).to_string();
        let b = Query::new(ContentType::LabProduct).home_only(true).limit(5).to_string();
        assert_eq!(a, b);
    }
}
