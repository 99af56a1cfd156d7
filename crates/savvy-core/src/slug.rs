use crate::error::{Result, SavvyError};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Slug
// ---------------------------------------------------------------------------

/// URL-safe routing key derived from a title. Stored in the CMS as an object
/// with a `current` field, so the wire shape is preserved here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slug {
    pub current: String,
}

impl Slug {
    pub fn new(current: impl Into<String>) -> Self {
        Self {
            current: current.into(),
        }
    }

    /// Normalize arbitrary text into a slug: lowercase, whitespace becomes a
    /// hyphen, everything outside `[a-z0-9-]` is dropped, hyphen runs
    /// collapse, and the ends are trimmed of hyphens. Idempotent.
    pub fn derive(text: &str) -> Self {
        let mut out = String::with_capacity(text.len());
        let mut last_hyphen = true; // suppress a leading hyphen
        for c in text.to_lowercase().chars() {
            let mapped = if c.is_whitespace() || c == '-' {
                Some('-')
            } else if c.is_ascii_lowercase() || c.is_ascii_digit() {
                Some(c)
            } else {
                None
            };
            match mapped {
                Some('-') => {
                    if !last_hyphen {
                        out.push('-');
                        last_hyphen = true;
                    }
                }
                Some(c) => {
                    out.push(c);
                    last_hyphen = false;
                }
                None => {}
            }
        }
        while out.ends_with('-') {
            out.pop();
        }
        Self { current: out }
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.current)
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

static SLUG_RE: OnceLock<Regex> = OnceLock::new();

fn slug_re() -> &'static Regex {
    SLUG_RE.get_or_init(|| Regex::new(r"^[a-z0-9][a-z0-9\-]*[a-z0-9]$|^[a-z0-9]$").unwrap())
}

/// Reject anything that is not already a well-formed slug. Used on route
/// parameters and CLI arguments before they reach a query string.
pub fn validate_slug(slug: &str) -> Result<()> {
    if slug.is_empty() || slug.len() > 96 || !slug_re().is_match(slug) {
        return Err(SavvyError::InvalidSlug(slug.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derive_basics() {
        assert_eq!(Slug::derive("Vynl").current, "vynl");
        assert_eq!(Slug::derive("Stories of Impact").current, "stories-of-impact");
        assert_eq!(Slug::derive("  Ghost   Savvy  ").current, "ghost-savvy");
    }

    #[test]
    fn derive_strips_punctuation() {
        assert_eq!(Slug::derive("What's Next?").current, "whats-next");
        assert_eq!(Slug::derive("design & dev — 2024").current, "design-dev-2024");
        assert_eq!(Slug::derive("snake_case_title").current, "snakecasetitle");
    }

    #[test]
    fn derive_output_alphabet() {
        for input in [
            "Hello, World!",
            "---dashes---",
            "\tmixed \n whitespace",
            "ünïcödé títle",
            "100% Real",
        ] {
            let slug = Slug::derive(input).current;
            assert!(
                slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "bad char in {slug:?}"
            );
            assert!(!slug.starts_with('-'), "leading hyphen in {slug:?}");
            assert!(!slug.ends_with('-'), "trailing hyphen in {slug:?}");
        }
    }

    #[test]
    fn derive_is_idempotent() {
        for input in ["Vynl App", "A -- B", "  padded  ", "Émigré", "a1 b2 c3"] {
            let once = Slug::derive(input);
            let twice = Slug::derive(&once.current);
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn valid_slugs() {
        for slug in ["vynl", "a", "stories-of-impact", "x1", "v2-launch"] {
            validate_slug(slug).unwrap_or_else(|_| panic!("expected valid: {slug}"));
        }
    }

    #[test]
    fn invalid_slugs() {
        for slug in ["", "-lead", "trail-", "has spaces", "UPPER", "a_b"] {
            assert!(validate_slug(slug).is_err(), "expected invalid: {slug}");
        }
    }
}
