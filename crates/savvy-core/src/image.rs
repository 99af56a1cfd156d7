use crate::document::ImageRef;

/// Default CMS image CDN.
pub const DEFAULT_CDN: &str = "https://cdn.sanity.io";

// ---------------------------------------------------------------------------
// ImageUrlBuilder
// ---------------------------------------------------------------------------

/// Resolves image asset references to absolute delivery URLs.
///
/// An asset ref looks like `image-<assetId>-<width>x<height>-<format>`; the
/// delivery URL is `<cdn>/images/<project>/<dataset>/<assetId>-<dims>.<format>`.
/// Malformed refs resolve to `None` rather than producing a broken URL.
#[derive(Debug, Clone)]
pub struct ImageUrlBuilder {
    cdn: String,
    project_id: String,
    dataset: String,
}

impl ImageUrlBuilder {
    pub fn new(project_id: impl Into<String>, dataset: impl Into<String>) -> Self {
        Self {
            cdn: DEFAULT_CDN.to_string(),
            project_id: project_id.into(),
            dataset: dataset.into(),
        }
    }

    pub fn with_cdn(mut self, cdn: impl Into<String>) -> Self {
        self.cdn = cdn.into();
        self
    }

    pub fn url_for(&self, image: &ImageRef) -> Option<String> {
        let (id, dims, format) = split_asset_ref(&image.asset.r#ref)?;
        Some(format!(
            "{}/images/{}/{}/{}-{}.{}",
            self.cdn, self.project_id, self.dataset, id, dims, format
        ))
    }
}

/// Split `image-<assetId>-<dims>-<format>` into its parts. The asset id may
/// itself contain hyphens, so the dims and format are taken from the end.
fn split_asset_ref(r#ref: &str) -> Option<(&str, &str, &str)> {
    let rest = r#ref.strip_prefix("image-")?;
    let (rest, format) = rest.rsplit_once('-')?;
    let (id, dims) = rest.rsplit_once('-')?;
    if id.is_empty() || format.is_empty() {
        return None;
    }
    // Dims must look like <w>x<h>.
    let (w, h) = dims.split_once('x')?;
    if w.is_empty() || h.is_empty() || !w.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if !h.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((id, dims, format))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> ImageUrlBuilder {
        ImageUrlBuilder::new("gs7prj", "production")
    }

    #[test]
    fn resolves_wellformed_ref() {
        let image = ImageRef::new("image-deadbeef1234-1200x800-jpg");
        assert_eq!(
            builder().url_for(&image).unwrap(),
            "https://cdn.sanity.io/images/gs7prj/production/deadbeef1234-1200x800.jpg"
        );
    }

    #[test]
    fn asset_id_may_contain_hyphens() {
        let image = ImageRef::new("image-ab-cd-ef-640x480-webp");
        assert_eq!(
            builder().url_for(&image).unwrap(),
            "https://cdn.sanity.io/images/gs7prj/production/ab-cd-ef-640x480.webp"
        );
    }

    #[test]
    fn custom_cdn() {
        let image = ImageRef::new("image-a1-100x100-png");
        let url = builder().with_cdn("https://media.ghostsavvy.com").url_for(&image);
        assert_eq!(
            url.unwrap(),
            "https://media.ghostsavvy.com/images/gs7prj/production/a1-100x100.png"
        );
    }

    #[test]
    fn malformed_refs_resolve_to_none() {
        for bad in [
            "file-deadbeef-1200x800-jpg",
            "image-",
            "image-noformat",
            "image-id-baddims-jpg",
            "image-id-12x-jpg",
            "image--100x100-png",
        ] {
            assert!(builder().url_for(&ImageRef::new(bad)).is_none(), "accepted {bad:?}");
        }
    }
}
