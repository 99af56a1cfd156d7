use savvy_core::client::ContentClient;
use savvy_core::config::SiteConfig;
use savvy_core::image::ImageUrlBuilder;
use std::path::PathBuf;
use std::sync::Arc;

/// Shared application state passed to all route handlers. The site is
/// read-only and stateless between requests, so this is config plus the
/// CMS client and nothing else.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

struct Inner {
    config: SiteConfig,
    client: ContentClient,
    images: ImageUrlBuilder,
    root: PathBuf,
}

impl AppState {
    pub fn new(config: SiteConfig, root: PathBuf) -> Self {
        let client = ContentClient::new(&config.cms);
        let mut images =
            ImageUrlBuilder::new(config.cms.project_id.as_str(), config.cms.dataset.as_str());
        if let Some(cdn) = &config.cms.cdn {
            images = images.with_cdn(cdn);
        }
        Self {
            inner: Arc::new(Inner {
                config,
                client,
                images,
                root,
            }),
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    pub fn client(&self) -> &ContentClient {
        &self.inner.client
    }

    pub fn images(&self) -> &ImageUrlBuilder {
        &self.inner.images
    }

    pub fn root(&self) -> &std::path::Path {
        &self.inner.root
    }
}
