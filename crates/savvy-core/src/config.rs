use crate::error::{Result, SavvyError};
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Canonical write-token variable. The legacy spelling is still honored
/// because older deploy scripts exported it.
pub const TOKEN_ENV: &str = "SANITY_API_TOKEN";
pub const TOKEN_ENV_LEGACY: &str = "SANITY_TOKEN";

pub const PROJECT_ID_ENV: &str = "SAVVY_CMS_PROJECT_ID";
pub const DATASET_ENV: &str = "SAVVY_CMS_DATASET";
pub const ENDPOINT_ENV: &str = "SAVVY_CMS_ENDPOINT";

// ---------------------------------------------------------------------------
// SiteMeta
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteMeta {
    #[serde(default = "default_site_name")]
    pub name: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Hosted CMS admin UI. Linked from the footer, never mounted.
    #[serde(default = "default_studio_url")]
    pub studio_url: String,
}

fn default_site_name() -> String {
    "Ghost Savvy Studios".to_string()
}

fn default_base_url() -> String {
    "https://ghostsavvy.com".to_string()
}

fn default_studio_url() -> String {
    "https://ghostsavvy.sanity.studio".to_string()
}

impl Default for SiteMeta {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            base_url: default_base_url(),
            studio_url: default_studio_url(),
        }
    }
}

// ---------------------------------------------------------------------------
// CmsConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CmsConfig {
    #[serde(default = "default_project_id")]
    pub project_id: String,
    #[serde(default = "default_dataset")]
    pub dataset: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    /// Full endpoint override (scheme + host + version prefix). Normally
    /// derived from the project id; tests point it at a local server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cdn: Option<String>,
}

fn default_project_id() -> String {
    "gs7prj".to_string()
}

fn default_dataset() -> String {
    "production".to_string()
}

fn default_api_version() -> String {
    "2024-06-01".to_string()
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            project_id: default_project_id(),
            dataset: default_dataset(),
            api_version: default_api_version(),
            endpoint: None,
            cdn: None,
        }
    }
}

impl CmsConfig {
    /// Base URL for API calls, without a trailing slash.
    pub fn endpoint(&self) -> String {
        match &self.endpoint {
            Some(e) => e.trim_end_matches('/').to_string(),
            None => format!(
                "https://{}.api.sanity.io/v{}",
                self.project_id, self.api_version
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// ServerConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    4171
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

// ---------------------------------------------------------------------------
// SiteConfig
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteMeta,
    #[serde(default)]
    pub cms: CmsConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl SiteConfig {
    /// Load `site.yaml` from the site root, falling back to defaults when
    /// the file is absent, then apply environment overrides.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::site_config_path(root);
        let mut cfg = if path.exists() {
            let data = std::fs::read_to_string(&path)?;
            serde_yaml::from_str(&data)?
        } else {
            Self::default()
        };
        cfg.apply_env();
        Ok(cfg)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&paths::site_config_path(root), data.as_bytes())
    }

    fn apply_env(&mut self) {
        if let Ok(v) = std::env::var(PROJECT_ID_ENV) {
            if !v.is_empty() {
                self.cms.project_id = v;
            }
        }
        if let Ok(v) = std::env::var(DATASET_ENV) {
            if !v.is_empty() {
                self.cms.dataset = v;
            }
        }
        if let Ok(v) = std::env::var(ENDPOINT_ENV) {
            if !v.is_empty() {
                self.cms.endpoint = Some(v);
            }
        }
    }

    /// Write-access token for the mutation endpoint. Canonical name first,
    /// legacy spelling second.
    pub fn write_token() -> Result<String> {
        for name in [TOKEN_ENV, TOKEN_ENV_LEGACY] {
            if let Ok(v) = std::env::var(name) {
                if !v.is_empty() {
                    return Ok(v);
                }
            }
        }
        Err(SavvyError::MissingToken)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
