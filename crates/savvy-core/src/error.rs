use thiserror::Error;

#[derive(Debug, Error)]
pub enum SavvyError {
    #[error("unknown content type: {0}")]
    UnknownContentType(String),

    #[error("unknown section: {0}")]
    UnknownSection(String),

    #[error("document not found: {0}")]
    DocumentNotFound(String),

    #[error("invalid slug '{0}': must be lowercase alphanumeric with hyphens")]
    InvalidSlug(String),

    #[error("page manifest already exists: {0}")]
    PageExists(String),

    #[error("write token not set: export SANITY_API_TOKEN")]
    MissingToken,

    #[error("content api returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("content api request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SavvyError>;
