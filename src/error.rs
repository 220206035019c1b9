use thiserror::Error;

pub type SiteResult<T> = Result<T, SiteError>;

#[derive(Error, Debug, Clone)]
pub enum SiteError {
    #[error("Settings store error: {0}")]
    Store(String),

    #[error("Failed to load content for page '{page}': {reason}")]
    ContentFetch { page: String, reason: String },

    #[error("I/O error: {0}")]
    Io(String),

    #[error("YAML error: {0}")]
    Yaml(String),

    #[error("JSON error: {0}")]
    Json(String),

    #[error("Catalog '{catalog}' is empty: a catalog needs at least one template")]
    EmptyCatalog { catalog: String },

    #[error("Duplicate template id '{id}' in catalog '{catalog}'")]
    DuplicateTemplateId { catalog: String, id: String },

    #[error("Invalid template id '{id}': ids must be lowercase kebab-case")]
    InvalidTemplateId { id: String },

    #[error("Render error: {0}")]
    Render(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<std::io::Error> for SiteError {
    fn from(err: std::io::Error) -> Self {
        SiteError::Io(err.to_string())
    }
}

impl From<serde_yaml::Error> for SiteError {
    fn from(err: serde_yaml::Error) -> Self {
        SiteError::Yaml(err.to_string())
    }
}

impl From<serde_json::Error> for SiteError {
    fn from(err: serde_json::Error) -> Self {
        SiteError::Json(err.to_string())
    }
}

impl From<std::fmt::Error> for SiteError {
    fn from(err: std::fmt::Error) -> Self {
        SiteError::Render(err.to_string())
    }
}
