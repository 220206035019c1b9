//! Site configuration loading.

use crate::error::{SiteError, SiteResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File looked up in the working directory when no config path is given.
pub const LOCAL_CONFIG: &str = "nulltrace-site.yaml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Key of the settings record in multi-site stores.
    pub site_id: String,

    /// Where the fallback screens send the operator.
    pub admin_path: String,

    /// Page rendered by the home route.
    pub page_key: String,

    /// Replaces the built-in design catalog when set.
    pub design_catalog: Option<PathBuf>,

    /// Replaces the built-in structure catalog when set.
    pub structure_catalog: Option<PathBuf>,

    /// Settings file for the file-backed store.
    pub settings_path: Option<PathBuf>,

    pub log_level: String,
    pub log_json: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_id: "main".to_string(),
            admin_path: "/admin".to_string(),
            page_key: "home".to_string(),
            design_catalog: None,
            structure_catalog: None,
            settings_path: None,
            log_level: "info".to_string(),
            log_json: false,
        }
    }
}

impl SiteConfig {
    /// Load configuration with fallback chain: explicit path, local file, defaults.
    pub fn load(config_path: Option<&Path>) -> SiteResult<Self> {
        if let Some(path) = config_path {
            return Self::load_from_file(path);
        }

        let local = PathBuf::from(LOCAL_CONFIG);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => return Ok(config),
                Err(e) => tracing::warn!("Failed to load config from {}: {}", local.display(), e),
            }
        }

        tracing::debug!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_file(path: &Path) -> SiteResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| SiteError::Config(format!("read {}: {}", path.display(), e)))?;
        let mut config: Self = serde_yaml::from_str(&content)
            .map_err(|e| SiteError::Config(format!("parse {}: {}", path.display(), e)))?;
        config.resolve_paths(path.parent().unwrap_or_else(|| Path::new(".")));
        tracing::info!("Loaded config from: {}", path.display());
        Ok(config)
    }

    /// Make relative file references relative to the config file's directory.
    fn resolve_paths(&mut self, base: &Path) {
        for path in [
            &mut self.design_catalog,
            &mut self.structure_catalog,
            &mut self.settings_path,
        ]
        .into_iter()
        .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}
