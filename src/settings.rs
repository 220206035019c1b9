//! The site settings record and the stores that persist it.
//!
//! Updates use merge semantics: fields absent from an update keep their stored value, and
//! unknown fields written by other tools survive a round trip.

use crate::error::{SiteError, SiteResult};
use crate::tag::tag_enum;
use async_trait::async_trait;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

tag_enum! {
    pub enum LogoType {
        Icon => "icon",
        Image => "image",
    }
    default = Icon;
}

/// Single mutable settings record for a site.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website_template: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_type: Option<LogoType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_icon: Option<String>,
    /// Fields this crate does not interpret, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SiteSettings {
    /// Overlay every field set in `update` onto `self`.
    pub fn merge(&mut self, update: &SiteSettings) {
        if let Some(v) = &update.design_template {
            self.design_template = Some(v.clone());
        }
        if let Some(v) = &update.website_template {
            self.website_template = Some(v.clone());
        }
        if let Some(v) = &update.site_name {
            self.site_name = Some(v.clone());
        }
        if let Some(v) = update.logo_type {
            self.logo_type = Some(v);
        }
        if let Some(v) = &update.logo_image_url {
            self.logo_image_url = Some(v.clone());
        }
        if let Some(v) = &update.logo_icon {
            self.logo_icon = Some(v.clone());
        }
        for (k, v) in &update.extra {
            self.extra.insert(k.clone(), v.clone());
        }
    }

    pub fn merged(mut self, update: &SiteSettings) -> Self {
        self.merge(update);
        self
    }

    /// Image logo URL, when the settings select an image logo and provide one.
    pub fn logo_image(&self) -> Option<&str> {
        match (self.logo_type, self.logo_image_url.as_deref()) {
            (Some(LogoType::Image), Some(url)) if !url.is_empty() => Some(url),
            _ => None,
        }
    }
}

/// Read/write access to the settings record.
#[async_trait]
pub trait SettingsStore: Send + Sync {
    /// `Ok(None)` when no record exists yet.
    async fn get_site_settings(&self) -> SiteResult<Option<SiteSettings>>;

    /// Merge `update` into the stored record, creating it if needed.
    async fn update_site_settings(&self, update: &SiteSettings) -> SiteResult<()>;
}

/// In-process store keyed by site id.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    site_id: String,
    records: DashMap<String, SiteSettings>,
}

impl MemorySettingsStore {
    pub fn new(site_id: impl Into<String>) -> Self {
        Self {
            site_id: site_id.into(),
            records: DashMap::new(),
        }
    }

    pub fn with_settings(site_id: impl Into<String>, settings: SiteSettings) -> Self {
        let store = Self::new(site_id);
        store.records.insert(store.site_id.clone(), settings);
        store
    }

    pub fn site_id(&self) -> &str {
        &self.site_id
    }
}

#[async_trait]
impl SettingsStore for MemorySettingsStore {
    async fn get_site_settings(&self) -> SiteResult<Option<SiteSettings>> {
        Ok(self.records.get(&self.site_id).map(|r| r.clone()))
    }

    async fn update_site_settings(&self, update: &SiteSettings) -> SiteResult<()> {
        self.records
            .entry(self.site_id.clone())
            .or_default()
            .merge(update);
        Ok(())
    }
}

/// Settings persisted as a YAML document on disk.
///
/// Writes are read-modify-write without locking; concurrent writers race and the last
/// write wins.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SettingsStore for FileSettingsStore {
    async fn get_site_settings(&self) -> SiteResult<Option<SiteSettings>> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(b) => b,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(SiteError::Store(format!(
                    "read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };
        if bytes.iter().all(|b| b.is_ascii_whitespace()) {
            return Ok(None);
        }
        let settings: SiteSettings = serde_yaml::from_slice(&bytes)
            .map_err(|e| SiteError::Store(format!("parse {}: {}", self.path.display(), e)))?;
        Ok(Some(settings))
    }

    async fn update_site_settings(&self, update: &SiteSettings) -> SiteResult<()> {
        let current = self.get_site_settings().await?.unwrap_or_default();
        let merged = current.merged(update);
        let yaml = serde_yaml::to_string(&merged)
            .map_err(|e| SiteError::Store(format!("encode settings: {}", e)))?;
        tokio::fs::write(&self.path, yaml)
            .await
            .map_err(|e| SiteError::Store(format!("write {}: {}", self.path.display(), e)))?;
        tracing::debug!(path = %self.path.display(), "settings written");
        Ok(())
    }
}
