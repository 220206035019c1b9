//! Site bundle: settings, navigation and page content in one YAML document.
//!
//! ```yaml
//! settings:
//!   siteName: Iron Gym
//!   websiteTemplate: dynamic-interactive
//! navigation:
//!   - { href: /, label: Home }
//!   - { href: /admin, label: Admin, visible: false }
//! pages:
//!   home:
//!     content:
//!       hero: { title: Train Hard }
//!     sections:
//!       - { id: promo, title: Summer Deal }
//! ```

use crate::content::{ContentSource, NavItem, NavigationSource, PageData};
use crate::error::{SiteError, SiteResult};
use crate::settings::MemorySettingsStore;
use crate::settings::SiteSettings;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteBundle {
    pub settings: Option<SiteSettings>,
    pub navigation: Vec<NavItem>,
    pub pages: BTreeMap<String, PageData>,
}

impl SiteBundle {
    pub fn from_yaml(yaml: &str) -> SiteResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load(path: &Path) -> SiteResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SiteError::Io(format!("{}: {}", path.display(), e)))?;
        let bundle = Self::from_yaml(&content)?;
        tracing::debug!(
            path = %path.display(),
            pages = bundle.pages.len(),
            nav_items = bundle.navigation.len(),
            "bundle loaded"
        );
        Ok(bundle)
    }

    /// In-memory store seeded with the bundle's settings.
    pub fn settings_store(&self, site_id: &str) -> MemorySettingsStore {
        match &self.settings {
            Some(settings) => MemorySettingsStore::with_settings(site_id, settings.clone()),
            None => MemorySettingsStore::new(site_id),
        }
    }
}

#[async_trait]
impl ContentSource for SiteBundle {
    async fn page(&self, page_key: &str) -> SiteResult<Option<PageData>> {
        Ok(self.pages.get(page_key).cloned())
    }
}

#[async_trait]
impl NavigationSource for SiteBundle {
    async fn navigation(&self) -> SiteResult<Vec<NavItem>> {
        Ok(self.navigation.clone())
    }
}
