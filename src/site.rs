//! Site facade wiring settings, content and navigation sources to rendering and the admin panels.

use crate::active::ActiveTemplates;
use crate::bundle::SiteBundle;
use crate::catalog::Catalogs;
use crate::config::SiteConfig;
use crate::content::{ContentSource, NavigationSource, PageState};
use crate::error::SiteResult;
use crate::notify::{Notifier, TracingNotifier};
use crate::panel::{DesignTemplatePanel, StructureTemplatePanel, TemplatePanel};
use crate::render::header::HeaderState;
use crate::render::home::{render_home, HomeView};
use crate::render::render_document;
use crate::settings::{FileSettingsStore, SettingsStore};
use crate::theme::ThemeHandle;
use std::sync::Arc;

/// A site wired to its catalogs and data sources.
///
/// Rendering resolves the active templates from the settings fetched for that request.
/// Panels created from the site share one [`ThemeHandle`], so a selection in one panel is
/// visible to everything else holding the handle.
#[derive(Clone)]
pub struct Site {
    config: SiteConfig,
    catalogs: Catalogs,
    settings: Arc<dyn SettingsStore>,
    content: Arc<dyn ContentSource>,
    navigation: Arc<dyn NavigationSource>,
    theme: ThemeHandle,
    notifier: Arc<dyn Notifier>,
}

impl Site {
    pub fn new(
        config: SiteConfig,
        catalogs: Catalogs,
        settings: Arc<dyn SettingsStore>,
        content: Arc<dyn ContentSource>,
        navigation: Arc<dyn NavigationSource>,
    ) -> Self {
        Self {
            config,
            catalogs,
            settings,
            content,
            navigation,
            theme: ThemeHandle::default(),
            notifier: Arc::new(TracingNotifier),
        }
    }

    /// Wire a site to a bundle. Settings come from `settings_path` when configured,
    /// otherwise from the bundle itself.
    pub fn from_bundle(config: SiteConfig, bundle: SiteBundle) -> SiteResult<Self> {
        let catalogs = Catalogs::from_config(&config)?;
        let settings: Arc<dyn SettingsStore> = match &config.settings_path {
            Some(path) => Arc::new(FileSettingsStore::new(path)),
            None => Arc::new(bundle.settings_store(&config.site_id)),
        };
        let bundle = Arc::new(bundle);
        Ok(Self::new(
            config,
            catalogs,
            settings,
            bundle.clone(),
            bundle,
        ))
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    pub fn theme(&self) -> &ThemeHandle {
        &self.theme
    }

    pub fn settings_store(&self) -> Arc<dyn SettingsStore> {
        Arc::clone(&self.settings)
    }

    /// Render the home page as a complete HTML document.
    ///
    /// Settings, content and navigation are fetched concurrently. Settings and navigation
    /// failures degrade to defaults; a content failure renders the error screen.
    pub async fn render_home(&self) -> SiteResult<String> {
        let (settings, page, navigation) = tokio::join!(
            self.settings.get_site_settings(),
            self.content.page(&self.config.page_key),
            self.navigation.navigation(),
        );

        let settings = settings.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "site settings unavailable, using defaults");
            None
        });
        let navigation = navigation.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "navigation unavailable");
            Vec::new()
        });
        let page = PageState::from_fetch(page);

        let active = ActiveTemplates::resolve(&self.catalogs, settings.as_ref());
        tracing::debug!(
            design = %active.design.id,
            structure = %active.structure.id,
            page = %self.config.page_key,
            "rendering home page"
        );

        let body = render_home(
            &HomeView {
                structure: &active.structure,
                settings: settings.as_ref(),
                settings_loading: false,
                navigation: &navigation,
                page: &page,
                admin_path: &self.config.admin_path,
            },
            &HeaderState::new(),
        )?;

        let theme = active.theme_state();
        let title = settings
            .as_ref()
            .and_then(|s| s.site_name.as_deref())
            .unwrap_or("Home");
        Ok(render_document(title, &theme.to_css(), &theme.body_class(), &body))
    }

    pub fn design_panel(&self) -> DesignTemplatePanel {
        TemplatePanel::new(
            Arc::clone(&self.catalogs.design),
            Arc::clone(&self.settings),
            self.theme.clone(),
            Arc::clone(&self.notifier),
        )
    }

    pub fn structure_panel(&self) -> StructureTemplatePanel {
        TemplatePanel::new(
            Arc::clone(&self.catalogs.structure),
            Arc::clone(&self.settings),
            self.theme.clone(),
            Arc::clone(&self.notifier),
        )
    }
}
