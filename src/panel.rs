//! Admin template panels.
//!
//! One state machine serves both the design and the structure panel; [`PanelKind`] supplies
//! the parts that differ (settings field, messages, preview markup).
//!
//! Selection is two-phase. [`TemplatePanel::begin_select`] applies the template locally and
//! returns a [`PendingSave`]; [`PendingSave::persist`] merges the id into the settings
//! record fetched fresh from the store. A failed save is reported but the applied template
//! stays in place. Saves are not cancelled: a second selection starts a second
//! read-modify-write and the last one to finish wins.

use crate::catalog::design::DesignTemplate;
use crate::catalog::structure::{HeroArrangement, NavigationMode, StructureTemplate};
use crate::catalog::{Catalog, TemplateDescriptor};
use crate::error::SiteResult;
use crate::notify::{Notification, NotificationKind, Notifier};
use crate::render::escape_html;
use crate::settings::{SettingsStore, SiteSettings};
use crate::theme::{ApplyTemplate, ThemeHandle};
use std::fmt::Write;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// What distinguishes one template panel from another.
pub trait PanelKind: Send + Sync + 'static {
    type Template: TemplateDescriptor + ApplyTemplate + Send + Sync + 'static;

    /// Notification key; a new notification replaces the previous one with the same key.
    const KEY: &'static str;
    const TITLE: &'static str;
    const INTRO: &'static str;
    const SAVING: &'static str;
    const SAVED: &'static str;
    const FAILED: &'static str;

    /// Template id recorded in the settings.
    fn stored_id(settings: &SiteSettings) -> Option<&str>;

    /// Settings update recording `id`.
    fn assign(id: &str) -> SiteSettings;

    /// Category badge markup.
    fn render_badge(template: &Self::Template, out: &mut String) -> std::fmt::Result;

    /// Swatches illustrating what the template changes.
    fn render_preview(template: &Self::Template, out: &mut String) -> std::fmt::Result;

    fn feature_tags(template: &Self::Template) -> [&'static str; 3];
}

/// Design templates: stored as `designTemplate`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DesignPanel;

impl PanelKind for DesignPanel {
    type Template = DesignTemplate;

    const KEY: &'static str = "design-template";
    const TITLE: &'static str = "Website Design Templates";
    const INTRO: &'static str = "Choose a design template that defines the overall look and feel of your website.";
    const SAVING: &'static str = "Saving design template...";
    const SAVED: &'static str = "Design template updated successfully!";
    const FAILED: &'static str = "Error saving design template";

    fn stored_id(settings: &SiteSettings) -> Option<&str> {
        settings.design_template.as_deref()
    }

    fn assign(id: &str) -> SiteSettings {
        SiteSettings {
            design_template: Some(id.to_string()),
            ..Default::default()
        }
    }

    fn render_badge(template: &DesignTemplate, out: &mut String) -> std::fmt::Result {
        write!(
            out,
            "<span class=\"badge {} text-xs\"><span data-icon=\"{}\"></span><span class=\"ml-1 capitalize\">{}</span></span>",
            template.category.badge_class(),
            template.category.icon(),
            template.category
        )
    }

    fn render_preview(template: &DesignTemplate, out: &mut String) -> std::fmt::Result {
        let c = &template.components;
        write!(
            out,
            "<div class=\"bg-gray-100 rounded-lg p-3\"><div class=\"text-xs text-gray-500 mb-2\">Hero Style</div><div class=\"h-16 rounded {} flex items-center justify-center\"><div class=\"text-white text-xs font-bold {}\">Hero Section</div></div></div>",
            c.hero.style.preview_class(),
            c.hero.text_alignment.preview_class()
        )?;
        write!(
            out,
            "<div class=\"bg-gray-100 rounded-lg p-3\"><div class=\"text-xs text-gray-500 mb-2\">Card Style</div><div class=\"grid grid-cols-3 gap-2\">"
        )?;
        for _ in 0..3 {
            write!(
                out,
                "<div class=\"h-8 bg-white {} {} {}\"></div>",
                c.cards.border_radius.card_class(),
                c.cards.shadow.preview_class(),
                c.cards.style.preview_class()
            )?;
        }
        write!(out, "</div></div>")?;
        write!(
            out,
            "<div class=\"bg-gray-100 rounded-lg p-3\"><div class=\"text-xs text-gray-500 mb-2\">Button Style</div><div class=\"flex space-x-2\"><div class=\"px-3 py-1 text-xs text-white {} {}\">Button</div></div></div>",
            c.buttons.style.preview_class(),
            c.buttons.border_radius.button_class()
        )
    }

    fn feature_tags(template: &DesignTemplate) -> [&'static str; 3] {
        let c = &template.components;
        [
            c.hero.style.as_str(),
            c.cards.style.as_str(),
            c.sections.spacing.as_str(),
        ]
    }
}

/// Structure templates: stored as `websiteTemplate`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructurePanel;

impl PanelKind for StructurePanel {
    type Template = StructureTemplate;

    const KEY: &'static str = "website-template";
    const TITLE: &'static str = "Website Structure Templates";
    const INTRO: &'static str = "Choose a website structure template that changes the layout and organization of all your pages.";
    const SAVING: &'static str = "Applying website template...";
    const SAVED: &'static str = "Website template applied successfully!";
    const FAILED: &'static str = "Error applying website template";

    fn stored_id(settings: &SiteSettings) -> Option<&str> {
        settings.website_template.as_deref()
    }

    fn assign(id: &str) -> SiteSettings {
        SiteSettings {
            website_template: Some(id.to_string()),
            ..Default::default()
        }
    }

    fn render_badge(template: &StructureTemplate, out: &mut String) -> std::fmt::Result {
        write!(
            out,
            "<span class=\"badge {} text-xs\"><span class=\"capitalize\">{}</span></span>",
            template.category.badge_class(),
            template.category
        )
    }

    fn render_preview(template: &StructureTemplate, out: &mut String) -> std::fmt::Result {
        let s = &template.structure;
        write!(
            out,
            "<div class=\"bg-gray-50 rounded-lg p-3\"><div class=\"text-xs text-gray-500 mb-2\">Layout Structure</div><div class=\"grid gap-1 {}\">",
            s.layout.preview_class()
        )?;
        for (span, class) in s.layout.preview_tiles() {
            if *span > 1 {
                write!(out, "<div class=\"col-span-{} {} rounded-sm\"></div>", span, class)?;
            } else {
                write!(out, "<div class=\"{} rounded-sm\"></div>", class)?;
            }
        }
        write!(out, "</div></div>")?;

        let bar = if s.navigation == NavigationMode::Side {
            "h-2 w-8"
        } else {
            "h-2 w-6"
        };
        write!(
            out,
            "<div class=\"bg-gray-50 rounded-lg p-3\"><div class=\"text-xs text-gray-500 mb-2\">Navigation: {}</div><div class=\"{}\">",
            s.navigation,
            s.navigation.preview_class()
        )?;
        for _ in 0..4 {
            write!(out, "<div class=\"bg-gray-300 {} rounded-sm\"></div>", bar)?;
        }
        write!(out, "</div></div>")?;

        write!(
            out,
            "<div class=\"bg-gray-50 rounded-lg p-3\"><div class=\"text-xs text-gray-500 mb-2\">Hero: {}</div><div class=\"{} rounded-sm\">",
            s.hero_style,
            s.hero_style.preview_class()
        )?;
        if s.hero_style == HeroArrangement::Split {
            write!(
                out,
                "<div class=\"bg-gray-300 rounded-sm\"></div><div class=\"bg-gray-200 rounded-sm\"></div>"
            )?;
        }
        write!(out, "</div></div>")
    }

    fn feature_tags(template: &StructureTemplate) -> [&'static str; 3] {
        [
            template.structure.layout.as_str(),
            template.structure.hero_style.as_str(),
            template.pages.home.grid_style.as_str(),
        ]
    }
}

pub type DesignTemplatePanel = TemplatePanel<DesignPanel>;
pub type StructureTemplatePanel = TemplatePanel<StructurePanel>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelState {
    Idle { selected: String },
    /// At least one save is in flight.
    Saving { selected: String },
}

impl PanelState {
    pub fn selected(&self) -> &str {
        match self {
            PanelState::Idle { selected } | PanelState::Saving { selected } => selected,
        }
    }
}

#[derive(Debug)]
struct PanelInner {
    selected: String,
    in_flight: usize,
}

/// Template picker backed by a catalog, a settings store and the shared theme.
///
/// Clones share state, so a clone can be moved into a spawned save.
pub struct TemplatePanel<K: PanelKind> {
    catalog: Arc<Catalog<K::Template>>,
    store: Arc<dyn SettingsStore>,
    theme: ThemeHandle,
    notifier: Arc<dyn Notifier>,
    inner: Arc<Mutex<PanelInner>>,
    alive: Arc<AtomicBool>,
    _kind: PhantomData<fn() -> K>,
}

impl<K: PanelKind> Clone for TemplatePanel<K> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            store: Arc::clone(&self.store),
            theme: self.theme.clone(),
            notifier: Arc::clone(&self.notifier),
            inner: Arc::clone(&self.inner),
            alive: Arc::clone(&self.alive),
            _kind: PhantomData,
        }
    }
}

impl<K: PanelKind> TemplatePanel<K> {
    /// A panel with the catalog default selected. Nothing is applied until [`mount`](Self::mount).
    pub fn new(
        catalog: Arc<Catalog<K::Template>>,
        store: Arc<dyn SettingsStore>,
        theme: ThemeHandle,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let selected = catalog.default_template().id().to_string();
        Self {
            catalog,
            store,
            theme,
            notifier,
            inner: Arc::new(Mutex::new(PanelInner {
                selected,
                in_flight: 0,
            })),
            alive: Arc::new(AtomicBool::new(true)),
            _kind: PhantomData,
        }
    }

    /// Load the stored template id and apply it.
    ///
    /// Ids missing from the catalog resolve to the default. A failed read is logged and
    /// leaves the default selected.
    pub async fn mount(&self) {
        let settings = match self.store.get_site_settings().await {
            Ok(settings) => settings,
            Err(e) => {
                tracing::error!(panel = K::KEY, error = %e, "failed to load template setting");
                return;
            }
        };
        if !self.is_mounted() {
            tracing::debug!(panel = K::KEY, "panel unmounted before settings loaded");
            return;
        }
        let Some(stored) = settings.as_ref().and_then(K::stored_id) else {
            return;
        };
        let template = self.catalog.lookup_by_id(Some(stored));
        if template.id() != stored {
            tracing::warn!(panel = K::KEY, stored, fallback = template.id(), "stored template not in catalog");
        }
        self.lock().selected = template.id().to_string();
        self.theme.apply(template);
    }

    /// Select and apply `id` immediately; the returned save still has to be persisted.
    pub fn begin_select(&self, id: &str) -> PendingSave<K> {
        let template = self.catalog.lookup_by_id(Some(id));
        let resolved = template.id().to_string();
        {
            let mut inner = self.lock();
            inner.selected = resolved.clone();
            inner.in_flight += 1;
        }
        self.theme.apply(template);
        self.notify(NotificationKind::Loading, K::SAVING);
        tracing::debug!(panel = K::KEY, template = %resolved, "template applied locally");
        PendingSave {
            panel: self.clone(),
            id: resolved,
        }
    }

    /// Select `id` and wait for it to be persisted.
    pub async fn select(&self, id: &str) -> SiteResult<()> {
        self.begin_select(id).persist().await
    }

    /// Stop reporting. Saves still in flight complete silently.
    pub fn unmount(&self) {
        self.alive.store(false, Ordering::SeqCst);
    }

    pub fn is_mounted(&self) -> bool {
        self.alive.load(Ordering::SeqCst)
    }

    pub fn state(&self) -> PanelState {
        let inner = self.lock();
        let selected = inner.selected.clone();
        if inner.in_flight > 0 {
            PanelState::Saving { selected }
        } else {
            PanelState::Idle { selected }
        }
    }

    pub fn selected_id(&self) -> String {
        self.lock().selected.clone()
    }

    pub fn is_saving(&self) -> bool {
        self.lock().in_flight > 0
    }

    pub fn current_template(&self) -> K::Template {
        let selected = self.selected_id();
        self.catalog.lookup_by_id(Some(&selected)).clone()
    }

    pub fn catalog(&self) -> &Catalog<K::Template> {
        &self.catalog
    }

    /// Panel markup: one preview card per template plus the current template summary.
    pub fn render(&self) -> SiteResult<String> {
        let selected = self.selected_id();
        let mut out = String::new();
        write!(
            out,
            "<div class=\"template-panel\" data-panel=\"{}\"><div class=\"card-header\"><h3 class=\"card-title\">{}</h3><p class=\"text-sm text-gray-600\">{}</p></div><div class=\"card-content space-y-6\"><div class=\"grid grid-cols-1 md:grid-cols-2 gap-6\">",
            K::KEY,
            K::TITLE,
            K::INTRO
        )?;
        for template in self.catalog.iter() {
            render_card::<K>(template, template.id() == selected, &mut out)?;
        }
        write!(out, "</div>")?;

        let current = self.catalog.lookup_by_id(Some(&selected));
        write!(
            out,
            "<div class=\"current-template bg-green-50 border border-green-200 rounded-lg p-4\"><h4 class=\"font-semibold text-green-900 mb-2\">Current Template:</h4><div class=\"flex items-center space-x-3\"><span class=\"text-2xl\">{}</span><div><span class=\"text-green-800 font-medium\">{}</span>",
            escape_html(current.preview()),
            escape_html(current.name())
        )?;
        K::render_badge(current, &mut out)?;
        write!(
            out,
            "</div></div><p class=\"text-sm text-green-700 mt-2\">{}</p></div></div></div>",
            escape_html(current.description())
        )?;
        Ok(out)
    }

    fn notify(&self, kind: NotificationKind, message: &str) {
        self.notifier.notify(Notification {
            key: K::KEY,
            kind,
            message: message.to_string(),
        });
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, PanelInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn render_card<K: PanelKind>(
    template: &K::Template,
    selected: bool,
    out: &mut String,
) -> std::fmt::Result {
    let border = if selected {
        "border-orange-400 shadow-lg ring-2 ring-orange-100"
    } else {
        "border-gray-200 hover:border-gray-300 hover:shadow-md"
    };
    write!(
        out,
        "<div class=\"template-card relative p-6 rounded-xl border-2 cursor-pointer transition-all duration-300 {}\" data-template-id=\"{}\" aria-selected=\"{}\">",
        border,
        escape_html(template.id()),
        selected
    )?;
    if selected {
        write!(
            out,
            "<div class=\"absolute top-3 right-3 w-6 h-6 bg-green-500 rounded-full flex items-center justify-center\"><span data-icon=\"check\"></span></div>"
        )?;
    }
    write!(
        out,
        "<div class=\"space-y-4\"><div class=\"flex items-center space-x-2\"><span class=\"text-3xl\">{}</span><div><h3 class=\"font-bold text-gray-900\">{}</h3>",
        escape_html(template.preview()),
        escape_html(template.name())
    )?;
    K::render_badge(template, out)?;
    write!(
        out,
        "</div></div><p class=\"text-sm text-gray-600\">{}</p><div class=\"space-y-3\">",
        escape_html(template.description())
    )?;
    K::render_preview(template, out)?;
    write!(out, "</div><div class=\"flex flex-wrap gap-1\">")?;
    for tag in K::feature_tags(template) {
        write!(out, "<span class=\"badge badge-outline text-xs\">{}</span>", tag)?;
    }
    write!(out, "</div></div></div>")
}

/// A selection that has been applied locally but not yet written to the store.
#[must_use = "the selection is not saved until `persist` is awaited"]
pub struct PendingSave<K: PanelKind> {
    panel: TemplatePanel<K>,
    id: String,
}

impl<K: PanelKind> PendingSave<K> {
    pub fn template_id(&self) -> &str {
        &self.id
    }

    /// Merge the selected id into freshly read settings and write them back.
    ///
    /// The outcome is reported through the panel's notifier unless the panel was unmounted
    /// in the meantime. The locally applied template is kept either way.
    pub async fn persist(self) -> SiteResult<()> {
        let store = Arc::clone(&self.panel.store);
        let result = async {
            let current = store.get_site_settings().await?.unwrap_or_default();
            let merged = current.merged(&K::assign(&self.id));
            store.update_site_settings(&merged).await
        }
        .await;

        if !self.panel.is_mounted() {
            tracing::debug!(panel = K::KEY, template = %self.id, ok = result.is_ok(), "save finished after unmount");
            return result;
        }

        {
            let mut inner = self.panel.lock();
            inner.in_flight = inner.in_flight.saturating_sub(1);
        }
        match &result {
            Ok(()) => {
                tracing::info!(panel = K::KEY, template = %self.id, "template saved");
                self.panel.notify(NotificationKind::Success, K::SAVED);
            }
            Err(e) => {
                tracing::error!(panel = K::KEY, template = %self.id, error = %e, "failed to save template");
                self.panel.notify(NotificationKind::Error, K::FAILED);
            }
        }
        result
    }
}
