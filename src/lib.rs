//! # NullTrace Site
//!
//! Server-side renderer for a template-driven marketing site.
//!
//! ## Features
//! - Design and structure template catalogs with never-failing lookup by id
//! - Template application into CSS custom properties and body classes
//! - Admin template panels with optimistic selection and merge-on-save settings
//! - Five home page composition strategies selected by the structure template
//! - Header with visibility filtering, mobile menu state and logo selection
//!
//! ## Example
//! ```ignore
//! use nulltrace_site::{Site, SiteBundle, SiteConfig};
//!
//! let bundle = SiteBundle::from_yaml(&std::fs::read_to_string("site.yaml")?)?;
//! let site = Site::from_bundle(SiteConfig::default(), bundle)?;
//! let html = site.render_home().await?;
//!
//! site.structure_panel().select("magazine-editorial").await?;
//! ```

pub mod active;
pub mod bundle;
pub mod catalog;
pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod notify;
pub mod panel;
pub mod render;
pub mod settings;
pub mod site;
pub(crate) mod tag;
pub mod theme;

// --- Core types ---
pub use active::ActiveTemplates;
pub use bundle::SiteBundle;
pub use catalog::{lookup_by_id, Catalog, Catalogs, DesignTemplate, StructureTemplate, TemplateDescriptor};
pub use config::SiteConfig;
pub use content::{ContentSource, DynamicSection, NavItem, NavigationSource, PageContent, PageData, PageState};
pub use error::{SiteError, SiteResult};
pub use site::Site;
pub use theme::{ApplyTemplate, ThemeHandle, ThemeState};

// --- Admin ---
pub use notify::{Notification, NotificationKind, NotificationLog, Notifier, TracingNotifier};
pub use panel::{DesignTemplatePanel, PanelState, PendingSave, StructureTemplatePanel, TemplatePanel};
pub use settings::{FileSettingsStore, MemorySettingsStore, SettingsStore, SiteSettings};

// --- Rendering ---
pub use render::home::{compose, Composition, CompositionStrategy};
