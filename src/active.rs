use crate::catalog::structure::{HomeLayout, NavigationMode};
use crate::catalog::{Catalogs, DesignTemplate, StructureTemplate};
use crate::settings::SiteSettings;
use crate::theme::ThemeState;

/// The design and structure templates in effect, resolved from settings.
///
/// Exactly one of each is active. Missing settings or ids that left the catalog resolve
/// to the catalog's first entry. Passed explicitly to the composer and header.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveTemplates {
    pub design: DesignTemplate,
    pub structure: StructureTemplate,
}

impl ActiveTemplates {
    pub fn resolve(catalogs: &Catalogs, settings: Option<&SiteSettings>) -> Self {
        let design_id = settings.and_then(|s| s.design_template.as_deref());
        let structure_id = settings.and_then(|s| s.website_template.as_deref());
        Self {
            design: catalogs.design.lookup_by_id(design_id).clone(),
            structure: catalogs.structure.lookup_by_id(structure_id).clone(),
        }
    }

    pub fn navigation(&self) -> NavigationMode {
        self.structure.navigation()
    }

    pub fn home_layout(&self) -> HomeLayout {
        self.structure.home_layout()
    }

    /// Presentation state with both templates applied.
    pub fn theme_state(&self) -> ThemeState {
        let mut state = ThemeState::new();
        state.apply(&self.design);
        state.apply(&self.structure);
        state
    }
}
