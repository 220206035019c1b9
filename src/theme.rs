use crate::catalog::{DesignTemplate, StructureTemplate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Presentation state produced by applying templates: CSS custom properties plus the
/// body classes that select template-specific rules.
///
/// Variables and classes are keyed, so applying a template overwrites whatever the
/// previous template of the same kind wrote and applying the same template twice is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThemeState {
    pub variables: BTreeMap<String, String>,
    /// Class per slot ("design", "website", "navigation").
    pub classes: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub design_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structure_id: Option<String>,
}

/// A descriptor that knows how to push itself into [`ThemeState`].
pub trait ApplyTemplate {
    fn apply_to(&self, state: &mut ThemeState);
}

impl ThemeState {
    /// Create a new empty theme state
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, template: &impl ApplyTemplate) {
        template.apply_to(self);
    }

    pub fn set_var(&mut self, name: &str, value: &str) {
        self.variables.insert(name.to_string(), value.to_string());
    }

    pub fn var(&self, name: &str) -> Option<&str> {
        self.variables.get(name).map(|v| v.as_str())
    }

    pub fn set_class(&mut self, slot: &str, class: String) {
        self.classes.insert(slot.to_string(), class);
    }

    /// `:root` rule declaring every variable.
    pub fn to_css(&self) -> String {
        if self.variables.is_empty() {
            return String::new();
        }
        let mut css = String::from(":root{");
        for (name, value) in &self.variables {
            css.push_str(name);
            css.push(':');
            css.push_str(value);
            css.push(';');
        }
        css.push('}');
        css
    }

    pub fn body_class(&self) -> String {
        self.classes
            .values()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl ApplyTemplate for DesignTemplate {
    fn apply_to(&self, state: &mut ThemeState) {
        let c = &self.components;
        state.set_var("--hero-background", c.hero.style.background_css());
        state.set_var("--hero-text-align", c.hero.text_alignment.as_str());
        state.set_var("--card-radius", c.cards.border_radius.css());
        state.set_var("--card-shadow", c.cards.shadow.css());
        state.set_var("--card-border", c.cards.style.border_css());
        state.set_var("--card-transform", c.cards.style.transform_css());
        state.set_var("--button-background", c.buttons.style.background_css());
        state.set_var("--button-radius", c.buttons.border_radius.css());
        state.set_var("--section-padding", c.sections.spacing.section_padding_css());
        state.set_class("design", format!("design-template-{}", self.id));
        state.design_id = Some(self.id.clone());
    }
}

impl ApplyTemplate for StructureTemplate {
    fn apply_to(&self, state: &mut ThemeState) {
        let s = &self.structure;
        state.set_var("--layout", s.layout.as_str());
        state.set_var("--navigation", s.navigation.as_str());
        state.set_var("--hero-arrangement", s.hero_style.as_str());
        state.set_var("--home-grid", self.pages.home.grid_style.as_str());
        state.set_class("website", format!("website-template-{}", self.id));
        state.set_class("navigation", format!("nav-{}", s.navigation));
        state.structure_id = Some(self.id.clone());
    }
}

/// Shared, mutable presentation state.
///
/// Panels apply templates through a handle; the renderer reads snapshots. Cloning the
/// handle shares the same state.
#[derive(Debug, Clone, Default)]
pub struct ThemeHandle {
    inner: Arc<RwLock<ThemeState>>,
}

impl ThemeHandle {
    pub fn new(state: ThemeState) -> Self {
        Self {
            inner: Arc::new(RwLock::new(state)),
        }
    }

    pub fn apply(&self, template: &impl ApplyTemplate) {
        let mut state = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        state.apply(template);
    }

    pub fn snapshot(&self) -> ThemeState {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{design, structure};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn test_apply_design_sets_variables_and_class() {
        let catalog = design::builtin_catalog();
        let mut state = ThemeState::new();
        state.apply(catalog.default_template());

        assert_eq!(state.var("--card-radius"), Some("0.5rem"));
        assert_eq!(state.design_id.as_deref(), Some("modern-gradient"));
        assert_eq!(state.body_class(), "design-template-modern-gradient");
    }

    #[test]
    fn test_apply_replaces_previous_template_of_same_kind() {
        let catalog = design::builtin_catalog();
        let mut state = ThemeState::new();
        state.apply(catalog.lookup_by_id(Some("modern-gradient")));
        state.apply(catalog.lookup_by_id(Some("minimal-clean")));

        let mut fresh = ThemeState::new();
        fresh.apply(catalog.lookup_by_id(Some("minimal-clean")));
        assert_eq!(state, fresh);
    }

    #[test]
    fn test_design_and_structure_coexist() {
        let mut state = ThemeState::new();
        state.apply(design::builtin_catalog().default_template());
        state.apply(structure::builtin_catalog().lookup_by_id(Some("dynamic-interactive")));

        assert_eq!(
            state.body_class(),
            "design-template-modern-gradient nav-side website-template-dynamic-interactive"
        );
        assert_eq!(state.var("--navigation"), Some("side"));
    }

    #[test]
    fn test_to_css() {
        let mut state = ThemeState::new();
        assert_eq!(state.to_css(), "");
        state.set_var("--b", "2");
        state.set_var("--a", "1");
        assert_eq!(state.to_css(), ":root{--a:1;--b:2;}");
    }

    #[test]
    fn test_handle_shares_state() {
        let handle = ThemeHandle::default();
        let other = handle.clone();
        other.apply(structure::builtin_catalog().default_template());
        assert_eq!(handle.snapshot().structure_id.as_deref(), Some("standard-business"));
    }

    proptest! {
        #[test]
        fn prop_apply_is_idempotent(design_idx in 0usize..6, structure_idx in 0usize..5) {
            let designs = design::builtin_catalog();
            let structures = structure::builtin_catalog();
            let d = &designs.templates()[design_idx];
            let s = &structures.templates()[structure_idx];

            let mut once = ThemeState::new();
            once.apply(d);
            once.apply(s);

            let mut twice = once.clone();
            twice.apply(d);
            twice.apply(s);

            prop_assert_eq!(once, twice);
        }
    }
}
