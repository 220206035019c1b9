//! Template catalogs: fixed, ordered sets of descriptors selectable by id.
//!
//! The first entry of a catalog is its default. Lookups never fail: an absent or unknown
//! id resolves to that default entry.

pub mod design;
pub mod structure;

use crate::config::SiteConfig;
use crate::error::{SiteError, SiteResult};
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::sync::{Arc, OnceLock};

pub use design::DesignTemplate;
pub use structure::StructureTemplate;

/// Common surface of design and structure descriptors.
pub trait TemplateDescriptor: Clone + fmt::Debug + Serialize + DeserializeOwned {
    /// Catalog name used in error messages ("design", "structure").
    const CATALOG: &'static str;

    fn id(&self) -> &str;
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    /// Single glyph shown on preview cards.
    fn preview(&self) -> &str;
    fn category_tag(&self) -> &'static str;
}

/// Immutable, non-empty, ordered template catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog<T> {
    templates: Vec<T>,
}

impl<T: TemplateDescriptor> Catalog<T> {
    /// Build a catalog, rejecting empty lists, malformed ids and duplicate ids.
    pub fn new(templates: Vec<T>) -> SiteResult<Self> {
        if templates.is_empty() {
            return Err(SiteError::EmptyCatalog {
                catalog: T::CATALOG.to_string(),
            });
        }
        let mut seen = HashSet::new();
        for template in &templates {
            validate_template_id(template.id())?;
            if !seen.insert(template.id()) {
                return Err(SiteError::DuplicateTemplateId {
                    catalog: T::CATALOG.to_string(),
                    id: template.id().to_string(),
                });
            }
        }
        Ok(Self { templates })
    }

    /// Built-in catalogs are authored in code and covered by tests instead of runtime checks.
    pub(crate) fn builtin(templates: Vec<T>) -> Self {
        debug_assert!(!templates.is_empty());
        Self { templates }
    }

    /// Parse a catalog from a YAML list of descriptors.
    pub fn from_yaml(yaml: &str) -> SiteResult<Self> {
        let templates: Vec<T> = serde_yaml::from_str(yaml)?;
        Self::new(templates)
    }

    pub fn load(path: &Path) -> SiteResult<Self> {
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| SiteError::Io(format!("read catalog {}: {}", path.display(), e)))?;
        Self::from_yaml(&yaml)
    }

    /// The first entry, used whenever no valid selection exists.
    pub fn default_template(&self) -> &T {
        &self.templates[0]
    }

    /// Resolve `id` to a descriptor, falling back to the default entry.
    pub fn lookup_by_id(&self, id: Option<&str>) -> &T {
        id.and_then(|id| self.get(id))
            .unwrap_or_else(|| self.default_template())
    }

    /// Strict lookup.
    pub fn get(&self, id: &str) -> Option<&T> {
        self.templates.iter().find(|t| t.id() == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn templates(&self) -> &[T] {
        &self.templates
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.templates.iter()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Always false; catalogs are never empty.
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.id()).collect()
    }
}

/// Free-function form of [`Catalog::lookup_by_id`].
pub fn lookup_by_id<'a, T: TemplateDescriptor>(catalog: &'a Catalog<T>, id: Option<&str>) -> &'a T {
    catalog.lookup_by_id(id)
}

/// Template ids are lowercase kebab-case (`modern-gradient`).
pub fn validate_template_id(id: &str) -> SiteResult<()> {
    static ID_REGEX: OnceLock<Regex> = OnceLock::new();
    let id_regex = ID_REGEX.get_or_init(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap());
    if id_regex.is_match(id) {
        Ok(())
    } else {
        Err(SiteError::InvalidTemplateId { id: id.to_string() })
    }
}

/// Both catalogs the site selects from.
#[derive(Debug, Clone)]
pub struct Catalogs {
    pub design: Arc<Catalog<DesignTemplate>>,
    pub structure: Arc<Catalog<StructureTemplate>>,
}

impl Catalogs {
    pub fn builtin() -> Self {
        Self {
            design: Arc::new(design::builtin_catalog()),
            structure: Arc::new(structure::builtin_catalog()),
        }
    }

    /// Built-in catalogs, each replaced by an operator YAML file when configured.
    pub fn from_config(config: &SiteConfig) -> SiteResult<Self> {
        let design = match &config.design_catalog {
            Some(path) => Catalog::load(path)?,
            None => design::builtin_catalog(),
        };
        let structure = match &config.structure_catalog {
            Some(path) => Catalog::load(path)?,
            None => structure::builtin_catalog(),
        };
        Ok(Self {
            design: Arc::new(design),
            structure: Arc::new(structure),
        })
    }
}

impl Default for Catalogs {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn two_entry_catalog() -> Catalog<DesignTemplate> {
        let yaml = r#"
- id: a
  name: Alpha
  description: First
  preview: "A"
- id: b
  name: Beta
  description: Second
  preview: "B"
"#;
        Catalog::from_yaml(yaml).unwrap()
    }

    #[test]
    fn test_lookup_known_id() {
        let catalog = two_entry_catalog();
        assert_eq!(catalog.lookup_by_id(Some("b")).id, "b");
    }

    #[test]
    fn test_lookup_unknown_or_missing_id_falls_back_to_first() {
        let catalog = two_entry_catalog();
        assert_eq!(catalog.lookup_by_id(Some("z")).id, "a");
        assert_eq!(catalog.lookup_by_id(None).id, "a");
        assert_eq!(lookup_by_id(&catalog, Some("")).id, "a");
    }

    #[test]
    fn test_lookup_is_stable() {
        let catalog = two_entry_catalog();
        assert_eq!(catalog.lookup_by_id(Some("b")), catalog.lookup_by_id(Some("b")));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let result = Catalog::<DesignTemplate>::from_yaml("[]");
        assert!(matches!(result, Err(SiteError::EmptyCatalog { .. })));
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let yaml = "- {id: a, name: A, description: x, preview: x}\n- {id: a, name: B, description: y, preview: y}";
        let result = Catalog::<DesignTemplate>::from_yaml(yaml);
        assert!(matches!(result, Err(SiteError::DuplicateTemplateId { .. })));
    }

    #[test]
    fn test_template_id_format() {
        assert!(validate_template_id("modern-gradient").is_ok());
        assert!(validate_template_id("v2").is_ok());
        for bad in ["", "Modern", "two  words", "trailing-", "-leading", "under_score"] {
            assert!(validate_template_id(bad).is_err(), "should reject '{}'", bad);
        }
    }

    #[test]
    fn test_builtin_catalogs_pass_validation() {
        let catalogs = Catalogs::builtin();
        assert!(Catalog::new(catalogs.design.templates().to_vec()).is_ok());
        assert!(Catalog::new(catalogs.structure.templates().to_vec()).is_ok());
    }
}
