use crate::error::SiteResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque block payload, passed through to the matching leaf renderer.
pub type Block = Value;

/// Content of one page. Every block is optional; `null` counts as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero: Option<HeroBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro: Option<Block>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub services: Option<Block>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub features: Option<Block>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<Block>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gallery: Option<Block>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cta: Option<Block>,
}

/// Hero payload. The named fields feed the split and minimal hero variants; anything
/// else is kept for the shared hero renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_button_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_button_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_button_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_button_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Content blocks the composer knows how to place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Hero,
    Intro,
    Services,
    Features,
    Stats,
    Gallery,
    /// Self-sourcing; rendered regardless of page content.
    Testimonials,
    Cta,
}

impl BlockKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Hero => "hero",
            BlockKind::Intro => "intro",
            BlockKind::Services => "services",
            BlockKind::Features => "features",
            BlockKind::Stats => "stats",
            BlockKind::Gallery => "gallery",
            BlockKind::Testimonials => "testimonials",
            BlockKind::Cta => "cta",
        }
    }
}

impl PageContent {
    /// Whether the block should be rendered.
    pub fn has(&self, kind: BlockKind) -> bool {
        match kind {
            BlockKind::Hero => self.hero.is_some(),
            BlockKind::Testimonials => true,
            other => self.payload(other).is_some(),
        }
    }

    /// Opaque payload for non-hero blocks.
    pub fn payload(&self, kind: BlockKind) -> Option<&Block> {
        match kind {
            BlockKind::Intro => self.intro.as_ref(),
            BlockKind::Services => self.services.as_ref(),
            BlockKind::Features => self.features.as_ref(),
            BlockKind::Stats => self.stats.as_ref(),
            BlockKind::Gallery => self.gallery.as_ref(),
            BlockKind::Cta => self.cta.as_ref(),
            BlockKind::Hero | BlockKind::Testimonials => None,
        }
    }
}

/// Free-form section appended by the operator. Only `id` is interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DynamicSection {
    pub id: String,
    #[serde(flatten)]
    pub payload: Map<String, Value>,
}

/// Everything fetched for one page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageData {
    /// `None` when the page record exists but has no content yet.
    #[serde(default)]
    pub content: Option<PageContent>,
    #[serde(default)]
    pub sections: Vec<DynamicSection>,
}

/// Navigation entry. A missing `visible` flag means visible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub href: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

impl NavItem {
    pub fn new(href: &str, label: &str) -> Self {
        Self {
            href: href.to_string(),
            label: label.to_string(),
            visible: None,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.visible != Some(false)
    }
}

/// Content loading state of a page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageState {
    Loading,
    /// The fetch failed.
    Error(String),
    /// The fetch succeeded but no content record exists.
    Empty,
    Ready {
        content: PageContent,
        sections: Vec<DynamicSection>,
    },
}

impl PageState {
    pub fn from_fetch(result: SiteResult<Option<PageData>>) -> Self {
        match result {
            Err(e) => PageState::Error(e.to_string()),
            Ok(None) => PageState::Empty,
            Ok(Some(PageData { content: None, .. })) => PageState::Empty,
            Ok(Some(PageData {
                content: Some(content),
                sections,
            })) => PageState::Ready { content, sections },
        }
    }
}

/// Page content source, keyed by page name.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// `Ok(None)` when the page does not exist.
    async fn page(&self, page_key: &str) -> SiteResult<Option<PageData>>;
}

#[async_trait]
pub trait NavigationSource: Send + Sync {
    /// Ordered navigation items.
    async fn navigation(&self) -> SiteResult<Vec<NavItem>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiteError;

    #[test]
    fn test_null_blocks_are_absent() {
        let yaml = "hero: ~\nintro: {title: Welcome}\nstats: null\n";
        let content: PageContent = serde_yaml::from_str(yaml).unwrap();
        assert!(!content.has(BlockKind::Hero));
        assert!(content.has(BlockKind::Intro));
        assert!(!content.has(BlockKind::Stats));
        assert!(content.has(BlockKind::Testimonials));
    }

    #[test]
    fn test_hero_keeps_unknown_fields() {
        let yaml = "title: Train Hard\nprimaryButtonText: Join\nbadge: New\n";
        let hero: HeroBlock = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(hero.title.as_deref(), Some("Train Hard"));
        assert_eq!(hero.primary_button_text.as_deref(), Some("Join"));
        assert_eq!(hero.extra["badge"], "New");
    }

    #[test]
    fn test_dynamic_section_payload_is_opaque() {
        let yaml = "id: promo\ntitle: Summer\nitems: [1, 2]\n";
        let section: DynamicSection = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(section.id, "promo");
        assert_eq!(section.payload.len(), 2);
    }

    #[test]
    fn test_nav_item_visibility() {
        let mut item = NavItem::new("/about", "About");
        assert!(item.is_visible());
        item.visible = Some(true);
        assert!(item.is_visible());
        item.visible = Some(false);
        assert!(!item.is_visible());
    }

    #[test]
    fn test_page_state_from_fetch() {
        assert!(matches!(
            PageState::from_fetch(Err(SiteError::ContentFetch {
                page: "home".to_string(),
                reason: "offline".to_string()
            })),
            PageState::Error(_)
        ));
        assert_eq!(PageState::from_fetch(Ok(None)), PageState::Empty);
        assert_eq!(
            PageState::from_fetch(Ok(Some(PageData::default()))),
            PageState::Empty
        );
        let ready = PageState::from_fetch(Ok(Some(PageData {
            content: Some(PageContent::default()),
            sections: vec![],
        })));
        assert!(matches!(ready, PageState::Ready { .. }));
    }
}
