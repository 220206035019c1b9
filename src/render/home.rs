//! Home page composer.
//!
//! Composition happens in two steps. [`compose`] picks a strategy from the active structure
//! template and lays the present content blocks out as a [`Composition`] tree; rendering
//! then walks the tree and emits HTML. Keeping the tree separate lets callers inspect the
//! arrangement (see [`Composition::outline`]) without parsing markup.
//!
//! A block appears iff its content field is present. Testimonials are the exception and
//! appear in every strategy.

use super::blocks::{
    render_block, render_button, render_dynamic_section, render_fallback, render_footer,
    render_hero, render_skeleton, render_testimonials,
};
use super::header::{render_header, HeaderInput, HeaderState};
use super::{css_url, escape_html};
use crate::catalog::structure::{HomeLayout, NavigationMode, StructureTemplate};
use crate::content::{BlockKind, DynamicSection, NavItem, PageContent, PageState};
use crate::error::SiteResult;
use crate::settings::SiteSettings;
use std::collections::HashSet;
use std::fmt::Write;

/// Blocks in the standard stack. `None` marks where dynamic sections go.
const STANDARD_ORDER: &[Option<BlockKind>] = &[
    Some(BlockKind::Intro),
    Some(BlockKind::Services),
    Some(BlockKind::Features),
    Some(BlockKind::Stats),
    None,
    Some(BlockKind::Testimonials),
    Some(BlockKind::Gallery),
    Some(BlockKind::Cta),
];

/// Body order for the grid-like strategies and the fullscreen section list.
const GRID_ORDER: &[Option<BlockKind>] = &[
    Some(BlockKind::Intro),
    Some(BlockKind::Services),
    Some(BlockKind::Features),
    Some(BlockKind::Testimonials),
    Some(BlockKind::Stats),
    None,
    Some(BlockKind::Gallery),
    Some(BlockKind::Cta),
];

/// Fixed overlay menu shown by the magazine strategy.
pub const OVERLAY_LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/about", "About"),
    ("/services", "Services"),
    ("/why", "Why Us"),
    ("/contact", "Contact"),
    ("/join", "Join"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositionStrategy {
    Standard,
    SplitHero,
    Fullscreen,
    Magazine,
    Minimal,
}

impl CompositionStrategy {
    pub const ALL: &'static [CompositionStrategy] = &[
        CompositionStrategy::Standard,
        CompositionStrategy::SplitHero,
        CompositionStrategy::Fullscreen,
        CompositionStrategy::Magazine,
        CompositionStrategy::Minimal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CompositionStrategy::Standard => "standard",
            CompositionStrategy::SplitHero => "split-hero",
            CompositionStrategy::Fullscreen => "fullscreen",
            CompositionStrategy::Magazine => "magazine",
            CompositionStrategy::Minimal => "minimal",
        }
    }
}

impl From<HomeLayout> for CompositionStrategy {
    fn from(layout: HomeLayout) -> Self {
        match layout {
            HomeLayout::Standard => CompositionStrategy::Standard,
            HomeLayout::SplitHeroGrid => CompositionStrategy::SplitHero,
            HomeLayout::FullscreenSections => CompositionStrategy::Fullscreen,
            HomeLayout::MagazineStyle => CompositionStrategy::Magazine,
            HomeLayout::HeroIntroStatsTestimonials => CompositionStrategy::Minimal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroVariant {
    /// The shared hero component.
    Shared,
    /// Text pane beside a background-image pane.
    SplitPane,
    /// Large type, primary button only.
    Minimal,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Hero(HeroVariant),
    /// Any non-hero block, testimonials included.
    Block(BlockKind),
    /// Dynamic section at `index` in the page's section list.
    Dynamic { index: usize, id: String },
    /// Full-viewport section with an anchor id.
    Section {
        anchor: String,
        tabbed: bool,
        child: Box<Node>,
    },
    /// Fixed side-dot strip linking to section anchors.
    SideDots(Vec<String>),
    OverlayNav,
    /// Children each wrapped in a masonry item.
    Masonry(Vec<Node>),
    Group {
        class: &'static str,
        children: Vec<Node>,
    },
}

impl Node {
    fn collect_outline(&self, out: &mut Vec<String>) {
        match self {
            Node::Hero(_) => out.push("hero".to_string()),
            Node::Block(kind) => out.push(kind.as_str().to_string()),
            Node::Dynamic { id, .. } => out.push(format!("dynamic:{}", id)),
            Node::Section { child, .. } => child.collect_outline(out),
            Node::SideDots(_) => out.push("side-dots".to_string()),
            Node::OverlayNav => out.push("overlay-nav".to_string()),
            Node::Masonry(children) | Node::Group { children, .. } => {
                for child in children {
                    child.collect_outline(out);
                }
            }
        }
    }

    fn collect_anchors<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Node::Section { anchor, .. } => out.push(anchor),
            Node::Masonry(children) | Node::Group { children, .. } => {
                for child in children {
                    child.collect_anchors(out);
                }
            }
            _ => {}
        }
    }
}

/// Arrangement of one page's content under one strategy.
#[derive(Debug, Clone, PartialEq)]
pub struct Composition {
    pub strategy: CompositionStrategy,
    pub nodes: Vec<Node>,
}

impl Composition {
    /// Rendered leaves in document order: block names, `dynamic:{id}`, `side-dots`, `overlay-nav`.
    pub fn outline(&self) -> Vec<String> {
        let mut out = Vec::new();
        for node in &self.nodes {
            node.collect_outline(&mut out);
        }
        out
    }

    /// Anchor ids of full-viewport sections, in document order.
    pub fn anchors(&self) -> Vec<&str> {
        let mut out = Vec::new();
        for node in &self.nodes {
            node.collect_anchors(&mut out);
        }
        out
    }
}

/// Lay out `content` and `sections` for the structure template's home layout.
pub fn compose(
    content: &PageContent,
    sections: &[DynamicSection],
    structure: &StructureTemplate,
) -> Composition {
    let strategy = CompositionStrategy::from(structure.home_layout());
    let navigation = structure.navigation();
    let dynamic = distinct_sections(sections);
    tracing::debug!(
        strategy = strategy.as_str(),
        template = %structure.id,
        sections = dynamic.len(),
        "composing home page"
    );

    let body = |order: &[Option<BlockKind>]| -> Vec<Node> {
        let mut nodes = Vec::new();
        for slot in order {
            match slot {
                Some(kind) if content.has(*kind) => nodes.push(Node::Block(*kind)),
                Some(_) => {}
                None => nodes.extend(dynamic.iter().cloned()),
            }
        }
        nodes
    };

    let mut nodes = Vec::new();
    match strategy {
        CompositionStrategy::Standard => {
            if content.has(BlockKind::Hero) {
                nodes.push(Node::Hero(HeroVariant::Shared));
            }
            nodes.extend(body(STANDARD_ORDER));
        }
        CompositionStrategy::SplitHero => {
            if content.has(BlockKind::Hero) {
                nodes.push(Node::Hero(HeroVariant::SplitPane));
            }
            nodes.push(Node::Group {
                class: "masonry-container p-8",
                children: vec![Node::Masonry(body(GRID_ORDER))],
            });
        }
        CompositionStrategy::Fullscreen => {
            let mut main = Vec::new();
            if content.has(BlockKind::Hero) {
                main.push(Node::Section {
                    anchor: BlockKind::Hero.as_str().to_string(),
                    tabbed: false,
                    child: Box::new(Node::Hero(HeroVariant::Shared)),
                });
            }
            let tabbed: Vec<Node> = body(GRID_ORDER).into_iter().map(full_viewport).collect();
            main.push(Node::Group {
                class: "tabbed-content-container",
                children: tabbed,
            });

            if navigation == NavigationMode::Side {
                let anchors = main
                    .iter()
                    .flat_map(|node| {
                        let mut found = Vec::new();
                        node.collect_anchors(&mut found);
                        found.into_iter().map(str::to_string).collect::<Vec<_>>()
                    })
                    .collect();
                nodes.push(Node::SideDots(anchors));
                nodes.push(Node::Group {
                    class: "main-content",
                    children: main,
                });
            } else {
                nodes.extend(main);
            }
        }
        CompositionStrategy::Magazine => {
            if navigation == NavigationMode::Overlay {
                nodes.push(Node::OverlayNav);
            }
            if content.has(BlockKind::Hero) {
                nodes.push(Node::Hero(HeroVariant::Shared));
            }
            nodes.push(Node::Group {
                class: "magazine-content",
                children: vec![Node::Masonry(body(GRID_ORDER))],
            });
        }
        CompositionStrategy::Minimal => {
            if content.has(BlockKind::Hero) {
                nodes.push(Node::Hero(HeroVariant::Minimal));
            }
            nodes.push(Node::Group {
                class: "minimal-content",
                children: body(GRID_ORDER),
            });
        }
    }

    Composition { strategy, nodes }
}

/// One node per distinct section id, first occurrence wins.
fn distinct_sections(sections: &[DynamicSection]) -> Vec<Node> {
    let mut seen = HashSet::new();
    sections
        .iter()
        .enumerate()
        .filter(|(_, section)| seen.insert(section.id.as_str()))
        .map(|(index, section)| Node::Dynamic {
            index,
            id: section.id.clone(),
        })
        .collect()
}

fn full_viewport(node: Node) -> Node {
    let (anchor, tabbed) = match &node {
        Node::Block(kind) => (
            kind.as_str().to_string(),
            matches!(
                kind,
                BlockKind::Services | BlockKind::Features | BlockKind::Testimonials
            ),
        ),
        Node::Dynamic { id, .. } => (format!("section-{}", id), true),
        _ => (String::new(), false),
    };
    Node::Section {
        anchor,
        tabbed,
        child: Box::new(node),
    }
}

/// Emit the HTML for a composition.
pub fn render_composition(
    composition: &Composition,
    content: &PageContent,
    sections: &[DynamicSection],
    out: &mut String,
) -> std::fmt::Result {
    for node in &composition.nodes {
        render_node(node, content, sections, out)?;
    }
    Ok(())
}

fn render_node(
    node: &Node,
    content: &PageContent,
    sections: &[DynamicSection],
    out: &mut String,
) -> std::fmt::Result {
    match node {
        Node::Hero(variant) => {
            if let Some(hero) = &content.hero {
                match variant {
                    HeroVariant::Shared => render_hero(hero, out)?,
                    HeroVariant::SplitPane => render_split_hero(hero, out)?,
                    HeroVariant::Minimal => render_minimal_hero(hero, out)?,
                }
            }
        }
        Node::Block(BlockKind::Testimonials) => render_testimonials(out)?,
        Node::Block(kind) => {
            if let Some(payload) = content.payload(*kind) {
                render_block(*kind, payload, out)?;
            }
        }
        Node::Dynamic { index, .. } => {
            if let Some(section) = sections.get(*index) {
                render_dynamic_section(section, out)?;
            }
        }
        Node::Section {
            anchor,
            tabbed,
            child,
        } => {
            write!(
                out,
                "<section id=\"{}\" class=\"fullscreen-section\">",
                escape_html(anchor)
            )?;
            if *tabbed {
                write!(out, "<div class=\"tabbed-content\">")?;
            }
            render_node(child, content, sections, out)?;
            if *tabbed {
                write!(out, "</div>")?;
            }
            write!(out, "</section>")?;
        }
        Node::SideDots(anchors) => {
            write!(out, "<nav class=\"sidebar-nav\">")?;
            for anchor in anchors {
                let anchor = escape_html(anchor);
                write!(
                    out,
                    "<a href=\"#{}\" class=\"nav-dot\" aria-label=\"{}\"></a>",
                    anchor, anchor
                )?;
            }
            write!(out, "</nav>")?;
        }
        Node::OverlayNav => {
            write!(
                out,
                "<nav class=\"overlay-nav\"><div class=\"max-w-7xl mx-auto px-4 py-8\"><div class=\"grid grid-cols-2 md:grid-cols-3 gap-8 text-white\">"
            )?;
            for (href, label) in OVERLAY_LINKS {
                write!(
                    out,
                    "<a href=\"{}\" class=\"text-2xl font-bold hover:text-orange-400 transition-colors\">{}</a>",
                    href, label
                )?;
            }
            write!(out, "</div></div></nav>")?;
        }
        Node::Masonry(children) => {
            write!(out, "<div class=\"masonry-grid\">")?;
            for child in children {
                write!(out, "<div class=\"masonry-item\">")?;
                render_node(child, content, sections, out)?;
                write!(out, "</div>")?;
            }
            write!(out, "</div>")?;
        }
        Node::Group { class, children } => {
            write!(out, "<div class=\"{}\">", class)?;
            for child in children {
                render_node(child, content, sections, out)?;
            }
            write!(out, "</div>")?;
        }
    }
    Ok(())
}

fn render_split_hero(hero: &crate::content::HeroBlock, out: &mut String) -> std::fmt::Result {
    write!(
        out,
        "<div class=\"hero-split-container grid grid-cols-1 lg:grid-cols-2 min-h-screen\"><div class=\"hero-content-side flex items-center justify-center p-8 lg:p-16\"><div class=\"max-w-lg\">"
    )?;
    render_hero_heading(hero, "text-4xl lg:text-6xl font-bold mb-6 leading-tight", out)?;
    write!(out, "<div class=\"hero-buttons space-y-4\">")?;
    render_button(
        hero.primary_button_text.as_deref(),
        hero.primary_button_link.as_deref(),
        "btn-primary w-full",
        out,
    )?;
    render_button(
        hero.secondary_button_text.as_deref(),
        hero.secondary_button_link.as_deref(),
        "btn-secondary w-full",
        out,
    )?;
    write!(out, "</div></div></div>")?;
    let image = hero
        .background_image
        .as_deref()
        .map(css_url)
        .filter(|url| !url.is_empty())
        .map(|url| format!("background-image:url('{}');", url))
        .unwrap_or_default();
    write!(
        out,
        "<div class=\"hero-image-side\" style=\"{}background-size:cover;background-position:center;\"></div></div>",
        image
    )
}

fn render_minimal_hero(hero: &crate::content::HeroBlock, out: &mut String) -> std::fmt::Result {
    write!(
        out,
        "<section class=\"minimal-hero bg-white text-gray-900 min-h-screen flex items-center\"><div class=\"max-w-4xl mx-auto px-4\">"
    )?;
    render_hero_heading(hero, "text-6xl md:text-8xl font-light mb-8 leading-none", out)?;
    write!(out, "<div class=\"hero-buttons space-y-4\">")?;
    render_button(
        hero.primary_button_text.as_deref(),
        hero.primary_button_link.as_deref(),
        "btn-primary",
        out,
    )?;
    write!(out, "</div></div></section>")
}

fn render_hero_heading(
    hero: &crate::content::HeroBlock,
    class: &str,
    out: &mut String,
) -> std::fmt::Result {
    write!(out, "<h1 class=\"hero-title {}\">", class)?;
    write!(
        out,
        "<span class=\"hero-title-primary\">{}</span><br><span class=\"hero-subtitle\">{}</span></h1>",
        escape_html(hero.title.as_deref().unwrap_or_default()),
        escape_html(hero.subtitle.as_deref().unwrap_or_default())
    )?;
    if let Some(description) = &hero.description {
        write!(out, "<p class=\"hero-description\">{}</p>", escape_html(description))?;
    }
    Ok(())
}

/// Everything the home page renders from.
#[derive(Debug, Clone, Copy)]
pub struct HomeView<'a> {
    pub structure: &'a StructureTemplate,
    pub settings: Option<&'a SiteSettings>,
    pub settings_loading: bool,
    pub navigation: &'a [NavItem],
    pub page: &'a PageState,
    /// Target of the fallback screens' recovery link.
    pub admin_path: &'a str,
}

/// Page body for the home route: header, main content for the current page state, footer.
pub fn render_home(view: &HomeView<'_>, header: &HeaderState) -> SiteResult<String> {
    let mut out = String::new();
    write!(
        out,
        "<div class=\"min-h-screen website-template-{}\">",
        escape_html(&view.structure.id)
    )?;
    render_header(
        &HeaderInput {
            navigation: view.navigation,
            settings: view.settings,
            settings_loading: view.settings_loading,
            mode: view.structure.navigation(),
        },
        header,
        &mut out,
    )?;

    match view.page {
        PageState::Ready { content, sections } => {
            let class = if view.structure.navigation() == NavigationMode::Side {
                ""
            } else {
                " class=\"pt-16\""
            };
            write!(out, "<main{}>", class)?;
            let composition = compose(content, sections, view.structure);
            render_composition(&composition, content, sections, &mut out)?;
        }
        PageState::Loading => {
            write!(out, "<main class=\"pt-16\">")?;
            render_skeleton(&mut out)?;
        }
        PageState::Error(reason) => {
            tracing::warn!(%reason, "home content unavailable");
            write!(out, "<main class=\"pt-16\">")?;
            render_fallback(
                "error",
                "Error Loading Content",
                "There was an error loading the page content. Please check your site configuration.",
                view.admin_path,
                &mut out,
            )?;
        }
        PageState::Empty => {
            write!(out, "<main class=\"pt-16\">")?;
            render_fallback(
                "empty",
                "No Content Available",
                "Please initialize the default data from the admin panel to see the website content.",
                view.admin_path,
                &mut out,
            )?;
        }
    }
    write!(out, "</main>")?;
    render_footer(view.settings, &mut out)?;
    write!(out, "</div>")?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::structure;
    use crate::content::HeroBlock;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use serde_json::json;

    fn template_for(strategy: CompositionStrategy) -> StructureTemplate {
        let id = match strategy {
            CompositionStrategy::Standard => "standard-business",
            CompositionStrategy::SplitHero => "creative-portfolio",
            CompositionStrategy::Fullscreen => "dynamic-interactive",
            CompositionStrategy::Magazine => "magazine-editorial",
            CompositionStrategy::Minimal => "minimal-zen",
        };
        structure::builtin_catalog().lookup_by_id(Some(id)).clone()
    }

    fn full_content() -> PageContent {
        PageContent {
            hero: Some(HeroBlock {
                title: Some("Train Hard".to_string()),
                subtitle: Some("Live Strong".to_string()),
                primary_button_text: Some("Join".to_string()),
                primary_button_link: Some("/join".to_string()),
                secondary_button_text: Some("Tour".to_string()),
                secondary_button_link: Some("/tour".to_string()),
                background_image: Some("/img/gym.jpg".to_string()),
                ..Default::default()
            }),
            intro: Some(json!({"title": "Welcome"})),
            services: Some(json!({"title": "Services"})),
            features: Some(json!({"title": "Features"})),
            stats: Some(json!({"stats": [{"label": "Members", "value": 500}]})),
            gallery: Some(json!({"images": ["/a.jpg"]})),
            cta: Some(json!({"title": "Ready?"})),
        }
    }

    fn section(id: &str) -> DynamicSection {
        DynamicSection {
            id: id.to_string(),
            payload: Default::default(),
        }
    }

    #[test]
    fn test_unrecognized_layout_uses_standard_order() {
        let mut template = template_for(CompositionStrategy::Fullscreen);
        template.pages.home.layout = HomeLayout::from_tag("cinematic-scroll");

        let composition = compose(&full_content(), &[section("promo")], &template);
        assert_eq!(composition.strategy, CompositionStrategy::Standard);
        assert_eq!(
            composition.outline(),
            vec![
                "hero",
                "intro",
                "services",
                "features",
                "stats",
                "dynamic:promo",
                "testimonials",
                "gallery",
                "cta"
            ]
        );
    }

    #[test]
    fn test_missing_hero_still_renders_testimonials() {
        let content = PageContent {
            hero: None,
            ..full_content()
        };
        for strategy in CompositionStrategy::ALL {
            let template = template_for(*strategy);
            let composition = compose(&content, &[], &template);
            let outline = composition.outline();
            assert!(!outline.contains(&"hero".to_string()), "{:?}", strategy);
            assert!(outline.contains(&"testimonials".to_string()), "{:?}", strategy);

            let mut html = String::new();
            render_composition(&composition, &content, &[], &mut html).unwrap();
            assert!(!html.contains("hero-title"), "{:?}", strategy);
            assert!(html.contains("data-block=\"testimonials\""), "{:?}", strategy);
        }
    }

    #[test]
    fn test_empty_content_renders_only_testimonials() {
        for strategy in CompositionStrategy::ALL {
            let composition = compose(&PageContent::default(), &[], &template_for(*strategy));
            let blocks: Vec<String> = composition
                .outline()
                .into_iter()
                .filter(|entry| entry != "side-dots" && entry != "overlay-nav")
                .collect();
            assert_eq!(blocks, vec!["testimonials"], "{:?}", strategy);
        }
    }

    #[test]
    fn test_fullscreen_side_navigation_scenario() {
        let content = PageContent {
            hero: Some(HeroBlock::default()),
            services: Some(json!({"title": "Services"})),
            ..Default::default()
        };
        let template = template_for(CompositionStrategy::Fullscreen);
        let composition = compose(&content, &[], &template);

        assert_eq!(
            composition.outline(),
            vec!["side-dots", "hero", "services", "testimonials"]
        );
        assert_eq!(composition.anchors(), vec!["hero", "services", "testimonials"]);

        let mut html = String::new();
        render_composition(&composition, &content, &[], &mut html).unwrap();
        assert!(html.starts_with("<nav class=\"sidebar-nav\">"));
        assert!(html.contains("<a href=\"#hero\" class=\"nav-dot\""));
        assert!(html.contains("<section id=\"hero\" class=\"fullscreen-section\">"));
        assert!(html.contains("<section id=\"services\" class=\"fullscreen-section\">"));
        assert!(html.contains("<section id=\"testimonials\" class=\"fullscreen-section\">"));
        for absent in ["intro", "features", "stats", "gallery", "cta"] {
            assert!(!html.contains(&format!("id=\"{}\"", absent)), "{}", absent);
            assert!(!html.contains(&format!("data-block=\"{}\"", absent)), "{}", absent);
        }
        assert!(html.contains("<div class=\"main-content\">"));
    }

    #[test]
    fn test_fullscreen_without_side_navigation_has_no_dots() {
        let mut template = template_for(CompositionStrategy::Fullscreen);
        template.structure.navigation = NavigationMode::Top;
        let composition = compose(&full_content(), &[section("faq")], &template);
        assert!(!composition.outline().contains(&"side-dots".to_string()));
        assert!(composition.anchors().contains(&"section-faq"));
    }

    #[test]
    fn test_magazine_overlay_nav_depends_on_navigation_mode() {
        let template = template_for(CompositionStrategy::Magazine);
        let composition = compose(&full_content(), &[], &template);
        assert_eq!(composition.outline()[0], "overlay-nav");

        let mut html = String::new();
        render_composition(&composition, &full_content(), &[], &mut html).unwrap();
        for (href, label) in OVERLAY_LINKS {
            assert!(html.contains(&format!("href=\"{}\"", href)));
            assert!(html.contains(label));
        }
        assert!(html.contains("<div class=\"masonry-item\">"));

        let mut top = template.clone();
        top.structure.navigation = NavigationMode::Top;
        let composition = compose(&full_content(), &[], &top);
        assert!(!composition.outline().contains(&"overlay-nav".to_string()));
    }

    #[test]
    fn test_split_hero_uses_background_image_pane() {
        let template = template_for(CompositionStrategy::SplitHero);
        let content = full_content();
        let composition = compose(&content, &[], &template);
        let mut html = String::new();
        render_composition(&composition, &content, &[], &mut html).unwrap();
        assert!(html.contains("hero-split-container"));
        assert!(html.contains("background-image:url('/img/gym.jpg');"));
        assert!(html.contains("btn-secondary w-full"));
        assert!(!html.contains("hero-section min-h-screen"));
    }

    #[test]
    fn test_split_hero_background_is_css_encoded() {
        let template = template_for(CompositionStrategy::SplitHero);
        let mut content = full_content();
        if let Some(hero) = content.hero.as_mut() {
            hero.background_image = Some("/b.jpg'),url('/c.jpg".to_string());
        }
        let composition = compose(&content, &[], &template);
        let mut html = String::new();
        render_composition(&composition, &content, &[], &mut html).unwrap();
        assert!(html.contains("background-image:url('/b.jpg%27%29,url%28%27/c.jpg');"));
    }

    #[test]
    fn test_minimal_hero_has_no_secondary_button() {
        let template = template_for(CompositionStrategy::Minimal);
        let content = full_content();
        let composition = compose(&content, &[], &template);
        let mut html = String::new();
        render_composition(&composition, &content, &[], &mut html).unwrap();
        assert!(html.contains("minimal-hero"));
        assert!(html.contains("<a class=\"btn-primary\" href=\"/join\">Join</a>"));
        assert!(!html.contains("btn-secondary"));
    }

    #[test]
    fn test_render_home_states() {
        let template = template_for(CompositionStrategy::Standard);
        let view = |page: &PageState| {
            render_home(
                &HomeView {
                    structure: &template,
                    settings: None,
                    settings_loading: false,
                    navigation: &[],
                    page,
                    admin_path: "/admin",
                },
                &HeaderState::new(),
            )
            .unwrap()
        };

        let error = view(&PageState::Error("offline".to_string()));
        assert!(error.contains("Error Loading Content"));
        assert!(error.contains("href=\"/admin\""));
        assert!(!error.contains("offline"));

        let empty = view(&PageState::Empty);
        assert!(empty.contains("No Content Available"));

        let loading = view(&PageState::Loading);
        assert!(loading.contains("data-state=\"loading\""));

        let ready = view(&PageState::Ready {
            content: full_content(),
            sections: vec![],
        });
        assert!(ready.starts_with("<div class=\"min-h-screen website-template-standard-business\">"));
        assert!(ready.contains("<main class=\"pt-16\">"));
        assert!(ready.contains("site-footer"));
    }

    #[test]
    fn test_side_navigation_drops_main_padding() {
        let template = template_for(CompositionStrategy::Fullscreen);
        let page = PageState::Ready {
            content: full_content(),
            sections: vec![],
        };
        let html = render_home(
            &HomeView {
                structure: &template,
                settings: None,
                settings_loading: false,
                navigation: &[],
                page: &page,
                admin_path: "/admin",
            },
            &HeaderState::new(),
        )
        .unwrap();
        assert!(html.contains("<main>"));
    }

    proptest! {
        #[test]
        fn prop_dynamic_sections_render_once_in_order(
            ids in proptest::collection::vec("[a-d]", 0..8),
            strategy_idx in 0usize..5,
        ) {
            let strategy = CompositionStrategy::ALL[strategy_idx];
            let sections: Vec<DynamicSection> = ids.iter().map(|id| section(id)).collect();
            let composition = compose(&full_content(), &sections, &template_for(strategy));

            let mut expected = Vec::new();
            for id in &ids {
                let entry = format!("dynamic:{}", id);
                if !expected.contains(&entry) {
                    expected.push(entry);
                }
            }
            let rendered: Vec<String> = composition
                .outline()
                .into_iter()
                .filter(|entry| entry.starts_with("dynamic:"))
                .collect();
            prop_assert_eq!(rendered, expected.clone());

            let mut html = String::new();
            render_composition(&composition, &full_content(), &sections, &mut html).unwrap();
            prop_assert_eq!(html.matches("data-section-id=").count(), expected.len());
        }
    }
}
