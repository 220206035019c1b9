use super::{Catalog, TemplateDescriptor};
use crate::tag::tag_enum;
use serde::{Deserialize, Serialize};

/// Structural descriptor: page arrangement, navigation placement and hero arrangement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub preview: String,
    #[serde(default)]
    pub category: StructureCategory,
    #[serde(default)]
    pub structure: StructureShape,
    #[serde(default)]
    pub pages: PageLayouts,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StructureShape {
    pub layout: StructureLayout,
    pub navigation: NavigationMode,
    pub hero_style: HeroArrangement,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageLayouts {
    pub home: HomePageLayout,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HomePageLayout {
    /// Selects the home page composition strategy.
    pub layout: HomeLayout,
    pub grid_style: GridStyle,
}

tag_enum! {
    pub enum StructureCategory {
        Business => "business",
        Creative => "creative",
        Modern => "modern",
        Classic => "classic",
        Minimal => "minimal",
    }
    default = Business;
}

tag_enum! {
    pub enum StructureLayout {
        Standard => "standard",
        Sidebar => "sidebar",
        Split => "split",
        Magazine => "magazine",
    }
    default = Standard;
}

tag_enum! {
    /// Where navigation lives. Unknown modes behave like a top bar.
    pub enum NavigationMode {
        Top => "top",
        Side => "side",
        Floating => "floating",
        Bottom => "bottom",
        Overlay => "overlay",
    }
    default = Top;
}

tag_enum! {
    pub enum HeroArrangement {
        Standard => "standard",
        Fullscreen => "fullscreen",
        Split => "split",
        Minimal => "minimal",
        Video => "video",
        Parallax => "parallax",
    }
    default = Standard;
}

tag_enum! {
    /// Home page layout tag. Unknown tags use the standard linear stack.
    pub enum HomeLayout {
        Standard => "standard",
        SplitHeroGrid => "split-hero-grid",
        FullscreenSections => "fullscreen-sections",
        MagazineStyle => "magazine-style",
        HeroIntroStatsTestimonials => "hero-intro-stats-testimonials",
    }
    default = Standard;
}

tag_enum! {
    pub enum GridStyle {
        Cards => "cards",
        Masonry => "masonry",
        List => "list",
        Tiles => "tiles",
    }
    default = Cards;
}

impl StructureCategory {
    pub fn badge_class(self) -> &'static str {
        match self {
            StructureCategory::Business => "bg-blue-100 text-blue-800",
            StructureCategory::Creative => "bg-purple-100 text-purple-800",
            StructureCategory::Modern => "bg-green-100 text-green-800",
            StructureCategory::Classic => "bg-amber-100 text-amber-800",
            StructureCategory::Minimal => "bg-gray-100 text-gray-800",
        }
    }
}

impl StructureLayout {
    pub fn preview_class(self) -> &'static str {
        match self {
            StructureLayout::Standard => "grid-cols-1",
            StructureLayout::Sidebar => "grid-cols-4",
            StructureLayout::Split => "grid-cols-2",
            StructureLayout::Magazine => "grid-cols-3",
        }
    }

    /// Preview tiles as (column span, height class) pairs.
    pub fn preview_tiles(self) -> &'static [(u8, &'static str)] {
        match self {
            StructureLayout::Sidebar => &[(1, "bg-gray-300 h-12"), (3, "bg-gray-200 h-12")],
            StructureLayout::Split => &[(1, "bg-gray-300 h-12"), (1, "bg-gray-200 h-12")],
            StructureLayout::Magazine => &[
                (1, "bg-gray-300 h-8"),
                (1, "bg-gray-200 h-8"),
                (1, "bg-gray-300 h-8"),
            ],
            StructureLayout::Standard => &[(1, "bg-gray-200 h-12")],
        }
    }
}

impl NavigationMode {
    pub fn preview_class(self) -> &'static str {
        match self {
            NavigationMode::Side => "flex flex-col space-y-1",
            NavigationMode::Floating | NavigationMode::Bottom => "flex space-x-1 justify-center",
            NavigationMode::Top | NavigationMode::Overlay => "flex space-x-1",
        }
    }
}

impl HeroArrangement {
    pub fn preview_class(self) -> &'static str {
        match self {
            HeroArrangement::Fullscreen => "h-16 bg-gradient-to-r from-blue-400 to-purple-500",
            HeroArrangement::Split => "grid grid-cols-2 gap-1 h-12",
            HeroArrangement::Minimal => "h-8 bg-gray-200",
            HeroArrangement::Video => "h-16 bg-gray-800",
            HeroArrangement::Parallax => "h-16 bg-gradient-to-br from-green-400 to-blue-500",
            HeroArrangement::Standard => "h-12 bg-gray-300",
        }
    }
}

impl StructureTemplate {
    pub fn navigation(&self) -> NavigationMode {
        self.structure.navigation
    }

    pub fn home_layout(&self) -> HomeLayout {
        self.pages.home.layout
    }
}

impl TemplateDescriptor for StructureTemplate {
    const CATALOG: &'static str = "structure";

    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn preview(&self) -> &str {
        &self.preview
    }

    fn category_tag(&self) -> &'static str {
        self.category.as_str()
    }
}

#[allow(clippy::too_many_arguments)]
fn template(
    id: &str,
    name: &str,
    description: &str,
    preview: &str,
    category: StructureCategory,
    structure: (StructureLayout, NavigationMode, HeroArrangement),
    home: HomeLayout,
    grid_style: GridStyle,
) -> StructureTemplate {
    StructureTemplate {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        preview: preview.to_string(),
        category,
        structure: StructureShape {
            layout: structure.0,
            navigation: structure.1,
            hero_style: structure.2,
        },
        pages: PageLayouts {
            home: HomePageLayout {
                layout: home,
                grid_style,
            },
        },
    }
}

/// The structure catalog shipped with the site. The first entry is the default.
pub fn builtin_catalog() -> Catalog<StructureTemplate> {
    Catalog::builtin(vec![
        template(
            "standard-business",
            "Standard Business",
            "Classic top navigation with a full-width hero and stacked sections",
            "🏢",
            StructureCategory::Business,
            (StructureLayout::Standard, NavigationMode::Top, HeroArrangement::Fullscreen),
            HomeLayout::Standard,
            GridStyle::Cards,
        ),
        template(
            "creative-portfolio",
            "Creative Portfolio",
            "Two-pane hero with a floating menu and a masonry content grid",
            "🎭",
            StructureCategory::Creative,
            (StructureLayout::Split, NavigationMode::Floating, HeroArrangement::Split),
            HomeLayout::SplitHeroGrid,
            GridStyle::Masonry,
        ),
        template(
            "dynamic-interactive",
            "Dynamic Interactive",
            "Full-viewport sections with side dot navigation",
            "🚀",
            StructureCategory::Modern,
            (StructureLayout::Sidebar, NavigationMode::Side, HeroArrangement::Fullscreen),
            HomeLayout::FullscreenSections,
            GridStyle::Tiles,
        ),
        template(
            "magazine-editorial",
            "Magazine Editorial",
            "Editorial overlay menu, parallax hero and a multi-column grid",
            "📰",
            StructureCategory::Classic,
            (StructureLayout::Magazine, NavigationMode::Overlay, HeroArrangement::Parallax),
            HomeLayout::MagazineStyle,
            GridStyle::Masonry,
        ),
        template(
            "minimal-zen",
            "Minimal Zen",
            "Large type, a single call to action and plenty of air",
            "🍃",
            StructureCategory::Minimal,
            (StructureLayout::Standard, NavigationMode::Top, HeroArrangement::Minimal),
            HomeLayout::HeroIntroStatsTestimonials,
            GridStyle::List,
        ),
    ])
}
