use super::{Catalog, TemplateDescriptor};
use crate::tag::tag_enum;
use serde::{Deserialize, Serialize};

/// Visual styling descriptor: how shared components (hero, cards, buttons, sections) look.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignTemplate {
    pub id: String,
    pub name: String,
    pub description: String,
    pub preview: String,
    #[serde(default)]
    pub category: DesignCategory,
    #[serde(default)]
    pub components: DesignComponents,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DesignComponents {
    pub hero: HeroDesign,
    pub cards: CardDesign,
    pub buttons: ButtonDesign,
    pub sections: SectionDesign,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroDesign {
    pub style: HeroStyle,
    pub text_alignment: TextAlignment,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CardDesign {
    pub style: CardStyle,
    pub border_radius: Radius,
    pub shadow: Shadow,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ButtonDesign {
    pub style: ButtonStyle,
    pub border_radius: Radius,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionDesign {
    pub spacing: Spacing,
}

tag_enum! {
    pub enum DesignCategory {
        Modern => "modern",
        Classic => "classic",
        Minimal => "minimal",
        Bold => "bold",
        Creative => "creative",
        Professional => "professional",
    }
    default = Modern;
}

tag_enum! {
    /// Hero background treatment. Unknown styles render as a solid dark block.
    pub enum HeroStyle {
        Gradient => "gradient",
        Minimal => "minimal",
        Animated => "animated",
        Geometric => "geometric",
        Split => "split",
        Floating => "floating",
        Solid => "solid",
    }
    default = Solid;
}

tag_enum! {
    pub enum TextAlignment {
        Center => "center",
        Left => "left",
        Right => "right",
    }
    default = Center;
}

tag_enum! {
    /// Card surface treatment. Unknown styles render flat.
    pub enum CardStyle {
        Flat => "flat",
        Outlined => "outlined",
        Glass => "glass",
        Neumorphism => "neumorphism",
        Floating => "floating",
        Tilted => "tilted",
    }
    default = Flat;
}

tag_enum! {
    pub enum Radius {
        None => "none",
        Small => "small",
        Medium => "medium",
        Large => "large",
        Full => "full",
        Organic => "organic",
    }
    default = Medium;
}

tag_enum! {
    pub enum Shadow {
        None => "none",
        Small => "small",
        Medium => "medium",
        Large => "large",
        Neon => "neon",
        Soft => "soft",
    }
    default = Medium;
}

tag_enum! {
    /// Button treatment. Unknown styles render as a transparent text button.
    pub enum ButtonStyle {
        Filled => "filled",
        Gradient => "gradient",
        Outlined => "outlined",
        Neon => "neon",
        Glass => "glass",
        Neumorphism => "neumorphism",
        Ghost => "ghost",
    }
    default = Ghost;
}

tag_enum! {
    pub enum Spacing {
        Compact => "compact",
        Normal => "normal",
        Spacious => "spacious",
    }
    default = Normal;
}

impl DesignCategory {
    /// Badge colours on preview cards.
    pub fn badge_class(self) -> &'static str {
        match self {
            DesignCategory::Modern => "bg-blue-100 text-blue-800",
            DesignCategory::Classic => "bg-purple-100 text-purple-800",
            DesignCategory::Minimal => "bg-gray-100 text-gray-800",
            DesignCategory::Bold => "bg-red-100 text-red-800",
            DesignCategory::Creative => "bg-pink-100 text-pink-800",
            DesignCategory::Professional => "bg-green-100 text-green-800",
        }
    }

    /// Icon name (lucide) shown inside the category badge.
    pub fn icon(self) -> &'static str {
        match self {
            DesignCategory::Modern => "sparkles",
            DesignCategory::Classic | DesignCategory::Professional => "square",
            DesignCategory::Minimal => "circle",
            DesignCategory::Bold => "zap",
            DesignCategory::Creative => "palette",
        }
    }
}

impl HeroStyle {
    pub fn preview_class(self) -> &'static str {
        match self {
            HeroStyle::Gradient => "bg-gradient-to-r from-blue-400 to-purple-500",
            HeroStyle::Minimal => "bg-gray-200",
            HeroStyle::Animated => "bg-gradient-to-r from-red-400 to-orange-500",
            HeroStyle::Geometric => "bg-gradient-to-br from-pink-400 to-purple-500",
            HeroStyle::Split => "bg-gradient-to-r from-green-400 to-blue-500",
            HeroStyle::Floating => "bg-gradient-to-r from-indigo-400 to-cyan-500",
            HeroStyle::Solid => "bg-gray-800",
        }
    }

    pub fn background_css(self) -> &'static str {
        match self {
            HeroStyle::Gradient => "linear-gradient(90deg,#60a5fa,#a855f7)",
            HeroStyle::Minimal => "#e5e7eb",
            HeroStyle::Animated => "linear-gradient(90deg,#f87171,#f97316)",
            HeroStyle::Geometric => "linear-gradient(135deg,#f472b6,#a855f7)",
            HeroStyle::Split => "linear-gradient(90deg,#4ade80,#3b82f6)",
            HeroStyle::Floating => "linear-gradient(90deg,#818cf8,#06b6d4)",
            HeroStyle::Solid => "#1f2937",
        }
    }
}

impl TextAlignment {
    pub fn preview_class(self) -> &'static str {
        match self {
            TextAlignment::Center => "text-center",
            TextAlignment::Left => "text-left",
            TextAlignment::Right => "text-right",
        }
    }
}

impl CardStyle {
    pub fn preview_class(self) -> &'static str {
        match self {
            CardStyle::Flat => "",
            CardStyle::Outlined => "border border-gray-300",
            CardStyle::Glass => "bg-white/80 backdrop-blur-sm",
            CardStyle::Neumorphism => "bg-gray-100 shadow-inner",
            CardStyle::Floating => "bg-white transform rotate-1",
            CardStyle::Tilted => "bg-white transform -rotate-1",
        }
    }

    pub fn border_css(self) -> &'static str {
        match self {
            CardStyle::Outlined => "1px solid #d1d5db",
            _ => "none",
        }
    }

    pub fn transform_css(self) -> &'static str {
        match self {
            CardStyle::Floating => "rotate(1deg)",
            CardStyle::Tilted => "rotate(-1deg)",
            _ => "none",
        }
    }
}

impl Radius {
    pub fn card_class(self) -> &'static str {
        match self {
            Radius::None => "rounded-none",
            Radius::Small => "rounded-sm",
            Radius::Medium => "rounded-md",
            Radius::Large => "rounded-lg",
            Radius::Full => "rounded-full",
            Radius::Organic => "rounded-tl-2xl rounded-br-2xl",
        }
    }

    pub fn button_class(self) -> &'static str {
        match self {
            Radius::Organic => "rounded-tl-lg rounded-br-lg",
            other => other.card_class(),
        }
    }

    pub fn css(self) -> &'static str {
        match self {
            Radius::None => "0",
            Radius::Small => "0.125rem",
            Radius::Medium => "0.375rem",
            Radius::Large => "0.5rem",
            Radius::Full => "9999px",
            Radius::Organic => "1rem 0 1rem 0",
        }
    }
}

impl Shadow {
    pub fn preview_class(self) -> &'static str {
        match self {
            Shadow::None => "",
            Shadow::Small => "shadow-sm",
            Shadow::Medium => "shadow-md",
            Shadow::Large => "shadow-lg",
            Shadow::Neon => "shadow-lg shadow-blue-500/25",
            Shadow::Soft => "shadow-xl shadow-gray-300/50",
        }
    }

    pub fn css(self) -> &'static str {
        match self {
            Shadow::None => "none",
            Shadow::Small => "0 1px 2px rgba(0,0,0,0.05)",
            Shadow::Medium => "0 4px 6px rgba(0,0,0,0.1)",
            Shadow::Large => "0 10px 15px rgba(0,0,0,0.1)",
            Shadow::Neon => "0 10px 15px rgba(59,130,246,0.25)",
            Shadow::Soft => "0 20px 25px rgba(209,213,219,0.5)",
        }
    }
}

impl ButtonStyle {
    pub fn preview_class(self) -> &'static str {
        match self {
            ButtonStyle::Filled => "bg-blue-500",
            ButtonStyle::Gradient => "bg-gradient-to-r from-blue-500 to-purple-500",
            ButtonStyle::Outlined => "border border-blue-500 text-blue-500 bg-transparent",
            ButtonStyle::Neon => "bg-blue-500 shadow-lg shadow-blue-500/50",
            ButtonStyle::Glass => "bg-blue-500/80 backdrop-blur-sm",
            ButtonStyle::Neumorphism => "bg-gray-200 text-gray-700 shadow-inner",
            ButtonStyle::Ghost => "bg-transparent text-blue-500",
        }
    }

    pub fn background_css(self) -> &'static str {
        match self {
            ButtonStyle::Filled | ButtonStyle::Neon => "var(--color-primary,#3b82f6)",
            ButtonStyle::Gradient => "linear-gradient(90deg,#3b82f6,#a855f7)",
            ButtonStyle::Glass => "rgba(59,130,246,0.8)",
            ButtonStyle::Neumorphism => "#e5e7eb",
            ButtonStyle::Outlined | ButtonStyle::Ghost => "transparent",
        }
    }
}

impl Spacing {
    pub fn section_padding_css(self) -> &'static str {
        match self {
            Spacing::Compact => "3rem",
            Spacing::Normal => "5rem",
            Spacing::Spacious => "8rem",
        }
    }
}

impl TemplateDescriptor for DesignTemplate {
    const CATALOG: &'static str = "design";

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

fn template(
    id: &str,
    name: &str,
    description: &str,
    preview: &str,
    category: DesignCategory,
    components: DesignComponents,
) -> DesignTemplate {
    DesignTemplate {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        preview: preview.to_string(),
        category,
        components,
    }
}

fn components(
    hero: (HeroStyle, TextAlignment),
    cards: (CardStyle, Radius, Shadow),
    buttons: (ButtonStyle, Radius),
    spacing: Spacing,
) -> DesignComponents {
    DesignComponents {
        hero: HeroDesign {
            style: hero.0,
            text_alignment: hero.1,
        },
        cards: CardDesign {
            style: cards.0,
            border_radius: cards.1,
            shadow: cards.2,
        },
        buttons: ButtonDesign {
            style: buttons.0,
            border_radius: buttons.1,
        },
        sections: SectionDesign { spacing },
    }
}

/// The design catalog shipped with the site. The first entry is the default.
pub fn builtin_catalog() -> Catalog<DesignTemplate> {
    Catalog::builtin(vec![
        template(
            "modern-gradient",
            "Modern Gradient",
            "Vibrant gradients, rounded cards and smooth hover effects",
            "🌈",
            DesignCategory::Modern,
            components(
                (HeroStyle::Gradient, TextAlignment::Center),
                (CardStyle::Flat, Radius::Large, Shadow::Large),
                (ButtonStyle::Gradient, Radius::Full),
                Spacing::Normal,
            ),
        ),
        template(
            "classic-elegant",
            "Classic Elegant",
            "Timeless serif styling with outlined cards and restrained color",
            "🏛️",
            DesignCategory::Classic,
            components(
                (HeroStyle::Solid, TextAlignment::Left),
                (CardStyle::Outlined, Radius::Small, Shadow::Small),
                (ButtonStyle::Outlined, Radius::Small),
                Spacing::Spacious,
            ),
        ),
        template(
            "minimal-clean",
            "Minimal Clean",
            "Whitespace first: flat surfaces, no shadows, quiet typography",
            "⚪",
            DesignCategory::Minimal,
            components(
                (HeroStyle::Minimal, TextAlignment::Left),
                (CardStyle::Flat, Radius::None, Shadow::None),
                (ButtonStyle::Ghost, Radius::None),
                Spacing::Spacious,
            ),
        ),
        template(
            "bold-energy",
            "Bold Energy",
            "High-contrast animated hero with neon accents",
            "⚡",
            DesignCategory::Bold,
            components(
                (HeroStyle::Animated, TextAlignment::Center),
                (CardStyle::Tilted, Radius::Medium, Shadow::Neon),
                (ButtonStyle::Neon, Radius::Medium),
                Spacing::Compact,
            ),
        ),
        template(
            "creative-artistic",
            "Creative Artistic",
            "Geometric shapes, organic corners and glass surfaces",
            "🎨",
            DesignCategory::Creative,
            components(
                (HeroStyle::Geometric, TextAlignment::Right),
                (CardStyle::Glass, Radius::Organic, Shadow::Soft),
                (ButtonStyle::Glass, Radius::Organic),
                Spacing::Normal,
            ),
        ),
        template(
            "professional-corporate",
            "Professional Corporate",
            "Split hero, soft neumorphic cards and solid buttons",
            "💼",
            DesignCategory::Professional,
            components(
                (HeroStyle::Split, TextAlignment::Left),
                (CardStyle::Neumorphism, Radius::Large, Shadow::Medium),
                (ButtonStyle::Filled, Radius::Large),
                Spacing::Normal,
            ),
        ),
    ])
}
