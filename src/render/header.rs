//! Site header: branding, desktop navigation and the mobile menu.

use super::{escape_html, safe_href};
use crate::catalog::structure::NavigationMode;
use crate::content::NavItem;
use crate::settings::SiteSettings;
use crate::tag::tag_enum;
use std::fmt::Write;

tag_enum! {
    /// Logo icons selectable from settings. Unknown names render the dumbbell.
    pub enum LogoIcon {
        Dumbbell => "Dumbbell",
        Sparkles => "Sparkles",
        UtensilsCrossed => "UtensilsCrossed",
        Heart => "Heart",
        Star => "Star",
        Crown => "Crown",
        Zap => "Zap",
        Award => "Award",
    }
    default = Dumbbell;
}

impl LogoIcon {
    /// Icon-set glyph name used in the `data-icon` attribute.
    pub fn glyph(self) -> &'static str {
        match self {
            LogoIcon::Dumbbell => "dumbbell",
            LogoIcon::Sparkles => "sparkles",
            LogoIcon::UtensilsCrossed => "utensils-crossed",
            LogoIcon::Heart => "heart",
            LogoIcon::Star => "star",
            LogoIcon::Crown => "crown",
            LogoIcon::Zap => "zap",
            LogoIcon::Award => "award",
        }
    }
}

const DEFAULT_CHROME: &str = "bg-white/95 backdrop-blur-sm border-b border-gray-200";

/// Container styling for a navigation mode.
pub fn chrome_class(mode: NavigationMode) -> &'static str {
    match mode {
        NavigationMode::Floating => "header-floating",
        NavigationMode::Overlay => "header-overlay",
        NavigationMode::Top | NavigationMode::Side | NavigationMode::Bottom => DEFAULT_CHROME,
    }
}

/// Transient header state. The mobile menu closes whenever an item is activated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderState {
    menu_open: bool,
}

impl HeaderState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Activate a navigation item; returns the href to follow.
    pub fn activate<'a>(&mut self, item: &'a NavItem) -> &'a str {
        self.menu_open = false;
        &item.href
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }
}

/// Items shown to visitors, in source order.
pub fn visible_items(items: &[NavItem]) -> impl Iterator<Item = &NavItem> {
    items.iter().filter(|item| item.is_visible())
}

/// Inputs the header renders from.
#[derive(Debug, Clone, Copy)]
pub struct HeaderInput<'a> {
    pub navigation: &'a [NavItem],
    pub settings: Option<&'a SiteSettings>,
    /// True while the settings fetch has not resolved.
    pub settings_loading: bool,
    pub mode: NavigationMode,
}

pub fn render_header(
    input: &HeaderInput<'_>,
    state: &HeaderState,
    out: &mut String,
) -> std::fmt::Result {
    if input.settings_loading {
        return render_loading_header(out);
    }

    write!(
        out,
        "<header class=\"sticky top-0 z-50 {}\"><div class=\"max-w-7xl mx-auto px-4 sm:px-6 lg:px-8\"><div class=\"flex justify-between items-center h-16\">",
        chrome_class(input.mode)
    )?;
    render_logo(input.settings, out)?;

    let items: Vec<&NavItem> = visible_items(input.navigation).collect();
    if !items.is_empty() {
        write!(out, "<nav class=\"hidden md:flex space-x-8\">")?;
        render_links(&items, out)?;
        write!(out, "</nav>")?;
        write!(
            out,
            "<div class=\"md:hidden\"><button type=\"button\" class=\"menu-toggle\" aria-expanded=\"{}\"><span data-icon=\"{}\"></span></button></div>",
            state.is_menu_open(),
            if state.is_menu_open() { "x" } else { "menu" }
        )?;
    }
    write!(out, "</div>")?;

    if state.is_menu_open() && !items.is_empty() {
        write!(
            out,
            "<div class=\"md:hidden py-4 border-t border-gray-200\"><nav class=\"flex flex-col space-y-4\">"
        )?;
        render_links(&items, out)?;
        write!(out, "</nav></div>")?;
    }
    write!(out, "</div></header>")
}

fn render_loading_header(out: &mut String) -> std::fmt::Result {
    write!(
        out,
        "<header class=\"sticky top-0 z-50 {}\" data-state=\"loading\"><div class=\"max-w-7xl mx-auto px-4 sm:px-6 lg:px-8\"><div class=\"flex justify-between items-center h-16\"><div class=\"flex items-center space-x-2\"><div class=\"w-10 h-10 bg-gray-200 rounded-lg animate-pulse\"></div><div class=\"w-32 h-6 bg-gray-200 rounded animate-pulse\"></div></div></div></div></header>",
        DEFAULT_CHROME
    )
}

fn render_logo(settings: Option<&SiteSettings>, out: &mut String) -> std::fmt::Result {
    write!(out, "<a href=\"/\" class=\"flex items-center space-x-2\">")?;
    match settings.and_then(|s| s.logo_image()) {
        Some(url) => write!(
            out,
            "<div class=\"p-2 rounded-lg\"><img src=\"{}\" alt=\"Logo\" class=\"h-6 w-6 object-contain\"></div>",
            safe_href(url)
        )?,
        None => {
            let icon = settings
                .and_then(|s| s.logo_icon.as_deref())
                .map(LogoIcon::from_tag)
                .unwrap_or_default();
            write!(
                out,
                "<div class=\"p-2 rounded-lg theme-bg-gradient\"><span class=\"h-6 w-6 text-white\" data-icon=\"{}\"></span></div>",
                icon.glyph()
            )?;
        }
    }
    let name = settings
        .and_then(|s| s.site_name.as_deref())
        .filter(|n| !n.is_empty())
        .unwrap_or("Loading...");
    write!(
        out,
        "<span class=\"text-xl font-bold text-gray-900\">{}</span></a>",
        escape_html(name)
    )
}

fn render_links(items: &[&NavItem], out: &mut String) -> std::fmt::Result {
    for item in items {
        write!(
            out,
            "<a href=\"{}\" class=\"text-gray-700 theme-text-primary-hover font-medium transition-colors duration-200\">{}</a>",
            safe_href(&item.href),
            escape_html(&item.label)
        )?;
    }
    Ok(())
}
