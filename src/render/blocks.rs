//! Presentational leaf renderers. They read payload fields they recognise and ignore the rest.

use super::{build_attrs, css_url, escape_html, safe_href};
use crate::content::{Block, BlockKind, DynamicSection, HeroBlock};
use crate::settings::SiteSettings;
use serde_json::{Map, Value};
use std::fmt::Write;

/// Array fields tried, in order, when looking for a block's list of items.
const ITEM_KEYS: &[&str] = &["items", "services", "features", "stats", "images", "cards"];

/// Shared hero: title, subtitle, description and up to two buttons.
pub fn render_hero(hero: &HeroBlock, out: &mut String) -> std::fmt::Result {
    let style = hero
        .background_image
        .as_deref()
        .map(css_url)
        .filter(|url| !url.is_empty())
        .map(|url| format!(" style=\"background-image:url('{}');\"", url))
        .unwrap_or_default();
    write!(out, "<div class=\"hero-section min-h-screen flex items-center\"{}>", style)?;
    write!(out, "<div class=\"max-w-4xl mx-auto px-4\">")?;
    write!(out, "<h1 class=\"hero-title\">")?;
    if let Some(title) = &hero.title {
        write!(out, "<span class=\"hero-title-primary\">{}</span>", escape_html(title))?;
    }
    if let Some(subtitle) = &hero.subtitle {
        write!(out, "<br><span class=\"hero-subtitle\">{}</span>", escape_html(subtitle))?;
    }
    write!(out, "</h1>")?;
    if let Some(description) = &hero.description {
        write!(out, "<p class=\"hero-description\">{}</p>", escape_html(description))?;
    }
    write!(out, "<div class=\"hero-buttons\">")?;
    render_button(
        hero.primary_button_text.as_deref(),
        hero.primary_button_link.as_deref(),
        "btn-primary",
        out,
    )?;
    render_button(
        hero.secondary_button_text.as_deref(),
        hero.secondary_button_link.as_deref(),
        "btn-secondary",
        out,
    )?;
    write!(out, "</div></div></div>")
}

/// Link styled as a button; skipped when there is no label.
pub(crate) fn render_button(
    text: Option<&str>,
    link: Option<&str>,
    class: &str,
    out: &mut String,
) -> std::fmt::Result {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return Ok(());
    };
    write!(
        out,
        "<a class=\"{}\" href=\"{}\">{}</a>",
        class,
        safe_href(link.unwrap_or("#")),
        escape_html(text)
    )
}

/// Generic renderer for intro, services, features, stats, gallery and cta payloads.
pub fn render_block(kind: BlockKind, payload: &Block, out: &mut String) -> std::fmt::Result {
    let class = format!("{}-section", kind.as_str());
    write!(
        out,
        "<div{} data-block=\"{}\">",
        build_attrs(None, Some(&class)),
        kind.as_str()
    )?;
    match payload {
        Value::Object(fields) => render_fields(kind, fields, out)?,
        Value::String(text) => write!(out, "<p>{}</p>", escape_html(text))?,
        Value::Array(items) => render_items(kind, items, out)?,
        _ => {}
    }
    write!(out, "</div>")
}

fn render_fields(kind: BlockKind, fields: &Map<String, Value>, out: &mut String) -> std::fmt::Result {
    if let Some(title) = str_field(fields, "title") {
        write!(out, "<h2 class=\"section-title\">{}</h2>", escape_html(title))?;
    }
    if let Some(subtitle) = str_field(fields, "subtitle") {
        write!(out, "<p class=\"section-subtitle\">{}</p>", escape_html(subtitle))?;
    }
    if let Some(description) = str_field(fields, "description").or_else(|| str_field(fields, "content")) {
        write!(out, "<p class=\"section-description\">{}</p>", escape_html(description))?;
    }
    if let Some(items) = ITEM_KEYS
        .iter()
        .find_map(|key| fields.get(*key).and_then(|v| v.as_array()))
    {
        render_items(kind, items, out)?;
    }
    if kind == BlockKind::Cta {
        render_button(
            str_field(fields, "buttonText"),
            str_field(fields, "buttonLink"),
            "btn-primary",
            out,
        )?;
    }
    Ok(())
}

fn render_items(kind: BlockKind, items: &[Value], out: &mut String) -> std::fmt::Result {
    let list_class = if kind == BlockKind::Gallery {
        "gallery-grid"
    } else {
        "card-grid"
    };
    write!(out, "<ul class=\"{}\">", list_class)?;
    for item in items {
        match item {
            Value::String(s) if kind == BlockKind::Gallery => {
                write!(out, "<li class=\"card\"><img src=\"{}\" alt=\"\"></li>", safe_href(s))?;
            }
            Value::String(s) => write!(out, "<li class=\"card\">{}</li>", escape_html(s))?,
            Value::Object(fields) => {
                write!(out, "<li class=\"card\">")?;
                if let Some(src) = str_field(fields, "image").or_else(|| str_field(fields, "url")) {
                    let alt = str_field(fields, "alt").unwrap_or("");
                    write!(out, "<img src=\"{}\" alt=\"{}\">", safe_href(src), escape_html(alt))?;
                }
                if let Some(value) = fields.get("value").or_else(|| fields.get("number")) {
                    write!(out, "<strong class=\"stat-value\">{}</strong>", escape_html(&scalar_text(value)))?;
                }
                if let Some(title) = ["title", "name", "label"]
                    .iter()
                    .find_map(|key| str_field(fields, key))
                {
                    write!(out, "<h3>{}</h3>", escape_html(title))?;
                }
                if let Some(description) = str_field(fields, "description") {
                    write!(out, "<p>{}</p>", escape_html(description))?;
                }
                write!(out, "</li>")?;
            }
            other => write!(out, "<li class=\"card\">{}</li>", escape_html(&scalar_text(other)))?,
        }
    }
    write!(out, "</ul>")
}

/// Testimonials load their own data client-side; the server emits the mount point.
pub fn render_testimonials(out: &mut String) -> std::fmt::Result {
    write!(
        out,
        "<div class=\"testimonials-section\" data-block=\"testimonials\" data-source=\"testimonials\"></div>"
    )
}

pub fn render_dynamic_section(section: &DynamicSection, out: &mut String) -> std::fmt::Result {
    write!(
        out,
        "<div class=\"dynamic-section\" data-section-id=\"{}\">",
        escape_html(&section.id)
    )?;
    render_fields(BlockKind::Intro, &section.payload, out)?;
    write!(out, "</div>")
}

pub fn render_footer(settings: Option<&SiteSettings>, out: &mut String) -> std::fmt::Result {
    let name = settings
        .and_then(|s| s.site_name.as_deref())
        .unwrap_or_default();
    write!(
        out,
        "<footer class=\"site-footer bg-gray-900 text-gray-300 py-12\"><div class=\"max-w-7xl mx-auto px-4\"><span class=\"footer-brand\">{}</span></div></footer>",
        escape_html(name)
    )
}

/// Placeholder skeletons shown while content loads.
pub fn render_skeleton(out: &mut String) -> std::fmt::Result {
    write!(
        out,
        "<div class=\"min-h-screen bg-gray-100 flex items-center justify-center\" data-state=\"loading\">\
<div class=\"max-w-4xl mx-auto px-4 text-center\">\
<div class=\"skeleton h-16 w-3/4 mx-auto mb-6\"></div>\
<div class=\"skeleton h-8 w-1/2 mx-auto mb-8\"></div>\
<div class=\"flex justify-center gap-4\"><div class=\"skeleton h-12 w-32\"></div><div class=\"skeleton h-12 w-32\"></div></div>\
</div></div>"
    )?;
    write!(out, "<div class=\"py-16 bg-white\"><div class=\"max-w-7xl mx-auto px-4\"><div class=\"skeleton h-12 w-1/3 mx-auto mb-8\"></div><div class=\"grid grid-cols-1 md:grid-cols-3 gap-8\">")?;
    for _ in 0..3 {
        write!(
            out,
            "<div class=\"space-y-4\"><div class=\"skeleton h-48 w-full\"></div><div class=\"skeleton h-6 w-3/4\"></div><div class=\"skeleton h-4 w-full\"></div></div>"
        )?;
    }
    write!(out, "</div></div></div>")
}

/// Full-screen fallback pointing the operator at the admin surface.
pub fn render_fallback(
    state: &str,
    title: &str,
    message: &str,
    admin_path: &str,
    out: &mut String,
) -> std::fmt::Result {
    write!(
        out,
        "<div class=\"min-h-screen flex items-center justify-center\" data-state=\"{}\">\
<div class=\"text-center max-w-md mx-auto p-8\">\
<h2 class=\"text-2xl font-bold text-gray-900 mb-4\">{}</h2>\
<p class=\"text-gray-600 mb-6\">{}</p>\
<a href=\"{}\" class=\"btn-theme-primary px-6 py-3 rounded-lg transition-colors\">Go to Admin Panel</a>\
</div></div>",
        state,
        escape_html(title),
        escape_html(message),
        safe_href(admin_path)
    )
}

fn str_field<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    fields.get(key).and_then(|v| v.as_str())
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_block_with_items() {
        let payload = json!({
            "title": "Our Services",
            "services": [
                {"title": "Personal Training", "description": "1:1 coaching"},
                {"title": "Group <Classes>"}
            ]
        });
        let mut out = String::new();
        render_block(BlockKind::Services, &payload, &mut out).unwrap();
        assert!(out.starts_with("<div class=\"services-section\" data-block=\"services\">"));
        assert!(out.contains("<h2 class=\"section-title\">Our Services</h2>"));
        assert!(out.contains("<h3>Personal Training</h3><p>1:1 coaching</p>"));
        assert!(out.contains("Group &lt;Classes&gt;"));
    }

    #[test]
    fn test_render_stats_values() {
        let payload = json!({"stats": [{"label": "Members", "value": 1200}]});
        let mut out = String::new();
        render_block(BlockKind::Stats, &payload, &mut out).unwrap();
        assert!(out.contains("<strong class=\"stat-value\">1200</strong><h3>Members</h3>"));
    }

    #[test]
    fn test_render_gallery_string_images() {
        let payload = json!(["/img/a.jpg", "javascript:alert(1)"]);
        let mut out = String::new();
        render_block(BlockKind::Gallery, &payload, &mut out).unwrap();
        assert!(out.contains("<img src=\"/img/a.jpg\" alt=\"\">"));
        assert!(out.contains("<img src=\"#\" alt=\"\">"));
    }

    #[test]
    fn test_render_hero_skips_missing_secondary_button() {
        let hero = HeroBlock {
            title: Some("Train".to_string()),
            primary_button_text: Some("Join".to_string()),
            primary_button_link: Some("/join".to_string()),
            ..Default::default()
        };
        let mut out = String::new();
        render_hero(&hero, &mut out).unwrap();
        assert!(out.contains("<a class=\"btn-primary\" href=\"/join\">Join</a>"));
        assert!(!out.contains("btn-secondary"));
    }

    #[test]
    fn test_render_hero_background_stays_inside_css_url() {
        let hero = HeroBlock {
            background_image: Some("/a.jpg');background:url('javascript:alert(1)".to_string()),
            ..Default::default()
        };
        let mut out = String::new();
        render_hero(&hero, &mut out).unwrap();
        assert!(out.contains(
            "style=\"background-image:url('/a.jpg%27%29;background:url%28%27javascript:alert%281%29');\""
        ));
        assert!(!out.contains("');background"));

        let hero = HeroBlock {
            background_image: Some("javascript:alert(1)".to_string()),
            ..Default::default()
        };
        let mut out = String::new();
        render_hero(&hero, &mut out).unwrap();
        assert!(!out.contains("style="));
    }

    #[test]
    fn test_render_cta_button() {
        let payload = json!({"title": "Ready?", "buttonText": "Start", "buttonLink": "/start"});
        let mut out = String::new();
        render_block(BlockKind::Cta, &payload, &mut out).unwrap();
        assert!(out.contains("<a class=\"btn-primary\" href=\"/start\">Start</a>"));
    }
}
