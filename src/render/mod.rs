//! HTML rendering: shared writer helpers, leaf block renderers and the document shell.
//! Output contains no scripts or inline event handlers, only structure, classes and styles.

pub mod blocks;
pub mod header;
pub mod home;

use std::fmt::Write;

/// Base document styles. Template-specific values arrive as CSS custom properties.
const SITE_BASE_STYLES: &str = "html,body{margin:0;min-height:100vh;font-family:system-ui,sans-serif;color:#111827;}\
.hero-section{background:var(--hero-background);text-align:var(--hero-text-align);}\
.card{border-radius:var(--card-radius);box-shadow:var(--card-shadow);border:var(--card-border);transform:var(--card-transform);}\
.btn-primary{background:var(--button-background);border-radius:var(--button-radius);}\
section{padding-top:var(--section-padding);padding-bottom:var(--section-padding);}\
.masonry-grid{columns:3 320px;column-gap:1.5rem;}\
.masonry-item{break-inside:avoid;margin-bottom:1.5rem;}\
.fullscreen-section{min-height:100vh;}\
.sidebar-nav{position:fixed;left:1.5rem;top:50%;transform:translateY(-50%);display:flex;flex-direction:column;gap:0.75rem;z-index:40;}\
.nav-dot{width:0.75rem;height:0.75rem;border-radius:9999px;background:#9ca3af;}\
.main-content{margin-left:4rem;}";

pub(crate) fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Build id and class attributes.
pub(crate) fn build_attrs(id: Option<&str>, class: Option<&str>) -> String {
    let id_part = id
        .map(|s| format!(" id=\"{}\"", escape_html(s)))
        .unwrap_or_default();
    let class_part = class
        .filter(|c| !c.is_empty())
        .map(|c| format!(" class=\"{}\"", escape_html(c)))
        .unwrap_or_default();
    format!("{}{}", id_part, class_part)
}

fn is_safe_target(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    url.starts_with('/')
        || url.starts_with('#')
        || lower.starts_with("http://")
        || lower.starts_with("https://")
        || lower.starts_with("mailto:")
        || lower.starts_with("tel:")
}

/// Only relative paths and http(s)/mailto/tel URLs are emitted as link targets.
pub(crate) fn safe_href(href: &str) -> String {
    let trimmed = href.trim();
    if is_safe_target(trimmed) {
        escape_html(trimmed)
    } else {
        "#".to_string()
    }
}

/// Image URL for a quoted CSS `url('...')` value inside a `style` attribute.
/// Characters that could end the value are percent-encoded before HTML escaping;
/// disallowed schemes yield an empty string.
pub(crate) fn css_url(url: &str) -> String {
    let trimmed = url.trim();
    if !is_safe_target(trimmed) {
        return String::new();
    }
    let mut encoded = String::with_capacity(trimmed.len());
    for c in trimmed.chars() {
        match c {
            '\'' => encoded.push_str("%27"),
            '"' => encoded.push_str("%22"),
            '(' => encoded.push_str("%28"),
            ')' => encoded.push_str("%29"),
            '\\' => encoded.push_str("%5C"),
            c if c.is_ascii_whitespace() || c.is_ascii_control() => {
                encoded.push_str(&format!("%{:02X}", c as u32))
            }
            c => encoded.push(c),
        }
    }
    escape_html(&encoded)
}

/// Wrap rendered body markup into a full HTML document.
pub fn render_document(title: &str, theme_css: &str, body_class: &str, body: &str) -> String {
    let mut html = String::new();
    // Writing into a String cannot fail.
    let _ = write!(
        html,
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{}</title>
<style>{}{}</style>
</head>
<body{}>
{}
</body>
</html>
"#,
        escape_html(title),
        theme_css,
        SITE_BASE_STYLES,
        build_attrs(None, Some(body_class)),
        body
    );
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }

    #[test]
    fn test_build_attrs_skips_empty_class() {
        assert_eq!(build_attrs(Some("hero"), Some("")), " id=\"hero\"");
        assert_eq!(build_attrs(None, Some("a b")), " class=\"a b\"");
        assert_eq!(build_attrs(None, None), "");
    }

    #[test]
    fn test_safe_href() {
        assert_eq!(safe_href("/about"), "/about");
        assert_eq!(safe_href("#cta"), "#cta");
        assert_eq!(safe_href("https://example.com/?a=1&b=2"), "https://example.com/?a=1&amp;b=2");
        assert_eq!(safe_href("javascript:alert(1)"), "#");
    }

    #[test]
    fn test_css_url_cannot_close_the_value() {
        assert_eq!(css_url("/img/gym.jpg"), "/img/gym.jpg");
        assert_eq!(
            css_url("/a.jpg');background:url('x"),
            "/a.jpg%27%29;background:url%28%27x"
        );
        assert_eq!(css_url("/a b\\c.jpg?w=1&h=2"), "/a%20b%5Cc.jpg?w=1&amp;h=2");
        assert_eq!(css_url("javascript:alert(1)"), "");
    }

    #[test]
    fn test_document_embeds_theme_css_and_body_class() {
        let html = render_document("Iron <Gym>", ":root{--a:1;}", "nav-top", "<main></main>");
        assert!(html.contains("<title>Iron &lt;Gym&gt;</title>"));
        assert!(html.contains("<style>:root{--a:1;}"));
        assert!(html.contains("<body class=\"nav-top\">"));
    }
}
