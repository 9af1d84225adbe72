//! Breadcrumb trail derived from the request path.

use leveling_core::normalize_path;
use leveling_streaming::escape_html;

/// One crumb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub label: String,
    pub href: String,
}

impl Breadcrumb {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// "Home" followed by one crumb per path segment, each labelled with the
/// segment capitalized.
pub fn breadcrumbs_from_path(path: &str) -> Vec<Breadcrumb> {
    let mut crumbs = vec![Breadcrumb::new("Home", "/")];
    let mut href = String::new();
    for segment in normalize_path(path).split('/').filter(|s| !s.is_empty()) {
        href.push('/');
        href.push_str(segment);
        crumbs.push(Breadcrumb::new(capitalize(segment), href.clone()));
    }
    crumbs
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Render a trail. The last crumb is the current page and is not a link.
pub fn render_breadcrumbs(crumbs: &[Breadcrumb]) -> String {
    let mut html = String::from(r#"<nav class="text-sm text-gray-600" aria-label="Breadcrumb">"#);
    for (i, crumb) in crumbs.iter().enumerate() {
        html.push_str(r#"<div class="inline">"#);
        if i > 0 {
            html.push_str(r#"<span class="mx-2">/</span>"#);
        }
        if i + 1 == crumbs.len() {
            html.push_str(&format!(
                r#"<span class="text-black font-medium">{}</span>"#,
                escape_html(&crumb.label)
            ));
        } else {
            html.push_str(&format!(
                r#"<a href="{}" class="text-gray-600 hover:text-black transition cursor-pointer">{}</a>"#,
                escape_html(&crumb.href),
                escape_html(&crumb.label)
            ));
        }
        html.push_str("</div>");
    }
    html.push_str("</nav>");
    html
}
