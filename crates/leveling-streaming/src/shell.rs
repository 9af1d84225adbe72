//! Document shell template.

use crate::escape::escape_html;

/// Head content for the shell.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    /// Page title.
    pub title: Option<String>,
    /// Meta tags as (name, content).
    pub meta: Vec<(String, String)>,
    /// Raw link and style tags.
    pub links: Vec<String>,
    /// Inline scripts in head.
    pub scripts: Vec<String>,
}

impl HeadContent {
    /// Create new head content with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add a stylesheet link.
    pub fn with_stylesheet(mut self, href: &str) -> Self {
        self.links.push(format!(
            r#"<link rel="stylesheet" href="{}">"#,
            escape_html(href)
        ));
        self
    }

    /// Add an inline script.
    pub fn with_script(mut self, js: &str) -> Self {
        self.scripts.push(js.to_string());
        self
    }

    /// Render head content to HTML.
    pub fn render(&self) -> String {
        let mut html = String::from("<meta charset=\"utf-8\">\n");

        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
        }

        for (name, content) in &self.meta {
            html.push_str(&format!(
                r#"<meta name="{}" content="{}">"#,
                escape_html(name),
                escape_html(content)
            ));
            html.push('\n');
        }

        for link in &self.links {
            html.push_str(link);
            html.push('\n');
        }

        for script in &self.scripts {
            html.push_str(&format!("<script>{}</script>\n", script));
        }

        html
    }
}

/// Document shell wrapped around streamed sections.
#[derive(Debug, Clone)]
pub struct Shell {
    /// Document language.
    pub lang: String,
    /// Head content.
    pub head: HeadContent,
    /// Classes on the body element.
    pub body_class: Option<String>,
    /// HTML after the body opens and before the first section.
    pub body_start: String,
    /// HTML after the last section and before the body closes.
    pub body_end: String,
}

impl Shell {
    /// Create a shell with an empty `<main>` wrapper.
    pub fn new(head: HeadContent) -> Self {
        Self {
            lang: "en".to_string(),
            head,
            body_class: None,
            body_start: "<main>\n".to_string(),
            body_end: "</main>\n".to_string(),
        }
    }

    /// Set the body class attribute.
    pub fn with_body_class(mut self, class: impl Into<String>) -> Self {
        self.body_class = Some(class.into());
        self
    }

    /// Render the opening part of the shell (before sections).
    pub fn render_opening(&self) -> String {
        let mut html = String::from("<!DOCTYPE html>\n");
        html.push_str(&format!("<html lang=\"{}\">\n<head>\n", escape_html(&self.lang)));
        html.push_str(&self.head.render());
        html.push_str("</head>\n");
        match &self.body_class {
            Some(class) => html.push_str(&format!("<body class=\"{}\">\n", escape_html(class))),
            None => html.push_str("<body>\n"),
        }
        html.push_str(&self.body_start);
        html
    }

    /// Render the closing part of the shell (after sections).
    pub fn render_closing(&self) -> String {
        format!("{}</body>\n</html>\n", self.body_end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_escapes_title_and_meta() {
        let head = HeadContent::new("Help & Support").with_meta("description", "\"quoted\"");
        let html = head.render();

        assert!(html.contains("<title>Help &amp; Support</title>"));
        assert!(html.contains(r#"content="&quot;quoted&quot;""#));
        assert!(html.starts_with("<meta charset=\"utf-8\">"));
    }

    #[test]
    fn test_shell_opening_and_closing() {
        let shell = Shell::new(HeadContent::new("Leveling Store")).with_body_class("bg-white");
        let opening = shell.render_opening();

        assert!(opening.starts_with("<!DOCTYPE html>\n<html lang=\"en\">"));
        assert!(opening.contains("<body class=\"bg-white\">"));
        assert!(opening.ends_with("<main>\n"));
        assert_eq!(shell.render_closing(), "</main>\n</body>\n</html>\n");
    }
}
