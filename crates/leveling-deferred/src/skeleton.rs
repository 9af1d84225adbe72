//! Inert placeholder layouts.
//!
//! Rendering is a pure function of the `PlaceholderSpec` and the theme, so a
//! skeleton re-renders identically for identical input.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

/// Shape of pending content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PlaceholderShape {
    /// Product card: image block then three text lines.
    GridCard,
    /// Paragraph lines.
    TextLine,
    /// Thin lines with spacing.
    Line,
    /// Avatars or icons.
    Circle,
    /// Anything unrecognized: one generic block.
    Generic,
}

impl PlaceholderShape {
    /// Parse a shape name. Unknown names map to `Generic`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "grid-card" | "product" => Self::GridCard,
            "text-line" | "text" => Self::TextLine,
            "line" => Self::Line,
            "circle" => Self::Circle,
            _ => Self::Generic,
        }
    }

    fn default_blocks(&self) -> Vec<SkeletonBlock> {
        match self {
            Self::GridCard => vec![
                SkeletonBlock::new(300),
                SkeletonBlock::new(20),
                SkeletonBlock::new(20).with_width(BlockWidth::Percent(80)),
                SkeletonBlock::new(25).with_width(BlockWidth::Percent(60)),
            ],
            Self::TextLine => vec![SkeletonBlock::new(20)],
            Self::Line => vec![SkeletonBlock::new(16).with_class("mb-2")],
            Self::Circle => vec![SkeletonBlock::circle(60)],
            Self::Generic => vec![SkeletonBlock::new(100)],
        }
    }

    fn container_class(&self) -> Option<&'static str> {
        match self {
            Self::GridCard => Some("grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6 md:gap-8"),
            Self::TextLine => Some("space-y-3"),
            Self::Line => Some(""),
            Self::Circle => Some("flex gap-4"),
            Self::Generic => None,
        }
    }

    fn item_class(&self) -> Option<&'static str> {
        match self {
            Self::GridCard => Some("space-y-3"),
            _ => None,
        }
    }
}

/// Width of a skeleton block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockWidth {
    Full,
    Percent(u8),
    Px(u32),
}

impl BlockWidth {
    fn css(&self) -> String {
        match self {
            Self::Full => "100%".to_string(),
            Self::Percent(p) => format!("{}%", p),
            Self::Px(px) => format!("{}px", px),
        }
    }
}

/// One inert block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkeletonBlock {
    pub height: u32,
    pub width: BlockWidth,
    pub circle: bool,
    pub class: Option<String>,
}

impl SkeletonBlock {
    /// A full-width block of the given height.
    pub fn new(height: u32) -> Self {
        Self {
            height,
            width: BlockWidth::Full,
            circle: false,
            class: None,
        }
    }

    /// A circle of the given diameter.
    pub fn circle(diameter: u32) -> Self {
        Self {
            height: diameter,
            width: BlockWidth::Px(diameter),
            circle: true,
            class: None,
        }
    }

    pub fn with_width(mut self, width: BlockWidth) -> Self {
        self.width = width;
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }
}

/// What a skeleton should look like.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceholderSpec {
    pub shape: PlaceholderShape,
    pub count: usize,
    /// Blocks making up one repeated item.
    pub blocks: Vec<SkeletonBlock>,
}

impl PlaceholderSpec {
    /// Spec for `count` items of `shape` with the shape's default sizes.
    pub fn new(shape: PlaceholderShape, count: usize) -> Self {
        Self {
            shape,
            count,
            blocks: shape.default_blocks(),
        }
    }

    /// Override the per-item size hints.
    pub fn with_blocks(mut self, blocks: Vec<SkeletonBlock>) -> Self {
        self.blocks = blocks;
        self
    }

    /// Items actually rendered. Generic shapes render a single block.
    pub fn item_count(&self) -> usize {
        match self.shape {
            PlaceholderShape::Generic => 1,
            _ => self.count,
        }
    }
}

/// Skeleton colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkeletonTheme {
    pub base_color: String,
    pub highlight_color: String,
}

impl Default for SkeletonTheme {
    fn default() -> Self {
        Self {
            base_color: "#f3f3f3".to_string(),
            highlight_color: "#e0e0e0".to_string(),
        }
    }
}

/// Render a skeleton for `spec` under `theme`.
pub fn render_skeleton(spec: &PlaceholderSpec, theme: &SkeletonTheme) -> String {
    let mut html = format!(
        r#"<div class="skeleton-theme" aria-busy="true" style="--base-color: {}; --highlight-color: {}">"#,
        theme.base_color, theme.highlight_color
    );

    let container = spec.shape.container_class();
    if let Some(class) = container {
        if class.is_empty() {
            html.push_str("<div>");
        } else {
            let _ = write!(html, r#"<div class="{}">"#, class);
        }
    }

    for _ in 0..spec.item_count() {
        let item_class = spec.shape.item_class();
        if let Some(class) = item_class {
            let _ = write!(html, r#"<div class="{}">"#, class);
        }
        for block in &spec.blocks {
            render_block(&mut html, block);
        }
        if item_class.is_some() {
            html.push_str("</div>");
        }
    }

    if container.is_some() {
        html.push_str("</div>");
    }
    html.push_str("</div>");
    html
}

fn render_block(html: &mut String, block: &SkeletonBlock) {
    let class = match &block.class {
        Some(extra) => format!("skeleton {}", extra),
        None => "skeleton".to_string(),
    };
    let radius = if block.circle { "50%" } else { "0.25rem" };
    let _ = write!(
        html,
        r#"<span class="{}" style="display: block; height: {}px; width: {}; border-radius: {}"></span>"#,
        class,
        block.height,
        block.width.css(),
        radius
    );
}

/// Shows a skeleton while content is loading, the content afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkeletonLoader {
    spec: PlaceholderSpec,
    theme: SkeletonTheme,
}

impl SkeletonLoader {
    pub fn new(spec: PlaceholderSpec) -> Self {
        Self {
            spec,
            theme: SkeletonTheme::default(),
        }
    }

    pub fn with_theme(mut self, theme: SkeletonTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn spec(&self) -> &PlaceholderSpec {
        &self.spec
    }

    /// Render the skeleton while `is_loading`, else the content.
    pub fn render(&self, is_loading: bool, content: impl FnOnce() -> String) -> String {
        if is_loading {
            render_skeleton(&self.spec, &self.theme)
        } else {
            content()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(shape: PlaceholderShape, count: usize) -> String {
        render_skeleton(&PlaceholderSpec::new(shape, count), &SkeletonTheme::default())
    }

    #[test]
    fn test_render_is_idempotent() {
        for shape in [
            PlaceholderShape::GridCard,
            PlaceholderShape::TextLine,
            PlaceholderShape::Line,
            PlaceholderShape::Circle,
            PlaceholderShape::Generic,
        ] {
            assert_eq!(render(shape, 3), render(shape, 3));
        }
    }

    #[test]
    fn test_grid_cards() {
        let html = render(PlaceholderShape::GridCard, 6);

        assert!(html.contains("lg:grid-cols-3"));
        assert_eq!(html.matches(r#"<div class="space-y-3">"#).count(), 6);
        assert_eq!(html.matches("height: 300px").count(), 6);
        assert_eq!(html.matches("width: 80%").count(), 6);
        assert_eq!(html.matches("height: 25px; width: 60%").count(), 6);
    }

    #[test]
    fn test_lines_and_circles() {
        let lines = render(PlaceholderShape::Line, 4);
        assert_eq!(lines.matches("skeleton mb-2").count(), 4);
        assert!(lines.contains("height: 16px"));

        let circles = render(PlaceholderShape::Circle, 3);
        assert!(circles.contains(r#"<div class="flex gap-4">"#));
        assert_eq!(circles.matches("border-radius: 50%").count(), 3);
        assert!(circles.contains("height: 60px; width: 60px"));
    }

    #[test]
    fn test_unknown_shape_is_single_block() {
        let spec = PlaceholderSpec::new(PlaceholderShape::from_name("hexagon"), 5);
        let html = render_skeleton(&spec, &SkeletonTheme::default());

        assert_eq!(spec.shape, PlaceholderShape::Generic);
        assert_eq!(html.matches("<span").count(), 1);
        assert!(html.contains("height: 100px"));
    }

    #[test]
    fn test_shape_names() {
        assert_eq!(PlaceholderShape::from_name("product"), PlaceholderShape::GridCard);
        assert_eq!(PlaceholderShape::from_name("text"), PlaceholderShape::TextLine);
        assert_eq!(PlaceholderShape::from_name("circle"), PlaceholderShape::Circle);
    }

    #[test]
    fn test_theme_colors() {
        let html = render(PlaceholderShape::TextLine, 1);
        assert!(html.contains("--base-color: #f3f3f3"));
        assert!(html.contains("--highlight-color: #e0e0e0"));
    }

    #[test]
    fn test_custom_blocks() {
        let spec = PlaceholderSpec::new(PlaceholderShape::TextLine, 2)
            .with_blocks(vec![SkeletonBlock::new(12).with_width(BlockWidth::Px(90))]);
        let html = render_skeleton(&spec, &SkeletonTheme::default());

        assert_eq!(html.matches("height: 12px; width: 90px").count(), 2);
    }

    #[test]
    fn test_loader_switches_on_loading() {
        let loader = SkeletonLoader::new(PlaceholderSpec::new(PlaceholderShape::Line, 2));

        assert!(loader.render(true, || "content".to_string()).contains("skeleton"));
        assert_eq!(loader.render(false, || "content".to_string()), "content");
    }
}
