//! Route and deferred rendering configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::RenderError;

/// Configuration for a single route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteConfig {
    /// Route path (e.g., "/help").
    pub pattern: String,
    /// Page handler name.
    pub page: String,
    /// Document title.
    #[serde(default = "default_title")]
    pub title: String,
}

fn default_title() -> String {
    "Leveling Store".to_string()
}

impl RouteConfig {
    /// Create a new route configuration.
    pub fn new(pattern: impl Into<String>, page: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            page: page.into(),
            title: default_title(),
        }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

/// Ordered set of routes with exact-path matching.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouteTable {
    routes: Vec<RouteConfig>,
}

impl RouteTable {
    /// Create an empty route table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a route.
    pub fn with_route(mut self, route: RouteConfig) -> Self {
        self.routes.push(route);
        self
    }

    /// All routes in registration order.
    pub fn routes(&self) -> &[RouteConfig] {
        &self.routes
    }

    /// Resolve a request path to a route.
    ///
    /// Query strings and fragments are ignored, as is a trailing slash on
    /// anything but the root.
    pub fn resolve(&self, path: &str) -> Option<&RouteConfig> {
        let path = normalize_path(path);
        self.routes.iter().find(|r| r.pattern == path)
    }
}

/// Strip query, fragment and trailing slash from a path.
pub fn normalize_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Proximity observation options.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProximityOptions {
    /// Distance by which the viewport is grown on every side before testing
    /// intersection.
    #[serde(default = "default_root_margin")]
    pub root_margin: f64,
    /// Fraction of the region that must intersect the grown viewport.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_root_margin() -> f64 {
    50.0
}

fn default_threshold() -> f64 {
    0.1
}

impl Default for ProximityOptions {
    fn default() -> Self {
        Self {
            root_margin: default_root_margin(),
            threshold: default_threshold(),
        }
    }
}

/// Fixed placeholder heights for deferred sections, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionHeights {
    #[serde(default = "default_header_height")]
    pub header: u32,
    #[serde(default = "default_featured_height")]
    pub featured: u32,
    #[serde(default = "default_footer_height")]
    pub footer: u32,
}

fn default_header_height() -> u32 {
    80
}

fn default_featured_height() -> u32 {
    384
}

fn default_footer_height() -> u32 {
    160
}

impl Default for SectionHeights {
    fn default() -> Self {
        Self {
            header: default_header_height(),
            featured: default_featured_height(),
            footer: default_footer_height(),
        }
    }
}

/// Tuning for the deferred rendering pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeferredConfig {
    /// Proximity options for lazily loaded media.
    #[serde(default)]
    pub proximity: ProximityOptions,
    /// Delay before gated content becomes ready, in milliseconds.
    #[serde(default = "default_content_delay_ms")]
    pub content_delay_ms: u64,
    /// Delay before the help form resets after submission, in milliseconds.
    #[serde(default = "default_help_reset_ms")]
    pub help_reset_ms: u64,
    /// Deferred section placeholder heights.
    #[serde(default)]
    pub section_heights: SectionHeights,
}

fn default_content_delay_ms() -> u64 {
    800
}

fn default_help_reset_ms() -> u64 {
    3000
}

impl Default for DeferredConfig {
    fn default() -> Self {
        Self {
            proximity: ProximityOptions::default(),
            content_delay_ms: default_content_delay_ms(),
            help_reset_ms: default_help_reset_ms(),
            section_heights: SectionHeights::default(),
        }
    }
}

impl DeferredConfig {
    /// Content gate delay.
    pub fn content_delay(&self) -> Duration {
        Duration::from_millis(self.content_delay_ms)
    }

    /// Help form reset delay.
    pub fn help_reset_delay(&self) -> Duration {
        Duration::from_millis(self.help_reset_ms)
    }

    /// Override the content gate delay.
    pub fn with_content_delay(mut self, delay: Duration) -> Self {
        self.content_delay_ms = delay.as_millis() as u64;
        self
    }

    /// Reject values no host can honour.
    pub fn validate(&self) -> Result<(), RenderError> {
        let proximity = &self.proximity;
        if proximity.root_margin.is_nan() || proximity.root_margin < 0.0 {
            return Err(RenderError::ConfigError(format!(
                "proximity.root_margin must be non-negative, got {}",
                proximity.root_margin
            )));
        }
        if !(0.0..=1.0).contains(&proximity.threshold) || proximity.threshold == 0.0 {
            return Err(RenderError::ConfigError(format!(
                "proximity.threshold must be in (0, 1], got {}",
                proximity.threshold
            )));
        }
        Ok(())
    }
}
