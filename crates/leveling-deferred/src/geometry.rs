//! Page geometry for proximity tests.

use leveling_core::ProximityOptions;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a rectangle.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Bottom edge.
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Right edge.
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Area, zero for degenerate rectangles.
    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Grow the rectangle by `margin` on every side.
    pub fn expand(&self, margin: f64) -> Self {
        Self::new(
            self.x - margin,
            self.y - margin,
            self.width + 2.0 * margin,
            self.height + 2.0 * margin,
        )
    }

    /// Intersection with another rectangle, if any.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if right < x || bottom < y {
            return None;
        }
        Some(Rect::new(x, y, right - x, bottom - y))
    }

    /// Whether a point lies within the rectangle, edges included.
    pub fn contains_point(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }
}

/// The visible window onto the page.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Vertical scroll offset.
    pub scroll_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Create a viewport scrolled to the top.
    pub const fn new(width: f64, height: f64) -> Self {
        Self {
            scroll_y: 0.0,
            width,
            height,
        }
    }

    /// The visible page area.
    pub fn rect(&self) -> Rect {
        Rect::new(0.0, self.scroll_y, self.width, self.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0)
    }
}

/// Fraction of `region` inside the viewport grown by the root margin.
///
/// A zero-area region counts as fully inside when its origin is inside the
/// grown viewport.
pub fn intersection_ratio(region: &Rect, viewport: &Viewport, options: &ProximityOptions) -> f64 {
    let root = viewport.rect().expand(options.root_margin);

    if region.area() == 0.0 {
        return if root.contains_point(region.x, region.y) {
            1.0
        } else {
            0.0
        };
    }

    root.intersection(region)
        .map(|i| i.area() / region.area())
        .unwrap_or(0.0)
}

/// Whether a region satisfies the proximity condition.
pub fn meets_threshold(ratio: f64, options: &ProximityOptions) -> bool {
    ratio > 0.0 && ratio >= options.threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> ProximityOptions {
        ProximityOptions::default()
    }

    #[test]
    fn test_region_fully_visible() {
        let viewport = Viewport::new(1000.0, 800.0);
        let region = Rect::new(0.0, 100.0, 400.0, 400.0);

        assert_eq!(intersection_ratio(&region, &viewport, &options()), 1.0);
    }

    #[test]
    fn test_root_margin_reaches_below_fold() {
        let viewport = Viewport::new(1000.0, 800.0);
        // Starts 40 below the fold: only the 50 margin reaches it.
        let region = Rect::new(0.0, 840.0, 100.0, 100.0);
        let ratio = intersection_ratio(&region, &viewport, &options());

        assert!((ratio - 0.1).abs() < 1e-9);
        assert!(meets_threshold(ratio, &options()));
    }

    #[test]
    fn test_region_far_below() {
        let viewport = Viewport::new(1000.0, 800.0);
        let region = Rect::new(0.0, 2000.0, 100.0, 100.0);

        assert_eq!(intersection_ratio(&region, &viewport, &options()), 0.0);
        assert!(!meets_threshold(0.0, &options()));
    }

    #[test]
    fn test_below_threshold() {
        let viewport = Viewport::new(1000.0, 800.0);
        // 5 of 100 rows inside the grown viewport.
        let region = Rect::new(0.0, 845.0, 100.0, 100.0);
        let ratio = intersection_ratio(&region, &viewport, &options());

        assert!(ratio > 0.0);
        assert!(!meets_threshold(ratio, &options()));
    }

    #[test]
    fn test_zero_area_region() {
        let viewport = Viewport::new(1000.0, 800.0);
        let inside = Rect::new(10.0, 10.0, 0.0, 0.0);
        let outside = Rect::new(10.0, 5000.0, 0.0, 0.0);

        assert_eq!(intersection_ratio(&inside, &viewport, &options()), 1.0);
        assert_eq!(intersection_ratio(&outside, &viewport, &options()), 0.0);
    }

    #[test]
    fn test_scrolling_moves_root() {
        let mut viewport = Viewport::new(1000.0, 800.0);
        let region = Rect::new(0.0, 2000.0, 100.0, 100.0);
        viewport.scroll_y = 1500.0;

        assert_eq!(intersection_ratio(&region, &viewport, &options()), 1.0);
    }
}
