//! Floating scroll-to-top button.

/// Scroll offset past which the button shows.
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

/// Button shown once the page has scrolled past `SCROLL_TOP_THRESHOLD`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollToTop {
    visible: bool,
}

impl ScrollToTop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Update from the current scroll offset. Returns `true` if visibility changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let visible = scroll_y > SCROLL_TOP_THRESHOLD;
        let changed = visible != self.visible;
        self.visible = visible;
        changed
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn render(&self) -> String {
        if !self.visible {
            return String::new();
        }
        r#"<button class="fixed bottom-8 right-8 bg-black text-white p-3 rounded-full shadow-lg hover:bg-gray-800 transition z-40" aria-label="Scroll to top" title="Scroll to top"><svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M5 10l7-7m0 0l7 7m-7-7v18"/></svg></button>"#
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_follows_scroll() {
        let mut button = ScrollToTop::new();
        assert!(button.render().is_empty());

        assert!(!button.on_scroll(300.0));
        assert!(button.on_scroll(301.0));
        assert!(button.render().contains("Scroll to top"));

        assert!(!button.on_scroll(900.0));
        assert!(button.on_scroll(0.0));
        assert!(!button.is_visible());
    }
}
