//! Element lifecycle tracking.

use std::collections::HashMap;
use std::time::Duration;

use crate::ids::ElementId;

/// Lifecycle phases a deferred element moves through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LifecyclePhase {
    /// Element mounted, first render produced.
    Mounted,
    /// A proximity observation was registered for the element.
    Observing,
    /// The element reached the viewport proximity threshold.
    Visible,
    /// Real media was mounted and its load requested.
    Loading,
    /// Media finished loading.
    Loaded,
    /// Media failed to load.
    Failed(String),
    /// Gated content became ready.
    Ready,
    /// A deferred section swapped its placeholder for real content.
    Swapped(String),
    /// Element torn down.
    Unmounted,
}

impl LifecyclePhase {
    /// Short label used in logs and recordings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Mounted => "mounted",
            Self::Observing => "observing",
            Self::Visible => "visible",
            Self::Loading => "loading",
            Self::Loaded => "loaded",
            Self::Failed(_) => "failed",
            Self::Ready => "ready",
            Self::Swapped(_) => "swapped",
            Self::Unmounted => "unmounted",
        }
    }
}

/// Timing context keyed on virtual time.
///
/// Hosts run on a virtual clock, so marks record the clock reading passed in
/// rather than a wall-clock instant.
#[derive(Debug, Clone, Default)]
pub struct TimingContext {
    marks: HashMap<String, Duration>,
}

impl TimingContext {
    /// Create an empty timing context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a timing mark. The first reading for a name wins.
    pub fn mark(&mut self, name: &str, at: Duration) {
        self.marks.entry(name.to_string()).or_insert(at);
    }

    /// Mark a section's placeholder as rendered.
    pub fn mark_placeholder(&mut self, section: &str, at: Duration) {
        self.mark(&format!("section_{}_placeholder", section), at);
    }

    /// Mark a section as swapped to real content.
    pub fn mark_swapped(&mut self, section: &str, at: Duration) {
        self.mark(&format!("section_{}_swapped", section), at);
    }

    /// Get a mark by name.
    pub fn get(&self, name: &str) -> Option<Duration> {
        self.marks.get(name).copied()
    }

    /// Time from placeholder to swap for a section.
    pub fn section_timing(&self, section: &str) -> Option<SectionTiming> {
        let placeholder = self.get(&format!("section_{}_placeholder", section))?;
        let swapped = self.get(&format!("section_{}_swapped", section))?;

        Some(SectionTiming {
            name: section.to_string(),
            placeholder,
            swapped,
            waited: swapped.saturating_sub(placeholder),
        })
    }

    /// Earliest swap of any section.
    pub fn time_to_first_swap(&self) -> Option<Duration> {
        self.marks
            .iter()
            .filter(|(k, _)| k.starts_with("section_") && k.ends_with("_swapped"))
            .map(|(_, t)| *t)
            .min()
    }
}

/// Timing information for a deferred section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SectionTiming {
    /// Section name.
    pub name: String,
    /// Virtual time the placeholder was rendered.
    pub placeholder: Duration,
    /// Virtual time the real content replaced it.
    pub swapped: Duration,
    /// How long the placeholder was on screen.
    pub waited: Duration,
}

/// Observer trait for lifecycle events.
pub trait LifecycleObserver {
    /// Called when an element enters a lifecycle phase.
    fn on_phase(&self, element: ElementId, phase: &LifecyclePhase, at: Duration);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_mark_wins() {
        let mut timing = TimingContext::new();
        timing.mark("shell", Duration::from_millis(5));
        timing.mark("shell", Duration::from_millis(9));

        assert_eq!(timing.get("shell"), Some(Duration::from_millis(5)));
    }

    #[test]
    fn test_section_timing() {
        let mut timing = TimingContext::new();
        timing.mark_placeholder("featured", Duration::ZERO);
        timing.mark_swapped("featured", Duration::from_millis(800));

        let t = timing.section_timing("featured").unwrap();
        assert_eq!(t.waited, Duration::from_millis(800));
        assert!(timing.section_timing("footer").is_none());
    }

    #[test]
    fn test_time_to_first_swap() {
        let mut timing = TimingContext::new();
        timing.mark_swapped("footer", Duration::from_millis(20));
        timing.mark_swapped("featured", Duration::from_millis(10));

        assert_eq!(timing.time_to_first_swap(), Some(Duration::from_millis(10)));
    }

    #[test]
    fn test_phase_labels() {
        assert_eq!(LifecyclePhase::Failed("x".into()).label(), "failed");
        assert_eq!(LifecyclePhase::Swapped("footer".into()).label(), "swapped");
    }
}
