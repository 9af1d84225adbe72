//! One-shot viewport visibility signal.

use leveling_core::{ElementId, LifecyclePhase, ObservationId, ProximityOptions};

use crate::geometry::Rect;
use crate::host::{HostEvent, Lease, ProximityEntry, ProximityHost, RenderContext};

/// Reports once that a region came near the viewport.
///
/// Priority regions are visible from the start and never observed. Other
/// regions are observed until the first intersecting entry, after which the
/// observation is released and the signal stays true.
#[derive(Debug)]
pub struct VisibilityDetector {
    element: ElementId,
    visible: bool,
    observation: Option<Lease<ObservationId>>,
}

impl VisibilityDetector {
    /// Mount a detector with the configured proximity options.
    pub fn mount(cx: &RenderContext<'_>, element: ElementId, region: Rect, priority: bool) -> Self {
        Self::mount_with_options(cx, element, region, priority, cx.config.proximity)
    }

    /// Mount a detector with explicit proximity options.
    pub fn mount_with_options(
        cx: &RenderContext<'_>,
        element: ElementId,
        region: Rect,
        priority: bool,
        options: ProximityOptions,
    ) -> Self {
        if priority {
            cx.report(element, LifecyclePhase::Visible);
            return Self {
                element,
                visible: true,
                observation: None,
            };
        }

        let observation = cx.host.observe(region, options);
        cx.report(element, LifecyclePhase::Observing);
        Self {
            element,
            visible: false,
            observation: Some(observation),
        }
    }

    /// Whether the region has become visible.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether an observation is still held.
    pub fn is_observing(&self) -> bool {
        self.observation.is_some()
    }

    /// The held observation, if any.
    pub fn observation(&self) -> Option<ObservationId> {
        self.observation.as_ref().map(Lease::id)
    }

    /// Consume a host event. Returns `true` only on the transition to visible.
    pub fn handle(&mut self, event: &HostEvent, cx: &RenderContext<'_>) -> bool {
        let HostEvent::Proximity(ProximityEntry {
            observation,
            is_intersecting,
            ..
        }) = event
        else {
            return false;
        };

        if !is_intersecting || self.observation() != Some(*observation) {
            return false;
        }

        self.visible = true;
        self.observation = None;
        cx.report(self.element, LifecyclePhase::Visible);
        true
    }
}

#[cfg(test)]
mod tests {
    use leveling_core::DeferredConfig;

    use super::*;
    use crate::geometry::Viewport;
    use crate::host::Host;
    use crate::sim::SimulatedHost;

    fn below_fold() -> Rect {
        Rect::new(0.0, 2000.0, 400.0, 400.0)
    }

    fn deliver(detector: &mut VisibilityDetector, events: Vec<HostEvent>, cx: &RenderContext<'_>) -> usize {
        events
            .iter()
            .filter(|event| detector.handle(event, cx))
            .count()
    }

    #[test]
    fn test_priority_visible_without_observation() {
        let host = SimulatedHost::default();
        let config = DeferredConfig::default();
        let cx = RenderContext::new(&host, &config);

        let detector = VisibilityDetector::mount(&cx, host.allocate_element(), below_fold(), true);

        assert!(detector.is_visible());
        assert!(!detector.is_observing());
        assert_eq!(host.active_observations(), 0);
    }

    #[test]
    fn test_flips_exactly_once_and_never_reverts() {
        let host = SimulatedHost::new(Viewport::new(1000.0, 800.0));
        let config = DeferredConfig::default();
        let cx = RenderContext::new(&host, &config);
        let mut detector =
            VisibilityDetector::mount(&cx, host.allocate_element(), below_fold(), false);

        assert!(!detector.is_visible());
        assert_eq!(deliver(&mut detector, host.check_proximity(), &cx), 0);
        assert!(!detector.is_visible());

        assert_eq!(deliver(&mut detector, host.scroll_to(1800.0), &cx), 1);
        assert!(detector.is_visible());
        assert!(!detector.is_observing());
        assert_eq!(host.active_observations(), 0);

        // Scroll away and back: nothing left to report.
        assert!(host.scroll_to(0.0).is_empty());
        assert!(host.scroll_to(1800.0).is_empty());
        assert!(detector.is_visible());
    }

    #[test]
    fn test_ignores_other_observations() {
        let host = SimulatedHost::new(Viewport::new(1000.0, 800.0));
        let config = DeferredConfig::default();
        let cx = RenderContext::new(&host, &config);
        let mut detector =
            VisibilityDetector::mount(&cx, host.allocate_element(), below_fold(), false);

        let stranger = HostEvent::Proximity(ProximityEntry {
            observation: ObservationId::new(999),
            ratio: 1.0,
            is_intersecting: true,
        });

        assert!(!detector.handle(&stranger, &cx));
        assert!(!detector.is_visible());
    }

    #[test]
    fn test_drop_before_visible_releases_observation() {
        let host = SimulatedHost::new(Viewport::new(1000.0, 800.0));
        let config = DeferredConfig::default();
        let cx = RenderContext::new(&host, &config);
        let detector = VisibilityDetector::mount(&cx, host.allocate_element(), below_fold(), false);
        assert_eq!(host.active_observations(), 1);

        drop(detector);

        assert_eq!(host.active_observations(), 0);
        assert!(host.scroll_to(1800.0).is_empty());
    }

    #[test]
    fn test_custom_threshold() {
        let host = SimulatedHost::new(Viewport::new(1000.0, 800.0));
        let config = DeferredConfig::default();
        let cx = RenderContext::new(&host, &config);
        let options = ProximityOptions {
            root_margin: 0.0,
            threshold: 1.0,
        };
        let mut detector = VisibilityDetector::mount_with_options(
            &cx,
            host.allocate_element(),
            Rect::new(0.0, 700.0, 100.0, 200.0),
            false,
            options,
        );

        // Half inside: not enough for a full-visibility threshold.
        assert_eq!(deliver(&mut detector, host.check_proximity(), &cx), 0);
        assert_eq!(deliver(&mut detector, host.scroll_to(100.0), &cx), 1);
    }
}
