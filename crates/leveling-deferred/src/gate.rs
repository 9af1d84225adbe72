//! Simulated asynchronous content source.

use std::time::Duration;

use leveling_core::{ElementId, LifecyclePhase, TimerId};

use crate::component::{Component, ComponentFactory};
use crate::host::{Host, HostEvent, Lease, RenderContext, TimerHost};
use crate::skeleton::SkeletonLoader;

/// Whether gated content is ready.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ContentReadiness {
    pub is_ready: bool,
}

/// Readiness that flips once when a single-shot timer fires.
///
/// The timer starts at mount. Dropping the gate before it fires cancels the
/// timer, so no readiness change is ever delivered to a torn-down gate.
#[derive(Debug)]
pub struct ContentGate {
    element: ElementId,
    readiness: ContentReadiness,
    timer: Option<Lease<TimerId>>,
    mounted_at: Duration,
    ready_at: Option<Duration>,
}

impl ContentGate {
    /// Mount a gate that becomes ready after the configured content delay.
    pub fn mount(cx: &RenderContext<'_>, element: ElementId) -> Self {
        Self::mount_with_delay(cx, element, cx.config.content_delay())
    }

    /// Mount a gate that becomes ready after `delay`.
    pub fn mount_with_delay(cx: &RenderContext<'_>, element: ElementId, delay: Duration) -> Self {
        Self {
            element,
            readiness: ContentReadiness::default(),
            timer: Some(cx.host.start_timer(delay)),
            mounted_at: cx.host.now(),
            ready_at: None,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.readiness.is_ready
    }

    pub fn readiness(&self) -> ContentReadiness {
        self.readiness
    }

    /// Whether the timer is still outstanding.
    pub fn is_pending(&self) -> bool {
        self.timer.is_some()
    }

    /// Time from mount to readiness, once ready.
    pub fn waited(&self) -> Option<Duration> {
        self.ready_at.map(|at| at.saturating_sub(self.mounted_at))
    }

    /// Consume a host event. Returns `true` on the transition to ready.
    pub fn handle(&mut self, event: &HostEvent, cx: &RenderContext<'_>) -> bool {
        let HostEvent::TimerFired { timer } = event else {
            return false;
        };
        if self.timer.as_ref().map(Lease::id) != Some(*timer) {
            return false;
        }

        self.timer = None;
        self.readiness.is_ready = true;
        self.ready_at = Some(cx.host.now());
        cx.report(self.element, LifecyclePhase::Ready);
        true
    }
}

/// Content shown as a skeleton until a `ContentGate` opens.
///
/// The content itself is only constructed once the gate is ready, so any
/// resources it acquires are not held while the skeleton is showing.
pub struct Gated {
    gate: ContentGate,
    skeleton: SkeletonLoader,
    factory: Option<ComponentFactory>,
    content: Option<Box<dyn Component>>,
}

impl Gated {
    /// Mount gated content with the configured content delay.
    pub fn mount(cx: &RenderContext<'_>, skeleton: SkeletonLoader, factory: ComponentFactory) -> Self {
        let element = cx.host.allocate_element();
        cx.report(element, LifecyclePhase::Mounted);
        Self {
            gate: ContentGate::mount(cx, element),
            skeleton,
            factory: Some(factory),
            content: None,
        }
    }

    pub fn gate(&self) -> &ContentGate {
        &self.gate
    }

    /// The mounted content, once ready.
    pub fn content(&self) -> Option<&dyn Component> {
        self.content.as_deref()
    }
}

impl Component for Gated {
    fn render(&self) -> String {
        let content = self.content.as_ref();
        self.skeleton.render(content.is_none(), || {
            content.map(|c| c.render()).unwrap_or_default()
        })
    }

    fn handle(&mut self, event: &HostEvent, cx: &RenderContext<'_>) -> bool {
        if self.gate.handle(event, cx) {
            if let Some(factory) = self.factory.take() {
                self.content = Some(factory(cx));
            }
            return true;
        }
        match self.content.as_mut() {
            Some(content) => content.handle(event, cx),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use leveling_core::DeferredConfig;

    use super::*;
    use crate::component::{factory, StaticHtml};
    use crate::sim::SimulatedHost;
    use crate::skeleton::{PlaceholderShape, PlaceholderSpec};

    fn deliver(gate: &mut ContentGate, events: Vec<HostEvent>, cx: &RenderContext<'_>) -> usize {
        events.iter().filter(|event| gate.handle(event, cx)).count()
    }

    #[test]
    fn test_flips_once_after_delay() {
        let host = SimulatedHost::default();
        let config = DeferredConfig::default();
        let cx = RenderContext::new(&host, &config);
        let mut gate = ContentGate::mount(&cx, host.allocate_element());

        assert!(!gate.is_ready());
        assert_eq!(deliver(&mut gate, host.advance(Duration::from_millis(799)), &cx), 0);
        assert!(!gate.is_ready());

        assert_eq!(deliver(&mut gate, host.advance(Duration::from_millis(1)), &cx), 1);
        assert!(gate.is_ready());
        assert_eq!(gate.waited(), Some(Duration::from_millis(800)));

        assert_eq!(deliver(&mut gate, host.advance(Duration::from_secs(10)), &cx), 0);
        assert!(gate.is_ready());
    }

    #[test]
    fn test_waited_is_the_delay_when_stepping_past_it() {
        let host = SimulatedHost::default();
        let config = DeferredConfig::default();
        let cx = RenderContext::new(&host, &config);
        let mut gate = ContentGate::mount(&cx, host.allocate_element());

        let events = host.advance_to_next(Duration::from_millis(1000));
        assert_eq!(deliver(&mut gate, events, &cx), 1);

        assert_eq!(gate.waited(), Some(Duration::from_millis(800)));
    }

    #[test]
    fn test_replayed_timer_event_ignored() {
        let host = SimulatedHost::default();
        let config = DeferredConfig::default();
        let cx = RenderContext::new(&host, &config);
        let mut gate = ContentGate::mount(&cx, host.allocate_element());

        let fired = host.advance(Duration::from_millis(800));
        assert_eq!(deliver(&mut gate, fired.clone(), &cx), 1);
        assert_eq!(deliver(&mut gate, fired, &cx), 0);
    }

    #[test]
    fn test_teardown_cancels_timer() {
        let host = SimulatedHost::default();
        let config = DeferredConfig::default();
        let cx = RenderContext::new(&host, &config);
        let gate = ContentGate::mount(&cx, host.allocate_element());
        host.advance(Duration::from_millis(100));

        drop(gate);

        assert_eq!(host.active_timers(), 0);
        assert_eq!(host.stats().timers_cancelled, 1);
        assert!(host.advance(Duration::from_secs(1)).is_empty());
    }

    #[test]
    fn test_configured_delay() {
        let host = SimulatedHost::default();
        let config = DeferredConfig::default().with_content_delay(Duration::from_millis(50));
        let cx = RenderContext::new(&host, &config);
        let mut gate = ContentGate::mount(&cx, host.allocate_element());

        assert_eq!(deliver(&mut gate, host.advance(Duration::from_millis(50)), &cx), 1);
    }

    #[test]
    fn test_gated_content_built_when_ready() {
        let host = SimulatedHost::default();
        let config = DeferredConfig::default();
        let cx = RenderContext::new(&host, &config);
        let skeleton = SkeletonLoader::new(PlaceholderSpec::new(PlaceholderShape::TextLine, 2));
        let mut gated = Gated::mount(
            &cx,
            skeleton,
            factory(|_| StaticHtml::new("<p>ready</p>")),
        );

        assert!(gated.content().is_none());
        assert!(gated.render().contains("skeleton"));

        let changed = host
            .advance(Duration::from_millis(800))
            .iter()
            .fold(false, |changed, event| gated.handle(event, &cx) || changed);

        assert!(changed);
        assert!(gated.gate().is_ready());
        assert_eq!(gated.render(), "<p>ready</p>");
    }
}
