//! Host capabilities and the events they deliver.
//!
//! A host stands in for the runtime a page is rendered in. It offers four
//! primitives: proximity observation, one-shot timers, media loading and
//! lazy module evaluation. Each registration returns a `Lease`; dropping the
//! lease releases the registration, and the host then never delivers an event
//! for it.

use std::fmt;
use std::time::Duration;

use leveling_core::{
    DeferredConfig, ElementId, LifecycleObserver, LifecyclePhase, MediaRequestId, ModuleId,
    ObservationId, ProximityOptions, TimerId,
};
use serde::{Deserialize, Serialize};

use crate::geometry::Rect;

/// A registration held with a host, released when dropped.
pub struct Lease<Id: Copy> {
    id: Id,
    release: Option<Box<dyn FnOnce(Id)>>,
}

impl<Id: Copy> Lease<Id> {
    /// Create a lease that runs `release` when dropped.
    pub fn new(id: Id, release: impl FnOnce(Id) + 'static) -> Self {
        Self {
            id,
            release: Some(Box::new(release)),
        }
    }

    /// Create a lease with nothing to release.
    pub fn detached(id: Id) -> Self {
        Self { id, release: None }
    }

    /// The leased id.
    pub fn id(&self) -> Id {
        self.id
    }
}

impl<Id: Copy> Drop for Lease<Id> {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release(self.id);
        }
    }
}

impl<Id: Copy + fmt::Debug> fmt::Debug for Lease<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lease")
            .field("id", &self.id)
            .field("armed", &self.release.is_some())
            .finish()
    }
}

/// A proximity report for one observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProximityEntry {
    pub observation: ObservationId,
    /// Intersection ratio against the margin-grown viewport.
    pub ratio: f64,
    /// Whether the ratio satisfies the observation's threshold.
    pub is_intersecting: bool,
}

/// An event delivered by a host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HostEvent {
    Proximity(ProximityEntry),
    TimerFired { timer: TimerId },
    MediaLoaded { request: MediaRequestId },
    MediaFailed { request: MediaRequestId, reason: String },
    ModuleReady { module: ModuleId },
}

impl HostEvent {
    /// Short label used in logs and recordings.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Proximity(_) => "proximity",
            Self::TimerFired { .. } => "timer_fired",
            Self::MediaLoaded { .. } => "media_loaded",
            Self::MediaFailed { .. } => "media_failed",
            Self::ModuleReady { .. } => "module_ready",
        }
    }
}

/// Viewport proximity observation.
pub trait ProximityHost {
    /// Start observing a region. The host reports the current state on its
    /// next proximity check, then again whenever `is_intersecting` changes.
    fn observe(&self, region: Rect, options: ProximityOptions) -> Lease<ObservationId>;
}

/// One-shot timers on the host clock.
pub trait TimerHost {
    /// Current host time.
    fn now(&self) -> Duration;

    /// Start a timer that fires once after `delay`.
    fn start_timer(&self, delay: Duration) -> Lease<TimerId>;
}

/// Native media loading.
pub trait MediaHost {
    /// Begin loading the media at `src`.
    fn load_media(&self, src: &str) -> Lease<MediaRequestId>;
}

/// Lazy module evaluation for deferred sections.
pub trait ModuleHost {
    /// Ask for the module backing `section` to be loaded and evaluated.
    fn request_module(&self, section: &str) -> Lease<ModuleId>;
}

/// Everything a page needs from its runtime.
pub trait Host: ProximityHost + TimerHost + MediaHost + ModuleHost {
    /// Allocate an id for a new element.
    fn allocate_element(&self) -> ElementId;
}

/// Context threaded through mounting and event handling.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    pub host: &'a dyn Host,
    pub config: &'a DeferredConfig,
    observer: Option<&'a dyn LifecycleObserver>,
}

impl<'a> RenderContext<'a> {
    /// Create a context without a lifecycle observer.
    pub fn new(host: &'a dyn Host, config: &'a DeferredConfig) -> Self {
        Self {
            host,
            config,
            observer: None,
        }
    }

    /// Attach a lifecycle observer.
    pub fn with_observer(mut self, observer: &'a dyn LifecycleObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Report a lifecycle phase for an element.
    pub fn report(&self, element: ElementId, phase: LifecyclePhase) {
        let at = self.host.now();
        tracing::debug!(%element, phase = phase.label(), at_ms = at.as_millis() as u64, "lifecycle");
        if let Some(observer) = self.observer {
            observer.on_phase(element, &phase, at);
        }
    }
}
