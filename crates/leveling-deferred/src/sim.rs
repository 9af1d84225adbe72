//! Deterministic simulated host.
//!
//! `SimulatedHost` keeps a virtual clock, a virtual viewport, and the
//! registrations handed out through leases. Nothing happens on its own: the
//! driver scrolls, advances time, completes media and readies modules, and
//! each call returns the events to deliver.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};
use std::time::Duration;

use leveling_core::{
    ElementId, IdAllocator, MediaRequestId, ModuleId, ObservationId, ProximityOptions, TimerId,
};

use crate::geometry::{intersection_ratio, meets_threshold, Rect, Viewport};
use crate::host::{
    Host, HostEvent, Lease, MediaHost, ModuleHost, ProximityEntry, ProximityHost, TimerHost,
};

#[derive(Debug)]
struct Observer {
    region: Rect,
    options: ProximityOptions,
    last_reported: Option<bool>,
}

/// Counts of registrations released through dropped leases.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReleaseStats {
    /// Observations released while still registered.
    pub observations_released: usize,
    /// Timers cancelled before firing.
    pub timers_cancelled: usize,
    /// Media requests abandoned before completing.
    pub media_abandoned: usize,
    /// Module requests abandoned before the module was ready.
    pub modules_abandoned: usize,
}

#[derive(Debug, Default)]
struct SimState {
    now: Duration,
    viewport: Viewport,
    observers: BTreeMap<ObservationId, Observer>,
    timers: BTreeMap<TimerId, Duration>,
    media: BTreeMap<MediaRequestId, String>,
    modules: BTreeMap<ModuleId, String>,
    stats: ReleaseStats,
}

/// A host with a virtual clock and viewport.
#[derive(Debug, Clone)]
pub struct SimulatedHost {
    state: Rc<RefCell<SimState>>,
    ids: Rc<IdAllocator>,
}

impl SimulatedHost {
    /// Create a host with the given viewport, scrolled to the top at time zero.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            state: Rc::new(RefCell::new(SimState {
                viewport,
                ..SimState::default()
            })),
            ids: Rc::new(IdAllocator::new()),
        }
    }

    /// Current viewport.
    pub fn viewport(&self) -> Viewport {
        self.state.borrow().viewport
    }

    /// Scroll to `scroll_y` and report proximity changes.
    pub fn scroll_to(&self, scroll_y: f64) -> Vec<HostEvent> {
        self.state.borrow_mut().viewport.scroll_y = scroll_y.max(0.0);
        self.check_proximity()
    }

    /// Report every observation whose intersecting state changed since its
    /// last report. New observations always report once.
    pub fn check_proximity(&self) -> Vec<HostEvent> {
        let mut state = self.state.borrow_mut();
        let viewport = state.viewport;
        let mut events = Vec::new();

        for (id, observer) in state.observers.iter_mut() {
            let ratio = intersection_ratio(&observer.region, &viewport, &observer.options);
            let is_intersecting = meets_threshold(ratio, &observer.options);
            if observer.last_reported != Some(is_intersecting) {
                observer.last_reported = Some(is_intersecting);
                events.push(HostEvent::Proximity(ProximityEntry {
                    observation: *id,
                    ratio,
                    is_intersecting,
                }));
            }
        }

        events
    }

    /// Advance the clock by `by`, firing due timers in deadline order.
    ///
    /// The clock ends at `now + by`. Callers that need each timer handled at
    /// its own deadline should step with [`SimulatedHost::advance_to_next`].
    pub fn advance(&self, by: Duration) -> Vec<HostEvent> {
        let target = self.now() + by;
        let mut events = Vec::new();
        loop {
            let batch = self.advance_to_next(target);
            if batch.is_empty() {
                break;
            }
            events.extend(batch);
        }
        let mut state = self.state.borrow_mut();
        state.now = state.now.max(target);
        events
    }

    /// Fire the timers sharing the earliest deadline, if that deadline is no
    /// later than `limit`. The clock moves to the deadline; when nothing is
    /// due it stays put and no events are returned.
    pub fn advance_to_next(&self, limit: Duration) -> Vec<HostEvent> {
        let mut state = self.state.borrow_mut();
        let Some(deadline) = state.timers.values().copied().filter(|d| *d <= limit).min() else {
            return Vec::new();
        };
        let due: Vec<TimerId> = state
            .timers
            .iter()
            .filter(|(_, d)| **d == deadline)
            .map(|(id, _)| *id)
            .collect();

        for id in &due {
            state.timers.remove(id);
        }
        state.now = state.now.max(deadline);
        due.into_iter()
            .map(|timer| HostEvent::TimerFired { timer })
            .collect()
    }

    /// Complete a pending media request.
    pub fn complete_media(&self, request: MediaRequestId) -> Option<HostEvent> {
        self.state
            .borrow_mut()
            .media
            .remove(&request)
            .map(|_| HostEvent::MediaLoaded { request })
    }

    /// Fail a pending media request.
    pub fn fail_media(&self, request: MediaRequestId, reason: &str) -> Option<HostEvent> {
        self.state
            .borrow_mut()
            .media
            .remove(&request)
            .map(|_| HostEvent::MediaFailed {
                request,
                reason: reason.to_string(),
            })
    }

    /// Complete every pending media request.
    pub fn complete_all_media(&self) -> Vec<HostEvent> {
        let requests = std::mem::take(&mut self.state.borrow_mut().media);
        requests
            .into_keys()
            .map(|request| HostEvent::MediaLoaded { request })
            .collect()
    }

    /// Mark every requested module as evaluated.
    pub fn ready_modules(&self) -> Vec<HostEvent> {
        let modules = std::mem::take(&mut self.state.borrow_mut().modules);
        modules
            .into_keys()
            .map(|module| HostEvent::ModuleReady { module })
            .collect()
    }

    /// Number of live proximity observations.
    pub fn active_observations(&self) -> usize {
        self.state.borrow().observers.len()
    }

    /// Number of timers not yet fired or cancelled.
    pub fn active_timers(&self) -> usize {
        self.state.borrow().timers.len()
    }

    /// Pending media requests as (id, src).
    pub fn pending_media(&self) -> Vec<(MediaRequestId, String)> {
        self.state
            .borrow()
            .media
            .iter()
            .map(|(id, src)| (*id, src.clone()))
            .collect()
    }

    /// Sections whose modules are requested but not yet ready.
    pub fn pending_modules(&self) -> Vec<String> {
        self.state.borrow().modules.values().cloned().collect()
    }

    /// Release counters.
    pub fn stats(&self) -> ReleaseStats {
        self.state.borrow().stats
    }

    fn weak(&self) -> Weak<RefCell<SimState>> {
        Rc::downgrade(&self.state)
    }
}

impl Default for SimulatedHost {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl ProximityHost for SimulatedHost {
    fn observe(&self, region: Rect, options: ProximityOptions) -> Lease<ObservationId> {
        let id = ObservationId::new(self.ids.next_raw());
        self.state.borrow_mut().observers.insert(
            id,
            Observer {
                region,
                options,
                last_reported: None,
            },
        );

        let state = self.weak();
        Lease::new(id, move |id| {
            if let Some(state) = state.upgrade() {
                let mut state = state.borrow_mut();
                if state.observers.remove(&id).is_some() {
                    state.stats.observations_released += 1;
                }
            }
        })
    }
}

impl TimerHost for SimulatedHost {
    fn now(&self) -> Duration {
        self.state.borrow().now
    }

    fn start_timer(&self, delay: Duration) -> Lease<TimerId> {
        let id = TimerId::new(self.ids.next_raw());
        {
            let mut state = self.state.borrow_mut();
            let deadline = state.now + delay;
            state.timers.insert(id, deadline);
        }

        let state = self.weak();
        Lease::new(id, move |id| {
            if let Some(state) = state.upgrade() {
                let mut state = state.borrow_mut();
                if state.timers.remove(&id).is_some() {
                    state.stats.timers_cancelled += 1;
                }
            }
        })
    }
}

impl MediaHost for SimulatedHost {
    fn load_media(&self, src: &str) -> Lease<MediaRequestId> {
        let id = MediaRequestId::new(self.ids.next_raw());
        self.state.borrow_mut().media.insert(id, src.to_string());

        let state = self.weak();
        Lease::new(id, move |id| {
            if let Some(state) = state.upgrade() {
                let mut state = state.borrow_mut();
                if state.media.remove(&id).is_some() {
                    state.stats.media_abandoned += 1;
                }
            }
        })
    }
}

impl ModuleHost for SimulatedHost {
    fn request_module(&self, section: &str) -> Lease<ModuleId> {
        let id = ModuleId::new(self.ids.next_raw());
        self.state
            .borrow_mut()
            .modules
            .insert(id, section.to_string());

        let state = self.weak();
        Lease::new(id, move |id| {
            if let Some(state) = state.upgrade() {
                let mut state = state.borrow_mut();
                if state.modules.remove(&id).is_some() {
                    state.stats.modules_abandoned += 1;
                }
            }
        })
    }
}

impl Host for SimulatedHost {
    fn allocate_element(&self) -> ElementId {
        self.ids.element()
    }
}
