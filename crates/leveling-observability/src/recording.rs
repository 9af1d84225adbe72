//! Session recordings for offline inspection.
//!
//! A recording captures one browsing session on a simulated host: the host
//! events delivered, the lifecycle phases they caused, and the section chunks
//! streamed, all stamped with virtual time.

use std::cell::RefCell;
use std::time::Duration;

use chrono::{DateTime, Utc};
use leveling_core::{ElementId, LifecycleObserver, LifecyclePhase, TimingContext};
use serde::{Deserialize, Serialize};

/// A host event delivered during the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordedEvent {
    /// Virtual time in milliseconds.
    pub at_ms: u64,
    pub kind: String,
    /// Serialized event payload.
    pub detail: serde_json::Value,
}

/// A lifecycle phase entered by an element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedPhase {
    pub at_ms: u64,
    pub element: String,
    pub phase: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// How a section chunk was streamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkKind {
    Content,
    Placeholder,
    Swap,
}

/// A section chunk streamed to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordedSection {
    pub name: String,
    pub kind: ChunkKind,
    pub at_ms: u64,
    pub bytes: usize,
}

/// A complete session recording.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionRecording {
    /// Recording format version.
    pub version: u32,
    pub session_id: String,
    pub route: String,
    pub recorded_at: DateTime<Utc>,
    pub events: Vec<RecordedEvent>,
    pub phases: Vec<RecordedPhase>,
    pub sections: Vec<RecordedSection>,
    /// Virtual time at the end of the session, in milliseconds.
    pub finished_at_ms: u64,
}

impl SessionRecording {
    /// Current recording format version.
    pub const VERSION: u32 = 1;

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Phases entered by one element, in order.
    pub fn phases_of(&self, element: &str) -> Vec<&str> {
        self.phases
            .iter()
            .filter(|p| p.element == element)
            .map(|p| p.phase.as_str())
            .collect()
    }

    /// Number of recorded events of a kind.
    pub fn count_events(&self, kind: &str) -> usize {
        self.events.iter().filter(|e| e.kind == kind).count()
    }
}

/// Records a session as it runs.
///
/// Implements `LifecycleObserver`, so it can be attached to a render context
/// directly. Interior mutability lets it record through a shared reference.
#[derive(Debug)]
pub struct SessionRecorder {
    session_id: String,
    route: String,
    recorded_at: DateTime<Utc>,
    events: RefCell<Vec<RecordedEvent>>,
    phases: RefCell<Vec<RecordedPhase>>,
    sections: RefCell<Vec<RecordedSection>>,
    timing: RefCell<TimingContext>,
}

impl SessionRecorder {
    pub fn new(session_id: impl Into<String>, route: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            route: route.into(),
            recorded_at: Utc::now(),
            events: RefCell::new(Vec::new()),
            phases: RefCell::new(Vec::new()),
            sections: RefCell::new(Vec::new()),
            timing: RefCell::new(TimingContext::new()),
        }
    }

    /// Record a delivered host event.
    pub fn record_event(&self, at: Duration, kind: &str, detail: impl Serialize) {
        let detail = serde_json::to_value(detail).unwrap_or(serde_json::Value::Null);
        self.events.borrow_mut().push(RecordedEvent {
            at_ms: millis(at),
            kind: kind.to_string(),
            detail,
        });
    }

    /// Record a streamed section chunk.
    pub fn record_section(&self, name: &str, kind: ChunkKind, at: Duration, bytes: usize) {
        {
            let mut timing = self.timing.borrow_mut();
            match kind {
                ChunkKind::Placeholder => timing.mark_placeholder(name, at),
                ChunkKind::Swap => timing.mark_swapped(name, at),
                ChunkKind::Content => timing.mark(&format!("section_{}_content", name), at),
            }
        }
        self.sections.borrow_mut().push(RecordedSection {
            name: name.to_string(),
            kind,
            at_ms: millis(at),
            bytes,
        });
    }

    /// Timing marks collected so far.
    pub fn timing(&self) -> TimingContext {
        self.timing.borrow().clone()
    }

    /// Finish recording at virtual time `at`.
    pub fn finish(self, at: Duration) -> SessionRecording {
        SessionRecording {
            version: SessionRecording::VERSION,
            session_id: self.session_id,
            route: self.route,
            recorded_at: self.recorded_at,
            events: self.events.into_inner(),
            phases: self.phases.into_inner(),
            sections: self.sections.into_inner(),
            finished_at_ms: millis(at),
        }
    }
}

impl LifecycleObserver for SessionRecorder {
    fn on_phase(&self, element: ElementId, phase: &LifecyclePhase, at: Duration) {
        let detail = match phase {
            LifecyclePhase::Failed(reason) => Some(reason.clone()),
            LifecyclePhase::Swapped(section) => Some(section.clone()),
            _ => None,
        };
        self.phases.borrow_mut().push(RecordedPhase {
            at_ms: millis(at),
            element: element.to_string(),
            phase: phase.label().to_string(),
            detail,
        });
    }
}

fn millis(at: Duration) -> u64 {
    at.as_millis() as u64
}
