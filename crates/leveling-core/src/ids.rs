//! Newtype ids handed out by hosts.
//!
//! Every resource a host allocates (an element, a proximity observation, a
//! timer, a media request, a module load) gets its own id type so that a timer id can never
//! be mistaken for an observation id when events are routed.

use std::cell::Cell;
use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        /// A host-allocated identifier.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name(u64);

        impl $name {
            /// Wrap a raw id value.
            pub const fn new(raw: u64) -> Self {
                Self(raw)
            }

            /// Get the raw id value.
            pub const fn get(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}-{}", $prefix, self.0)
            }
        }
    };
}

define_id!(ElementId, "el");
define_id!(ObservationId, "obs");
define_id!(TimerId, "timer");
define_id!(MediaRequestId, "media");
define_id!(ModuleId, "module");

/// Monotonic id source. Ids are never reused within one allocator.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: Cell<u64>,
}

impl IdAllocator {
    /// Create an allocator starting at 1.
    pub fn new() -> Self {
        Self { next: Cell::new(1) }
    }

    /// Allocate the next raw id.
    pub fn next_raw(&self) -> u64 {
        let id = self.next.get().max(1);
        self.next.set(id + 1);
        id
    }

    /// Allocate an element id.
    pub fn element(&self) -> ElementId {
        ElementId::new(self.next_raw())
    }
}
