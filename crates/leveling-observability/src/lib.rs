//! Observability for storefront page sessions.
//!
//! This crate provides:
//! - `SessionId` - Identifier correlating the log lines of one page session
//! - `StructuredLogger` - Structured logging with session and route context
//! - `SessionRecorder` / `SessionRecording` - Recordings of simulated sessions

mod logging;
mod recording;

pub use logging::*;
pub use recording::*;

// Re-export TimingContext from leveling-core for convenience
pub use leveling_core::TimingContext;
