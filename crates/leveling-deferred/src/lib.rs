//! Deferred-visibility rendering pipeline.
//!
//! Components defer expensive rendering until it is needed and show inert
//! placeholders meanwhile:
//! - `VisibilityDetector` - one-shot viewport proximity signal
//! - `DeferredMedia` - lazily mounted media with a crossfade on load
//! - `render_skeleton` / `SkeletonLoader` - inert placeholder layouts
//! - `DeferredSection` / `SectionList` - sections mounted once their module is ready
//! - `ContentGate` - readiness that flips once after a fixed delay
//!
//! Browser primitives are reached through the `Host` traits. Every resource a
//! host hands out is a `Lease` released on drop, so tearing down a component
//! releases its observations, timers and requests on every exit path.
//! `SimulatedHost` is a deterministic host with a virtual clock and viewport.

mod component;
mod gate;
mod geometry;
mod host;
mod media;
mod section;
mod sim;
mod skeleton;
mod visibility;

pub use component::*;
pub use gate::*;
pub use geometry::*;
pub use host::*;
pub use media::*;
pub use section::*;
pub use sim::*;
pub use skeleton::*;
pub use visibility::*;
