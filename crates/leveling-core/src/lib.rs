//! Core types for the Leveling storefront.
//!
//! This crate provides the fundamental types shared by every other crate:
//! - `ElementId`, `ObservationId`, `TimerId`, `MediaRequestId`, `ModuleId` - Host-allocated ids
//! - `LifecyclePhase` / `TimingContext` - Element lifecycle tracking on virtual time
//! - `DeferredConfig` / `ProximityOptions` - Deferred rendering tuning
//! - `RouteTable` - Page route configuration
//! - `RenderError` - Error type for rendering and streaming

mod config;
mod error;
mod ids;
mod lifecycle;

pub use config::*;
pub use error::*;
pub use ids::*;
pub use lifecycle::*;
