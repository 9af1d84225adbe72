//! Leveling storefront pages.
//!
//! This workload renders the storefront on the deferred rendering pipeline:
//! - Home page with a priority hero image, a featured product grid behind a
//!   content gate, and deferred header/footer sections
//! - Login and sign-up pages with account forms
//! - Help page with a contact form that resets after a delay
//! - A not-found fallback for every other path
//!
//! `PageSession` drives a page on a `SimulatedHost` and streams it shell-first.

pub mod data;
pub mod forms;
pub mod layout;
pub mod pages;
pub mod router;
pub mod sections;
pub mod session;

pub use forms::{FormError, FormKind, FormState, Submission};
pub use pages::{Page, PageForm};
pub use router::{route_table, PageKind, Route, Router};
pub use session::PageSession;
