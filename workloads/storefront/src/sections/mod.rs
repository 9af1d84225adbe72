//! Storefront sections and the presentational components they are built from.
//!
//! Stateless pieces are `render_*` functions. Pieces with state or host
//! resources are `Component`s mounted against a `RenderContext`.

mod account;
mod breadcrumbs;
mod contact;
mod featured;
mod footer;
mod header;
mod hero;
mod modals;
mod nav;
mod product_card;
mod scroll_top;
mod search;

pub use account::*;
pub use breadcrumbs::*;
pub use contact::*;
pub use featured::*;
pub use footer::*;
pub use header::*;
pub use hero::*;
pub use modals::*;
pub use nav::*;
pub use product_card::*;
pub use scroll_top::*;
pub use search::*;
