//! Static storefront content.

mod catalog;
mod site;

pub use catalog::*;
pub use site::*;
