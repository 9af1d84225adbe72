//! Shell-first HTML streaming for storefront pages.
//!
//! A page is streamed as:
//! - the `Shell` opening (doctype, head, body start)
//! - one chunk per `SectionSlot` in DOM order, placeholders included
//! - swap chunks replacing placeholders whose sections became ready later
//! - the shell closing
//!
//! `StreamingSink` enforces that order and `FlushPolicy` controls when
//! buffered chunks reach the underlying sink.

mod escape;
mod flush;
mod section;
mod shell;
mod sink;

pub use escape::*;
pub use flush::*;
pub use section::*;
pub use shell::*;
pub use sink::*;
