//! Pagination: window calculation, page metadata and the pager control.

mod control;
mod meta;
mod window;

pub use control::*;
pub use meta::*;
pub use window::*;
