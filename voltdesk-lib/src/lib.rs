//! Tabular rendering and pagination core for the voltdesk operations console.
//!
//! Everything in this crate is a pure function of its inputs: records and
//! column descriptors go in, a render tree comes out. Fetching, page state and
//! event handling belong to the caller.

pub mod accessor;
pub mod cell;
pub mod column;
pub mod error;
pub mod model;
pub mod node;
pub mod pagination;
pub mod table;
pub mod text;

pub use accessor::resolve;
pub use cell::{NOT_AVAILABLE, render_cell};
pub use column::{Alignment, Column};
pub use error::RecordError;
pub use model::{Fields, Record, Value};
pub use node::Node;
pub use pagination::{PageMeta, PageToken, Pager, PagerView, window_pages};
pub use table::{Table, TableState, TableView};
