//! Rendered table tree.

use crate::column::Alignment;
use crate::node::Node;
use crate::pagination::PagerView;

/// Message shown while data is loading.
pub const LOADING_MESSAGE: &str = "Loading data…";

/// Message shown for an empty table when the caller supplies none.
pub const DEFAULT_EMPTY_MESSAGE: &str = "No data available";

/// Which of the three body states a table is in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TableState {
    Loading,
    Empty,
    Populated,
}

/// A header cell.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderCell {
    pub label: String,
    pub class_name: Option<String>,
    pub min_width: Option<String>,
    pub max_width: Option<String>,
    pub align: Alignment,
}

/// A body cell.
#[derive(Clone, Debug, PartialEq)]
pub struct CellView {
    pub content: Node,
    pub class_name: Option<String>,
    pub min_width: Option<String>,
    pub max_width: Option<String>,
    pub align: Alignment,
    /// Cells do not wrap unless a frontend overrides it.
    pub nowrap: bool,
}

/// A body row.
#[derive(Clone, Debug, PartialEq)]
pub struct RowView {
    /// Stable identity of the row within the page.
    pub key: String,
    /// Position of the record in the data slice.
    pub index: usize,
    pub class_name: Option<String>,
    /// Set when a row click handler is attached.
    pub clickable: bool,
    pub cells: Vec<CellView>,
}

/// The table body.
#[derive(Clone, Debug, PartialEq)]
pub enum TableBody {
    /// Single placeholder row spanning all columns.
    Loading {
        colspan: usize,
        indicator: Node,
        message: String,
    },
    /// Single message row spanning all columns.
    Empty { colspan: usize, message: String },
    Rows(Vec<RowView>),
}

/// The rendered table.
#[derive(Clone, Debug, PartialEq)]
pub struct TableView {
    pub header: Vec<HeaderCell>,
    pub body: TableBody,
    pub pagination: Option<PagerView>,
}

impl TableView {
    /// The body state this view was rendered in.
    pub fn state(&self) -> TableState {
        match self.body {
            TableBody::Loading { .. } => TableState::Loading,
            TableBody::Empty { .. } => TableState::Empty,
            TableBody::Rows(_) => TableState::Populated,
        }
    }

    /// Body rows; empty unless populated.
    pub fn rows(&self) -> &[RowView] {
        match &self.body {
            TableBody::Rows(rows) => rows,
            _ => &[],
        }
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.header.len()
    }
}
