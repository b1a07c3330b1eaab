//! Column descriptors.

use std::fmt;
use std::sync::Arc;

use crate::node::Node;

/// Custom cell renderer. Receives the whole record.
pub type CellFn<T> = Arc<dyn Fn(&T) -> Node + Send + Sync>;

/// Horizontal alignment of cell content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

/// A table column definition.
///
/// # Example
///
/// ```
/// use voltdesk_lib::{Column, Node, Record};
///
/// let columns: Vec<Column<Record>> = vec![
///     Column::new("Charger", "id").tooltip(),
///     Column::new("City", "location.city").min_width("12ch"),
///     Column::new("Status", "status").cell(|row: &Record| {
///         Node::text(row.get_str("status").unwrap_or("unknown")).class("badge")
///     }),
/// ];
/// ```
pub struct Column<T> {
    /// Header text displayed at the top.
    pub header: String,
    /// Dotted path of the field shown when no custom cell is set.
    pub accessor_key: String,
    /// Custom renderer; takes precedence over `accessor_key`.
    pub cell: Option<CellFn<T>>,
    /// Style class applied to every cell of the column.
    pub class_name: Option<String>,
    /// Wrap textual values so truncated text stays inspectable.
    pub enable_tooltip: bool,
    /// Minimum width hint, e.g. `"8ch"` or `"120px"`.
    pub min_width: Option<String>,
    /// Maximum width hint.
    pub max_width: Option<String>,
    /// Content alignment.
    pub align: Alignment,
}

impl<T> Column<T> {
    /// Create a column showing the field at `accessor_key`.
    pub fn new(header: impl Into<String>, accessor_key: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            accessor_key: accessor_key.into(),
            cell: None,
            class_name: None,
            enable_tooltip: false,
            min_width: None,
            max_width: None,
            align: Alignment::default(),
        }
    }

    /// Render cells of this column with a custom function.
    pub fn cell(mut self, render: impl Fn(&T) -> Node + Send + Sync + 'static) -> Self {
        self.cell = Some(Arc::new(render));
        self
    }

    /// Set the style class for this column's cells.
    pub fn class_name(mut self, class: impl Into<String>) -> Self {
        self.class_name = Some(class.into());
        self
    }

    /// Enable the tooltip affordance for textual values.
    pub fn tooltip(mut self) -> Self {
        self.enable_tooltip = true;
        self
    }

    /// Set the minimum width hint.
    pub fn min_width(mut self, width: impl Into<String>) -> Self {
        self.min_width = Some(width.into());
        self
    }

    /// Set the maximum width hint.
    pub fn max_width(mut self, width: impl Into<String>) -> Self {
        self.max_width = Some(width.into());
        self
    }

    /// Set the content alignment.
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Returns `true` if the column has a custom renderer.
    pub fn has_custom_cell(&self) -> bool {
        self.cell.is_some()
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            header: self.header.clone(),
            accessor_key: self.accessor_key.clone(),
            cell: self.cell.clone(),
            class_name: self.class_name.clone(),
            enable_tooltip: self.enable_tooltip,
            min_width: self.min_width.clone(),
            max_width: self.max_width.clone(),
            align: self.align,
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("header", &self.header)
            .field("accessor_key", &self.accessor_key)
            .field("cell", &self.cell.as_ref().map(|_| "<fn>"))
            .field("class_name", &self.class_name)
            .field("enable_tooltip", &self.enable_tooltip)
            .field("min_width", &self.min_width)
            .field("max_width", &self.max_width)
            .field("align", &self.align)
            .finish()
    }
}
