//! Table renderer.
//!
//! [`Table`] is a set of props borrowed from the caller; [`Table::render`]
//! turns them into a [`TableView`]. Nothing is cached between renders.

mod view;

pub use view::*;

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::accessor::resolve_present;
use crate::cell::render_cell;
use crate::column::Column;
use crate::model::Fields;
use crate::node::Node;
use crate::pagination::Pager;

/// Called with the clicked record.
pub type RowClickFn<T> = Arc<dyn Fn(&T) + Send + Sync>;

// =============================================================================
// Row keys and classes
// =============================================================================

/// How a row's identity is derived.
pub enum RowKey<T> {
    /// Dotted path of a field on the record.
    Field(String),
    /// Function of the record.
    With(Arc<dyn Fn(&T) -> Option<String> + Send + Sync>),
}

impl<T: Fields> RowKey<T> {
    /// Key for `row` at `index`, falling back to `row-<index>` when the
    /// record yields nothing.
    pub fn key_for(&self, row: &T, index: usize) -> String {
        self.own_key(row).unwrap_or_else(|| synthetic_key(index))
    }

    /// The key the record itself provides, if any.
    pub fn own_key(&self, row: &T) -> Option<String> {
        match self {
            RowKey::Field(path) => resolve_present(row, path).map(|value| value.to_string()),
            RowKey::With(key_fn) => key_fn(row),
        }
    }
}

impl<T> Clone for RowKey<T> {
    fn clone(&self) -> Self {
        match self {
            RowKey::Field(path) => RowKey::Field(path.clone()),
            RowKey::With(key_fn) => RowKey::With(key_fn.clone()),
        }
    }
}

impl<T> From<&str> for RowKey<T> {
    fn from(path: &str) -> Self {
        RowKey::Field(path.to_string())
    }
}

/// Key used for rows whose own key is missing.
pub fn synthetic_key(index: usize) -> String {
    format!("row-{index}")
}

/// `row-<index>`, or `row-<index>-<n>` with the smallest `n` that no other
/// row uses.
fn free_synthetic_key(index: usize, taken: &mut HashSet<String>) -> String {
    let mut key = synthetic_key(index);
    let mut n = 1;
    while taken.contains(&key) {
        key = format!("{}-{n}", synthetic_key(index));
        n += 1;
    }
    taken.insert(key.clone());
    key
}

/// Per-row style class.
pub enum RowClass<T> {
    Static(String),
    With(Arc<dyn Fn(&T, usize) -> String + Send + Sync>),
}

impl<T> RowClass<T> {
    fn class_for(&self, row: &T, index: usize) -> String {
        match self {
            RowClass::Static(class) => class.clone(),
            RowClass::With(class_fn) => class_fn(row, index),
        }
    }
}

impl<T> Clone for RowClass<T> {
    fn clone(&self) -> Self {
        match self {
            RowClass::Static(class) => RowClass::Static(class.clone()),
            RowClass::With(class_fn) => RowClass::With(class_fn.clone()),
        }
    }
}

// =============================================================================
// Table
// =============================================================================

/// Table props.
///
/// # Example
///
/// ```
/// use voltdesk_lib::{Column, Record, Table, TableState};
///
/// let columns = vec![Column::new("Charger", "id"), Column::new("City", "location.city")];
/// let data = vec![Record::new().set("id", "CP-1")];
///
/// let view = Table::new(&columns, &data).key_field("id").render();
/// assert_eq!(view.state(), TableState::Populated);
/// assert_eq!(view.rows()[0].cells[1].content.plain_text(), "N/A");
/// ```
pub struct Table<'a, T> {
    columns: &'a [Column<T>],
    data: &'a [T],
    is_loading: bool,
    empty_message: Option<String>,
    key: RowKey<T>,
    row_class: Option<RowClass<T>>,
    on_row_click: Option<RowClickFn<T>>,
    pagination: Option<Pager>,
}

impl<'a, T: Fields> Table<'a, T> {
    /// Create a table over `data`. Rows are keyed by their `id` field until
    /// another key is configured.
    pub fn new(columns: &'a [Column<T>], data: &'a [T]) -> Self {
        Self {
            columns,
            data,
            is_loading: false,
            empty_message: None,
            key: RowKey::Field("id".to_string()),
            row_class: None,
            on_row_click: None,
            pagination: None,
        }
    }

    /// Mark the data as being (re)fetched.
    pub fn loading(mut self, is_loading: bool) -> Self {
        self.is_loading = is_loading;
        self
    }

    /// Message shown when there are no records.
    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = Some(message.into());
        self
    }

    /// Key rows by the field at `path`.
    pub fn key_field(mut self, path: impl Into<String>) -> Self {
        self.key = RowKey::Field(path.into());
        self
    }

    /// Key rows with a function of the record.
    pub fn key_with(mut self, key_fn: impl Fn(&T) -> Option<String> + Send + Sync + 'static) -> Self {
        self.key = RowKey::With(Arc::new(key_fn));
        self
    }

    /// Apply the same class to every row.
    pub fn row_class(mut self, class: impl Into<String>) -> Self {
        self.row_class = Some(RowClass::Static(class.into()));
        self
    }

    /// Compute each row's class from the record and its index.
    pub fn row_class_with(
        mut self,
        class_fn: impl Fn(&T, usize) -> String + Send + Sync + 'static,
    ) -> Self {
        self.row_class = Some(RowClass::With(Arc::new(class_fn)));
        self
    }

    /// Make rows clickable.
    pub fn on_row_click(mut self, handler: impl Fn(&T) + Send + Sync + 'static) -> Self {
        self.on_row_click = Some(Arc::new(handler));
        self
    }

    /// Attach a pager below the table.
    pub fn pagination(mut self, pager: Pager) -> Self {
        self.pagination = Some(pager);
        self
    }

    /// The attached pager, if any.
    pub fn pager(&self) -> Option<&Pager> {
        self.pagination.as_ref()
    }

    /// The body state the next render will produce.
    pub fn state(&self) -> TableState {
        if self.is_loading {
            TableState::Loading
        } else if self.data.is_empty() {
            TableState::Empty
        } else {
            TableState::Populated
        }
    }

    /// Render the table.
    pub fn render(&self) -> TableView {
        let colspan = self.columns.len().max(1);
        let state = self.state();
        log::trace!("rendering table: {state:?}, {} records", self.data.len());

        let body = match state {
            TableState::Loading => TableBody::Loading {
                colspan,
                indicator: Node::Spinner,
                message: LOADING_MESSAGE.to_string(),
            },
            TableState::Empty => TableBody::Empty {
                colspan,
                message: self
                    .empty_message
                    .clone()
                    .unwrap_or_else(|| DEFAULT_EMPTY_MESSAGE.to_string()),
            },
            TableState::Populated => TableBody::Rows(self.render_rows()),
        };

        TableView {
            header: self.render_header(),
            body,
            pagination: self.pagination.as_ref().map(Pager::render),
        }
    }

    /// Emit a click for the row at `index`. Returns `false` if rows are inert
    /// or the index is out of range.
    pub fn click_row(&self, index: usize) -> bool {
        match (&self.on_row_click, self.data.get(index)) {
            (Some(handler), Some(row)) => {
                handler(row);
                true
            }
            _ => false,
        }
    }

    fn render_header(&self) -> Vec<HeaderCell> {
        self.columns
            .iter()
            .map(|column| HeaderCell {
                label: column.header.clone(),
                class_name: column.class_name.clone(),
                min_width: column.min_width.clone(),
                max_width: column.max_width.clone(),
                align: column.align,
            })
            .collect()
    }

    fn render_rows(&self) -> Vec<RowView> {
        let clickable = self.on_row_click.is_some();
        let own_keys: Vec<Option<String>> = self.data.iter().map(|row| self.key.own_key(row)).collect();
        let mut taken: HashSet<String> = own_keys.iter().flatten().cloned().collect();

        let rows: Vec<RowView> = self
            .data
            .iter()
            .zip(own_keys)
            .enumerate()
            .map(|(index, (row, own_key))| RowView {
                key: own_key.unwrap_or_else(|| free_synthetic_key(index, &mut taken)),
                index,
                class_name: self.row_class.as_ref().map(|rc| rc.class_for(row, index)),
                clickable,
                cells: self
                    .columns
                    .iter()
                    .map(|column| CellView {
                        content: render_cell(row, column),
                        class_name: column.class_name.clone(),
                        min_width: column.min_width.clone(),
                        max_width: column.max_width.clone(),
                        align: column.align,
                        nowrap: true,
                    })
                    .collect(),
            })
            .collect();

        let mut seen = HashSet::with_capacity(rows.len());
        for row in &rows {
            if !seen.insert(row.key.as_str()) {
                log::warn!("duplicate row key {:?} at index {}", row.key, row.index);
            }
        }
        rows
    }
}

impl<T> fmt::Debug for Table<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Table")
            .field("columns", &self.columns)
            .field("rows", &self.data.len())
            .field("is_loading", &self.is_loading)
            .field("empty_message", &self.empty_message)
            .field("clickable", &self.on_row_click.is_some())
            .field("pagination", &self.pagination)
            .finish_non_exhaustive()
    }
}
