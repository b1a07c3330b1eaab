//! Cell rendering.

use crate::accessor::resolve;
use crate::column::Column;
use crate::model::{Fields, Value};
use crate::node::Node;

/// Placeholder shown when a column's field is missing or null.
pub const NOT_AVAILABLE: &str = "N/A";

/// Render one cell of `row` for `column`.
///
/// A custom `cell` function wins and its output is returned untouched. Without
/// one, the column's accessor path is resolved; absent and null values show
/// [`NOT_AVAILABLE`], everything else is stringified. With `enable_tooltip`
/// the text is wrapped in [`Node::Tooltip`]. The sentinel itself is never
/// wrapped since there is nothing more to reveal.
pub fn render_cell<T: Fields>(row: &T, column: &Column<T>) -> Node {
    if let Some(render) = &column.cell {
        return render(row);
    }

    let text = match resolve(row, &column.accessor_key) {
        None | Some(Value::Null) => return Node::text(NOT_AVAILABLE),
        Some(value) => value.to_string(),
    };

    if column.enable_tooltip {
        Node::Tooltip(text)
    } else {
        Node::Text(text)
    }
}
