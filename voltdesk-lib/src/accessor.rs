//! Dotted-path field resolution.

use std::borrow::Cow;

use crate::model::{Fields, Value};

/// Separator between segments of an accessor path.
pub const PATH_SEPARATOR: char = '.';

/// Resolve an accessor path such as `"location.city"` against a record.
///
/// A path without separators is a plain field lookup. Longer paths are folded
/// segment by segment; the walk stops with `None` as soon as a segment is
/// missing or lands on a value without children (null, scalars). List items
/// are addressed with a decimal segment, e.g. `"connectors.0.standard"`.
///
/// A null leaf is returned as `Some(Value::Null)` so callers can tell an
/// explicit null from an absent field.
pub fn resolve<T: Fields + ?Sized>(record: &T, path: &str) -> Option<Value> {
    if !path.contains(PATH_SEPARATOR) {
        return record.field(path).map(Cow::into_owned);
    }

    let mut segments = path.split(PATH_SEPARATOR);
    let root = record.field(segments.next()?)?;

    let mut current: &Value = &root;
    for segment in segments {
        current = current.get(segment)?;
    }
    Some(current.clone())
}

/// Like [`resolve`] but folds an explicit null into `None`.
pub fn resolve_present<T: Fields + ?Sized>(record: &T, path: &str) -> Option<Value> {
    resolve(record, path).filter(|value| !value.is_null())
}
