//! Key access over arbitrary record types

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::collections::HashMap;

use super::Record;
use super::Value;

/// Top-level field lookup for a record type.
///
/// This is the only thing the table core assumes about a record. Nested paths
/// are walked by the accessor on the returned [`Value`], so an implementation
/// only has to answer for its own direct fields.
///
/// # Example
///
/// ```
/// use std::borrow::Cow;
/// use voltdesk_lib::model::{Fields, Value};
///
/// struct Charger {
///     id: String,
///     online: bool,
/// }
///
/// impl Fields for Charger {
///     fn field(&self, name: &str) -> Option<Cow<'_, Value>> {
///         match name {
///             "id" => Some(Cow::Owned(Value::from(self.id.as_str()))),
///             "online" => Some(Cow::Owned(Value::from(self.online))),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Fields {
    /// Returns the value stored under `name`, if the record has that field.
    fn field(&self, name: &str) -> Option<Cow<'_, Value>>;
}

impl Fields for Record {
    fn field(&self, name: &str) -> Option<Cow<'_, Value>> {
        self.get(name).map(Cow::Borrowed)
    }
}

impl Fields for Value {
    fn field(&self, name: &str) -> Option<Cow<'_, Value>> {
        self.get(name).map(Cow::Borrowed)
    }
}

impl Fields for serde_json::Value {
    fn field(&self, name: &str) -> Option<Cow<'_, Value>> {
        let child = match self {
            serde_json::Value::Object(map) => map.get(name),
            serde_json::Value::Array(items) => {
                name.parse::<usize>().ok().and_then(|i| items.get(i))
            }
            _ => None,
        }?;
        Some(Cow::Owned(Value::from(child.clone())))
    }
}

impl Fields for HashMap<String, Value> {
    fn field(&self, name: &str) -> Option<Cow<'_, Value>> {
        self.get(name).map(Cow::Borrowed)
    }
}

impl Fields for BTreeMap<String, Value> {
    fn field(&self, name: &str) -> Option<Cow<'_, Value>> {
        self.get(name).map(Cow::Borrowed)
    }
}

impl<T: Fields + ?Sized> Fields for &T {
    fn field(&self, name: &str) -> Option<Cow<'_, Value>> {
        (**self).field(name)
    }
}

impl<T: Fields + ?Sized> Fields for Box<T> {
    fn field(&self, name: &str) -> Option<Cow<'_, Value>> {
        (**self).field(name)
    }
}
