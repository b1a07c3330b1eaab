//! Dynamic record

use std::collections::BTreeMap;

use serde::Serialize;

use super::Value;
use crate::error::RecordError;

/// A dynamic record as delivered by a list endpoint.
///
/// Records hold field values in a sorted map so that any rendering of the
/// record, including its JSON form, is deterministic.
///
/// # Example
///
/// ```
/// use voltdesk_lib::model::Record;
///
/// let charger = Record::new()
///     .set("id", "CP-0042")
///     .set("max_power_kw", 150i64);
///
/// assert_eq!(charger.get_str("id"), Some("CP-0042"));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Record {
    fields: BTreeMap<String, Value>,
}

impl Record {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from a JSON object.
    pub fn from_json(json: serde_json::Value) -> Result<Self, RecordError> {
        match Value::from(json) {
            Value::Record(record) => Ok(*record),
            other => Err(RecordError::NotAnObject(other.type_name())),
        }
    }

    // =========================================================================
    // Raw field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &BTreeMap<String, Value> {
        &self.fields
    }

    /// Number of fields in the record.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    // =========================================================================
    // Typed getters
    // =========================================================================

    /// Returns the field as a string slice when it holds text.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(Value::as_str)
    }

    /// Returns the field as an integer when it holds one.
    pub fn get_i64(&self, field: &str) -> Option<i64> {
        match self.get(field)? {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the field as a float, widening integers.
    pub fn get_f64(&self, field: &str) -> Option<f64> {
        match self.get(field)? {
            Value::Float(v) => Some(*v),
            Value::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Returns the field as a boolean when it holds one.
    pub fn get_bool(&self, field: &str) -> Option<bool> {
        match self.get(field)? {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
