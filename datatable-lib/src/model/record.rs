//! Dynamic table record

use super::Value;

/// A dynamic table row.
///
/// Records hold field values in insertion order, so a projected record lists
/// its fields in column order and exports in that order too.
///
/// # Example
///
/// ```
/// use datatable_lib::model::{Record, Value};
///
/// let record = Record::new()
///     .set("id", 1)
///     .set("title", "iPhone 9")
///     .set("price", 549);
///
/// assert_eq!(record.get("title").and_then(Value::as_str), Some("iPhone 9"));
/// assert_eq!(record.key("id").as_deref(), Some("1"));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    /// The field values, in insertion order.
    pub(crate) fields: Vec<(String, Value)>,
}

impl Record {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Creates an empty record with room for `capacity` fields.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    // =========================================================================
    // Raw field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Iterates over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Iterates over field values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.fields.iter().map(|(_, value)| value)
    }

    /// Returns the number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Identity key of this record for the given id field.
    ///
    /// See [`Value::key`]. Returns `None` when the field is missing or null.
    pub fn key(&self, id_field: &str) -> Option<String> {
        self.get(id_field).and_then(Value::key)
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    /// Inserts a field value, replacing an existing field in place.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        let field = field.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((field, value)),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (field, value) in iter {
            record.insert(field, value);
        }
        record
    }
}
