//! Row selection tracking.

use serde::Serialize;

use crate::model::Record;

/// Selected record ids, in the order they were selected.
///
/// Selection is stored by id rather than by record so it survives sorting,
/// filtering and dataset replacement. Records are resolved back from the
/// projected rows when read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: Vec<String>,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a key. Returns true if the selection changed.
    pub fn select(&mut self, key: impl Into<String>) -> bool {
        let key = key.into();
        if self.is_selected(&key) {
            return false;
        }
        self.ids.push(key);
        true
    }

    /// Removes a key. Returns true if the selection changed.
    pub fn deselect(&mut self, key: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|id| id != key);
        self.ids.len() != before
    }

    /// Check if a key is selected.
    pub fn is_selected(&self, key: &str) -> bool {
        self.ids.iter().any(|id| id == key)
    }

    /// Keeps only keys for which `keep` returns true.
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.ids.retain(|id| keep(id));
    }

    /// Clear all selections.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Get all selected keys in selection order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// JSON shape of the selection result: `{ "products": [ ... ] }`.
#[derive(Debug, Clone, Serialize)]
pub struct SelectionExport<'a> {
    /// Selected records, projected shape, in selection order.
    pub products: Vec<&'a Record>,
}

impl SelectionExport<'_> {
    /// Pretty JSON with two-space indentation.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_is_idempotent() {
        let mut selection = Selection::new();
        assert!(selection.select("1"));
        assert!(!selection.select("1"));
        assert_eq!(selection.len(), 1);
    }

    #[test]
    fn test_deselect() {
        let mut selection = Selection::new();
        selection.select("1");
        selection.select("2");
        assert!(selection.deselect("1"));
        assert!(!selection.deselect("1"));
        assert_eq!(selection.keys().collect::<Vec<_>>(), vec!["2"]);
    }

    #[test]
    fn test_keeps_selection_order() {
        let mut selection = Selection::new();
        selection.select("9");
        selection.select("3");
        selection.select("5");
        assert_eq!(selection.keys().collect::<Vec<_>>(), vec!["9", "3", "5"]);
    }

    #[test]
    fn test_export_shape() {
        let record = Record::new().set("id", 1).set("price", 12.5);
        let export = SelectionExport {
            products: vec![&record],
        };
        let expected = "{\n  \"products\": [\n    {\n      \"id\": 1,\n      \"price\": 12.5\n    }\n  ]\n}";
        assert_eq!(export.to_json_pretty().unwrap(), expected);
    }
}
