//! Column schema

use std::str::FromStr;

use crate::error::ParseColumnError;

/// A table column: the record field it shows and its header label.
///
/// The ordered list of columns is both the projection set and the display
/// order. Keys are expected to be unique but this is not checked.
///
/// # Examples
///
/// ```
/// use datatable_lib::model::Column;
///
/// let columns = vec![
///     Column::new("id", "ID"),
///     Column::new("title", "Title"),
/// ];
///
/// // "key=Label" form, as accepted on the command line
/// let price: Column = "price=Price".parse().unwrap();
/// assert_eq!(price.key, "price");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    /// Record field name.
    pub key: String,
    /// Header text.
    pub label: String,
}

impl Column {
    /// Creates a column for `key` with header `label`.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
        }
    }
}

/// Parses `key=Label`. A bare `key` uses the key as its label.
impl FromStr for Column {
    type Err = ParseColumnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (key, label) = match s.split_once('=') {
            Some((key, label)) => (key.trim(), label.trim()),
            None => (s.trim(), s.trim()),
        };
        if key.is_empty() {
            return Err(ParseColumnError::EmptyKey(s.to_string()));
        }
        Ok(Column::new(key, label))
    }
}

/// An ordered sequence of records.
pub type Dataset = Vec<super::Record>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_label() {
        let column: Column = "discountPercentage=Discount Percentage".parse().unwrap();
        assert_eq!(column, Column::new("discountPercentage", "Discount Percentage"));
    }

    #[test]
    fn test_parse_bare_key() {
        let column: Column = "brand".parse().unwrap();
        assert_eq!(column, Column::new("brand", "brand"));
    }

    #[test]
    fn test_parse_empty_key() {
        assert!("=Label".parse::<Column>().is_err());
        assert!("".parse::<Column>().is_err());
    }
}
