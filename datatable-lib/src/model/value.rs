//! Value enum for dynamic field values

use std::cmp::Ordering;

use serde::Deserialize;
use serde::Serialize;

/// A dynamic value held by a [`Record`](super::Record) field.
///
/// Table sources deliver strings and numbers. Anything else a JSON source
/// sends (booleans, arrays, nested objects) is kept as [`Value::Json`] so it
/// survives projection, but it never takes part in search.
///
/// # Type Mapping
///
/// | JSON | Rust Variant |
/// |------|--------------|
/// | null / absent | `Null` |
/// | number | `Number` |
/// | string | `String` |
/// | anything else | `Json` |
///
/// # Example
///
/// ```
/// use datatable_lib::model::Value;
///
/// let title = Value::from("iPhone 9");
/// let price = Value::from(549);
/// let discount = Value::from(12.96);
/// let missing = Value::Null;
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Null or absent value.
    #[default]
    Null,
    /// Numeric value, integer or float as parsed.
    Number(serde_json::Number),
    /// String value.
    String(String),
    /// Fallback for other JSON values.
    Json(serde_json::Value),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Json(_) => "json",
        }
    }

    /// Returns the string content, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the numeric content as `f64`, if this is a number.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    /// Textual identity of the value, used to match record ids.
    ///
    /// Numbers and strings with the same text are the same key, so `7` and
    /// `"7"` identify the same record. A whole float keys as its integer, so
    /// `7.0` is `"7"` too. Null has no key.
    pub fn key(&self) -> Option<String> {
        match self {
            Value::Null => None,
            Value::Number(n) => match n.as_f64() {
                Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => {
                    Some(format!("{}", f as i64))
                }
                _ => Some(n.to_string()),
            },
            Value::String(s) => Some(s.clone()),
            Value::Json(v) => Some(v.to_string()),
        }
    }

    /// Case-insensitive substring match. Only strings can match.
    pub fn contains_ignore_case(&self, needle_lower: &str) -> bool {
        match self {
            Value::String(s) => s.to_lowercase().contains(needle_lower),
            _ => false,
        }
    }

    /// Ordering used by the sorter.
    ///
    /// Strings compare lowercased, numbers compare numerically. Values of
    /// different kinds fall back to a fixed rank (numbers, strings, other
    /// JSON, null) so the order stays total.
    pub fn sort_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::String(a), Value::String(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (Value::Number(a), Value::Number(b)) => {
                let a = a.as_f64().unwrap_or(f64::NAN);
                let b = b.as_f64().unwrap_or(f64::NAN);
                a.total_cmp(&b)
            }
            (Value::Json(a), Value::Json(b)) => a.to_string().cmp(&b.to_string()),
            _ => self.rank().cmp(&other.rank()),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Number(_) => 0,
            Value::String(_) => 1,
            Value::Json(_) => 2,
            Value::Null => 3,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => f.write_str(s),
            Value::Json(v) => write!(f, "{}", v),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(v.into())
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(v.into())
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::Number(v.into())
    }
}

/// Non-finite floats have no JSON representation and become `Null`.
impl From<f64> for Value {
    fn from(v: f64) -> Self {
        serde_json::Number::from_f64(v)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Number(n) => Value::Number(n),
            serde_json::Value::String(s) => Value::String(s),
            other => Value::Json(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_matches_numbers_and_strings() {
        assert_eq!(Value::from(7).key(), Some("7".to_string()));
        assert_eq!(Value::from("7").key(), Some("7".to_string()));
        assert_eq!(Value::Null.key(), None);
    }

    #[test]
    fn test_whole_float_keys_as_integer() {
        let parsed: Value = serde_json::from_str("1.0").unwrap();
        assert_eq!(parsed.key(), Some("1".to_string()));
        assert_eq!(Value::from(-3.0).key(), Some("-3".to_string()));
        assert_eq!(Value::from(1.5).key(), Some("1.5".to_string()));
    }

    #[test]
    fn test_only_strings_contain() {
        assert!(Value::from("Apple").contains_ignore_case("app"));
        assert!(!Value::from(1234).contains_ignore_case("23"));
        assert!(!Value::Null.contains_ignore_case(""));
    }

    #[test]
    fn test_sort_cmp_strings_ignore_case() {
        assert_eq!(Value::from("apple").sort_cmp(&Value::from("Banana")), Ordering::Less);
        assert_eq!(Value::from("APPLE").sort_cmp(&Value::from("apple")), Ordering::Equal);
    }

    #[test]
    fn test_sort_cmp_numbers_numeric() {
        assert_eq!(Value::from(9).sort_cmp(&Value::from(10)), Ordering::Less);
        assert_eq!(Value::from(2.5).sort_cmp(&Value::from(2)), Ordering::Greater);
    }

    #[test]
    fn test_sort_cmp_mixed_is_ranked() {
        assert_eq!(Value::from(100).sort_cmp(&Value::from("a")), Ordering::Less);
        assert_eq!(Value::Null.sort_cmp(&Value::from("a")), Ordering::Greater);
        assert_eq!(Value::Null.sort_cmp(&Value::Null), Ordering::Equal);
    }

    #[test]
    fn test_non_finite_float_is_null() {
        assert!(Value::from(f64::NAN).is_null());
    }

    #[test]
    fn test_deserialize_untagged() {
        let v: Value = serde_json::from_str("12.5").unwrap();
        assert_eq!(v.as_f64(), Some(12.5));
        let v: Value = serde_json::from_str("\"x\"").unwrap();
        assert_eq!(v.as_str(), Some("x"));
        let v: Value = serde_json::from_str("null").unwrap();
        assert!(v.is_null());
        let v: Value = serde_json::from_str("true").unwrap();
        assert_eq!(v.type_name(), "json");
    }
}
