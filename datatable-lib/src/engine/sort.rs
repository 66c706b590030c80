//! Single-column sorting.

use std::cmp::Ordering;

use crate::model::Record;
use crate::model::Value;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }

    /// Header marker for this direction.
    pub fn indicator(self) -> &'static str {
        match self {
            Direction::Asc => "▲",
            Direction::Desc => "▼",
        }
    }
}

/// The active sort: one key and its direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    /// Field the rows are ordered by.
    pub key: String,
    /// Order direction.
    pub direction: Direction,
}

impl SortState {
    /// Creates an ascending sort on a field.
    pub fn asc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: Direction::Asc,
        }
    }

    /// Creates a descending sort on a field.
    pub fn desc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: Direction::Desc,
        }
    }

    /// Next sort state after a click on the header for `key`.
    ///
    /// A different key starts ascending; the same key flips direction.
    pub fn after_click(current: Option<&SortState>, key: &str) -> SortState {
        match current {
            Some(state) if state.key == key => SortState {
                key: state.key.clone(),
                direction: state.direction.toggled(),
            },
            _ => SortState::asc(key),
        }
    }
}

/// Sorts `rows` in place by `key`.
///
/// Uses [`Value::sort_cmp`]: strings compare case-insensitively, numbers
/// numerically. The sort is stable, so ties keep their relative order in
/// both directions. Rows missing `key` compare as null.
pub fn sort(rows: &mut [Record], key: &str, direction: Direction) {
    rows.sort_by(|a, b| compare(a, b, key, direction));
}

fn compare(a: &Record, b: &Record, key: &str, direction: Direction) -> Ordering {
    let a = a.get(key).unwrap_or(&Value::Null);
    let b = b.get(key).unwrap_or(&Value::Null);
    match direction {
        Direction::Asc => a.sort_cmp(b),
        Direction::Desc => b.sort_cmp(a),
    }
}
