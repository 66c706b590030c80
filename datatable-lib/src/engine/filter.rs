//! Free-text search filtering.

use crate::model::Record;

/// Keeps records where any string field contains `query`, ignoring case.
///
/// Numeric and other non-string fields never match, so searching `"549"`
/// does not find a record whose price is the number 549.
///
/// Returns `None` for an empty query: "no filter" is a separate state from
/// "every row matched", since it changes which sequence later operations
/// act on.
///
/// # Example
///
/// ```
/// use datatable_lib::engine::filter;
/// use datatable_lib::model::Record;
///
/// let rows = vec![
///     Record::new().set("title", "Apple Watch"),
///     Record::new().set("title", "Banana"),
/// ];
/// assert_eq!(filter(&rows, "apple").unwrap().len(), 1);
/// assert!(filter(&rows, "").is_none());
/// ```
pub fn filter(projected: &[Record], query: &str) -> Option<Vec<Record>> {
    if query.is_empty() {
        return None;
    }

    let needle = query.to_lowercase();
    Some(
        projected
            .iter()
            .filter(|record| matches(record, &needle))
            .cloned()
            .collect(),
    )
}

fn matches(record: &Record, needle_lower: &str) -> bool {
    record
        .values()
        .any(|value| value.contains_ignore_case(needle_lower))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<Record> {
        vec![
            Record::new().set("id", 1).set("title", "iPhone 9").set("price", 549),
            Record::new().set("id", 2).set("title", "Samsung Universe").set("price", 1249),
            Record::new().set("id", 3).set("title", "OPPO F19").set("price", 280),
        ]
    }

    #[test]
    fn test_case_insensitive() {
        let matches = filter(&rows(), "IPHONE").unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].key("id").as_deref(), Some("1"));
    }

    #[test]
    fn test_numbers_never_match() {
        assert!(filter(&rows(), "549").unwrap().is_empty());
        assert!(filter(&rows(), "1").unwrap().is_empty());
    }

    #[test]
    fn test_string_digits_match() {
        let matches = filter(&rows(), "19").unwrap();
        assert_eq!(matches.len(), 1);
    }

    #[test]
    fn test_keeps_relative_order() {
        let matches = filter(&rows(), "o").unwrap();
        let ids: Vec<_> = matches.iter().filter_map(|r| r.key("id")).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_empty_query_is_no_filter() {
        assert!(filter(&rows(), "").is_none());
    }
}
