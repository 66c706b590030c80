//! Properties of the individual pipeline stages.

use std::num::NonZeroUsize;

use datatable_lib::engine::{Direction, filter, page_count, paginate, project, sort};
use datatable_lib::model::{Column, Record, Value};

fn dataset(n: usize) -> Vec<Record> {
    let brands = ["Apple", "samsung", "OPPO", "Huawei"];
    (0..n)
        .map(|i| {
            Record::new()
                .set("id", i as i64)
                .set("title", format!("Item {i:03}"))
                .set("brand", brands[i % brands.len()])
                .set("rating", (i % 5) as f64 / 2.0)
                .set("thumbnail", format!("https://cdn.example/{i}.jpg"))
        })
        .collect()
}

fn columns() -> Vec<Column> {
    vec![
        Column::new("id", "ID"),
        Column::new("title", "Title"),
        Column::new("brand", "Brand"),
        Column::new("rating", "Rating"),
    ]
}

#[test]
fn test_projection_is_idempotent() {
    let once = project(&dataset(20), &columns());
    let twice = project(&once, &columns());
    assert_eq!(once, twice);
}

#[test]
fn test_pages_cover_sequence_exactly() {
    for len in [0, 1, 14, 15, 16, 29, 30, 31, 100] {
        let rows = dataset(len);
        for size in [1, 2, 7, 15, 50] {
            let size = NonZeroUsize::new(size).unwrap();
            let count = page_count(len, size);
            assert_eq!(count, len.div_ceil(size.get()));

            let rebuilt: Vec<Record> = (1..=count)
                .flat_map(|page| paginate(&rows, size, page).iter().cloned())
                .collect();
            assert_eq!(rebuilt, rows, "len {len}, size {size}");
        }
    }
}

#[test]
fn test_filter_never_grows() {
    let projected = project(&dataset(40), &columns());
    for query in ["a", "APPLE", "item 01", "zzz", "0", "https"] {
        let filtered = filter(&projected, query).unwrap();
        assert!(filtered.len() <= projected.len());
    }
}

#[test]
fn test_filter_only_sees_projected_fields() {
    let projected = project(&dataset(10), &columns());
    assert!(filter(&projected, "cdn.example").unwrap().is_empty());
}

#[test]
fn test_empty_query_is_no_filter() {
    let projected = project(&dataset(10), &columns());
    assert!(filter(&projected, "").is_none());
}

#[test]
fn test_sort_round_trip_on_unique_key() {
    let mut rows = project(&dataset(25), &columns());
    sort(&mut rows, "title", Direction::Asc);
    let ascending = rows.clone();

    sort(&mut rows, "title", Direction::Desc);
    rows.reverse();
    assert_eq!(rows, ascending);
}

#[test]
fn test_sort_by_brand_ignores_case() {
    let mut rows = project(&dataset(4), &columns());
    sort(&mut rows, "brand", Direction::Asc);
    let brands: Vec<_> = rows
        .iter()
        .map(|r| r.get("brand").and_then(Value::as_str).unwrap_or_default().to_string())
        .collect();
    assert_eq!(brands, vec!["Apple", "Huawei", "OPPO", "samsung"]);
}
