//! Fixed-size pagination.

use std::num::NonZeroUsize;
use std::ops::Range;

use crate::model::Record;

/// Number of pages needed for `len` rows. Zero rows means zero pages.
pub fn page_count(len: usize, page_size: NonZeroUsize) -> usize {
    len.div_ceil(page_size.get())
}

/// Index range of a 1-based `page`, clamped to `len`.
///
/// Pages past the end yield an empty range at `len`; page 0 is treated as
/// page 1.
pub fn page_range(len: usize, page_size: NonZeroUsize, page: usize) -> Range<usize> {
    let size = page_size.get();
    let start = page.saturating_sub(1).saturating_mul(size).min(len);
    let end = start.saturating_add(size).min(len);
    start..end
}

/// Rows shown on a 1-based `page`.
///
/// # Example
///
/// ```
/// use std::num::NonZeroUsize;
/// use datatable_lib::engine::paginate;
/// use datatable_lib::model::Record;
///
/// let rows: Vec<Record> = (1..=32).map(|id| Record::new().set("id", id)).collect();
/// let size = NonZeroUsize::new(15).unwrap();
/// assert_eq!(paginate(&rows, size, 3).len(), 2);
/// ```
pub fn paginate(rows: &[Record], page_size: NonZeroUsize, page: usize) -> &[Record] {
    &rows[page_range(rows.len(), page_size, page)]
}
