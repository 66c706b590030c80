//! Table configuration

use std::num::NonZeroUsize;
use std::time::Duration;

/// Default rows per page.
pub const DEFAULT_PAGE_SIZE: NonZeroUsize = match NonZeroUsize::new(15) {
    Some(size) => size,
    None => unreachable!(),
};

/// Configuration for a [`TableEngine`](super::TableEngine).
///
/// # Example
///
/// ```
/// use std::num::NonZeroUsize;
/// use std::time::Duration;
/// use datatable_lib::engine::TableConfig;
///
/// let config = TableConfig::default()
///     .with_page_size(NonZeroUsize::new(25).unwrap())
///     .with_ready_delay(Duration::ZERO);
/// ```
#[derive(Debug, Clone)]
pub struct TableConfig {
    /// Rows per page.
    ///
    /// Default: 15
    pub page_size: NonZeroUsize,

    /// Pause between the dataset arriving and the table being marked ready.
    ///
    /// Default: 3 seconds
    pub ready_delay: Duration,

    /// Field that identifies a record for selection.
    ///
    /// Default: `"id"`
    pub id_field: String,

    /// Decimal places for numeric cells outside the id column.
    ///
    /// Default: 2
    pub decimals: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            ready_delay: Duration::from_secs(3),
            id_field: "id".to_string(),
            decimals: 2,
        }
    }
}

impl TableConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size.
    pub fn with_page_size(mut self, page_size: NonZeroUsize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the ready delay.
    pub fn with_ready_delay(mut self, delay: Duration) -> Self {
        self.ready_delay = delay;
        self
    }

    /// Sets the identity field.
    pub fn with_id_field(mut self, field: impl Into<String>) -> Self {
        self.id_field = field.into();
        self
    }

    /// Sets the number of decimals for numeric cells.
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }
}
