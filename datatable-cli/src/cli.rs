use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use datatable_lib::engine::{DEFAULT_PAGE_SIZE, TableConfig};
use datatable_lib::model::Column;
use datatable_lib::source::DEFAULT_PRODUCTS_URL;
use simplelog::LevelFilter;

/// Browse a product table in the terminal.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Endpoint returning `{ "products": [...] }`.
    #[arg(long, default_value = DEFAULT_PRODUCTS_URL)]
    pub url: String,

    /// Read products from a local JSON file instead of `--url`.
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Page to open once data arrives.
    #[arg(long)]
    pub page: Option<usize>,

    /// Search to apply once data arrives.
    #[arg(long)]
    pub search: Option<String>,

    /// Rows per page.
    #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: NonZeroUsize,

    /// Milliseconds between data arriving and the table showing it.
    #[arg(long, default_value_t = 3000)]
    pub ready_delay_ms: u64,

    /// HTTP timeout in seconds.
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// Column as `key=Label`; repeat for each column.
    #[arg(long = "column", value_name = "KEY=LABEL")]
    pub columns: Vec<Column>,

    /// Log level.
    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,

    /// Log file (defaults to the platform cache directory).
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn table_config(&self) -> TableConfig {
        TableConfig::default()
            .with_page_size(self.page_size)
            .with_ready_delay(Duration::from_millis(self.ready_delay_ms))
    }

    /// Configured columns, or the product columns when none are given.
    pub fn columns(&self) -> Vec<Column> {
        if self.columns.is_empty() {
            default_columns()
        } else {
            self.columns.clone()
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

pub fn default_columns() -> Vec<Column> {
    vec![
        Column::new("id", "ID"),
        Column::new("title", "Title"),
        Column::new("brand", "Brand"),
        Column::new("category", "Category"),
        Column::new("discountPercentage", "Discount Percentage"),
        Column::new("price", "Price"),
    ]
}
