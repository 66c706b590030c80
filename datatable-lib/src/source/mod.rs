//! Data sources and the loader that feeds a [`TableEngine`].
//!
//! A source produces a whole dataset. [`load`] hands it to the engine and
//! then, separately, marks the table ready after the configured delay, so
//! "data arrived" and "ready to show" stay two distinct signals.

mod file;
mod http;

pub use file::*;
pub use http::*;

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Deserialize;

use crate::engine::TableEngine;
use crate::error::FetchError;
use crate::model::Dataset;

/// Something that can fetch a dataset.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Fetches the full dataset.
    async fn fetch(&self) -> Result<Dataset, FetchError>;

    /// Short description for logs.
    fn describe(&self) -> String;
}

/// Payload shape: `{ "products": [ ... ] }`. Other top-level keys are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductsResponse {
    pub products: Dataset,
}

/// Parses a `{ "products": [...] }` document.
pub fn parse_products(body: &str) -> Result<Dataset, FetchError> {
    serde_json::from_str::<ProductsResponse>(body)
        .map(|response| response.products)
        .map_err(|e| FetchError::parse_with_body(e.to_string(), body))
}

/// Loads `source` into `engine`.
///
/// Marks the engine loading, fetches, delivers the dataset, waits
/// `ready_delay` and marks it ready. On failure the engine is marked failed
/// and the error is returned.
pub async fn load(
    engine: &mut TableEngine,
    source: &dyn DataSource,
    ready_delay: Duration,
) -> Result<(), FetchError> {
    engine.begin_loading();
    info!("Fetching from {}", source.describe());

    let dataset = match source.fetch().await {
        Ok(dataset) => dataset,
        Err(e) => {
            warn!("Fetch from {} failed: {}", source.describe(), e);
            engine.mark_failed(e.to_string());
            return Err(e);
        }
    };

    engine.set_dataset(dataset);

    if !ready_delay.is_zero() {
        debug!("Waiting {:?} before marking ready", ready_delay);
        tokio::time::sleep(ready_delay).await;
    }
    engine.mark_ready();
    Ok(())
}
