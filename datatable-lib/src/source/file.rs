//! Local JSON file source

use std::path::PathBuf;

use async_trait::async_trait;

use super::DataSource;
use super::parse_products;
use crate::error::FetchError;
use crate::model::Dataset;

/// Reads a `{ "products": [...] }` document from disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DataSource for FileSource {
    async fn fetch(&self) -> Result<Dataset, FetchError> {
        let body = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| FetchError::Io {
                path: self.path.clone(),
                source,
            })?;
        parse_products(&body)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
