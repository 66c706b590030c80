//! HTTP data source

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::Client;

use super::DataSource;
use super::parse_products;
use crate::error::FetchError;
use crate::model::Dataset;

/// Default product endpoint.
pub const DEFAULT_PRODUCTS_URL: &str = "https://dummyjson.com/products/?limit=100";

/// Fetches `{ "products": [...] }` with a GET request.
///
/// Cheap to clone; the underlying `reqwest::Client` is shared.
///
/// # Example
///
/// ```ignore
/// let source = HttpSource::new(DEFAULT_PRODUCTS_URL)
///     .with_timeout(Duration::from_secs(10));
/// let dataset = source.fetch().await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
    http_client: Client,
    timeout: Option<Duration>,
}

impl HttpSource {
    /// Creates a source for `url` with a default client.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            http_client: Client::new(),
            timeout: None,
        }
    }

    /// Sets a per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

#[async_trait]
impl DataSource for HttpSource {
    async fn fetch(&self) -> Result<Dataset, FetchError> {
        let mut request = self.http_client.get(&self.url);
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| match self.timeout {
            Some(timeout) if e.is_timeout() => FetchError::Timeout(timeout),
            _ => FetchError::Network(e),
        })?;

        let status = response.status();
        let body = response.text().await?;
        debug!("GET {} -> {} ({} bytes)", self.url, status, body.len());

        if !status.is_success() {
            return Err(FetchError::http(status.as_u16(), body));
        }
        parse_products(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
