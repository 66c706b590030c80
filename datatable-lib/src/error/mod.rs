//! Error types

mod column;
mod fetch;

pub use column::*;
pub use fetch::*;

/// Crate-level error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Loading the dataset failed.
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Encoding the selection export failed.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
