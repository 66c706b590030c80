//! Column schema parse errors

/// Error parsing a `key=Label` column argument.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseColumnError {
    /// The key part is empty.
    #[error("Column '{0}' has an empty key")]
    EmptyKey(String),
}
