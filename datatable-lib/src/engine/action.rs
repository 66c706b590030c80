//! Engine inputs as values.

use crate::model::Column;
use crate::model::Dataset;

/// Everything that can change a table's view state.
///
/// Passed to [`TableEngine::dispatch`](super::TableEngine::dispatch). Each
/// variant maps to one engine method.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the dataset.
    SetDataset(Dataset),
    /// Replace the column schema.
    SetColumns(Vec<Column>),
    /// Set the search query. An empty string clears the search.
    Search(String),
    /// Click the header of the column with this key.
    ClickHeader(String),
    /// Go to the previous page.
    PreviousPage,
    /// Go to the next page.
    NextPage,
    /// Jump to a 1-based page.
    GoToPage(usize),
    /// Check or uncheck the record with this id.
    Toggle { id: String, checked: bool },
    /// Drop the whole selection.
    ClearSelection,
    /// Data is being (re)fetched.
    BeginLoading,
    /// Rows may be shown.
    MarkReady,
    /// The data source failed.
    MarkFailed(String),
}
