//! Loading state.

/// Whether the table may show its rows.
///
/// Driven from outside the engine. The dataset can arrive while still
/// `Loading`; rows are only shown once someone marks the table `Ready`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Waiting for data or for the ready signal.
    #[default]
    Loading,
    /// Rows may be shown.
    Ready,
    /// The data source failed; carries the reason.
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, LoadState::Ready)
    }

    /// Failure reason, if the load failed.
    pub fn failure(&self) -> Option<&str> {
        match self {
            LoadState::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}
