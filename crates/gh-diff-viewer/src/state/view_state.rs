//! Page state for the commit diff view.

use crate::model::{CommitInfo, FileDiff};

/// What the viewer currently has to show.
#[derive(Debug, Clone, Default)]
pub enum ViewState {
    /// Fetches are still in flight.
    #[default]
    Loading,
    /// Both fetches settled. A failed metadata fetch leaves `info` empty
    /// and a failed diff fetch leaves `files` empty.
    Ready {
        info: Option<CommitInfo>,
        files: Vec<FileDiff>,
    },
}

impl ViewState {
    /// Build the settled state from the two joined fetch results.
    pub fn settled<E>(info: Result<CommitInfo, E>, files: Result<Vec<FileDiff>, E>) -> Self
    where
        E: std::fmt::Display,
    {
        let info = info
            .map_err(|e| log::warn!("Commit metadata unavailable: {}", e))
            .ok();
        let files = files
            .map_err(|e| log::warn!("Commit diff unavailable: {}", e))
            .unwrap_or_default();
        ViewState::Ready { info, files }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }

    /// Commit header data, if loaded.
    pub fn info(&self) -> Option<&CommitInfo> {
        match self {
            ViewState::Ready { info, .. } => info.as_ref(),
            ViewState::Loading => None,
        }
    }

    /// Changed files, empty while loading.
    pub fn files(&self) -> &[FileDiff] {
        match self {
            ViewState::Ready { files, .. } => files,
            ViewState::Loading => &[],
        }
    }
}
