//! HTML widgets for the diff viewer.

mod commit_header;
mod diff_content;
mod diff_viewer;

pub use commit_header::{days_ago, CommitHeaderWidget};
pub use diff_content::DiffContentWidget;
pub use diff_viewer::{DiffViewer, EMPTY_MESSAGE};
