//! # gh-diff-viewer
//!
//! A standalone diff model, patch parser and HTML viewer for a single
//! GitHub commit.
//!
//! ## Design Principles
//!
//! This crate is **instrumented**: it receives data and renders it without
//! calling external APIs. Fetching lives with the caller, which hands the
//! settled results to the viewer. This enables:
//!
//! - Testability without mocking HTTP clients
//! - Reuse of the parser for any per-file unified diff (GitHub, GitLab, local git)
//!
//! ## Usage
//!
//! ```
//! use gh_diff_viewer::{parse_patch, ChangeKind, DefaultTheme, DiffViewer, FileDiff, ViewState};
//!
//! let hunks = parse_patch("@@ -1,2 +1,3 @@\n a\n-b\n+b2\n+c");
//! let file = FileDiff::new(ChangeKind::Modified, "src/lib.rs").with_hunks(hunks);
//!
//! let state = ViewState::Ready { info: None, files: vec![file] };
//! let html = DiffViewer::new(&DefaultTheme).render(&state, chrono::Utc::now());
//! assert!(html.contains("src/lib.rs"));
//! ```

pub mod model;
pub mod parser;
pub mod state;
pub mod traits;
pub mod widget;

// Re-export commonly used types
pub use model::{
    ChangeKind, CommitInfo, DiffLine, FileDiff, FilePath, Hunk, LineKind, ParentRef, Signature,
};
pub use parser::parse_patch;
pub use state::ViewState;
pub use traits::{DefaultTheme, ThemeProvider};
pub use widget::DiffViewer;
