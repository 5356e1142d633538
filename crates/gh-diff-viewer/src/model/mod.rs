//! Data models for diff representation.

mod commit;
mod diff;

pub use commit::{CommitInfo, ParentRef, Signature};
pub use diff::{ChangeKind, DiffLine, FileDiff, FilePath, Hunk, LineKind};
