//! Patch parsing.

mod patch;

pub use patch::{parse_hunk_header, parse_patch};
