//! Diff data structures representing a single commit's file changes.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A single file's diff between the base (parent) and head commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileDiff {
    /// How the file changed between base and head.
    pub change_kind: ChangeKind,
    /// The file as it exists in the head commit.
    pub head_file: FilePath,
    /// The file as it existed in the base commit.
    pub base_file: FilePath,
    /// Change hunks, in patch order.
    pub hunks: Vec<Hunk>,
}

impl FileDiff {
    /// Create a file diff for an unrenamed path with no hunks yet.
    pub fn new(change_kind: ChangeKind, path: impl Into<String>) -> Self {
        let path = path.into();
        Self {
            change_kind,
            head_file: FilePath::new(path.clone()),
            base_file: FilePath::new(path),
            hunks: Vec::new(),
        }
    }

    /// Set the base path (for renames and copies).
    pub fn with_base_path(mut self, path: impl Into<String>) -> Self {
        self.base_file = FilePath::new(path);
        self
    }

    /// Attach parsed hunks.
    pub fn with_hunks(mut self, hunks: Vec<Hunk>) -> Self {
        self.hunks = hunks;
        self
    }

    /// Number of added lines across all hunks.
    pub fn additions(&self) -> usize {
        self.count_lines(LineKind::Addition)
    }

    /// Number of removed lines across all hunks.
    pub fn deletions(&self) -> usize {
        self.count_lines(LineKind::Deletion)
    }

    fn count_lines(&self, kind: LineKind) -> usize {
        self.hunks
            .iter()
            .flat_map(|h| &h.lines)
            .filter(|l| l.kind() == kind)
            .count()
    }
}

/// A path reference to one side of the comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilePath {
    pub path: String,
}

impl FilePath {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

/// File status between two commits, as reported upstream.
///
/// Serialised as the uppercased upstream status (`"MODIFIED"`). Statuses
/// without a dedicated variant keep their uppercased text in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Removed,
    Modified,
    Renamed,
    Copied,
    Changed,
    Unchanged,
    Other(String),
}

impl ChangeKind {
    /// Map an upstream file status (`"added"`, `"modified"`, ...) to a change kind.
    pub fn from_status(status: &str) -> Self {
        let upper = status.to_uppercase();
        match upper.as_str() {
            "ADDED" => ChangeKind::Added,
            "REMOVED" => ChangeKind::Removed,
            "MODIFIED" => ChangeKind::Modified,
            "RENAMED" => ChangeKind::Renamed,
            "COPIED" => ChangeKind::Copied,
            "CHANGED" => ChangeKind::Changed,
            "UNCHANGED" => ChangeKind::Unchanged,
            _ => ChangeKind::Other(upper),
        }
    }

    /// The uppercase wire form.
    pub fn as_str(&self) -> &str {
        match self {
            ChangeKind::Added => "ADDED",
            ChangeKind::Removed => "REMOVED",
            ChangeKind::Modified => "MODIFIED",
            ChangeKind::Renamed => "RENAMED",
            ChangeKind::Copied => "COPIED",
            ChangeKind::Changed => "CHANGED",
            ChangeKind::Unchanged => "UNCHANGED",
            ChangeKind::Other(status) => status,
        }
    }

    /// Get a single-character representation.
    pub fn as_char(&self) -> char {
        match self {
            ChangeKind::Added => 'A',
            ChangeKind::Removed => 'D',
            ChangeKind::Modified | ChangeKind::Changed => 'M',
            ChangeKind::Renamed => 'R',
            ChangeKind::Copied => 'C',
            ChangeKind::Unchanged => ' ',
            ChangeKind::Other(_) => '?',
        }
    }
}

impl Serialize for ChangeKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ChangeKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let status = String::deserialize(deserializer)?;
        Ok(ChangeKind::from_status(&status))
    }
}

/// A contiguous region of changes, opened by one `@@ ... @@` header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hunk {
    /// Header line, verbatim (e.g., "@@ -10,5 +10,7 @@ fn example()").
    pub header: String,
    /// Lines in this hunk.
    pub lines: Vec<DiffLine>,
}

impl Hunk {
    /// Create an empty hunk for the given header line.
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            lines: Vec::new(),
        }
    }
}

/// A single line in a hunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffLine {
    /// Line number in the base file (context and removed lines).
    pub base_line_number: Option<u32>,
    /// Line number in the head file (context and added lines).
    pub head_line_number: Option<u32>,
    /// Line text including its leading `+`/`-`/space marker.
    pub content: String,
}

impl DiffLine {
    /// Create a new context line.
    pub fn context(content: impl Into<String>, base_line: u32, head_line: u32) -> Self {
        Self {
            base_line_number: Some(base_line),
            head_line_number: Some(head_line),
            content: content.into(),
        }
    }

    /// Create a new addition line.
    pub fn addition(content: impl Into<String>, head_line: u32) -> Self {
        Self {
            base_line_number: None,
            head_line_number: Some(head_line),
            content: content.into(),
        }
    }

    /// Create a new deletion line.
    pub fn deletion(content: impl Into<String>, base_line: u32) -> Self {
        Self {
            base_line_number: Some(base_line),
            head_line_number: None,
            content: content.into(),
        }
    }

    /// Line type, derived from the marker character.
    pub fn kind(&self) -> LineKind {
        LineKind::from_marker(&self.content)
    }
}

/// Line type in the diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Unchanged line (for context).
    Context,
    /// Added line (+).
    Addition,
    /// Removed line (-).
    Deletion,
}

impl LineKind {
    /// Classify a raw patch line by its first character.
    pub fn from_marker(line: &str) -> Self {
        if line.starts_with('+') {
            LineKind::Addition
        } else if line.starts_with('-') {
            LineKind::Deletion
        } else {
            LineKind::Context
        }
    }

    /// CSS class used by the HTML viewer.
    pub fn css_class(&self) -> &'static str {
        match self {
            LineKind::Context => "context",
            LineKind::Addition => "addition",
            LineKind::Deletion => "deletion",
        }
    }
}
