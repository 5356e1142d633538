//! GitHub API data transfer objects
//!
//! These types mirror the JSON returned by the GitHub REST API, limited to
//! the fields the commit viewer reads. They are intentionally separate from
//! the viewer's domain models to keep this crate pure and reusable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A commit from `GET /repos/{owner}/{repo}/commits/{ref}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commit {
    /// Commit SHA
    pub sha: String,

    /// Git-level commit data (message, author, committer)
    pub commit: CommitDetails,

    /// GitHub account linked to the author, if any
    #[serde(default)]
    pub author: Option<Account>,

    /// Parent commits, first parent first
    #[serde(default)]
    pub parents: Vec<CommitRef>,
}

impl Commit {
    /// SHA of the first parent, `None` for a root commit
    pub fn first_parent_sha(&self) -> Option<&str> {
        self.parents.first().map(|p| p.sha.as_str())
    }
}

/// The `commit` object nested in a commit response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitDetails {
    /// Full commit message
    pub message: String,

    /// Git author
    pub author: GitActor,

    /// Git committer
    pub committer: GitActor,
}

/// A git identity with timestamp
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitActor {
    pub name: String,
    pub email: String,
    pub date: DateTime<Utc>,
}

/// A GitHub account (user or bot)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Account login (e.g., "octocat")
    pub login: String,

    /// Avatar image URL
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Reference to another commit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitRef {
    pub sha: String,
}

/// Result of `GET /repos/{owner}/{repo}/compare/{base}...{head}`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Comparison {
    /// Changed files, in the order GitHub lists them
    #[serde(default)]
    files: Option<Vec<ComparisonFile>>,
}

impl Comparison {
    /// Create a comparison from a file list
    pub fn new(files: Vec<ComparisonFile>) -> Self {
        Self { files: Some(files) }
    }

    /// Changed files; empty when GitHub omits the list
    pub fn files(&self) -> &[ComparisonFile] {
        self.files.as_deref().unwrap_or_default()
    }

    /// Take ownership of the file list
    pub fn into_files(self) -> Vec<ComparisonFile> {
        self.files.unwrap_or_default()
    }
}

/// A changed file entry in a comparison
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonFile {
    /// Path in the head commit
    pub filename: String,

    /// Change status ("added", "removed", "modified", "renamed", ...)
    pub status: String,

    /// Path in the base commit (renames and copies only)
    #[serde(default)]
    pub previous_filename: Option<String>,

    /// Unified diff for this file; absent for binary files and pure renames
    #[serde(default)]
    pub patch: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMMIT_JSON: &str = r#"{
        "sha": "6dcb09b5b57875f334f61aebed695e2e4193db5e",
        "commit": {
            "message": "Fix all the bugs",
            "author": { "name": "Monalisa Octocat", "email": "mona@github.com", "date": "2011-04-14T16:00:49Z" },
            "committer": { "name": "Monalisa Octocat", "email": "mona@github.com", "date": "2011-04-15T16:00:49Z" }
        },
        "author": { "login": "octocat", "avatar_url": "https://github.com/images/error/octocat_happy.gif" },
        "parents": [ { "sha": "7638417db6d59f3c431d3e1f261cc637155684cd", "url": "https://api.github.com/x" } ],
        "stats": { "additions": 104, "deletions": 4, "total": 108 }
    }"#;

    #[test]
    fn test_commit_deserialization() {
        let commit: Commit = serde_json::from_str(COMMIT_JSON).unwrap();

        assert_eq!(commit.sha, "6dcb09b5b57875f334f61aebed695e2e4193db5e");
        assert_eq!(commit.commit.message, "Fix all the bugs");
        assert_eq!(commit.commit.author.name, "Monalisa Octocat");
        assert_eq!(
            commit.commit.committer.date.to_rfc3339(),
            "2011-04-15T16:00:49+00:00"
        );
        assert_eq!(
            commit.author.and_then(|a| a.avatar_url).as_deref(),
            Some("https://github.com/images/error/octocat_happy.gif")
        );
    }

    #[test]
    fn test_first_parent_sha() {
        let commit: Commit = serde_json::from_str(COMMIT_JSON).unwrap();
        assert_eq!(
            commit.first_parent_sha(),
            Some("7638417db6d59f3c431d3e1f261cc637155684cd")
        );

        let root = Commit {
            parents: Vec::new(),
            ..commit
        };
        assert_eq!(root.first_parent_sha(), None);
    }

    #[test]
    fn test_commit_without_linked_account() {
        let json = r#"{
            "sha": "abc",
            "commit": {
                "message": "m",
                "author": { "name": "a", "email": "a@x", "date": "2020-01-01T00:00:00Z" },
                "committer": { "name": "c", "email": "c@x", "date": "2020-01-01T00:00:00Z" }
            },
            "author": null,
            "parents": []
        }"#;
        let commit: Commit = serde_json::from_str(json).unwrap();
        assert!(commit.author.is_none());
        assert!(commit.parents.is_empty());
    }

    #[test]
    fn test_comparison_deserialization() {
        let json = r#"{
            "status": "ahead",
            "files": [
                { "filename": "src/lib.rs", "status": "modified", "patch": "@@ -1 +1 @@\n-a\n+b" },
                { "filename": "logo.png", "status": "added" },
                { "filename": "new.rs", "status": "renamed", "previous_filename": "old.rs" }
            ]
        }"#;
        let comparison: Comparison = serde_json::from_str(json).unwrap();
        let files = comparison.files();

        assert_eq!(files.len(), 3);
        assert_eq!(files[0].status, "modified");
        assert!(files[0].patch.is_some());
        assert!(files[1].patch.is_none());
        assert_eq!(files[2].previous_filename.as_deref(), Some("old.rs"));
    }

    #[test]
    fn test_comparison_without_files() {
        let comparison: Comparison = serde_json::from_str(r#"{"status": "identical"}"#).unwrap();
        assert!(comparison.files().is_empty());

        let comparison: Comparison = serde_json::from_str(r#"{"files": null}"#).unwrap();
        assert!(comparison.into_files().is_empty());
    }
}
