//! Commit metadata as shown in the viewer header.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Read-only projection of an upstream commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommitInfo {
    /// Commit SHA.
    pub oid: String,
    /// Full commit message.
    pub message: String,
    pub author: Signature,
    pub committer: Signature,
    /// Parent commits, first parent first.
    pub parents: Vec<ParentRef>,
}

impl CommitInfo {
    /// The first parent, used as the base of the diff.
    pub fn first_parent(&self) -> Option<&ParentRef> {
        self.parents.first()
    }

    /// First line of the commit message.
    pub fn summary(&self) -> &str {
        self.message.lines().next().unwrap_or_default()
    }
}

/// Author or committer identity with timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signature {
    pub name: String,
    pub date: DateTime<Utc>,
    pub email: String,
    /// Avatar of the linked account, if the identity maps to one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Reference to a parent commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentRef {
    pub oid: String,
}
