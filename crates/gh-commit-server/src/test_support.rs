//! Fixture-backed GitHub client for tests

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use gh_client::{
    Account, Commit, CommitDetails, CommitRef, Comparison, GitActor, GitHubClient, GitHubError,
};
use std::collections::HashMap;

const NOT_FOUND: &str = r#"{"message":"Not Found","documentation_url":"https://docs.github.com/rest"}"#;

/// How every call should fail, when set
#[derive(Debug, Clone)]
pub enum MockFailure {
    Upstream(u16, String),
    Transport(&'static str),
}

/// Serves commits and comparisons from memory; unknown keys answer 404
#[derive(Debug, Default)]
pub struct MockGitHubClient {
    commits: HashMap<String, Commit>,
    comparisons: HashMap<String, Comparison>,
    failure: Option<MockFailure>,
}

impl MockGitHubClient {
    pub fn with_commit(mut self, commit: Commit) -> Self {
        self.commits.insert(commit.sha.clone(), commit);
        self
    }

    pub fn with_comparison(mut self, base: &str, head: &str, comparison: Comparison) -> Self {
        self.comparisons
            .insert(format!("{}...{}", base, head), comparison);
        self
    }

    pub fn failing(mut self, failure: MockFailure) -> Self {
        self.failure = Some(failure);
        self
    }

    fn check_failure(&self) -> Result<(), GitHubError> {
        match self.failure {
            Some(MockFailure::Upstream(status, ref body)) => Err(GitHubError::Upstream {
                status,
                body: body.clone(),
            }),
            Some(MockFailure::Transport(msg)) => Err(GitHubError::Transport(msg.into())),
            None => Ok(()),
        }
    }
}

fn not_found() -> GitHubError {
    GitHubError::Upstream {
        status: 404,
        body: NOT_FOUND.to_string(),
    }
}

#[async_trait]
impl GitHubClient for MockGitHubClient {
    async fn fetch_commit(
        &self,
        _owner: &str,
        _repo: &str,
        oid: &str,
    ) -> Result<Commit, GitHubError> {
        self.check_failure()?;
        self.commits.get(oid).cloned().ok_or_else(not_found)
    }

    async fn compare_commits(
        &self,
        _owner: &str,
        _repo: &str,
        base: &str,
        head: &str,
    ) -> Result<Comparison, GitHubError> {
        self.check_failure()?;
        self.comparisons
            .get(&format!("{}...{}", base, head))
            .cloned()
            .ok_or_else(not_found)
    }
}

/// A commit with the given parents and fixed identities
pub fn commit(sha: &str, parents: &[&str]) -> Commit {
    Commit {
        sha: sha.to_string(),
        commit: CommitDetails {
            message: format!("Commit {}", sha),
            author: GitActor {
                name: "Ada Lovelace".to_string(),
                email: "ada@example.com".to_string(),
                date: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
            },
            committer: GitActor {
                name: "Grace Hopper".to_string(),
                email: "grace@example.com".to_string(),
                date: Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap(),
            },
        },
        author: Some(Account {
            login: "ada".to_string(),
            avatar_url: Some("https://avatars.example.com/ada".to_string()),
        }),
        parents: parents
            .iter()
            .map(|p| CommitRef { sha: p.to_string() })
            .collect(),
    }
}
