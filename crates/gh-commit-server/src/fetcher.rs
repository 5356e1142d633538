//! Commit fetching
//!
//! Shapes upstream commit and comparison data into the viewer's models.
//! The only logic beyond shaping is picking the first parent as the base.

use gh_client::{Commit, ComparisonFile, GitActor, GitHubClient, GitHubError};
use gh_diff_viewer::{
    parse_patch, ChangeKind, CommitInfo, FileDiff, ParentRef, Signature, ViewState,
};
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced to the HTTP layer
#[derive(Debug, Error)]
pub enum FetchError {
    /// Any failure talking to GitHub, passed through untouched
    #[error(transparent)]
    GitHub(#[from] GitHubError),

    /// Root commit: there is no first parent to diff against
    #[error("commit {oid} has no parent to compare against")]
    NoParent { oid: String },
}

/// Fetches commit metadata and diffs through an injected client
#[derive(Clone)]
pub struct CommitFetcher {
    client: Arc<dyn GitHubClient>,
}

impl CommitFetcher {
    pub fn new(client: Arc<dyn GitHubClient>) -> Self {
        Self { client }
    }

    /// Metadata for `oid`
    pub async fn commit_info(
        &self,
        owner: &str,
        repo: &str,
        oid: &str,
    ) -> Result<CommitInfo, FetchError> {
        let commit = self.client.fetch_commit(owner, repo, oid).await?;
        Ok(convert_commit(commit))
    }

    /// Per-file diff of `oid` against its first parent
    pub async fn commit_diff(
        &self,
        owner: &str,
        repo: &str,
        oid: &str,
    ) -> Result<Vec<FileDiff>, FetchError> {
        let commit = self.client.fetch_commit(owner, repo, oid).await?;
        let parent = commit
            .first_parent_sha()
            .ok_or_else(|| FetchError::NoParent {
                oid: oid.to_string(),
            })?;

        log::debug!("Diffing {}/{} {}...{}", owner, repo, parent, oid);
        let comparison = self
            .client
            .compare_commits(owner, repo, parent, oid)
            .await?;

        Ok(comparison
            .into_files()
            .into_iter()
            .map(convert_file)
            .collect())
    }

    /// Issue the metadata and diff fetches together and settle both
    pub async fn commit_page(&self, owner: &str, repo: &str, oid: &str) -> ViewState {
        let (info, files) = tokio::join!(
            self.commit_info(owner, repo, oid),
            self.commit_diff(owner, repo, oid),
        );
        ViewState::settled(info, files)
    }
}

/// Convert a gh-client commit to the viewer's CommitInfo
fn convert_commit(commit: Commit) -> CommitInfo {
    let avatar_url = commit.author.and_then(|a| a.avatar_url);
    let mut author = convert_actor(commit.commit.author);
    author.avatar_url = avatar_url;

    CommitInfo {
        oid: commit.sha,
        message: commit.commit.message,
        author,
        committer: convert_actor(commit.commit.committer),
        parents: commit
            .parents
            .into_iter()
            .map(|p| ParentRef { oid: p.sha })
            .collect(),
    }
}

fn convert_actor(actor: GitActor) -> Signature {
    Signature {
        name: actor.name,
        date: actor.date,
        email: actor.email,
        avatar_url: None,
    }
}

/// Convert a comparison entry to a FileDiff, parsing its patch if present
fn convert_file(file: ComparisonFile) -> FileDiff {
    let hunks = file.patch.as_deref().map(parse_patch).unwrap_or_default();
    let base_path = file
        .previous_filename
        .unwrap_or_else(|| file.filename.clone());

    FileDiff::new(ChangeKind::from_status(&file.status), file.filename)
        .with_base_path(base_path)
        .with_hunks(hunks)
}
