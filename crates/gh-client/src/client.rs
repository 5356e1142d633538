//! GitHub client trait
//!
//! This module defines the core `GitHubClient` trait that all client
//! implementations must satisfy.

use crate::error::GitHubError;
use crate::types::{Commit, Comparison};
use async_trait::async_trait;

/// GitHub API client trait
///
/// Defines the read-only calls the commit viewer needs. Implementations can
/// be direct (hitting the API) or test doubles serving fixtures.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` to allow sharing across
/// request handlers.
///
/// # Example
///
/// ```rust,ignore
/// use gh_client::GitHubClient;
///
/// async fn parent_of(client: &dyn GitHubClient) -> Option<String> {
///     let commit = client.fetch_commit("rust-lang", "rust", "HEAD").await.ok()?;
///     commit.first_parent_sha().map(str::to_string)
/// }
/// ```
#[async_trait]
pub trait GitHubClient: Send + Sync {
    /// Fetch a single commit, including its parents
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner (user or organization)
    /// * `repo` - Repository name
    /// * `oid` - Commit SHA (or any ref GitHub resolves)
    ///
    /// # Returns
    ///
    /// The commit, or an error carrying the upstream status and body.
    async fn fetch_commit(&self, owner: &str, repo: &str, oid: &str)
        -> Result<Commit, GitHubError>;

    /// Compare two commits (`base...head`)
    ///
    /// # Arguments
    ///
    /// * `owner` - Repository owner
    /// * `repo` - Repository name
    /// * `base` - Base commit SHA
    /// * `head` - Head commit SHA
    ///
    /// # Returns
    ///
    /// The changed files with their per-file patches.
    async fn compare_commits(
        &self,
        owner: &str,
        repo: &str,
        base: &str,
        head: &str,
    ) -> Result<Comparison, GitHubError>;
}
