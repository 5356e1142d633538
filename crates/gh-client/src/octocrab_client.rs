//! Octocrab-based GitHub API client
//!
//! Direct implementation of the `GitHubClient` trait using the octocrab library.
//! This client makes real API calls without any caching.

use crate::client::GitHubClient;
use crate::error::GitHubError;
use crate::types::{Commit, Comparison};
use anyhow::Context;
use async_trait::async_trait;
use log::debug;
use octocrab::Octocrab;
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Media type pinned for every request
pub const ACCEPT_VERSION: &str = "application/vnd.github.v3+json";

/// Direct GitHub API client using octocrab
///
/// Constructed once at startup and shared by handlers. Holds the base URL
/// and credential explicitly instead of reading process-wide state.
#[derive(Debug, Clone)]
pub struct OctocrabClient {
    octocrab: Arc<Octocrab>,
    base_url: String,
}

impl OctocrabClient {
    /// Build an octocrab instance for `base_url`, authenticating with `token`
    /// as a bearer credential when one is given.
    pub fn from_config(base_url: &str, token: Option<String>) -> anyhow::Result<Self> {
        let mut builder = Octocrab::builder()
            .base_uri(base_url)
            .context("Failed to set base URI")?
            .add_header(http::header::ACCEPT, ACCEPT_VERSION.to_string());

        if let Some(token) = token {
            builder = builder.personal_token(token);
        }

        let octocrab = builder.build().context("Failed to build Octocrab client")?;
        Ok(Self {
            octocrab: Arc::new(octocrab),
            base_url: base_url.to_string(),
        })
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `route` and decode the JSON body
    ///
    /// Uses the raw request API so that error bodies reach the caller
    /// unmodified instead of being parsed into octocrab's error type.
    async fn get_json<T: DeserializeOwned>(&self, route: &str) -> Result<T, GitHubError> {
        let response = self.octocrab._get(route).await?;
        let status = response.status().as_u16();
        let body = self.octocrab.body_to_string(response).await?;
        debug!("GET {} -> {}", route, status);
        decode_response(status, &body)
    }
}

#[async_trait]
impl GitHubClient for OctocrabClient {
    async fn fetch_commit(
        &self,
        owner: &str,
        repo: &str,
        oid: &str,
    ) -> Result<Commit, GitHubError> {
        debug!("Fetching commit {}/{} @ {}", owner, repo, oid);
        self.get_json(&commit_route(owner, repo, oid)).await
    }

    async fn compare_commits(
        &self,
        owner: &str,
        repo: &str,
        base: &str,
        head: &str,
    ) -> Result<Comparison, GitHubError> {
        debug!("Comparing {}/{} {}...{}", owner, repo, base, head);
        let comparison: Comparison = self
            .get_json(&compare_route(owner, repo, base, head))
            .await?;
        debug!(
            "Compared {}/{} {}...{}: {} files",
            owner,
            repo,
            base,
            head,
            comparison.files().len()
        );
        Ok(comparison)
    }
}

fn commit_route(owner: &str, repo: &str, oid: &str) -> String {
    format!("/repos/{}/{}/commits/{}", owner, repo, oid)
}

fn compare_route(owner: &str, repo: &str, base: &str, head: &str) -> String {
    format!("/repos/{}/{}/compare/{}...{}", owner, repo, base, head)
}

/// Turn a status/body pair into a decoded value or an upstream error
fn decode_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, GitHubError> {
    if !(200..300).contains(&status) {
        return Err(GitHubError::Upstream {
            status,
            body: body.to_string(),
        });
    }
    Ok(serde_json::from_str(body)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CommitRef;

    #[test]
    fn test_routes() {
        assert_eq!(
            commit_route("octo", "repo", "abc123"),
            "/repos/octo/repo/commits/abc123"
        );
        assert_eq!(
            compare_route("octo", "repo", "p1", "abc123"),
            "/repos/octo/repo/compare/p1...abc123"
        );
    }

    #[test]
    fn test_decode_success() {
        let parent: CommitRef = decode_response(200, r#"{"sha":"abc"}"#).unwrap();
        assert_eq!(parent.sha, "abc");
    }

    #[test]
    fn test_decode_keeps_upstream_body() {
        let body = r#"{"message":"No commit found for SHA: nope","documentation_url":"https://docs.github.com"}"#;
        let err = decode_response::<CommitRef>(422, body).unwrap_err();

        match err {
            GitHubError::Upstream { status, body: got } => {
                assert_eq!(status, 422);
                assert_eq!(got, body);
            }
            other => panic!("expected upstream error, got {:?}", other),
        }
    }

    #[test]
    fn test_decode_rejects_wrong_shape() {
        let err = decode_response::<CommitRef>(200, r#"{"unexpected":true}"#).unwrap_err();
        assert!(matches!(err, GitHubError::Decode(_)));
    }
}
