//! GitHub API client for the commit viewer
//!
//! This crate provides a trait-based GitHub API client. Handlers depend on
//! the trait, so the direct client can be swapped for a fixture-backed one
//! in tests.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │              GitHubClient trait                  │
//! │  - fetch_commit()                                │
//! │  - compare_commits()                             │
//! └─────────────────────────────────────────────────┘
//!                        │
//!                        ▼
//!              ┌─────────────────┐
//!              │ OctocrabClient  │
//!              │ (direct API)    │
//!              └─────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use gh_client::{GitHubClient, OctocrabClient, TokenResolver, DEFAULT_API_URL};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let token = TokenResolver::new(None).resolve().await;
//! let client = OctocrabClient::from_config(DEFAULT_API_URL, token)?;
//!
//! let commit = client.fetch_commit("rust-lang", "rust", "master").await?;
//! if let Some(parent) = commit.first_parent_sha() {
//!     let comparison = client.compare_commits("rust-lang", "rust", parent, &commit.sha).await?;
//!     println!("{} files changed", comparison.files().len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod octocrab_client;
pub mod token_resolver;
pub mod types;

/// REST API base URL for the default host
pub const DEFAULT_API_URL: &str = "https://api.github.com";

pub use client::GitHubClient;
pub use error::GitHubError;
pub use octocrab_client::{OctocrabClient, ACCEPT_VERSION};
pub use token_resolver::TokenResolver;
pub use types::{Account, Commit, CommitDetails, CommitRef, Comparison, ComparisonFile, GitActor};
