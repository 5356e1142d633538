//! GitHub token resolution
//!
//! The upstream credential is resolved once at startup and handed to the
//! client constructor.

use anyhow::Context;
use log::debug;

/// Resolves the GitHub token to forward upstream
///
/// Tries multiple sources in order:
/// 1. Token from the application config
/// 2. `GITHUB_TOKEN` or `GH_TOKEN`
/// 3. `gh auth token` command
#[derive(Debug, Clone, Default)]
pub struct TokenResolver {
    /// Token set explicitly in configuration
    configured: Option<String>,
}

impl TokenResolver {
    /// Create a resolver preferring `configured` over every other source
    pub fn new(configured: Option<String>) -> Self {
        Self {
            configured: configured.filter(|t| !t.trim().is_empty()),
        }
    }

    /// Resolve a token, or `None` to talk to GitHub anonymously
    pub async fn resolve(&self) -> Option<String> {
        if let Some(token) = self.from_config_or_env() {
            return Some(token);
        }

        match gh_cli_token().await {
            Ok(Some(token)) => {
                debug!("Using token from gh CLI");
                Some(token)
            }
            Ok(None) => None,
            Err(e) => {
                debug!("gh CLI token unavailable: {:#}", e);
                None
            }
        }
    }

    /// Configured or environment token, without spawning processes
    pub fn from_config_or_env(&self) -> Option<String> {
        if let Some(ref token) = self.configured {
            debug!("Using token from config");
            return Some(token.clone());
        }

        let token = std::env::var("GITHUB_TOKEN")
            .or_else(|_| std::env::var("GH_TOKEN"))
            .ok()
            .filter(|t| !t.trim().is_empty());
        if token.is_some() {
            debug!("Using token from GITHUB_TOKEN/GH_TOKEN");
        }
        token
    }
}

async fn gh_cli_token() -> anyhow::Result<Option<String>> {
    let output = tokio::process::Command::new("gh")
        .args(["auth", "token"])
        .output()
        .await
        .context("Failed to run 'gh auth token'")?;

    if !output.status.success() {
        return Ok(None);
    }

    let token = String::from_utf8(output.stdout)
        .context("Invalid UTF-8 in gh auth token output")?
        .trim()
        .to_string();
    Ok((!token.is_empty()).then_some(token))
}
