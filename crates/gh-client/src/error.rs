//! Errors returned by GitHub API clients

use thiserror::Error;

/// Boxed source for connection-level failures
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while talking to the GitHub API
#[derive(Debug, Error)]
pub enum GitHubError {
    /// GitHub answered with a non-2xx status. The body is kept verbatim.
    #[error("GitHub API returned {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The request never produced a response (DNS, TLS, connection reset).
    #[error("GitHub API request failed: {0}")]
    Transport(#[source] BoxError),

    /// A 2xx response whose body did not match the expected shape.
    #[error("Failed to decode GitHub API response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl GitHubError {
    /// Upstream HTTP status, if GitHub answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            GitHubError::Upstream { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<octocrab::Error> for GitHubError {
    fn from(err: octocrab::Error) -> Self {
        GitHubError::Transport(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status() {
        let err = GitHubError::Upstream {
            status: 404,
            body: r#"{"message":"Not Found"}"#.to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(
            err.to_string(),
            r#"GitHub API returned 404: {"message":"Not Found"}"#
        );

        let err = GitHubError::Transport("connection refused".into());
        assert_eq!(err.status(), None);
        assert_eq!(
            err.to_string(),
            "GitHub API request failed: connection refused"
        );
    }
}
