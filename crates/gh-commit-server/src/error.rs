//! Mapping fetch failures to HTTP responses

use crate::fetcher::FetchError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use gh_client::GitHubError;
use serde_json::{json, Value};

/// A failed request: what we were doing plus why it failed
#[derive(Debug)]
pub struct ApiError {
    context: &'static str,
    source: FetchError,
}

impl ApiError {
    pub fn new(context: &'static str, source: FetchError) -> Self {
        Self { context, source }
    }

    /// Status and `error` payload for the response body
    fn parts(&self) -> (StatusCode, Value) {
        match &self.source {
            FetchError::GitHub(GitHubError::Upstream { status, body }) => (
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
                upstream_body(body),
            ),
            FetchError::GitHub(other) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Value::String(other.to_string()),
            ),
            FetchError::NoParent { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Value::String(self.source.to_string()),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = self.parts();
        log::warn!("{} ({}): {}", self.context, status, self.source);
        (status, Json(json!({ "message": self.context, "error": error }))).into_response()
    }
}

/// Forward a JSON body as JSON, anything else as a string
fn upstream_body(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_status_and_body_forwarded() {
        let err = ApiError::new(
            "Error fetching commit details",
            FetchError::GitHub(GitHubError::Upstream {
                status: 404,
                body: r#"{"message":"Not Found"}"#.to_string(),
            }),
        );
        let (status, error) = err.parts();
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(error, json!({ "message": "Not Found" }));
    }

    #[test]
    fn test_non_json_upstream_body_kept_as_string() {
        let err = ApiError::new(
            "Error fetching commit diff",
            FetchError::GitHub(GitHubError::Upstream {
                status: 502,
                body: "<html>Bad gateway</html>".to_string(),
            }),
        );
        let (status, error) = err.parts();
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(error, json!("<html>Bad gateway</html>"));
    }

    #[test]
    fn test_transport_failure_is_500() {
        let err = ApiError::new(
            "Error fetching commit details",
            FetchError::GitHub(GitHubError::Transport("dns error".into())),
        );
        let (status, _) = err.parts();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_root_commit_is_422() {
        let err = ApiError::new(
            "Error fetching commit diff",
            FetchError::NoParent {
                oid: "abc".to_string(),
            },
        );
        let (status, error) = err.parts();
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(error, json!("commit abc has no parent to compare against"));
    }
}
