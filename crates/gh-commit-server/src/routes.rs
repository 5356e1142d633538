//! HTTP routes
//!
//! Read-only endpoints in front of the commit fetcher:
//! - `GET /repositories/{owner}/{repository}/commits/{oid}` → `[CommitInfo]`
//! - `GET /repositories/{owner}/{repository}/commits/{oid}/diff` → `[FileDiff]`
//! - `GET /repositories/{owner}/{repository}/commits/{oid}/view` → HTML page,
//!   streamed: the loading indicator first, the settled content after
//! - `GET /health`

use crate::error::ApiError;
use crate::fetcher::CommitFetcher;
use crate::middleware::log_requests;
use axum::body::Body;
use axum::extract::{Path, State};
use axum::http::Method;
use axum::response::Html;
use axum::routing::get;
use axum::{middleware, Json, Router};
use gh_diff_viewer::{CommitInfo, DefaultTheme, DiffViewer, FileDiff, ThemeProvider};
use serde::Deserialize;
use futures::{future, stream, StreamExt};
use serde_json::{json, Value};
use std::convert::Infallible;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Shared per-process state; requests never mutate it
pub struct AppState {
    pub fetcher: CommitFetcher,
    pub theme: Box<dyn ThemeProvider>,
}

impl AppState {
    pub fn new(fetcher: CommitFetcher) -> Self {
        Self {
            fetcher,
            theme: Box::new(DefaultTheme),
        }
    }
}

/// Path parameters shared by all commit routes
#[derive(Debug, Deserialize)]
pub struct CommitPath {
    owner: String,
    repository: String,
    oid: String,
}

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET]);

    Router::new()
        .route("/health", get(health))
        .route(
            "/repositories/{owner}/{repository}/commits/{oid}",
            get(commit_info),
        )
        .route(
            "/repositories/{owner}/{repository}/commits/{oid}/diff",
            get(commit_diff),
        )
        .route(
            "/repositories/{owner}/{repository}/commits/{oid}/view",
            get(commit_view),
        )
        .layer(middleware::from_fn(log_requests))
        .layer(cors)
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn commit_info(
    State(state): State<Arc<AppState>>,
    Path(path): Path<CommitPath>,
) -> Result<Json<Vec<CommitInfo>>, ApiError> {
    let info = state
        .fetcher
        .commit_info(&path.owner, &path.repository, &path.oid)
        .await
        .map_err(|e| ApiError::new("Error fetching commit details", e))?;
    Ok(Json(vec![info]))
}

async fn commit_diff(
    State(state): State<Arc<AppState>>,
    Path(path): Path<CommitPath>,
) -> Result<Json<Vec<FileDiff>>, ApiError> {
    let files = state
        .fetcher
        .commit_diff(&path.owner, &path.repository, &path.oid)
        .await
        .map_err(|e| ApiError::new("Error fetching commit diff", e))?;
    log::debug!(
        "{}/{} @ {}: {} changed files",
        path.owner,
        path.repository,
        path.oid,
        files.len()
    );
    Ok(Json(files))
}

async fn commit_view(
    State(state): State<Arc<AppState>>,
    Path(path): Path<CommitPath>,
) -> Html<Body> {
    let title = format!("{}/{} @ {}", path.owner, path.repository, path.oid);
    let loading = DiffViewer::new(state.theme.as_ref())
        .with_title(title)
        .render_loading_prefix();

    let settled = async move {
        let view = state
            .fetcher
            .commit_page(&path.owner, &path.repository, &path.oid)
            .await;
        Ok::<_, Infallible>(
            DiffViewer::new(state.theme.as_ref()).render_settled_suffix(&view, chrono::Utc::now()),
        )
    };

    let chunks = stream::once(future::ready(Ok::<_, Infallible>(loading)))
        .chain(stream::once(settled));
    Html(Body::from_stream(chunks))
}
