//! Request logging middleware

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::time::Instant;

/// Logs every request with its status and latency
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;

    let status = response.status();
    let elapsed = started.elapsed();
    if status.is_server_error() || status.is_client_error() {
        log::warn!("{} {} -> {} ({:?})", method, uri, status, elapsed);
    } else {
        log::info!("{} {} -> {} ({:?})", method, uri, status, elapsed);
    }
    response
}
