//! gh-commit-viewer: serve a GitHub commit's metadata and parsed diff

use anyhow::Context;
use gh_client::{OctocrabClient, TokenResolver};
use gh_commit_config::AppConfig;
use std::sync::Arc;

mod error;
mod fetcher;
mod logger;
mod middleware;
mod routes;
#[cfg(test)]
mod test_support;

use fetcher::CommitFetcher;
use routes::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();
    logger::init();

    log::info!("Starting gh-commit-viewer");

    let config = AppConfig::load();
    let token = TokenResolver::new(config.github_token.clone()).resolve().await;
    if token.is_none() {
        log::warn!("No GitHub token found, requests are unauthenticated and rate limited");
    }

    let client = OctocrabClient::from_config(&config.github_api_url, token)
        .context("Failed to create GitHub client")?;
    log::info!("GitHub client created for {}", client.base_url());

    let state = AppState::new(CommitFetcher::new(Arc::new(client)));
    let app = routes::router(Arc::new(state));

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    log::info!("Server is running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    log::info!("Exiting gh-commit-viewer");
    Ok(())
}

/// Resolves on Ctrl-C
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}
