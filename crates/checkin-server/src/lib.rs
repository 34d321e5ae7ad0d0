//! checkin-server — HTTP API and static pages for the check-in tool.
//!
//! Routes:
//! - `GET /api/ping`, `POST /api/submit` (public)
//! - `GET /api/stats`, `POST /api/purge`, `GET /api/export` (admin token)
//! - `/` and `/admin` (embedded HTML)

pub mod auth;
pub mod config;
pub mod error;
pub mod pages;
pub mod routes;
pub mod state;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tokio::net::TcpListener;

use checkin_core::store::SubmissionStore;

pub use config::{load_config_from, CheckinConfig};
pub use state::AppState;

/// Build the router for `config` around a fresh, empty store.
pub fn build_app(config: &CheckinConfig) -> Router {
    let state = AppState::new(Arc::new(SubmissionStore::new()), config.admin_token.as_str());
    routes::router(state, config.body_limit_bytes)
}

/// Bind the configured address and serve until Ctrl-C.
pub async fn serve(config: CheckinConfig) -> Result<()> {
    let listener = TcpListener::bind((config.host.as_str(), config.port))
        .await
        .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?;
    serve_on(listener, &config).await
}

/// Serve on an already-bound listener until Ctrl-C.
pub async fn serve_on(listener: TcpListener, config: &CheckinConfig) -> Result<()> {
    let addr = listener.local_addr().context("listener has no local address")?;
    if config.uses_default_token() {
        tracing::warn!("using the placeholder admin token; set ADMIN_TOKEN before deploying");
    }
    tracing::info!("server running on http://{addr}");

    axum::serve(listener, build_app(config))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
