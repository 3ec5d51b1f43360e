//! HTTP serving layer.
//!
//! Thin axum wrapper around [`crate::scheduler::ContractOptimizer`]:
//!
//! | Route | Method | Purpose |
//! |-------|--------|---------|
//! | `/spaceship/optimize` | POST | Optimize a JSON array of contracts |
//! | `/health` | GET | Liveness probe |
//!
//! Requests share no mutable state; each optimization runs on the blocking
//! pool so large inputs do not stall the runtime.

mod config;
mod error;
mod handlers;

pub use config::{Args, ServerConfig, DEFAULT_MAX_CONTRACTS, DEFAULT_PORT};
pub use error::{ApiError, ServerError, ServerResult};
pub use handlers::AppState;

use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info};

/// Builds the application router.
pub fn create_app(config: ServerConfig) -> Router {
    Router::new()
        .route("/spaceship/optimize", post(handlers::optimize_contracts))
        .route("/health", get(handlers::health))
        .with_state(AppState::new(config))
}

/// Binds the configured address and serves until Ctrl+C.
pub async fn run(config: ServerConfig) -> ServerResult<()> {
    let addr = config.addr;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    info!(
        %addr,
        prune = config.prune,
        max_contracts = config.max_contracts,
        "spaceship server listening"
    );

    axum::serve(listener, create_app(config))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("spaceship server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match signal::ctrl_c().await {
        Ok(()) => info!("received Ctrl+C, shutting down"),
        Err(err) => error!(error = %err, "failed to listen for shutdown signal"),
    }
}
