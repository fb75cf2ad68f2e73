//! HTTP entrypoint - router construction and the serve loop.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::response::Response;
use axum::routing::{get, post};
use serde_json::json;
use tokio::net::TcpListener;
use tracing::{info, warn};

use super::deposit::handle_deposit;
use super::helpers::ok_json;
use crate::core::config::AppConfig;
use crate::engine::EngineClient;

/// Shared, read-only state handed to every request.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub engine: Arc<EngineClient>,
}

impl AppState {
    #[must_use]
    pub fn new(config: AppConfig) -> Self {
        let engine = EngineClient::new(&config);
        Self {
            config: Arc::new(config),
            engine: Arc::new(engine),
        }
    }
}

async fn health() -> Response {
    ok_json(&json!({ "status": "ok" }))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/deposit", post(handle_deposit))
        .route("/health", get(health))
        .with_state(state)
}

/// Serves the router on an already-bound listener until shutdown.
///
/// # Errors
///
/// Returns an error if the server fails while accepting connections.
pub async fn serve_on(listener: TcpListener, state: AppState) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "Deposit relay listening");
    }

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

/// Binds `0.0.0.0:{port}` and serves until Ctrl-C or SIGTERM.
///
/// # Errors
///
/// Returns an error if the port cannot be bound or the server fails.
pub async fn serve(config: AppConfig) -> std::io::Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;
    serve_on(listener, AppState::new(config)).await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
