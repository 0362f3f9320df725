//! Application builder: wires router, middleware, and state into an Axum
//! app, and runs it.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::middleware::{from_fn, from_fn_with_state};
use tokio::sync::watch;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use explorer_core::config::AppConfig;
use explorer_core::error::AppError;
use explorer_core::result::AppResult;
use explorer_database::store::FolderStore;

use crate::middleware::compression::build_compression_layer;
use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::request_logging;
use crate::middleware::timeout::{request_time_limit, request_timeout};
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let server = state.config.server.clone();

    build_router(state)
        .layer(from_fn(request_logging))
        .layer(from_fn_with_state(
            request_time_limit(&server),
            request_timeout,
        ))
        .layer(build_compression_layer())
        .layer(build_cors_layer(&server.cors))
        .layer(TraceLayer::new_for_http())
}

/// Runs the HTTP server over `store` until Ctrl+C or SIGTERM.
///
/// In-flight requests get `server.shutdown_grace_seconds` to finish once a
/// shutdown signal arrives.
pub async fn run_server(config: AppConfig, store: Arc<dyn FolderStore>) -> AppResult<()> {
    let addr = config.server.bind_address();
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);

    let app = build_app(AppState::new(config, store));

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    info!("Folder Explorer listening on {}", addr);

    let (signal_tx, mut signal_rx) = watch::channel(());
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        let _ = signal_tx.send(());
    });

    tokio::select! {
        result = server.into_future() => {
            result.map_err(|e| AppError::internal(format!("Server error: {e}")))?;
        }
        _ = async {
            if signal_rx.changed().await.is_ok() {
                tokio::time::sleep(grace).await;
            } else {
                std::future::pending::<()>().await;
            }
        } => {
            warn!(grace_seconds = grace.as_secs(), "Graceful shutdown timed out");
        }
    }

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on Unix.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
