//! Route definitions for the Folder Explorer HTTP API.
//!
//! Folder routes are mounted under `/api/v1`; the health check sits at the
//! root. The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{Router, routing::get};

use crate::handlers;
use crate::state::AppState;

/// Build the Axum router with all routes.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(folder_routes())
        .merge(search_routes())
        .method_not_allowed_fallback(handlers::method_not_allowed);

    Router::new()
        .nest("/api/v1", api_routes)
        .merge(health_routes())
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .fallback(handlers::not_found)
        .with_state(state)
}

/// Flat listing, hierarchy, single folder, contents
fn folder_routes() -> Router<AppState> {
    Router::new()
        .route("/folders", get(handlers::folder::list_folders))
        .route("/folders/hierarchy", get(handlers::folder::get_hierarchy))
        .route("/folders/{id}", get(handlers::folder::get_folder))
        .route(
            "/folders/{id}/contents",
            get(handlers::folder::get_folder_contents),
        )
}

/// Name search across folders and files
fn search_routes() -> Router<AppState> {
    Router::new().route("/folders/search/{query}", get(handlers::search::search))
}

/// Liveness check
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
