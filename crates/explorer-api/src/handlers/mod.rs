//! Route handlers organized by domain.

pub mod folder;
pub mod health;
pub mod search;

use axum::http::StatusCode;
use axum::response::Response;

use crate::error::ApiErrorResponse;

/// Fallback for unmatched routes, in the failure envelope.
pub async fn not_found() -> Response {
    ApiErrorResponse::with_status(StatusCode::NOT_FOUND, "Route not found")
}

/// Fallback for a known path hit with an unsupported method.
pub async fn method_not_allowed() -> Response {
    ApiErrorResponse::with_status(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")
}
