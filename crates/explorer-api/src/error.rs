//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use explorer_core::error::{AppError, ErrorKind};

/// Failure envelope: `{"success": false, "error": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Always `false`.
    pub success: bool,
    /// Human-readable message.
    pub error: String,
}

impl ApiErrorResponse {
    /// Creates a failure body.
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }

    /// Pairs the body with `status`.
    pub fn with_status(status: StatusCode, error: impl Into<String>) -> Response {
        (status, Json(Self::new(error))).into_response()
    }
}

/// An [`AppError`] on its way out of a handler.
///
/// Handlers return `Result<_, ApiError>`; `?` converts any `AppError`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

/// HTTP status for an error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::Internal
        | ErrorKind::Database
        | ErrorKind::Configuration
        | ErrorKind::Serialization => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let Self(err) = self;
        let status = status_for(err.kind);
        if status.is_server_error() {
            tracing::error!(kind = %err.kind, error = %err.message, "Request failed");
        }

        ApiErrorResponse::with_status(status, err.message)
    }
}
