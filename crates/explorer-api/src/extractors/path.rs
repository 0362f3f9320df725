//! Path parameters that reject in the failure envelope.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;

use explorer_core::error::AppError;

use crate::error::ApiError;

/// Like [`Path`], but a malformed segment becomes a `400` with
/// `{"success": false, "error": ...}` instead of axum's plain-text body.
#[derive(Debug, Clone)]
pub struct FolderPath<T>(pub T);

impl<S, T> FromRequestParts<S> for FolderPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(error = %rejection.body_text(), "Rejected path parameter");
                Err(AppError::validation(rejection.body_text()).into())
            }
        }
    }
}
