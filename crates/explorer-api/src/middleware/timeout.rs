//! Request timeout middleware.

use std::time::Duration;

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::Response;

use explorer_core::config::ServerConfig;

use crate::error::ApiErrorResponse;

/// Time budget for one request.
pub fn request_time_limit(config: &ServerConfig) -> Duration {
    Duration::from_secs(config.request_timeout_seconds)
}

/// Answers `408` in the failure envelope once `limit` elapses.
pub async fn request_timeout(
    State(limit): State<Duration>,
    request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();
    match tokio::time::timeout(limit, next.run(request)).await {
        Ok(response) => response,
        Err(_) => {
            tracing::warn!(path = %path, limit_ms = limit.as_millis() as u64, "Request timed out");
            ApiErrorResponse::with_status(StatusCode::REQUEST_TIMEOUT, "Request timed out")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::Router;
    use axum::body::Body;
    use axum::middleware::from_fn_with_state;
    use axum::routing::get;
    use tower::ServiceExt;

    fn app(limit: Duration) -> Router {
        Router::new()
            .route("/fast", get(|| async { "done" }))
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    "late"
                }),
            )
            .layer(from_fn_with_state(limit, request_timeout))
    }

    async fn call(limit: Duration, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = app(limit)
            .oneshot(
                axum::http::Request::builder()
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, body)
    }

    #[tokio::test]
    async fn test_slow_request_gets_envelope() {
        let (status, body) = call(Duration::from_millis(20), "/slow").await;
        assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
        assert_eq!(
            body,
            serde_json::json!({ "success": false, "error": "Request timed out" })
        );
    }

    #[tokio::test]
    async fn test_fast_request_passes_through() {
        let (status, _) = call(Duration::from_secs(5), "/fast").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[test]
    fn test_limit_from_config() {
        let config = ServerConfig {
            request_timeout_seconds: 7,
            ..ServerConfig::default()
        };
        assert_eq!(request_time_limit(&config), Duration::from_secs(7));
    }
}
