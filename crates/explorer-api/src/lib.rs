//! # explorer-api
//!
//! HTTP API layer for Folder Explorer built on Axum.
//!
//! Provides the read-only folder endpoints under `/api/v1`, a health
//! check, middleware (CORS, compression, timeout, logging), and the
//! `{success, data}` / `{success, error}` response envelope.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, run_server};
pub use state::AppState;
