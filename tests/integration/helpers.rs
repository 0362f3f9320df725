//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use explorer_api::{AppState, build_app};
use explorer_core::config::AppConfig;
use explorer_core::error::AppError;
use explorer_core::result::AppResult;
use explorer_core::types::FolderId;
use explorer_database::seed::seed_demo_catalog;
use explorer_database::{FolderStore, MemoryFolderStore};
use explorer_entity::{File, Folder, FolderContents};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// The store behind the router
    pub store: Arc<dyn FolderStore>,
}

impl TestApp {
    /// An app over an empty in-memory store
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryFolderStore::new()))
    }

    /// An app over the demo catalog
    pub async fn seeded() -> Self {
        let store = MemoryFolderStore::new();
        seed_demo_catalog(&store)
            .await
            .expect("Failed to seed demo catalog");
        Self::with_store(Arc::new(store))
    }

    /// An app whose store fails every read
    pub fn failing() -> Self {
        Self::with_store(Arc::new(FailingStore))
    }

    /// An app over the given store
    pub fn with_store(store: Arc<dyn FolderStore>) -> Self {
        let state = AppState::new(AppConfig::default(), Arc::clone(&store));
        Self {
            router: build_app(state),
            store,
        }
    }

    /// Look up a seeded folder's id by name
    pub async fn folder_id(&self, name: &str) -> FolderId {
        self.store
            .find_all()
            .await
            .expect("Failed to list folders")
            .into_iter()
            .find(|f| f.name == name)
            .map(|f| f.id.clone())
            .unwrap_or_else(|| panic!("No folder named {name}"))
    }

    /// Make a GET request to the app
    pub async fn get(&self, path: &str) -> TestResponse {
        self.send("GET", path).await
    }

    /// Make a request with an arbitrary method and no body
    pub async fn send(&self, method: &str, path: &str) -> TestResponse {
        let req = Request::builder()
            .method(method)
            .uri(path)
            .body(Body::empty())
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `data` payload of a success envelope
    pub fn data(&self) -> &Value {
        assert_eq!(self.body["success"], true, "unexpected body: {}", self.body);
        &self.body["data"]
    }

    /// Names of the objects in a JSON array
    pub fn names(value: &Value) -> Vec<String> {
        value
            .as_array()
            .expect("expected an array")
            .iter()
            .map(|v| v["name"].as_str().expect("name").to_string())
            .collect()
    }
}

/// Store whose reads all fail
#[derive(Debug)]
pub struct FailingStore;

fn unavailable<T>() -> AppResult<T> {
    Err(AppError::database("connection refused"))
}

#[async_trait]
impl FolderStore for FailingStore {
    async fn find_all(&self) -> AppResult<Vec<Folder>> {
        unavailable()
    }

    async fn find_by_id(&self, _id: &FolderId) -> AppResult<Option<Folder>> {
        unavailable()
    }

    async fn find_subfolders(&self, _parent_id: &FolderId) -> AppResult<Vec<Folder>> {
        unavailable()
    }

    async fn find_files(&self, _folder_id: &FolderId) -> AppResult<Vec<File>> {
        unavailable()
    }

    async fn find_folder_with_contents(
        &self,
        _folder_id: &FolderId,
    ) -> AppResult<Option<FolderContents>> {
        unavailable()
    }

    async fn search_folders(&self, _query: &str) -> AppResult<Vec<Folder>> {
        unavailable()
    }

    async fn search_files(&self, _query: &str) -> AppResult<Vec<File>> {
        unavailable()
    }

    async fn health_check(&self) -> AppResult<bool> {
        unavailable()
    }
}
