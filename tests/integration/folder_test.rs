//! Integration tests for folder listing, hierarchy, and contents.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::{TestApp, TestResponse};

#[tokio::test]
async fn test_list_folders_flat_and_ordered() {
    let app = TestApp::seeded().await;

    let response = app.get("/api/v1/folders").await;

    assert_eq!(response.status, StatusCode::OK);
    let data = response.data();
    assert_eq!(
        TestResponse::names(data),
        vec!["Documents", "Music", "Personal", "Pictures", "Projects", "Work"]
    );
    assert!(data[0].get("subfolders").is_none());
    assert!(data[0].get("parentId").is_some());
    assert!(data[0].get("createdAt").is_some());
}

#[tokio::test]
async fn test_hierarchy_nests_to_full_depth() {
    let app = TestApp::seeded().await;

    let response = app.get("/api/v1/folders/hierarchy").await;

    assert_eq!(response.status, StatusCode::OK);
    let roots = response.data();
    assert_eq!(
        TestResponse::names(roots),
        vec!["Documents", "Music", "Pictures"]
    );

    let documents = &roots[0];
    assert_eq!(
        TestResponse::names(&documents["subfolders"]),
        vec!["Personal", "Work"]
    );
    let work = &documents["subfolders"][1];
    assert_eq!(TestResponse::names(&work["subfolders"]), vec!["Projects"]);
    assert_eq!(work["subfolders"][0]["subfolders"], json!([]));
    assert!(documents.get("files").is_none());
}

#[tokio::test]
async fn test_hierarchy_of_empty_store() {
    let app = TestApp::new();

    let response = app.get("/api/v1/folders/hierarchy").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({ "success": true, "data": [] }));
}

#[tokio::test]
async fn test_folder_contents_one_level() {
    let app = TestApp::seeded().await;
    let id = app.folder_id("Documents").await;

    let response = app.get(&format!("/api/v1/folders/{id}/contents")).await;

    assert_eq!(response.status, StatusCode::OK);
    let data = response.data();
    assert_eq!(data["folder"]["name"], "Documents");
    assert_eq!(
        TestResponse::names(&data["subfolders"]),
        vec!["Personal", "Work"]
    );
    assert!(data["subfolders"][1].get("subfolders").is_none());
    assert_eq!(TestResponse::names(&data["files"]), vec!["notes", "resume"]);
    assert_eq!(data["files"][0]["extension"], "txt");
    assert_eq!(data["files"][0]["size"], 5120);
    assert_eq!(data["files"][0]["folderId"], id.as_str());
}

#[tokio::test]
async fn test_folder_contents_not_found() {
    let app = TestApp::new();

    let response = app.get("/api/v1/folders/missing-id/contents").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(
        response.body,
        json!({ "success": false, "error": "Folder not found" })
    );
}

#[tokio::test]
async fn test_get_single_folder() {
    let app = TestApp::seeded().await;
    let id = app.folder_id("Projects").await;

    let response = app.get(&format!("/api/v1/folders/{id}")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data()["path"], "Documents/Work/Projects");

    let response = app.get("/api/v1/folders/does-not-exist").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["success"], false);
}

#[tokio::test]
async fn test_store_failure_is_internal_error() {
    let app = TestApp::failing();

    let response = app.get("/api/v1/folders").await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.body,
        json!({ "success": false, "error": "Failed to fetch folders" })
    );

    let response = app.get("/api/v1/folders/hierarchy").await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["error"], "Failed to fetch folder hierarchy");

    let response = app.get("/api/v1/folders/any/contents").await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["error"], "Failed to fetch folder contents");
}

#[tokio::test]
async fn test_unknown_route() {
    let app = TestApp::new();

    let response = app.get("/api/v1/nothing-here").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["success"], false);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new();

    let response = app.get("/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert!(response.body["timestamp"].is_string());

    let response = TestApp::failing().get("/health").await;
    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.body["status"], "degraded");
}

#[tokio::test]
async fn test_undecodable_folder_id_is_bad_request() {
    let app = TestApp::seeded().await;

    let response = app.get("/api/v1/folders/%FF/contents").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
    assert!(response.body["error"].is_string());

    let response = app.get("/api/v1/folders/%FF").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
}

#[tokio::test]
async fn test_unsupported_method_uses_envelope() {
    let app = TestApp::seeded().await;

    let response = app.send("POST", "/api/v1/folders").await;
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        response.body,
        json!({ "success": false, "error": "Method not allowed" })
    );

    let response = app.send("DELETE", "/api/v1/folders/hierarchy").await;
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.body["success"], false);

    let response = app.send("PUT", "/health").await;
    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.body["success"], false);
}
