//! Integration tests for name search.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::{TestApp, TestResponse};

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let app = TestApp::seeded().await;

    let response = app.get("/api/v1/folders/search/WORK").await;

    assert_eq!(response.status, StatusCode::OK);
    let data = response.data();
    assert_eq!(TestResponse::names(&data["folders"]), vec!["Work"]);
    assert_eq!(data["files"], json!([]));
}

#[tokio::test]
async fn test_search_matches_both_kinds_in_name_order() {
    let app = TestApp::seeded().await;

    let response = app.get("/api/v1/folders/search/p").await;

    assert_eq!(response.status, StatusCode::OK);
    let data = response.data();
    assert_eq!(
        TestResponse::names(&data["folders"]),
        vec!["Personal", "Pictures", "Projects"]
    );
    assert_eq!(
        TestResponse::names(&data["files"]),
        vec!["presentation", "project-plan"]
    );
}

#[tokio::test]
async fn test_search_without_matches() {
    let app = TestApp::seeded().await;

    let response = app.get("/api/v1/folders/search/nonexistent").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({ "success": true, "data": { "folders": [], "files": [] } })
    );
}

#[tokio::test]
async fn test_blank_query_matches_nothing() {
    let app = TestApp::seeded().await;

    let response = app.get("/api/v1/folders/search/%20%20").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.data(), &json!({ "folders": [], "files": [] }));
}

#[tokio::test]
async fn test_search_failure_fails_whole_request() {
    let app = TestApp::failing();

    let response = app.get("/api/v1/folders/search/anything").await;

    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.body,
        json!({ "success": false, "error": "Failed to search" })
    );
}

#[tokio::test]
async fn test_undecodable_query_is_bad_request() {
    let app = TestApp::seeded().await;

    let response = app.get("/api/v1/folders/search/%C3%28").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
}
