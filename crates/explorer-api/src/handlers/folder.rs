//! Folder listing, hierarchy, and contents handlers.

use axum::Json;
use axum::extract::State;

use explorer_core::types::FolderId;
use explorer_entity::{Folder, FolderContents};

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::FolderPath;
use crate::state::AppState;

/// GET /api/v1/folders
pub async fn list_folders(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Folder>>>, ApiError> {
    let folders = state.folder_service.list_folders().await?;
    Ok(Json(ApiResponse::ok(folders)))
}

/// GET /api/v1/folders/hierarchy
pub async fn get_hierarchy(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Folder>>>, ApiError> {
    let forest = state.folder_service.get_hierarchy().await?;
    Ok(Json(ApiResponse::ok(forest)))
}

/// GET /api/v1/folders/{id}
pub async fn get_folder(
    State(state): State<AppState>,
    FolderPath(id): FolderPath<FolderId>,
) -> Result<Json<ApiResponse<Folder>>, ApiError> {
    let folder = state.folder_service.get_folder(&id).await?;
    Ok(Json(ApiResponse::ok(folder)))
}

/// GET /api/v1/folders/{id}/contents
pub async fn get_folder_contents(
    State(state): State<AppState>,
    FolderPath(id): FolderPath<FolderId>,
) -> Result<Json<ApiResponse<FolderContents>>, ApiError> {
    let contents = state.folder_service.get_folder_contents(&id).await?;
    Ok(Json(ApiResponse::ok(contents)))
}
