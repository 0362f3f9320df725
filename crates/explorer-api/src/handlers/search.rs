//! Search handler.

use axum::Json;
use axum::extract::State;

use explorer_entity::SearchResults;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::FolderPath;
use crate::state::AppState;

/// GET /api/v1/folders/search/{query}
pub async fn search(
    State(state): State<AppState>,
    FolderPath(query): FolderPath<String>,
) -> Result<Json<ApiResponse<SearchResults>>, ApiError> {
    let results = state.folder_service.search(&query).await?;
    Ok(Json(ApiResponse::ok(results)))
}
