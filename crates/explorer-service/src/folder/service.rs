//! Read-only folder queries over the configured store.

use std::sync::Arc;

use tracing::{debug, error};

use explorer_core::error::{AppError, ErrorKind};
use explorer_core::result::AppResult;
use explorer_core::types::FolderId;
use explorer_database::store::FolderStore;
use explorer_entity::{Folder, FolderContents, SearchResults};

use super::tree::build_hierarchy;

/// Answers folder listing, hierarchy, contents and search queries.
#[derive(Debug, Clone)]
pub struct FolderService {
    /// Backing store.
    store: Arc<dyn FolderStore>,
}

/// Rewraps a store failure as an internal error with a generic message.
fn store_failure(message: &'static str, err: AppError) -> AppError {
    error!(error = %err, "{message}");
    AppError::with_source(ErrorKind::Internal, message, err)
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(store: Arc<dyn FolderStore>) -> Self {
        Self { store }
    }

    /// Every folder, flat and name-ordered.
    pub async fn list_folders(&self) -> AppResult<Vec<Folder>> {
        let folders = self
            .store
            .find_all()
            .await
            .map_err(|e| store_failure("Failed to fetch folders", e))?;
        debug!(count = folders.len(), "Listed folders");
        Ok(folders)
    }

    /// The assembled folder forest.
    pub async fn get_hierarchy(&self) -> AppResult<Vec<Folder>> {
        let folders = self
            .store
            .find_all()
            .await
            .map_err(|e| store_failure("Failed to fetch folder hierarchy", e))?;
        let forest = build_hierarchy(&folders);
        debug!(folders = folders.len(), roots = forest.len(), "Built hierarchy");
        Ok(forest)
    }

    /// Gets a folder by ID.
    pub async fn get_folder(&self, folder_id: &FolderId) -> AppResult<Folder> {
        self.store
            .find_by_id(folder_id)
            .await
            .map_err(|e| store_failure("Failed to fetch folder", e))?
            .ok_or_else(|| AppError::not_found("Folder not found"))
    }

    /// A folder with its immediate subfolders and files.
    pub async fn get_folder_contents(&self, folder_id: &FolderId) -> AppResult<FolderContents> {
        let contents = self
            .store
            .find_folder_with_contents(folder_id)
            .await
            .map_err(|e| store_failure("Failed to fetch folder contents", e))?
            .ok_or_else(|| AppError::not_found("Folder not found"))?;
        debug!(
            folder_id = %folder_id,
            subfolders = contents.subfolders.len(),
            files = contents.files.len(),
            "Fetched folder contents"
        );
        Ok(contents)
    }

    /// Folders and files whose names match `query`.
    ///
    /// Both lookups run concurrently; if either fails the whole search
    /// fails.
    pub async fn search(&self, query: &str) -> AppResult<SearchResults> {
        let (folders, files) = tokio::try_join!(
            self.store.search_folders(query),
            self.store.search_files(query),
        )
        .map_err(|e| store_failure("Failed to search", e))?;

        debug!(
            query,
            folders = folders.len(),
            files = files.len(),
            "Search completed"
        );
        Ok(SearchResults { folders, files })
    }
}
