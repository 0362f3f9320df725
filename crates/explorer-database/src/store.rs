//! The read contract the domain logic depends on.

use async_trait::async_trait;

use explorer_core::result::AppResult;
use explorer_core::types::FolderId;
use explorer_entity::{CreateFile, CreateFolder, File, Folder, FolderContents};

/// Read operations over the folder catalog, independent of backing
/// technology.
///
/// Every sequence is ordered by name ascending using byte-wise
/// (case-sensitive) comparison. A missing entity is `Ok(None)`; any
/// `Err` is an infrastructure failure of kind `Database`.
///
/// Search matches are case-insensitive substrings of `name`. The query is
/// trimmed first and a blank query matches nothing.
#[async_trait]
pub trait FolderStore: Send + Sync + std::fmt::Debug + 'static {
    /// Every folder in the catalog.
    async fn find_all(&self) -> AppResult<Vec<Folder>>;

    /// One folder by ID.
    async fn find_by_id(&self, id: &FolderId) -> AppResult<Option<Folder>>;

    /// Immediate children of a folder.
    async fn find_subfolders(&self, parent_id: &FolderId) -> AppResult<Vec<Folder>>;

    /// Files directly inside a folder.
    async fn find_files(&self, folder_id: &FolderId) -> AppResult<Vec<File>>;

    /// The folder with its immediate subfolders and files, read as one
    /// logical operation.
    async fn find_folder_with_contents(
        &self,
        folder_id: &FolderId,
    ) -> AppResult<Option<FolderContents>>;

    /// Folders whose name matches the query.
    async fn search_folders(&self, query: &str) -> AppResult<Vec<Folder>>;

    /// Files whose name matches the query.
    async fn search_files(&self, query: &str) -> AppResult<Vec<File>>;

    /// Check backend reachability.
    async fn health_check(&self) -> AppResult<bool>;
}

/// Write surface used only to populate a catalog (seeding, tests).
#[async_trait]
pub trait FolderSeeder: Send + Sync + std::fmt::Debug + 'static {
    /// Insert a folder and return the stored record.
    async fn insert_folder(&self, data: CreateFolder) -> AppResult<Folder>;

    /// Insert a file and return the stored record.
    async fn insert_file(&self, data: CreateFile) -> AppResult<File>;
}

/// Normalise a search query: trimmed, or `None` when nothing is left.
pub fn normalize_query(query: &str) -> Option<&str> {
    let trimmed = query.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
