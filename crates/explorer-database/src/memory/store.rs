//! In-memory store implementation using dashmap.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use tracing::debug;

use explorer_core::error::AppError;
use explorer_core::result::AppResult;
use explorer_core::types::{FileId, FolderId};
use explorer_entity::{CreateFile, CreateFolder, File, Folder, FolderContents};

use crate::store::{FolderSeeder, FolderStore, normalize_query};

/// Process-local folder store.
///
/// Records are kept as plain values; every read hands out clones, so
/// callers can never alias the stored records.
#[derive(Debug, Clone, Default)]
pub struct MemoryFolderStore {
    folders: Arc<DashMap<FolderId, Folder>>,
    files: Arc<DashMap<FileId, File>>,
}

impl MemoryFolderStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with the given records.
    pub fn with_records(folders: Vec<Folder>, files: Vec<File>) -> Self {
        let store = Self::new();
        for folder in folders {
            store.put_folder(folder);
        }
        for file in files {
            store.put_file(file);
        }
        store
    }

    /// Store a folder record as-is, replacing any record with the same id.
    ///
    /// No referential checks are made, so dangling parents can be staged.
    pub fn put_folder(&self, folder: Folder) {
        self.folders.insert(folder.id.clone(), folder);
    }

    /// Store a file record as-is, replacing any record with the same id.
    pub fn put_file(&self, file: File) {
        self.files.insert(file.id.clone(), file);
    }

    /// Number of stored folders.
    pub fn folder_count(&self) -> usize {
        self.folders.len()
    }

    /// Number of stored files.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    fn folders_where(&self, predicate: impl Fn(&Folder) -> bool) -> Vec<Folder> {
        let mut matched: Vec<Folder> = self
            .folders
            .iter()
            .filter(|entry| predicate(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        matched.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        matched
    }

    fn files_where(&self, predicate: impl Fn(&File) -> bool) -> Vec<File> {
        let mut matched: Vec<File> = self
            .files
            .iter()
            .filter(|entry| predicate(entry.value()))
            .map(|entry| entry.value().clone())
            .collect();
        matched.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        matched
    }
}

#[async_trait]
impl FolderStore for MemoryFolderStore {
    async fn find_all(&self) -> AppResult<Vec<Folder>> {
        Ok(self.folders_where(|_| true))
    }

    async fn find_by_id(&self, id: &FolderId) -> AppResult<Option<Folder>> {
        Ok(self.folders.get(id).map(|entry| entry.value().clone()))
    }

    async fn find_subfolders(&self, parent_id: &FolderId) -> AppResult<Vec<Folder>> {
        Ok(self.folders_where(|f| f.parent_id.as_ref() == Some(parent_id)))
    }

    async fn find_files(&self, folder_id: &FolderId) -> AppResult<Vec<File>> {
        Ok(self.files_where(|f| &f.folder_id == folder_id))
    }

    async fn find_folder_with_contents(
        &self,
        folder_id: &FolderId,
    ) -> AppResult<Option<FolderContents>> {
        let Some(folder) = self.find_by_id(folder_id).await? else {
            return Ok(None);
        };

        let subfolders = self.find_subfolders(folder_id).await?;
        let files = self.find_files(folder_id).await?;

        Ok(Some(FolderContents {
            folder,
            subfolders,
            files,
        }))
    }

    async fn search_folders(&self, query: &str) -> AppResult<Vec<Folder>> {
        let Some(needle) = normalize_query(query).map(str::to_lowercase) else {
            return Ok(Vec::new());
        };
        let hits = self.folders_where(|f| f.name.to_lowercase().contains(&needle));
        debug!(query = %needle, hits = hits.len(), "Searched folders");
        Ok(hits)
    }

    async fn search_files(&self, query: &str) -> AppResult<Vec<File>> {
        let Some(needle) = normalize_query(query).map(str::to_lowercase) else {
            return Ok(Vec::new());
        };
        let hits = self.files_where(|f| f.name.to_lowercase().contains(&needle));
        debug!(query = %needle, hits = hits.len(), "Searched files");
        Ok(hits)
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}

#[async_trait]
impl FolderSeeder for MemoryFolderStore {
    async fn insert_folder(&self, data: CreateFolder) -> AppResult<Folder> {
        if let Some(parent_id) = &data.parent_id {
            if !self.folders.contains_key(parent_id) {
                return Err(AppError::not_found(format!(
                    "Parent folder for '{}' does not exist",
                    data.path
                )));
            }
        }

        let now = Utc::now();
        let folder = Folder::new(
            FolderId::generate(),
            data.name,
            data.path,
            data.parent_id,
            now,
            now,
        );
        self.put_folder(folder.clone());
        Ok(folder)
    }

    async fn insert_file(&self, data: CreateFile) -> AppResult<File> {
        if !self.folders.contains_key(&data.folder_id) {
            return Err(AppError::not_found(format!(
                "Folder {} does not exist",
                data.folder_id
            )));
        }

        let now = Utc::now();
        let file = File::new(
            FileId::generate(),
            data.name,
            data.extension,
            data.size,
            data.folder_id,
            now,
            now,
        );
        self.put_file(file.clone());
        Ok(file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folder(id: &str, name: &str, parent: Option<&str>) -> Folder {
        let now = Utc::now();
        Folder::new(id, name, name, parent.map(FolderId::from), now, now)
    }

    fn file(id: &str, name: &str, folder_id: &str) -> File {
        let now = Utc::now();
        File::new(id, name, "txt", 10, folder_id, now, now)
    }

    fn make_store() -> MemoryFolderStore {
        MemoryFolderStore::with_records(
            vec![
                folder("1", "Root", None),
                folder("2", "beta", Some("1")),
                folder("3", "Alpha", Some("1")),
                folder("4", "Deep", Some("2")),
            ],
            vec![
                file("f1", "zeta", "1"),
                file("f2", "Report", "1"),
                file("f3", "other", "2"),
            ],
        )
    }

    fn names(folders: &[Folder]) -> Vec<&str> {
        folders.iter().map(|f| f.name.as_str()).collect()
    }

    #[tokio::test]
    async fn test_find_all_is_byte_ordered() {
        let store = make_store();
        let all = store.find_all().await.unwrap();
        assert_eq!(names(&all), vec!["Alpha", "Deep", "Root", "beta"]);
    }

    #[tokio::test]
    async fn test_find_by_id_missing_is_none() {
        let store = make_store();
        assert!(store.find_by_id(&"nope".into()).await.unwrap().is_none());
        assert!(store.find_by_id(&"1".into()).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_contents_are_one_level() {
        let store = make_store();
        let contents = store
            .find_folder_with_contents(&"1".into())
            .await
            .unwrap()
            .expect("folder exists");

        assert_eq!(contents.folder.name, "Root");
        assert_eq!(names(&contents.subfolders), vec!["Alpha", "beta"]);
        let file_names: Vec<_> = contents.files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(file_names, vec!["Report", "zeta"]);
        assert!(contents.subfolders.iter().all(|f| f.subfolders.is_none()));
    }

    #[tokio::test]
    async fn test_contents_missing_folder() {
        let store = MemoryFolderStore::new();
        let contents = store
            .find_folder_with_contents(&"missing-id".into())
            .await
            .unwrap();
        assert!(contents.is_none());
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_substring() {
        let store = make_store();
        let folders = store.search_folders("ALP").await.unwrap();
        assert_eq!(names(&folders), vec!["Alpha"]);

        let files = store.search_files("  rep ").await.unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].name, "Report");
    }

    #[tokio::test]
    async fn test_blank_search_matches_nothing() {
        let store = make_store();
        assert!(store.search_folders("   ").await.unwrap().is_empty());
        assert!(store.search_files("").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_seeder_checks_parent() {
        let store = MemoryFolderStore::new();
        let err = store
            .insert_folder(CreateFolder {
                parent_id: Some("ghost".into()),
                name: "Orphan".to_string(),
                path: "ghost/Orphan".to_string(),
            })
            .await
            .expect_err("parent missing");
        assert!(err.is_not_found());

        let root = store.insert_folder(CreateFolder::root("Docs")).await.unwrap();
        let child = store
            .insert_folder(CreateFolder::child_of(&root, "Work"))
            .await
            .unwrap();
        assert_eq!(child.parent_id, Some(root.id.clone()));
        assert_eq!(store.folder_count(), 2);
    }
}
