//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use explorer_core::types::FolderId;

use crate::file::File;

/// A folder in the catalog.
///
/// `subfolders` is only populated by hierarchy assembly and `files` only
/// by contents/search views; a folder straight from the store has neither.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
    /// Unique folder identifier.
    pub id: FolderId,
    /// Folder display name.
    pub name: String,
    /// Materialized path (e.g., `Documents/Work`). Display only.
    pub path: String,
    /// Parent folder ID (null for root folders).
    pub parent_id: Option<FolderId>,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// When the folder was last updated.
    pub updated_at: DateTime<Utc>,
    /// Assembled child folders, name-ordered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subfolders: Option<Vec<Folder>>,
    /// Files directly inside this folder, name-ordered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<File>>,
}

impl Folder {
    /// Construct a folder record with no attached children or files.
    pub fn new(
        id: impl Into<FolderId>,
        name: impl Into<String>,
        path: impl Into<String>,
        parent_id: Option<FolderId>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            path: path.into(),
            parent_id,
            created_at,
            updated_at,
            subfolders: None,
            files: None,
        }
    }

    /// Check if this is a root folder (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Whether the assembled child sequence is non-empty.
    pub fn has_subfolders(&self) -> bool {
        self.subfolders.as_ref().is_some_and(|s| !s.is_empty())
    }

    /// A fresh copy of this record with an empty, privately owned child
    /// sequence.
    pub fn detached(&self) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            path: self.path.clone(),
            parent_id: self.parent_id.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
            subfolders: Some(Vec::new()),
            files: self.files.clone(),
        }
    }
}

impl Drop for Folder {
    /// Unlinks descendants onto a heap stack so deep chains drop in
    /// constant stack space.
    fn drop(&mut self) {
        let mut pending = self.subfolders.take().unwrap_or_default();
        while let Some(mut folder) = pending.pop() {
            pending.extend(folder.subfolders.take().into_iter().flatten());
        }
    }
}

/// Data required to create a new folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFolder {
    /// Parent folder (None for root).
    pub parent_id: Option<FolderId>,
    /// Folder name.
    pub name: String,
    /// Full materialized path.
    pub path: String,
}

impl CreateFolder {
    /// A top-level folder whose path is its own name.
    pub fn root(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            parent_id: None,
            path: name.clone(),
            name,
        }
    }

    /// A folder nested under `parent`, deriving the path from the parent's.
    pub fn child_of(parent: &Folder, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            parent_id: Some(parent.id.clone()),
            path: format!("{}/{}", parent.path, name),
            name,
        }
    }
}
