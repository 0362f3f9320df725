//! One-level contents view of a folder.

use serde::{Deserialize, Serialize};

use crate::file::File;
use crate::folder::Folder;

/// A folder together with its immediate subfolders and files.
///
/// Only one level deep: the subfolders carry no children of their own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FolderContents {
    /// The requested folder.
    pub folder: Folder,
    /// Direct child folders, name-ordered.
    pub subfolders: Vec<Folder>,
    /// Files directly inside the folder, name-ordered.
    pub files: Vec<File>,
}

impl FolderContents {
    /// Total number of direct entries (folders and files).
    pub fn entry_count(&self) -> usize {
        self.subfolders.len() + self.files.len()
    }
}
