//! File entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use explorer_core::types::{FileId, FolderId};

/// Size units used by [`File::formatted_size`], smallest first.
const SIZE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

/// A file in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
    /// Unique file identifier.
    pub id: FileId,
    /// Base name without extension.
    pub name: String,
    /// Extension without the leading dot.
    pub extension: String,
    /// File size in bytes.
    pub size: u64,
    /// The folder containing this file.
    pub folder_id: FolderId,
    /// When the file was created.
    pub created_at: DateTime<Utc>,
    /// When the file was last updated.
    pub updated_at: DateTime<Utc>,
}

impl File {
    /// Construct a file record.
    pub fn new(
        id: impl Into<FileId>,
        name: impl Into<String>,
        extension: impl Into<String>,
        size: u64,
        folder_id: impl Into<FolderId>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            extension: extension.into(),
            size,
            folder_id: folder_id.into(),
            created_at,
            updated_at,
        }
    }

    /// Display name, `{name}.{extension}`.
    pub fn full_name(&self) -> String {
        format!("{}.{}", self.name, self.extension)
    }

    /// Human-readable size in binary units, e.g. `1.50 MB`.
    pub fn formatted_size(&self) -> String {
        let mut size = self.size as f64;
        let mut unit = 0;

        while size >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
            size /= 1024.0;
            unit += 1;
        }

        format!("{size:.2} {}", SIZE_UNITS[unit])
    }
}

/// Data required to create a new file record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFile {
    /// The folder to place the file in.
    pub folder_id: FolderId,
    /// Base name.
    pub name: String,
    /// Extension without the dot.
    pub extension: String,
    /// File size in bytes.
    pub size: u64,
}
