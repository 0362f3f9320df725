//! Raw table rows and their validated conversion into domain entities.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use explorer_core::error::AppError;
use explorer_core::types::{FileId, FolderId};
use explorer_entity::{File, Folder};

/// A row of the `folders` table.
#[derive(Debug, Clone, FromRow)]
pub struct FolderRow {
    /// Primary key.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Materialized path.
    pub path: String,
    /// Parent folder, if any.
    pub parent_id: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

/// A row of the `files` table.
#[derive(Debug, Clone, FromRow)]
pub struct FileRow {
    /// Primary key.
    pub id: String,
    /// Base name.
    pub name: String,
    /// Extension without the dot.
    pub extension: String,
    /// Size in bytes as stored (`BIGINT`).
    pub size: i64,
    /// Owning folder.
    pub folder_id: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TryFrom<FolderRow> for Folder {
    type Error = AppError;

    fn try_from(row: FolderRow) -> Result<Self, Self::Error> {
        if row.id.is_empty() {
            return Err(AppError::database("Malformed folder row: empty id"));
        }

        // An empty parent reference is stored garbage, not a real parent.
        let parent_id = row
            .parent_id
            .filter(|p| !p.is_empty())
            .map(FolderId::from);

        Ok(Folder::new(
            FolderId::from(row.id),
            row.name,
            row.path,
            parent_id,
            row.created_at,
            row.updated_at,
        ))
    }
}

impl TryFrom<FileRow> for File {
    type Error = AppError;

    fn try_from(row: FileRow) -> Result<Self, Self::Error> {
        if row.id.is_empty() {
            return Err(AppError::database("Malformed file row: empty id"));
        }
        if row.folder_id.is_empty() {
            return Err(AppError::database(format!(
                "Malformed file row {}: missing folder_id",
                row.id
            )));
        }
        let size = u64::try_from(row.size).map_err(|_| {
            AppError::database(format!(
                "Malformed file row {}: negative size {}",
                row.id, row.size
            ))
        })?;

        Ok(File::new(
            FileId::from(row.id),
            row.name,
            row.extension,
            size,
            FolderId::from(row.folder_id),
            row.created_at,
            row.updated_at,
        ))
    }
}

/// Convert a batch of folder rows, failing on the first malformed one.
pub fn folders_from_rows(rows: Vec<FolderRow>) -> Result<Vec<Folder>, AppError> {
    rows.into_iter().map(Folder::try_from).collect()
}

/// Convert a batch of file rows, failing on the first malformed one.
pub fn files_from_rows(rows: Vec<FileRow>) -> Result<Vec<File>, AppError> {
    rows.into_iter().map(File::try_from).collect()
}
