//! File repository implementation.

use sqlx::PgPool;

use explorer_core::error::{AppError, ErrorKind};
use explorer_core::result::AppResult;
use explorer_core::types::{FileId, FolderId};
use explorer_entity::{CreateFile, File};

use super::like_pattern;
use super::rows::{FileRow, files_from_rows};

pub(crate) const FILES_IN_FOLDER_SQL: &str =
    "SELECT id, name, extension, size, folder_id, created_at, updated_at \
     FROM files WHERE folder_id = $1 ORDER BY name COLLATE \"C\" ASC, id ASC";

const SEARCH_FILES_SQL: &str = "SELECT id, name, extension, size, folder_id, created_at, updated_at \
     FROM files WHERE name ILIKE $1 ESCAPE '\\' ORDER BY name COLLATE \"C\" ASC, id ASC";

const INSERT_FILE_SQL: &str = "INSERT INTO files (id, name, extension, size, folder_id) \
     VALUES ($1, $2, $3, $4, $5) \
     RETURNING id, name, extension, size, folder_id, created_at, updated_at";

/// Repository for file lookups.
#[derive(Debug, Clone)]
pub struct FileRepository {
    pool: PgPool,
}

impl FileRepository {
    /// Create a new file repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List files directly inside a folder, name-ordered.
    pub async fn find_by_folder(&self, folder_id: &FolderId) -> AppResult<Vec<File>> {
        let rows = sqlx::query_as::<_, FileRow>(FILES_IN_FOLDER_SQL)
            .bind(folder_id.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list files", e))?;
        files_from_rows(rows)
    }

    /// Files whose base name contains the query, ignoring case.
    pub async fn search(&self, query: &str) -> AppResult<Vec<File>> {
        let rows = sqlx::query_as::<_, FileRow>(SEARCH_FILES_SQL)
            .bind(like_pattern(query))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search files", e))?;
        files_from_rows(rows)
    }

    /// Create a new file record.
    pub async fn create(&self, data: &CreateFile) -> AppResult<File> {
        let size = i64::try_from(data.size)
            .map_err(|_| AppError::validation(format!("File size {} is too large", data.size)))?;

        let id = FileId::generate();
        let row = sqlx::query_as::<_, FileRow>(INSERT_FILE_SQL)
            .bind(id.as_str())
            .bind(&data.name)
            .bind(&data.extension)
            .bind(size)
            .bind(data.folder_id.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err)
                    if db_err.constraint() == Some("files_folder_id_fkey") =>
                {
                    AppError::not_found(format!("Folder {} does not exist", data.folder_id))
                }
                _ => AppError::with_source(ErrorKind::Database, "Failed to create file", e),
            })?;

        File::try_from(row)
    }
}
