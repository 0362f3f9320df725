//! Folder repository implementation.

use sqlx::PgPool;

use explorer_core::error::{AppError, ErrorKind};
use explorer_core::result::AppResult;
use explorer_core::types::FolderId;
use explorer_entity::{CreateFolder, Folder, FolderContents};

use super::file::FILES_IN_FOLDER_SQL;
use super::like_pattern;
use super::rows::{FileRow, FolderRow, files_from_rows, folders_from_rows};

const ALL_FOLDERS_SQL: &str = "SELECT id, name, path, parent_id, created_at, updated_at \
     FROM folders ORDER BY name COLLATE \"C\" ASC, id ASC";

const FOLDER_BY_ID_SQL: &str =
    "SELECT id, name, path, parent_id, created_at, updated_at FROM folders WHERE id = $1";

const CHILD_FOLDERS_SQL: &str = "SELECT id, name, path, parent_id, created_at, updated_at \
     FROM folders WHERE parent_id = $1 ORDER BY name COLLATE \"C\" ASC, id ASC";

const SEARCH_FOLDERS_SQL: &str = "SELECT id, name, path, parent_id, created_at, updated_at \
     FROM folders WHERE name ILIKE $1 ESCAPE '\\' ORDER BY name COLLATE \"C\" ASC, id ASC";

const INSERT_FOLDER_SQL: &str = "INSERT INTO folders (id, name, path, parent_id) \
     VALUES ($1, $2, $3, $4) \
     RETURNING id, name, path, parent_id, created_at, updated_at";

/// Repository for folder lookups and tree queries.
#[derive(Debug, Clone)]
pub struct FolderRepository {
    pool: PgPool,
}

impl FolderRepository {
    /// Create a new folder repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every folder, name-ordered.
    pub async fn find_all(&self) -> AppResult<Vec<Folder>> {
        let rows = sqlx::query_as::<_, FolderRow>(ALL_FOLDERS_SQL)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list folders", e))?;
        folders_from_rows(rows)
    }

    /// Find a folder by ID.
    pub async fn find_by_id(&self, id: &FolderId) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, FolderRow>(FOLDER_BY_ID_SQL)
            .bind(id.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find folder", e))?
            .map(Folder::try_from)
            .transpose()
    }

    /// List direct children of a folder.
    pub async fn find_children(&self, parent_id: &FolderId) -> AppResult<Vec<Folder>> {
        let rows = sqlx::query_as::<_, FolderRow>(CHILD_FOLDERS_SQL)
            .bind(parent_id.as_str())
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list children", e))?;
        folders_from_rows(rows)
    }

    /// Read a folder, its children, and its files inside one read-only
    /// snapshot so the three parts agree with each other.
    pub async fn find_with_contents(&self, id: &FolderId) -> AppResult<Option<FolderContents>> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY")
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to configure transaction", e)
            })?;

        let Some(row) = sqlx::query_as::<_, FolderRow>(FOLDER_BY_ID_SQL)
            .bind(id.as_str())
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find folder", e))?
        else {
            return Ok(None);
        };

        let subfolder_rows = sqlx::query_as::<_, FolderRow>(CHILD_FOLDERS_SQL)
            .bind(id.as_str())
            .fetch_all(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list children", e))?;

        let file_rows = sqlx::query_as::<_, FileRow>(FILES_IN_FOLDER_SQL)
            .bind(id.as_str())
            .fetch_all(&mut *tx)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list files", e))?;

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;

        Ok(Some(FolderContents {
            folder: Folder::try_from(row)?,
            subfolders: folders_from_rows(subfolder_rows)?,
            files: files_from_rows(file_rows)?,
        }))
    }

    /// Folders whose name contains the query, ignoring case.
    pub async fn search(&self, query: &str) -> AppResult<Vec<Folder>> {
        let rows = sqlx::query_as::<_, FolderRow>(SEARCH_FOLDERS_SQL)
            .bind(like_pattern(query))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to search folders", e)
            })?;
        folders_from_rows(rows)
    }

    /// Create a new folder.
    pub async fn create(&self, data: &CreateFolder) -> AppResult<Folder> {
        let id = FolderId::generate();
        let row = sqlx::query_as::<_, FolderRow>(INSERT_FOLDER_SQL)
            .bind(id.as_str())
            .bind(&data.name)
            .bind(&data.path)
            .bind(data.parent_id.as_ref().map(FolderId::as_str))
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(ref db_err)
                    if db_err.constraint() == Some("folders_parent_id_fkey") =>
                {
                    AppError::not_found(format!(
                        "Parent folder for '{}' does not exist",
                        data.path
                    ))
                }
                _ => AppError::with_source(ErrorKind::Database, "Failed to create folder", e),
            })?;

        Folder::try_from(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn returned_columns(sql: &str) -> &str {
        sql.rsplit_once("RETURNING ").map_or("", |(_, cols)| cols)
    }

    #[test]
    fn test_insert_returns_the_selected_columns() {
        let selected = FOLDER_BY_ID_SQL
            .strip_prefix("SELECT ")
            .and_then(|s| s.split_once(" FROM"))
            .map(|(cols, _)| cols)
            .unwrap();
        assert_eq!(returned_columns(INSERT_FOLDER_SQL), selected);
    }

    #[test]
    fn test_insert_binds_every_column_it_names() {
        assert!(INSERT_FOLDER_SQL.contains("(id, name, path, parent_id)"));
        assert!(INSERT_FOLDER_SQL.contains("VALUES ($1, $2, $3, $4)"));
    }
}
