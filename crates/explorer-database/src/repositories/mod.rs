//! PostgreSQL repository implementations for catalog tables.

pub mod file;
pub mod folder;
pub mod rows;

pub use file::FileRepository;
pub use folder::FolderRepository;
pub use rows::{FileRow, FolderRow};

/// Escape `LIKE` wildcards so the query matches literally, then wrap it
/// for a substring match.
pub(crate) fn like_pattern(query: &str) -> String {
    let mut escaped = String::with_capacity(query.len() + 2);
    escaped.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}
