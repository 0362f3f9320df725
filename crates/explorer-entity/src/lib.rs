//! # explorer-entity
//!
//! Domain entity models for Folder Explorer. Folders and files are
//! read-only value records produced by a store; the remaining types are
//! transient views composed from them per request.

pub mod file;
pub mod folder;
pub mod search;

pub use file::{CreateFile, File};
pub use folder::{CreateFolder, Folder, FolderContents};
pub use search::SearchResults;
