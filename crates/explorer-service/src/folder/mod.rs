//! Folder queries and hierarchy assembly.

pub mod service;
pub mod tree;

pub use service::FolderService;
pub use tree::{build_hierarchy, count_nodes, max_depth};
