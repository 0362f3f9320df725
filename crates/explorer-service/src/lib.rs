//! # explorer-service
//!
//! Query layer for Folder Explorer. [`FolderService`] turns store reads
//! into domain results, and [`build_hierarchy`] reshapes a flat folder
//! list into an ordered forest.
//!
//! Services follow constructor injection: the store is provided at
//! construction time as an `Arc<dyn FolderStore>`.

pub mod folder;

pub use folder::{FolderService, build_hierarchy, count_nodes, max_depth};
