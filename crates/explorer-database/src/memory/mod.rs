//! In-memory folder store.

pub mod store;

pub use store::MemoryFolderStore;
