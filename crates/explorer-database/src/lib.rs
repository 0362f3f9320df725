//! # explorer-database
//!
//! The folder store contract ([`FolderStore`]) and its implementations:
//! PostgreSQL repositories over a sqlx pool, and an in-memory store used
//! for development and tests. [`StoreManager`] picks one from
//! configuration.

pub mod memory;
pub mod postgres;
pub mod provider;
pub mod repositories;
pub mod seed;
pub mod store;

pub use memory::MemoryFolderStore;
pub use postgres::PgFolderStore;
pub use provider::StoreManager;
pub use store::{FolderSeeder, FolderStore};
