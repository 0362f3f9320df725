//! Store manager that dispatches to the configured backend.

use std::sync::Arc;

use tracing::info;

use explorer_core::config::{DatabaseConfig, StoreProvider};
use explorer_core::result::AppResult;

use crate::memory::MemoryFolderStore;
use crate::postgres::PgFolderStore;
use crate::store::{FolderSeeder, FolderStore};

/// Owns the configured folder store.
///
/// The backend is selected at construction time based on configuration.
#[derive(Debug, Clone)]
pub struct StoreManager {
    store: Arc<dyn FolderStore>,
    seeder: Arc<dyn FolderSeeder>,
    postgres: Option<PgFolderStore>,
}

impl StoreManager {
    /// Build the store named by configuration. For PostgreSQL this
    /// connects the pool and, when `auto_migrate` is set, applies pending
    /// migrations.
    pub async fn new(config: &DatabaseConfig) -> AppResult<Self> {
        match config.provider {
            StoreProvider::Postgres => {
                info!("Initializing PostgreSQL folder store");
                let store = PgFolderStore::connect(config).await?;
                if config.auto_migrate {
                    store.migrate().await?;
                }
                Ok(Self::from_postgres(store))
            }
            StoreProvider::Memory => {
                info!("Initializing in-memory folder store");
                Ok(Self::from_memory(MemoryFolderStore::new()))
            }
        }
    }

    /// Wrap an existing in-memory store.
    pub fn from_memory(store: MemoryFolderStore) -> Self {
        let store = Arc::new(store);
        Self {
            store: Arc::clone(&store) as Arc<dyn FolderStore>,
            seeder: store,
            postgres: None,
        }
    }

    /// Wrap an existing PostgreSQL store.
    pub fn from_postgres(store: PgFolderStore) -> Self {
        let postgres = Some(store.clone());
        let store = Arc::new(store);
        Self {
            store: Arc::clone(&store) as Arc<dyn FolderStore>,
            seeder: store,
            postgres,
        }
    }

    /// The read contract, shareable across services.
    pub fn store(&self) -> Arc<dyn FolderStore> {
        Arc::clone(&self.store)
    }

    /// The seeding surface of the same backend.
    pub fn seeder(&self) -> &dyn FolderSeeder {
        self.seeder.as_ref()
    }

    /// The PostgreSQL store, when that backend is active.
    pub fn postgres(&self) -> Option<&PgFolderStore> {
        self.postgres.as_ref()
    }

    /// Release backend resources.
    pub async fn close(&self) {
        if let Some(store) = &self.postgres {
            store.close().await;
        }
    }
}
