//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use explorer_core::config::AppConfig;
use explorer_database::store::FolderStore;
use explorer_service::FolderService;

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Folder query service.
    pub folder_service: Arc<FolderService>,
    /// Backing store, used directly by the health check.
    pub store: Arc<dyn FolderStore>,
}

impl AppState {
    /// Wires the service layer over `store`.
    pub fn new(config: AppConfig, store: Arc<dyn FolderStore>) -> Self {
        Self {
            config: Arc::new(config),
            folder_service: Arc::new(FolderService::new(Arc::clone(&store))),
            store,
        }
    }
}
