//! Populate the configured store with the demo catalog.

use explorer_core::config::StoreProvider;
use explorer_core::error::AppError;
use explorer_database::StoreManager;
use explorer_database::seed::seed_demo_catalog;

use crate::output::{self, OutputFormat};

/// Execute the seed command
pub async fn execute(config_path: &str, format: OutputFormat) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;

    if config.database.provider == StoreProvider::Memory {
        output::print_warning("The in-memory store is discarded when this command exits.");
    }

    let stores = StoreManager::new(&config.database).await?;
    let summary = seed_demo_catalog(stores.seeder()).await?;
    stores.close().await;

    match format {
        OutputFormat::Json => output::print_json(&summary),
        OutputFormat::Table => {
            output::print_success("Demo catalog inserted.");
            output::print_kv("Folders", &summary.folders.to_string());
            output::print_kv("Files", &summary.files.to_string());
        }
    }

    Ok(())
}
