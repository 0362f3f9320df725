//! Folder Explorer server.
//!
//! Main entry point that wires all crates together and starts the server.

use tracing_subscriber::{EnvFilter, fmt};

use explorer_core::config::AppConfig;
use explorer_core::result::AppResult;
use explorer_database::StoreManager;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from `EXPLORER_CONFIG`, or from `config/` for the
/// environment named by `EXPLORER_ENV`.
fn load_configuration() -> AppResult<AppConfig> {
    match std::env::var("EXPLORER_CONFIG") {
        Ok(path) => AppConfig::load_from(&path),
        Err(_) => {
            let env = std::env::var("EXPLORER_ENV").unwrap_or_else(|_| "development".to_string());
            AppConfig::load(&env)
        }
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> AppResult<()> {
    tracing::info!("Starting Folder Explorer v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(provider = %config.database.provider, "Initializing folder store");

    let stores = StoreManager::new(&config.database).await?;
    let result = explorer_api::run_server(config, stores.store()).await;
    stores.close().await;

    result
}
