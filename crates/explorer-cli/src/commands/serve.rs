//! Start the Folder Explorer server.

use clap::Args;

use explorer_core::error::AppError;
use explorer_database::StoreManager;

use crate::output;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, config_path: &str) -> Result<(), AppError> {
    let mut config = super::load_config(config_path)?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }

    println!("Starting Folder Explorer server...");
    output::print_kv("Host", &config.server.host);
    output::print_kv("Port", &config.server.port.to_string());
    output::print_kv("Store", &config.database.provider.to_string());

    let stores = StoreManager::new(&config.database).await?;
    let result = explorer_api::run_server(config, stores.store()).await;
    stores.close().await;

    result
}
