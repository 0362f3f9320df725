//! CLI command definitions and dispatch.

pub mod folder;
pub mod migrate;
pub mod seed;
pub mod serve;

use clap::{Parser, Subcommand};

use explorer_core::config::{AppConfig, StoreProvider};
use explorer_core::error::AppError;
use explorer_database::StoreManager;
use explorer_database::seed::seed_demo_catalog;

use crate::output::{self, OutputFormat};

/// Folder Explorer: browse a hierarchical folder and file catalog
#[derive(Debug, Parser)]
#[command(name = "explorer", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Insert the demo catalog
    Seed,
    /// Print the folder hierarchy
    Tree,
    /// Show one folder's subfolders and files
    Contents(folder::ContentsArgs),
    /// Search folder and file names
    Search(folder::SearchArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Migrate(args) => migrate::execute(args, &self.config).await,
            Commands::Seed => seed::execute(&self.config, self.format).await,
            Commands::Tree => folder::tree(&self.config, self.format).await,
            Commands::Contents(args) => folder::contents(args, &self.config, self.format).await,
            Commands::Search(args) => folder::search(args, &self.config, self.format).await,
        }
    }
}

/// Helper: load configuration from file
pub fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load_from(config_path)
}

/// Helper: open the configured store for read commands.
///
/// The in-memory store starts empty in every process, so it is filled with
/// the demo catalog first.
pub async fn open_store(config: &AppConfig) -> Result<StoreManager, AppError> {
    let stores = StoreManager::new(&config.database).await?;

    if config.database.provider == StoreProvider::Memory {
        output::print_warning("Using the in-memory store with the demo catalog.");
        seed_demo_catalog(stores.seeder()).await?;
    }

    Ok(stores)
}
