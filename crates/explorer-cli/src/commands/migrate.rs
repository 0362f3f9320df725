//! Database migration management commands.

use clap::{Args, Subcommand};

use explorer_core::config::StoreProvider;
use explorer_core::error::AppError;
use explorer_database::PgFolderStore;

use crate::output;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, config_path: &str) -> Result<(), AppError> {
    let config = super::load_config(config_path)?;

    if config.database.provider != StoreProvider::Postgres {
        return Err(AppError::configuration(
            "Migrations require database.provider = \"postgres\"",
        ));
    }

    let store = PgFolderStore::connect(&config.database).await?;

    match &args.command {
        MigrateCommand::Run => {
            println!("Running database migrations...");
            store.migrate().await?;
            output::print_success("All migrations applied successfully.");
        }
    }

    store.close().await;
    Ok(())
}
