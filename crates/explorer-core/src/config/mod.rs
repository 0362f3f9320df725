//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod app;
pub mod database;
pub mod logging;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use self::app::{CorsConfig, ServerConfig};
pub use self::database::{DatabaseConfig, StoreProvider};
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Prefix for environment variable overrides (`EXPLORER__SERVER__PORT=9000`).
const ENV_PREFIX: &str = "EXPLORER";

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Folder store settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration for the named environment.
    ///
    /// Merges `config/default.toml` with the `config/{env}.toml` overlay
    /// and environment variables prefixed with `EXPLORER__`.
    pub fn load(env: &str) -> Result<Self, AppError> {
        debug!(env, "Loading configuration");
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(env_source())
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Load configuration from an explicit file, still honouring
    /// environment variable overrides.
    pub fn load_from(path: &str) -> Result<Self, AppError> {
        debug!(path, "Loading configuration file");
        let config = config::Config::builder()
            .add_source(config::File::with_name(path).required(true))
            .add_source(env_source())
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }
}

fn env_source() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_memory_store() {
        let config = AppConfig::default();
        assert_eq!(config.database.provider, StoreProvider::Memory);
        assert_eq!(config.server.port, 3001);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let raw = r#"
            [server]
            port = 9000

            [database]
            provider = "postgres"
            url = "postgres://localhost/explorer"
        "#;

        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(raw, config::FileFormat::Toml))
            .build()
            .and_then(|c| c.try_deserialize())
            .expect("config should parse");

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.database.provider, StoreProvider::Postgres);
        assert_eq!(config.database.max_connections, 20);
        assert_eq!(config.logging.format, "pretty");
    }
}
