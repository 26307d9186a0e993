//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables using the
//! `config` and `dotenvy` crates. Variables carry the `CREATIVE_DNA` prefix
//! and nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use creative_dna::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//! ```

mod analysis;
mod database;
mod error;
mod server;

pub use analysis::{AnalysisConfig, MAX_ACTION_LIMIT};
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Server configuration (bind address, environment, logging)
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration (PostgreSQL pool)
    pub database: DatabaseConfig,

    /// Analysis tuning
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Reads `.env` when present, then `CREATIVE_DNA__*` variables:
    ///
    /// - `CREATIVE_DNA__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `CREATIVE_DNA__DATABASE__URL=...` -> `database.url = ...`
    /// - `CREATIVE_DNA__ANALYSIS__ACTION_LIMIT=500` -> `analysis.action_limit = 500`
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CREATIVE_DNA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration sections
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.analysis.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
