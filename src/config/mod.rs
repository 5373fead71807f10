//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `ARCHITECTIQ` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use architectiq::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Server running on {:?}", config.server.bind_addr());
//! ```

mod engine;
mod error;
mod remote;
mod server;

pub use engine::EngineConfig;
pub use error::{ConfigError, ValidationError};
pub use remote::RemoteConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a runnable
/// server computing locally on `0.0.0.0:8080`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration (bind address, logging, CORS, timeouts)
    #[serde(default)]
    pub server: ServerConfig,

    /// Scoring engine options
    #[serde(default)]
    pub engine: EngineConfig,

    /// Optional remote calculator
    #[serde(default)]
    pub remote: RemoteConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `ARCHITECTIQ` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `ARCHITECTIQ__SERVER__PORT=8080` -> `server.port = 8080`
    /// - `ARCHITECTIQ__ENGINE__CONTEXT_NORMALIZATION=true` -> `engine.context_normalization = true`
    /// - `ARCHITECTIQ__REMOTE__BASE_URL=...` -> `remote.base_url = ...`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("ARCHITECTIQ")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for an unusable bind address, out-of-range
    /// timeouts or a remote URL without an HTTP scheme.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.remote.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
