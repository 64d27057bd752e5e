//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment
//! variables using the `config` and `dotenvy` crates. Configuration is
//! loaded with the `GOALBOARD_` prefix and nested values use double
//! underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use goalboard::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! let thresholds = config.thresholds.to_domain();
//! ```

mod error;
mod thresholds;

pub use error::{ConfigError, ValidationError};
pub use thresholds::ThresholdConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// RAG threshold bands (admin-editable per deployment)
    #[serde(default)]
    pub thresholds: ThresholdConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `GOALBOARD` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    ///
    /// # Environment Variable Format
    ///
    /// - `GOALBOARD__THRESHOLDS__GREEN_MIN=80` -> `thresholds.green_min = 80`
    /// - `GOALBOARD__THRESHOLDS__AMBER_MIN=55` -> `thresholds.amber_min = 55`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into the
    /// expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("GOALBOARD")
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
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.thresholds.validate()?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            thresholds: ThresholdConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn clear_env() {
        env::remove_var("GOALBOARD__THRESHOLDS__GREEN_MIN");
        env::remove_var("GOALBOARD__THRESHOLDS__AMBER_MIN");
    }

    #[test]
    fn test_load_with_defaults() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let config = AppConfig::load().unwrap();

        assert_eq!(config.thresholds.green_min, 76.0);
        assert_eq!(config.thresholds.amber_min, 51.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_custom_thresholds() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("GOALBOARD__THRESHOLDS__GREEN_MIN", "85");
        env::set_var("GOALBOARD__THRESHOLDS__AMBER_MIN", "60");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.thresholds.green_min, 85.0);
        assert_eq!(config.thresholds.amber_min, 60.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_inverted_bands() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("GOALBOARD__THRESHOLDS__GREEN_MIN", "50");
        env::set_var("GOALBOARD__THRESHOLDS__AMBER_MIN", "80");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert!(config.validate().is_err());
    }
}
