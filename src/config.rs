//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the
//! server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `MIN_USER_AGE` - Minimum user age in years (default: 18)

use anyhow::Result;
use std::env;

/// Default minimum age (years) required of a user at creation or update.
const DEFAULT_MIN_USER_AGE: i32 = 18;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Minimum age (whole years) a user must have reached; birth dates
    /// that yield a smaller age are rejected.
    pub min_user_age: i32,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let min_user_age = env::var("MIN_USER_AGE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MIN_USER_AGE);

        Self {
            listen_addr,
            log_level,
            log_format,
            min_user_age,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `min_user_age` is negative or implausibly large
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    pub fn validate(&self) -> Result<()> {
        if !(0..=150).contains(&self.min_user_age) {
            anyhow::bail!(
                "MIN_USER_AGE must be between 0 and 150, got {}",
                self.min_user_age
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Minimum user age: {}", self.min_user_age);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
