//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address in `host:port` form (overrides `HOST`/`PORT`)
//! - `HOST` - Bind host (default: `0.0.0.0`)
//! - `PORT` - Bind port (default: `3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `CORS_ALLOW_ORIGIN` - Single allowed CORS origin (default: any origin)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When set, CORS allows only this origin instead of any.
    pub cors_allow_origin: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let listen_addr = Self::load_listen_addr();
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        let cors_allow_origin = env::var("CORS_ALLOW_ORIGIN").ok();

        Self {
            listen_addr,
            log_level,
            log_format,
            cors_allow_origin,
        }
    }

    /// Loads the bind address.
    ///
    /// Priority:
    /// 1. `LISTEN` environment variable (`host:port`)
    /// 2. Constructed from `HOST` and `PORT`
    fn load_listen_addr() -> String {
        // Priority 1: Use LISTEN if provided
        if let Ok(listen) = env::var("LISTEN") {
            return listen;
        }

        // Priority 2: Build from components
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());

        format!("{}:{}", host, port)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not in `host:port` form or the port is invalid
    /// - `log_format` is not `text` or `json`
    /// - `CORS_ALLOW_ORIGIN` is set but empty
    pub fn validate(&self) -> Result<()> {
        // Validate listen address format
        let Some((host, port)) = self.listen_addr.rsplit_once(':') else {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        };

        if host.is_empty() {
            anyhow::bail!("LISTEN host must not be empty, got '{}'", self.listen_addr);
        }

        match port.parse::<u16>() {
            Ok(0) => anyhow::bail!("PORT must not be 0"),
            Ok(_) => {}
            Err(_) => anyhow::bail!("PORT must be a number between 1 and 65535, got '{}'", port),
        }

        // Validate log format
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        // Validate CORS origin (if present)
        if let Some(ref origin) = self.cors_allow_origin
            && origin.is_empty()
        {
            anyhow::bail!("CORS_ALLOW_ORIGIN must not be empty when set");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);

        match &self.cors_allow_origin {
            Some(origin) => tracing::info!("  CORS origin: {}", origin),
            None => tracing::info!("  CORS origin: any"),
        }
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
