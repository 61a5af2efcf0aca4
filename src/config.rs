//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is honored if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default prompt shown before each command.
pub const DEFAULT_PROMPT: &str = "Enter a command: ";

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration for an interactive session.
#[derive(Debug, Clone)]
pub struct Config {
    /// Prompt printed before reading each command
    pub prompt: String,

    /// Log level used when `RUST_LOG` is unset (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PROMPT`: Prompt text (default: "Enter a command: ")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let prompt =
            env::var("CONTACT_BOOK_PROMPT").unwrap_or_else(|_| DEFAULT_PROMPT.to_string());
        let log_level = Self::parse_log_level("LOG_LEVEL", "error")?;

        Ok(Config { prompt, log_level })
    }

    /// Read a log level variable, falling back to `default` when unset.
    fn parse_log_level(var_name: &str, default: &str) -> ConfigResult<String> {
        match env::var(var_name) {
            Ok(val) => {
                let level = val.trim().to_lowercase();
                if LOG_LEVELS.contains(&level.as_str()) {
                    Ok(level)
                } else {
                    Err(ConfigError::InvalidValue {
                        var: var_name.to_string(),
                        reason: format!(
                            "Must be one of {}, got: {}",
                            LOG_LEVELS.join("|"),
                            val
                        ),
                    })
                }
            }
            Err(env::VarError::NotPresent) => Ok(default.to_string()),
            Err(env::VarError::NotUnicode(_)) => Err(ConfigError::Other(format!(
                "{} is not valid unicode",
                var_name
            ))),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            prompt: DEFAULT_PROMPT.to_string(),
            log_level: "error".to_string(),
        }
    }
}
