// SPDX-License-Identifier: Apache-2.0

//! Configuration management for safeintake.
//!
//! Provides layered configuration from files and environment variables.
//! Uses XDG-compliant paths with environment variable support.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Environment variables (prefix: `SAFEINTAKE_`)
//! 2. Config file: `~/.config/safeintake/config.toml` (or `--config <path>`)
//! 3. Built-in defaults
//!
//! Credentials are never read from here. See [`crate::auth`].
//!
//! # Examples
//!
//! ```bash
//! # Point the fetch step at another endpoint
//! SAFEINTAKE_API__URL=https://api.example.com/v1/data safeintake run
//! ```

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::error::IntakeError;
use crate::validate::DEFAULT_MAX_NAME_LENGTH;

/// Application configuration.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    /// Remote API settings.
    pub api: ApiConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Mail settings.
    pub email: EmailConfig,
    /// Name input settings.
    pub input: InputConfig,
}

impl AppConfig {
    /// Returns a copy safe to display, with any password embedded in a URL
    /// replaced by `****`.
    ///
    /// Such URLs are refused at run time, but `config show` must not echo
    /// the secret while reporting them.
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        copy.api.url = mask_url_password(&self.api.url);
        copy.database.url = mask_url_password(&self.database.url);
        copy
    }
}

fn mask_url_password(raw: &str) -> String {
    match url::Url::parse(raw) {
        Ok(mut url) if url.password().is_some() => {
            if url.set_password(Some("****")).is_ok() {
                url.to_string()
            } else {
                raw.to_string()
            }
        }
        _ => raw.to_string(),
    }
}

/// Remote API settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Endpoint to fetch data from. Must be https.
    pub url: String,
    /// Request timeout in seconds.
    pub timeout_seconds: u64,
    /// Maximum accepted response body size in bytes.
    pub max_response_bytes: usize,
    /// Accept plain http for localhost/127.0.0.1/::1 (local testing only).
    pub allow_loopback_http: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: "https://insecure-api.com/get-data".to_string(),
            timeout_seconds: 10,
            max_response_bytes: 1024 * 1024,
            allow_loopback_http: false,
        }
    }
}

/// Database settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Connection URL without a password, e.g. `mysql://app@localhost:3306/app`.
    pub url: String,
    /// Table that receives fetched data.
    pub table: String,
    /// Connection timeout in seconds.
    pub connect_timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "mysql://app@localhost:3306/app".to_string(),
            table: "mytable".to_string(),
            connect_timeout_seconds: 5,
        }
    }
}

/// Mail settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EmailConfig {
    /// Mail program, either a bare name resolved via `PATH` or an absolute path.
    pub program: String,
    /// Recipient address.
    pub recipient: String,
    /// Subject line.
    pub subject: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            program: "mail".to_string(),
            recipient: "admin@example.com".to_string(),
            subject: "User Input".to_string(),
        }
    }
}

/// Name input settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct InputConfig {
    /// Maximum accepted name length in characters.
    pub max_name_length: usize,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_name_length: DEFAULT_MAX_NAME_LENGTH,
        }
    }
}

/// Returns the safeintake configuration directory.
///
/// Respects the `XDG_CONFIG_HOME` environment variable if set,
/// otherwise defaults to `~/.config/safeintake`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return PathBuf::from(xdg_config).join("safeintake");
    }
    dirs::home_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(".config")
        .join("safeintake")
}

/// Returns the path to the configuration file.
#[must_use]
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load application configuration from the default location.
///
/// # Errors
///
/// Returns `IntakeError::Config` if the config file exists but is invalid.
pub fn load_config() -> Result<AppConfig, IntakeError> {
    load_config_from(&config_file_path(), false)
}

/// Load application configuration from `path`.
///
/// When `required` is false a missing file falls back to defaults.
/// Environment variables use the prefix `SAFEINTAKE_` and double underscore
/// for nested keys (e.g., `SAFEINTAKE_DATABASE__TABLE`).
pub fn load_config_from(path: &Path, required: bool) -> Result<AppConfig, IntakeError> {
    let config = Config::builder()
        .add_source(File::new(&path.to_string_lossy(), FileFormat::Toml).required(required))
        .add_source(
            Environment::with_prefix("SAFEINTAKE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    Ok(app_config)
}
