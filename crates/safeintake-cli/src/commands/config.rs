// SPDX-License-Identifier: Apache-2.0

//! Configuration inspection commands.

use std::path::Path;

use anyhow::{Context, Result};
use safeintake_core::{AppConfig, config_file_path};

use super::types::ConfigPathResult;
use crate::cli::{OutputContext, OutputFormat};

/// Run the path command - report which config file is used.
pub fn run_path(config_path: Option<&Path>) -> ConfigPathResult {
    let path = config_path.map_or_else(config_file_path, Path::to_path_buf);
    ConfigPathResult {
        exists: path.is_file(),
        path: path.display().to_string(),
    }
}

/// Run the show command - print the effective configuration.
///
/// Passwords embedded in URLs are masked before printing.
pub fn run_show(config: &AppConfig, ctx: &OutputContext) -> Result<()> {
    let shown = config.redacted();
    let rendered = match ctx.format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&shown).context("Failed to serialize to JSON")?
        }
        OutputFormat::Text => {
            toml::to_string_pretty(&shown).context("Failed to serialize to TOML")?
        }
    };
    println!("{}", rendered.trim_end());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_path_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let result = run_path(Some(&path));

        assert!(!result.exists);
        assert!(result.path.ends_with("absent.toml"));
    }

    #[test]
    fn test_default_config_serializes_to_toml() {
        let rendered = toml::to_string_pretty(&AppConfig::default()).unwrap();

        assert!(rendered.contains("[api]"));
        assert!(rendered.contains("[database]"));
        assert!(rendered.contains("recipient = \"admin@example.com\""));
    }
}
