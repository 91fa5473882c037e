// SPDX-License-Identifier: Apache-2.0

//! Run command: read a name and walk it through the intake flow.

use std::io::IsTerminal;

use anyhow::{Context, Result};
use dialoguer::Input;
use safeintake_core::validate::validate_name;
use safeintake_core::{AppConfig, NAME_PROMPT, RunOptions, read_name, run_intake};
use tracing::debug;

use super::maybe_spinner;
use super::types::RunResult;
use crate::EnvCredentialProvider;
use crate::cli::OutputContext;

/// Obtains the raw name: `--name`, then an interactive prompt, then one line of stdin.
fn obtain_name(name: Option<String>, max_len: usize) -> Result<String> {
    if let Some(name) = name {
        debug!("Using name from --name");
        return Ok(name);
    }

    if std::io::stdin().is_terminal() {
        debug!("Prompting for name");
        let name = Input::<String>::new()
            .with_prompt(NAME_PROMPT)
            .validate_with(|input: &String| {
                validate_name(input, max_len)
                    .map(|_| ())
                    .map_err(|e| e.to_string())
            })
            .interact_text()
            .context("Failed to read name from terminal")?;
        return Ok(name);
    }

    debug!("Reading name from stdin");
    Ok(read_name(std::io::stdin().lock(), max_len)?)
}

/// Run the intake flow for one name.
pub async fn run(
    name: Option<String>,
    skip_email: bool,
    ctx: &OutputContext,
    config: &AppConfig,
) -> Result<RunResult> {
    let raw_name = obtain_name(name, config.input.max_name_length)?;

    let spinner = maybe_spinner(ctx, "Submitting...");
    let outcome = run_intake(
        config,
        &EnvCredentialProvider,
        &raw_name,
        RunOptions { skip_email },
    )
    .await;
    if let Some(s) = spinner {
        s.finish_and_clear();
    }

    Ok(RunResult { report: outcome? })
}
