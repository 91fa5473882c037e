// SPDX-License-Identifier: Apache-2.0

//! Credential management commands backed by the system keyring.

use anyhow::{Context, Result};
use console::style;
use dialoguer::Password;
use safeintake_core::auth::{self, CredentialKind};
use safeintake_core::require_credential;
use secrecy::SecretString;
use tracing::info;

use super::types::{AuthStatusResult, CredentialStatus};
use crate::EnvCredentialProvider;
use crate::cli::credential_arg_name;

/// Run the status command - show where each credential resolves from.
///
/// Values are checked but never printed.
pub fn run_status() -> AuthStatusResult {
    let credentials = CredentialKind::ALL
        .into_iter()
        .map(|kind| match EnvCredentialProvider::resolve(kind) {
            Some((secret, source)) => {
                let problem = require_credential(kind, Some(secret))
                    .err()
                    .map(|e| e.to_string());
                CredentialStatus {
                    kind,
                    source: Some(source),
                    acceptable: problem.is_none(),
                    problem,
                }
            }
            None => CredentialStatus {
                kind,
                source: None,
                acceptable: false,
                problem: None,
            },
        })
        .collect();

    AuthStatusResult { credentials }
}

/// Run the login command - prompt for a credential and store it.
pub fn run_login(kind: CredentialKind) -> Result<()> {
    if auth::credential_from_env(kind).is_some() {
        println!(
            "{} {} is set and takes precedence over the keyring.",
            style("!").yellow().bold(),
            kind.env_var()
        );
    }

    let value = Password::new()
        .with_prompt(format!("Enter {kind}"))
        .with_confirmation("Confirm", "Values do not match")
        .interact()
        .context("Failed to read credential from terminal")?;

    auth::store_credential(kind, SecretString::from(value))?;

    info!(%kind, "Stored credential");
    println!(
        "{} Stored {kind} in the system keyring.",
        style("*").green().bold()
    );
    Ok(())
}

/// Run the logout command - remove a stored credential.
pub fn run_logout(kind: CredentialKind) -> Result<()> {
    if auth::stored_credential(kind).is_none() {
        println!(
            "{} No {kind} stored in keyring.",
            style("!").yellow().bold()
        );
        return Ok(());
    }

    auth::delete_credential(kind)?;

    info!(%kind, "Removed credential");
    println!(
        "{} Removed {kind} from the keyring. Run {} to store a new one.",
        style("*").green().bold(),
        style(format!("safeintake auth login {}", credential_arg_name(kind))).cyan()
    );
    Ok(())
}
