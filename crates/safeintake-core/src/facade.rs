// SPDX-License-Identifier: Apache-2.0

//! Platform-agnostic entry points for the intake flow.
//!
//! The CLI (or any other front end) supplies a `CredentialProvider` and the
//! raw name; these functions handle validation, client construction and the
//! sequencing of the four boundary steps.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{info, instrument};

use crate::Result;
use crate::api::ApiClient;
use crate::auth::{CredentialKind, CredentialProvider, require_credential};
use crate::config::AppConfig;
use crate::mail::Mailer;
use crate::store::{self, RecordStore};
use crate::validate::{validate_api_url, validate_name};

/// Options for a single run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Skip the mail step.
    pub skip_email: bool,
}

/// Outcome of a completed run.
#[derive(Debug, Clone, Serialize)]
pub struct IntakeReport {
    /// Validated name.
    pub name: String,
    /// Bytes fetched from the API.
    pub bytes_fetched: usize,
    /// Rows inserted into the database.
    pub rows_inserted: u64,
    /// Recipient the name was mailed to, if the mail step ran.
    pub email_recipient: Option<String>,
    /// When the run finished.
    pub completed_at: DateTime<Utc>,
    /// Total run time in milliseconds.
    pub duration_ms: u64,
}

/// Collects a name's data and hands it to the API, database and mail program.
///
/// Steps run strictly in order: validate → fetch → save → mail. All local
/// settings (name, table, URLs, credentials, mail arguments) are checked
/// before the first network call, so a bad setting never leaves a partial run
/// behind.
///
/// # Errors
///
/// Returns the first failing step's error. Nothing is retried.
#[instrument(skip(config, provider, raw_name), fields(skip_email = options.skip_email))]
pub async fn run_intake(
    config: &AppConfig,
    provider: &dyn CredentialProvider,
    raw_name: &str,
    options: RunOptions,
) -> Result<IntakeReport> {
    let started = Instant::now();

    let name = validate_name(raw_name, config.input.max_name_length)?;
    let mailer = if options.skip_email {
        None
    } else {
        Some(Mailer::new(&config.email)?)
    };
    store::check_config(&config.database, provider.database_password())?;
    let token = require_credential(CredentialKind::ApiToken, provider.api_token())?;
    let client = ApiClient::new(&config.api, token)?;
    info!("Input and settings validated");

    let data = client.fetch().await?;
    info!(bytes = data.bytes, "Fetched data");

    let record_store = RecordStore::connect(&config.database, provider.database_password()).await?;
    let saved = record_store.save(&data.body).await;
    record_store.close().await;
    let rows_inserted = saved?;

    let email_recipient = match &mailer {
        Some(mailer) => {
            mailer.send(&name).await?;
            Some(mailer.recipient().to_string())
        }
        None => {
            info!("Mail step skipped");
            None
        }
    };

    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    info!(duration_ms, rows_inserted, "Intake complete");

    Ok(IntakeReport {
        name,
        bytes_fetched: data.bytes,
        rows_inserted,
        email_recipient,
        completed_at: Utc::now(),
        duration_ms,
    })
}

/// One line of a setup check.
#[derive(Debug, Clone, Serialize)]
pub struct SetupCheck {
    /// What was checked.
    pub name: &'static str,
    /// Whether the check passed.
    pub ok: bool,
    /// Checked value on success, error message on failure. Never a secret.
    pub detail: String,
}

/// Result of [`check_setup`].
#[derive(Debug, Clone, Serialize)]
pub struct SetupReport {
    /// Individual checks in flow order.
    pub checks: Vec<SetupCheck>,
}

impl SetupReport {
    /// Returns true if every check passed.
    #[must_use]
    pub fn all_ok(&self) -> bool {
        self.checks.iter().all(|c| c.ok)
    }
}

fn check(name: &'static str, result: Result<String>) -> SetupCheck {
    match result {
        Ok(detail) => SetupCheck {
            name,
            ok: true,
            detail,
        },
        Err(e) => SetupCheck {
            name,
            ok: false,
            detail: e.to_string(),
        },
    }
}

/// Runs every local validation and credential check without network,
/// database or process I/O.
///
/// Unlike [`run_intake`] this does not stop at the first failure.
#[must_use]
pub fn check_setup(config: &AppConfig, provider: &dyn CredentialProvider) -> SetupReport {
    let checks = vec![
        check(
            "api.url",
            validate_api_url(&config.api.url, config.api.allow_loopback_http).map(String::from),
        ),
        check(
            "api.token",
            require_credential(CredentialKind::ApiToken, provider.api_token())
                .map(|_| "present".to_string()),
        ),
        check(
            "database",
            store::check_config(&config.database, provider.database_password())
                .map(|()| format!("table {}", config.database.table)),
        ),
        check(
            "email",
            Mailer::new(&config.email).map(|m| format!("{} via {}", m.recipient(), config.email.program)),
        ),
    ];

    SetupReport { checks }
}
