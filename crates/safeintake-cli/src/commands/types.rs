// SPDX-License-Identifier: Apache-2.0

//! Result types returned by command handlers.
//!
//! Command handlers return data instead of printing directly; the `output`
//! module decides how it is presented.

use safeintake_core::{CredentialKind, CredentialSource, IntakeReport, SetupReport};
use serde::Serialize;

/// Result from the run command.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct RunResult {
    /// Report from the completed run.
    pub report: IntakeReport,
}

/// Result from the check command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CheckResult {
    /// Config file the settings were read from.
    pub config_path: String,
    /// Individual check outcomes.
    #[serde(flatten)]
    pub report: SetupReport,
    /// Whether every check passed.
    pub ok: bool,
}

/// Status of one credential.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CredentialStatus {
    /// Which credential.
    pub kind: CredentialKind,
    /// Where it resolved from, if anywhere.
    pub source: Option<CredentialSource>,
    /// Whether the resolved value passes the credential checks.
    pub acceptable: bool,
    /// Why the value was rejected, if it was.
    pub problem: Option<String>,
}

/// Result from the auth status command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AuthStatusResult {
    /// One entry per credential kind.
    pub credentials: Vec<CredentialStatus>,
}

/// Result from the config path command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ConfigPathResult {
    /// Path to the config file.
    pub path: String,
    /// Whether the file exists.
    pub exists: bool,
}
