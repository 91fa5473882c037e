// SPDX-License-Identifier: Apache-2.0

//! Check command: validate settings and credentials offline.

use std::path::Path;

use anyhow::{Result, bail};
use safeintake_core::{AppConfig, check_setup, config_file_path};

use super::types::CheckResult;
use crate::EnvCredentialProvider;

/// Run every local check and collect the results.
pub fn run(config: &AppConfig, config_path: Option<&Path>) -> CheckResult {
    let report = check_setup(config, &EnvCredentialProvider);
    let ok = report.all_ok();
    CheckResult {
        config_path: config_path
            .map_or_else(config_file_path, Path::to_path_buf)
            .display()
            .to_string(),
        report,
        ok,
    }
}

/// Turns a failed check into a non-zero exit.
pub fn ensure_ok(result: &CheckResult) -> Result<()> {
    if result.ok {
        return Ok(());
    }

    let failed = result.report.checks.iter().filter(|c| !c.ok).count();
    bail!("{failed} setup check(s) failed")
}
