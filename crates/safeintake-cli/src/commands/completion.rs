// SPDX-License-Identifier: Apache-2.0

//! Shell completion generation.

use std::io::Write;

use anyhow::Result;
use clap::CommandFactory;
use clap_complete::{Shell, generate};

use crate::cli::Cli;

/// Generate completion script to stdout.
pub fn run_generate(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    let mut stdout = std::io::stdout();
    generate(shell, &mut cmd, name, &mut stdout);
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_script_mentions_subcommands() {
        let mut cmd = Cli::command();
        let mut script = Vec::new();
        generate(Shell::Bash, &mut cmd, "safeintake", &mut script);

        let script = String::from_utf8(script).unwrap();
        assert!(script.contains("safeintake"));
        assert!(script.contains("run"));
        assert!(script.contains("check"));
    }
}
