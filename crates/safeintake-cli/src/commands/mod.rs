// SPDX-License-Identifier: Apache-2.0

//! Command handlers for the safeintake CLI.

pub mod auth;
pub mod check;
pub mod completion;
pub mod config;
pub mod run;
pub mod types;

use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use safeintake_core::AppConfig;

use crate::cli::{AuthCommand, Commands, ConfigCommand, OutputContext};
use crate::output;

/// Creates a styled spinner (only if interactive).
fn maybe_spinner(ctx: &OutputContext, message: &str) -> Option<ProgressBar> {
    if !ctx.is_interactive() {
        return None;
    }

    let s = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        s.set_style(style);
    }
    s.set_message(message.to_string());
    s.enable_steady_tick(Duration::from_millis(100));
    Some(s)
}

/// Dispatch to the appropriate command handler.
pub async fn run(
    command: Commands,
    ctx: OutputContext,
    config: &AppConfig,
    config_path: Option<&Path>,
) -> Result<()> {
    match command {
        Commands::Run { name, skip_email } => {
            let result = run::run(name, skip_email, &ctx, config).await?;
            output::render(&result, &ctx)
        }

        Commands::Check => {
            let result = check::run(config, config_path);
            output::render(&result, &ctx)?;
            check::ensure_ok(&result)
        }

        Commands::Auth(auth_cmd) => match auth_cmd {
            AuthCommand::Status => {
                let result = auth::run_status();
                output::render(&result, &ctx)
            }
            AuthCommand::Login { kind } => auth::run_login(kind.into()),
            AuthCommand::Logout { kind } => auth::run_logout(kind.into()),
        },

        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommand::Path => {
                let result = config::run_path(config_path);
                output::render(&result, &ctx)
            }
            ConfigCommand::Show => config::run_show(config, &ctx),
        },

        Commands::Completion { shell } => completion::run_generate(shell),
    }
}
