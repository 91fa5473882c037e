// SPDX-License-Identifier: Apache-2.0

//! safeintake - collect a name, fetch remote data, store it and mail the name.
//!
//! A CLI that walks a single name through an authenticated HTTPS API call,
//! a parameterized database insert and a shell-free mail invocation.

mod cli;
mod commands;
mod errors;
mod logging;
mod output;
mod provider;

pub use provider::EnvCredentialProvider;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use safeintake_core::config;
use tracing::debug;

use crate::cli::{Cli, OutputContext};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    let output_ctx = OutputContext::from_cli(cli.output, cli.quiet, cli.verbose);

    let loaded = match &cli.config {
        Some(path) => config::load_config_from(path, true)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => config::load_config().context("Failed to load configuration"),
    };

    let result = match loaded {
        Ok(config) => {
            debug!("Configuration loaded successfully");
            commands::run(cli.command, output_ctx, &config, cli.config.as_deref()).await
        }
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let formatted = errors::format_error(&e);
            eprintln!("Error: {formatted}");
            ExitCode::FAILURE
        }
    }
}
