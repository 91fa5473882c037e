// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for safeintake.
//!
//! Uses clap's derive API for declarative CLI parsing.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use safeintake_core::CredentialKind;

/// Output format for CLI results.
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with colors (default)
    #[default]
    Text,
    /// JSON output for programmatic consumption
    Json,
}

/// Global output configuration passed to commands.
#[derive(Clone)]
pub struct OutputContext {
    /// Output format (text, json)
    pub format: OutputFormat,
    /// Suppress non-essential output (spinners, progress)
    pub quiet: bool,
    /// Enable verbose output
    pub verbose: bool,
    /// Whether stdout is a terminal (TTY)
    pub is_tty: bool,
}

impl OutputContext {
    /// Creates an `OutputContext` from CLI arguments.
    pub fn from_cli(format: OutputFormat, quiet: bool, verbose: bool) -> Self {
        Self {
            format,
            quiet,
            verbose,
            is_tty: std::io::stdout().is_terminal(),
        }
    }

    /// Returns true if interactive elements (spinners, colors) should be shown.
    pub fn is_interactive(&self) -> bool {
        self.is_tty && !self.quiet && matches!(self.format, OutputFormat::Text)
    }
}

/// safeintake - collect a name, fetch remote data, store it and mail the name.
///
/// Every value crossing a boundary is allowlist-checked, the API is only
/// called over authenticated HTTPS, data is stored with a parameterized
/// INSERT and mail is sent without a shell.
#[derive(Parser)]
#[command(name = "safeintake")]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Output format (text, json)
    #[arg(long, short = 'o', global = true, default_value = "text", value_enum)]
    pub output: OutputFormat,

    /// Suppress non-essential output (spinners, progress)
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output (debug-level logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Configuration file (default: ~/.config/safeintake/config.toml)
    #[arg(long, short = 'c', global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Collect a name, fetch data, store it and mail the name
    Run {
        /// Name to submit (prompted for, or read from stdin, if omitted)
        #[arg(long)]
        name: Option<String>,

        /// Skip the mail step
        #[arg(long)]
        skip_email: bool,
    },

    /// Validate configuration and credentials without contacting anything
    Check,

    /// Manage credentials in the system keyring
    #[command(subcommand)]
    Auth(AuthCommand),

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate a shell completion script (output to stdout)
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Credential selector for auth subcommands.
#[derive(Clone, Copy, ValueEnum)]
pub enum CredentialArg {
    /// Bearer token for the remote API
    ApiToken,
    /// Database password
    DbPassword,
}

impl From<CredentialArg> for CredentialKind {
    fn from(arg: CredentialArg) -> Self {
        match arg {
            CredentialArg::ApiToken => CredentialKind::ApiToken,
            CredentialArg::DbPassword => CredentialKind::DatabasePassword,
        }
    }
}

/// Returns the CLI spelling of a credential kind.
pub fn credential_arg_name(kind: CredentialKind) -> &'static str {
    match kind {
        CredentialKind::ApiToken => "api-token",
        CredentialKind::DatabasePassword => "db-password",
    }
}

/// Authentication subcommands
#[derive(Subcommand)]
pub enum AuthCommand {
    /// Show where each credential resolves from and whether it is acceptable
    Status,

    /// Store a credential in the system keyring (prompted, never echoed)
    Login {
        /// Credential to store
        #[arg(value_enum)]
        kind: CredentialArg,
    },

    /// Remove a credential from the system keyring
    Logout {
        /// Credential to remove
        #[arg(value_enum)]
        kind: CredentialArg,
    },
}

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the configuration file path
    Path,

    /// Print the effective configuration (file + environment + defaults)
    Show,
}
