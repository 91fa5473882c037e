// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # safeintake core
//!
//! Core library for the safeintake CLI: collect a name, fetch data from an
//! authenticated HTTPS API, store it with a parameterized `INSERT` and mail
//! the name through a mail program without a shell.
//!
//! This crate provides:
//! - Allowlist validation for every value that crosses a boundary
//! - Credential handling that refuses missing and default secrets
//! - The API client, record store and mailer used by the flow
//! - Configuration loading
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use safeintake_core::{CredentialProvider, RunOptions, load_config, run_intake};
//! use secrecy::SecretString;
//!
//! struct EnvOnly;
//!
//! impl CredentialProvider for EnvOnly {
//!     fn api_token(&self) -> Option<SecretString> {
//!         std::env::var("SAFEINTAKE_API_TOKEN").ok().map(SecretString::from)
//!     }
//!
//!     fn database_password(&self) -> Option<SecretString> {
//!         std::env::var("SAFEINTAKE_DB_PASSWORD").ok().map(SecretString::from)
//!     }
//! }
//!
//! # async fn example() -> safeintake_core::Result<()> {
//! let config = load_config()?;
//! let report = run_intake(&config, &EnvOnly, "Ada Lovelace", RunOptions::default()).await?;
//! println!("Stored {} row(s)", report.rows_inserted);
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`validate`] - Allowlist checks (names, emails, headers, identifiers, URLs)
//! - [`auth`] - Credential provider trait and credential checks
//! - [`api`] - Authenticated HTTPS fetch with a response size cap
//! - [`store`] - Parameterized insert into the configured table
//! - [`mail`] - Shell-free mail program invocation
//! - [`input`] - Bounded line reading for the name
//! - [`config`] - Configuration loading and paths
//! - [`error`] - Error types

// ============================================================================
// Error Handling
// ============================================================================

pub use error::IntakeError;

/// Convenience Result type for safeintake operations.
///
/// This is equivalent to `std::result::Result<T, IntakeError>`.
pub type Result<T> = std::result::Result<T, IntakeError>;

// ============================================================================
// Credentials
// ============================================================================

pub use auth::{CredentialKind, CredentialProvider, CredentialSource, require_credential};

// ============================================================================
// Configuration
// ============================================================================

pub use config::{
    ApiConfig, AppConfig, DatabaseConfig, EmailConfig, InputConfig, config_dir, config_file_path,
    load_config, load_config_from,
};

// ============================================================================
// Boundary Steps
// ============================================================================

pub use api::{ApiClient, FetchedData};
pub use input::{NAME_PROMPT, read_name};
pub use mail::Mailer;
pub use store::RecordStore;

// ============================================================================
// Platform-Agnostic Facade
// ============================================================================

pub use facade::{IntakeReport, RunOptions, SetupCheck, SetupReport, check_setup, run_intake};

// ============================================================================
// Modules
// ============================================================================

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod facade;
pub mod input;
pub mod mail;
pub mod store;
pub mod utils;
pub mod validate;
