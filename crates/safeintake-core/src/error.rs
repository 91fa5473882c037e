// SPDX-License-Identifier: Apache-2.0

//! Error types for safeintake.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Application code should use `anyhow::Result` for top-level error handling.

use thiserror::Error;

use crate::auth::CredentialKind;

/// Errors that can occur while collecting, fetching, storing or mailing.
#[derive(Error, Debug)]
pub enum IntakeError {
    /// Input rejected by an allowlist check.
    #[error("Invalid {field}: {message}")]
    Validation {
        /// Name of the rejected field (e.g., `name`, `email.recipient`).
        field: &'static str,
        /// Why the value was rejected. Never echoes the raw value.
        message: String,
    },

    /// A required credential was not supplied.
    #[error("Missing {kind} - set the {} environment variable", .kind.env_var())]
    MissingCredential {
        /// Which credential is missing.
        kind: CredentialKind,
    },

    /// A credential was supplied but is a known default or too weak.
    #[error("Refusing insecure {kind}: {reason}")]
    InsecureCredential {
        /// Which credential was rejected.
        kind: CredentialKind,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A credential was found embedded in configuration instead of the environment.
    #[error("Hard-coded credential found in {location}")]
    HardcodedCredential {
        /// Configuration key holding the credential.
        location: String,
    },

    /// URL failed scheme or host checks.
    #[error("Insecure URL {url}: {reason}")]
    InsecureUrl {
        /// The URL with any userinfo removed.
        url: String,
        /// Why the URL was rejected.
        reason: String,
    },

    /// Remote API rejected the credentials (HTTP 401 or 403).
    #[error("API rejected credentials (HTTP {status})")]
    Unauthorized {
        /// HTTP status code.
        status: u16,
    },

    /// Remote API returned an error or an unusable body.
    #[error("API error: {message}")]
    Api {
        /// HTTP status code, if the failure came from a response.
        status: Option<u16>,
        /// Error message or truncated body excerpt.
        message: String,
    },

    /// Response body exceeded the configured size cap.
    #[error("API response exceeds {limit} bytes")]
    ResponseTooLarge {
        /// Configured maximum in bytes.
        limit: usize,
    },

    /// Network/HTTP error from reqwest.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Mail program failed to start or exited unsuccessfully.
    #[error("Mail delivery failed: {message}")]
    Mail {
        /// Exit code of the mail program, if it ran.
        status: Option<i32>,
        /// Error message or truncated stderr excerpt.
        message: String,
    },

    /// I/O error (stdin, process pipes).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file error.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },

    /// Keyring/credential storage error.
    #[cfg(feature = "keyring")]
    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),

    /// The keyring accepted a credential but did not return it on read-back.
    #[cfg(feature = "keyring")]
    #[error("System keyring did not retain the {kind}; no persistent credential store is available")]
    KeyringNotPersisted {
        /// Credential that was being stored.
        kind: CredentialKind,
    },
}

impl IntakeError {
    /// Shorthand for a [`IntakeError::Validation`] error.
    pub(crate) fn validation(field: &'static str, message: impl Into<String>) -> Self {
        IntakeError::Validation {
            field,
            message: message.into(),
        }
    }
}

impl From<config::ConfigError> for IntakeError {
    fn from(err: config::ConfigError) -> Self {
        IntakeError::Config {
            message: err.to_string(),
        }
    }
}
