// SPDX-License-Identifier: Apache-2.0

//! Credential provider abstraction and credential hygiene checks.
//!
//! This module defines the `CredentialProvider` trait, which abstracts where
//! secrets come from (environment, system keyring, test doubles). Secrets are
//! held as [`SecretString`] and are checked with [`require_credential`] before
//! use: missing credentials and well-known defaults are refused outright.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use crate::error::IntakeError;

/// Keyring service name for stored credentials.
pub const KEYRING_SERVICE: &str = "safeintake";

/// Minimum accepted credential length.
pub const MIN_CREDENTIAL_LENGTH: usize = 8;

/// Values that ship as examples or defaults and must never be accepted.
const PLACEHOLDER_CREDENTIALS: &[&str] = &[
    "changeme",
    "change-me",
    "change_me",
    "password",
    "passw0rd",
    "secret",
    "admin",
    "root",
    "default",
    "test",
    "token",
    "your-api-key",
    "your_api_key",
    "api-key",
    "xxx",
    "12345",
    "123456",
    "12345678",
    "letmein",
];

/// Kinds of credentials the intake flow needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialKind {
    /// Bearer token for the remote API.
    ApiToken,
    /// Password for the database user.
    DatabasePassword,
}

impl CredentialKind {
    /// All credential kinds, in the order the flow needs them.
    pub const ALL: [CredentialKind; 2] = [CredentialKind::ApiToken, CredentialKind::DatabasePassword];

    /// Environment variable the credential is read from.
    #[must_use]
    pub fn env_var(self) -> &'static str {
        match self {
            CredentialKind::ApiToken => "SAFEINTAKE_API_TOKEN",
            CredentialKind::DatabasePassword => "SAFEINTAKE_DB_PASSWORD",
        }
    }

    /// Keyring user name the credential is stored under.
    #[must_use]
    pub fn keyring_user(self) -> &'static str {
        match self {
            CredentialKind::ApiToken => "api-token",
            CredentialKind::DatabasePassword => "db-password",
        }
    }
}

impl fmt::Display for CredentialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialKind::ApiToken => write!(f, "API token"),
            CredentialKind::DatabasePassword => write!(f, "database password"),
        }
    }
}

/// Where a resolved credential came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CredentialSource {
    /// Environment variable.
    Environment,
    /// System keyring.
    Keyring,
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialSource::Environment => write!(f, "environment variable"),
            CredentialSource::Keyring => write!(f, "system keyring"),
        }
    }
}

/// Provides the API token and database password.
///
/// Implementations return `None` when a credential is not available.
/// Callers pass the result through [`require_credential`] before use.
pub trait CredentialProvider: Send + Sync {
    /// Retrieves the bearer token for the remote API.
    fn api_token(&self) -> Option<SecretString>;

    /// Retrieves the database password.
    fn database_password(&self) -> Option<SecretString>;

    /// Retrieves a credential by kind.
    fn credential(&self, kind: CredentialKind) -> Option<SecretString> {
        match kind {
            CredentialKind::ApiToken => self.api_token(),
            CredentialKind::DatabasePassword => self.database_password(),
        }
    }
}

/// Rejects missing, empty, placeholder and too-short credentials.
///
/// # Examples
///
/// ```
/// use safeintake_core::auth::{CredentialKind, require_credential};
/// use secrecy::SecretString;
///
/// assert!(require_credential(CredentialKind::ApiToken, None).is_err());
/// assert!(require_credential(CredentialKind::ApiToken, Some(SecretString::from("changeme"))).is_err());
/// assert!(require_credential(CredentialKind::ApiToken, Some(SecretString::from("t0k-9f2c81ab"))).is_ok());
/// ```
pub fn require_credential(
    kind: CredentialKind,
    value: Option<SecretString>,
) -> Result<SecretString, IntakeError> {
    let Some(secret) = value else {
        return Err(IntakeError::MissingCredential { kind });
    };

    let exposed = secret.expose_secret().trim();
    if exposed.is_empty() {
        return Err(IntakeError::MissingCredential { kind });
    }

    if PLACEHOLDER_CREDENTIALS
        .iter()
        .any(|p| exposed.eq_ignore_ascii_case(p))
    {
        return Err(IntakeError::InsecureCredential {
            kind,
            reason: "value is a well-known default or placeholder",
        });
    }

    if exposed.chars().count() < MIN_CREDENTIAL_LENGTH {
        return Err(IntakeError::InsecureCredential {
            kind,
            reason: "value is shorter than 8 characters",
        });
    }

    Ok(secret)
}

/// Reads a credential from its environment variable.
///
/// Empty values are treated as unset.
#[must_use]
pub fn credential_from_env(kind: CredentialKind) -> Option<SecretString> {
    match std::env::var(kind.env_var()) {
        Ok(value) if !value.is_empty() => Some(SecretString::from(value)),
        _ => None,
    }
}

#[cfg(feature = "keyring")]
fn keyring_entry(kind: CredentialKind) -> Result<keyring::Entry, IntakeError> {
    Ok(keyring::Entry::new(KEYRING_SERVICE, kind.keyring_user())?)
}

/// Retrieves a stored credential from the system keyring.
///
/// Returns `None` if nothing is stored or the keyring is unavailable.
#[cfg(feature = "keyring")]
#[must_use]
pub fn stored_credential(kind: CredentialKind) -> Option<SecretString> {
    let entry = keyring_entry(kind).ok()?;
    let password = entry.get_password().ok()?;
    tracing::debug!(%kind, "Retrieved credential from keyring");
    Some(SecretString::from(password))
}

/// Stores a credential in the system keyring after checking it.
///
/// The value is read back through a fresh entry, the same way
/// [`stored_credential`] will find it later. A backend that accepts the
/// write but does not persist it is reported as
/// [`IntakeError::KeyringNotPersisted`].
#[cfg(feature = "keyring")]
#[tracing::instrument(skip(secret))]
pub fn store_credential(kind: CredentialKind, secret: SecretString) -> Result<(), IntakeError> {
    let secret = require_credential(kind, Some(secret))?;
    keyring_entry(kind)?.set_password(secret.expose_secret())?;

    let retained = stored_credential(kind)
        .is_some_and(|stored| stored.expose_secret() == secret.expose_secret());
    if !retained {
        tracing::warn!(%kind, "Keyring did not return the stored credential");
        return Err(IntakeError::KeyringNotPersisted { kind });
    }

    tracing::info!(%kind, "Credential stored in system keyring");
    Ok(())
}

/// Deletes a stored credential from the system keyring.
#[cfg(feature = "keyring")]
#[tracing::instrument]
pub fn delete_credential(kind: CredentialKind) -> Result<(), IntakeError> {
    keyring_entry(kind)?.delete_credential()?;
    tracing::info!(%kind, "Credential deleted from keyring");
    Ok(())
}
