// SPDX-License-Identifier: Apache-2.0

//! CLI-specific `CredentialProvider` implementation.
//!
//! Resolves each credential from its environment variable first, then from
//! the system keyring. Nothing is ever read from the config file.

use safeintake_core::auth::{credential_from_env, stored_credential};
use safeintake_core::{CredentialKind, CredentialProvider, CredentialSource};
use secrecy::SecretString;
use tracing::debug;

/// CLI implementation of `CredentialProvider`.
///
/// Resolves credentials from:
/// - `SAFEINTAKE_API_TOKEN` / `SAFEINTAKE_DB_PASSWORD` environment variables
/// - System keyring (service `safeintake`)
pub struct EnvCredentialProvider;

impl EnvCredentialProvider {
    /// Resolves a credential and reports where it came from.
    pub fn resolve(kind: CredentialKind) -> Option<(SecretString, CredentialSource)> {
        if let Some(secret) = credential_from_env(kind) {
            debug!(%kind, "Resolved credential from environment variable");
            return Some((secret, CredentialSource::Environment));
        }

        if let Some(secret) = stored_credential(kind) {
            debug!(%kind, "Resolved credential from system keyring");
            return Some((secret, CredentialSource::Keyring));
        }

        debug!(%kind, "No credential found");
        None
    }
}

impl CredentialProvider for EnvCredentialProvider {
    fn api_token(&self) -> Option<SecretString> {
        Self::resolve(CredentialKind::ApiToken).map(|(secret, _)| secret)
    }

    fn database_password(&self) -> Option<SecretString> {
        Self::resolve(CredentialKind::DatabasePassword).map(|(secret, _)| secret)
    }
}
