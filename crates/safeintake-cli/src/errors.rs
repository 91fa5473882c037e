// SPDX-License-Identifier: Apache-2.0

//! CLI-specific error formatting with user-friendly hints.
//!
//! Downcasts `anyhow::Error` to `IntakeError` and appends a hint for each
//! error kind. Structured error data stays in the library; presentation
//! lives here.

use anyhow::Error;
use safeintake_core::error::IntakeError;

use crate::cli::credential_arg_name;

/// Formats an error for CLI display with helpful hints.
///
/// If the error is not an `IntakeError`, returns the original error chain.
pub fn format_error(error: &Error) -> String {
    let Some(intake_err) = error.downcast_ref::<IntakeError>() else {
        return format!("{error:#}");
    };

    let tip = match intake_err {
        IntakeError::Validation { field: "name", .. } => {
            "Names may contain letters, spaces, apostrophes, hyphens and periods.".to_string()
        }
        IntakeError::Validation { field, .. } => format!(
            "Check the `{field}` setting in {}.",
            safeintake_core::config_file_path().display()
        ),
        IntakeError::MissingCredential { kind } => format!(
            "Export {} or run `safeintake auth login {}`.",
            kind.env_var(),
            credential_arg_name(*kind)
        ),
        IntakeError::InsecureCredential { .. } => {
            "Use a generated secret. Default and placeholder values are always refused.".to_string()
        }
        IntakeError::HardcodedCredential { location } => format!(
            "Remove the credential from `{location}` and supply it through the environment or `safeintake auth login`."
        ),
        IntakeError::InsecureUrl { .. } => "Use an https:// endpoint for `api.url`.".to_string(),
        IntakeError::Unauthorized { .. } => {
            "Check the API token with `safeintake auth status`.".to_string()
        }
        IntakeError::Api { .. } => {
            "The API returned an error. Try again in a moment.".to_string()
        }
        IntakeError::ResponseTooLarge { .. } => {
            "Raise `api.max_response_bytes` if responses this large are expected.".to_string()
        }
        IntakeError::Network(_) => "Check your internet connection and try again.".to_string(),
        IntakeError::Database(_) => {
            "Check `database.url` and that the target table exists.".to_string()
        }
        IntakeError::Mail { .. } => {
            "Check that `email.program` is installed and configured.".to_string()
        }
        IntakeError::Io(_) => "Check that stdin is readable.".to_string(),
        IntakeError::Config { .. } => format!(
            "Check your config file at {}.",
            safeintake_core::config_file_path().display()
        ),
        IntakeError::Keyring(_) => {
            "Your system keyring may be locked. Unlock it and try again.".to_string()
        }
        IntakeError::KeyringNotPersisted { kind } => format!(
            "Start your platform keyring service (Secret Service, Keychain, Credential Manager) or export {} instead.",
            kind.env_var()
        ),
    };

    format!("{intake_err}\n\nTip: {tip}")
}
