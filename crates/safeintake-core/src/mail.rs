// SPDX-License-Identifier: Apache-2.0

//! Mail delivery through an external mail program, without a shell.
//!
//! The program is spawned directly with an argument vector, so no shell ever
//! parses the subject or recipient. Both are still allowlist-checked so they
//! cannot be read as extra options by the mail program itself. The body goes
//! over stdin.

use std::io::ErrorKind;
use std::process::Stdio;
use std::sync::LazyLock;

use regex::Regex;
use tokio::io::AsyncWriteExt;
use tokio::process::{ChildStdin, Command};
use tracing::{debug, info, instrument, warn};

use crate::Result;
use crate::config::EmailConfig;
use crate::error::IntakeError;
use crate::utils::excerpt;
use crate::validate::{validate_email, validate_header_value};

/// Characters kept from the mail program's stderr in error messages.
const STDERR_EXCERPT_CHARS: usize = 200;

/// A bare program name, or an absolute path made of safe path characters.
static PROGRAM_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:/[A-Za-z0-9._+\-]+(?:/[A-Za-z0-9._+\-]+)*|[A-Za-z0-9_+][A-Za-z0-9._+\-]*)$")
        .expect("valid program regex")
});

/// Sends one message per run through the configured mail program.
#[derive(Debug, Clone)]
pub struct Mailer {
    program: String,
    recipient: String,
    subject: String,
}

impl Mailer {
    /// Validates the mail settings.
    pub fn new(config: &EmailConfig) -> Result<Self> {
        if !PROGRAM_RE.is_match(&config.program) || config.program.split('/').any(|p| p == "..") {
            return Err(IntakeError::validation(
                "email.program",
                "must be a bare program name or an absolute path without spaces or shell characters",
            ));
        }

        Ok(Self {
            program: config.program.clone(),
            recipient: validate_email(&config.recipient)?,
            subject: validate_header_value("email.subject", &config.subject)?,
        })
    }

    /// Validated recipient address.
    #[must_use]
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    /// Argument vector passed to the mail program.
    #[must_use]
    pub fn args(&self) -> [&str; 3] {
        ["-s", self.subject.as_str(), self.recipient.as_str()]
    }

    /// Sends `body` to the configured recipient.
    ///
    /// # Errors
    ///
    /// Returns `IntakeError::Mail` if the program cannot be started or exits
    /// with a non-zero status.
    #[instrument(skip(self, body), fields(program = %self.program, recipient = %self.recipient))]
    pub async fn send(&self, body: &str) -> Result<()> {
        let mut child = Command::new(&self.program)
            .args(self.args())
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| IntakeError::Mail {
                status: None,
                message: format!("could not start '{}': {e}", self.program),
            })?;

        // A program that exits early closes the pipe; its exit status is the real error.
        if let Some(mut stdin) = child.stdin.take()
            && let Err(e) = write_body(&mut stdin, body).await
            && e.kind() != ErrorKind::BrokenPipe
        {
            return Err(e.into());
        }

        let output = child.wait_with_output().await?;
        debug!(status = ?output.status, "Mail program exited");

        if !output.status.success() {
            let stderr = excerpt(&String::from_utf8_lossy(&output.stderr), STDERR_EXCERPT_CHARS);
            warn!(status = ?output.status, "Mail program failed");
            return Err(IntakeError::Mail {
                status: output.status.code(),
                message: if stderr.is_empty() {
                    format!("'{}' exited with {}", self.program, output.status)
                } else {
                    format!("'{}' exited with {}: {stderr}", self.program, output.status)
                },
            });
        }

        info!("Mail handed to mail program");
        Ok(())
    }
}

/// Writes the body, newline-terminated, and closes stdin.
async fn write_body(stdin: &mut ChildStdin, body: &str) -> std::io::Result<()> {
    stdin.write_all(body.as_bytes()).await?;
    if !body.ends_with('\n') {
        stdin.write_all(b"\n").await?;
    }
    stdin.shutdown().await
}
