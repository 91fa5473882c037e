// SPDX-License-Identifier: Apache-2.0

use console::style;
use std::io::{self, Write};

use crate::cli::{OutputContext, credential_arg_name};
use crate::commands::types::AuthStatusResult;

use super::Renderable;

impl Renderable for AuthStatusResult {
    fn render_text(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        writeln!(w)?;
        for status in &self.credentials {
            match (&status.source, &status.problem) {
                (Some(source), None) => writeln!(
                    w,
                    "{} {}: set via {}",
                    style("*").green().bold(),
                    status.kind,
                    style(source.to_string()).cyan()
                )?,
                (Some(source), Some(problem)) => writeln!(
                    w,
                    "{} {}: rejected (from {source}): {problem}",
                    style("!").red().bold(),
                    status.kind,
                )?,
                (None, _) => writeln!(
                    w,
                    "{} {}: not set. Export {} or run {}.",
                    style("!").yellow().bold(),
                    status.kind,
                    status.kind.env_var(),
                    style(format!(
                        "safeintake auth login {}",
                        credential_arg_name(status.kind)
                    ))
                    .cyan()
                )?,
            }
        }
        writeln!(w)?;
        Ok(())
    }
}
