// SPDX-License-Identifier: Apache-2.0

use console::style;
use std::io::{self, Write};

use crate::cli::OutputContext;
use crate::commands::types::RunResult;

use super::Renderable;

impl Renderable for RunResult {
    fn render_text(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()> {
        let report = &self.report;
        if ctx.quiet {
            writeln!(w, "{}", report.name)?;
            return Ok(());
        }

        writeln!(w)?;
        writeln!(
            w,
            "{} Submitted {}",
            style("*").green().bold(),
            style(&report.name).cyan()
        )?;
        writeln!(w, "  Fetched:  {} bytes", report.bytes_fetched)?;
        writeln!(w, "  Inserted: {} row(s)", report.rows_inserted)?;
        match &report.email_recipient {
            Some(recipient) => writeln!(w, "  Mailed:   {recipient}")?,
            None => writeln!(w, "  Mailed:   {}", style("skipped").dim())?,
        }
        if ctx.verbose {
            writeln!(
                w,
                "  {}",
                style(format!(
                    "Finished {} in {} ms",
                    report.completed_at.format("%Y-%m-%d %H:%M:%S UTC"),
                    report.duration_ms
                ))
                .dim()
            )?;
        }
        writeln!(w)?;
        Ok(())
    }
}
