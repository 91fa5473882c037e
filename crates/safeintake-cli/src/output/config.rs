// SPDX-License-Identifier: Apache-2.0

use console::style;
use std::io::{self, Write};

use crate::cli::OutputContext;
use crate::commands::types::ConfigPathResult;

use super::Renderable;

impl Renderable for ConfigPathResult {
    fn render_text(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()> {
        if self.exists || ctx.quiet {
            writeln!(w, "{}", self.path)
        } else {
            writeln!(w, "{} {}", self.path, style("(not created yet)").dim())
        }
    }
}
