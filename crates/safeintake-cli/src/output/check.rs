// SPDX-License-Identifier: Apache-2.0

use console::style;
use std::io::{self, Write};

use crate::cli::OutputContext;
use crate::commands::types::CheckResult;

use super::Renderable;

impl Renderable for CheckResult {
    fn render_text(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        writeln!(w)?;
        writeln!(w, "{}", style(format!("Config: {}", self.config_path)).dim())?;
        for check in &self.report.checks {
            let marker = if check.ok {
                style("ok").green().bold()
            } else {
                style("FAIL").red().bold()
            };
            writeln!(w, "  [{marker}] {:<10} {}", check.name, check.detail)?;
        }
        writeln!(w)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use safeintake_core::{SetupCheck, SetupReport};

    #[test]
    fn test_render_lists_every_check() {
        let result = CheckResult {
            config_path: "/tmp/config.toml".to_string(),
            report: SetupReport {
                checks: vec![
                    SetupCheck {
                        name: "api.url",
                        ok: true,
                        detail: "https://api.example.com/".to_string(),
                    },
                    SetupCheck {
                        name: "api.token",
                        ok: false,
                        detail: "API token is not set".to_string(),
                    },
                ],
            },
            ok: false,
        };
        let ctx = OutputContext {
            format: OutputFormat::Text,
            quiet: false,
            verbose: false,
            is_tty: false,
        };

        let mut out = Vec::new();
        result.render_text(&mut out, &ctx).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("api.url"));
        assert!(text.contains("FAIL"));
        assert!(text.contains("API token is not set"));
    }

    #[test]
    fn test_json_flattens_checks() {
        let result = CheckResult {
            config_path: "/tmp/config.toml".to_string(),
            report: SetupReport { checks: vec![] },
            ok: true,
        };
        let json = serde_json::to_value(&result).unwrap();

        assert!(json["checks"].is_array());
        assert_eq!(json["ok"], true);
    }
}
