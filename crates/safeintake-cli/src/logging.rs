// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the safeintake CLI.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging to stderr.
//! Log level can be controlled via the `RUST_LOG` environment variable.
//!
//! # Examples
//!
//! ```bash
//! # Default: warnings only
//! safeintake run
//!
//! # Step-by-step progress of a run
//! RUST_LOG=safeintake=info safeintake run
//!
//! # Debug output for troubleshooting
//! safeintake -v run
//! ```
//!
//! Secrets are never recorded: every instrumented function that receives a
//! credential skips it.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Default filter when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "safeintake=warn,reqwest=error,sqlx=error";

/// Default filter with `-v`.
const VERBOSE_FILTER: &str = "safeintake=debug,reqwest=warn,sqlx=warn";

/// Initialize the logging subsystem.
///
/// `RUST_LOG` takes precedence; otherwise `verbose` selects between the
/// default and debug filters.
pub fn init_logging(verbose: bool) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    let default_filter = if verbose {
        VERBOSE_FILTER
    } else {
        DEFAULT_FILTER
    };
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
