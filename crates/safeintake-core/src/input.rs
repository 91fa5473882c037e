// SPDX-License-Identifier: Apache-2.0

//! Reading the user's name from a line-oriented source such as piped stdin.

use std::io::{BufRead, Read};

use crate::Result;
use crate::error::IntakeError;
use crate::validate::validate_name;

/// Prompt shown before reading a name.
pub const NAME_PROMPT: &str = "Enter your name";

/// Reads one line from `reader` and validates it as a name.
///
/// At most `max_len * 4 + 2` bytes are read (the UTF-8 worst case plus a CRLF
/// terminator), so an unterminated stream cannot exhaust memory. A line longer
/// than that is rejected rather than silently cut.
///
/// # Examples
///
/// ```
/// use safeintake_core::input::read_name;
///
/// let name = read_name("Ada Lovelace\n".as_bytes(), 100).unwrap();
/// assert_eq!(name, "Ada Lovelace");
/// ```
pub fn read_name<R: BufRead>(reader: R, max_len: usize) -> Result<String> {
    let cap = max_len.saturating_mul(4).saturating_add(2);
    let mut raw = Vec::new();
    reader
        .take(u64::try_from(cap).unwrap_or(u64::MAX))
        .read_until(b'\n', &mut raw)?;

    if raw.is_empty() {
        return Err(IntakeError::validation("name", "no input received"));
    }

    if !raw.ends_with(b"\n") && raw.len() >= cap {
        return Err(IntakeError::validation(
            "name",
            format!("must be at most {max_len} characters"),
        ));
    }

    let line = String::from_utf8(raw)
        .map_err(|_| IntakeError::validation("name", "is not valid UTF-8"))?;

    validate_name(&line, max_len)
}
