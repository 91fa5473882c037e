// SPDX-License-Identifier: Apache-2.0

//! Text utility functions for safeintake.
//!
//! Used to turn untrusted remote text (HTTP error bodies, mail program stderr)
//! into short single-line excerpts that are safe to log and print.

/// Truncates text to a maximum length with a custom suffix.
///
/// Uses character count (not byte count) to safely handle multi-byte UTF-8.
/// The suffix is included in the max length calculation.
///
/// # Examples
///
/// ```
/// use safeintake_core::utils::truncate_with_suffix;
///
/// let text = "This is a very long string that needs truncation";
/// let result = truncate_with_suffix(text, 20, "... [more]");
/// assert!(result.ends_with("... [more]"));
/// assert!(result.chars().count() <= 20);
/// ```
#[must_use]
pub fn truncate_with_suffix(text: &str, max_len: usize, suffix: &str) -> String {
    let char_count = text.chars().count();
    if char_count <= max_len {
        text.to_string()
    } else {
        let suffix_len = suffix.chars().count();
        let truncate_at = max_len.saturating_sub(suffix_len);
        let truncated: String = text.chars().take(truncate_at).collect();
        format!("{truncated}{suffix}")
    }
}

/// Truncates text to a maximum length with default ellipsis suffix "...".
#[must_use]
pub fn truncate(text: &str, max_len: usize) -> String {
    truncate_with_suffix(text, max_len, "...")
}

/// Collapses untrusted text to one printable line of at most `max_len` characters.
///
/// Control characters (including CR, LF and ESC) become spaces, runs of
/// whitespace collapse to one space, and the result is trimmed.
///
/// # Examples
///
/// ```
/// use safeintake_core::utils::excerpt;
///
/// assert_eq!(excerpt("bad\r\ngateway\u{1b}[2J", 50), "bad gateway [2J");
/// ```
#[must_use]
pub fn excerpt(text: &str, max_len: usize) -> String {
    let cleaned: String = text
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    let collapsed = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate(&collapsed, max_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_text_unchanged() {
        assert_eq!(truncate("Short body", 50), "Short body");
    }

    #[test]
    fn truncate_long_text_with_ellipsis() {
        let long = "upstream returned an unexpectedly long error message body";
        let result = truncate(long, 30);
        assert_eq!(result.chars().count(), 30);
        assert!(result.ends_with("..."));
    }

    #[test]
    fn truncate_utf8_multibyte_safe() {
        let text = "ééééééééééééééééééééééééé";
        let result = truncate(text, 10);
        assert_eq!(result.chars().count(), 10);
    }

    #[test]
    fn excerpt_strips_control_sequences() {
        assert_eq!(excerpt("line one\nline two\r\n", 100), "line one line two");
        assert_eq!(excerpt("\u{7}\u{1b}]0;pwned\u{7}", 100), "]0;pwned");
    }

    #[test]
    fn excerpt_truncates() {
        let long = "x".repeat(500);
        assert_eq!(excerpt(&long, 200).chars().count(), 200);
    }

    #[test]
    fn excerpt_empty() {
        assert_eq!(excerpt("  \n\t ", 10), "");
    }
}
