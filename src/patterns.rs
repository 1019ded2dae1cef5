//! Compiled regex patterns for numeric labels.
//!
//! All patterns are compiled once using `LazyLock`. `\s` is Unicode-aware,
//! so the `&nbsp;` the site puts between number and noun also matches.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

/// Score label: "1 point", "42 points".
pub static SCORE_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+)\s+points?\s*$").expect("SCORE_LABEL regex")
});

/// Comment-count label: `<number> <word>`, e.g. "12 comments".
pub static COMMENT_COUNT_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+)\s+\S+\s*$").expect("COMMENT_COUNT_LABEL regex")
});

/// Captures the leading number of `text` with `pattern`, if it matches.
#[must_use]
pub fn capture_number<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
