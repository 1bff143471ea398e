//! Error message normalization.
//!
//! Normalization erases the parts of a message that vary per occurrence
//! (numbers, quoted identifiers, spacing) so that the same underlying
//! failure produces the same normalized string across components.

use std::sync::OnceLock;

use regex::Regex;

fn digit_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+").expect("static regex"))
}

fn quoted_identifiers() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r#"'[^']*'|"[^"]*"|`[^`]*`"#).expect("static regex"))
}

fn whitespace_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("static regex"))
}

/// Normalize a raw error message for exact-match grouping.
///
/// Lowercases, replaces digit runs with `<n>`, quoted identifier-like
/// substrings with `<id>`, and collapses whitespace.
pub fn normalize_message(message: &str) -> String {
    let lowered = message.to_lowercase();
    let without_digits = digit_runs().replace_all(&lowered, "<n>");
    let without_quotes = quoted_identifiers().replace_all(&without_digits, "<id>");
    whitespace_runs()
        .replace_all(&without_quotes, " ")
        .trim()
        .to_string()
}
