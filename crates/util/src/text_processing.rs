//! # Text Processing Utilities
//!
//! Null-safe normalization helpers shared by the guide catalog and the resolver. Field metadata
//! is authored by many hands, so every helper accepts missing or oddly cased input and degrades
//! to an empty string instead of failing.

use heck::{ToSnakeCase, ToTitleCase};

/// Keywords that mark a guide title or category as describing a secret value.
///
/// Matching is case-insensitive substring presence.
pub const SENSITIVE_TERMS: &[&str] = &["api key", "token", "credential", "secret", "password"];

/// Returns true when `haystack` contains any of `needles`.
///
/// Callers are expected to pass an already-lowercased haystack and lowercase needles.
pub fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Case-insensitive ASCII prefix test that never panics on multi-byte input.
pub fn starts_with_ignore_case(text: &str, prefix: &str) -> bool {
    text.get(..prefix.len()).is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Splits identifiers and prose into lowercase words.
///
/// `camelCase`, `snake_case`, `kebab-case` and free text are all handled, so `smtpPort`,
/// `smtp_port` and `SMTP Port` all produce `["smtp", "port"]`.
pub fn split_words(text: &str) -> Vec<String> {
    text.to_snake_case()
        .split(|character: char| !character.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

/// Turns a schema key into a display label (`apiKey` becomes `Api Key`).
pub fn humanize_key(key: &str) -> String {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    trimmed.to_title_case()
}

/// Returns true when the text mentions any of [`SENSITIVE_TERMS`], ignoring case.
///
/// # Example
/// ```rust
/// use fieldguide_util::mentions_sensitive_term;
///
/// assert!(mentions_sensitive_term("Gemini AI Studio API Key – Step-by-Step"));
/// assert!(!mentions_sensitive_term("Database Host"));
/// ```
pub fn mentions_sensitive_term(text: &str) -> bool {
    contains_any(&text.to_lowercase(), SENSITIVE_TERMS)
}
