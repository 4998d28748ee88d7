//! Cached regex patterns for tag and label matching.
//!
//! Uses LazyLock to compile patterns once on first use, so repeated
//! conversions never pay for regex compilation.

use regex_lite::Regex;
use std::sync::LazyLock;

// === Tag patterns ===

/// Matches alt="..." at the start of an attribute list or after whitespace
pub static ALT_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:^|\s)alt\s*=\s*"([^"]*)""#).unwrap()
});

/// Matches src="..." at the start of an attribute list or after whitespace
pub static SRC_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(?:^|\s)src\s*=\s*"([^"]*)""#).unwrap()
});

/// Matches <meta charset="..."> tags
pub static META_CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta\s+charset\s*=\s*["']?([\w\-]+)["']?"#).unwrap()
});

// === Label patterns ===

/// Matches a leading order prefix: digits, an optional dot, optional whitespace
pub static ORDER_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\.?\s*").unwrap());

/// Matches "feature" followed by a number (`Feature 25`, `feature_25`, `Feature25`)
pub static FEATURE_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)feature[\s_]*(\d+)").unwrap());
