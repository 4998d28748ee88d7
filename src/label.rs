//! Label parsing for screenshot `alt` text.
//!
//! A label loosely encodes three things, all optional:
//!
//! ```text
//! 2. Feature 25 _before
//! ^  ^           ^
//! |  |           role suffix (`before` / `after`, underscore separated)
//! |  name (free text, or a "feature N" identifier)
//! order prefix (digits, optional dot, optional whitespace)
//! ```
//!
//! Parsing is total. Labels that fit none of these shapes become standalone
//! images titled by their own text.

use crate::patterns::{FEATURE_NUMBER_RE, ORDER_PREFIX_RE};

/// Pairing role of a screenshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
#[cfg_attr(feature = "cli", serde(rename_all = "lowercase"))]
pub enum Role {
    /// The "before" half of a comparison.
    Before,
    /// The "after" half of a comparison.
    After,
    /// Not part of a comparison.
    #[default]
    Standalone,
}

impl Role {
    /// Parse a role suffix, case-insensitively. Only `before` and `after`
    /// are recognised.
    pub fn from_suffix(segment: &str) -> Option<Self> {
        if segment.eq_ignore_ascii_case("before") {
            Some(Role::Before)
        } else if segment.eq_ignore_ascii_case("after") {
            Some(Role::After)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Before => "before",
            Role::After => "after",
            Role::Standalone => "standalone",
        }
    }

    /// Whether this role takes part in a before/after pair.
    pub fn is_paired(self) -> bool {
        !matches!(self, Role::Standalone)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The interpreted form of a label.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct ParsedLabel {
    /// Explicit position from a leading number, or 0.
    pub order: u32,
    /// Feature identifier digits, empty when the label names no feature.
    pub semantic_number: String,
    pub role: Role,
    /// Human-facing title, never empty for a non-empty label.
    pub display_name: String,
}

/// Parse a raw label into order, role, and display name.
///
/// # Examples
///
/// ```
/// use shotgrid::{Role, parse_label};
///
/// let parsed = parse_label("2.Feature 25_before");
/// assert_eq!(parsed.order, 2);
/// assert_eq!(parsed.role, Role::Before);
/// assert_eq!(parsed.display_name, "Feature 25");
///
/// let parsed = parse_label("login_screen");
/// assert_eq!(parsed.order, 0);
/// assert_eq!(parsed.role, Role::Standalone);
/// assert_eq!(parsed.display_name, "login screen");
/// ```
pub fn parse_label(label: &str) -> ParsedLabel {
    let (order, rest) = split_order(label);

    let mut segments: Vec<&str> = rest.split('_').collect();
    let mut role = Role::Standalone;
    if segments.len() >= 2
        && let Some(suffix) = segments.last().and_then(|s| Role::from_suffix(s))
    {
        role = suffix;
        segments.pop();
    }
    let content = segments.join("_");

    let semantic_number = match FEATURE_NUMBER_RE.captures(&content) {
        Some(caps) => caps[1].to_string(),
        // A bare number only names a feature when an order prefix was given
        None if order > 0 && !content.is_empty() && content.bytes().all(|b| b.is_ascii_digit()) => {
            content.clone()
        }
        None => String::new(),
    };

    let display_name = if semantic_number.is_empty() {
        let name = content.replace('_', " ");
        let name = name.trim();
        if !name.is_empty() {
            name.to_string()
        } else if !label.trim().is_empty() {
            label.trim().to_string()
        } else {
            label.to_string()
        }
    } else {
        format!("Feature {semantic_number}")
    };

    tracing::trace!(label, order, %role, %display_name, "parsed label");

    ParsedLabel {
        order,
        semantic_number,
        role,
        display_name,
    }
}

/// Split a leading order prefix off a label.
///
/// Returns `(0, label)` when the label does not start with a digit.
fn split_order(label: &str) -> (u32, &str) {
    match ORDER_PREFIX_RE.captures(label) {
        Some(caps) => {
            let prefix = caps.get(0).map_or(0, |m| m.end());
            // Digit runs too long for u32 saturate instead of failing
            let order = caps[1].parse::<u32>().unwrap_or(u32::MAX);
            (order, &label[prefix..])
        }
        None => (0, label),
    }
}
