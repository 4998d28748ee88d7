//! Turns extracted tags into ordered image records.

use crate::extract::RawTag;
use crate::label::{Role, parse_label};

/// A screenshot ready for grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct ImageRecord {
    /// Title, also the pairing category for before/after images.
    pub display_name: String,
    pub src: String,
    pub role: Role,
    pub order: u32,
}

impl ImageRecord {
    pub fn new(display_name: impl Into<String>, src: impl Into<String>, role: Role, order: u32) -> Self {
        Self {
            display_name: display_name.into(),
            src: src.into(),
            role,
            order,
        }
    }

    /// Build a record from a tag by parsing its alt text.
    pub fn from_tag(tag: RawTag) -> Self {
        let parsed = parse_label(&tag.alt);
        Self {
            display_name: parsed.display_name,
            src: tag.src,
            role: parsed.role,
            order: parsed.order,
        }
    }

    /// The grouping key for paired roles.
    pub fn category(&self) -> &str {
        &self.display_name
    }
}

/// Parse every tag and sort the records by order.
///
/// The sort is stable: records sharing an order (including every unnumbered
/// record at 0) keep their document order.
pub fn classify<I>(tags: I) -> Vec<ImageRecord>
where
    I: IntoIterator<Item = RawTag>,
{
    let mut records: Vec<ImageRecord> = tags.into_iter().map(ImageRecord::from_tag).collect();
    records.sort_by_key(|record| record.order);
    records
}
