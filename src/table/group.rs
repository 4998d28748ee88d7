//! Partitioning records into standalone images and before/after pairs.

use std::collections::HashMap;

use crate::classify::ImageRecord;
use crate::label::Role;

/// A before/after comparison for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairedGroup {
    pub category: String,
    pub before: Option<ImageRecord>,
    pub after: Option<ImageRecord>,
    /// Lowest order among the members.
    pub order: u32,
}

impl PairedGroup {
    fn new(record: &ImageRecord) -> Self {
        Self {
            category: record.category().to_string(),
            before: None,
            after: None,
            order: record.order,
        }
    }

    /// Slot a record by role. A second record for the same role replaces the
    /// first.
    fn insert(&mut self, record: ImageRecord) {
        self.order = self.order.min(record.order);
        match record.role {
            Role::Before => self.before = Some(record),
            Role::After => self.after = Some(record),
            Role::Standalone => {}
        }
    }
}

/// Records arranged in render order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    /// Standalone images, in classified order.
    pub standalone: Vec<ImageRecord>,
    /// Paired groups, sorted by group order.
    pub paired: Vec<PairedGroup>,
}

impl Layout {
    pub fn is_empty(&self) -> bool {
        self.standalone.is_empty() && self.paired.is_empty()
    }
}

/// Group already-sorted records for rendering.
///
/// Paired groups are keyed by category in first-seen order, then stably
/// sorted by their lowest member order.
pub fn group_records(records: &[ImageRecord]) -> Layout {
    let mut standalone = Vec::new();
    let mut paired: Vec<PairedGroup> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for record in records {
        if !record.role.is_paired() {
            standalone.push(record.clone());
            continue;
        }

        let slot = *index.entry(record.category()).or_insert_with(|| {
            paired.push(PairedGroup::new(record));
            paired.len() - 1
        });
        let group = &mut paired[slot];
        let replaced = match record.role {
            Role::Before => group.before.is_some(),
            _ => group.after.is_some(),
        };
        if replaced {
            tracing::debug!(
                category = record.category(),
                role = %record.role,
                "duplicate role in category, keeping the later image"
            );
        }
        group.insert(record.clone());
    }

    paired.sort_by_key(|group| group.order);

    Layout { standalone, paired }
}
