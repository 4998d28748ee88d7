//! Grouping and HTML table rendering.
//!
//! This module turns classified records into the final fragment. The design
//! separates the pure grouping step from string generation:
//!
//! - [`group`]: Splits records into standalone images and before/after pairs
//! - [`title`]: Title-casing for category names
//! - [`render`]: Layout → HTML string
//!
//! ## Output Shape
//!
//! Everything is wrapped in a collapsible `<details>` block holding a two
//! column `<table>`:
//!
//! - **Standalone images** come first, two per row, each pair as a header row
//!   of titles followed by a row of images
//! - **Paired groups** follow, ordered by their earliest member, each as a
//!   full-width title row, a `Before`/`After` row and an image row
//! - **Missing cells** are emitted empty so every row keeps two columns

mod group;
mod render;
mod title;

pub use group::{Layout, PairedGroup, group_records};
pub use render::{render, render_layout};
pub use title::format_title;

/// Configuration for table rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Display width applied to every image cell.
    pub image_width: u32,
    /// Text of the `<summary>` element.
    pub summary: String,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            image_width: 400,
            summary: "Screenshots".to_string(),
        }
    }
}

impl TableConfig {
    /// Create a TableConfig with the default width and summary.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_image_width(mut self, image_width: u32) -> Self {
        self.image_width = image_width;
        self
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }
}
