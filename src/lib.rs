//! # shotgrid
//!
//! Turns a blob of HTML containing labelled screenshots into a compact
//! before/after comparison table.
//!
//! ## Pipeline
//!
//! Each stage is a pure function of the previous stage's output:
//!
//! 1. [`extract_tags`] finds `<img>` tags with both `alt` and `src`
//! 2. [`parse_label`] reads order, role and name out of each `alt`
//! 3. [`classify`] builds [`ImageRecord`]s sorted by order
//! 4. [`render`] groups standalone and before/after images into a table
//!
//! ## Quick Start
//!
//! ```
//! use shotgrid::{TableConfig, convert};
//!
//! let html = r#"
//!     <img alt="1. Login_before" src="old.png">
//!     <img alt="2. Login_after" src="new.png">
//! "#;
//! let table = convert(html, &TableConfig::default()).unwrap();
//! assert!(table.contains(r#"<th colspan="2">Login</th>"#));
//! ```
//!
//! ## Labels
//!
//! Labels are loosely structured file-name-like strings:
//!
//! | Label                  | Order | Role       | Title        |
//! |------------------------|-------|------------|--------------|
//! | `1. Feature_1_before`  | 1     | before     | `Feature 1`  |
//! | `4feature54_after`     | 4     | after      | `Feature 54` |
//! | `settings_page`        | 0     | standalone | `settings page` |

pub mod classify;
pub mod error;
pub mod extract;
pub mod label;
pub(crate) mod patterns;
pub mod table;
pub mod util;

#[cfg(feature = "wasm")]
pub mod wasm;

use std::io::Read;

pub use classify::{ImageRecord, classify};
pub use error::{Error, Result};
pub use extract::{ImgTags, RawTag, extract_tags};
pub use label::{ParsedLabel, Role, parse_label};
pub use table::{Layout, PairedGroup, TableConfig, group_records, render};

/// Extract and classify the images in `html`.
///
/// Returns [`Error::NoImages`] when no `<img>` tag carries both `alt` and
/// `src`.
pub fn classify_html(html: &str) -> Result<Vec<ImageRecord>> {
    let records = classify(extract_tags(html));
    tracing::debug!(count = records.len(), "extracted images");
    if records.is_empty() {
        return Err(Error::NoImages);
    }
    Ok(records)
}

/// Run the whole pipeline: HTML in, `<details>` table fragment out.
pub fn convert(html: &str, config: &TableConfig) -> Result<String> {
    let records = classify_html(html)?;
    Ok(render(&records, config))
}

/// Decode raw bytes (see [`util::decode_text`]) and convert them.
pub fn convert_bytes(bytes: &[u8], config: &TableConfig) -> Result<String> {
    convert(&util::decode_text(bytes), config)
}

/// Read everything from `reader` and convert it.
pub fn convert_reader<R: Read>(mut reader: R, config: &TableConfig) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    convert_bytes(&bytes, config)
}
