//! Error types for shotgrid operations.

use thiserror::Error;

/// Errors that can occur while turning HTML into a screenshot table.
///
/// The pipeline itself is total: malformed tags are skipped and odd labels
/// resolve to a defined record. The only condition it reports is an input
/// with no usable `<img>` tags at all.
#[derive(Error, Debug)]
pub enum Error {
    #[error("no images found in input")]
    NoImages,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
