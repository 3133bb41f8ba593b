//! Failure taxonomy for a single conversion run.
//!
//! Every error aborts the run at the point of occurrence; there is no
//! partial-output or retry semantic.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    /// File could not be read or written (includes file-not-found).
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source raster could not be decoded.
    #[error("failed to decode image {path}: {source}")]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Output raster could not be encoded.
    #[error("failed to encode image {path}: {source}")]
    ImageEncode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A text-grid token is not a decimal integer.
    #[error("line {line}: {token:?} is not a decimal height sample")]
    MalformedToken { line: usize, token: String },

    /// A text-grid value falls outside the 8-bit sample range.
    #[error("line {line}: value {value} is outside 0..=255")]
    ValueRange { line: usize, value: i64 },

    /// Row or column count disagrees with the declared grid size.
    #[error("line {line}: expected {expected} {what}, found {found}")]
    DimensionMismatch {
        line: usize,
        what: &'static str,
        expected: usize,
        found: usize,
    },

    /// Runtime config file could not be parsed.
    #[error("failed to parse config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
