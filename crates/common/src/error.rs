//! Central error types for the preview pipeline (thiserror-based).

use std::path::PathBuf;

use thiserror::Error;

/// Top-level preview error.
///
/// Every failure the core can report maps onto one of these kinds. Decoder
/// and encoder crates translate their own errors into this type at the
/// crate boundary so callers never see a third-party error type.
#[derive(Error, Debug)]
pub enum PreviewError {
    /// The input file does not exist or could not be opened.
    #[error("Input not found: {path}")]
    InputNotFound { path: String },

    /// The input could not be decoded (unknown format, corrupt data, no audio track).
    #[error("Decode failure: {0}")]
    Decode(String),

    /// Decoding produced zero samples.
    #[error("Decoded audio contains no samples")]
    EmptyInput,

    /// Requested envelope resolution (image width) is not positive.
    #[error("Invalid resolution: {0} (must be > 0)")]
    InvalidResolution(i64),

    /// Requested image dimensions are not positive.
    #[error("Invalid dimensions: {width}x{height} (both must be > 0)")]
    InvalidDimensions { width: i64, height: i64 },

    /// The image encoder rejected the pixel data.
    #[error("Encode failure: {0}")]
    Encode(String),

    /// A binary envelope had a length that cannot hold whole min/max pairs.
    #[error("Malformed envelope data: {len} bytes is not a multiple of 2")]
    MalformedEnvelope { len: usize },

    /// The output file could not be created or fully written.
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Decoding was cancelled by the caller's abort check.
    #[error("Operation aborted")]
    Aborted,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type for preview operations.
pub type PreviewResult<T> = Result<T, PreviewError>;
