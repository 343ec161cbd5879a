//! Error types for transcript serialization.

use thiserror::Error;

/// Serialization error variants.
#[derive(Debug, Error)]
pub enum Error {
    /// Negative or non-finite seconds passed to a timecode formatter
    #[error("invalid timestamp: {0}s is not a non-negative number of seconds")]
    InvalidTimestamp(f64),

    /// Recognition result missing a required field
    #[error("malformed recognition result: missing field `{field}`")]
    MalformedResult { field: &'static str },

    /// Unknown output format tag
    #[error("unknown output format `{0}` (expected txt, json, srt, vtt, or tsv)")]
    UnknownFormat(String),

    /// JSON encoding error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for myna-fmt operations.
pub type Result<T> = std::result::Result<T, Error>;
