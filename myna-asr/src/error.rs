//! Error types for recognition engine invocation.

use std::path::PathBuf;
use thiserror::Error;

/// Recognition invocation error variants.
#[derive(Debug, Error)]
pub enum Error {
    /// Engine exited nonzero; carries its captured stderr verbatim
    #[error("recognition failed: {0}")]
    RecognitionFailed(String),

    /// Engine reported success but the transcript file never appeared
    #[error("engine reported success but wrote no transcript: {}", path.display())]
    MissingTranscript { path: PathBuf },

    /// IO error launching the engine or reading its output
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Engine output was not valid JSON
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Engine JSON was missing required fields
    #[error(transparent)]
    Format(#[from] myna_fmt::error::Error),
}

/// Result type alias for myna-asr operations.
pub type Result<T> = std::result::Result<T, Error>;
