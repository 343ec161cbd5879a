//! Error types for encoder invocation.

use thiserror::Error;

/// Encoder invocation error variants.
#[derive(Debug, Error)]
pub enum Error {
    /// Encoder exited nonzero; carries its captured stderr verbatim
    #[error("audio encoding failed: {0}")]
    EncodingFailed(String),

    /// IO error launching the encoder or moving bytes around
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type alias for myna-media operations.
pub type Result<T> = std::result::Result<T, Error>;
