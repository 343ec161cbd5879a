//! myna-media: external audio encoder invocation.
//!
//! Wraps an ffmpeg-style encoder as an opaque subprocess: translate an
//! immutable [`settings::ExtractSettings`] into command-line flags, run the
//! encoder against a staged input file, and hand back the encoded audio
//! bytes. Temporary files are scoped guards released on every exit path.

pub mod error;
pub mod extract;
pub mod settings;
pub mod temp;
