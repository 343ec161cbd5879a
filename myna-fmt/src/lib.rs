//! myna-fmt: serialization of timed transcripts into subtitle formats.
//!
//! Converts a recognition result (full text plus timed segments) into the
//! standard caption/transcript formats: plain text, JSON, SubRip (SRT),
//! WebVTT, and tab-separated values.
//!
//! All serializers are pure functions over an immutable
//! [`types::TranscriptionResult`]: the same input always produces
//! byte-identical output.
//!
//! # Quick Start
//!
//! ```
//! use myna_fmt::serialize::{Format, serialize};
//! use myna_fmt::types::{Segment, TranscriptionResult};
//!
//! let result = TranscriptionResult {
//!     text: "Hello world".to_string(),
//!     segments: vec![Segment::new("Hello world", 0.0, 2.5)],
//!     language: Some("en".to_string()),
//! };
//!
//! let artifact = serialize(&result, Format::Srt).unwrap();
//! assert!(artifact.content.starts_with("1\n00:00:00,000 --> 00:00:02,500"));
//! ```

pub mod error;
pub mod serialize;
pub mod timestamp;
pub mod types;
