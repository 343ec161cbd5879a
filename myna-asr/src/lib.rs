//! myna-asr: external speech-recognition engine wrapper.
//!
//! Treats the recognition engine (a whisper-style CLI) as an opaque,
//! single-shot, blocking subprocess: stage an output directory, run the
//! engine, parse its JSON transcript into a
//! [`myna_fmt::types::TranscriptionResult`]. There is no progress signal to
//! forward, so none is fabricated.

pub mod engine;
pub mod error;
