//! Core types for recognition results.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Text segment with timestamps.
///
/// Represents one recognized utterance span with start and end times in
/// seconds from stream start. Text is kept exactly as the engine produced
/// it, including any leading or trailing whitespace.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Recognized text for the span
    pub text: String,
    /// Start time in seconds
    pub start: f64,
    /// End time in seconds
    pub end: f64,
}

impl Segment {
    pub fn new(text: impl Into<String>, start: f64, end: f64) -> Self {
        Self {
            text: text.into(),
            start,
            end,
        }
    }
}

/// Full output of one recognition run.
///
/// Created once per transcription, immutable afterward, consumed read-only
/// by any number of serializers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionResult {
    /// Full transcript, engine-provided
    pub text: String,
    /// Ordered segments, non-decreasing start times
    pub segments: Vec<Segment>,
    /// Detected or requested language code, opaque passthrough
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl TranscriptionResult {
    /// Build a result from loosely-typed engine JSON, naming the first
    /// missing required field.
    ///
    /// Recognition engines emit untyped JSON; this is the one place field
    /// presence is checked, so a segment lacking `start` fails here rather
    /// than being silently zeroed.
    pub fn from_value(value: &Value) -> Result<Self> {
        let text = require_str(value, "text")?.to_owned();

        let raw_segments = value
            .get("segments")
            .and_then(Value::as_array)
            .ok_or(Error::MalformedResult { field: "segments" })?;

        let mut segments = Vec::with_capacity(raw_segments.len());
        for raw in raw_segments {
            segments.push(Segment {
                text: require_str(raw, "text")?.to_owned(),
                start: require_f64(raw, "start")?,
                end: require_f64(raw, "end")?,
            });
        }

        let language = value
            .get("language")
            .and_then(Value::as_str)
            .map(str::to_owned);

        Ok(Self {
            text,
            segments,
            language,
        })
    }
}

fn require_str<'a>(value: &'a Value, field: &'static str) -> Result<&'a str> {
    value
        .get(field)
        .and_then(Value::as_str)
        .ok_or(Error::MalformedResult { field })
}

fn require_f64(value: &Value, field: &'static str) -> Result<f64> {
    value
        .get(field)
        .and_then(Value::as_f64)
        .ok_or(Error::MalformedResult { field })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_engine_json() {
        let value = json!({
            "text": " Hello world.",
            "segments": [
                {"start": 0.0, "end": 2.5, "text": " Hello world."}
            ],
            "language": "en"
        });

        let result = TranscriptionResult::from_value(&value).unwrap();

        assert_eq!(result.text, " Hello world.");
        assert_eq!(result.segments.len(), 1);
        assert_eq!(result.segments[0].start, 0.0);
        assert_eq!(result.segments[0].end, 2.5);
        assert_eq!(result.language.as_deref(), Some("en"));
    }

    #[test]
    fn accepts_integer_timestamps() {
        let value = json!({
            "text": "hi",
            "segments": [{"start": 0, "end": 2, "text": "hi"}]
        });

        let result = TranscriptionResult::from_value(&value).unwrap();

        assert_eq!(result.segments[0].end, 2.0);
        assert!(result.language.is_none());
    }

    #[test]
    fn rejects_missing_text() {
        let value = json!({"segments": []});

        let err = TranscriptionResult::from_value(&value).unwrap_err();

        assert!(matches!(err, Error::MalformedResult { field: "text" }));
    }

    #[test]
    fn rejects_segment_missing_start() {
        let value = json!({
            "text": "hi",
            "segments": [{"end": 1.0, "text": "hi"}]
        });

        let err = TranscriptionResult::from_value(&value).unwrap_err();

        assert!(matches!(err, Error::MalformedResult { field: "start" }));
    }

    #[test]
    fn rejects_segment_missing_end() {
        let value = json!({
            "text": "hi",
            "segments": [{"start": 0.0, "text": "hi"}]
        });

        let err = TranscriptionResult::from_value(&value).unwrap_err();

        assert!(matches!(err, Error::MalformedResult { field: "end" }));
    }

    #[test]
    fn rejects_missing_segments() {
        let value = json!({"text": "hi"});

        let err = TranscriptionResult::from_value(&value).unwrap_err();

        assert!(matches!(err, Error::MalformedResult { field: "segments" }));
    }
}
