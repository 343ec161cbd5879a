//! Per-format transcript serializers.
//!
//! One pure function per output format, sharing the timecode formatters in
//! [`crate::timestamp`]. Dispatch is a match over [`Format`], so adding a
//! format means adding a variant and its function without touching the
//! existing ones.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::timestamp::{MillisSeparator, timecode, timecode_millis};
use crate::types::{Segment, TranscriptionResult};

/// Output format tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    Txt,
    Json,
    Srt,
    Vtt,
    Tsv,
}

impl Format {
    /// All supported formats in presentation order.
    pub const ALL: [Format; 5] = [
        Format::Txt,
        Format::Json,
        Format::Srt,
        Format::Vtt,
        Format::Tsv,
    ];

    /// Format tag, doubling as the file extension.
    pub fn extension(self) -> &'static str {
        match self {
            Format::Txt => "txt",
            Format::Json => "json",
            Format::Srt => "srt",
            Format::Vtt => "vtt",
            Format::Tsv => "tsv",
        }
    }

    /// MIME type for download/transport.
    pub fn mime_type(self) -> &'static str {
        match self {
            Format::Txt => "text/plain",
            Format::Json => "application/json",
            Format::Srt => "text/srt",
            Format::Vtt => "text/vtt",
            Format::Tsv => "text/tab-separated-values",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "txt" => Ok(Format::Txt),
            "json" => Ok(Format::Json),
            "srt" => Ok(Format::Srt),
            "vtt" => Ok(Format::Vtt),
            "tsv" => Ok(Format::Tsv),
            _ => Err(Error::UnknownFormat(s.to_owned())),
        }
    }
}

/// One serialized transcript, ready for writing or download.
#[derive(Clone, Debug, PartialEq)]
pub struct Artifact {
    pub format: Format,
    pub content: String,
}

impl Artifact {
    pub fn extension(&self) -> &'static str {
        self.format.extension()
    }

    pub fn mime_type(&self) -> &'static str {
        self.format.mime_type()
    }
}

/// Serialize a recognition result into the requested format.
pub fn serialize(result: &TranscriptionResult, format: Format) -> Result<Artifact> {
    let content = match format {
        Format::Txt => to_txt(result),
        Format::Json => to_json(result)?,
        Format::Srt => to_srt(&result.segments)?,
        Format::Vtt => to_vtt(&result.segments)?,
        Format::Tsv => to_tsv(&result.segments)?,
    };

    Ok(Artifact { format, content })
}

/// Full transcript text, verbatim.
pub fn to_txt(result: &TranscriptionResult) -> String {
    result.text.clone()
}

/// Pretty-printed JSON encoding of the whole result.
pub fn to_json(result: &TranscriptionResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// SubRip: 1-indexed cues, comma millisecond separator, blank line after
/// every cue. Empty input yields an empty file.
pub fn to_srt(segments: &[Segment]) -> Result<String> {
    segments
        .iter()
        .zip(1..)
        .map(|(s, i)| {
            Ok(format!(
                "{i}\n{} --> {}\n{}\n\n",
                timecode_millis(s.start, MillisSeparator::Comma)?,
                timecode_millis(s.end, MillisSeparator::Comma)?,
                s.text
            ))
        })
        .collect()
}

/// WebVTT: literal `WEBVTT` header, dot millisecond separator, no cue
/// identifiers.
pub fn to_vtt(segments: &[Segment]) -> Result<String> {
    let cues: String = segments
        .iter()
        .map(|s| {
            Ok(format!(
                "{} --> {}\n{}\n\n",
                timecode_millis(s.start, MillisSeparator::Dot)?,
                timecode_millis(s.end, MillisSeparator::Dot)?,
                s.text
            ))
        })
        .collect::<Result<String>>()?;

    Ok(format!("WEBVTT\n\n{cues}"))
}

/// Tab-separated values with whole-second timecodes. Embedded tabs and
/// newlines in text are escaped to keep the grid intact; all other
/// characters pass through untouched so plain text round-trips exactly.
pub fn to_tsv(segments: &[Segment]) -> Result<String> {
    let rows: String = segments
        .iter()
        .map(|s| {
            Ok(format!(
                "{}\t{}\t{}\n",
                timecode(s.start)?,
                timecode(s.end)?,
                escape_tsv(&s.text)
            ))
        })
        .collect::<Result<String>>()?;

    Ok(format!("Start\tEnd\tText\n{rows}"))
}

fn escape_tsv(text: &str) -> String {
    text.replace('\t', "\\t")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
}
