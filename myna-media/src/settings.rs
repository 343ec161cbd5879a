//! Encoder settings and output formats.
//!
//! Settings are an explicit immutable struct passed by argument; nothing
//! here is shared or mutated across requests.

use clap::ValueEnum;

/// Hardware acceleration backend for the encoder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum HardwareAccel {
    #[default]
    None,
    Nvenc,
    Amf,
    Qsv,
}

impl HardwareAccel {
    /// Encoder codec flag value, if this backend selects one.
    pub fn codec(self) -> Option<&'static str> {
        match self {
            HardwareAccel::None => None,
            HardwareAccel::Nvenc => Some("h264_nvenc"),
            HardwareAccel::Amf => Some("h264_amf"),
            HardwareAccel::Qsv => Some("h264_qsv"),
        }
    }
}

/// Encoding speed/quality preset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    Ultrafast,
    Superfast,
    Veryfast,
    Faster,
    Fast,
    #[default]
    Medium,
    Slow,
    Slower,
    Veryslow,
}

impl Preset {
    pub fn as_str(self) -> &'static str {
        match self {
            Preset::Ultrafast => "ultrafast",
            Preset::Superfast => "superfast",
            Preset::Veryfast => "veryfast",
            Preset::Faster => "faster",
            Preset::Fast => "fast",
            Preset::Medium => "medium",
            Preset::Slow => "slow",
            Preset::Slower => "slower",
            Preset::Veryslow => "veryslow",
        }
    }
}

/// Output audio container/codec choice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum AudioFormat {
    #[default]
    Mp3,
    Wav,
    Aac,
    Ogg,
}

impl AudioFormat {
    /// File extension for the container.
    pub fn as_str(self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "mp3",
            AudioFormat::Wav => "wav",
            AudioFormat::Aac => "aac",
            AudioFormat::Ogg => "ogg",
        }
    }

    /// Encoder codec name passed to `-acodec`.
    pub fn codec(self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "libmp3lame",
            AudioFormat::Wav => "pcm_s16le",
            AudioFormat::Aac => "aac",
            AudioFormat::Ogg => "libvorbis",
        }
    }

    /// MIME type for the encoded audio.
    pub fn mime_type(self) -> &'static str {
        match self {
            AudioFormat::Mp3 => "audio/mpeg",
            AudioFormat::Wav => "audio/wav",
            AudioFormat::Aac => "audio/aac",
            AudioFormat::Ogg => "audio/ogg",
        }
    }
}

impl std::fmt::Display for AudioFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable settings for one extraction run.
///
/// `None` for bitrate or sample rate means the encoder's own default.
#[derive(Clone, Debug, Default)]
pub struct ExtractSettings {
    pub hardware_accel: HardwareAccel,
    /// Encoder thread count, 0 lets the encoder decide
    pub thread_count: u32,
    pub preset: Preset,
    /// e.g. "192k"
    pub bitrate: Option<String>,
    /// e.g. "44100"
    pub sample_rate: Option<String>,
}
