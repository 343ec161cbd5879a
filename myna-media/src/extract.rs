//! Audio extraction via an external encoder process.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Error, Result};
use crate::settings::{AudioFormat, ExtractSettings};
use crate::temp::TempPath;

/// Environment variable overriding the encoder executable path.
pub const FFMPEG_PATH_ENV: &str = "FFMPEG_PATH";

const DEFAULT_PROGRAM: &str = "ffmpeg";

/// Handle to the external encoder executable.
#[derive(Clone, Debug)]
pub struct Extractor {
    program: PathBuf,
}

impl Extractor {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Resolve the encoder from `FFMPEG_PATH`, falling back to `ffmpeg` on
    /// the search path.
    pub fn from_env() -> Self {
        let program = std::env::var_os(FFMPEG_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PROGRAM));
        Self { program }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Extract the audio track from `input` and return the encoded bytes.
    ///
    /// The encoder writes to a scoped temp file which is removed whether
    /// the run succeeds, the encoder fails, or reading the output errors.
    pub fn extract_audio(
        &self,
        input: &Path,
        format: AudioFormat,
        settings: &ExtractSettings,
    ) -> Result<Vec<u8>> {
        let staged_output = TempPath::with_extension(format.as_str());
        let args = build_args(input, staged_output.path(), format, settings);

        tracing::debug!(program = %self.program.display(), ?args, "invoking encoder");

        let output = Command::new(&self.program).args(&args).output()?;
        if !output.status.success() {
            return Err(Error::EncodingFailed(
                String::from_utf8_lossy(&output.stderr).into_owned(),
            ));
        }

        Ok(std::fs::read(staged_output.path())?)
    }

    /// First line of the encoder's `-version` output.
    pub fn version(&self) -> Result<String> {
        let output = Command::new(&self.program).arg("-version").output()?;
        if !output.status.success() {
            return Err(Error::EncodingFailed(
                String::from_utf8_lossy(&output.stderr).into_owned(),
            ));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        Ok(stdout.lines().next().unwrap_or_default().to_owned())
    }
}

/// Translate settings into encoder flags.
///
/// Shape: `-i <in> -vn [-c:a <hw codec>] -threads N -preset P [-b:a B]
/// [-ar R] -acodec <codec> <out>`.
fn build_args(
    input: &Path,
    output: &Path,
    format: AudioFormat,
    settings: &ExtractSettings,
) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec!["-i".into(), input.into(), "-vn".into()];

    if let Some(codec) = settings.hardware_accel.codec() {
        args.extend(["-c:a".into(), codec.into()]);
    }

    args.extend(["-threads".into(), settings.thread_count.to_string().into()]);
    args.extend(["-preset".into(), settings.preset.as_str().into()]);

    if let Some(bitrate) = &settings.bitrate {
        args.extend(["-b:a".into(), bitrate.into()]);
    }
    if let Some(rate) = &settings.sample_rate {
        args.extend(["-ar".into(), rate.into()]);
    }

    args.extend(["-acodec".into(), format.codec().into(), output.into()]);
    args
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{HardwareAccel, Preset};

    fn args_to_strings(args: &[OsString]) -> Vec<String> {
        args.iter()
            .map(|a| a.to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn builds_default_args() {
        let args = build_args(
            Path::new("in.mp4"),
            Path::new("out.mp3"),
            AudioFormat::Mp3,
            &ExtractSettings::default(),
        );

        assert_eq!(
            args_to_strings(&args),
            [
                "-i", "in.mp4", "-vn", "-threads", "0", "-preset", "medium", "-acodec",
                "libmp3lame", "out.mp3",
            ]
        );
    }

    #[test]
    fn builds_full_args() {
        let settings = ExtractSettings {
            hardware_accel: HardwareAccel::Nvenc,
            thread_count: 8,
            preset: Preset::Veryslow,
            bitrate: Some("192k".to_string()),
            sample_rate: Some("48000".to_string()),
        };

        let args = build_args(
            Path::new("in.mkv"),
            Path::new("out.wav"),
            AudioFormat::Wav,
            &settings,
        );

        assert_eq!(
            args_to_strings(&args),
            [
                "-i", "in.mkv", "-vn", "-c:a", "h264_nvenc", "-threads", "8", "-preset",
                "veryslow", "-b:a", "192k", "-ar", "48000", "-acodec", "pcm_s16le", "out.wav",
            ]
        );
    }

    #[test]
    fn hardware_backends_map_to_codecs() {
        assert_eq!(HardwareAccel::None.codec(), None);
        assert_eq!(HardwareAccel::Amf.codec(), Some("h264_amf"));
        assert_eq!(HardwareAccel::Qsv.codec(), Some("h264_qsv"));
    }

    #[test]
    fn missing_encoder_surfaces_io_error() {
        let extractor = Extractor::new("/nonexistent/encoder-binary");

        let err = extractor
            .extract_audio(
                Path::new("in.mp4"),
                AudioFormat::Mp3,
                &ExtractSettings::default(),
            )
            .unwrap_err();

        assert!(matches!(err, Error::Io(_)));
    }
}
