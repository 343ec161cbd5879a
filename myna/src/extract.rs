//! Extract subcommand - pull the audio track out of a media file.

use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Instant;

use eyre::{Context, Result, eyre};
use myna_media::extract::Extractor;
use myna_media::settings::{AudioFormat, ExtractSettings, HardwareAccel, Preset};
use myna_media::temp;

use crate::format_secs;

/// CLI arguments for audio extraction.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Path to input media file ("-" reads media from stdin)
    pub path: PathBuf,

    /// Output audio format
    #[arg(short, long, value_enum, default_value_t = AudioFormat::Mp3)]
    pub format: AudioFormat,

    /// Output path (default: input path with the format's extension)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub encoder: EncoderArgs,
}

/// Encoder tuning flags.
#[derive(clap::Args, Debug)]
pub struct EncoderArgs {
    /// Hardware acceleration backend
    #[arg(long, value_enum, default_value_t = HardwareAccel::None)]
    pub hw_accel: HardwareAccel,

    /// Encoder thread count (0 lets the encoder decide)
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u32).range(0..=64))]
    pub threads: u32,

    /// Encoding preset
    #[arg(long, value_enum, default_value_t = Preset::Medium)]
    pub preset: Preset,

    /// Audio bitrate, e.g. 192k (encoder default when omitted)
    #[arg(long)]
    pub bitrate: Option<String>,

    /// Sample rate in Hz, e.g. 44100 (encoder default when omitted)
    #[arg(long)]
    pub sample_rate: Option<String>,
}

/// Resolved configuration for audio extraction.
#[derive(Debug)]
pub struct Config {
    pub input: PathBuf,
    pub format: AudioFormat,
    pub output: PathBuf,
    pub settings: ExtractSettings,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        let from_stdin = args.path.as_os_str() == "-";

        let output = match args.output {
            Some(output) => output,
            None if from_stdin => {
                return Err(eyre!("--output is required when reading media from stdin"));
            }
            None => args.path.with_extension(args.format.as_str()),
        };

        Ok(Self {
            input: args.path,
            format: args.format,
            output,
            settings: ExtractSettings {
                hardware_accel: args.encoder.hw_accel,
                thread_count: args.encoder.threads,
                preset: args.encoder.preset,
                bitrate: args.encoder.bitrate,
                sample_rate: args.encoder.sample_rate,
            },
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    let extractor = Extractor::from_env();

    // Stage piped media into a scoped temp file; ffmpeg probes the container
    // from content, so the extension does not matter
    let staged;
    let input: &Path = if config.input.as_os_str() == "-" {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .wrap_err("failed to read media from stdin")?;
        staged = temp::stage_bytes(&bytes, "bin").wrap_err("failed to stage media")?;
        staged.path()
    } else {
        &config.input
    };

    tracing::info!(
        input = ?input.display(),
        format = %config.format,
        output = ?config.output.display(),
        "extracting audio"
    );

    let s = Instant::now();

    let audio = extractor
        .extract_audio(input, config.format, &config.settings)
        .wrap_err("audio extraction failed")?;

    let d = s.elapsed();
    tracing::info!(
        duration = %format_secs(d.as_secs_f32()),
        bytes = audio.len(),
        "extraction completed"
    );

    std::fs::write(&config.output, &audio)
        .wrap_err_with(|| format!("failed to write audio: {}", config.output.display()))?;

    tracing::info!(
        path = ?config.output.display(),
        mime = config.format.mime_type(),
        "audio written"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        args: Args,
    }

    fn config_from(argv: &[&str]) -> Result<Config> {
        TestCli::parse_from(argv).args.try_into()
    }

    #[test]
    fn defaults_output_beside_input() {
        let config = config_from(&["test", "clip.mp4"]).unwrap();

        assert_eq!(config.output, PathBuf::from("clip.mp3"));
        assert_eq!(config.settings.thread_count, 0);
    }

    #[test]
    fn respects_explicit_output() {
        let config = config_from(&["test", "clip.mp4", "-f", "ogg", "-o", "/tmp/a.ogg"]).unwrap();

        assert_eq!(config.format, AudioFormat::Ogg);
        assert_eq!(config.output, PathBuf::from("/tmp/a.ogg"));
    }

    #[test]
    fn stdin_requires_explicit_output() {
        assert!(config_from(&["test", "-"]).is_err());
        assert!(config_from(&["test", "-", "-o", "out.mp3"]).is_ok());
    }
}
