//! Transcribe subcommand - speech-to-text with multi-format output.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Instant;

use eyre::{Context, Result};
use hound::WavReader;
use myna_asr::engine::{ModelSize, Task, TranscribeOptions, WhisperCli};
use myna_fmt::serialize::{Format, serialize};

use crate::format_secs;

/// CLI arguments for transcription.
#[derive(clap::Args, Debug)]
pub struct Args {
    /// Path to input audio file
    pub path: PathBuf,

    /// Output formats to generate (comma-separated: txt, json, srt, vtt, tsv)
    #[arg(
        short,
        long = "formats",
        value_delimiter = ',',
        default_value = "txt",
        value_parser = parse_format
    )]
    pub formats: Vec<Format>,

    /// Output directory (default: alongside the input file)
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Recognition model size
    #[arg(short, long, value_enum, default_value_t = ModelSize::Base)]
    pub model: ModelSize,

    /// Language hint, e.g. "en" (auto-detected when omitted)
    #[arg(short, long)]
    pub language: Option<String>,

    /// Task type ("translate" produces English output)
    #[arg(long, value_enum, default_value_t = Task::Transcribe)]
    pub task: Task,

    /// Print the transcript text to stdout
    #[arg(long)]
    pub preview: bool,
}

fn parse_format(s: &str) -> std::result::Result<Format, myna_fmt::error::Error> {
    s.parse()
}

/// Resolved configuration for transcription.
#[derive(Debug)]
pub struct Config {
    pub path: PathBuf,
    pub formats: Vec<Format>,
    pub output_dir: PathBuf,
    pub options: TranscribeOptions,
    pub preview: bool,
}

impl TryFrom<Args> for Config {
    type Error = eyre::Error;

    fn try_from(args: Args) -> Result<Self> {
        let output_dir = args
            .output_dir
            .or_else(|| args.path.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| PathBuf::from("."));

        Ok(Self {
            path: args.path,
            formats: args.formats,
            output_dir,
            options: TranscribeOptions {
                model: args.model,
                language: args.language,
                task: args.task,
            },
            preview: args.preview,
        })
    }
}

pub fn execute(config: Config) -> Result<()> {
    if config
        .path
        .extension()
        .is_some_and(|e| e.eq_ignore_ascii_case("wav"))
    {
        log_wav_spec(&config.path)?;
    }

    let engine = WhisperCli::from_env();

    // The engine offers no progress signal; a timed log pair is the honest
    // substitute for a progress bar
    tracing::info!(
        input = ?config.path.display(),
        model = config.options.model.as_str(),
        task = config.options.task.as_str(),
        "transcribing, this may take a while"
    );

    let s = Instant::now();

    let result = engine
        .transcribe(&config.path, &config.options)
        .wrap_err("transcription failed")?;

    let d = s.elapsed();
    tracing::info!(
        duration = %format_secs(d.as_secs_f32()),
        segments = result.segments.len(),
        language = result.language.as_deref().unwrap_or("unknown"),
        "transcription completed"
    );

    std::fs::create_dir_all(&config.output_dir).wrap_err_with(|| {
        format!(
            "failed to create output directory: {}",
            config.output_dir.display()
        )
    })?;

    let stem = config.path.file_stem().unwrap_or(OsStr::new("transcription"));

    for format in &config.formats {
        let artifact = serialize(&result, *format)
            .wrap_err_with(|| format!("failed to serialize {format} output"))?;

        let path = config.output_dir.join(stem).with_extension(artifact.extension());
        std::fs::write(&path, artifact.content.as_bytes())
            .wrap_err_with(|| format!("failed to write artifact: {}", path.display()))?;

        tracing::info!(
            path = ?path.display(),
            mime = artifact.mime_type(),
            "artifact written"
        );
    }

    if config.preview {
        print!("{}", result.text);
    }

    Ok(())
}

fn log_wav_spec(path: &Path) -> Result<()> {
    let reader = WavReader::open(path)
        .wrap_err_with(|| format!("failed to open audio: {}", path.display()))?;

    let spec = reader.spec();
    let duration = reader.duration() as f32 / spec.sample_rate as f32;

    tracing::debug!(
        path = %path.display(),
        duration = %format_secs(duration),
        sample_rate = spec.sample_rate,
        channels = spec.channels,
        bits_per_sample = spec.bits_per_sample,
        "input wav spec"
    );

    Ok(())
}
