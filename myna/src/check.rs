//! Check subcommand - verify the external tools are installed.

use color_eyre::Section;
use eyre::{Context, Result};
use myna_asr::engine::WhisperCli;
use myna_media::extract::Extractor;

/// CLI arguments for the tool check (none).
#[derive(clap::Args, Debug)]
pub struct Args {}

pub fn execute(_args: Args) -> Result<()> {
    let extractor = Extractor::from_env();
    let version = extractor
        .version()
        .wrap_err("encoder is not available")
        .with_suggestion(|| {
            format!(
                "install ffmpeg and ensure it is on PATH, or point {} at the executable",
                myna_media::extract::FFMPEG_PATH_ENV
            )
        })?;
    println!("encoder: {version}");

    let engine = WhisperCli::from_env();
    engine
        .probe()
        .wrap_err("recognition engine is not available")
        .with_suggestion(|| {
            format!(
                "install openai-whisper and ensure `whisper` is on PATH, or point {} at the executable",
                myna_asr::engine::WHISPER_PATH_ENV
            )
        })?;
    println!("recognition engine: {}", engine.program().display());

    Ok(())
}
