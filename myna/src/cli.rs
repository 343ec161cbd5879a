//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use eyre::Result;

#[derive(Debug, Parser)]
#[command(name = "myna")]
#[command(about = "Audio extraction and transcription tools")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract the audio track from a media file
    Extract(crate::extract::Args),

    /// Transcribe an audio file into text and subtitle formats
    Transcribe(crate::transcribe::Args),

    /// Verify that the external encoder and recognition engine are installed
    Check(crate::check::Args),
}

/// Execute CLI command - separated for testing.
pub fn run_cli(cli: Cli) -> Result<()> {
    tracing::debug!(?cli, "parsed arguments");

    match cli.command {
        Commands::Extract(args) => crate::extract::execute(args.try_into()?),
        Commands::Transcribe(args) => crate::transcribe::execute(args.try_into()?),
        Commands::Check(args) => crate::check::execute(args),
    }
}
