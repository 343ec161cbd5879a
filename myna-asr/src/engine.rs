//! Recognition engine invocation.

use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::process::Command;

use clap::ValueEnum;
use myna_fmt::types::TranscriptionResult;
use myna_media::temp::TempDir;

use crate::error::{Error, Result};

/// Environment variable overriding the engine executable path.
pub const WHISPER_PATH_ENV: &str = "WHISPER_PATH";

const DEFAULT_PROGRAM: &str = "whisper";

/// Recognition model size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum ModelSize {
    Tiny,
    #[default]
    Base,
    Small,
    Medium,
    Large,
}

impl ModelSize {
    pub fn as_str(self) -> &'static str {
        match self {
            ModelSize::Tiny => "tiny",
            ModelSize::Base => "base",
            ModelSize::Small => "small",
            ModelSize::Medium => "medium",
            ModelSize::Large => "large",
        }
    }
}

/// Recognition task: transcribe in the source language, or translate to
/// English.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Task {
    #[default]
    Transcribe,
    Translate,
}

impl Task {
    pub fn as_str(self) -> &'static str {
        match self {
            Task::Transcribe => "transcribe",
            Task::Translate => "translate",
        }
    }
}

/// Options for one recognition run.
#[derive(Clone, Debug, Default)]
pub struct TranscribeOptions {
    pub model: ModelSize,
    /// Language hint, e.g. "en"; the engine auto-detects when absent
    pub language: Option<String>,
    pub task: Task,
}

/// Handle to the external recognition engine executable.
#[derive(Clone, Debug)]
pub struct WhisperCli {
    program: PathBuf,
}

impl WhisperCli {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Resolve the engine from `WHISPER_PATH`, falling back to `whisper` on
    /// the search path.
    pub fn from_env() -> Self {
        let program = std::env::var_os(WHISPER_PATH_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PROGRAM));
        Self { program }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Run the engine on a local audio file and parse its JSON transcript.
    ///
    /// Blocking until the engine finishes. The engine writes into a scoped
    /// temp directory removed on every exit path.
    pub fn transcribe(
        &self,
        audio: &Path,
        options: &TranscribeOptions,
    ) -> Result<TranscriptionResult> {
        let out_dir = TempDir::new()?;
        let args = build_args(audio, out_dir.path(), options);

        tracing::debug!(program = %self.program.display(), ?args, "invoking recognition engine");

        let output = Command::new(&self.program).args(&args).output()?;
        if !output.status.success() {
            return Err(Error::RecognitionFailed(
                String::from_utf8_lossy(&output.stderr).into_owned(),
            ));
        }

        let stem = audio.file_stem().unwrap_or(OsStr::new("audio"));
        let transcript_path = out_dir.path().join(stem).with_extension("json");
        if !transcript_path.exists() {
            return Err(Error::MissingTranscript {
                path: transcript_path,
            });
        }

        let raw = std::fs::read_to_string(&transcript_path)?;
        let value: serde_json::Value = serde_json::from_str(&raw)?;
        Ok(TranscriptionResult::from_value(&value)?)
    }

    /// Check that the engine is runnable at all.
    pub fn probe(&self) -> Result<()> {
        let output = Command::new(&self.program).arg("--help").output()?;
        if !output.status.success() {
            return Err(Error::RecognitionFailed(
                String::from_utf8_lossy(&output.stderr).into_owned(),
            ));
        }
        Ok(())
    }
}

fn build_args(audio: &Path, out_dir: &Path, options: &TranscribeOptions) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![audio.into()];

    args.extend(["--model".into(), options.model.as_str().into()]);
    if let Some(language) = &options.language {
        args.extend(["--language".into(), language.into()]);
    }
    args.extend(["--task".into(), options.task.as_str().into()]);
    args.extend(["--output_format".into(), "json".into()]);
    args.extend(["--output_dir".into(), out_dir.into()]);

    args
}
