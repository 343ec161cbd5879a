//! Integration tests for the myna CLI.
//!
//! These drive `run_cli` end to end and need the external tools installed,
//! so they are ignored by default.

use std::path::Path;

use clap::Parser;
use myna::cli::{Cli, run_cli};

fn test_dir(name: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join("myna-test").join(name);
    if dir.exists() {
        std::fs::remove_dir_all(&dir).ok();
    }
    std::fs::create_dir_all(&dir).expect("failed to create test dir");
    dir
}

/// One second of a 440 Hz tone, 16 kHz mono.
fn write_test_tone(path: &Path) {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 16_000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(path, spec).expect("failed to create wav");
    for t in 0..16_000 {
        let sample = (t as f32 / 16_000.0 * 440.0 * std::f32::consts::TAU).sin();
        writer
            .write_sample((sample * i16::MAX as f32 * 0.5) as i16)
            .expect("failed to write sample");
    }
    writer.finalize().expect("failed to finalize wav");
}

#[test]
#[ignore = "requires ffmpeg on PATH"]
fn extract_produces_audio_file() {
    let dir = test_dir("extract");
    let wav_path = dir.join("tone.wav");
    write_test_tone(&wav_path);

    let out_path = dir.join("tone.mp3");
    let cli = Cli::parse_from([
        "myna",
        "extract",
        wav_path.to_str().unwrap(),
        "-o",
        out_path.to_str().unwrap(),
    ]);

    run_cli(cli).expect("extraction failed");

    assert!(out_path.exists(), "no output at {}", out_path.display());
    assert!(std::fs::metadata(&out_path).unwrap().len() > 0);
}

#[test]
#[ignore = "requires ffmpeg and whisper on PATH"]
fn transcribe_writes_requested_artifacts() {
    let dir = test_dir("transcribe");
    let wav_path = dir.join("tone.wav");
    write_test_tone(&wav_path);

    let cli = Cli::parse_from([
        "myna",
        "transcribe",
        wav_path.to_str().unwrap(),
        "-f",
        "txt,srt,vtt",
        "-m",
        "tiny",
    ]);

    run_cli(cli).expect("transcription failed");

    for ext in ["txt", "srt", "vtt"] {
        let artifact = dir.join("tone").with_extension(ext);
        assert!(artifact.exists(), "missing artifact: {}", artifact.display());
    }

    // A pure tone carries no speech, but the VTT header must still be there
    let vtt = std::fs::read_to_string(dir.join("tone.vtt")).unwrap();
    assert!(vtt.starts_with("WEBVTT\n\n"));
}
