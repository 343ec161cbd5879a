//! Myna: audio extraction and speech-to-text transcription tools.

pub mod check;
pub mod cli;
pub mod extract;
pub mod transcribe;

/// Format seconds as a string with two decimal places.
pub(crate) fn format_secs(secs: f32) -> String {
    format!("{:.2}s", secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_seconds_with_two_decimals() {
        assert_eq!(format_secs(0.0), "0.00s");
        assert_eq!(format_secs(1.234), "1.23s");
        assert_eq!(format_secs(62.5), "62.50s");
    }
}
