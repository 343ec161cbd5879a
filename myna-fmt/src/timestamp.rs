//! Timecode formatting for subtitle output.
//!
//! Converts non-negative seconds into fixed-width timecodes. Hours are
//! zero-padded to at least two digits but never truncated, so inputs past
//! 100 hours render with as many digits as they need.

use crate::error::{Error, Result};

/// Separator between seconds and milliseconds.
///
/// SRT uses a comma, WebVTT uses a dot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MillisSeparator {
    Comma,
    Dot,
}

impl MillisSeparator {
    fn as_char(self) -> char {
        match self {
            MillisSeparator::Comma => ',',
            MillisSeparator::Dot => '.',
        }
    }
}

/// Format seconds as `HH:MM:SS`, dropping the fractional part.
///
/// Whole-second precision only; use [`timecode_millis`] wherever sub-second
/// resolution matters.
pub fn timecode(secs: f64) -> Result<String> {
    let total = validate(secs)? as u64;

    let h = total / 3600;
    let m = total % 3600 / 60;
    let s = total % 60;

    Ok(format!("{h:02}:{m:02}:{s:02}"))
}

/// Format seconds as `HH:MM:SS,mmm` or `HH:MM:SS.mmm` with true
/// milliseconds, rounded to the nearest millisecond.
pub fn timecode_millis(secs: f64, sep: MillisSeparator) -> Result<String> {
    let total_ms = (validate(secs)? * 1000.0).round() as u64;

    let ms = total_ms % 1000;
    let total = total_ms / 1000;
    let h = total / 3600;
    let m = total % 3600 / 60;
    let s = total % 60;

    Ok(format!(
        "{h:02}:{m:02}:{s:02}{sep}{ms:03}",
        sep = sep.as_char()
    ))
}

fn validate(secs: f64) -> Result<f64> {
    if !secs.is_finite() || secs < 0.0 {
        return Err(Error::InvalidTimestamp(secs));
    }
    Ok(secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_zero() {
        assert_eq!(timecode(0.0).unwrap(), "00:00:00");
        assert_eq!(
            timecode_millis(0.0, MillisSeparator::Comma).unwrap(),
            "00:00:00,000"
        );
        assert_eq!(
            timecode_millis(0.0, MillisSeparator::Dot).unwrap(),
            "00:00:00.000"
        );
    }

    #[test]
    fn carries_true_milliseconds() {
        assert_eq!(
            timecode_millis(3661.5, MillisSeparator::Comma).unwrap(),
            "01:01:01,500"
        );
        assert_eq!(
            timecode_millis(2.5, MillisSeparator::Dot).unwrap(),
            "00:00:02.500"
        );
    }

    #[test]
    fn truncates_fractional_seconds() {
        assert_eq!(timecode(3661.9).unwrap(), "01:01:01");
    }

    #[test]
    fn renders_beyond_one_hundred_hours() {
        assert_eq!(timecode(360_000.0).unwrap(), "100:00:00");
        assert_eq!(
            timecode_millis(360_000.25, MillisSeparator::Dot).unwrap(),
            "100:00:00.250"
        );
    }

    #[test]
    fn rejects_negative_seconds() {
        assert!(matches!(
            timecode(-1.0).unwrap_err(),
            Error::InvalidTimestamp(_)
        ));
        assert!(matches!(
            timecode_millis(-0.5, MillisSeparator::Comma).unwrap_err(),
            Error::InvalidTimestamp(_)
        ));
    }

    #[test]
    fn rejects_non_finite_seconds() {
        assert!(timecode(f64::NAN).is_err());
        assert!(timecode_millis(f64::INFINITY, MillisSeparator::Dot).is_err());
    }
}
