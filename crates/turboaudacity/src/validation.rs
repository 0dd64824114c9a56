//! Argument validation for macro parameters
//!
//! Every check runs before a command is formatted, so an out-of-range value
//! never reaches Audacity. Audacity itself ignores bad parameters silently or
//! opens a modal dialog, neither of which the pipe reports.
//!
//! # Examples
//!
//! ```rust
//! use turboaudacity::validation::in_range;
//!
//! assert!(in_range("amplitude", 0.5, 0.0..=1.0).is_ok());
//! assert!(in_range("amplitude", 1.5, 0.0..=1.0).is_err());
//! ```

use crate::error::{Error, Result};
use std::fmt::Debug;
use std::ops::RangeInclusive;
use std::path::Path;
use tracing::warn;

fn reject(argument: &'static str, reason: String) -> Error {
    warn!(argument, %reason, "Rejected macro argument");
    Error::invalid(argument, reason)
}

/// Require a finite float.
pub fn finite(argument: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(reject(argument, format!("must be a finite number, got {:?}", value)))
    }
}

/// Require `value` to lie within `range`, bounds included.
///
/// NaN is never in range.
pub fn in_range<T>(argument: &'static str, value: T, range: RangeInclusive<T>) -> Result<T>
where
    T: PartialOrd + Debug + Copy,
{
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(reject(
            argument,
            format!(
                "must be between {:?} and {:?}, got {:?}",
                range.start(),
                range.end(),
                value
            ),
        ))
    }
}

/// Require `value >= min`.
pub fn at_least<T>(argument: &'static str, value: T, min: T) -> Result<T>
where
    T: PartialOrd + Debug + Copy,
{
    if value >= min {
        Ok(value)
    } else {
        Err(reject(argument, format!("must be at least {:?}, got {:?}", min, value)))
    }
}

/// Require `value > min`.
pub fn greater_than<T>(argument: &'static str, value: T, min: T) -> Result<T>
where
    T: PartialOrd + Debug + Copy,
{
    if value > min {
        Ok(value)
    } else {
        Err(reject(argument, format!("must be greater than {:?}, got {:?}", min, value)))
    }
}

/// Require `value <= max`.
pub fn at_most<T>(argument: &'static str, value: T, max: T) -> Result<T>
where
    T: PartialOrd + Debug + Copy,
{
    if value <= max {
        Ok(value)
    } else {
        Err(reject(argument, format!("must be at most {:?}, got {:?}", max, value)))
    }
}

/// Require a finite `value > min`.
pub fn finite_above(argument: &'static str, value: f64, min: f64) -> Result<f64> {
    greater_than(argument, finite(argument, value)?, min)
}

/// Require a finite `value >= min`.
pub fn finite_at_least(argument: &'static str, value: f64, min: f64) -> Result<f64> {
    at_least(argument, finite(argument, value)?, min)
}

/// Require a non-empty path that fits inside a quoted macro value.
pub fn filename(argument: &'static str, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(reject(argument, "must not be empty".to_string()));
    }
    text(argument, &path.to_string_lossy())
}

/// Require an existing file.
pub fn file_exists(argument: &'static str, path: &Path) -> Result<()> {
    filename(argument, path)?;
    if !path.exists() {
        warn!(argument, path = %path.display(), "File not found");
        return Err(Error::FileNotFound(path.to_path_buf()));
    }
    Ok(())
}

/// Require text that fits inside a quoted macro value.
pub fn text(argument: &'static str, value: &str) -> Result<()> {
    if let Some(bad) = value.chars().find(|c| matches!(c, '"' | '\r' | '\n')) {
        return Err(reject(argument, format!("cannot contain {:?}", bad)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, true)]
    #[case(1.0, true)]
    #[case(0.25, true)]
    #[case(-0.01, false)]
    #[case(1.01, false)]
    #[case(f64::NAN, false)]
    fn test_in_range(#[case] value: f64, #[case] ok: bool) {
        assert_eq!(in_range("amplitude", value, 0.0..=1.0).is_ok(), ok);
    }

    #[test]
    fn test_in_range_message() {
        let err = in_range("amplitude", 2.0, 0.0..=1.0).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid amplitude argument: must be between 0.0 and 1.0, got 2.0"
        );
    }

    #[rstest]
    #[case(f64::INFINITY)]
    #[case(f64::NEG_INFINITY)]
    #[case(f64::NAN)]
    fn test_finite_rejects(#[case] value: f64) {
        assert!(finite("gain", value).is_err());
        assert!(finite_above("frequency", value, 0.0).is_err());
        assert!(finite_at_least("delay", value, 0.0).is_err());
    }

    #[test]
    fn test_bounds() {
        assert!(at_least("count", 1u32, 1).is_ok());
        assert!(at_least("count", 0u32, 1).is_err());
        assert!(greater_than("ratio", 0.0, 0.0).is_err());
        assert!(greater_than("ratio", 0.1, 0.0).is_ok());
        assert!(at_most("peak_level", 0.0, 0.0).is_ok());
        assert!(at_most("peak_level", 0.5, 0.0).is_err());
    }

    #[test]
    fn test_file_checks() {
        let file = tempfile::NamedTempFile::new().unwrap();
        assert!(file_exists("filename", file.path()).is_ok());

        let missing = file.path().with_extension("missing");
        assert!(matches!(
            file_exists("filename", &missing),
            Err(Error::FileNotFound(path)) if path == missing
        ));
        assert!(filename("filename", Path::new("")).is_err());
    }

    #[rstest]
    #[case("/home/al/song.aup3", true)]
    #[case("", false)]
    #[case("/home/al/my \"best\" take.aup3", false)]
    #[case("/home/al/two\nlines.wav", false)]
    fn test_filename(#[case] path: &str, #[case] ok: bool) {
        let result = filename("filename", Path::new(path));
        assert_eq!(result.is_ok(), ok);
        if !ok {
            assert!(matches!(result, Err(Error::InvalidArgument { argument: "filename", .. })));
        }
    }

    #[rstest]
    #[case("Sound ##1", true)]
    #[case("say \"hi\"", false)]
    #[case("two\nlines", false)]
    fn test_text(#[case] value: &str, #[case] ok: bool) {
        assert_eq!(text("text", value).is_ok(), ok);
    }
}
