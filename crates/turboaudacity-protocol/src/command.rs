//! Macro commands
//!
//! A [`Command`] is a macro name plus an ordered list of parameters. Its
//! `Display` output is exactly what goes down the pipe (without the line
//! terminator, which belongs to the transport).

use crate::error::{ProtocolError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Conversion of a Rust value into the text of a macro parameter.
///
/// Floats always carry a fractional part (`1.0`, not `1`), booleans are
/// written `True`/`False`, and everything else uses its plain display form.
pub trait MacroValue {
    /// Render the value as it appears between the quotes of `Key="..."`.
    fn to_macro_value(&self) -> String;
}

impl MacroValue for f64 {
    fn to_macro_value(&self) -> String {
        // Debug keeps the trailing `.0` on whole numbers
        format!("{:?}", self)
    }
}

impl MacroValue for f32 {
    fn to_macro_value(&self) -> String {
        format!("{:?}", self)
    }
}

impl MacroValue for bool {
    fn to_macro_value(&self) -> String {
        let text = if *self { "True" } else { "False" };
        text.to_string()
    }
}

macro_rules! display_value {
    ($($ty:ty),+) => {
        $(
            impl MacroValue for $ty {
                fn to_macro_value(&self) -> String {
                    self.to_string()
                }
            }
        )+
    };
}

display_value!(i8, i16, i32, i64, u8, u16, u32, u64, usize, str, String);

impl MacroValue for Path {
    fn to_macro_value(&self) -> String {
        self.to_string_lossy().into_owned()
    }
}

impl MacroValue for PathBuf {
    fn to_macro_value(&self) -> String {
        self.as_path().to_macro_value()
    }
}

impl<T: MacroValue + ?Sized> MacroValue for &T {
    fn to_macro_value(&self) -> String {
        (**self).to_macro_value()
    }
}

/// A single `Key="value"` pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Param {
    /// Parameter name as the macro expects it (case matters)
    pub key: String,

    /// Already formatted value
    pub value: String,
}

/// A macro invocation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Command {
    name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    params: Vec<Param>,
}

impl Command {
    /// Create a command with no parameters
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: Vec::new(),
        }
    }

    /// Append a parameter
    pub fn param(mut self, key: impl Into<String>, value: impl MacroValue) -> Self {
        self.params.push(Param {
            key: key.into(),
            value: value.to_macro_value(),
        });
        self
    }

    /// Append a parameter only when a value is present
    pub fn param_opt<V: MacroValue>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.param(key, value),
            None => self,
        }
    }

    /// Macro name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameters in the order they will be written
    pub fn params(&self) -> &[Param] {
        &self.params
    }

    /// Look up a parameter value by key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_str())
    }

    /// Check that the command can be written on a single line of the grammar.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError::InvalidName`], [`ProtocolError::InvalidKey`]
    /// or [`ProtocolError::UnencodableValue`] for the first offending part.
    pub fn validate(&self) -> Result<()> {
        let name = self.name.trim();
        if name.is_empty() || name.contains([':', '"', '\r', '\n']) {
            return Err(ProtocolError::InvalidName(self.name.clone()));
        }

        for param in &self.params {
            if param.key.is_empty()
                || param
                    .key
                    .chars()
                    .any(|c| c.is_whitespace() || c == '=' || c == '"')
            {
                return Err(ProtocolError::InvalidKey {
                    command: self.name.clone(),
                    key: param.key.clone(),
                });
            }
            if param.value.contains(['"', '\r', '\n']) {
                return Err(ProtocolError::UnencodableValue {
                    key: param.key.clone(),
                    value: param.value.clone(),
                });
            }
        }

        Ok(())
    }

    /// Validate and render the wire form
    pub fn to_wire(&self) -> Result<String> {
        self.validate()?;
        Ok(self.to_string())
    }

    /// Macro name of a raw command line (everything before the first `:`)
    pub fn name_of(line: &str) -> &str {
        line.split_once(':').map_or(line, |(name, _)| name).trim()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            let sep = if i == 0 { ": " } else { " " };
            write!(f, "{}{}=\"{}\"", sep, param.key, param.value)?;
        }
        Ok(())
    }
}

impl FromStr for Command {
    type Err = ProtocolError;

    /// Parse a macro line such as the ones found in Audacity `.txt` macro files.
    ///
    /// Values may be quoted or bare; bare values end at the next whitespace.
    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (name, mut rest) = match line.split_once(':') {
            Some((name, rest)) => (name.trim(), rest),
            None => (line, ""),
        };

        let mut command = Command::new(name);

        loop {
            rest = rest.trim_start();
            if rest.is_empty() {
                break;
            }

            let (key, after_key) = rest.split_once('=').ok_or_else(|| {
                ProtocolError::MalformedCommand(format!("expected `Key=value` in {:?}", line))
            })?;

            let (value, remainder) = match after_key.strip_prefix('"') {
                Some(quoted) => quoted.split_once('"').ok_or_else(|| {
                    ProtocolError::MalformedCommand(format!(
                        "unterminated value for {} in {:?}",
                        key.trim(),
                        line
                    ))
                })?,
                None => after_key
                    .split_once(char::is_whitespace)
                    .unwrap_or((after_key, "")),
            };

            command.params.push(Param {
                key: key.trim().to_string(),
                value: value.to_string(),
            });
            rest = remainder;
        }

        command.validate()?;
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_bare_command_has_no_colon() {
        assert_eq!(Command::new("New").to_string(), "New");
    }

    #[test]
    fn test_params_keep_insertion_order() {
        let command = Command::new("Noise")
            .param("Type", "Pink")
            .param("Amplitude", 0.8);
        assert_eq!(command.to_string(), r#"Noise: Type="Pink" Amplitude="0.8""#);
    }

    #[rstest]
    #[case(1.0, "1.0")]
    #[case(0.5, "0.5")]
    #[case(-12.0, "-12.0")]
    #[case(440.0, "440.0")]
    fn test_float_values_keep_fraction(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(value.to_macro_value(), expected);
    }

    #[test]
    fn test_bool_and_path_values() {
        assert_eq!(true.to_macro_value(), "True");
        assert_eq!(false.to_macro_value(), "False");
        assert_eq!(
            PathBuf::from("/tmp/take one.aup3").to_macro_value(),
            "/tmp/take one.aup3"
        );
    }

    #[test]
    fn test_param_opt_skips_none() {
        let command = Command::new("SelectTime")
            .param_opt("Start", Some(1.0))
            .param_opt::<f64>("End", None);
        assert_eq!(command.to_string(), r#"SelectTime: Start="1.0""#);
    }

    #[test]
    fn test_validate_rejects_quotes_in_values() {
        let command = Command::new("Message").param("Text", r#"say "hi""#);
        assert_eq!(
            command.validate(),
            Err(ProtocolError::UnencodableValue {
                key: "Text".to_string(),
                value: r#"say "hi""#.to_string(),
            })
        );
    }

    #[test]
    fn test_validate_rejects_newlines_and_bad_names() {
        assert!(Command::new("Message").param("Text", "a\nb").validate().is_err());
        assert!(Command::new("").validate().is_err());
        assert!(Command::new("Bad: Name").validate().is_err());
        assert!(Command::new("Ok").param("Two Words", 1).validate().is_err());
    }

    #[test]
    fn test_names_with_spaces_are_valid() {
        let command = Command::new("Left at Playback Position");
        assert!(command.validate().is_ok());
        assert_eq!(command.to_wire().unwrap(), "Left at Playback Position");
    }

    #[test]
    fn test_parse_macro_line() {
        let command: Command = r#"Tone: Frequency="440.0" Amplitude=0.8 Waveform="Square, no alias""#
            .parse()
            .unwrap();
        assert_eq!(command.name(), "Tone");
        assert_eq!(command.get("Frequency"), Some("440.0"));
        assert_eq!(command.get("Amplitude"), Some("0.8"));
        assert_eq!(command.get("Waveform"), Some("Square, no alias"));
    }

    #[test]
    fn test_parse_rejects_unterminated_quote() {
        let err = r#"Message: Text="oops"#.parse::<Command>().unwrap_err();
        assert!(matches!(err, ProtocolError::MalformedCommand(_)));
    }

    #[test]
    fn test_name_of_raw_line() {
        assert_eq!(Command::name_of(r#"SelectTime: Start="1.0""#), "SelectTime");
        assert_eq!(Command::name_of("Undo"), "Undo");
    }
}
