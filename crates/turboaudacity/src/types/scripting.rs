//! Scripting macros: selection, queries and messages

use super::ToCommand;
use crate::error::{Error, Result};
use crate::validation::{self, finite, finite_at_least};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use turboaudacity_protocol::{Command, InfoFormat, InfoType, RelativeTo};

/// `SelectTime`: change the time selection.
///
/// Only the fields that are set are sent; Audacity leaves the others as they
/// are.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct SelectTime {
    /// Start of the selection in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<f64>,
    /// End of the selection in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<f64>,
    /// What `start` and `end` are measured from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relative_to: Option<RelativeTo>,
}

impl SelectTime {
    /// Select from `start` to `end`.
    pub fn new(start: f64, end: f64) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
            relative_to: None,
        }
    }

    /// Create a builder.
    pub fn builder() -> SelectTimeBuilder {
        SelectTimeBuilder::default()
    }
}

impl ToCommand for SelectTime {
    fn to_command(&self) -> Result<Command> {
        if let Some(start) = self.start {
            finite("start", start)?;
        }
        if let Some(end) = self.end {
            finite("end", end)?;
        }
        if let (Some(start), Some(end)) = (self.start, self.end)
            && start > end
        {
            return Err(Error::invalid(
                "end",
                format!("must not be before start ({:?} > {:?})", start, end),
            ));
        }

        Ok(Command::new("SelectTime")
            .param_opt("Start", self.start)
            .param_opt("End", self.end)
            .param_opt("RelativeTo", self.relative_to))
    }
}

/// `SelectFrequencies`: change the spectral selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into, strip_option), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct SelectFrequencies {
    /// Upper bound in Hz
    #[serde(skip_serializing_if = "Option::is_none")]
    pub high: Option<f64>,
    /// Lower bound in Hz
    #[serde(skip_serializing_if = "Option::is_none")]
    pub low: Option<f64>,
}

impl SelectFrequencies {
    /// Select from `low` to `high`.
    pub fn new(low: f64, high: f64) -> Self {
        Self {
            high: Some(high),
            low: Some(low),
        }
    }

    /// Create a builder.
    pub fn builder() -> SelectFrequenciesBuilder {
        SelectFrequenciesBuilder::default()
    }
}

impl ToCommand for SelectFrequencies {
    fn to_command(&self) -> Result<Command> {
        if let Some(high) = self.high {
            finite_at_least("high", high, 0.0)?;
        }
        if let Some(low) = self.low {
            finite_at_least("low", low, 0.0)?;
        }
        if let (Some(high), Some(low)) = (self.high, self.low)
            && low > high
        {
            return Err(Error::invalid(
                "low",
                format!("must not exceed high ({:?} > {:?})", low, high),
            ));
        }

        Ok(Command::new("SelectFrequencies")
            .param_opt("High", self.high)
            .param_opt("Low", self.low))
    }
}

/// `GetInfo`: ask Audacity about its state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct GetInfo {
    /// What to report
    pub info_type: InfoType,
    /// Output format
    pub format: InfoFormat,
}

impl Default for GetInfo {
    fn default() -> Self {
        Self {
            info_type: InfoType::Commands,
            format: InfoFormat::Json,
        }
    }
}

impl GetInfo {
    /// Query `info_type` as JSON.
    pub fn new(info_type: InfoType) -> Self {
        Self {
            info_type,
            ..Default::default()
        }
    }

    /// Create a builder.
    pub fn builder() -> GetInfoBuilder {
        GetInfoBuilder::default()
    }
}

impl ToCommand for GetInfo {
    fn to_command(&self) -> Result<Command> {
        Ok(Command::new("GetInfo")
            .param("Type", self.info_type)
            .param("Format", self.format))
    }
}

/// `Message`: echo text back through the pipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct Message {
    /// Text to echo
    pub text: String,
}

impl Default for Message {
    fn default() -> Self {
        Self {
            text: "Some message".to_string(),
        }
    }
}

impl Message {
    /// Echo `text`.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Create a builder.
    pub fn builder() -> MessageBuilder {
        MessageBuilder::default()
    }
}

impl ToCommand for Message {
    fn to_command(&self) -> Result<Command> {
        validation::text("text", &self.text)?;
        Ok(Command::new("Message").param("Text", self.text.as_str()))
    }
}
