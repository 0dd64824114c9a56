//! Analyzers: macros that inspect audio and write labels

use super::ToCommand;
use crate::error::Result;
use crate::validation::{self, at_least, finite, finite_at_least, in_range};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use turboaudacity_protocol::{Command, LabelType, Measurement};

/// `FindClipping`: label runs of clipped samples.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct FindClipping {
    /// Clipped samples needed to start a region
    pub duty_cycle_start: u32,
    /// Unclipped samples needed to end a region
    pub duty_cycle_end: u32,
}

impl Default for FindClipping {
    fn default() -> Self {
        Self {
            duty_cycle_start: 3,
            duty_cycle_end: 3,
        }
    }
}

impl FindClipping {
    /// Create a builder.
    pub fn builder() -> FindClippingBuilder {
        FindClippingBuilder::default()
    }
}

impl ToCommand for FindClipping {
    fn to_command(&self) -> Result<Command> {
        Ok(Command::new("FindClipping")
            .param(
                "DutyCycleStart",
                at_least("duty_cycle_start", self.duty_cycle_start, 1)?,
            )
            .param(
                "DutyCycleEnd",
                at_least("duty_cycle_end", self.duty_cycle_end, 1)?,
            ))
    }
}

/// `BeatFinder`: label beats above a threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct BeatFinder {
    /// Threshold in percent
    pub threshold: u32,
}

impl Default for BeatFinder {
    fn default() -> Self {
        Self { threshold: 65 }
    }
}

impl BeatFinder {
    /// Create a builder.
    pub fn builder() -> BeatFinderBuilder {
        BeatFinderBuilder::default()
    }
}

impl ToCommand for BeatFinder {
    fn to_command(&self) -> Result<Command> {
        Ok(Command::new("BeatFinder").param("thresval", in_range("threshold", self.threshold, 0..=100)?))
    }
}

/// `LabelSounds`: label sounds separated by silence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct LabelSounds {
    /// Silence threshold in dB
    pub threshold: f64,
    /// How the level is measured
    pub measurement: Measurement,
    /// Minimum silence between sounds, in seconds
    pub min_silence_duration: f64,
    /// Minimum sound length, in seconds
    pub min_label_interval: f64,
    /// Label placement
    pub label_type: LabelType,
    /// Seconds the label starts before the sound
    pub max_leading_silence: f64,
    /// Seconds the label ends after the sound
    pub max_trailing_silence: f64,
    /// Label text; `##1` is replaced by a counter
    pub label_text: String,
}

impl Default for LabelSounds {
    fn default() -> Self {
        Self {
            threshold: -30.0,
            measurement: Measurement::Peak,
            min_silence_duration: 1.0,
            min_label_interval: 1.0,
            label_type: LabelType::BeforeSound,
            max_leading_silence: 0.0,
            max_trailing_silence: 0.0,
            label_text: "Sound ##1".to_string(),
        }
    }
}

impl LabelSounds {
    /// Create a builder.
    pub fn builder() -> LabelSoundsBuilder {
        LabelSoundsBuilder::default()
    }
}

impl ToCommand for LabelSounds {
    fn to_command(&self) -> Result<Command> {
        validation::text("label_text", &self.label_text)?;
        Ok(Command::new("LabelSounds")
            .param("threshold", finite("threshold", self.threshold)?)
            .param("measurement", self.measurement)
            .param(
                "sil-dur",
                finite_at_least("min_silence_duration", self.min_silence_duration, 0.0)?,
            )
            .param(
                "snd-dur",
                finite_at_least("min_label_interval", self.min_label_interval, 0.0)?,
            )
            .param("type", self.label_type)
            .param(
                "pre-offset",
                finite_at_least("max_leading_silence", self.max_leading_silence, 0.0)?,
            )
            .param(
                "post-offset",
                finite_at_least("max_trailing_silence", self.max_trailing_silence, 0.0)?,
            )
            .param("text", self.label_text.as_str()))
    }
}
