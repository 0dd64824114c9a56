//! Tools: Nyquist prompt, interval labels, sample export

use super::ToCommand;
use crate::error::Result;
use crate::validation::{self, at_least, finite, finite_above, finite_at_least, in_range};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use turboaudacity_protocol::{
    ChannelLayout, Command, HeaderFormat, IndexFormat, IntervalMode, LabelNumbering,
    MessageLevel, SampleUnits, Verbosity, YesNo,
};

/// `NyquistPrompt`: run Nyquist code against the selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct NyquistPrompt {
    /// Nyquist source; must fit on one line without double quotes
    pub command: String,
    /// Nyquist language version, 1 to 4
    pub version: u8,
}

impl Default for NyquistPrompt {
    fn default() -> Self {
        Self {
            command: String::new(),
            version: 3,
        }
    }
}

impl NyquistPrompt {
    /// Run `command` with the default language version.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            ..Default::default()
        }
    }

    /// Create a builder.
    pub fn builder() -> NyquistPromptBuilder {
        NyquistPromptBuilder::default()
    }
}

impl ToCommand for NyquistPrompt {
    fn to_command(&self) -> Result<Command> {
        validation::text("command", &self.command)?;
        in_range("version", self.version, 1..=4)?;
        Ok(Command::new("NyquistPrompt")
            .param("Command", self.command.as_str())
            .param("Version", self.version))
    }
}

/// `RegularIntervalLabels`: place labels at fixed intervals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct RegularIntervalLabels {
    /// Which of `total_num` and `interval` drive the placement
    pub mode: IntervalMode,
    /// Number of labels
    pub total_num: u32,
    /// Seconds between labels
    pub interval: f64,
    /// Length of each label region in seconds
    pub region: f64,
    /// Stretch the interval to fit the selection
    pub adjust: YesNo,
    /// Label text
    pub label_text: String,
    /// Numbering style
    pub zeros: LabelNumbering,
    /// First label number
    pub first_number: u32,
    /// Message level
    pub verbose: Verbosity,
}

impl Default for RegularIntervalLabels {
    fn default() -> Self {
        Self {
            mode: IntervalMode::Both,
            total_num: 5,
            interval: 10.0,
            region: 1.0,
            adjust: YesNo::No,
            label_text: "Label".to_string(),
            zeros: LabelNumbering::TextOnly,
            first_number: 1,
            verbose: Verbosity::Details,
        }
    }
}

impl RegularIntervalLabels {
    /// Create a builder.
    pub fn builder() -> RegularIntervalLabelsBuilder {
        RegularIntervalLabelsBuilder::default()
    }
}

impl ToCommand for RegularIntervalLabels {
    fn to_command(&self) -> Result<Command> {
        if matches!(self.mode, IntervalMode::Number | IntervalMode::Both) {
            at_least("total_num", self.total_num, 1)?;
        }
        finite("interval", self.interval)?;
        if matches!(self.mode, IntervalMode::Interval | IntervalMode::Both) {
            finite_above("interval", self.interval, 0.0)?;
        }
        finite_at_least("region", self.region, 0.0)?;
        validation::text("label_text", &self.label_text)?;

        Ok(Command::new("RegularIntervalLabels")
            .param("mode", self.mode)
            .param("totalnum", self.total_num)
            .param("interval", self.interval)
            .param("region", self.region)
            .param("adjust", self.adjust)
            .param("labeltext", self.label_text.as_str())
            .param("zeros", self.zeros)
            .param("firstnum", self.first_number)
            .param("verbose", self.verbose))
    }
}

/// `SampleDataExport`: write sample values to a text file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct SampleDataExport {
    /// Number of samples to export
    pub limit: u32,
    /// Scale of the exported values
    pub data_format: SampleUnits,
    /// Output file
    pub filename: PathBuf,
    /// Per-line index
    pub index: IndexFormat,
    /// Header block
    pub include_header: HeaderFormat,
    /// Free text added to the header
    pub optional_header_text: String,
    /// Stereo layout
    pub channel_layout: ChannelLayout,
    /// Messages shown when done
    pub show_messages: MessageLevel,
}

impl Default for SampleDataExport {
    fn default() -> Self {
        Self {
            limit: 100,
            data_format: SampleUnits::Decibels,
            filename: PathBuf::new(),
            index: IndexFormat::None,
            include_header: HeaderFormat::None,
            optional_header_text: String::new(),
            channel_layout: ChannelLayout::SameLine,
            show_messages: MessageLevel::Yes,
        }
    }
}

impl SampleDataExport {
    /// Create a builder.
    pub fn builder() -> SampleDataExportBuilder {
        SampleDataExportBuilder::default()
    }
}

impl ToCommand for SampleDataExport {
    fn to_command(&self) -> Result<Command> {
        at_least("limit", self.limit, 1)?;
        validation::filename("filename", &self.filename)?;
        validation::text("optional_header_text", &self.optional_header_text)?;

        Ok(Command::new("SampleDataExport")
            .param("number", self.limit)
            .param("units", self.data_format)
            .param("filename", &self.filename)
            .param("fileformat", self.index)
            .param("header", self.include_header)
            .param("optext", self.optional_header_text.as_str())
            .param("channel-layout", self.channel_layout)
            .param("messages", self.show_messages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use assert_matches::assert_matches;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_nyquist_prompt_command() {
        assert_eq!(
            NyquistPrompt::new("(mult *track* 0.5)").to_command().unwrap().to_string(),
            r#"NyquistPrompt: Command="(mult *track* 0.5)" Version="3""#
        );
        let quoted = NyquistPrompt::new("(print \"x\")");
        assert_matches!(quoted.to_command(), Err(Error::InvalidArgument { argument: "command", .. }));
    }

    #[rstest]
    #[case(IntervalMode::Number, 0, 10.0, false)]
    #[case(IntervalMode::Number, 3, 0.0, true)]
    #[case(IntervalMode::Interval, 0, 2.5, true)]
    #[case(IntervalMode::Interval, 3, 0.0, false)]
    #[case(IntervalMode::Both, 3, 2.5, true)]
    #[case(IntervalMode::Both, 0, 2.5, false)]
    #[case(IntervalMode::Number, 3, f64::NAN, false)]
    #[case(IntervalMode::Number, 3, f64::INFINITY, false)]
    fn test_regular_interval_mode_requirements(
        #[case] mode: IntervalMode,
        #[case] total_num: u32,
        #[case] interval: f64,
        #[case] ok: bool,
    ) {
        let labels = RegularIntervalLabels {
            mode,
            total_num,
            interval,
            ..Default::default()
        };
        assert_eq!(labels.to_command().is_ok(), ok);
    }

    #[test]
    fn test_regular_interval_labels_keys() {
        assert_eq!(
            RegularIntervalLabels::default().to_command().unwrap().to_string(),
            r#"RegularIntervalLabels: mode="Both" totalnum="5" interval="10.0" region="1.0" adjust="No" labeltext="Label" zeros="TextOnly" firstnum="1" verbose="Details""#
        );
    }

    #[test]
    fn test_sample_data_export_command() {
        let export = SampleDataExport::builder()
            .filename("/tmp/samples.txt")
            .limit(10u32)
            .channel_layout(ChannelLayout::LFirst)
            .build()
            .unwrap();
        assert_eq!(
            export.to_command().unwrap().to_string(),
            r#"SampleDataExport: number="10" units="dB" filename="/tmp/samples.txt" fileformat="None" header="None" optext="" channel-layout="LFirst" messages="Yes""#
        );
        assert!(SampleDataExport::default().to_command().is_err());
    }
}
