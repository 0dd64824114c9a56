//! Enumerated macro parameters
//!
//! Each choice is written on the wire using Audacity's macro identifier. When
//! parsed from a string, either the identifier or the label shown in the
//! effect dialog is accepted, ignoring ASCII case, so `"square, no alias"`
//! and `"Metronome Tick"` both work.

use crate::command::MacroValue;
use crate::error::{ProtocolError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

macro_rules! choice {
    (
        $(#[$meta:meta])*
        $name:ident {
            $( $variant:ident => $value:literal $(| $label:literal)* ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[doc = concat!("`", $value, "`")]
                #[serde(rename = $value $(, alias = $label)*)]
                $variant,
            )+
        }

        impl $name {
            /// Every option, in dialog order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Macro identifier written on the wire
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $value,)+
                }
            }

            fn labels(&self) -> &'static [&'static str] {
                match self {
                    $($name::$variant => &[$($label),*],)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ProtocolError;

            fn from_str(s: &str) -> Result<Self> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|choice| {
                        choice.as_str().eq_ignore_ascii_case(wanted)
                            || choice.labels().iter().any(|l| l.eq_ignore_ascii_case(wanted))
                    })
                    .ok_or_else(|| ProtocolError::UnknownChoice {
                        kind: stringify!($name),
                        value: s.to_string(),
                        expected: Self::ALL
                            .iter()
                            .map(|c| c.as_str())
                            .collect::<Vec<_>>()
                            .join(", "),
                    })
            }
        }

        impl MacroValue for $name {
            fn to_macro_value(&self) -> String {
                self.as_str().to_string()
            }
        }
    };
}

choice! {
    /// Oscillator shape for `Tone` and `Chirp`
    Waveform {
        Sine => "Sine",
        Square => "Square",
        Sawtooth => "Sawtooth",
        SquareNoAlias => "Square, no alias" | "SquareNoAlias",
        Triangle => "Triangle",
    }
}

choice! {
    /// How `Chirp` moves between its start and end values
    Interpolation {
        Linear => "Linear",
        Logarithmic => "Logarithmic",
    }
}

choice! {
    /// Colour of generated noise
    NoiseType {
        White => "White",
        Pink => "Pink",
        Brownian => "Brownian" | "Brown",
    }
}

choice! {
    /// Decay of a `Pluck` tone
    PluckFade {
        Abrupt => "Abrupt",
        Gradual => "Gradual",
    }
}

choice! {
    /// Click sound used by `RhythmTrack`
    BeatSound {
        Metronome => "Metronome" | "Metronome Tick",
        PingShort => "Ping (short)",
        PingLong => "Ping (long)",
        Cowbell => "Cowbell",
        ResonantNoise => "ResonantNoise" | "Resonant Noise",
        NoiseClick => "NoiseClick" | "Noise Click",
        DripShort => "Drip (short)",
        DripLong => "Drip (long)",
    }
}

choice! {
    /// What `TruncateSilence` does with detected silence
    TruncateAction {
        Truncate => "Truncate" | "Truncate Detected Silence",
        Compress => "Compress" | "Compress Excess Silence",
    }
}

choice! {
    /// Direction and shape of an `AdjustableFade`
    FadeType {
        Up => "Up" | "Fade Up",
        Down => "Down" | "Fade Down",
        SCurveUp => "SCurveUp" | "S-Curve Up",
        SCurveDown => "SCurveDown" | "S-Curve Down",
    }
}

choice! {
    /// Units of `AdjustableFade` gains
    FadeUnits {
        Percent => "Percent" | "%",
        Decibels => "dB",
    }
}

choice! {
    /// Preset curve of an `AdjustableFade`
    FadePreset {
        None => "None",
        LinearIn => "LinearIn" | "Linear In",
        LinearOut => "LinearOut" | "Linear Out",
        ExponentialIn => "ExponentialIn" | "Exponential In",
        ExponentialOut => "ExponentialOut" | "Exponential Out",
        LogarithmicIn => "LogarithmicIn" | "Logarithmic In",
        LogarithmicOut => "LogarithmicOut" | "Logarithmic Out",
        RoundedIn => "RoundedIn" | "Rounded In",
        RoundedOut => "RoundedOut" | "Rounded Out",
        CosineIn => "CosineIn" | "Cosine In",
        CosineOut => "CosineOut" | "Cosine Out",
        SCurveIn => "SCurveIn" | "S-Curve In",
        SCurveOut => "SCurveOut" | "S-Curve Out",
    }
}

choice! {
    /// Gain law of `CrossfadeTracks`
    CrossfadeType {
        ConstantGain => "ConstantGain" | "Constant Gain",
        ConstantPower1 => "ConstantPower1" | "Constant Power 1",
        ConstantPower2 => "ConstantPower2" | "Constant Power 2",
        CustomCurve => "CustomCurve" | "Custom Curve",
    }
}

choice! {
    /// Which track fades out in `CrossfadeTracks`
    CrossfadeDirection {
        Automatic => "Automatic",
        OutIn => "OutIn" | "Alternating Out / In",
        InOut => "InOut" | "Alternating In / Out",
    }
}

choice! {
    /// Echo pattern of the `Delay` effect
    DelayType {
        Regular => "Regular",
        BouncingBall => "BouncingBall" | "Bouncing Ball",
        ReverseBouncingBall => "ReverseBouncingBall" | "Reverse Bouncing Ball",
    }
}

choice! {
    /// Pitch handling of the `Delay` effect
    PitchChange {
        PitchTempo => "PitchTempo" | "Pitch/Tempo",
        LqPitchShift => "LQPitchShift" | "Low-quality Pitch Shift",
    }
}

choice! {
    /// Filter slope of the high and low pass filters
    Rolloff {
        Db6 => "dB6" | "6 dB",
        Db12 => "dB12" | "12 dB",
        Db24 => "dB24" | "24 dB",
        Db36 => "dB36" | "36 dB",
        Db48 => "dB48" | "48 dB",
    }
}

choice! {
    /// Limiting curve of the `Limiter` effect
    LimiterType {
        SoftLimit => "SoftLimit" | "Soft Limit",
        HardLimit => "HardLimit" | "Hard Limit",
        SoftClip => "SoftClip" | "Soft Clip",
        HardClip => "HardClip" | "Hard Clip",
    }
}

choice! {
    /// Modulation shape of the `Tremolo` effect
    TremoloWave {
        Sine => "Sine",
        Triangle => "Triangle",
        Sawtooth => "Sawtooth",
        InverseSawtooth => "InverseSawtooth" | "Inverse Sawtooth",
        Square => "Square",
    }
}

choice! {
    /// Mode of `VocalReductionAndIsolation`
    VocalAction {
        RemoveToMono => "RemoveToMono" | "Remove Vocals: to mono",
        Remove => "Remove" | "Remove Vocals",
        Isolate => "Isolate" | "Isolate Vocals",
        IsolateInvert => "IsolateInvert" | "Isolate Vocals and Invert",
        RemoveCenterToMono => "RemoveCenterToMono" | "Remove Center: to mono",
        RemoveCenter => "RemoveCenter" | "Remove Center",
        IsolateCenter => "IsolateCenter" | "Isolate Center",
        IsolateCenterInvert => "IsolateCenterInvert" | "Isolate Center and Invert",
        Analyze => "Analyze",
    }
}

choice! {
    /// Output routing of the `Vocoder` effect
    VocoderOutput {
        BothChannels => "BothChannels" | "Both Channels",
        RightOnly => "RightOnly" | "Right Only",
    }
}

choice! {
    /// Level measurement of `LabelSounds`
    Measurement {
        Peak => "peak" | "Peak level",
        Average => "avg" | "Average level",
        Rms => "rms" | "RMS level",
    }
}

choice! {
    /// Label placement of `LabelSounds`
    LabelType {
        BeforeSound => "BeforeSound" | "Point before sound",
        AfterSound => "AfterSound" | "Point after sound",
        Around => "Around" | "Region around sounds",
        Between => "Between" | "Region between sounds",
    }
}

choice! {
    /// How `RegularIntervalLabels` spaces its labels
    IntervalMode {
        Both => "Both" | "Number and Interval",
        Number => "Number" | "Number of Labels",
        Interval => "Interval" | "Label Interval",
    }
}

choice! {
    /// Where `RegularIntervalLabels` puts the label number
    LabelNumbering {
        TextOnly => "TextOnly" | "Text Only",
        OneBefore => "OneBefore" | "Number before Text",
        TwoBefore => "TwoBefore",
        ThreeBefore => "ThreeBefore",
        OneAfter => "OneAfter" | "Number after Text",
        TwoAfter => "TwoAfter",
        ThreeAfter => "ThreeAfter",
    }
}

choice! {
    /// Message level of Nyquist tools
    Verbosity {
        Details => "Details",
        Warnings => "Warnings",
        None => "None",
    }
}

choice! {
    /// Sample scale of `SampleDataExport`
    SampleUnits {
        Decibels => "dB",
        Linear => "Linear",
    }
}

choice! {
    /// Per-line index written by `SampleDataExport`
    IndexFormat {
        None => "None",
        Count => "Count" | "Sample Count",
        Time => "Time" | "Time Indexed",
    }
}

choice! {
    /// Header block written by `SampleDataExport`
    HeaderFormat {
        None => "None" | "No Header",
        Minimal => "Minimal",
        Standard => "Standard",
        All => "All",
    }
}

choice! {
    /// Stereo layout of `SampleDataExport`
    ChannelLayout {
        SameLine => "SameLine" | "L-R on Same Line",
        Alternate => "Alternate" | "Alternate Lines",
        LFirst => "LFirst" | "L Channel First",
    }
}

choice! {
    /// Messages shown by `SampleDataExport`
    MessageLevel {
        Yes => "Yes" | "Show Messages",
        Errors => "Errors" | "Errors Only",
        None => "None",
    }
}

choice! {
    /// Reference point of `SelectTime`
    RelativeTo {
        ProjectStart => "ProjectStart" | "Project Start",
        Project => "Project",
        ProjectEnd => "ProjectEnd" | "Project End",
        SelectionStart => "SelectionStart" | "Selection Start",
        Selection => "Selection",
        SelectionEnd => "SelectionEnd" | "Selection End",
    }
}

choice! {
    /// Subject of a `GetInfo` query
    InfoType {
        Commands => "Commands",
        Menus => "Menus",
        Preferences => "Preferences",
        Tracks => "Tracks",
        Clips => "Clips",
        Envelopes => "Envelopes",
        Labels => "Labels",
        Boxes => "Boxes",
    }
}

choice! {
    /// Output format of a `GetInfo` query
    InfoFormat {
        Json => "JSON",
        Lisp => "LISP",
        Brief => "Brief",
    }
}

choice! {
    /// Target of `LoudnessNormalization`
    NormalizeTarget {
        PerceivedLoudness => "0" | "Perceived Loudness" | "LUFS",
        Rms => "1" | "RMS",
    }
}

choice! {
    /// Yes/no switch used by Nyquist effects
    YesNo {
        Yes => "Yes",
        No => "No",
    }
}

impl From<bool> for YesNo {
    fn from(value: bool) -> Self {
        if value { YesNo::Yes } else { YesNo::No }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("sine", Waveform::Sine)]
    #[case("SQUARE, NO ALIAS", Waveform::SquareNoAlias)]
    #[case(" Triangle ", Waveform::Triangle)]
    fn test_parse_waveform(#[case] input: &str, #[case] expected: Waveform) {
        assert_eq!(input.parse::<Waveform>().unwrap(), expected);
    }

    #[test]
    fn test_dialog_labels_map_to_identifiers() {
        let sound: BeatSound = "metronome tick".parse().unwrap();
        assert_eq!(sound.to_macro_value(), "Metronome");

        let measurement: Measurement = "Average level".parse().unwrap();
        assert_eq!(measurement.as_str(), "avg");

        let layout: ChannelLayout = "L-R on Same Line".parse().unwrap();
        assert_eq!(layout.to_string(), "SameLine");
    }

    #[test]
    fn test_unknown_choice_lists_options() {
        let err = "Purple".parse::<NoiseType>().unwrap_err();
        match err {
            ProtocolError::UnknownChoice {
                kind,
                value,
                expected,
            } => {
                assert_eq!(kind, "NoiseType");
                assert_eq!(value, "Purple");
                assert_eq!(expected, "White, Pink, Brownian");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_serde_uses_identifiers() {
        let json = serde_json::to_string(&Rolloff::Db24).unwrap();
        assert_eq!(json, "\"dB24\"");

        let parsed: InfoFormat = serde_json::from_str("\"JSON\"").unwrap();
        assert_eq!(parsed, InfoFormat::Json);

        let aliased: BeatSound = serde_json::from_str("\"Noise Click\"").unwrap();
        assert_eq!(aliased, BeatSound::NoiseClick);
    }

    #[test]
    fn test_yes_no_from_bool() {
        assert_eq!(YesNo::from(true).as_str(), "Yes");
        assert_eq!(YesNo::from(false).as_str(), "No");
    }
}
