//! Effects: macros that transform the selected audio
//!
//! Field names follow the effect dialogs; the wire keys are whatever the
//! macro expects, which is not always consistent (`Freq` next to `frequency`,
//! `dgain`, `gain-L`, ...).

use super::ToCommand;
use crate::error::Result;
use crate::validation::{
    at_least, at_most, finite, finite_above, finite_at_least, greater_than, in_range,
};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use turboaudacity_protocol::{
    Command, CrossfadeDirection, CrossfadeType, DelayType, FadePreset, FadeType, FadeUnits,
    LimiterType, NormalizeTarget, PitchChange, Rolloff, TremoloWave, TruncateAction, VocalAction,
    VocoderOutput, YesNo,
};

/// `Amplify`: scale the selection by a linear ratio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct Amplify {
    /// Linear gain, must be positive
    pub ratio: f64,
    /// Allow the result to clip
    pub allow_clipping: bool,
}

impl Default for Amplify {
    fn default() -> Self {
        Self {
            ratio: 0.9,
            allow_clipping: false,
        }
    }
}

impl Amplify {
    /// Create a builder.
    pub fn builder() -> AmplifyBuilder {
        AmplifyBuilder::default()
    }
}

impl ToCommand for Amplify {
    fn to_command(&self) -> Result<Command> {
        finite_above("ratio", self.ratio, 0.0)?;
        Ok(Command::new("Amplify")
            .param("Ratio", self.ratio)
            .param("AllowClipping", self.allow_clipping))
    }
}

/// `AutoDuck`: lower the selection wherever a control track below it is loud.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct AutoDuck {
    /// Gain reduction in dB
    pub duck_amount_db: f64,
    /// Inner fade down length in seconds
    pub inner_fade_down_len: f64,
    /// Inner fade up length in seconds
    pub inner_fade_up_len: f64,
    /// Outer fade down length in seconds
    pub outer_fade_down_len: f64,
    /// Outer fade up length in seconds
    pub outer_fade_up_len: f64,
    /// Control track threshold in dB
    pub threshold_db: f64,
    /// Longest pause in seconds that does not release the duck
    pub maximum_pause: f64,
}

impl Default for AutoDuck {
    fn default() -> Self {
        Self {
            duck_amount_db: -12.0,
            inner_fade_down_len: 0.0,
            inner_fade_up_len: 0.0,
            outer_fade_down_len: 0.5,
            outer_fade_up_len: 0.5,
            threshold_db: -30.0,
            maximum_pause: 1.0,
        }
    }
}

impl AutoDuck {
    /// Create a builder.
    pub fn builder() -> AutoDuckBuilder {
        AutoDuckBuilder::default()
    }
}

impl ToCommand for AutoDuck {
    fn to_command(&self) -> Result<Command> {
        Ok(Command::new("AutoDuck")
            .param("DuckAmountDb", finite("duck_amount_db", self.duck_amount_db)?)
            .param(
                "InnerFadeDownLen",
                finite_at_least("inner_fade_down_len", self.inner_fade_down_len, 0.0)?,
            )
            .param(
                "InnerFadeUpLen",
                finite_at_least("inner_fade_up_len", self.inner_fade_up_len, 0.0)?,
            )
            .param(
                "OuterFadeDownLen",
                finite_at_least("outer_fade_down_len", self.outer_fade_down_len, 0.0)?,
            )
            .param(
                "OuterFadeUpLen",
                finite_at_least("outer_fade_up_len", self.outer_fade_up_len, 0.0)?,
            )
            .param("ThresholdDb", finite("threshold_db", self.threshold_db)?)
            .param(
                "MaximumPause",
                finite_at_least("maximum_pause", self.maximum_pause, 0.0)?,
            ))
    }
}

/// `BassAndTreble`: shelving tone controls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct BassAndTreble {
    /// Bass gain in dB
    pub bass: f64,
    /// Treble gain in dB
    pub treble: f64,
    /// Output gain in dB
    pub gain: f64,
    /// Move bass and treble together
    pub link_sliders: bool,
}

impl BassAndTreble {
    /// Create a builder.
    pub fn builder() -> BassAndTrebleBuilder {
        BassAndTrebleBuilder::default()
    }
}

impl ToCommand for BassAndTreble {
    fn to_command(&self) -> Result<Command> {
        Ok(Command::new("BassAndTreble")
            .param("Bass", finite("bass", self.bass)?)
            .param("Treble", finite("treble", self.treble)?)
            .param("Gain", finite("gain", self.gain)?)
            .param("LinkSliders", self.link_sliders))
    }
}

/// `ChangePitch`: shift pitch without changing tempo.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct ChangePitch {
    /// Pitch change in percent
    pub percentage: f64,
    /// Use the high quality SBSMS stretcher
    pub use_sbsms: bool,
}

impl ChangePitch {
    /// Create a builder.
    pub fn builder() -> ChangePitchBuilder {
        ChangePitchBuilder::default()
    }
}

impl ToCommand for ChangePitch {
    fn to_command(&self) -> Result<Command> {
        Ok(Command::new("ChangePitch")
            .param("Percentage", finite("percentage", self.percentage)?)
            .param("SBSMS", self.use_sbsms))
    }
}

/// `ChangeSpeed`: resample, changing tempo and pitch together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct ChangeSpeed {
    /// Speed change in percent, above -100
    pub percentage: f64,
}

impl ChangeSpeed {
    /// Create a builder.
    pub fn builder() -> ChangeSpeedBuilder {
        ChangeSpeedBuilder::default()
    }
}

impl ToCommand for ChangeSpeed {
    fn to_command(&self) -> Result<Command> {
        finite_above("percentage", self.percentage, -100.0)?;
        Ok(Command::new("ChangeSpeed").param("Percentage", self.percentage))
    }
}

/// `ChangeTempo`: change tempo without changing pitch.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct ChangeTempo {
    /// Tempo change in percent, above -100
    pub percentage: f64,
    /// Use the high quality SBSMS stretcher
    pub use_sbsms: bool,
}

impl ChangeTempo {
    /// Create a builder.
    pub fn builder() -> ChangeTempoBuilder {
        ChangeTempoBuilder::default()
    }
}

impl ToCommand for ChangeTempo {
    fn to_command(&self) -> Result<Command> {
        finite_above("percentage", self.percentage, -100.0)?;
        Ok(Command::new("ChangeTempo")
            .param("Percentage", self.percentage)
            .param("SBSMS", self.use_sbsms))
    }
}

/// `ClickRemoval`: remove short clicks from vinyl recordings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct ClickRemoval {
    /// Sensitivity, 0 to 900
    pub threshold: u32,
    /// Longest click in samples, 0 to 40
    pub width: u32,
}

impl Default for ClickRemoval {
    fn default() -> Self {
        Self {
            threshold: 200,
            width: 20,
        }
    }
}

impl ClickRemoval {
    /// Create a builder.
    pub fn builder() -> ClickRemovalBuilder {
        ClickRemovalBuilder::default()
    }
}

impl ToCommand for ClickRemoval {
    fn to_command(&self) -> Result<Command> {
        in_range("threshold", self.threshold, 0..=900)?;
        in_range("width", self.width, 0..=40)?;
        Ok(Command::new("ClickRemoval")
            .param("Threshold", self.threshold)
            .param("Width", self.width))
    }
}

/// `Compressor`: dynamic range compression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct Compressor {
    /// Threshold in dB
    pub threshold: f64,
    /// Noise floor in dB
    pub noise_floor: f64,
    /// Compression ratio, at least 1
    pub ratio: f64,
    /// Attack time in seconds
    pub attack_time: f64,
    /// Release time in seconds
    pub release_time: f64,
    /// Make up gain to 0 dB afterwards
    pub normalize: bool,
    /// Compress based on peaks rather than RMS
    pub use_peak: bool,
}

impl Default for Compressor {
    fn default() -> Self {
        Self {
            threshold: -12.0,
            noise_floor: -40.0,
            ratio: 2.0,
            attack_time: 0.2,
            release_time: 1.0,
            normalize: true,
            use_peak: false,
        }
    }
}

impl Compressor {
    /// Create a builder.
    pub fn builder() -> CompressorBuilder {
        CompressorBuilder::default()
    }
}

impl ToCommand for Compressor {
    fn to_command(&self) -> Result<Command> {
        Ok(Command::new("Compressor")
            .param("Threshold", finite("threshold", self.threshold)?)
            .param("NoiseFloor", finite("noise_floor", self.noise_floor)?)
            .param("Ratio", finite_at_least("ratio", self.ratio, 1.0)?)
            .param("AttackTime", finite_above("attack_time", self.attack_time, 0.0)?)
            .param(
                "ReleaseTime",
                finite_above("release_time", self.release_time, 0.0)?,
            )
            .param("Normalize", self.normalize)
            .param("UsePeak", self.use_peak))
    }
}

/// `Echo`: repeat the selection with decay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct Echo {
    /// Delay in seconds
    pub delay: f64,
    /// Decay factor
    pub decay: f64,
}

impl Default for Echo {
    fn default() -> Self {
        Self {
            delay: 1.0,
            decay: 0.5,
        }
    }
}

impl Echo {
    /// Create a builder.
    pub fn builder() -> EchoBuilder {
        EchoBuilder::default()
    }
}

impl ToCommand for Echo {
    fn to_command(&self) -> Result<Command> {
        Ok(Command::new("Echo")
            .param("Delay", finite_above("delay", self.delay, 0.0)?)
            .param("Decay", finite_at_least("decay", self.decay, 0.0)?))
    }
}

/// `LoudnessNormalization`: normalize to a perceived loudness or RMS level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct LoudnessNormalization {
    /// Normalize stereo channels independently
    pub stereo_independent: bool,
    /// Target in LUFS, used with [`NormalizeTarget::PerceivedLoudness`]
    pub lufs_level: f64,
    /// Target in dB, used with [`NormalizeTarget::Rms`]
    pub rms_level: f64,
    /// Treat mono as dual mono
    pub dual_mono: bool,
    /// Which level to normalize
    pub normalize_to: NormalizeTarget,
}

impl Default for LoudnessNormalization {
    fn default() -> Self {
        Self {
            stereo_independent: false,
            lufs_level: -23.0,
            rms_level: -20.0,
            dual_mono: true,
            normalize_to: NormalizeTarget::PerceivedLoudness,
        }
    }
}

impl LoudnessNormalization {
    /// Create a builder.
    pub fn builder() -> LoudnessNormalizationBuilder {
        LoudnessNormalizationBuilder::default()
    }
}

impl ToCommand for LoudnessNormalization {
    fn to_command(&self) -> Result<Command> {
        Ok(Command::new("LoudnessNormalization")
            .param("StereoIndependent", self.stereo_independent)
            .param("LUFSLevel", finite("lufs_level", self.lufs_level)?)
            .param("RMSLevel", finite("rms_level", self.rms_level)?)
            .param("DualMono", self.dual_mono)
            .param("NormalizeTo", self.normalize_to))
    }
}

/// `Normalize`: scale to a peak level and optionally remove DC offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct Normalize {
    /// Peak level in dB, at most 0
    pub peak_level: f64,
    /// Apply the gain
    pub apply_gain: bool,
    /// Remove DC offset
    pub remove_dc_offset: bool,
    /// Normalize stereo channels independently
    pub stereo_independent: bool,
}

impl Default for Normalize {
    fn default() -> Self {
        Self {
            peak_level: -1.0,
            apply_gain: true,
            remove_dc_offset: true,
            stereo_independent: false,
        }
    }
}

impl Normalize {
    /// Create a builder.
    pub fn builder() -> NormalizeBuilder {
        NormalizeBuilder::default()
    }
}

impl ToCommand for Normalize {
    fn to_command(&self) -> Result<Command> {
        at_most("peak_level", finite("peak_level", self.peak_level)?, 0.0)?;
        Ok(Command::new("Normalize")
            .param("PeakLevel", self.peak_level)
            .param("ApplyGain", self.apply_gain)
            .param("RemoveDcOffset", self.remove_dc_offset)
            .param("StereoIndependent", self.stereo_independent))
    }
}

/// `Paulstretch`: extreme time stretch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct Paulstretch {
    /// Stretch factor, at least 1
    pub stretch_factor: f64,
    /// Time resolution in seconds
    pub time_resolution: f64,
}

impl Default for Paulstretch {
    fn default() -> Self {
        Self {
            stretch_factor: 10.0,
            time_resolution: 0.25,
        }
    }
}

impl Paulstretch {
    /// Create a builder.
    pub fn builder() -> PaulstretchBuilder {
        PaulstretchBuilder::default()
    }
}

impl ToCommand for Paulstretch {
    fn to_command(&self) -> Result<Command> {
        Ok(Command::new("Paulstretch")
            .param(
                "StretchFactor",
                finite_at_least("stretch_factor", self.stretch_factor, 1.0)?,
            )
            .param(
                "TimeResolution",
                finite_above("time_resolution", self.time_resolution, 0.0)?,
            ))
    }
}

/// `Phaser`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct Phaser {
    /// Number of stages, even, 2 to 24
    pub stages: u32,
    /// Dry/wet mix, 0 to 255
    pub dry_wet: u32,
    /// LFO frequency in Hz
    pub frequency: f64,
    /// LFO start phase in degrees, 0 to 360
    pub phase: f64,
    /// Depth, 0 to 255
    pub depth: u32,
    /// Feedback in percent, -100 to 100
    pub feedback: i32,
    /// Output gain in dB
    pub gain: f64,
}

impl Default for Phaser {
    fn default() -> Self {
        Self {
            stages: 2,
            dry_wet: 128,
            frequency: 0.4,
            phase: 0.0,
            depth: 100,
            feedback: 0,
            gain: -6.0,
        }
    }
}

impl Phaser {
    /// Create a builder.
    pub fn builder() -> PhaserBuilder {
        PhaserBuilder::default()
    }
}

impl ToCommand for Phaser {
    fn to_command(&self) -> Result<Command> {
        in_range("stages", self.stages, 2..=24)?;
        if self.stages % 2 != 0 {
            return Err(crate::Error::invalid(
                "stages",
                format!("must be even, got {}", self.stages),
            ));
        }
        in_range("dry_wet", self.dry_wet, 0..=255)?;
        finite_above("frequency", self.frequency, 0.0)?;
        in_range("phase", self.phase, 0.0..=360.0)?;
        in_range("depth", self.depth, 0..=255)?;
        in_range("feedback", self.feedback, -100..=100)?;
        finite("gain", self.gain)?;

        Ok(Command::new("Phaser")
            .param("Stages", self.stages)
            .param("DryWet", self.dry_wet)
            .param("Freq", self.frequency)
            .param("Phase", self.phase)
            .param("Depth", self.depth)
            .param("Feedback", self.feedback)
            .param("Gain", self.gain))
    }
}

/// `Repeat`: append copies of the selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct Repeat {
    /// Number of extra copies, at least 1
    pub count: u32,
}

impl Default for Repeat {
    fn default() -> Self {
        Self { count: 1 }
    }
}

impl Repeat {
    /// Create a builder.
    pub fn builder() -> RepeatBuilder {
        RepeatBuilder::default()
    }
}

impl ToCommand for Repeat {
    fn to_command(&self) -> Result<Command> {
        at_least("count", self.count, 1)?;
        Ok(Command::new("Repeat").param("Count", self.count))
    }
}

/// `Reverb`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct Reverb {
    /// Room size in percent
    pub room_size: f64,
    /// Pre-delay in milliseconds
    pub delay: f64,
    /// Reverberance in percent
    pub reverberance: f64,
    /// High frequency damping in percent
    pub hf_damping: f64,
    /// Low tone in percent
    pub tone_low: f64,
    /// High tone in percent
    pub tone_high: f64,
    /// Wet gain in dB
    pub wet_gain: f64,
    /// Dry gain in dB
    pub dry_gain: f64,
    /// Stereo width in percent
    pub stereo_width: f64,
    /// Output only the reverberated signal
    pub wet_only: bool,
}

impl Default for Reverb {
    fn default() -> Self {
        Self {
            room_size: 75.0,
            delay: 10.0,
            reverberance: 50.0,
            hf_damping: 50.0,
            tone_low: 100.0,
            tone_high: 100.0,
            wet_gain: -1.0,
            dry_gain: -1.0,
            stereo_width: 100.0,
            wet_only: false,
        }
    }
}

impl Reverb {
    /// Create a builder.
    pub fn builder() -> ReverbBuilder {
        ReverbBuilder::default()
    }
}

impl ToCommand for Reverb {
    fn to_command(&self) -> Result<Command> {
        let percent = 0.0..=100.0;
        Ok(Command::new("Reverb")
            .param(
                "RoomSize",
                in_range("room_size", self.room_size, percent.clone())?,
            )
            .param("Delay", finite_at_least("delay", self.delay, 0.0)?)
            .param(
                "Reverberance",
                in_range("reverberance", self.reverberance, percent.clone())?,
            )
            .param(
                "HfDamping",
                in_range("hf_damping", self.hf_damping, percent.clone())?,
            )
            .param("ToneLow", in_range("tone_low", self.tone_low, percent.clone())?)
            .param(
                "ToneHigh",
                in_range("tone_high", self.tone_high, percent.clone())?,
            )
            .param("WetGain", finite("wet_gain", self.wet_gain)?)
            .param("DryGain", finite("dry_gain", self.dry_gain)?)
            .param(
                "StereoWidth",
                in_range("stereo_width", self.stereo_width, percent)?,
            )
            .param("WetOnly", self.wet_only))
    }
}

/// `SlidingStretch`: change tempo and pitch gradually across the selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct SlidingStretch {
    /// Initial tempo change in percent
    pub rate_percent_change_start: f64,
    /// Final tempo change in percent
    pub rate_percent_change_end: f64,
    /// Initial pitch shift in semitones
    pub pitch_half_steps_start: f64,
    /// Final pitch shift in semitones
    pub pitch_half_steps_end: f64,
    /// Initial pitch shift in percent
    pub pitch_percent_change_start: f64,
    /// Final pitch shift in percent
    pub pitch_percent_change_end: f64,
}

impl SlidingStretch {
    /// Create a builder.
    pub fn builder() -> SlidingStretchBuilder {
        SlidingStretchBuilder::default()
    }
}

impl ToCommand for SlidingStretch {
    fn to_command(&self) -> Result<Command> {
        Ok(Command::new("SlidingStretch")
            .param(
                "RatePercentChangeStart",
                finite("rate_percent_change_start", self.rate_percent_change_start)?,
            )
            .param(
                "RatePercentChangeEnd",
                finite("rate_percent_change_end", self.rate_percent_change_end)?,
            )
            .param(
                "PitchHalfStepsStart",
                finite("pitch_half_steps_start", self.pitch_half_steps_start)?,
            )
            .param(
                "PitchHalfStepsEnd",
                finite("pitch_half_steps_end", self.pitch_half_steps_end)?,
            )
            .param(
                "PitchPercentChangeStart",
                finite("pitch_percent_change_start", self.pitch_percent_change_start)?,
            )
            .param(
                "PitchPercentChangeEnd",
                finite("pitch_percent_change_end", self.pitch_percent_change_end)?,
            ))
    }
}

/// `TruncateSilence`: shorten or compress quiet passages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct TruncateSilence {
    /// Level below which audio counts as silence, in dB
    pub threshold: f64,
    /// What to do with the silence
    pub action: TruncateAction,
    /// Shortest silence to act on, in seconds
    pub minimum: f64,
    /// Length to truncate to, in seconds
    pub truncate: f64,
    /// Compression in percent
    pub compress: f64,
    /// Process tracks independently
    pub independent: bool,
}

impl Default for TruncateSilence {
    fn default() -> Self {
        Self {
            threshold: -20.0,
            action: TruncateAction::Truncate,
            minimum: 0.5,
            truncate: 0.5,
            compress: 50.0,
            independent: false,
        }
    }
}

impl TruncateSilence {
    /// Create a builder.
    pub fn builder() -> TruncateSilenceBuilder {
        TruncateSilenceBuilder::default()
    }
}

impl ToCommand for TruncateSilence {
    fn to_command(&self) -> Result<Command> {
        Ok(Command::new("TruncateSilence")
            .param("Threshold", finite("threshold", self.threshold)?)
            .param("Action", self.action)
            .param("Minimum", finite_at_least("minimum", self.minimum, 0.0)?)
            .param("Truncate", finite_at_least("truncate", self.truncate, 0.0)?)
            .param("Compress", in_range("compress", self.compress, 0.0..=100.0)?)
            .param("Independent", self.independent))
    }
}

/// `Wahwah`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct Wahwah {
    /// LFO frequency in Hz
    pub frequency: f64,
    /// LFO start phase in degrees, 0 to 360
    pub phase: f64,
    /// Depth in percent
    pub depth: u32,
    /// Resonance
    pub resonance: f64,
    /// Wah frequency offset in percent
    pub offset: u32,
    /// Output gain in dB
    pub gain: f64,
}

impl Default for Wahwah {
    fn default() -> Self {
        Self {
            frequency: 1.5,
            phase: 0.0,
            depth: 70,
            resonance: 2.5,
            offset: 30,
            gain: -6.0,
        }
    }
}

impl Wahwah {
    /// Create a builder.
    pub fn builder() -> WahwahBuilder {
        WahwahBuilder::default()
    }
}

impl ToCommand for Wahwah {
    fn to_command(&self) -> Result<Command> {
        Ok(Command::new("Wahwah")
            .param("Freq", finite_above("frequency", self.frequency, 0.0)?)
            .param("Phase", in_range("phase", self.phase, 0.0..=360.0)?)
            .param("Depth", in_range("depth", self.depth, 0..=100)?)
            .param("Resonance", finite_above("resonance", self.resonance, 0.0)?)
            .param("Offset", in_range("offset", self.offset, 0..=100)?)
            .param("Gain", finite("gain", self.gain)?))
    }
}

/// `AdjustableFade`: a fade with a configurable curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct AdjustableFade {
    /// Fade direction and shape
    pub fade_type: FadeType,
    /// Mid-fade adjustment in percent
    pub curve: f64,
    /// Units of the two gains
    pub units: FadeUnits,
    /// Start gain
    pub gain0: f64,
    /// End gain
    pub gain1: f64,
    /// Preset that overrides the other settings
    pub preset: FadePreset,
}

impl Default for AdjustableFade {
    fn default() -> Self {
        Self {
            fade_type: FadeType::Up,
            curve: 0.0,
            units: FadeUnits::Percent,
            gain0: 0.0,
            gain1: 100.0,
            preset: FadePreset::None,
        }
    }
}

impl AdjustableFade {
    /// Create a builder.
    pub fn builder() -> AdjustableFadeBuilder {
        AdjustableFadeBuilder::default()
    }
}

impl ToCommand for AdjustableFade {
    fn to_command(&self) -> Result<Command> {
        Ok(Command::new("AdjustableFade")
            .param("type", self.fade_type)
            .param("curve", finite("curve", self.curve)?)
            .param("units", self.units)
            .param("gain0", finite("gain0", self.gain0)?)
            .param("gain1", finite("gain1", self.gain1)?)
            .param("preset", self.preset))
    }
}

/// `ClipFix`: reconstruct clipped peaks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct ClipFix {
    /// Threshold of clipping in percent
    pub threshold: f64,
    /// Gain reduction in dB
    pub gain: f64,
}

impl ClipFix {
    /// Create a builder.
    pub fn builder() -> ClipFixBuilder {
        ClipFixBuilder::default()
    }
}

impl ToCommand for ClipFix {
    fn to_command(&self) -> Result<Command> {
        Ok(Command::new("ClipFix")
            .param("threshold", finite("threshold", self.threshold)?)
            .param("gain", finite("gain", self.gain)?))
    }
}

/// `CrossfadeTracks`: crossfade two selected tracks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct CrossfadeTracks {
    /// Gain law
    pub fade_type: CrossfadeType,
    /// Curve for [`CrossfadeType::CustomCurve`]
    pub curve: f64,
    /// Which track fades out
    pub direction: CrossfadeDirection,
}

impl Default for CrossfadeTracks {
    fn default() -> Self {
        Self {
            fade_type: CrossfadeType::ConstantGain,
            curve: 0.0,
            direction: CrossfadeDirection::Automatic,
        }
    }
}

impl CrossfadeTracks {
    /// Create a builder.
    pub fn builder() -> CrossfadeTracksBuilder {
        CrossfadeTracksBuilder::default()
    }
}

impl ToCommand for CrossfadeTracks {
    fn to_command(&self) -> Result<Command> {
        Ok(Command::new("CrossfadeTracks")
            .param("type", self.fade_type)
            .param("curve", finite("curve", self.curve)?)
            .param("direction", self.direction))
    }
}

/// `Delay`: the Nyquist delay with optional pitch change per echo.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct Delay {
    /// Echo pattern
    pub delay_type: DelayType,
    /// Gain per echo in dB
    pub delay_level: f64,
    /// Time between echoes in seconds
    pub delay_time: f64,
    /// How pitch changes are applied
    pub pitch_change_effect: PitchChange,
    /// Pitch change per echo in semitones
    pub pitch_change_per_echo: f64,
    /// Number of echoes, at least 1
    pub number_of_echoes: u32,
    /// Keep the original length
    pub allow_duration_to_change: YesNo,
}

impl Default for Delay {
    fn default() -> Self {
        Self {
            delay_type: DelayType::Regular,
            delay_level: -6.0,
            delay_time: 0.3,
            pitch_change_effect: PitchChange::PitchTempo,
            pitch_change_per_echo: 0.0,
            number_of_echoes: 5,
            allow_duration_to_change: YesNo::Yes,
        }
    }
}

impl Delay {
    /// Create a builder.
    pub fn builder() -> DelayBuilder {
        DelayBuilder::default()
    }
}

impl ToCommand for Delay {
    fn to_command(&self) -> Result<Command> {
        Ok(Command::new("Delay")
            .param("delay-type", self.delay_type)
            .param("dgain", finite("delay_level", self.delay_level)?)
            .param("delay", finite_at_least("delay_time", self.delay_time, 0.0)?)
            .param("pitch-type", self.pitch_change_effect)
            .param(
                "shift",
                finite("pitch_change_per_echo", self.pitch_change_per_echo)?,
            )
            .param(
                "number",
                at_least("number_of_echoes", self.number_of_echoes, 1)?,
            )
            .param("constrain", self.allow_duration_to_change))
    }
}

/// `High-passFilter`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct HighPassFilter {
    /// Cutoff frequency in Hz
    pub frequency: f64,
    /// Filter slope
    pub rolloff: Rolloff,
}

impl Default for HighPassFilter {
    fn default() -> Self {
        Self {
            frequency: 1000.0,
            rolloff: Rolloff::Db6,
        }
    }
}

impl HighPassFilter {
    /// Create a builder.
    pub fn builder() -> HighPassFilterBuilder {
        HighPassFilterBuilder::default()
    }
}

impl ToCommand for HighPassFilter {
    fn to_command(&self) -> Result<Command> {
        Ok(Command::new("High-passFilter")
            .param("frequency", finite_above("frequency", self.frequency, 0.0)?)
            .param("rolloff", self.rolloff))
    }
}

/// `Low-passFilter`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct LowPassFilter {
    /// Cutoff frequency in Hz
    pub frequency: f64,
    /// Filter slope
    pub rolloff: Rolloff,
}

impl Default for LowPassFilter {
    fn default() -> Self {
        Self {
            frequency: 1000.0,
            rolloff: Rolloff::Db6,
        }
    }
}

impl LowPassFilter {
    /// Create a builder.
    pub fn builder() -> LowPassFilterBuilder {
        LowPassFilterBuilder::default()
    }
}

impl ToCommand for LowPassFilter {
    fn to_command(&self) -> Result<Command> {
        Ok(Command::new("Low-passFilter")
            .param("frequency", finite_above("frequency", self.frequency, 0.0)?)
            .param("rolloff", self.rolloff))
    }
}

/// `Limiter`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct Limiter {
    /// Limiting curve
    pub limiter_type: LimiterType,
    /// Input gain of the left channel in dB
    pub gain_left: f64,
    /// Input gain of the right channel in dB
    pub gain_right: f64,
    /// Limit in dB
    pub limit: f64,
    /// Hold in milliseconds
    pub hold: f64,
    /// Apply make-up gain
    pub makeup: YesNo,
}

impl Default for Limiter {
    fn default() -> Self {
        Self {
            limiter_type: LimiterType::SoftLimit,
            gain_left: 0.0,
            gain_right: 0.0,
            limit: -3.0,
            hold: 10.0,
            makeup: YesNo::No,
        }
    }
}

impl Limiter {
    /// Create a builder.
    pub fn builder() -> LimiterBuilder {
        LimiterBuilder::default()
    }
}

impl ToCommand for Limiter {
    fn to_command(&self) -> Result<Command> {
        Ok(Command::new("Limiter")
            .param("type", self.limiter_type)
            .param("gain-L", finite("gain_left", self.gain_left)?)
            .param("gain-R", finite("gain_right", self.gain_right)?)
            .param("thresh", finite("limit", self.limit)?)
            .param("hold", finite_at_least("hold", self.hold, 0.0)?)
            .param("makeup", self.makeup))
    }
}

/// `NotchFilter`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct NotchFilter {
    /// Centre frequency in Hz
    pub frequency: f64,
    /// Q factor
    pub q: f64,
}

impl Default for NotchFilter {
    fn default() -> Self {
        Self {
            frequency: 60.0,
            q: 1.0,
        }
    }
}

impl NotchFilter {
    /// Create a builder.
    pub fn builder() -> NotchFilterBuilder {
        NotchFilterBuilder::default()
    }
}

impl ToCommand for NotchFilter {
    fn to_command(&self) -> Result<Command> {
        Ok(Command::new("NotchFilter")
            .param("frequency", finite_above("frequency", self.frequency, 0.0)?)
            .param("q", finite_above("q", self.q, 0.0)?))
    }
}

/// `SpectralEditParametricEq`: boost or cut the spectral selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct SpectralEditParametricEq {
    /// Gain in dB
    pub control_gain: f64,
}

impl SpectralEditParametricEq {
    /// Create a builder.
    pub fn builder() -> SpectralEditParametricEqBuilder {
        SpectralEditParametricEqBuilder::default()
    }
}

impl ToCommand for SpectralEditParametricEq {
    fn to_command(&self) -> Result<Command> {
        Ok(Command::new("SpectralEditParametricEq")
            .param("control-gain", finite("control_gain", self.control_gain)?))
    }
}

/// `SpectralEditShelves`: shelve frequencies outside the spectral selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct SpectralEditShelves {
    /// Gain in dB
    pub control_gain: f64,
}

impl SpectralEditShelves {
    /// Create a builder.
    pub fn builder() -> SpectralEditShelvesBuilder {
        SpectralEditShelvesBuilder::default()
    }
}

impl ToCommand for SpectralEditShelves {
    fn to_command(&self) -> Result<Command> {
        Ok(Command::new("SpectralEditShelves")
            .param("control-gain", finite("control_gain", self.control_gain)?))
    }
}

/// `Tremolo`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct Tremolo {
    /// Modulation shape
    pub wave: TremoloWave,
    /// Start phase in degrees, 0 to 360
    pub phase: f64,
    /// Wet level in percent
    pub wet: f64,
    /// LFO frequency in Hz
    pub lfo: f64,
}

impl Default for Tremolo {
    fn default() -> Self {
        Self {
            wave: TremoloWave::Sine,
            phase: 0.0,
            wet: 40.0,
            lfo: 4.0,
        }
    }
}

impl Tremolo {
    /// Create a builder.
    pub fn builder() -> TremoloBuilder {
        TremoloBuilder::default()
    }
}

impl ToCommand for Tremolo {
    fn to_command(&self) -> Result<Command> {
        Ok(Command::new("Tremolo")
            .param("wave", self.wave)
            .param("phase", in_range("phase", self.phase, 0.0..=360.0)?)
            .param("wet", in_range("wet", self.wet, 0.0..=100.0)?)
            .param("lfo", finite_above("lfo", self.lfo, 0.0)?))
    }
}

/// `VocalReductionAndIsolation`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct VocalReductionAndIsolation {
    /// What to remove or keep
    pub action: VocalAction,
    /// Strength
    pub strength: f64,
    /// Low cut in Hz
    pub low_transition: f64,
    /// High cut in Hz
    pub high_transition: f64,
}

impl Default for VocalReductionAndIsolation {
    fn default() -> Self {
        Self {
            action: VocalAction::RemoveToMono,
            strength: 1.0,
            low_transition: 120.0,
            high_transition: 9000.0,
        }
    }
}

impl VocalReductionAndIsolation {
    /// Create a builder.
    pub fn builder() -> VocalReductionAndIsolationBuilder {
        VocalReductionAndIsolationBuilder::default()
    }
}

impl ToCommand for VocalReductionAndIsolation {
    fn to_command(&self) -> Result<Command> {
        Ok(Command::new("VocalReductionAndIsolation")
            .param("action", self.action)
            .param("strength", finite_at_least("strength", self.strength, 0.0)?)
            .param(
                "low-transition",
                finite_at_least("low_transition", self.low_transition, 0.0)?,
            )
            .param(
                "high-transition",
                finite_at_least("high_transition", self.high_transition, 0.0)?,
            ))
    }
}

/// `Vocoder`: impose the left channel's envelope on the right.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct Vocoder {
    /// Distance between filter bands
    pub distance: f64,
    /// Output routing
    pub output: VocoderOutput,
    /// Number of vocoder bands, at least 1
    pub bands: u32,
    /// Amplitude of the original audio in percent
    pub track_level: f64,
    /// Amplitude of white noise in percent
    pub noise_level: f64,
    /// Amplitude of the radar needles in percent
    pub radar_level: f64,
    /// Frequency of the radar needles in Hz
    pub radar_frequency: f64,
}

impl Default for Vocoder {
    fn default() -> Self {
        Self {
            distance: 0.5,
            output: VocoderOutput::BothChannels,
            bands: 40,
            track_level: 100.0,
            noise_level: 0.0,
            radar_level: 0.0,
            radar_frequency: 30.0,
        }
    }
}

impl Vocoder {
    /// Create a builder.
    pub fn builder() -> VocoderBuilder {
        VocoderBuilder::default()
    }
}

impl ToCommand for Vocoder {
    fn to_command(&self) -> Result<Command> {
        Ok(Command::new("Vocoder")
            .param("dst", finite_above("distance", self.distance, 0.0)?)
            .param("mst", self.output)
            .param("bands", greater_than("bands", self.bands, 0)?)
            .param("track-vl", finite("track_level", self.track_level)?)
            .param("noise-vl", finite("noise_level", self.noise_level)?)
            .param("radar-vl", finite("radar_level", self.radar_level)?)
            .param("radar-f", finite("radar_frequency", self.radar_frequency)?))
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
    fn test_defaults_are_valid() {
        assert!(Amplify::default().to_command().is_ok());
        assert!(AutoDuck::default().to_command().is_ok());
        assert!(BassAndTreble::default().to_command().is_ok());
        assert!(ClickRemoval::default().to_command().is_ok());
        assert!(Compressor::default().to_command().is_ok());
        assert!(Delay::default().to_command().is_ok());
        assert!(Echo::default().to_command().is_ok());
        assert!(HighPassFilter::default().to_command().is_ok());
        assert!(Limiter::default().to_command().is_ok());
        assert!(LoudnessNormalization::default().to_command().is_ok());
        assert!(Normalize::default().to_command().is_ok());
        assert!(Paulstretch::default().to_command().is_ok());
        assert!(Phaser::default().to_command().is_ok());
        assert!(Repeat::default().to_command().is_ok());
        assert!(Reverb::default().to_command().is_ok());
        assert!(Tremolo::default().to_command().is_ok());
        assert!(TruncateSilence::default().to_command().is_ok());
        assert!(VocalReductionAndIsolation::default().to_command().is_ok());
        assert!(Vocoder::default().to_command().is_ok());
        assert!(Wahwah::default().to_command().is_ok());
    }

    #[test]
    fn test_amplify_command() {
        let amplify = Amplify::builder().ratio(1.5).allow_clipping(true).build().unwrap();
        assert_eq!(
            amplify.to_command().unwrap().to_string(),
            r#"Amplify: Ratio="1.5" AllowClipping="True""#
        );
    }

    #[test]
    fn test_loudness_normalization_keys() {
        let command = LoudnessNormalization::builder()
            .normalize_to(NormalizeTarget::Rms)
            .build()
            .unwrap()
            .to_command()
            .unwrap();
        assert_eq!(
            command.to_string(),
            r#"LoudnessNormalization: StereoIndependent="False" LUFSLevel="-23.0" RMSLevel="-20.0" DualMono="True" NormalizeTo="1""#
        );
    }

    #[test]
    fn test_filter_names_keep_hyphen() {
        let high = HighPassFilter::builder()
            .frequency(250)
            .rolloff(Rolloff::Db24)
            .build()
            .unwrap();
        assert_eq!(
            high.to_command().unwrap().to_string(),
            r#"High-passFilter: frequency="250.0" rolloff="dB24""#
        );
        assert_eq!(
            LowPassFilter::default().to_command().unwrap().name(),
            "Low-passFilter"
        );
    }

    #[test]
    fn test_vocal_reduction_sends_action() {
        let command = VocalReductionAndIsolation::builder()
            .action(VocalAction::IsolateCenter)
            .build()
            .unwrap()
            .to_command()
            .unwrap();
        assert_eq!(command.get("action"), Some("IsolateCenter"));
        assert_eq!(command.get("low-transition"), Some("120.0"));
        assert_eq!(command.get("high-transition"), Some("9000.0"));
    }

    #[rstest]
    #[case::odd_stages(Phaser { stages: 3, ..Default::default() }, "stages")]
    #[case::too_many_stages(Phaser { stages: 26, ..Default::default() }, "stages")]
    #[case::depth(Phaser { depth: 300, ..Default::default() }, "depth")]
    #[case::feedback(Phaser { feedback: -101, ..Default::default() }, "feedback")]
    #[case::phase(Phaser { phase: 361.0, ..Default::default() }, "phase")]
    fn test_phaser_rejects(#[case] phaser: Phaser, #[case] argument: &str) {
        assert_matches!(
            phaser.to_command(),
            Err(Error::InvalidArgument { argument: got, .. }) if got == argument
        );
    }

    #[rstest]
    #[case(Amplify { ratio: 0.0, ..Default::default() }.to_command())]
    #[case(ChangeSpeed { percentage: -100.0 }.to_command())]
    #[case(ClickRemoval { threshold: 901, ..Default::default() }.to_command())]
    #[case(Compressor { ratio: 0.5, ..Default::default() }.to_command())]
    #[case(Delay { number_of_echoes: 0, ..Default::default() }.to_command())]
    #[case(Echo { delay: 0.0, ..Default::default() }.to_command())]
    #[case(Normalize { peak_level: 1.0, ..Default::default() }.to_command())]
    #[case(Paulstretch { stretch_factor: 0.5, ..Default::default() }.to_command())]
    #[case(Repeat { count: 0 }.to_command())]
    #[case(Reverb { room_size: 101.0, ..Default::default() }.to_command())]
    #[case(Tremolo { lfo: 0.0, ..Default::default() }.to_command())]
    #[case(Vocoder { bands: 0, ..Default::default() }.to_command())]
    #[case(Wahwah { depth: 101, ..Default::default() }.to_command())]
    fn test_out_of_range_is_invalid(#[case] result: Result<Command>) {
        assert_matches!(result, Err(Error::InvalidArgument { .. }));
    }

    #[test]
    fn test_delay_wire_keys() {
        let command = Delay::default().to_command().unwrap();
        assert_eq!(
            command.to_string(),
            r#"Delay: delay-type="Regular" dgain="-6.0" delay="0.3" pitch-type="PitchTempo" shift="0.0" number="5" constrain="Yes""#
        );
    }
}
