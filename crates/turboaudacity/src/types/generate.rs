//! Generators: macros that write new audio at the cursor or over the selection

use super::ToCommand;
use crate::error::Result;
use crate::validation::{finite, finite_above, finite_at_least, in_range};
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use turboaudacity_protocol::{BeatSound, Command, Interpolation, NoiseType, PluckFade, Waveform};

/// `Chirp`: a tone sweeping between two frequencies and amplitudes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct Chirp {
    /// Start frequency in Hz
    pub start_frequency: f64,
    /// End frequency in Hz
    pub end_frequency: f64,
    /// Start amplitude, 0 to 1
    pub start_amplitude: f64,
    /// End amplitude, 0 to 1
    pub end_amplitude: f64,
    /// Oscillator shape
    pub waveform: Waveform,
    /// Sweep curve
    pub interpolation: Interpolation,
}

impl Default for Chirp {
    fn default() -> Self {
        Self {
            start_frequency: 440.0,
            end_frequency: 1320.0,
            start_amplitude: 0.8,
            end_amplitude: 0.1,
            waveform: Waveform::Sine,
            interpolation: Interpolation::Linear,
        }
    }
}

impl Chirp {
    /// Create a builder.
    pub fn builder() -> ChirpBuilder {
        ChirpBuilder::default()
    }
}

impl ToCommand for Chirp {
    fn to_command(&self) -> Result<Command> {
        finite_at_least("start_frequency", self.start_frequency, 0.0)?;
        finite_at_least("end_frequency", self.end_frequency, 0.0)?;
        in_range("start_amplitude", self.start_amplitude, 0.0..=1.0)?;
        in_range("end_amplitude", self.end_amplitude, 0.0..=1.0)?;

        Ok(Command::new("Chirp")
            .param("StartFreq", self.start_frequency)
            .param("EndFreq", self.end_frequency)
            .param("StartAmp", self.start_amplitude)
            .param("EndAmp", self.end_amplitude)
            .param("Waveform", self.waveform)
            .param("Interpolation", self.interpolation))
    }
}

/// `Tone`: a steady tone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct Tone {
    /// Frequency in Hz
    pub frequency: f64,
    /// Amplitude, 0 to 1
    pub amplitude: f64,
    /// Oscillator shape
    pub waveform: Waveform,
}

impl Default for Tone {
    fn default() -> Self {
        Self {
            frequency: 440.0,
            amplitude: 0.8,
            waveform: Waveform::Sine,
        }
    }
}

impl Tone {
    /// Create a builder.
    pub fn builder() -> ToneBuilder {
        ToneBuilder::default()
    }
}

impl ToCommand for Tone {
    fn to_command(&self) -> Result<Command> {
        finite_above("frequency", self.frequency, 0.0)?;
        in_range("amplitude", self.amplitude, 0.0..=1.0)?;

        Ok(Command::new("Tone")
            .param("Frequency", self.frequency)
            .param("Amplitude", self.amplitude)
            .param("Waveform", self.waveform))
    }
}

/// `Noise`: white, pink or brownian noise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct Noise {
    /// Noise colour
    pub noise_type: NoiseType,
    /// Amplitude, 0 to 1
    pub amplitude: f64,
}

impl Default for Noise {
    fn default() -> Self {
        Self {
            noise_type: NoiseType::White,
            amplitude: 0.8,
        }
    }
}

impl Noise {
    /// Create a builder.
    pub fn builder() -> NoiseBuilder {
        NoiseBuilder::default()
    }
}

impl ToCommand for Noise {
    fn to_command(&self) -> Result<Command> {
        in_range("amplitude", self.amplitude, 0.0..=1.0)?;

        Ok(Command::new("Noise")
            .param("Type", self.noise_type)
            .param("Amplitude", self.amplitude))
    }
}

/// `Pluck`: a synthesized plucked string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct Pluck {
    /// MIDI pitch
    pub pitch: u8,
    /// Decay shape
    pub fade: PluckFade,
    /// Length in seconds, at most 60
    pub duration: f64,
}

impl Default for Pluck {
    fn default() -> Self {
        Self {
            pitch: 60,
            fade: PluckFade::Abrupt,
            duration: 1.0,
        }
    }
}

impl Pluck {
    /// Create a builder.
    pub fn builder() -> PluckBuilder {
        PluckBuilder::default()
    }
}

impl ToCommand for Pluck {
    fn to_command(&self) -> Result<Command> {
        in_range("pitch", self.pitch, 0..=127)?;
        finite_above("duration", self.duration, 0.0)?;
        in_range("duration", self.duration, 0.0..=60.0)?;

        Ok(Command::new("Pluck")
            .param("pitch", self.pitch)
            .param("fade", self.fade)
            .param("dur", self.duration))
    }
}

/// `RhythmTrack`: a metronome click track.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct RhythmTrack {
    /// Beats per minute, 30 to 300
    pub tempo: f64,
    /// Beats per bar, 1 to 20
    pub beats_per_bar: u32,
    /// Swing, -1 to 1
    pub swing: f64,
    /// Number of bars, 1 to 1000
    pub bars: u32,
    /// Track length in seconds; overrides `bars` when non-zero
    pub click_track_duration: f64,
    /// Silence before the first beat, in seconds
    pub offset: f64,
    /// Click sound
    pub click_type: BeatSound,
    /// MIDI pitch of the strong beat, 18 to 116
    pub pitch_of_strong_beat: u8,
    /// MIDI pitch of the weak beats, 18 to 116
    pub pitch_of_weak_beat: u8,
}

impl Default for RhythmTrack {
    fn default() -> Self {
        Self {
            tempo: 120.0,
            beats_per_bar: 4,
            swing: 0.0,
            bars: 16,
            click_track_duration: 0.0,
            offset: 0.0,
            click_type: BeatSound::Metronome,
            pitch_of_strong_beat: 84,
            pitch_of_weak_beat: 80,
        }
    }
}

impl RhythmTrack {
    /// Create a builder.
    pub fn builder() -> RhythmTrackBuilder {
        RhythmTrackBuilder::default()
    }
}

impl ToCommand for RhythmTrack {
    fn to_command(&self) -> Result<Command> {
        in_range("tempo", self.tempo, 30.0..=300.0)?;
        in_range("beats_per_bar", self.beats_per_bar, 1..=20)?;
        in_range("swing", self.swing, -1.0..=1.0)?;
        in_range("bars", self.bars, 1..=1000)?;
        finite_at_least("click_track_duration", self.click_track_duration, 0.0)?;
        finite_at_least("offset", self.offset, 0.0)?;
        in_range("pitch_of_strong_beat", self.pitch_of_strong_beat, 18..=116)?;
        in_range("pitch_of_weak_beat", self.pitch_of_weak_beat, 18..=116)?;

        Ok(Command::new("RhythmTrack")
            .param("tempo", self.tempo)
            .param("timesig", self.beats_per_bar)
            .param("swing", self.swing)
            .param("bars", self.bars)
            .param("click-track-dur", self.click_track_duration)
            .param("offset", self.offset)
            .param("click-type", self.click_type)
            .param("high", self.pitch_of_strong_beat)
            .param("low", self.pitch_of_weak_beat))
    }
}

/// `RissetDrum`: a decaying drum hit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct RissetDrum {
    /// Fundamental frequency in Hz
    pub frequency: f64,
    /// Decay in seconds
    pub decay: f64,
    /// Centre frequency of the noise band in Hz
    pub center_frequency: f64,
    /// Width of the noise band in Hz
    pub width: f64,
    /// Amount of noise in percent
    pub noise: f64,
    /// Output amplitude
    pub amplitude: f64,
}

impl Default for RissetDrum {
    fn default() -> Self {
        Self {
            frequency: 100.0,
            decay: 2.0,
            center_frequency: 500.0,
            width: 400.0,
            noise: 25.0,
            amplitude: 0.8,
        }
    }
}

impl RissetDrum {
    /// Create a builder.
    pub fn builder() -> RissetDrumBuilder {
        RissetDrumBuilder::default()
    }
}

impl ToCommand for RissetDrum {
    fn to_command(&self) -> Result<Command> {
        Ok(Command::new("RissetDrum")
            .param("freq", finite("frequency", self.frequency)?)
            .param("decay", finite("decay", self.decay)?)
            .param("cf", finite("center_frequency", self.center_frequency)?)
            .param("bw", finite("width", self.width)?)
            .param("noise", finite("noise", self.noise)?)
            .param("gain", finite("amplitude", self.amplitude)?))
    }
}
