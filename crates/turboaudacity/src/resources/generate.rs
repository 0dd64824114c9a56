//! Generate menu

use crate::error::Result;
use crate::types::{Chirp, Noise, Pluck, RhythmTrack, RissetDrum, Tone};

resource! {
    /// Generate menu.
    Generate
}

impl Generate<'_> {
    /// Sweep between two tones (`Chirp`).
    pub async fn chirp(&self, params: Chirp) -> Result<String> {
        self.client.run(&params).await
    }

    /// Generate a steady tone (`Tone`).
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use turboaudacity::{Client, Waveform, types::Tone};
    /// # async fn example(client: Client) -> turboaudacity::Result<()> {
    /// let tone = Tone::builder().frequency(220.0).waveform(Waveform::Triangle).build()?;
    /// client.generate().tone(tone).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn tone(&self, params: Tone) -> Result<String> {
        self.client.run(&params).await
    }

    /// Generate noise (`Noise`).
    pub async fn noise(&self, params: Noise) -> Result<String> {
        self.client.run(&params).await
    }

    /// Pluck a string (`Pluck`).
    pub async fn pluck(&self, params: Pluck) -> Result<String> {
        self.client.run(&params).await
    }

    /// Generate a click track (`RhythmTrack`).
    pub async fn rhythm_track(&self, params: RhythmTrack) -> Result<String> {
        self.client.run(&params).await
    }

    /// `RissetDrum`
    pub async fn risset_drum(&self, params: RissetDrum) -> Result<String> {
        self.client.run(&params).await
    }

    bare_macros! {
        /// Opens the plugin manager for generators.
        manage_generators => "ManageGenerators";
        built_in => "Built-in";
        nyquist => "Nyquist";
    }

    unimplemented_macros! {
        /// Telephone dial tones.
        dtmf_tones => "DtmfTones";
    }
}
