//! Effect menu

use crate::error::Result;
use crate::types::{
    AdjustableFade, Amplify, AutoDuck, BassAndTreble, ChangePitch, ChangeSpeed, ChangeTempo,
    ClickRemoval, ClipFix, Compressor, CrossfadeTracks, Delay, Echo, HighPassFilter, Limiter,
    LoudnessNormalization, LowPassFilter, Normalize, NotchFilter, Paulstretch, Phaser, Repeat,
    Reverb, SlidingStretch, SpectralEditParametricEq, SpectralEditShelves, Tremolo,
    TruncateSilence, VocalReductionAndIsolation, Vocoder, Wahwah,
};

resource! {
    /// Effect menu. Effects act on the current selection.
    Effect
}

impl Effect<'_> {
    /// Scale the selection by a linear ratio.
    pub async fn amplify(&self, params: Amplify) -> Result<String> {
        self.client.run(&params).await
    }

    /// `AutoDuck`
    pub async fn auto_duck(&self, params: AutoDuck) -> Result<String> {
        self.client.run(&params).await
    }

    /// `BassAndTreble`
    pub async fn bass_and_treble(&self, params: BassAndTreble) -> Result<String> {
        self.client.run(&params).await
    }

    /// Shift pitch, keeping tempo.
    pub async fn change_pitch(&self, params: ChangePitch) -> Result<String> {
        self.client.run(&params).await
    }

    /// `ChangeSpeed`
    pub async fn change_speed(&self, params: ChangeSpeed) -> Result<String> {
        self.client.run(&params).await
    }

    /// Change tempo, keeping pitch.
    pub async fn change_tempo(&self, params: ChangeTempo) -> Result<String> {
        self.client.run(&params).await
    }

    /// `ClickRemoval`
    pub async fn click_removal(&self, params: ClickRemoval) -> Result<String> {
        self.client.run(&params).await
    }

    /// `Compressor`
    pub async fn compressor(&self, params: Compressor) -> Result<String> {
        self.client.run(&params).await
    }

    /// `Echo`
    pub async fn echo(&self, params: Echo) -> Result<String> {
        self.client.run(&params).await
    }

    /// `LoudnessNormalization`
    pub async fn loudness_normalization(&self, params: LoudnessNormalization) -> Result<String> {
        self.client.run(&params).await
    }

    /// Normalize peaks and remove DC offset.
    pub async fn normalize(&self, params: Normalize) -> Result<String> {
        self.client.run(&params).await
    }

    /// `Paulstretch`
    pub async fn paulstretch(&self, params: Paulstretch) -> Result<String> {
        self.client.run(&params).await
    }

    /// `Phaser`
    pub async fn phaser(&self, params: Phaser) -> Result<String> {
        self.client.run(&params).await
    }

    /// `Repeat`
    pub async fn repeat(&self, params: Repeat) -> Result<String> {
        self.client.run(&params).await
    }

    /// `Reverb`
    pub async fn reverb(&self, params: Reverb) -> Result<String> {
        self.client.run(&params).await
    }

    /// `SlidingStretch`
    pub async fn sliding_stretch(&self, params: SlidingStretch) -> Result<String> {
        self.client.run(&params).await
    }

    /// Shorten or compress silent passages.
    pub async fn truncate_silence(&self, params: TruncateSilence) -> Result<String> {
        self.client.run(&params).await
    }

    /// `Wahwah`
    pub async fn wahwah(&self, params: Wahwah) -> Result<String> {
        self.client.run(&params).await
    }

    /// `AdjustableFade`
    pub async fn adjustable_fade(&self, params: AdjustableFade) -> Result<String> {
        self.client.run(&params).await
    }

    /// `ClipFix`
    pub async fn clip_fix(&self, params: ClipFix) -> Result<String> {
        self.client.run(&params).await
    }

    /// `CrossfadeTracks`
    pub async fn crossfade_tracks(&self, params: CrossfadeTracks) -> Result<String> {
        self.client.run(&params).await
    }

    /// `Delay`
    pub async fn delay(&self, params: Delay) -> Result<String> {
        self.client.run(&params).await
    }

    /// Sends `High-passFilter`.
    pub async fn high_pass_filter(&self, params: HighPassFilter) -> Result<String> {
        self.client.run(&params).await
    }

    /// Sends `Low-passFilter`.
    pub async fn low_pass_filter(&self, params: LowPassFilter) -> Result<String> {
        self.client.run(&params).await
    }

    /// `Limiter`
    pub async fn limiter(&self, params: Limiter) -> Result<String> {
        self.client.run(&params).await
    }

    /// `NotchFilter`
    pub async fn notch_filter(&self, params: NotchFilter) -> Result<String> {
        self.client.run(&params).await
    }

    /// `SpectralEditParametricEq`
    pub async fn spectral_edit_parametric_eq(&self, params: SpectralEditParametricEq) -> Result<String> {
        self.client.run(&params).await
    }

    /// `SpectralEditShelves`
    pub async fn spectral_edit_shelves(&self, params: SpectralEditShelves) -> Result<String> {
        self.client.run(&params).await
    }

    /// `Tremolo`
    pub async fn tremolo(&self, params: Tremolo) -> Result<String> {
        self.client.run(&params).await
    }

    /// `VocalReductionAndIsolation`
    pub async fn vocal_reduction_and_isolation(&self, params: VocalReductionAndIsolation) -> Result<String> {
        self.client.run(&params).await
    }

    /// `Vocoder`
    pub async fn vocoder(&self, params: Vocoder) -> Result<String> {
        self.client.run(&params).await
    }

    bare_macros! {
        manage_effects => "ManageEffects";
        repeat_last_effect => "RepeatLastEffect";
        ladspa => "LADSPA";
        /// Linear fade in over the selection.
        fade_in => "FadeIn";
        /// Linear fade out over the selection.
        fade_out => "FadeOut";
        invert => "Invert";
        repair => "Repair";
        reverse => "Reverse";
        crossfade_clips => "CrossfadeClips";
        spectral_edit_multi_tool => "SpectralEditMultiTool";
        studio_fade_out => "StudioFadeOut";
    }

    unimplemented_macros! {
        distortion => "Distortion";
        /// Curve-based equalizer; the curve cannot be passed as a macro argument.
        filter_curve => "FilterCurve";
        graphic_eq => "GraphicEq";
    }
}
