//! Analyze menu

use crate::error::Result;
use crate::types::{BeatFinder, FindClipping, LabelSounds};

resource! {
    /// Analyze menu. Most analyzers report by adding a label track.
    Analyze
}

impl Analyze<'_> {
    /// Label clipped regions (`FindClipping`).
    pub async fn find_clipping(&self, params: FindClipping) -> Result<String> {
        self.client.run(&params).await
    }

    /// Label beats (`BeatFinder`).
    pub async fn beat_finder(&self, params: BeatFinder) -> Result<String> {
        self.client.run(&params).await
    }

    /// Label sounds separated by silence (`LabelSounds`).
    pub async fn label_sounds(&self, params: LabelSounds) -> Result<String> {
        self.client.run(&params).await
    }

    bare_macros! {
        manage_analyzers => "ManageAnalyzers";
        /// Opens the contrast analysis dialog.
        contrast_analyser => "ContrastAnalyser";
        plot_spectrum => "PlotSpectrum";
    }
}
