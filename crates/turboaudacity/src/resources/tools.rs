//! Tools menu

use crate::error::Result;
use crate::types::{NyquistPrompt, RegularIntervalLabels, SampleDataExport};

resource! {
    /// Tools menu: macros, Nyquist and sample data.
    Tools
}

impl Tools<'_> {
    /// Run Nyquist code on the selection (`NyquistPrompt`).
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use turboaudacity::{Client, types::NyquistPrompt};
    /// # async fn example(client: Client) -> turboaudacity::Result<()> {
    /// client.tools().nyquist_prompt(NyquistPrompt::new("(mult *track* 0.5)")).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn nyquist_prompt(&self, params: NyquistPrompt) -> Result<String> {
        self.client.run(&params).await
    }

    /// Add labels at regular intervals (`RegularIntervalLabels`).
    pub async fn regular_interval_labels(&self, params: RegularIntervalLabels) -> Result<String> {
        self.client.run(&params).await
    }

    /// Write sample values to a text file (`SampleDataExport`).
    pub async fn sample_data_export(&self, params: SampleDataExport) -> Result<String> {
        self.client.run(&params).await
    }

    bare_macros! {
        manage_tools => "ManageTools";
        manage_macros => "ManageMacros";
        apply_macro => "ApplyMacro";
        benchmark => "Benchmark";
        apply_macros_palette => "ApplyMacrosPalette";
        /// Run the bundled "Fade Ends" macro.
        macro_fade_ends => "Macro_FadeEnds";
        /// Run the bundled "MP3 Conversion" macro.
        macro_mp3_conversion => "Macro_MP3Conversion";
    }

    unimplemented_macros! {
        screenshot => "Screenshot";
        nyquist_plugin_installer => "NyquistPluginInstaller";
        sample_data_import => "SampleDataImport";
    }
}
