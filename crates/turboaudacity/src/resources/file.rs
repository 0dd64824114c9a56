//! File menu

use crate::error::Result;
use crate::types::{Export, Import, OpenProject, SaveProject, ToCommand};
use tracing::debug;

resource! {
    /// File menu: projects, import and export.
    ///
    /// Most entries here open a dialog in Audacity. The scriptable ways to
    /// open, save, import and export are [`File::open`], [`File::save`],
    /// [`File::import_audio`] and [`File::export`].
    File
}

impl File<'_> {
    /// Open a project or audio file without a dialog (`OpenProject2`).
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # use turboaudacity::{Client, types::OpenProject};
    /// # async fn example(client: Client) -> turboaudacity::Result<()> {
    /// client.file().open(OpenProject::new("/home/al/song.aup3")).await?;
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip(self, params), fields(filename = %params.filename.display()))]
    pub async fn open(&self, params: OpenProject) -> Result<String> {
        self.client.run(&params).await
    }

    /// Save the project without a dialog (`SaveProject2`).
    ///
    /// With [`SaveProject::allow_overwrite`] set an existing file is deleted
    /// first, since Audacity would otherwise wait on an overwrite prompt.
    #[tracing::instrument(skip(self, params), fields(filename = %params.filename.display()))]
    pub async fn save(&self, params: SaveProject) -> Result<String> {
        // Fully encoded before the old project is touched
        let line = params.to_command()?.to_wire()?;

        if params.allow_overwrite && tokio::fs::try_exists(&params.filename).await? {
            debug!("Removing existing project before save");
            tokio::fs::remove_file(&params.filename).await?;
        }

        self.client.do_command(&line).await
    }

    /// Export the selected audio (`Export2`). The format follows the file
    /// extension; other options come from Audacity's saved preferences.
    pub async fn export(&self, params: Export) -> Result<String> {
        self.client.run(&params).await
    }

    /// Import an audio file into new tracks (`Import2`).
    pub async fn import_audio(&self, params: Import) -> Result<String> {
        self.client.run(&params).await
    }

    bare_macros! {
        /// Create an empty project window.
        new_project => "New";
        close => "Close";
        page_setup => "PageSetup";
        print => "Print";
        /// Quit Audacity. The pipes go away with it.
        exit => "Exit";
        /// Opens the Save As dialog.
        save_as => "SaveAs";
        export_mp3 => "ExportMp3";
        export_wav => "ExportWav";
        export_ogg => "ExportOgg";
        export_sel => "ExportSel";
        export_labels => "ExportLabels";
        export_multiple => "ExportMultiple";
        export_midi => "ExportMIDI";
        import_labels => "ImportLabels";
        import_midi => "ImportMIDI";
        import_raw => "ImportRaw";
    }
}
