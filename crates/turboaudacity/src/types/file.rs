//! Project and file macros

use super::ToCommand;
use crate::error::Result;
use crate::validation;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use turboaudacity_protocol::Command;

/// `OpenProject2`: open a project or audio file without showing a dialog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct OpenProject {
    /// File to open; must exist
    pub filename: PathBuf,

    /// Add the file to the recent files list
    pub add_to_history: bool,
}

impl OpenProject {
    /// Open `filename` with the remaining arguments at their defaults.
    pub fn new(filename: impl Into<PathBuf>) -> Self {
        Self {
            filename: filename.into(),
            ..Default::default()
        }
    }

    /// Create a builder.
    pub fn builder() -> OpenProjectBuilder {
        OpenProjectBuilder::default()
    }
}

impl ToCommand for OpenProject {
    fn to_command(&self) -> Result<Command> {
        validation::file_exists("filename", &self.filename)?;
        Ok(Command::new("OpenProject2")
            .param("Filename", &self.filename)
            .param("AddToHistory", self.add_to_history))
    }
}

/// `SaveProject2`: save the project as an `.aup3` file without a dialog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct SaveProject {
    /// Target file
    pub filename: PathBuf,

    /// Add the file to the recent files list
    pub add_to_history: bool,

    /// Save a compressed copy
    pub compress: bool,

    /// Delete an existing file at `filename` before saving.
    ///
    /// Audacity would otherwise stop on a modal overwrite prompt that the
    /// pipe cannot answer.
    pub allow_overwrite: bool,
}

impl Default for SaveProject {
    fn default() -> Self {
        Self {
            filename: PathBuf::new(),
            add_to_history: false,
            compress: false,
            allow_overwrite: true,
        }
    }
}

impl SaveProject {
    /// Save to `filename` with the remaining arguments at their defaults.
    pub fn new(filename: impl Into<PathBuf>) -> Self {
        Self {
            filename: filename.into(),
            ..Default::default()
        }
    }

    /// Create a builder.
    pub fn builder() -> SaveProjectBuilder {
        SaveProjectBuilder::default()
    }
}

impl ToCommand for SaveProject {
    fn to_command(&self) -> Result<Command> {
        validation::filename("filename", &self.filename)?;
        Ok(Command::new("SaveProject2")
            .param("Filename", &self.filename)
            .param("AddToHistory", self.add_to_history)
            .param("Compress", self.compress))
    }
}

/// `Export2`: export the selected audio to a file, format picked by extension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct Export {
    /// Target file
    pub filename: PathBuf,

    /// 1 for mono, 2 for stereo
    pub num_channels: u8,
}

impl Default for Export {
    fn default() -> Self {
        Self {
            filename: PathBuf::new(),
            num_channels: 1,
        }
    }
}

impl Export {
    /// Export to `filename` with `num_channels` channels.
    pub fn new(filename: impl Into<PathBuf>, num_channels: u8) -> Self {
        Self {
            filename: filename.into(),
            num_channels,
        }
    }

    /// Create a builder.
    pub fn builder() -> ExportBuilder {
        ExportBuilder::default()
    }
}

impl ToCommand for Export {
    fn to_command(&self) -> Result<Command> {
        validation::filename("filename", &self.filename)?;
        validation::in_range("num_channels", self.num_channels, 1..=2)?;
        Ok(Command::new("Export2")
            .param("Filename", &self.filename)
            .param("NumChannels", self.num_channels))
    }
}

/// `Import2`: import an audio file into new tracks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Builder)]
#[builder(default, setter(into), build_fn(error = "crate::Error"))]
#[serde(default)]
pub struct Import {
    /// File to import; must exist
    pub filename: PathBuf,
}

impl Import {
    /// Import `filename`.
    pub fn new(filename: impl Into<PathBuf>) -> Self {
        Self {
            filename: filename.into(),
        }
    }

    /// Create a builder.
    pub fn builder() -> ImportBuilder {
        ImportBuilder::default()
    }
}

impl ToCommand for Import {
    fn to_command(&self) -> Result<Command> {
        validation::file_exists("filename", &self.filename)?;
        Ok(Command::new("Import2").param("Filename", &self.filename))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_open_project_requires_existing_file() {
        let file = tempfile::Builder::new().suffix(".aup3").tempfile().unwrap();
        let command = OpenProject::new(file.path()).to_command().unwrap();
        assert_eq!(
            command.to_string(),
            format!(
                r#"OpenProject2: Filename="{}" AddToHistory="False""#,
                file.path().display()
            )
        );

        let missing = OpenProject::new("/definitely/not/here.aup3");
        assert!(matches!(missing.to_command(), Err(Error::FileNotFound(_))));
    }

    #[test]
    fn test_save_project_command() {
        let save = SaveProject::builder()
            .filename("/tmp/song.aup3")
            .compress(true)
            .build()
            .unwrap();
        assert!(save.allow_overwrite);
        assert_eq!(
            save.to_command().unwrap().to_string(),
            r#"SaveProject2: Filename="/tmp/song.aup3" AddToHistory="False" Compress="True""#
        );
    }

    #[test]
    fn test_export_channels() {
        assert_eq!(
            Export::new("/tmp/out.wav", 2).to_command().unwrap().to_string(),
            r#"Export2: Filename="/tmp/out.wav" NumChannels="2""#
        );
        assert!(Export::new("/tmp/out.wav", 3).to_command().is_err());
        assert!(Export::new("", 1).to_command().is_err());
    }

    #[test]
    fn test_import_uses_import2() {
        let file = tempfile::Builder::new().suffix(".wav").tempfile().unwrap();
        let command = Import::new(file.path()).to_command().unwrap();
        assert_eq!(command.name(), "Import2");
        assert_eq!(command.get("Filename"), Some(file.path().to_str().unwrap()));
    }
}
