//! Pipe locations and line terminator

use std::path::PathBuf;

/// Outbound pipe on Windows
pub const WINDOWS_TO_SERVER: &str = r"\\.\pipe\ToSrvPipe";

/// Inbound pipe on Windows
pub const WINDOWS_FROM_SERVER: &str = r"\\.\pipe\FromSrvPipe";

/// Command terminator on Windows
pub const WINDOWS_EOL: &str = "\r\n\0";

/// Command terminator elsewhere
pub const UNIX_EOL: &str = "\n";

/// Where mod-script-pipe listens and how commands are terminated
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PipeConfig {
    /// Pipe the commands are written to
    pub to_server: PathBuf,

    /// Pipe the responses are read from
    pub from_server: PathBuf,

    /// Appended to every command line
    pub eol: String,
}

impl Default for PipeConfig {
    fn default() -> Self {
        Self::platform_default()
    }
}

impl PipeConfig {
    /// Create a configuration for explicit pipe paths, keeping the platform terminator
    pub fn new(to_server: impl Into<PathBuf>, from_server: impl Into<PathBuf>) -> Self {
        Self {
            to_server: to_server.into(),
            from_server: from_server.into(),
            eol: default_eol().to_string(),
        }
    }

    /// Pipes created by mod-script-pipe for the current platform and user.
    ///
    /// On Unix these are `/tmp/audacity_script_pipe.to.<uid>` and
    /// `/tmp/audacity_script_pipe.from.<uid>`; on Windows the fixed
    /// `ToSrvPipe`/`FromSrvPipe` pair.
    #[cfg(unix)]
    pub fn platform_default() -> Self {
        let uid = nix::unistd::getuid().as_raw();
        Self::new(
            format!("/tmp/audacity_script_pipe.to.{}", uid),
            format!("/tmp/audacity_script_pipe.from.{}", uid),
        )
    }

    /// Pipes created by mod-script-pipe for the current platform and user.
    #[cfg(windows)]
    pub fn platform_default() -> Self {
        Self::new(WINDOWS_TO_SERVER, WINDOWS_FROM_SERVER)
    }

    /// Set the outbound pipe
    pub fn with_to_server(mut self, path: impl Into<PathBuf>) -> Self {
        self.to_server = path.into();
        self
    }

    /// Set the inbound pipe
    pub fn with_from_server(mut self, path: impl Into<PathBuf>) -> Self {
        self.from_server = path.into();
        self
    }

    /// Set the command terminator
    pub fn with_eol(mut self, eol: impl Into<String>) -> Self {
        self.eol = eol.into();
        self
    }
}

fn default_eol() -> &'static str {
    if cfg!(windows) { WINDOWS_EOL } else { UNIX_EOL }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(unix)]
    #[test]
    fn test_platform_default_uses_uid() {
        let uid = nix::unistd::getuid().as_raw();
        let config = PipeConfig::default();
        assert_eq!(
            config.to_server,
            PathBuf::from(format!("/tmp/audacity_script_pipe.to.{}", uid))
        );
        assert_eq!(
            config.from_server,
            PathBuf::from(format!("/tmp/audacity_script_pipe.from.{}", uid))
        );
        assert_eq!(config.eol, "\n");
    }

    #[cfg(windows)]
    #[test]
    fn test_platform_default_windows() {
        let config = PipeConfig::default();
        assert_eq!(config.to_server, PathBuf::from(WINDOWS_TO_SERVER));
        assert_eq!(config.eol, "\r\n\0");
    }

    #[test]
    fn test_config_builder() {
        let config = PipeConfig::new("/tmp/in", "/tmp/out")
            .with_to_server("/tmp/to")
            .with_from_server("/tmp/from")
            .with_eol("\r\n");

        assert_eq!(config.to_server, PathBuf::from("/tmp/to"));
        assert_eq!(config.from_server, PathBuf::from("/tmp/from"));
        assert_eq!(config.eol, "\r\n");
    }
}
