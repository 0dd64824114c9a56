//! Configuration for the TurboAudacity client

use std::path::PathBuf;
use turboaudacity_transport::PipeConfig;

/// Configuration for the TurboAudacity client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Pipes used to reach mod-script-pipe
    pub pipes: PipeConfig,

    /// Turn a `BatchCommand finished: Failed!` response into
    /// [`Error::CommandFailed`](crate::Error::CommandFailed).
    ///
    /// When disabled the failing response is returned as ordinary text and
    /// the caller has to inspect it.
    pub fail_on_error: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            pipes: PipeConfig::default(),
            fail_on_error: true,
        }
    }
}

impl ClientConfig {
    /// Create a configuration for explicit pipe paths.
    pub fn with_pipes(to_server: impl Into<PathBuf>, from_server: impl Into<PathBuf>) -> Self {
        Self {
            pipes: PipeConfig::new(to_server, from_server),
            ..Default::default()
        }
    }

    /// Set the command terminator.
    pub fn with_eol(mut self, eol: impl Into<String>) -> Self {
        self.pipes.eol = eol.into();
        self
    }

    /// Choose whether failed macros become errors.
    pub fn with_fail_on_error(mut self, fail_on_error: bool) -> Self {
        self.fail_on_error = fail_on_error;
        self
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first if present. Then:
    /// - `AUDACITY_PIPE_TO` for the command pipe
    /// - `AUDACITY_PIPE_FROM` for the response pipe
    /// - `AUDACITY_FAIL_ON_ERROR` (`true`/`false`, `1`/`0`, `yes`/`no`)
    ///
    /// Unset variables keep the platform defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`](crate::Error::InvalidConfig) if
    /// `AUDACITY_FAIL_ON_ERROR` is set to something that is not a boolean.
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self, crate::error::Error> {
        use std::env;

        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let mut config = Self::default();

        if let Ok(to_server) = env::var("AUDACITY_PIPE_TO") {
            config.pipes.to_server = PathBuf::from(to_server);
        }

        if let Ok(from_server) = env::var("AUDACITY_PIPE_FROM") {
            config.pipes.from_server = PathBuf::from(from_server);
        }

        if let Ok(flag) = env::var("AUDACITY_FAIL_ON_ERROR") {
            config.fail_on_error = parse_flag(&flag).ok_or_else(|| {
                crate::error::Error::InvalidConfig(format!(
                    "AUDACITY_FAIL_ON_ERROR must be true or false, got: '{}'",
                    flag
                ))
            })?;
        }

        Ok(config)
    }
}

#[cfg(feature = "env")]
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_fails_on_error() {
        let config = ClientConfig::default();
        assert!(config.fail_on_error);
        assert_eq!(config.pipes, PipeConfig::default());
    }

    #[test]
    fn test_config_builders() {
        let config = ClientConfig::with_pipes("/tmp/to", "/tmp/from")
            .with_eol("\r\n\0")
            .with_fail_on_error(false);

        assert_eq!(config.pipes.to_server, PathBuf::from("/tmp/to"));
        assert_eq!(config.pipes.from_server, PathBuf::from("/tmp/from"));
        assert_eq!(config.pipes.eol, "\r\n\0");
        assert!(!config.fail_on_error);
    }

    #[cfg(feature = "env")]
    #[test]
    fn test_config_from_env_variables() {
        temp_env::with_vars(
            [
                ("AUDACITY_PIPE_TO", Some("/run/user/to")),
                ("AUDACITY_PIPE_FROM", Some("/run/user/from")),
                ("AUDACITY_FAIL_ON_ERROR", Some("no")),
            ],
            || {
                let config = ClientConfig::from_env().expect("Should load config from environment");
                assert_eq!(config.pipes.to_server, PathBuf::from("/run/user/to"));
                assert_eq!(config.pipes.from_server, PathBuf::from("/run/user/from"));
                assert!(!config.fail_on_error);
            },
        );
    }

    #[cfg(feature = "env")]
    #[test]
    fn test_config_from_env_rejects_bad_flag() {
        temp_env::with_var("AUDACITY_FAIL_ON_ERROR", Some("sometimes"), || {
            let err = ClientConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("AUDACITY_FAIL_ON_ERROR"));
        });
    }
}
