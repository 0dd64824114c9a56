//! Error types for the TurboAudacity client
//!
//! Failures fall in three groups: arguments rejected before anything is sent,
//! transport failures (Audacity not reachable), and macros that Audacity
//! itself reports as failed.

use std::path::PathBuf;
use thiserror::Error;
use turboaudacity_protocol::{ProtocolError, Response};
use turboaudacity_transport::TransportError;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the TurboAudacity client.
#[derive(Debug, Error)]
pub enum Error {
    /// A convenience function received an argument outside its contract.
    #[error("Invalid {argument} argument: {reason}")]
    InvalidArgument {
        /// Name of the offending argument
        argument: &'static str,
        /// What was wrong with it
        reason: String,
    },

    /// A builder was finished without a required argument.
    #[error("Missing required argument: {0}")]
    MissingArgument(&'static str),

    /// A file the macro needs does not exist.
    #[error("{} file not found", .0.display())]
    FileNotFound(PathBuf),

    /// The command cannot be expressed in the macro grammar.
    #[error("Protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// The pipes could not be used.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// Audacity answered `BatchCommand finished: Failed!`.
    #[error("Command failed: {}", .0.body())]
    CommandFailed(Response),

    /// The macro has no working wrapper.
    #[error("{0} is not implemented")]
    Unimplemented(&'static str),

    /// Configuration could not be loaded.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error with context.
    #[error("{context}: {source}")]
    WithContext {
        /// Context description
        context: String,
        /// Underlying error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl Error {
    /// Shorthand for [`Error::InvalidArgument`].
    pub fn invalid(argument: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidArgument {
            argument,
            reason: reason.into(),
        }
    }

    /// Whether the error was raised before anything reached the pipe.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::InvalidArgument { .. }
                | Error::MissingArgument(_)
                | Error::FileNotFound(_)
                | Error::Protocol(_)
                | Error::Unimplemented(_)
        )
    }

    /// Whether Audacity could not be reached.
    pub fn is_transport(&self) -> bool {
        matches!(self, Error::Transport(_))
    }

    /// The response of a failed macro.
    pub fn response(&self) -> Option<&Response> {
        match self {
            Error::CommandFailed(response) => Some(response),
            _ => None,
        }
    }

    /// Add context to an error.
    pub fn context<C>(self, context: C) -> Self
    where
        C: std::fmt::Display + Send + Sync + 'static,
    {
        Error::WithContext {
            context: context.to_string(),
            source: Box::new(self),
        }
    }
}

impl From<derive_builder::UninitializedFieldError> for Error {
    fn from(err: derive_builder::UninitializedFieldError) -> Self {
        Error::MissingArgument(err.field_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_is_validation() {
        assert!(Error::invalid("amplitude", "must be between 0.0 and 1.0").is_validation());
        assert!(Error::Unimplemented("DtmfTones").is_validation());
        assert!(Error::FileNotFound(PathBuf::from("/nope.aup3")).is_validation());
        assert!(
            !Error::Transport(TransportError::Connection("closed".to_string())).is_validation()
        );
        assert!(Error::Transport(TransportError::Connection("closed".to_string())).is_transport());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::invalid("amplitude", "must be between 0.0 and 1.0").to_string(),
            "Invalid amplitude argument: must be between 0.0 and 1.0"
        );
        assert_eq!(
            Error::FileNotFound(PathBuf::from("/nope.aup3")).to_string(),
            "/nope.aup3 file not found"
        );

        let failed = Error::CommandFailed(Response::new(
            "Could not open file\nBatchCommand finished: Failed!\n",
        ));
        assert_eq!(failed.to_string(), "Command failed: Could not open file");
        assert!(failed.response().unwrap().is_failed());
    }

    #[test]
    fn test_error_context() {
        let error = Error::Unimplemented("Drag");
        match error.context("while tidying the project") {
            Error::WithContext { context, source } => {
                assert_eq!(context, "while tidying the project");
                assert_eq!(source.to_string(), "Drag is not implemented");
            }
            _ => panic!("Expected WithContext variant"),
        }
    }
}
