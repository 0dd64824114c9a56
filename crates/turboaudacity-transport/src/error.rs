//! Transport error types

use std::path::PathBuf;
use thiserror::Error;

/// Result type for transport operations
pub type Result<T> = std::result::Result<T, TransportError>;

/// Errors that can occur while talking to the scripting pipe
#[derive(Debug, Error)]
pub enum TransportError {
    /// A pipe does not exist, which means Audacity is not running or
    /// mod-script-pipe is disabled
    #[error(
        "{} does not exist. Ensure Audacity is running and mod-script-pipe is set to Enabled in the Preferences window.",
        .path.display()
    )]
    PipeNotFound {
        /// The missing pipe
        path: PathBuf,
    },

    /// The exchange was cut short
    #[error("Connection error: {0}")]
    Connection(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
