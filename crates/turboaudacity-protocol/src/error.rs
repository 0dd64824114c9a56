//! Error types for protocol operations
//!
//! Covers the ways a command can fail to be expressed in the macro grammar and
//! the ways a response can fail to decode.

use thiserror::Error;

/// Result type for protocol operations
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Errors that can occur while building commands or reading responses
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    /// Macro name is empty or contains characters the grammar reserves
    #[error("Invalid macro name: {0:?}")]
    InvalidName(String),

    /// Parameter key is empty or contains whitespace, `=` or `"`
    #[error("Invalid parameter key {key:?} for {command}")]
    InvalidKey {
        /// The macro the key belongs to.
        command: String,
        /// The offending key.
        key: String,
    },

    /// Parameter value cannot be quoted in the macro grammar
    #[error("Value of {key} cannot contain double quotes or line breaks: {value:?}")]
    UnencodableValue {
        /// The parameter whose value was rejected.
        key: String,
        /// The rejected value.
        value: String,
    },

    /// Text does not follow the `Name: Key="value"` grammar
    #[error("Malformed command: {0}")]
    MalformedCommand(String),

    /// String does not name any option of an enumerated parameter
    #[error("Unknown {kind} {value:?}, expected one of: {expected}")]
    UnknownChoice {
        /// The choice type being parsed.
        kind: &'static str,
        /// The unrecognised input.
        value: String,
        /// Comma separated list of accepted macro identifiers.
        expected: String,
    },

    /// Response body could not be decoded
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ProtocolError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
