//! Responses read back from the scripting pipe
//!
//! Audacity answers every macro with whatever text the command produces
//! followed by a status line, e.g.
//!
//! ```text
//! [ { "name":"Audio 1", ... } ]
//! BatchCommand finished: OK
//! ```
//!
//! A failing macro reports `BatchCommand finished: Failed!`. Many bad
//! parameters are silently ignored by Audacity and still report `OK`, so the
//! status is a hint, not a guarantee.

use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix of the status line that closes every response
pub const STATUS_PREFIX: &str = "BatchCommand finished: ";

/// Status line of a successful macro
pub const FINISHED_OK: &str = "BatchCommand finished: OK";

/// Status line of a failed macro
pub const FINISHED_FAILED: &str = "BatchCommand finished: Failed!";

/// Outcome reported in the status line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BatchStatus {
    /// `BatchCommand finished: OK`
    Ok,
    /// `BatchCommand finished: Failed!`
    Failed,
    /// No recognisable status line
    Unknown,
}

/// Raw response text with helpers to inspect it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Response {
    raw: String,
}

impl Response {
    /// Wrap the text read from the pipe
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The text exactly as it was read
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Take back the raw text
    pub fn into_raw(self) -> String {
        self.raw
    }

    /// Status reported by the last status line in the response
    pub fn status(&self) -> BatchStatus {
        match self.status_line() {
            Some((_, line)) => match line.trim_end().strip_prefix(STATUS_PREFIX) {
                Some("OK") => BatchStatus::Ok,
                Some("Failed!") => BatchStatus::Failed,
                _ => BatchStatus::Unknown,
            },
            None => BatchStatus::Unknown,
        }
    }

    /// Whether Audacity reported success
    pub fn is_ok(&self) -> bool {
        self.status() == BatchStatus::Ok
    }

    /// Whether Audacity reported failure
    pub fn is_failed(&self) -> bool {
        self.status() == BatchStatus::Failed
    }

    /// Text before the status line, without surrounding line breaks
    pub fn body(&self) -> &str {
        let body = match self.status_line() {
            Some((offset, _)) => &self.raw[..offset],
            None => self.raw.as_str(),
        };
        body.trim_matches(['\r', '\n'])
    }

    /// Decode the body as JSON, for `GetInfo` with `Format="JSON"`
    ///
    /// # Errors
    ///
    /// Returns [`crate::ProtocolError::Serialization`] if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(self.body())?)
    }

    /// Byte offset and text of the last line starting with [`STATUS_PREFIX`]
    fn status_line(&self) -> Option<(usize, &str)> {
        let mut found = None;
        let mut offset = 0;
        for line in self.raw.split_inclusive('\n') {
            if line.starts_with(STATUS_PREFIX) {
                found = Some((offset, line));
            }
            offset += line.len();
        }
        found
    }
}

impl fmt::Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<String> for Response {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<Response> for String {
    fn from(response: Response) -> Self {
        response.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_ok_response() {
        let response = Response::new("\nBatchCommand finished: OK\n");
        assert_eq!(response.status(), BatchStatus::Ok);
        assert!(response.is_ok());
        assert_eq!(response.body(), "");
        assert_eq!(response.raw(), "\nBatchCommand finished: OK\n");
    }

    #[test]
    fn test_failed_response() {
        let response = Response::new("Could not open file\nBatchCommand finished: Failed!\n");
        assert_eq!(response.status(), BatchStatus::Failed);
        assert!(response.is_failed());
        assert_eq!(response.body(), "Could not open file");
    }

    #[test]
    fn test_windows_line_endings() {
        let response = Response::new("text\r\nBatchCommand finished: OK\r\n");
        assert!(response.is_ok());
        assert_eq!(response.body(), "text");
    }

    #[test]
    fn test_missing_status_line() {
        let response = Response::new("Unknown command\n");
        assert_eq!(response.status(), BatchStatus::Unknown);
        assert_eq!(response.body(), "Unknown command");
    }

    #[test]
    fn test_json_body() {
        let response = Response::new(
            "[ { \"name\":\"Audio 1\", \"kind\":\"wave\" } ]\nBatchCommand finished: OK\n",
        );
        let tracks: Vec<serde_json::Value> = response.json().unwrap();
        assert_eq!(tracks.len(), 1);
        assert_eq!(tracks[0]["name"], "Audio 1");
    }

    #[test]
    fn test_json_body_error() {
        let response = Response::new("not json\nBatchCommand finished: OK\n");
        assert!(response.json::<serde_json::Value>().is_err());
    }
}
