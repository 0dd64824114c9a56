//! Macro command grammar and response types for TurboAudacity
//!
//! Audacity's scripting interface (`mod-script-pipe`) accepts one macro per
//! line in the form `Name: Param1="v1" Param2="v2"` and answers with free text
//! followed by a `BatchCommand finished: ...` status line. This crate holds the
//! pieces of that exchange that involve no I/O, so the transport and the
//! client can share them.
//!
//! # Type Organization
//!
//! - **Commands**: [`command`] - [`Command`] and the [`MacroValue`] formatting rules
//! - **Responses**: [`response`] - [`Response`] and [`BatchStatus`] detection
//! - **Choices**: [`choices`] - enumerated macro parameters (waveforms, filter roll-offs, ...)
//! - **Error types**: [`error`] - [`ProtocolError`]

#![deny(unsafe_code)]
#![warn(missing_docs)]
//!
//! # Usage
//!
//! ```
//! use turboaudacity_protocol::Command;
//!
//! let command = Command::new("SelectTime")
//!     .param("Start", 1.0)
//!     .param("End", 3.0);
//! assert_eq!(command.to_string(), r#"SelectTime: Start="1.0" End="3.0""#);
//! ```

pub mod choices;
pub mod command;
pub mod error;
pub mod response;

// Re-export commonly used types at crate level
pub use choices::*;
pub use command::{Command, MacroValue, Param};
pub use error::{ProtocolError, Result};
pub use response::{BatchStatus, FINISHED_FAILED, FINISHED_OK, Response, STATUS_PREFIX};
