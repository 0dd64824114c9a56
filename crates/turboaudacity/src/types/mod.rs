//! Parameter types for macros that take arguments
//!
//! Each type mirrors one Audacity macro. `Default` matches the values the
//! effect dialog starts with, and every type has a builder:
//!
//! ```rust
//! use turboaudacity::types::{Tone, ToCommand};
//! use turboaudacity::Waveform;
//!
//! let tone = Tone::builder()
//!     .frequency(440.0)
//!     .amplitude(0.5)
//!     .waveform(Waveform::Square)
//!     .build()?;
//!
//! assert_eq!(
//!     tone.to_command()?.to_string(),
//!     r#"Tone: Frequency="440.0" Amplitude="0.5" Waveform="Square""#
//! );
//! # Ok::<(), turboaudacity::Error>(())
//! ```

pub mod analyze;
pub mod effect;
pub mod file;
pub mod generate;
pub mod scripting;
pub mod tools;

pub use analyze::*;
pub use effect::*;
pub use file::*;
pub use generate::*;
pub use scripting::*;
pub use tools::*;

use crate::error::Result;
use turboaudacity_protocol::Command;

/// A set of macro arguments that can be checked and turned into a [`Command`].
pub trait ToCommand {
    /// Validate the arguments and build the macro.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) or
    /// [`Error::FileNotFound`](crate::Error::FileNotFound) when an argument
    /// breaks the macro's contract.
    fn to_command(&self) -> Result<Command>;
}

impl ToCommand for Command {
    fn to_command(&self) -> Result<Command> {
        Ok(self.clone())
    }
}

impl<T: ToCommand + ?Sized> ToCommand for &T {
    fn to_command(&self) -> Result<Command> {
        (**self).to_command()
    }
}
