//! Transport layer for TurboAudacity
//!
//! Provides a trait-based transport abstraction over which macro command lines
//! travel to Audacity, and the named-pipe implementation that talks to
//! `mod-script-pipe`.
//!
//! # Architecture
//!
//! - **Transport trait**: one request/response exchange per call
//! - **Pipe transport**: the two named pipes created by mod-script-pipe

#![deny(unsafe_code)]
#![warn(missing_docs)]
//! - **Error handling**: missing pipes are reported with a hint to start Audacity
//!
//! # Usage
//!
//! ```no_run
//! use turboaudacity_transport::{PipeConfig, PipeTransport, Transport};
//!
//! # async fn example() -> turboaudacity_transport::Result<()> {
//! let transport = PipeTransport::new(PipeConfig::default());
//! let response = transport.send("GetInfo: Type=\"Tracks\"").await?;
//! println!("{}", response);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod pipe;
pub mod traits;

// Re-export commonly used types
pub use error::{Result, TransportError};
pub use pipe::{PipeConfig, PipeTransport};
pub use traits::Transport;
