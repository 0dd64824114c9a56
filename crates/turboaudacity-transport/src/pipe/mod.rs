//! Named-pipe transport for mod-script-pipe
//!
//! Audacity's scripting module creates two pipes: one it reads commands from
//! and one it writes responses to. [`PipeConfig`] locates them and
//! [`PipeTransport`] performs the exchange.

pub mod config;
pub mod transport;

pub use config::PipeConfig;
pub use transport::{PipeTransport, read_response};
