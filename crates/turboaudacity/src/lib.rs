//! # TurboAudacity
//!
//! Drive a running Audacity through its `mod-script-pipe` scripting module:
//! - One method per Audacity macro, grouped by menu
//! - Typed, validated arguments for every macro that takes them
//! - A raw passthrough for anything else
//! - Async API with an optional blocking facade
//!
//! Audacity must be running with mod-script-pipe set to "Enabled" in
//! Preferences > Modules.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use turboaudacity::{Client, Waveform};
//! use turboaudacity::types::{SelectTime, Tone};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Client::new();
//!
//!     client.file().new_project().await?;
//!     client.tracks().new_mono_track().await?;
//!     client.scripting().select_time(SelectTime::new(0.0, 2.0)).await?;
//!     client
//!         .generate()
//!         .tone(Tone::builder().frequency(440.0).waveform(Waveform::Sine).build()?)
//!         .await?;
//!
//!     // Anything without a wrapper
//!     let response = client.do_command("Help: Command=\"Amplify\"").await?;
//!     println!("{}", response);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Re-export commonly used types
pub use client::{Client, ClientBuilder};
pub use config::ClientConfig;
pub use error::{Error, Result};
pub use turboaudacity_protocol::choices::*;
pub use turboaudacity_protocol::{BatchStatus, Command, MacroValue, Response};
pub use turboaudacity_transport::{PipeConfig, Transport};

// Module declarations
pub mod client;
pub mod config;
pub mod error;
pub mod resources;
pub mod types;
pub mod validation;

#[cfg(feature = "blocking")]
#[cfg_attr(docsrs, doc(cfg(feature = "blocking")))]
pub mod blocking;

// Re-export key dependencies for convenience
pub use async_trait::async_trait;

/// Prelude module for common imports
///
/// # Examples
///
/// ```rust
/// use turboaudacity::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Client, ClientConfig, Command, Error, Result,
        resources::Resource,
        types::{SelectTime, ToCommand},
    };
}

/// Crate version, from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
