//! Blocking facade over the async [`Client`](crate::Client)
//!
//! For scripts that do not run their own async runtime. Each call drives the
//! async client to completion on a private current-thread runtime.
//!
//! Do not call these methods from inside a tokio runtime; `block_on` panics
//! there. Use the async client instead.
//!
//! ```rust,no_run
//! use turboaudacity::blocking::Client;
//! use turboaudacity::types::{SelectTime, Tone};
//!
//! let client = Client::new()?;
//! client.run(&SelectTime::new(0.0, 2.0))?;
//! client.run(&Tone::default())?;
//! client.call(|c| async move { c.effect().fade_out().await })?;
//! # Ok::<(), turboaudacity::Error>(())
//! ```

use crate::ClientConfig;
use crate::error::Result;
use crate::types::ToCommand;
use std::future::Future;
use tokio::runtime::{Builder, Runtime};
use turboaudacity_protocol::Command;

/// Synchronous client.
pub struct Client {
    inner: crate::Client,
    runtime: Runtime,
}

impl Client {
    /// Create a blocking client for the platform's default pipes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) if the runtime cannot be created.
    pub fn new() -> Result<Self> {
        Self::from_client(crate::Client::new())
    }

    /// Create a blocking client from a configuration object.
    pub fn from_config(config: ClientConfig) -> Result<Self> {
        Self::from_client(crate::Client::from_config(config))
    }

    /// Wrap an existing async client.
    pub fn from_client(inner: crate::Client) -> Result<Self> {
        let runtime = Builder::new_current_thread().enable_all().build()?;
        Ok(Self { inner, runtime })
    }

    /// The wrapped async client.
    pub fn async_client(&self) -> &crate::Client {
        &self.inner
    }

    /// Blocking [`crate::Client::do_command`].
    pub fn do_command(&self, command: &str) -> Result<String> {
        self.runtime.block_on(self.inner.do_command(command))
    }

    /// Blocking [`crate::Client::execute`].
    pub fn execute(&self, command: &Command) -> Result<String> {
        self.runtime.block_on(self.inner.execute(command))
    }

    /// Blocking [`crate::Client::run`].
    pub fn run<C>(&self, params: &C) -> Result<String>
    where
        C: ToCommand + ?Sized,
    {
        self.runtime.block_on(self.inner.run(params))
    }

    /// Run any async client method to completion.
    ///
    /// Covers the per-menu methods without duplicating them here.
    pub fn call<F, Fut, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(crate::Client) -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        self.runtime.block_on(f(self.inner.clone()))
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("blocking::Client")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SelectTime;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use turboaudacity_transport::Transport;

    #[derive(Default)]
    struct Recorder {
        sent: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Transport for Recorder {
        async fn send(&self, command: &str) -> turboaudacity_transport::Result<String> {
            self.sent.lock().unwrap().push(command.to_string());
            Ok("BatchCommand finished: OK\n".to_string())
        }

        async fn is_connected(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_blocking_calls() {
        let recorder = Arc::new(Recorder::default());
        let client =
            Client::from_client(crate::Client::with_transport(recorder.clone())).unwrap();

        client.run(&SelectTime::new(1.0, 3.0)).unwrap();
        client.call(|c| async move { c.edit().undo().await }).unwrap();
        client.do_command("Redo").unwrap();

        assert_eq!(
            *recorder.sent.lock().unwrap(),
            vec![r#"SelectTime: Start="1.0" End="3.0""#, "Undo", "Redo"]
        );
    }
}
