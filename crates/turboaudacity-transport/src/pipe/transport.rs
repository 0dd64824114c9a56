//! Named-pipe transport
//!
//! Each exchange opens both pipes, writes the command followed by the
//! configured terminator, reads lines until the blank line that closes the
//! response, then closes the pipes again.

use super::config::PipeConfig;
use crate::error::{Result, TransportError};
use crate::traits::Transport;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::Path;
use tokio::fs::{File, OpenOptions};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::Mutex;
use tracing::{debug, trace};
use turboaudacity_protocol::Command;

/// Transport over mod-script-pipe's pair of named pipes
///
/// Calls through one `PipeTransport` are serialised so two commands never
/// interleave on the same pipes.
pub struct PipeTransport {
    config: PipeConfig,
    exchange: Mutex<()>,
}

impl PipeTransport {
    /// Create a transport for the given pipes
    pub fn new(config: PipeConfig) -> Self {
        Self {
            config,
            exchange: Mutex::new(()),
        }
    }

    /// Get the pipe configuration
    pub fn config(&self) -> &PipeConfig {
        &self.config
    }

    async fn open(path: &Path, write: bool) -> Result<File> {
        // Windows pipes are probed by opening them, which would consume an instance
        #[cfg(unix)]
        {
            if !tokio::fs::try_exists(path).await.unwrap_or(false) {
                return Err(TransportError::PipeNotFound {
                    path: path.to_path_buf(),
                });
            }
        }

        OpenOptions::new()
            .read(!write)
            .write(write)
            .open(path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::NotFound => TransportError::PipeNotFound {
                    path: path.to_path_buf(),
                },
                _ => TransportError::Io(e),
            })
    }
}

impl Default for PipeTransport {
    fn default() -> Self {
        Self::new(PipeConfig::default())
    }
}

#[async_trait]
impl Transport for PipeTransport {
    async fn send(&self, command: &str) -> Result<String> {
        let _exchange = self.exchange.lock().await;
        let name = Command::name_of(command);

        // Order matters: mod-script-pipe reads before it writes
        let mut to_server = Self::open(&self.config.to_server, true).await?;
        let from_server = Self::open(&self.config.from_server, false).await?;

        debug!(
            command = name,
            pipe = %self.config.to_server.display(),
            "Writing command to pipe"
        );
        to_server.write_all(command.as_bytes()).await?;
        to_server.write_all(self.config.eol.as_bytes()).await?;
        to_server.flush().await?;

        let mut reader = BufReader::new(from_server);
        let response = read_response(&mut reader).await?;
        trace!(command = name, bytes = response.len(), "Read response from pipe");

        drop(to_server);
        drop(reader);

        Ok(response)
    }

    async fn is_connected(&self) -> bool {
        let to = tokio::fs::try_exists(&self.config.to_server).await;
        let from = tokio::fs::try_exists(&self.config.from_server).await;
        matches!((to, from), (Ok(true), Ok(true)))
    }
}

/// Read one response: every line up to, but excluding, the first blank line
/// that follows some content.
///
/// Blank lines seen before any content are kept, so Audacity's usual
/// `"\nBatchCommand finished: OK\n\n"` reads back as
/// `"\nBatchCommand finished: OK\n"`.
pub async fn read_response<R>(reader: &mut R) -> Result<String>
where
    R: AsyncBufRead + Unpin,
{
    let mut response = String::new();
    let mut line = String::new();

    loop {
        line.clear();
        if reader.read_line(&mut line).await? == 0 {
            return Err(TransportError::Connection(format!(
                "pipe closed after {} bytes without the end-of-response blank line",
                response.len()
            )));
        }

        let blank = line == "\n" || line == "\r\n";
        if blank && !response.is_empty() {
            return Ok(response);
        }
        response.push_str(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("\nBatchCommand finished: OK\n\n", "\nBatchCommand finished: OK\n")]
    #[case(
        "Audio 1\nAudio 2\nBatchCommand finished: OK\n\nleftover\n",
        "Audio 1\nAudio 2\nBatchCommand finished: OK\n"
    )]
    #[case("text\r\nBatchCommand finished: OK\r\n\r\n", "text\r\nBatchCommand finished: OK\r\n")]
    #[tokio::test]
    async fn test_read_response_stops_at_blank_line(#[case] wire: &str, #[case] expected: &str) {
        let mut reader = wire.as_bytes();
        let response = read_response(&mut reader).await.unwrap();
        assert_eq!(response, expected);
    }

    #[tokio::test]
    async fn test_read_response_across_partial_reads() {
        let pipe = tokio_test::io::Builder::new()
            .read(b"[ { \"name\":\"Aud")
            .read(b"io 1\" } ]\nBatchCommand fin")
            .read(b"ished: OK\n\n")
            .build();
        let mut reader = BufReader::new(pipe);

        let response = read_response(&mut reader).await.unwrap();
        assert_eq!(
            response,
            "[ { \"name\":\"Audio 1\" } ]\nBatchCommand finished: OK\n"
        );
    }

    #[tokio::test]
    async fn test_read_response_eof_is_connection_error() {
        let mut reader = "BatchCommand finished: OK\n".as_bytes();
        let err = read_response(&mut reader).await.unwrap_err();
        assert!(matches!(err, TransportError::Connection(_)));
    }

    #[tokio::test]
    async fn test_missing_pipe_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let transport = PipeTransport::new(PipeConfig::new(
            dir.path().join("to"),
            dir.path().join("from"),
        ));

        assert!(!transport.is_connected().await);
        match transport.send("New").await.unwrap_err() {
            TransportError::PipeNotFound { path } => assert_eq!(path, dir.path().join("to")),
            other => panic!("expected PipeNotFound, got {other:?}"),
        }
    }
}
