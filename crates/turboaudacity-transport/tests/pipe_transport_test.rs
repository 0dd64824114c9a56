//! Pipe transport tests against real FIFOs
//!
//! A small task plays the part of mod-script-pipe: it opens both pipes, reads
//! one command line and answers with a canned response.

#![cfg(unix)]

use nix::sys::stat::Mode;
use nix::unistd::mkfifo;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use turboaudacity_transport::{PipeConfig, PipeTransport, Transport, TransportError};

fn make_pipes(dir: &Path) -> (PathBuf, PathBuf) {
    let to = dir.join("audacity_script_pipe.to.test");
    let from = dir.join("audacity_script_pipe.from.test");
    mkfifo(&to, Mode::S_IRUSR | Mode::S_IWUSR).unwrap();
    mkfifo(&from, Mode::S_IRUSR | Mode::S_IWUSR).unwrap();
    (to, from)
}

/// Serve a single exchange, returning the raw command line received
async fn serve_once(to: PathBuf, from: PathBuf, reply: &'static str) -> String {
    let inbound = OpenOptions::new().read(true).open(&to).await.unwrap();
    let mut outbound = OpenOptions::new().write(true).open(&from).await.unwrap();

    let mut reader = BufReader::new(inbound);
    let mut line = String::new();
    reader.read_line(&mut line).await.unwrap();

    outbound.write_all(reply.as_bytes()).await.unwrap();
    outbound.flush().await.unwrap();
    line
}

#[tokio::test]
async fn test_exchange_over_fifos() {
    let dir = tempfile::tempdir().unwrap();
    let (to, from) = make_pipes(dir.path());

    let server = tokio::spawn(serve_once(
        to.clone(),
        from.clone(),
        "\nBatchCommand finished: OK\n\n",
    ));

    let transport = PipeTransport::new(PipeConfig::new(&to, &from).with_eol("\n"));
    assert!(transport.is_connected().await);

    let response = transport
        .send(r#"SelectTime: Start="1.0" End="3.0""#)
        .await
        .unwrap();
    assert_eq!(response, "\nBatchCommand finished: OK\n");

    let received = server.await.unwrap();
    assert_eq!(received, "SelectTime: Start=\"1.0\" End=\"3.0\"\n");
}

#[tokio::test]
async fn test_custom_terminator_is_appended() {
    let dir = tempfile::tempdir().unwrap();
    let (to, from) = make_pipes(dir.path());

    let server = tokio::spawn(serve_once(
        to.clone(),
        from.clone(),
        "Audio 1\nBatchCommand finished: OK\n\n",
    ));

    let transport = PipeTransport::new(PipeConfig::new(&to, &from).with_eol("\r\n"));
    let response = transport.send("Undo").await.unwrap();

    assert_eq!(response, "Audio 1\nBatchCommand finished: OK\n");
    assert_eq!(server.await.unwrap(), "Undo\r\n");
}

#[tokio::test]
async fn test_server_hanging_up_early() {
    let dir = tempfile::tempdir().unwrap();
    let (to, from) = make_pipes(dir.path());

    let server = tokio::spawn(serve_once(to.clone(), from.clone(), "partial"));

    let transport = PipeTransport::new(PipeConfig::new(&to, &from));
    let err = transport.send("Redo").await.unwrap_err();

    assert!(matches!(err, TransportError::Connection(_)));
    server.await.unwrap();
}

#[tokio::test]
async fn test_missing_from_pipe() {
    let dir = tempfile::tempdir().unwrap();
    let to = dir.path().join("only.to");
    mkfifo(&to, Mode::S_IRUSR | Mode::S_IWUSR).unwrap();
    let from = dir.path().join("only.from");

    let transport = PipeTransport::new(PipeConfig::new(&to, &from));
    assert!(!transport.is_connected().await);

    // The outbound open needs a reader before it can complete
    let reader = tokio::spawn({
        let to = to.clone();
        async move { OpenOptions::new().read(true).open(&to).await.unwrap() }
    });

    match transport.send("New").await.unwrap_err() {
        TransportError::PipeNotFound { path } => assert_eq!(path, from),
        other => panic!("expected PipeNotFound, got {other:?}"),
    }
    drop(reader.await.unwrap());
}
