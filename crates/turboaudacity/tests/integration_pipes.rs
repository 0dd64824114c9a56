//! End to end over real FIFOs, with a task standing in for mod-script-pipe.

#![cfg(unix)]

use nix::sys::stat::Mode;
use nix::unistd::mkfifo;
use std::path::{Path, PathBuf};
use tokio::fs::OpenOptions;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use turboaudacity::types::{SelectTime, Tone};
use turboaudacity::{Client, Error};

fn make_pipes(dir: &Path) -> (PathBuf, PathBuf) {
    let to = dir.join("audacity_script_pipe.to.client");
    let from = dir.join("audacity_script_pipe.from.client");
    mkfifo(&to, Mode::S_IRUSR | Mode::S_IWUSR).unwrap();
    mkfifo(&from, Mode::S_IRUSR | Mode::S_IWUSR).unwrap();
    (to, from)
}

/// Answer `replies.len()` exchanges in order, returning the lines received
async fn serve(to: PathBuf, from: PathBuf, replies: Vec<&'static str>) -> Vec<String> {
    let mut received = Vec::new();
    for reply in replies {
        let inbound = OpenOptions::new().read(true).open(&to).await.unwrap();
        let mut outbound = OpenOptions::new().write(true).open(&from).await.unwrap();

        let mut line = String::new();
        BufReader::new(inbound).read_line(&mut line).await.unwrap();
        received.push(line);

        outbound.write_all(reply.as_bytes()).await.unwrap();
        outbound.flush().await.unwrap();
    }
    received
}

fn client_for(to: &Path, from: &Path) -> Client {
    Client::builder().to_server(to).from_server(from).eol("\n").build()
}

#[tokio::test]
async fn test_client_round_trips_over_fifos() {
    let dir = tempfile::tempdir().unwrap();
    let (to, from) = make_pipes(dir.path());

    let server = tokio::spawn(serve(
        to.clone(),
        from.clone(),
        vec![
            "\nBatchCommand finished: OK\n\n",
            "\nBatchCommand finished: OK\n\n",
        ],
    ));

    let client = client_for(&to, &from);
    assert!(client.is_connected().await);

    let response = client
        .scripting()
        .select_time(SelectTime::new(1.0, 3.0))
        .await
        .unwrap();
    assert_eq!(response, "\nBatchCommand finished: OK\n");

    client.generate().tone(Tone::default()).await.unwrap();

    let received = server.await.unwrap();
    assert_eq!(
        received,
        vec![
            "SelectTime: Start=\"1.0\" End=\"3.0\"\n",
            "Tone: Frequency=\"440.0\" Amplitude=\"0.8\" Waveform=\"Sine\"\n",
        ]
    );
}

#[tokio::test]
async fn test_failure_reported_over_fifos() {
    let dir = tempfile::tempdir().unwrap();
    let (to, from) = make_pipes(dir.path());

    let server = tokio::spawn(serve(
        to.clone(),
        from.clone(),
        vec!["Nothing selected\nBatchCommand finished: Failed!\n\n"],
    ));

    let err = client_for(&to, &from).effect().fade_out().await.unwrap_err();
    assert_eq!(err.response().unwrap().body(), "Nothing selected");

    assert_eq!(server.await.unwrap(), vec!["FadeOut\n"]);
}

#[tokio::test]
async fn test_missing_pipes_are_a_transport_error() {
    let dir = tempfile::tempdir().unwrap();
    let client = client_for(&dir.path().join("to"), &dir.path().join("from"));

    assert!(!client.is_connected().await);
    let err = client.do_command("Help: Command=\"Help\"").await.unwrap_err();
    assert!(matches!(err, Error::Transport(_)));
    assert!(err.is_transport());
}
