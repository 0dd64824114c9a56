//! Common test utilities and helpers

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use turboaudacity::{Client, Transport};

/// What Audacity answers after a successful macro, as read off the pipe
#[allow(dead_code)]
pub const OK_RESPONSE: &str = "\nBatchCommand finished: OK\n";

/// What Audacity answers after a failed macro
#[allow(dead_code)]
pub const FAILED_RESPONSE: &str = "Could not open file\nBatchCommand finished: Failed!\n";

/// Transport that records every command and answers with a fixed reply
pub struct RecordingTransport {
    reply: String,
    sent: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl RecordingTransport {
    pub fn new(reply: impl Into<String>) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.into(),
            sent: Mutex::new(Vec::new()),
        })
    }

    pub fn sent(&self) -> Vec<String> {
        self.sent.lock().unwrap().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.sent.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send(&self, command: &str) -> turboaudacity_transport::Result<String> {
        self.sent.lock().unwrap().push(command.to_string());
        Ok(self.reply.clone())
    }

    async fn is_connected(&self) -> bool {
        true
    }
}

mockall::mock! {
    pub Pipe {}

    #[async_trait]
    impl Transport for Pipe {
        async fn send(&self, command: &str) -> turboaudacity_transport::Result<String>;
        async fn is_connected(&self) -> bool;
    }
}

/// Client over a recording transport that always answers OK
#[allow(dead_code)]
pub fn recording_client() -> (Client, Arc<RecordingTransport>) {
    let transport = RecordingTransport::new(OK_RESPONSE);
    (Client::with_transport(transport.clone()), transport)
}

/// Client over a mock that must never be called
#[allow(dead_code)]
pub fn untouchable_client() -> Client {
    let mut mock = MockPipe::new();
    mock.expect_send().never();
    mock.expect_is_connected().never();
    Client::with_transport(Arc::new(mock))
}
