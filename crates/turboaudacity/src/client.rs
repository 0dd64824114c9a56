//! Main client for driving Audacity

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info, warn};
use turboaudacity_protocol::{Command, Response};
use turboaudacity_transport::{PipeConfig, PipeTransport, Transport};

use crate::{
    config::ClientConfig,
    error::{Error, Result},
    resources::{
        Analyze, Edit, Effect, Extra, File, Generate, Help, Playback, Scripting, Select, Tools,
        Tracks, View,
    },
    types::ToCommand,
};

/// Client for a running Audacity instance.
///
/// Every call is one complete exchange over mod-script-pipe: the command line
/// is written, the response is read up to its terminating blank line, and
/// the text is handed back. Cloning is cheap and clones share the transport.
///
/// # Example
///
/// ```rust,no_run
/// use turboaudacity::Client;
///
/// # async fn example() -> turboaudacity::Result<()> {
/// let client = Client::new();
/// client.scripting().select_time(turboaudacity::types::SelectTime::new(1.0, 3.0)).await?;
/// client.effect().fade_out().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    /// Channel to Audacity
    transport: Arc<dyn Transport>,

    config: ClientConfig,
}

impl Client {
    /// Create a client for the platform's default pipes.
    ///
    /// Nothing is opened until the first command is sent.
    pub fn new() -> Self {
        Self::from_config(ClientConfig::default())
    }

    /// Create a new client builder for advanced configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::default()
    }

    /// Create a client from a configuration object.
    pub fn from_config(config: ClientConfig) -> Self {
        let transport = Arc::new(PipeTransport::new(config.pipes.clone()));
        Self::from_parts(transport, config)
    }

    /// Create a client configured from the environment.
    ///
    /// See [`ClientConfig::from_env`].
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self> {
        Ok(Self::from_config(ClientConfig::from_env()?))
    }

    /// Create a client with a custom transport.
    ///
    /// Useful for tests and for routing commands somewhere other than the
    /// local pipes.
    pub fn with_transport(transport: Arc<dyn Transport>) -> Self {
        Self::from_parts(transport, ClientConfig::default())
    }

    fn from_parts(transport: Arc<dyn Transport>, config: ClientConfig) -> Self {
        Self {
            inner: Arc::new(ClientInner { transport, config }),
        }
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }

    /// Whether the pipes exist.
    ///
    /// `true` does not guarantee Audacity is responsive; a stale pipe left by
    /// a crashed instance also passes.
    pub async fn is_connected(&self) -> bool {
        self.inner.transport.is_connected().await
    }

    /// Send a raw macro line and return Audacity's response unchanged.
    ///
    /// `command` goes to the transport exactly as given. Use this for macros
    /// that have no dedicated method.
    ///
    /// # Errors
    ///
    /// - [`Error::Transport`] if the pipes cannot be used.
    /// - [`Error::CommandFailed`] if the response ends in
    ///   `BatchCommand finished: Failed!` and
    ///   [`ClientConfig::fail_on_error`] is set.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// # async fn example(client: turboaudacity::Client) -> turboaudacity::Result<()> {
    /// let response = client.do_command(r#"SelectTime: Start="1.0" End="3.0""#).await?;
    /// assert!(response.contains("BatchCommand finished: OK"));
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip(self, command), fields(command = %Command::name_of(command)))]
    pub async fn do_command(&self, command: &str) -> Result<String> {
        debug!("Sending macro");
        let start = Instant::now();

        let result = self.inner.transport.send(command).await;
        let elapsed = start.elapsed();

        let raw = match result {
            Ok(raw) => raw,
            Err(e) => {
                warn!(elapsed_ms = elapsed.as_millis(), error = %e, "Macro could not be sent");
                return Err(e.into());
            }
        };

        if self.inner.config.fail_on_error {
            let response = Response::new(raw);
            if response.is_failed() {
                warn!(
                    elapsed_ms = elapsed.as_millis(),
                    body = response.body(),
                    "Audacity reported failure"
                );
                return Err(Error::CommandFailed(response));
            }
            info!(elapsed_ms = elapsed.as_millis(), "Macro finished");
            return Ok(response.into_raw());
        }

        info!(elapsed_ms = elapsed.as_millis(), "Macro finished");
        Ok(raw)
    }

    /// Check and send a [`Command`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Protocol`] without sending anything if the command
    /// cannot be written on one line, then as [`Client::do_command`].
    pub async fn execute(&self, command: &Command) -> Result<String> {
        let line = command.to_wire().inspect_err(|e| {
            warn!(command = command.name(), error = %e, "Macro is not expressible");
        })?;
        self.do_command(&line).await
    }

    /// Validate macro arguments, format them and send the result.
    ///
    /// # Errors
    ///
    /// Validation errors are returned before anything is sent; after that as
    /// [`Client::execute`].
    pub async fn run<C>(&self, params: &C) -> Result<String>
    where
        C: ToCommand + ?Sized,
    {
        let command = params.to_command()?;
        self.execute(&command).await
    }

    /// Send a [`Command`] and wrap the answer in a [`Response`].
    pub async fn query(&self, command: &Command) -> Result<Response> {
        self.execute(command).await.map(Response::new)
    }

    pub(crate) fn unimplemented(&self, name: &'static str) -> Result<String> {
        warn!(command = name, "Macro has no working wrapper");
        Err(Error::Unimplemented(name))
    }

    /// File menu.
    pub fn file(&self) -> File<'_> {
        File::new(self)
    }

    /// Edit menu.
    pub fn edit(&self) -> Edit<'_> {
        Edit::new(self)
    }

    /// Select menu.
    pub fn select(&self) -> Select<'_> {
        Select::new(self)
    }

    /// View menu.
    pub fn view(&self) -> View<'_> {
        View::new(self)
    }

    /// Transport menu (playback, recording, cursor).
    pub fn playback(&self) -> Playback<'_> {
        Playback::new(self)
    }

    /// Tracks menu.
    pub fn tracks(&self) -> Tracks<'_> {
        Tracks::new(self)
    }

    /// Generate menu.
    pub fn generate(&self) -> Generate<'_> {
        Generate::new(self)
    }

    /// Effect menu.
    pub fn effect(&self) -> Effect<'_> {
        Effect::new(self)
    }

    /// Analyze menu.
    pub fn analyze(&self) -> Analyze<'_> {
        Analyze::new(self)
    }

    /// Tools menu.
    pub fn tools(&self) -> Tools<'_> {
        Tools::new(self)
    }

    /// Extra menu (keyboard-only commands).
    pub fn extra(&self) -> Extra<'_> {
        Extra::new(self)
    }

    /// Scripting commands (selection, queries, messages).
    pub fn scripting(&self) -> Scripting<'_> {
        Scripting::new(self)
    }

    /// Help menu.
    pub fn help(&self) -> Help<'_> {
        Help::new(self)
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("config", &self.inner.config)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing a [`Client`].
#[derive(Default)]
pub struct ClientBuilder {
    config: ClientConfig,
    transport: Option<Arc<dyn Transport>>,
}

impl ClientBuilder {
    /// Create a new builder with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a builder configured from the environment.
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self> {
        Ok(Self::new().config(ClientConfig::from_env()?))
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Set both pipes and the terminator.
    pub fn pipes(mut self, pipes: PipeConfig) -> Self {
        self.config.pipes = pipes;
        self
    }

    /// Set the pipe commands are written to.
    pub fn to_server(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.pipes.to_server = path.into();
        self
    }

    /// Set the pipe responses are read from.
    pub fn from_server(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.pipes.from_server = path.into();
        self
    }

    /// Set the command terminator.
    pub fn eol(mut self, eol: impl Into<String>) -> Self {
        self.config.pipes.eol = eol.into();
        self
    }

    /// Choose whether failed macros become [`Error::CommandFailed`].
    pub fn fail_on_error(mut self, fail_on_error: bool) -> Self {
        self.config.fail_on_error = fail_on_error;
        self
    }

    /// Use a custom transport instead of the configured pipes.
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build the client.
    pub fn build(self) -> Client {
        let transport = match self.transport {
            Some(transport) => transport,
            None => Arc::new(PipeTransport::new(self.config.pipes.clone())),
        };
        Client::from_parts(transport, self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use turboaudacity_transport::TransportError;

    struct Canned {
        reply: &'static str,
        sent: Mutex<Vec<String>>,
    }

    impl Canned {
        fn new(reply: &'static str) -> Arc<Self> {
            Arc::new(Self {
                reply,
                sent: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl Transport for Canned {
        async fn send(&self, command: &str) -> turboaudacity_transport::Result<String> {
            self.sent.lock().unwrap().push(command.to_string());
            Ok(self.reply.to_string())
        }

        async fn is_connected(&self) -> bool {
            true
        }
    }

    #[test]
    fn test_builder_sets_pipes() {
        let client = Client::builder()
            .to_server("/tmp/to")
            .from_server("/tmp/from")
            .eol("\r\n\0")
            .fail_on_error(false)
            .build();

        assert_eq!(client.config().pipes.to_server, PathBuf::from("/tmp/to"));
        assert_eq!(client.config().pipes.from_server, PathBuf::from("/tmp/from"));
        assert_eq!(client.config().pipes.eol, "\r\n\0");
        assert!(!client.config().fail_on_error);
    }

    #[tokio::test]
    async fn test_do_command_is_passthrough() {
        let transport = Canned::new("\nBatchCommand finished: OK\n");
        let client = Client::with_transport(transport.clone());

        let response = client.do_command("Anything at all").await.unwrap();

        assert_eq!(response, "\nBatchCommand finished: OK\n");
        assert_eq!(*transport.sent.lock().unwrap(), vec!["Anything at all"]);
    }

    #[tokio::test]
    async fn test_failed_status_becomes_error() {
        let transport = Canned::new("Bad file\nBatchCommand finished: Failed!\n");
        let client = Client::with_transport(transport);

        match client.do_command("OpenProject2").await.unwrap_err() {
            Error::CommandFailed(response) => assert_eq!(response.body(), "Bad file"),
            other => panic!("expected CommandFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_failed_status_returned_when_disabled() {
        let transport = Canned::new("BatchCommand finished: Failed!\n");
        let client = Client::builder()
            .transport(transport)
            .fail_on_error(false)
            .build();

        let response = tokio_test::block_on(client.do_command("Drag")).unwrap();
        assert_eq!(response, "BatchCommand finished: Failed!\n");
    }

    #[tokio::test]
    async fn test_execute_rejects_unencodable_command() {
        let transport = Canned::new("BatchCommand finished: OK\n");
        let client = Client::with_transport(transport.clone());

        let command = Command::new("Message").param("Text", "two\nlines");
        let err = client.execute(&command).await.unwrap_err();

        assert!(matches!(err, Error::Protocol(_)));
        assert!(transport.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_transport_error_is_wrapped() {
        struct Down;

        #[async_trait]
        impl Transport for Down {
            async fn send(&self, _command: &str) -> turboaudacity_transport::Result<String> {
                Err(TransportError::PipeNotFound {
                    path: PathBuf::from("/tmp/audacity_script_pipe.to.0"),
                })
            }

            async fn is_connected(&self) -> bool {
                false
            }
        }

        let client = Client::with_transport(Arc::new(Down));
        assert!(!client.is_connected().await);

        let err = client.do_command("New").await.unwrap_err();
        assert!(err.is_transport());
        assert!(err.to_string().contains("mod-script-pipe"));
    }

    #[tokio::test]
    async fn test_query_wraps_response() {
        let transport = Canned::new("[]\nBatchCommand finished: OK\n");
        let client = Client::with_transport(transport);

        let response = client
            .query(&Command::new("GetInfo").param("Type", "Tracks"))
            .await
            .unwrap();
        let tracks: Vec<serde_json::Value> = response.json().unwrap();
        assert!(tracks.is_empty());
    }
}
