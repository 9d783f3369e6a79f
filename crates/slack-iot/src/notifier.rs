use std::fmt;

use tracing::{debug, instrument, warn};

use crate::config::NotifierConfig;
use crate::credential::Credential;
use crate::error::NotifierError;
use crate::sink::{payload, HttpSink, WebhookSink};

/// Status recorded after a successful delivery (and for every debug send).
pub const STATUS_OK: u16 = 200;

/// Status recorded when the POST produced no HTTP response at all.
pub const STATUS_NO_RESPONSE: u16 = 999;

/// Sends plain-text messages to one Slack incoming webhook.
///
/// The credential is validated when the notifier is built, so a `Notifier`
/// always holds a well-formed webhook URL. [`send`](Self::send) never fails;
/// check [`status_code`](Self::status_code) afterwards.
pub struct Notifier {
    config: NotifierConfig,
    credential: Credential,
    webhook: String,
    sink: Box<dyn WebhookSink>,
    status_code: u16,
}

impl Notifier {
    /// Load the credential named by `config` and prepare an HTTP sink.
    /// Does not touch the network.
    pub fn new(config: NotifierConfig) -> Result<Self, NotifierError> {
        let credential = Credential::load(&config.credentials_file)?;
        let sink = HttpSink::new()?;
        Ok(Self::assemble(config, credential, Box::new(sink)))
    }

    /// Like [`new`](Self::new) but delivering through a caller-supplied sink.
    pub fn with_sink(
        config: NotifierConfig,
        sink: Box<dyn WebhookSink>,
    ) -> Result<Self, NotifierError> {
        let credential = Credential::load(&config.credentials_file)?;
        Ok(Self::assemble(config, credential, sink))
    }

    fn assemble(config: NotifierConfig, credential: Credential, sink: Box<dyn WebhookSink>) -> Self {
        let webhook = format!("{}{}", config.base_url, credential.as_str());
        debug!(base_url = %config.base_url, debug = config.debug, "notifier ready");
        Self {
            config,
            credential,
            webhook,
            sink,
            status_code: 0,
        }
    }

    /// Deliver `message`, recording the outcome in the status code.
    ///
    /// In debug mode the message is printed to stdout and the status is set
    /// to 200. Otherwise the status is the HTTP status of the response, or
    /// [`STATUS_NO_RESPONSE`] if the request failed at the transport level.
    #[instrument(skip_all, fields(debug = self.config.debug))]
    pub async fn send(&mut self, message: &str) {
        if self.config.debug {
            println!("Slack message:  {message}");
            self.status_code = STATUS_OK;
            return;
        }

        self.status_code = match self.sink.post_json(&self.webhook, &payload(message)).await {
            Ok(status) => {
                debug!(status, "webhook responded");
                status
            }
            Err(e) => {
                eprintln!("Failed to send slack message: {e}");
                warn!(error = %e, "webhook delivery failed");
                STATUS_NO_RESPONSE
            }
        };
    }

    /// Status of the most recent [`send`](Self::send), `0` before the first.
    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn delivered(&self) -> bool {
        self.status_code == STATUS_OK
    }

    pub fn webhook(&self) -> &str {
        &self.webhook
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn config(&self) -> &NotifierConfig {
        &self.config
    }

    pub fn is_debug(&self) -> bool {
        self.config.debug
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("config", &self.config)
            .field("credential", &self.credential)
            .field("status_code", &self.status_code)
            .finish_non_exhaustive()
    }
}
