use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// No HTTP response was obtained (DNS, connect, TLS, timeout...).
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Other(String),
}

/// Something that can POST a JSON document to a webhook URL.
#[async_trait]
pub trait WebhookSink: Send + Sync {
    /// Deliver `payload` and return the HTTP status of the response,
    /// whatever it is. Only transport failures are errors.
    async fn post_json(&self, url: &str, payload: &Value) -> Result<u16, DeliveryError>;
}

/// Body of a plain-text Slack webhook message.
pub fn payload(message: &str) -> Value {
    serde_json::json!({"text": message})
}

/// [`WebhookSink`] backed by a reqwest client with default timeouts.
#[derive(Debug, Clone)]
pub struct HttpSink {
    client: reqwest::Client,
}

impl HttpSink {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("slack-iot/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }

    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl WebhookSink for HttpSink {
    async fn post_json(&self, url: &str, payload: &Value) -> Result<u16, DeliveryError> {
        let response = self.client.post(url).json(payload).send().await?;
        Ok(response.status().as_u16())
    }
}
