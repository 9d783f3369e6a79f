//! Post plain-text notifications to a Slack incoming webhook.
//!
//! ```rust,no_run
//! use slack_iot::{Notifier, NotifierConfig};
//!
//! # async fn run() -> Result<(), slack_iot::NotifierError> {
//! let mut notifier = Notifier::new(NotifierConfig::default())?;
//! notifier.send("sump pump started").await;
//! if !notifier.delivered() {
//!     eprintln!("status {}", notifier.status_code());
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod credential;
pub mod error;
pub mod notifier;
pub mod sink;

pub use config::{NotifierConfig, Overrides, Settings};
pub use credential::Credential;
pub use error::{FormatError, NotifierError};
pub use notifier::{Notifier, STATUS_NO_RESPONSE, STATUS_OK};
pub use sink::{DeliveryError, HttpSink, WebhookSink};
