use clap::Parser;
use std::path::PathBuf;

use crate::config::Overrides;

/// slack-iot – send an IOT message to Slack
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Text to send
    pub message: String,

    /// In debug mode messages are printed and not sent to Slack
    #[arg(short, long)]
    pub debug: bool,

    /// Activate verbose output (-v, -vv, etc.)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Sets a custom settings file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// File holding the webhook credentials (default: slack.credentials)
    #[arg(long, value_name = "FILE")]
    pub credentials: Option<PathBuf>,

    /// Webhook base URL the credentials are appended to
    #[arg(long, value_name = "URL")]
    pub url: Option<String>,
}

impl Cli {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            base_url: self.url.clone(),
            credentials_file: self.credentials.clone(),
            debug: self.debug,
        }
    }

    /// Log filter used when `RUST_LOG` is unset.
    pub fn default_log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}
