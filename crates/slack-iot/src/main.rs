use anyhow::Context;
use clap::Parser;
use tokio::runtime::Runtime;

use slack_iot::cli::Cli;
use slack_iot::config::Settings;
use slack_iot::notifier::{Notifier, STATUS_OK};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(cli.default_log_level())),
        )
        .with_writer(std::io::stderr)
        .init();

    let settings = Settings::load(cli.config.clone())?;
    let config = settings.into_config(cli.overrides());

    // Get the slack credentials
    let mut notifier = Notifier::new(config).context("Loading Slack webhook credentials")?;

    let rt = Runtime::new()?;
    rt.block_on(notifier.send(&cli.message));

    // Exit code: 0 = delivered (or printed in debug mode), 1 = anything else
    if notifier.status_code() != STATUS_OK {
        println!(
            "Failed to send slack message. Status code: {}",
            notifier.status_code()
        );
        std::process::exit(1);
    }
    Ok(())
}
