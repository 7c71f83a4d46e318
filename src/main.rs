use anyhow::{bail, Result};
use clap::Parser;
use slack_message::Message;
use tracing::info;

mod args;

use args::Args;

#[tokio::main]
async fn main() -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "slack_message=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = Args::parse();

    let mut message = Message::new(args.webhook_url);
    if let Some(header) = args.header {
        message = message.header(header);
    }
    message = if args.markdown {
        message.markdown(args.text)
    } else {
        message.text(args.text)
    };

    if !message.send().await? {
        bail!("webhook did not accept the message");
    }

    info!("Message delivered");

    Ok(())
}
