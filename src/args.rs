use clap::Parser;

/// Post a message to a Slack incoming webhook.
#[derive(Parser)]
#[clap(author, version, about)]
pub struct Args {
    #[clap(long, env("SLACK_WEBHOOK_URL"), hide_env_values = true)]
    pub webhook_url: String,

    /// Header shown above the text.
    #[clap(long)]
    pub header: Option<String>,

    /// Render the text as mrkdwn instead of plain text.
    #[clap(long)]
    pub markdown: bool,

    pub text: String,
}
