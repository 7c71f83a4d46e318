//! Delivery errors.

use thiserror::Error;

/// Errors that can occur when delivering a message.
#[derive(Debug, Error)]
pub enum SlackError {
    /// The HTTP request could not be completed.
    #[error("Slack request failed: {0}")]
    Request(String),

    /// The message could not be encoded as JSON.
    #[error("Slack payload encoding failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
