//! HTTP delivery of serialized payloads.

use async_trait::async_trait;
use reqwest::Client;

use crate::error::SlackError;

/// Posts a serialized payload to a webhook.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends `payload` as the form field `payload` and returns the response
    /// status code. Transport-level failures are errors; any status is not.
    async fn post_payload(&self, url: &str, payload: &str) -> Result<u16, SlackError>;
}

/// [`Transport`] backed by a [`reqwest::Client`].
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Reuse a preconfigured client, e.g. one with a timeout or proxy.
    #[must_use]
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post_payload(&self, url: &str, payload: &str) -> Result<u16, SlackError> {
        let response = self
            .client
            .post(url)
            .form(&[("payload", payload)])
            .send()
            .await
            .map_err(|e| SlackError::Request(e.to_string()))?;

        Ok(response.status().as_u16())
    }
}
