//! Outbound delivery to the destination chat webhook.

use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;
use thiserror::Error;

/// Bound on the outbound call; exceeding it is a delivery failure.
const DELIVERY_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("destination returned status {0}")]
    Rejected(u16),
}

/// Transport seam for the outbound webhook call, so handlers can be
/// exercised against a mock without network access.
#[async_trait]
pub trait WebhookSender: Send + Sync {
    /// POST the serialized message to `url`. Exactly one attempt.
    async fn deliver(&self, url: Url, payload: String) -> Result<(), DeliveryError>;
}

/// Production sender. The underlying `reqwest::Client` holds a connection
/// pool and is built once per process, then shared across requests.
pub struct HttpWebhookSender {
    client: Client,
}

impl HttpWebhookSender {
    pub fn new() -> anyhow::Result<Self> {
        let client = Client::builder().timeout(DELIVERY_TIMEOUT).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl WebhookSender for HttpWebhookSender {
    async fn deliver(&self, url: Url, payload: String) -> Result<(), DeliveryError> {
        let response = self
            .client
            .post(url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(|e| DeliveryError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DeliveryError::Rejected(status.as_u16()));
        }

        Ok(())
    }
}
