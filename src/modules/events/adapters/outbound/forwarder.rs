// Relays stored events to a downstream webhook.
//
// Responsibilities
// - POST the stored event as JSON to the configured URL.
// - Report transport failures and non-success statuses as ForwardError.

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

use crate::shared::core::event::Event;

const FORWARD_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("forward request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("forward target answered with status {0}")]
    Status(u16),
}

#[async_trait]
pub trait EventForwarder: Send + Sync {
    async fn forward(&self, event: &Event) -> Result<(), ForwardError>;
}

pub struct HttpEventForwarder {
    client: reqwest::Client,
    url: String,
}

impl HttpEventForwarder {
    pub fn new(url: impl Into<String>) -> Result<Self, ForwardError> {
        let client = reqwest::Client::builder().timeout(FORWARD_TIMEOUT).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl EventForwarder for HttpEventForwarder {
    async fn forward(&self, event: &Event) -> Result<(), ForwardError> {
        let response = self.client.post(&self.url).json(event).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ForwardError::Status(status.as_u16()));
        }
        Ok(())
    }
}
