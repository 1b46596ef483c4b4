// Stand-ins for the outbound collaborators of the receive flow.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::modules::events::adapters::outbound::forwarder::{EventForwarder, ForwardError};
use crate::modules::events::adapters::outbound::reply_generator::{ReplyGenerator, ReplyRequest};
use crate::shared::core::event::Event;

/// Always replies with the same sentence and keeps every request it saw.
pub struct StubReplyGenerator {
    reply: String,
    requests: Mutex<Vec<ReplyRequest>>,
}

impl StubReplyGenerator {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub async fn requests(&self) -> Vec<ReplyRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl ReplyGenerator for StubReplyGenerator {
    async fn generate(&self, request: &ReplyRequest) -> anyhow::Result<Option<String>> {
        self.requests.lock().await.push(request.clone());
        Ok(Some(self.reply.clone()))
    }
}

pub struct FailingReplyGenerator;

#[async_trait]
impl ReplyGenerator for FailingReplyGenerator {
    async fn generate(&self, _request: &ReplyRequest) -> anyhow::Result<Option<String>> {
        Err(anyhow::anyhow!("Reply generator offline"))
    }
}

#[derive(Default)]
pub struct RecordingForwarder {
    forwarded: Mutex<Vec<Event>>,
}

impl RecordingForwarder {
    pub async fn forwarded(&self) -> Vec<Event> {
        self.forwarded.lock().await.clone()
    }
}

#[async_trait]
impl EventForwarder for RecordingForwarder {
    async fn forward(&self, event: &Event) -> Result<(), ForwardError> {
        self.forwarded.lock().await.push(event.clone());
        Ok(())
    }
}

pub struct FailingForwarder;

#[async_trait]
impl EventForwarder for FailingForwarder {
    async fn forward(&self, _event: &Event) -> Result<(), ForwardError> {
        Err(ForwardError::Status(503))
    }
}
