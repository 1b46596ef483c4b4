use serde_json::Value;
use std::sync::Arc;

use crate::modules::events::adapters::outbound::forwarder::EventForwarder;
use crate::modules::events::adapters::outbound::reply_generator::{ReplyGenerator, ReplyRequest};
use crate::shared::core::event::{Event, NewEvent};
use crate::shared::infrastructure::store::Store;

#[derive(Debug, Clone, PartialEq)]
pub struct ReceivedEvent {
    pub event: Event,
    pub reply: Option<String>,
}

/// Stores an inbound event, asks for a reply, records the session turn and
/// relays the event downstream.
///
/// Only the append decides the outcome. Reply and forward failures are logged
/// and swallowed since the event is already stored by then.
pub struct ReceiveEventHandler {
    store: Arc<Store>,
    replies: Arc<dyn ReplyGenerator>,
    forwarder: Option<Arc<dyn EventForwarder>>,
}

impl ReceiveEventHandler {
    pub fn new(store: Arc<Store>, replies: Arc<dyn ReplyGenerator>) -> Self {
        Self {
            store,
            replies,
            forwarder: None,
        }
    }

    pub fn with_forwarder(mut self, forwarder: Arc<dyn EventForwarder>) -> Self {
        self.forwarder = Some(forwarder);
        self
    }

    pub async fn handle(&self, event: NewEvent) -> ReceivedEvent {
        let stored = self.store.append_event(event).await;
        tracing::info!(
            event_id = %stored.event_id,
            source = %stored.source,
            session_id = ?stored.session_id,
            payload_size = payload_size(&stored.payload),
            "received_event"
        );

        let reply = self.generate_reply(&stored).await;

        if let Some(session_id) = &stored.session_id {
            self.store
                .record_turn(session_id, stored.payload.clone(), reply.clone())
                .await;
        }

        if let Some(forwarder) = &self.forwarder {
            if let Err(error) = forwarder.forward(&stored).await {
                tracing::warn!(event_id = %stored.event_id, %error, "forwarding event failed");
            }
        }

        ReceivedEvent {
            event: stored,
            reply,
        }
    }

    async fn generate_reply(&self, event: &Event) -> Option<String> {
        if !self.replies.is_enabled() {
            return None;
        }

        let history = match &event.session_id {
            Some(session_id) => self.store.get_history(session_id).await,
            None => Vec::new(),
        };
        let request = ReplyRequest {
            event: event.clone(),
            history,
            context: self.store.get_all_context().await,
        };

        match self.replies.generate(&request).await {
            Ok(reply) => reply,
            Err(error) => {
                tracing::warn!(event_id = %event.event_id, error = %error, "reply generation failed");
                None
            }
        }
    }
}

/// Key count for objects, length of the compact JSON for anything else.
fn payload_size(payload: &Value) -> usize {
    match payload {
        Value::Object(fields) => fields.len(),
        other => other.to_string().len(),
    }
}
