// Port for producing a short reply to an ingested event.
//
// Boundaries
// - Implementations may call the network. Callers snapshot the context map and
//   the session history first and never hold a store lock across `generate`.

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::shared::core::event::Event;
use crate::shared::core::turn::Turn;

/// Everything a generator may look at, copied out of the store.
#[derive(Debug, Clone)]
pub struct ReplyRequest {
    pub event: Event,
    pub history: Vec<Turn>,
    pub context: Map<String, Value>,
}

#[async_trait]
pub trait ReplyGenerator: Send + Sync {
    /// `Ok(None)` means no reply is available, which is not a failure.
    async fn generate(&self, request: &ReplyRequest) -> anyhow::Result<Option<String>>;

    /// Whether the generator can produce replies at all.
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Used when no model is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct DisabledReplyGenerator;

#[async_trait]
impl ReplyGenerator for DisabledReplyGenerator {
    async fn generate(&self, _request: &ReplyRequest) -> anyhow::Result<Option<String>> {
        Ok(None)
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

const USER_TEXT_KEYS: [&str; 6] = ["question", "message", "text", "content", "prompt", "query"];

/// Pulls the human message out of an arbitrary payload.
///
/// Objects are searched for the first non-blank string under one of the usual
/// message keys, compared case-insensitively. Anything else is rendered as
/// compact JSON.
pub fn extract_user_text(payload: &Value) -> String {
    if let Value::Object(fields) = payload {
        for wanted in USER_TEXT_KEYS {
            let found = fields
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(wanted))
                .and_then(|(_, value)| value.as_str())
                .map(str::trim)
                .filter(|text| !text.is_empty());
            if let Some(text) = found {
                return text.to_string();
            }
        }
    }
    payload.to_string()
}
