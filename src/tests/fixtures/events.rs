// Shared test fixture for inbound events.
// The canonical event lives in json/new_event.json and is embedded at compile time.

use serde::Deserialize;
use serde_json::Value;

use crate::shared::core::event::NewEvent;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct NewEventDto {
    pub source: String,
    pub payload: Value,
    pub session_id: Option<String>,
}

pub struct NewEventBuilder {
    inner: NewEvent,
}

impl Default for NewEventBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NewEventBuilder {
    /// Starts without an identifier so the store generates one unless a test
    /// sets it.
    pub fn new() -> Self {
        let dto: NewEventDto = serde_json::from_str(include_str!("json/new_event.json"))
            .expect("new_event.json fixture must parse");
        Self {
            inner: NewEvent {
                event_id: None,
                source: dto.source,
                payload: dto.payload,
                session_id: dto.session_id,
            },
        }
    }

    pub fn event_id(mut self, v: impl Into<String>) -> Self {
        self.inner.event_id = Some(v.into());
        self
    }

    pub fn source(mut self, v: impl Into<String>) -> Self {
        self.inner.source = v.into();
        self
    }

    pub fn payload(mut self, v: Value) -> Self {
        self.inner.payload = v;
        self
    }

    pub fn session_id(mut self, v: impl Into<String>) -> Self {
        self.inner.session_id = Some(v.into());
        self
    }

    pub fn build(self) -> NewEvent {
        self.inner
    }
}

#[cfg(test)]
mod new_event_builder_tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = NewEventBuilder::default().build();
        assert_eq!(built.event_id, None);
        assert_eq!(built.source, "zapier");
        assert_eq!(built.payload, json!({"hello": "world"}));
        assert_eq!(built.session_id, None);
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let built = NewEventBuilder::new()
            .event_id("evt-9")
            .source("github")
            .payload(json!([1, 2]))
            .session_id("s-9")
            .build();
        assert_eq!(built.event_id.as_deref(), Some("evt-9"));
        assert_eq!(built.source, "github");
        assert_eq!(built.payload, json!([1, 2]));
        assert_eq!(built.session_id.as_deref(), Some("s-9"));
    }
}
