use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// An ingested webhook record as held by the event log.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub event_id: String,
    pub source: String,
    pub payload: Value,
    pub received_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// An event before the store has resolved its identifier and arrival time.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEvent {
    pub event_id: Option<String>,
    pub source: String,
    pub payload: Value,
    pub session_id: Option<String>,
}

/// Reduced view of the latest event, reported by the status endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventSummary {
    pub event_id: String,
    pub source: String,
    pub received_at: DateTime<Utc>,
    pub payload: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl From<&Event> for EventSummary {
    fn from(event: &Event) -> Self {
        Self {
            event_id: event.event_id.clone(),
            source: event.source.clone(),
            received_at: event.received_at,
            payload: event.payload.clone(),
            session_id: event.session_id.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventPage {
    /// Number of events currently retained, not the number ever received.
    pub total: usize,
    pub offset: usize,
    pub limit: usize,
    pub items: Vec<Event>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventStats {
    /// Monotonic count of appends, unaffected by eviction.
    pub count: u64,
    pub last_event: Option<EventSummary>,
}
