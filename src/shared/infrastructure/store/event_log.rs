// Bounded log of ingested events.
//
// Responsibilities
// - Resolve the event identifier and arrival time at insertion.
// - Retain the most recent events only, evicting the oldest first.
// - Count every append, independently of eviction.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::shared::core::event::{Event, EventPage, EventStats, EventSummary, NewEvent};
use crate::shared::infrastructure::store::bounded_log::BoundedLog;

pub const DEFAULT_EVENT_CAPACITY: usize = 100;
pub const MAX_PAGE_LIMIT: usize = 100;

/// Page sizes outside `[1, MAX_PAGE_LIMIT]` are clamped, never rejected.
pub fn clamp_limit(limit: usize) -> usize {
    limit.clamp(1, MAX_PAGE_LIMIT)
}

#[derive(Debug)]
pub struct EventLog {
    entries: BoundedLog<Event>,
    appended: u64,
    last_received_at: Option<DateTime<Utc>>,
}

impl EventLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: BoundedLog::new(capacity),
            appended: 0,
            last_received_at: None,
        }
    }

    /// Stores `event` at the tail, stamped no earlier than the previous append,
    /// and returns the stored copy.
    pub fn append(&mut self, event: NewEvent, now: DateTime<Utc>) -> Event {
        let received_at = match self.last_received_at {
            Some(previous) if previous > now => previous,
            _ => now,
        };
        let event_id = event
            .event_id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let stored = Event {
            event_id,
            source: event.source,
            payload: event.payload,
            received_at,
            session_id: event.session_id,
        };
        self.entries.push(stored.clone());
        self.appended += 1;
        self.last_received_at = Some(received_at);
        stored
    }

    pub fn page(&self, offset: usize, limit: usize) -> EventPage {
        let limit = clamp_limit(limit);
        EventPage {
            total: self.entries.len(),
            offset,
            limit,
            items: self.entries.slice(offset, limit),
        }
    }

    pub fn stats(&self) -> EventStats {
        EventStats {
            count: self.appended,
            last_event: self.entries.last().map(EventSummary::from),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}
