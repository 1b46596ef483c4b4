// In-memory store shared by every request handler.
//
// Purpose
// - Own the event log, the session histories and the context map for the
//   lifetime of the process. Nothing is persisted.
//
// Responsibilities
// - Guard each container with its own lock so every single operation is atomic.
// - Hand out copies only; callers never hold references into a container.
//
// Boundaries
// - No input or output happens while a guard is held. Outbound calls belong to
//   the use case handlers and run after the store returns.
// - Updates spanning two containers (an event and its session turn) are not
//   jointly atomic.

pub mod bounded_log;
pub mod context_store;
pub mod event_log;
pub mod session_store;

use chrono::Utc;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use crate::shared::core::event::{Event, EventPage, EventStats, NewEvent};
use crate::shared::core::turn::Turn;
use context_store::ContextStore;
use event_log::{DEFAULT_EVENT_CAPACITY, EventLog};
use session_store::SessionStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoreConfig {
    pub event_capacity: usize,
    pub session_history_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            event_capacity: DEFAULT_EVENT_CAPACITY,
            session_history_capacity: DEFAULT_EVENT_CAPACITY,
        }
    }
}

pub struct Store {
    events: RwLock<EventLog>,
    sessions: RwLock<SessionStore>,
    context: RwLock<ContextStore>,
}

impl Store {
    pub fn new(config: StoreConfig) -> Self {
        Self {
            events: RwLock::new(EventLog::new(config.event_capacity)),
            sessions: RwLock::new(SessionStore::new(config.session_history_capacity)),
            context: RwLock::new(ContextStore::new()),
        }
    }

    /// Appends to the event log and returns the stored copy with its resolved
    /// identifier and arrival time.
    pub async fn append_event(&self, event: NewEvent) -> Event {
        let mut log = self.events.write().await;
        // Stamped under the guard so arrival times follow insertion order.
        log.append(event, Utc::now())
    }

    pub async fn page_events(&self, offset: usize, limit: usize) -> EventPage {
        self.events.read().await.page(offset, limit)
    }

    pub async fn stats(&self) -> EventStats {
        self.events.read().await.stats()
    }

    pub async fn record_turn(
        &self,
        session_id: &str,
        input: Value,
        output: Option<String>,
    ) -> Turn {
        let mut sessions = self.sessions.write().await;
        sessions.record_turn(session_id, input, output, Utc::now())
    }

    /// Unknown sessions yield an empty history and are created on the way.
    pub async fn get_history(&self, session_id: &str) -> Vec<Turn> {
        self.sessions.write().await.get_history(session_id)
    }

    pub async fn clear_session(&self, session_id: &str) -> bool {
        self.sessions.write().await.clear_session(session_id)
    }

    pub async fn get_context(&self, key: &str) -> Option<Value> {
        self.context.read().await.get(key)
    }

    pub async fn get_all_context(&self) -> Map<String, Value> {
        self.context.read().await.get_all()
    }

    pub async fn put_context(&self, key: impl Into<String>, value: Value) {
        self.context.write().await.put(key, value);
    }

    pub async fn delete_context(&self, key: &str) -> bool {
        self.context.write().await.delete(key)
    }

    pub async fn clear_context(&self) {
        self.context.write().await.clear_all();
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}
