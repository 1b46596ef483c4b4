// Per-session conversation histories.
//
// Responsibilities
// - Create a session on first reference, read or write.
// - Bound each history independently with the same FIFO policy as the event log.
// - Remove a session only on explicit request.

use chrono::{DateTime, Utc};
use serde_json::Value;
use std::collections::HashMap;

use crate::shared::core::turn::Turn;
use crate::shared::infrastructure::store::bounded_log::BoundedLog;

#[derive(Debug)]
pub struct SessionStore {
    sessions: HashMap<String, BoundedLog<Turn>>,
    history_capacity: usize,
}

impl SessionStore {
    pub fn new(history_capacity: usize) -> Self {
        Self {
            sessions: HashMap::new(),
            history_capacity,
        }
    }

    fn session(&mut self, session_id: &str) -> &mut BoundedLog<Turn> {
        let capacity = self.history_capacity;
        self.sessions
            .entry(session_id.to_string())
            .or_insert_with(|| BoundedLog::new(capacity))
    }

    pub fn record_turn(
        &mut self,
        session_id: &str,
        input: Value,
        output: Option<String>,
        now: DateTime<Utc>,
    ) -> Turn {
        let turn = Turn {
            input,
            output,
            timestamp: now,
        };
        self.session(session_id).push(turn.clone());
        turn
    }

    pub fn get_history(&mut self, session_id: &str) -> Vec<Turn> {
        self.session(session_id).to_vec()
    }

    /// Returns whether the session existed; repeated calls return `false`.
    pub fn clear_session(&mut self, session_id: &str) -> bool {
        self.sessions.remove(session_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
