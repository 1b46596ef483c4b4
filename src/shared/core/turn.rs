use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

/// One input/output exchange recorded into a session history.
///
/// `input` is the received payload verbatim. `output` is the generated reply,
/// `None` when no reply could be produced for that input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Turn {
    pub input: Value,
    pub output: Option<String>,
    pub timestamp: DateTime<Utc>,
}
