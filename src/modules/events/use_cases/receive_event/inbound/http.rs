use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::shared::core::event::NewEvent;
use crate::shell::state::AppState;

pub const SESSION_ID_HEADER: &str = "x-session-id";

#[derive(Deserialize)]
pub struct ReceiveEventBody {
    pub event_id: Option<String>,
    pub source: String,
    #[serde(deserialize_with = "present_value")]
    pub payload: Value,
    pub session_id: Option<String>,
}

#[derive(Serialize)]
pub struct EventAck {
    pub status: &'static str,
    pub event_id: String,
    pub stored_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
}

// A custom deserializer stops serde from reading a missing field as null.
// An explicit `"payload": null` is still accepted.
fn present_value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Value, D::Error> {
    Value::deserialize(deserializer)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

pub async fn handle(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<ReceiveEventBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "rejected event body");
            return StatusCode::UNPROCESSABLE_ENTITY.into_response();
        }
    };

    // The body wins; the header only fills in a missing session id.
    let session_id = non_empty(body.session_id).or_else(|| {
        non_empty(
            headers
                .get(SESSION_ID_HEADER)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
        )
    });

    let received = state
        .receive_handler
        .handle(NewEvent {
            event_id: body.event_id,
            source: body.source,
            payload: body.payload,
            session_id,
        })
        .await;

    Json(EventAck {
        status: "ok",
        event_id: received.event.event_id,
        stored_at: received.event.received_at,
        reply: received.reply,
    })
    .into_response()
}
