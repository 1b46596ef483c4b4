use axum::{Json, extract::State, response::IntoResponse};
use serde::Serialize;

use crate::shared::core::event::EventSummary;
use crate::shell::state::AppState;

pub const SERVICE_NAME: &str = "zapier-webhook-receiver";

#[derive(Serialize)]
pub struct StatusResponse {
    pub service: &'static str,
    pub status: &'static str,
    pub events_received: u64,
    pub last_event: Option<EventSummary>,
}

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    let stats = state.store.stats().await;
    Json(StatusResponse {
        service: SERVICE_NAME,
        status: "healthy",
        events_received: stats.count,
        last_event: stats.last_event,
    })
}
