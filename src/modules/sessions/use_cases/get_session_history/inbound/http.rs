use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Serialize;

use crate::shared::core::turn::Turn;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct SessionHistoryResponse {
    pub session_id: String,
    pub history: Vec<Turn>,
}

pub async fn handle(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    let history = state.store.get_history(&session_id).await;
    Json(SessionHistoryResponse {
        session_id,
        history,
    })
}
