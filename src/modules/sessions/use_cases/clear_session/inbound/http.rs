use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Serialize;

use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ClearSessionResponse {
    pub status: &'static str,
    pub session_id: String,
    pub existed: bool,
}

/// Always answers 200; `existed` tells whether anything was removed.
pub async fn handle(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> impl IntoResponse {
    let existed = state.store.clear_session(&session_id).await;
    tracing::info!(%session_id, existed, "cleared session");
    Json(ClearSessionResponse {
        status: "ok",
        session_id,
        existed,
    })
}
