use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Serialize;

use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ClearContextResponse {
    pub status: &'static str,
}

#[derive(Serialize)]
pub struct DeleteContextEntryResponse {
    pub status: &'static str,
    pub key: String,
    pub existed: bool,
}

pub async fn clear_all(State(state): State<AppState>) -> impl IntoResponse {
    state.store.clear_context().await;
    tracing::info!("context cleared");
    Json(ClearContextResponse { status: "ok" })
}

pub async fn delete_one(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> impl IntoResponse {
    let existed = state.store.delete_context(&key).await;
    Json(DeleteContextEntryResponse {
        status: "ok",
        key,
        existed,
    })
}
