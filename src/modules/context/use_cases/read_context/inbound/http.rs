use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ContextResponse {
    pub context: Map<String, Value>,
}

#[derive(Serialize)]
pub struct ContextEntryResponse {
    pub key: String,
    pub value: Value,
}

pub async fn get_all(State(state): State<AppState>) -> impl IntoResponse {
    Json(ContextResponse {
        context: state.store.get_all_context().await,
    })
}

pub async fn get_one(State(state): State<AppState>, Path(key): Path<String>) -> impl IntoResponse {
    match state.store.get_context(&key).await {
        Some(value) => Json(ContextEntryResponse { key, value }).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}
