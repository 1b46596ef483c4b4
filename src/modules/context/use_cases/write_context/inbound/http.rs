use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct PutContextBody {
    pub key: String,
    pub value: Value,
}

#[derive(Serialize)]
pub struct PutContextResponse {
    pub status: &'static str,
    pub key: String,
}

async fn put(state: &AppState, key: String, value: Value) -> axum::response::Response {
    if key.is_empty() {
        return StatusCode::UNPROCESSABLE_ENTITY.into_response();
    }
    state.store.put_context(key.clone(), value).await;
    tracing::debug!(%key, "context entry set");
    Json(PutContextResponse { status: "ok", key }).into_response()
}

/// `POST /context` with `{"key": ..., "value": ...}`.
pub async fn post_entry(
    State(state): State<AppState>,
    body: Result<Json<PutContextBody>, JsonRejection>,
) -> impl IntoResponse {
    match body {
        Ok(Json(body)) => put(&state, body.key, body.value).await,
        Err(_) => StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    }
}

/// `PUT /context/{key}` with the raw JSON value as body.
pub async fn put_entry(
    State(state): State<AppState>,
    Path(key): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> impl IntoResponse {
    match body {
        Ok(Json(value)) => put(&state, key, value).await,
        Err(_) => StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    }
}
