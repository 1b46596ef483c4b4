use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::shell::state::AppState;

pub const DEFAULT_LIMIT: i64 = 10;

#[derive(Deserialize)]
pub struct ListEventsParams {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListEventsParams>,
) -> impl IntoResponse {
    // Negative values are clamped like out-of-range ones; the store clamps the limit.
    let offset = params.offset.unwrap_or(0).max(0) as usize;
    let limit = params.limit.unwrap_or(DEFAULT_LIMIT).max(0) as usize;

    Json(state.store.page_events(offset, limit).await)
}
