use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::context::use_cases::delete_context::inbound::http as delete_context_http;
use crate::modules::context::use_cases::read_context::inbound::http as read_context_http;
use crate::modules::context::use_cases::write_context::inbound::http as write_context_http;
use crate::modules::events::use_cases::get_status::inbound::http as status_http;
use crate::modules::events::use_cases::list_events::inbound::http as list_http;
use crate::modules::events::use_cases::receive_event::inbound::http as receive_http;
use crate::modules::sessions::use_cases::clear_session::inbound::http as clear_session_http;
use crate::modules::sessions::use_cases::get_session_history::inbound::http as session_history_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/status", get(status_http::handle))
        .route(
            "/events",
            post(receive_http::handle).get(list_http::handle),
        )
        .route(
            "/context",
            get(read_context_http::get_all)
                .post(write_context_http::post_entry)
                .delete(delete_context_http::clear_all),
        )
        .route(
            "/context/{key}",
            get(read_context_http::get_one)
                .put(write_context_http::put_entry)
                .delete(delete_context_http::delete_one),
        )
        .route(
            "/sessions/{session_id}",
            get(session_history_http::handle).delete(clear_session_http::handle),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
