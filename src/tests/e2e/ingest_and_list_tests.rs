use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use chrono::DateTime;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use crate::shell::http::router;
use crate::tests::fixtures::state::{make_test_state, make_test_state_with_replies};

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn posted_event_is_listed_as_the_last_item() {
    let app = router(make_test_state());
    for i in 0..3 {
        send(&app, post_json("/events", json!({"event_id": format!("evt-{i}"), "source": "zapier", "payload": {}}))).await;
    }

    let (status, ack) = send(
        &app,
        post_json("/events", json!({"source": "zapier", "payload": {"hello": "world"}})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let event_id = ack["event_id"].as_str().unwrap().to_string();
    assert!(Uuid::parse_str(&event_id).is_ok());
    let stored_at = ack["stored_at"].as_str().unwrap();
    assert!(DateTime::parse_from_rfc3339(stored_at).is_ok());

    let (_, page) = send(
        &app,
        Request::get("/events?offset=0&limit=5").body(Body::empty()).unwrap(),
    )
    .await;
    let items = page["items"].as_array().unwrap();
    assert_eq!(items.len(), 4);
    let last = items.last().unwrap();
    assert_eq!(last["event_id"], event_id.as_str());
    assert_eq!(last["payload"], json!({"hello": "world"}));
    assert_eq!(last["received_at"], stored_at);
}

#[tokio::test]
async fn log_keeps_the_latest_hundred_while_status_counts_all() {
    let app = router(make_test_state());
    for i in 0..150 {
        send(&app, post_json("/events", json!({"event_id": format!("evt-{i}"), "source": "zapier", "payload": i}))).await;
    }

    let (_, status) = send(&app, Request::get("/status").body(Body::empty()).unwrap()).await;
    assert_eq!(status["events_received"], 150);
    assert_eq!(status["last_event"]["event_id"], "evt-149");

    let (_, page) = send(
        &app,
        Request::get("/events?limit=100").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(page["total"], 100);
    let items = page["items"].as_array().unwrap();
    assert_eq!(items.first().unwrap()["event_id"], "evt-50");
    assert_eq!(items.last().unwrap()["event_id"], "evt-149");
}

#[tokio::test]
async fn session_turns_flow_from_events_to_history_and_out_again() {
    let app = router(make_test_state_with_replies("Noted."));
    send(
        &app,
        post_json("/events", json!({"source": "chat", "payload": {"text": "hi"}, "session_id": "A"})),
    )
    .await;
    send(
        &app,
        post_json("/events", json!({"source": "chat", "payload": {"text": "other"}, "session_id": "B"})),
    )
    .await;

    let (_, history) = send(&app, Request::get("/sessions/A").body(Body::empty()).unwrap()).await;
    let turns = history["history"].as_array().unwrap();
    assert_eq!(turns.len(), 1);
    assert_eq!(turns[0]["input"], json!({"text": "hi"}));
    assert_eq!(turns[0]["output"], "Noted.");

    let (_, first) = send(&app, Request::delete("/sessions/A").body(Body::empty()).unwrap()).await;
    let (_, second) = send(&app, Request::delete("/sessions/A").body(Body::empty()).unwrap()).await;
    assert_eq!(first["existed"], true);
    assert_eq!(second["existed"], false);

    let (_, other) = send(&app, Request::get("/sessions/B").body(Body::empty()).unwrap()).await;
    assert_eq!(other["history"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn context_entries_round_trip_through_the_router() {
    let app = router(make_test_state());
    let value = json!({"persona": "support", "limits": [1, 2.5, null, "x"]});

    let (status, _) = send(&app, post_json("/context", json!({"key": "profile", "value": value}))).await;
    assert_eq!(status, StatusCode::OK);

    let (_, entry) = send(&app, Request::get("/context/profile").body(Body::empty()).unwrap()).await;
    assert_eq!(entry["value"], value);

    let (_, cleared) = send(&app, Request::delete("/context").body(Body::empty()).unwrap()).await;
    assert_eq!(cleared["status"], "ok");
    let (_, all) = send(&app, Request::get("/context").body(Body::empty()).unwrap()).await;
    assert_eq!(all, json!({"context": {}}));
}
