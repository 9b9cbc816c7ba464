// Application state wired with deterministic time and identifiers.

use crate::modules::timecards::adapters::outbound::timecard_store_in_memory::InMemoryTimecardStore;
use crate::shell::state::AppState;
use crate::tests::fixtures::environment::{SequentialIds, SteppingClock};
use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use std::sync::Arc;

pub fn make_test_state() -> AppState {
    state_with(InMemoryTimecardStore::new())
}

pub fn make_offline_store_state() -> AppState {
    let mut store = InMemoryTimecardStore::new();
    store.toggle_offline();
    state_with(store)
}

fn state_with(store: InMemoryTimecardStore) -> AppState {
    AppState::new(
        Arc::new(store),
        Arc::new(SteppingClock::new(1_700_000_000_000)),
        Arc::new(SequentialIds::default()),
    )
}

pub fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn json_body(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
