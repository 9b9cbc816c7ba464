use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::timecards::adapters::inbound::http_error::malformed_body;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct CreateTimecardBody {
    pub resource: String,
}

pub async fn list(State(state): State<AppState>) -> Response {
    match state.timecards.list().await {
        Ok(timecards) => Json(timecards).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateTimecardBody>, JsonRejection>,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return malformed_body(rejection),
    };

    match state.timecards.create(&body.resource).await {
        Ok(timecard) => (StatusCode::CREATED, Json(timecard)).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn get_one(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.timecards.find(&id).await {
        Ok(timecard) => Json(timecard).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.timecards.delete(&id).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => e.into_response(),
    }
}
