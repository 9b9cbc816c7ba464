use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use serde::Deserialize;

use crate::modules::timecards::adapters::inbound::http_error::malformed_body;
use crate::modules::timecards::core::command::TransitionCommand;
use crate::modules::timecards::core::status::TimecardStatus;
use crate::shell::state::AppState;

/// Submittal, cancellation, rejection and approval documents all carry the acting resource.
#[derive(Deserialize)]
pub struct TransitionBody {
    pub resource: String,
}

pub async fn list(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.transitions.transitions(&id).await {
        Ok(transitions) => Json(transitions).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn record(
    state: AppState,
    id: String,
    body: Result<Json<TransitionBody>, JsonRejection>,
    command: fn(String) -> TransitionCommand,
) -> Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => return malformed_body(rejection),
    };

    match state.transitions.handle(&id, command(body.resource)).await {
        Ok(transition) => Json(transition).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn current(state: AppState, id: String, status: TimecardStatus) -> Response {
    match state.transitions.current(&id, status).await {
        Ok(transition) => Json(transition).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn submit(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<TransitionBody>, JsonRejection>,
) -> Response {
    record(state, id, body, |resource| TransitionCommand::Submit { resource }).await
}

pub async fn get_submittal(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    current(state, id, TimecardStatus::Submitted).await
}

pub async fn cancel(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<TransitionBody>, JsonRejection>,
) -> Response {
    record(state, id, body, |resource| TransitionCommand::Cancel { resource }).await
}

pub async fn get_cancellation(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    current(state, id, TimecardStatus::Cancelled).await
}

pub async fn reject(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<TransitionBody>, JsonRejection>,
) -> Response {
    record(state, id, body, |resource| TransitionCommand::Reject { resource }).await
}

pub async fn get_rejection(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    current(state, id, TimecardStatus::Rejected).await
}

pub async fn approve(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<TransitionBody>, JsonRejection>,
) -> Response {
    record(state, id, body, |resource| TransitionCommand::Approve { resource }).await
}

pub async fn get_approval(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    current(state, id, TimecardStatus::Approved).await
}
