use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};

use crate::modules::timecards::adapters::inbound::http_error::{line_index, malformed_body};
use crate::modules::timecards::core::line::{TimecardLine, TimecardLinePatch};
use crate::shell::state::AppState;

pub async fn list(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.lines.lines(&id).await {
        Ok(lines) => Json(lines).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn add(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<TimecardLine>, JsonRejection>,
) -> Response {
    let Json(line) = match body {
        Ok(b) => b,
        Err(rejection) => return malformed_body(rejection),
    };

    match state.lines.add_line(&id, line).await {
        Ok(annotated) => Json(annotated).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn replace(
    State(state): State<AppState>,
    Path((id, index)): Path<(String, String)>,
    body: Result<Json<TimecardLine>, JsonRejection>,
) -> Response {
    let index = match line_index(&index) {
        Ok(i) => i,
        Err(response) => return response,
    };
    let Json(line) = match body {
        Ok(b) => b,
        Err(rejection) => return malformed_body(rejection),
    };

    match state.lines.replace_line(&id, index, line).await {
        Ok(annotated) => Json(annotated).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn update(
    State(state): State<AppState>,
    Path((id, index)): Path<(String, String)>,
    body: Result<Json<TimecardLinePatch>, JsonRejection>,
) -> Response {
    let index = match line_index(&index) {
        Ok(i) => i,
        Err(response) => return response,
    };
    let Json(patch) = match body {
        Ok(b) => b,
        Err(rejection) => return malformed_body(rejection),
    };

    match state.lines.update_line(&id, index, patch).await {
        Ok(annotated) => Json(annotated).into_response(),
        Err(e) => e.into_response(),
    }
}
