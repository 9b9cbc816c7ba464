// Translate application failures into HTTP responses.
//
// Mapping
// - Unknown timecard or line index: 404.
// - Workflow conflicts (status, empty timecard, actor, missing transition): 409.
// - Invalid line content or a body that does not decode: 422.
// - Store failures: 500, with an id collision reported apart from an unreachable backend.

use crate::modules::timecards::adapters::outbound::timecard_store::StoreError;
use crate::modules::timecards::core::errors::TimecardError;
use crate::modules::timecards::use_cases::errors::ApplicationError;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}

impl ApplicationError {
    pub fn status_and_kind(&self) -> (StatusCode, &'static str) {
        match self {
            ApplicationError::TimecardNotFound(_)
            | ApplicationError::Domain(TimecardError::LineNotFound { .. }) => {
                (StatusCode::NOT_FOUND, "NotFound")
            }
            ApplicationError::Domain(TimecardError::InvalidState { .. }) => {
                (StatusCode::CONFLICT, "InvalidState")
            }
            ApplicationError::Domain(TimecardError::EmptyTimecard) => {
                (StatusCode::CONFLICT, "EmptyTimecard")
            }
            ApplicationError::Domain(TimecardError::NotAuthorized { .. }) => {
                (StatusCode::CONFLICT, "NotAuthorized")
            }
            ApplicationError::Domain(TimecardError::MissingTransition { .. }) => {
                (StatusCode::CONFLICT, "MissingTransition")
            }
            ApplicationError::Domain(TimecardError::InvalidLine(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "InvalidLine")
            }
            ApplicationError::Store(StoreError::Duplicate(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "DuplicateTimecard")
            }
            ApplicationError::Store(StoreError::Backend(_)) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "StoreUnavailable")
            }
        }
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let (status, kind) = self.status_and_kind();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        let body = ErrorBody {
            error: kind,
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// 422 for a request body that could not be decoded into the expected shape.
pub fn malformed_body(rejection: JsonRejection) -> Response {
    let body = ErrorBody {
        error: "MalformedRequest",
        message: rejection.body_text(),
    };
    (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
}

/// Line index from a path segment. A segment that is not a non-negative integer names no line.
pub fn line_index(segment: &str) -> Result<usize, Response> {
    segment.parse().map_err(|_| {
        let body = ErrorBody {
            error: "NotFound",
            message: format!("line {segment} not found"),
        };
        (StatusCode::NOT_FOUND, Json(body)).into_response()
    })
}
