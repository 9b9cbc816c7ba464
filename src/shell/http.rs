use axum::{
    Router,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::modules::timecards::use_cases::manage_lines::inbound::http as lines_http;
use crate::modules::timecards::use_cases::manage_timecards::inbound::http as timecards_http;
use crate::modules::timecards::use_cases::transition_timecard::inbound::http as transitions_http;
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/timesheets",
            get(timecards_http::list).post(timecards_http::create),
        )
        .route(
            "/timesheets/{id}",
            get(timecards_http::get_one).delete(timecards_http::delete),
        )
        .route(
            "/timesheets/{id}/lines",
            get(lines_http::list).post(lines_http::add),
        )
        .route(
            "/timesheets/{id}/lines/{index}",
            post(lines_http::replace).patch(lines_http::update),
        )
        .route("/timesheets/{id}/transitions", get(transitions_http::list))
        .route(
            "/timesheets/{id}/submittal",
            get(transitions_http::get_submittal).post(transitions_http::submit),
        )
        .route(
            "/timesheets/{id}/cancellation",
            get(transitions_http::get_cancellation).post(transitions_http::cancel),
        )
        .route(
            "/timesheets/{id}/rejection",
            get(transitions_http::get_rejection).post(transitions_http::reject),
        )
        .route(
            "/timesheets/{id}/approval",
            get(transitions_http::get_approval).post(transitions_http::approve),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
