// Composition root for the timecards bounded context.
//
// Responsibilities
// - Read config from the environment.
// - Instantiate the in-memory store and the environment sources.
// - Wire them into the use case handlers and the HTTP router.

pub mod config;
pub mod http;
pub mod state;
