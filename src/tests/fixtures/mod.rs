pub mod environment;
pub mod lines;
pub mod state;
pub mod timecards;
