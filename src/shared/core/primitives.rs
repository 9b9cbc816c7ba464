// Environment sources the core consumes: current time and unique identifiers.
//
// Timestamps
// - All i64 time values are epoch milliseconds.

use chrono::Utc;
use uuid::Uuid;

pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}

/// Time ordered identifiers, so lexical order follows creation order.
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV7Ids;

impl IdGenerator for UuidV7Ids {
    fn next_id(&self) -> String {
        Uuid::now_v7().to_string()
    }
}
