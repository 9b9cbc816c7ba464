// Deterministic clock and identifiers for handler tests.

use crate::shared::core::primitives::{Clock, IdGenerator};
use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};

/// Starts at `start` and advances by one second on every reading.
pub struct SteppingClock {
    next: AtomicI64,
}

impl SteppingClock {
    pub fn new(start: i64) -> Self {
        Self {
            next: AtomicI64::new(start),
        }
    }
}

impl Clock for SteppingClock {
    fn now_millis(&self) -> i64 {
        self.next.fetch_add(1_000, Ordering::SeqCst)
    }
}

#[derive(Default)]
pub struct SequentialIds {
    next: AtomicU64,
}

impl IdGenerator for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.next.fetch_add(1, Ordering::SeqCst) + 1;
        format!("tc-{n:04}")
    }
}
