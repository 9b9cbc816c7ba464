// Shared test fixture for timecard lines.
// Seeded from `json/timecard_line.json`, then adjusted per test with the setters.

use crate::modules::timecards::core::line::TimecardLine;
use chrono::Weekday;
use std::fs;

pub struct TimecardLineBuilder {
    inner: TimecardLine,
}

impl Default for TimecardLineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TimecardLineBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/lines/json/timecard_line.json").unwrap();
        Self {
            inner: serde_json::from_str(&json_str).unwrap(),
        }
    }

    pub fn week(mut self, v: u32) -> Self {
        self.inner.week = v;
        self
    }

    pub fn year(mut self, v: i32) -> Self {
        self.inner.year = v;
        self
    }

    pub fn day(mut self, v: Weekday) -> Self {
        self.inner.day = v;
        self
    }

    pub fn hours(mut self, v: f64) -> Self {
        self.inner.hours = v;
        self
    }

    pub fn project(mut self, v: impl Into<String>) -> Self {
        self.inner.project = v.into();
        self
    }

    pub fn build(self) -> TimecardLine {
        self.inner
    }
}

#[cfg(test)]
mod timecard_line_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = TimecardLineBuilder::default().build();
        assert_eq!(built.week, 2);
        assert_eq!(built.year, 2019);
        assert_eq!(built.day, Weekday::Mon);
        assert_eq!(built.hours, 8.0);
        assert_eq!(built.project, "timecards-api");
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = TimecardLineBuilder::new()
            .week(10)
            .year(2020)
            .day(Weekday::Wed)
            .hours(1.5)
            .project("ops")
            .build();
        assert_eq!(custom.week, 10);
        assert_eq!(custom.year, 2020);
        assert_eq!(custom.day, Weekday::Wed);
        assert_eq!(custom.hours, 1.5);
        assert_eq!(custom.project, "ops");
    }
}
