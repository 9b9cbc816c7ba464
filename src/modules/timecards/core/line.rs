// Time entry lines and the ordered table a timecard keeps them in.
//
// Purpose
// - Hold lines in storage order, addressed by a stable positional index.
//
// Responsibilities
// - Stamp `recorded` whenever a line is added, replaced or updated.
// - Derive the work date from (year, week, day) so it follows any change to the period.
// - Validate the resulting line before writing, so a rejected line leaves the table untouched.
//
// Boundaries
// - No status checks here. The timecard decides whether lines may change at all.

use crate::modules::timecards::core::errors::TimecardError;
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimecardLine {
    pub week: u32,
    pub year: i32,
    pub day: Weekday,
    pub hours: f64,
    pub project: String,
}

impl TimecardLine {
    /// ISO week date the hours apply to.
    pub fn work_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_isoywd_opt(self.year, self.week, self.day)
    }

    fn validated(self) -> Result<(Self, NaiveDate), TimecardError> {
        if !self.hours.is_finite() || self.hours < 0.0 {
            return Err(TimecardError::InvalidLine(format!(
                "hours must be a non-negative number, got {}",
                self.hours
            )));
        }
        if self.project.trim().is_empty() {
            return Err(TimecardError::InvalidLine("project is required".into()));
        }
        let work_date = self.work_date().ok_or_else(|| {
            TimecardError::InvalidLine(format!(
                "week {} of {} has no {}",
                self.week, self.year, self.day
            ))
        })?;
        Ok((self, work_date))
    }
}

/// Partial line for updates. Absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimecardLinePatch {
    pub week: Option<u32>,
    pub year: Option<i32>,
    pub day: Option<Weekday>,
    pub hours: Option<f64>,
    pub project: Option<String>,
}

impl TimecardLinePatch {
    fn merge_into(self, line: &TimecardLine) -> TimecardLine {
        TimecardLine {
            week: self.week.unwrap_or(line.week),
            year: self.year.unwrap_or(line.year),
            day: self.day.unwrap_or(line.day),
            hours: self.hours.unwrap_or(line.hours),
            project: self.project.unwrap_or_else(|| line.project.clone()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedTimecardLine {
    pub index: usize,
    pub recorded: i64,
    pub work_date: NaiveDate,
    #[serde(flatten)]
    pub line: TimecardLine,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LineTable {
    lines: Vec<AnnotatedTimecardLine>,
}

impl LineTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(
        &mut self,
        line: TimecardLine,
        recorded: i64,
    ) -> Result<AnnotatedTimecardLine, TimecardError> {
        let (line, work_date) = line.validated()?;
        let annotated = AnnotatedTimecardLine {
            index: self.lines.len(),
            recorded,
            work_date,
            line,
        };
        self.lines.push(annotated.clone());
        Ok(annotated)
    }

    pub fn replace_at(
        &mut self,
        index: usize,
        line: TimecardLine,
        recorded: i64,
    ) -> Result<AnnotatedTimecardLine, TimecardError> {
        let slot = self
            .lines
            .get_mut(index)
            .ok_or(TimecardError::LineNotFound { index })?;
        let (line, work_date) = line.validated()?;
        *slot = AnnotatedTimecardLine {
            index,
            recorded,
            work_date,
            line,
        };
        Ok(slot.clone())
    }

    pub fn update_at(
        &mut self,
        index: usize,
        patch: TimecardLinePatch,
        recorded: i64,
    ) -> Result<AnnotatedTimecardLine, TimecardError> {
        let current = self
            .lines
            .get(index)
            .ok_or(TimecardError::LineNotFound { index })?;
        let merged = patch.merge_into(&current.line);
        self.replace_at(index, merged, recorded)
    }

    /// Storage order. Never re-sorted, callers address lines by position.
    pub fn all(&self) -> &[AnnotatedTimecardLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
