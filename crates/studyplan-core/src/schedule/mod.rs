//! Schedule types: assignments, study preferences, and study sessions.
//!
//! These are the wire types shared by the session packer and the model
//! gateway, so both paths hand the caller the same JSON shape (camelCase
//! fields, lowercase enum values, `YYYY-MM-DD` dates, `HH:MM` times).

mod peak_hours;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub use peak_hours::{ClockTime, PeakHours, PeakWindow, MINUTES_PER_DAY};

use crate::error::ValidationError;

/// Kind of academic work. Only changes how session labels read.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentType {
    Exam,
    Assignment,
    Project,
    Reading,
}

impl AssignmentType {
    /// Verb used in session task labels.
    pub fn verb(self) -> &'static str {
        match self {
            AssignmentType::Exam => "Study",
            _ => "Work on",
        }
    }
}

/// Advisory priority. The packer never reorders by it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

/// A unit of work to schedule.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub subject: String,
    #[serde(rename = "type")]
    pub kind: AssignmentType,
    /// Last calendar day work may happen on.
    pub deadline: NaiveDate,
    pub estimated_hours: f64,
    pub priority: Priority,
}

impl Assignment {
    /// The last instant a session may end: 23:59:59.999 on the deadline day.
    pub fn deadline_instant(&self) -> NaiveDateTime {
        let end_of_day =
            NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
        self.deadline.and_time(end_of_day)
    }
}

/// Scheduling constraints shared by every assignment in a request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    /// `"HH:MM-HH:MM"`, may wrap past midnight.
    pub peak_hours: String,
    /// Minutes.
    pub session_length: f64,
    /// Minutes.
    pub break_length: f64,
    pub hours_per_day: f64,
}

impl Preferences {
    pub fn peak_hours(&self) -> Result<PeakHours, ValidationError> {
        self.peak_hours.parse()
    }

    /// Session length rounded to whole minutes.
    pub fn session_minutes(&self) -> u32 {
        self.session_length.round().max(0.0) as u32
    }

    /// Break length rounded to whole minutes.
    pub fn break_minutes(&self) -> u32 {
        self.break_length.round().max(0.0) as u32
    }

    /// Daily budget in whole minutes.
    pub fn daily_budget_minutes(&self) -> u32 {
        (self.hours_per_day * 60.0).round().max(0.0) as u32
    }

    /// Reject values the packer cannot work with.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.peak_hours()?;
        if !(self.session_length.is_finite() && self.session_minutes() > 0) {
            return Err(ValidationError::invalid(
                "sessionLength",
                "must be a positive number of minutes",
            ));
        }
        if !(self.break_length.is_finite() && self.break_length >= 0.0) {
            return Err(ValidationError::invalid(
                "breakLength",
                "must not be negative",
            ));
        }
        if !(self.hours_per_day.is_finite() && self.hours_per_day > 0.0) {
            return Err(ValidationError::invalid(
                "hoursPerDay",
                "must be a positive number of hours",
            ));
        }
        Ok(())
    }
}

/// Whether a session is regular study or the final review.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SessionType {
    Study,
    Review,
}

impl SessionType {
    pub fn as_str(self) -> &'static str {
        match self {
            SessionType::Study => "study",
            SessionType::Review => "review",
        }
    }
}

/// One scheduled block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StudySession {
    pub id: String,
    pub date: NaiveDate,
    pub start_time: ClockTime,
    pub end_time: ClockTime,
    pub task: String,
    pub subject: String,
    #[serde(rename = "type")]
    pub kind: SessionType,
    /// Minutes.
    pub duration: u32,
}

/// Drop sessions that repeat an earlier (date, start, end, task) slot.
/// The first occurrence wins and order is otherwise kept.
pub fn dedup_sessions(sessions: Vec<StudySession>) -> Vec<StudySession> {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(sessions.len());
    for session in sessions {
        let key = (
            session.date,
            session.start_time,
            session.end_time,
            session.task.clone(),
        );
        if seen.insert(key) {
            unique.push(session);
        }
    }
    unique
}

/// A produced schedule, whichever path built it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    pub schedule: Vec<StudySession>,
    #[serde(default)]
    pub rationale: String,
    #[serde(default)]
    pub tips: Vec<String>,
}

impl ScheduleResponse {
    /// Number of distinct calendar days with at least one session.
    pub fn day_count(&self) -> usize {
        self.schedule
            .iter()
            .map(|s| s.date)
            .collect::<HashSet<_>>()
            .len()
    }
}

/// Everything one scheduling call needs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    pub assignments: Vec<Assignment>,
    pub preferences: Preferences,
}

impl ScheduleRequest {
    /// Structural checks the packer relies on.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.assignments.is_empty() {
            return Err(ValidationError::Empty {
                item: "assignment".to_string(),
            });
        }
        for assignment in &self.assignments {
            if !(assignment.estimated_hours.is_finite() && assignment.estimated_hours > 0.0) {
                return Err(ValidationError::invalid(
                    "estimatedHours",
                    format!("'{}' needs a positive number of hours", assignment.name),
                ));
            }
        }
        self.preferences.validate()
    }
}
