//! Deterministic session packer.
//!
//! Packs fixed-length study sessions, each followed by a fixed break, into the
//! recurring peak-hours window:
//! - Assignments are handled strictly in input order on one shared timeline
//! - Each day is capped by the daily study budget and the window width
//! - Sessions never straddle a window edge or midnight
//! - An assignment whose next session would run past its deadline keeps the
//!   sessions already placed and drops the rest
//!
//! The only input besides the request is `today`; nothing reads the clock.

mod cursor;

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::schedule::{
    dedup_sessions, Assignment, ClockTime, PeakHours, Preferences, ScheduleRequest,
    ScheduleResponse, SessionType, StudySession, MINUTES_PER_DAY,
};
use cursor::DayCursor;

/// Generic study-hygiene tips attached to every packed schedule.
pub const STUDY_TIPS: [&str; 3] = [
    "Take a 5-10 minute break between study sessions to refresh your mind",
    "Review your notes from each session before starting the next one",
    "Stay hydrated and maintain good posture while studying",
];

/// Why an assignment stopped receiving sessions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum SkipReason {
    /// The next free slot starts after the deadline.
    StartsAfterDeadline,
    /// The next free slot starts in time but finishes too late.
    EndsAfterDeadline,
}

/// Note recorded when an assignment could not be fully scheduled.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeadlineSkip {
    pub assignment: String,
    pub deadline: NaiveDate,
    /// Sessions that were not placed.
    pub skipped_sessions: usize,
    pub reason: SkipReason,
}

impl std::fmt::Display for DeadlineSkip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.reason {
            SkipReason::StartsAfterDeadline => write!(
                f,
                "Cannot fit all sessions for \"{}\" before deadline {}.",
                self.assignment, self.deadline
            )?,
            SkipReason::EndsAfterDeadline => write!(
                f,
                "Session for \"{}\" would finish after deadline {}.",
                self.assignment, self.deadline
            )?,
        }
        write!(f, " Skipping remaining {} sessions.", self.skipped_sessions)
    }
}

/// Result of a successful packing run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PackOutcome {
    #[serde(flatten)]
    pub response: ScheduleResponse,
    #[serde(default)]
    pub skipped: Vec<DeadlineSkip>,
}

/// Packer bound to one set of validated preferences.
#[derive(Debug, Clone)]
pub struct SessionPacker {
    peak: PeakHours,
    peak_label: String,
    session_minutes: u32,
    break_minutes: u32,
    /// `min(hoursPerDay * 60, total window minutes)`.
    daily_cap: u32,
}

impl SessionPacker {
    /// Prepare a packer, rejecting preferences that can never place a session.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a malformed peak-hours string and
    /// [`PlanError::SessionExceedsWindow`] when the session length is longer
    /// than every peak-hour sub-window.
    pub fn new(preferences: &Preferences) -> Result<Self> {
        let peak = preferences.peak_hours()?;
        let session_minutes = preferences.session_minutes();
        let longest = peak.longest_window();

        if session_minutes > longest {
            return Err(PlanError::SessionExceedsWindow {
                session_minutes,
                longest_window_minutes: longest,
            }
            .into());
        }

        let daily_cap = preferences.daily_budget_minutes().min(peak.total_minutes());

        Ok(Self {
            peak_label: preferences.peak_hours.clone(),
            session_minutes,
            break_minutes: preferences.break_minutes(),
            daily_cap,
            peak,
        })
    }

    pub fn daily_cap(&self) -> u32 {
        self.daily_cap
    }

    /// Sessions an assignment needs at this session length.
    pub fn sessions_needed(&self, assignment: &Assignment) -> usize {
        let needed =
            (assignment.estimated_hours * 60.0 / f64::from(self.session_minutes)).ceil();
        if needed.is_finite() && needed > 0.0 {
            needed as usize
        } else {
            0
        }
    }

    /// Pack `assignments` onto one timeline starting at midnight of `today`.
    pub fn pack(&self, assignments: &[Assignment], today: NaiveDate) -> PackOutcome {
        // A run starts at the range's own start, which for a wrapping range is
        // the evening sub-window; later days start at the first sub-window.
        let mut cursor = DayCursor::new(&self.peak, today, self.peak.start);
        let mut schedule = Vec::new();
        let mut skipped = Vec::new();
        let mut next_id = 1usize;

        for assignment in assignments {
            let needed = self.sessions_needed(assignment);
            let deadline = assignment.deadline_instant();

            for index in 0..needed {
                if cursor.minutes_studied_today + self.session_minutes > self.daily_cap {
                    cursor.advance_day();
                }
                cursor.align(self.session_minutes);

                let start = cursor.start_instant();
                let end = start + Duration::minutes(i64::from(self.session_minutes));
                let reason = if start > deadline {
                    Some(SkipReason::StartsAfterDeadline)
                } else if end > deadline {
                    Some(SkipReason::EndsAfterDeadline)
                } else {
                    None
                };

                if let Some(reason) = reason {
                    let skip = DeadlineSkip {
                        assignment: assignment.name.clone(),
                        deadline: assignment.deadline,
                        skipped_sessions: needed - index,
                        reason,
                    };
                    tracing::warn!("{skip}");
                    skipped.push(skip);
                    break;
                }

                let is_review = index + 1 == needed;
                schedule.push(StudySession {
                    id: next_id.to_string(),
                    date: cursor.day,
                    start_time: ClockTime::from_minutes(cursor.minutes_into_day),
                    end_time: ClockTime::from_minutes(
                        cursor.minutes_into_day + self.session_minutes,
                    ),
                    task: session_label(assignment, is_review),
                    subject: assignment.subject.clone(),
                    kind: if is_review {
                        SessionType::Review
                    } else {
                        SessionType::Study
                    },
                    duration: self.session_minutes,
                });
                next_id += 1;

                cursor.book(self.session_minutes, self.break_minutes);
                if cursor.minutes_into_day >= MINUTES_PER_DAY {
                    cursor.advance_day();
                }
            }
        }

        let schedule = dedup_sessions(schedule);
        let mut response = ScheduleResponse {
            schedule,
            rationale: String::new(),
            tips: STUDY_TIPS.iter().map(|tip| tip.to_string()).collect(),
        };
        response.rationale = self.rationale(&response);

        tracing::info!(
            sessions = response.schedule.len(),
            days = response.day_count(),
            skipped = skipped.len(),
            "packed study schedule"
        );

        PackOutcome { response, skipped }
    }

    fn rationale(&self, response: &ScheduleResponse) -> String {
        format!(
            "Created {} study sessions across {} day(s). Sessions stay within your peak hours ({}) \
             with {}-minute focus blocks and {}-minute breaks to promote consistent progress.",
            response.schedule.len(),
            response.day_count(),
            self.peak_label,
            self.session_minutes,
            self.break_minutes,
        )
    }
}

fn session_label(assignment: &Assignment, is_review: bool) -> String {
    let suffix = if is_review { " - Final review" } else { "" };
    format!("{} {}{suffix}", assignment.kind.verb(), assignment.name)
}

/// Pack `assignments` with `preferences`, starting on `today`.
///
/// # Errors
///
/// See [`SessionPacker::new`]. Nothing fails once packing has started.
pub fn pack(
    assignments: &[Assignment],
    preferences: &Preferences,
    today: NaiveDate,
) -> Result<PackOutcome> {
    Ok(SessionPacker::new(preferences)?.pack(assignments, today))
}

/// Validate a whole request, then pack it.
pub fn generate_schedule(request: &ScheduleRequest, today: NaiveDate) -> Result<PackOutcome> {
    request.validate()?;
    pack(&request.assignments, &request.preferences, today)
}
