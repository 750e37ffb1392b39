//! Property tests for the session packer invariants.

use std::collections::{BTreeMap, HashSet};

use chrono::{Duration, NaiveDate};
use proptest::prelude::*;
use studyplan_core::{
    pack, Assignment, AssignmentType, PeakHours, Preferences, Priority, SessionPacker,
    SessionType, StudySession,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
}

fn hhmm(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Peak-hours strings with quarter-hour endpoints, wrapping or not.
fn peak_hours() -> impl Strategy<Value = String> {
    (0u32..96, 0u32..96).prop_map(|(a, b)| hhmm(a * 15) + "-" + &hhmm(b * 15))
}

/// Preferences where one session fits a window and the daily budget.
/// A budget below one session breaks the per-day cap on purpose; the
/// scheduler unit tests cover that case.
fn preferences() -> impl Strategy<Value = Preferences> {
    (peak_hours(), 1u32..=120, 0u32..=90, 1u32..=12).prop_filter_map(
        "session must fit a window and the daily budget",
        |(peak, session, brk, hours)| {
            let parsed: PeakHours = peak.parse().ok()?;
            if session > parsed.longest_window() || session > hours * 60 {
                return None;
            }
            Some(Preferences {
                peak_hours: peak,
                session_length: f64::from(session),
                break_length: f64::from(brk),
                hours_per_day: f64::from(hours),
            })
        },
    )
}

fn assignments(max_deadline_days: i64) -> impl Strategy<Value = Vec<Assignment>> {
    prop::collection::vec((1u32..=24, 0i64..=max_deadline_days), 1..5).prop_map(|items| {
        items
            .into_iter()
            .enumerate()
            .map(|(i, (half_hours, due))| Assignment {
                id: None,
                name: format!("Assignment {i}"),
                subject: "Subject".to_string(),
                kind: AssignmentType::Exam,
                deadline: today() + Duration::days(due),
                estimated_hours: f64::from(half_hours) / 2.0,
                priority: Priority::Medium,
            })
            .collect()
    })
}

fn start_end(session: &StudySession) -> (u32, u32) {
    let start = session.start_time.minutes();
    (start, start + session.duration)
}

proptest! {
    #[test]
    fn sessions_fit_a_single_window(prefs in preferences(), work in assignments(30)) {
        let peak: PeakHours = prefs.peak_hours.parse().unwrap();
        let outcome = pack(&work, &prefs, today()).unwrap();
        for session in &outcome.response.schedule {
            prop_assert_eq!(session.duration, prefs.session_minutes());
            let (start, end) = start_end(session);
            prop_assert!(
                peak.windows().iter().any(|w| w.contains_block(start, session.duration)),
                "{}-{} outside {:?}", start, end, peak.windows()
            );
        }
    }

    #[test]
    fn daily_minutes_stay_under_the_cap(prefs in preferences(), work in assignments(30)) {
        let packer = SessionPacker::new(&prefs).unwrap();
        let outcome = packer.pack(&work, today());
        let mut per_day: BTreeMap<NaiveDate, u32> = BTreeMap::new();
        for session in &outcome.response.schedule {
            *per_day.entry(session.date).or_default() += session.duration;
        }
        for (day, minutes) in per_day {
            prop_assert!(minutes <= packer.daily_cap(), "{} has {} minutes", day, minutes);
        }
    }

    #[test]
    fn same_day_neighbours_are_separated_by_the_break(prefs in preferences(), work in assignments(30)) {
        let peak: PeakHours = prefs.peak_hours.parse().unwrap();
        let window_starts: HashSet<u32> = peak.windows().iter().map(|w| w.start).collect();
        let outcome = pack(&work, &prefs, today()).unwrap();
        for pair in outcome.response.schedule.windows(2) {
            if pair[0].date != pair[1].date {
                continue;
            }
            let (_, prev_end) = start_end(&pair[0]);
            let (next_start, _) = start_end(&pair[1]);
            prop_assert!(next_start >= prev_end);
            prop_assert!(
                next_start - prev_end == prefs.break_minutes() || window_starts.contains(&next_start),
                "gap {} between {:?} and {:?}", next_start - prev_end, pair[0], pair[1]
            );
        }
    }

    #[test]
    fn nothing_ends_after_its_deadline(prefs in preferences(), work in assignments(5)) {
        let outcome = pack(&work, &prefs, today()).unwrap();
        for session in &outcome.response.schedule {
            let owner = work
                .iter()
                .find(|a| session.task.contains(&format!("Study {}", a.name)))
                .unwrap();
            let (start, _) = start_end(session);
            let end = session.date.and_hms_opt(0, 0, 0).unwrap()
                + Duration::minutes(i64::from(start + session.duration));
            prop_assert!(end <= owner.deadline_instant());
        }
    }

    #[test]
    fn unhurried_assignments_get_every_session(prefs in preferences(), work in assignments(0)) {
        // Deadlines far in the future never cut an assignment short.
        let work: Vec<Assignment> = work
            .into_iter()
            .map(|mut a| { a.deadline = today() + Duration::days(3650); a })
            .collect();
        let packer = SessionPacker::new(&prefs).unwrap();
        let outcome = packer.pack(&work, today());
        prop_assert!(outcome.skipped.is_empty());

        for assignment in &work {
            let own: Vec<_> = outcome
                .response
                .schedule
                .iter()
                .filter(|s| s.task == format!("Study {}", assignment.name)
                    || s.task == format!("Study {} - Final review", assignment.name))
                .collect();
            prop_assert_eq!(own.len(), packer.sessions_needed(assignment));
            prop_assert_eq!(own.last().unwrap().kind, SessionType::Review);
            prop_assert_eq!(own.iter().filter(|s| s.kind == SessionType::Review).count(), 1);
        }
    }

    #[test]
    fn slots_are_unique_and_ids_sequential(prefs in preferences(), work in assignments(30)) {
        let outcome = pack(&work, &prefs, today()).unwrap();
        let mut seen = HashSet::new();
        for (i, session) in outcome.response.schedule.iter().enumerate() {
            prop_assert!(seen.insert((session.date, session.start_time, session.end_time, session.task.clone())));
            prop_assert_eq!(session.id.clone(), (i + 1).to_string());
        }
    }
}
