//! Prompt text for the text-generation path.
//!
//! The prompt stacks three parts: an expert persona, worked examples of the
//! expected output, and a strict JSON shape matching [`ScheduleResponse`].
//!
//! [`ScheduleResponse`]: crate::schedule::ScheduleResponse

use chrono::NaiveDate;

use crate::schedule::{Assignment, AssignmentType, Preferences, Priority};

const PERSONA: &str = "Act as an expert study planner who specializes in creating optimized \
study schedules with spaced repetition.";

const FEW_SHOT_EXAMPLES: &str = indoc::indoc! {r#"
    Examples:
    Input: Math Exam (10 hours needed, due 2024-01-20)
    Output: [{"id":"1","date":"2024-01-15","startTime":"14:00","endTime":"16:00","task":"Study Math Exam","subject":"Math","type":"study","duration":120}, {"id":"2","date":"2024-01-17","startTime":"14:00","endTime":"16:00","task":"Study Math Exam","subject":"Math","type":"study","duration":120}]

    Input: History Paper (5 hours needed, due 2024-01-18)
    Output: [{"id":"1","date":"2024-01-15","startTime":"10:00","endTime":"12:00","task":"Study History Paper","subject":"History","type":"study","duration":120}, {"id":"2","date":"2024-01-17","startTime":"10:00","endTime":"11:30","task":"Study History Paper","subject":"History","type":"study","duration":90}]"#};

/// Shape the model must answer with.
pub const OUTPUT_STRUCTURE: &str = r#"{"schedule":[{"id":"","date":"","startTime":"","endTime":"","task":"","subject":"","type":"","duration":0}],"rationale":"","tips":[]}"#;

fn type_name(kind: AssignmentType) -> &'static str {
    match kind {
        AssignmentType::Exam => "exam",
        AssignmentType::Assignment => "assignment",
        AssignmentType::Project => "project",
        AssignmentType::Reading => "reading",
    }
}

fn priority_name(priority: Priority) -> &'static str {
    match priority {
        Priority::High => "high",
        Priority::Medium => "medium",
        Priority::Low => "low",
    }
}

fn assignment_line(a: &Assignment) -> String {
    format!(
        "\"{}\" (Subject: {}, Type: {}, Due: {}, Hours needed: {}, Priority: {})",
        a.name,
        a.subject,
        type_name(a.kind),
        a.deadline,
        a.estimated_hours,
        priority_name(a.priority),
    )
}

/// Build the full prompt for `assignments` and `preferences` as of `today`.
pub fn build_prompt(
    assignments: &[Assignment],
    preferences: &Preferences,
    today: NaiveDate,
) -> String {
    let assignment_list = assignments
        .iter()
        .map(assignment_line)
        .collect::<Vec<_>>()
        .join("\n");

    let peak = &preferences.peak_hours;
    let session = preferences.session_length;
    let gap = preferences.break_length;
    let hours = preferences.hours_per_day;

    format!(
        "{PERSONA}\n\n\
         {FEW_SHOT_EXAMPLES}\n\n\
         Assignments to schedule:\n\
         {assignment_list}\n\n\
         Constraints:\n\
         - TODAY is {today} (never schedule in the past!)\n\
         - Peak hours: {peak} (schedule ALL sessions within these hours)\n\
         - Each session: {session} minutes long\n\
         - Break between sessions: {gap} minutes (if session ends 10:50, next starts 11:00)\n\
         - Daily limit: Maximum {hours} hours per day\n\
         - High priority assignments should be scheduled earlier\n\
         - Each session duration must be exactly {session} minutes\n\n\
         Required rules:\n\
         1. Use format \"Study [Assignment Name]\" for task names\n\
         2. Schedule sessions ONLY during peak hours ({peak})\n\
         3. Include {gap}-minute breaks between consecutive sessions\n\
         4. Respect {hours}h daily limit\n\
         5. Add 1 review session before each deadline\n\
         6. Use sequential IDs: \"1\", \"2\", \"3\", etc.\n\
         7. Each session duration = {session} minutes exactly\n\n\
         IMPORTANT: Keep rationale under 50 words. Provide 3 brief tips (10 words each max).\n\n\
         Return ONLY valid JSON:\n\
         {OUTPUT_STRUCTURE}"
    )
}
