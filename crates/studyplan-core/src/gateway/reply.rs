//! Parsing of a text-generation model's schedule reply.

use crate::error::GatewayError;
use crate::schedule::{dedup_sessions, ScheduleResponse};

const EXCERPT_CHARS: usize = 200;

/// Remove markdown code fences the model likes to wrap JSON in.
fn strip_code_fences(text: &str) -> String {
    text.replace("```json\n", "")
        .replace("```json", "")
        .replace("```\n", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Parse a model reply into a schedule, dropping repeated slots.
///
/// # Errors
///
/// Returns [`GatewayError::InvalidReply`] when the reply is not schedule JSON;
/// the error keeps the first 200 characters of the reply for diagnostics.
pub fn parse_model_reply(text: &str) -> Result<ScheduleResponse, GatewayError> {
    let cleaned = strip_code_fences(text);
    let mut response: ScheduleResponse =
        serde_json::from_str(&cleaned).map_err(|e| GatewayError::InvalidReply {
            message: e.to_string(),
            excerpt: text.chars().take(EXCERPT_CHARS).collect(),
        })?;

    let before = response.schedule.len();
    response.schedule = dedup_sessions(response.schedule);
    tracing::debug!(
        sessions = response.schedule.len(),
        duplicates = before - response.schedule.len(),
        "parsed model schedule"
    );
    Ok(response)
}
