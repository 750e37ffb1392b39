//! Reading schedule requests from a file or stdin.

use std::io::Read;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use serde::Deserialize;
use studyplan_core::{Assignment, Config, Preferences, ScheduleRequest};

#[derive(Args)]
pub struct RequestArgs {
    /// JSON request file; reads stdin when omitted or "-"
    pub file: Option<PathBuf>,
    /// Day to start planning from, YYYY-MM-DD (default: local today)
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

/// Request as written by users: preferences may come from config.
#[derive(Deserialize)]
struct RequestFile {
    assignments: Vec<Assignment>,
    #[serde(default)]
    preferences: Option<Preferences>,
}

/// Read a file, or stdin for `None` / `-`.
pub fn read_text(file: Option<&PathBuf>) -> Result<String, std::io::Error> {
    match file {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

impl RequestArgs {
    pub fn today(&self) -> NaiveDate {
        self.today
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    pub fn read_request(&self, config: &Config) -> Result<ScheduleRequest, Box<dyn std::error::Error>> {
        let text = read_text(self.file.as_ref())?;
        let parsed: RequestFile = serde_json::from_str(&text)?;
        let preferences = parsed
            .preferences
            .unwrap_or_else(|| config.default_preferences());
        Ok(ScheduleRequest {
            assignments: parsed.assignments,
            preferences,
        })
    }
}
