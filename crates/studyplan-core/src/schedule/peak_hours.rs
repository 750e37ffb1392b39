//! Clock times and the recurring peak-hours window.
//!
//! Everything here works in "minutes since local midnight". A peak-hours
//! range whose end is not after its start wraps past midnight and is split
//! into two sub-windows of the same day: `[00:00, end)` and `[start, 24:00)`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// Minutes in one calendar day.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parse `H:MM` / `HH:MM` into minutes since midnight. `24:00` is accepted.
fn parse_minutes(field: &str, raw: &str) -> Result<u32, ValidationError> {
    let (hours, minutes) = raw
        .trim()
        .split_once(':')
        .ok_or_else(|| ValidationError::invalid(field, format!("expected HH:MM, got '{raw}'")))?;

    let hours: u32 = hours
        .parse()
        .map_err(|_| ValidationError::invalid(field, format!("invalid hour in '{raw}'")))?;
    let minutes: u32 = minutes
        .parse()
        .map_err(|_| ValidationError::invalid(field, format!("invalid minute in '{raw}'")))?;

    if minutes >= 60 || hours * 60 + minutes > MINUTES_PER_DAY {
        return Err(ValidationError::invalid(
            field,
            format!("'{raw}' is not a clock time"),
        ));
    }
    Ok(hours * 60 + minutes)
}

/// A wall-clock time with minute resolution, serialized as `"HH:MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    /// Build from minutes since midnight. Values of a day or more wrap, so a
    /// block ending exactly at midnight reads `00:00`.
    pub fn from_minutes(minutes: u32) -> Self {
        Self((minutes % MINUTES_PER_DAY) as u16)
    }

    pub fn minutes(self) -> u32 {
        u32::from(self.0)
    }

    pub fn hour(self) -> u32 {
        self.minutes() / 60
    }

    pub fn minute(self) -> u32 {
        self.minutes() % 60
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_minutes("time", s).map(Self::from_minutes)
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Half-open minute interval `[start, end)` within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeakWindow {
    pub start: u32,
    pub end: u32,
}

impl PeakWindow {
    pub fn width(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    /// Whether a block starting at `start` and lasting `length` minutes lies
    /// entirely inside this window.
    pub fn contains_block(&self, start: u32, length: u32) -> bool {
        start >= self.start && start + length <= self.end
    }
}

/// Parsed peak-hours preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeakHours {
    /// Minute offset of the range's own start, before any wrap split.
    pub start: u32,
    pub end: u32,
    /// Sub-windows ordered by start time.
    windows: Vec<PeakWindow>,
}

impl PeakHours {
    pub fn windows(&self) -> &[PeakWindow] {
        &self.windows
    }

    pub fn longest_window(&self) -> u32 {
        self.windows.iter().map(PeakWindow::width).max().unwrap_or(0)
    }

    pub fn total_minutes(&self) -> u32 {
        self.windows.iter().map(PeakWindow::width).sum()
    }

    /// First sub-window start of the day; where a fresh day begins.
    pub fn first_start(&self) -> u32 {
        self.windows.first().map(|w| w.start).unwrap_or(0)
    }
}

impl FromStr for PeakHours {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start_raw, end_raw) = s.split_once('-').ok_or_else(|| {
            ValidationError::invalid("peakHours", format!("expected HH:MM-HH:MM, got '{s}'"))
        })?;
        let start = parse_minutes("peakHours", start_raw)?;
        let end = parse_minutes("peakHours", end_raw)?;

        let windows = if end <= start {
            vec![
                PeakWindow { start: 0, end },
                PeakWindow {
                    start,
                    end: MINUTES_PER_DAY,
                },
            ]
        } else {
            vec![PeakWindow { start, end }]
        };

        Ok(Self {
            start,
            end,
            windows,
        })
    }
}
