//! Scheduling cursor threaded through one packing run.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::schedule::{PeakHours, PeakWindow};

/// Position on the continuous study timeline.
///
/// All sessions of a run share one cursor; it only ever moves forward.
#[derive(Debug, Clone)]
pub(crate) struct DayCursor<'w> {
    windows: &'w [PeakWindow],
    /// Offset every day after the first starts from.
    day_start: u32,
    /// Calendar day being filled.
    pub day: NaiveDate,
    /// Next candidate start, minutes since midnight of `day`.
    pub minutes_into_day: u32,
    /// Minutes already booked on `day`.
    pub minutes_studied_today: u32,
}

impl<'w> DayCursor<'w> {
    pub fn new(peak: &'w PeakHours, day: NaiveDate, start_minutes: u32) -> Self {
        Self {
            windows: peak.windows(),
            day_start: peak.first_start(),
            day,
            minutes_into_day: start_minutes,
            minutes_studied_today: 0,
        }
    }

    /// Move to the first window of the next calendar day with nothing booked.
    pub fn advance_day(&mut self) {
        // NaiveDate::MAX has no successor; staying put still terminates
        // because every run books a bounded number of sessions.
        self.day = self.day.succ_opt().unwrap_or(self.day);
        self.minutes_into_day = self.day_start;
        self.minutes_studied_today = 0;
        tracing::debug!(day = %self.day, "advanced to next day");
    }

    /// Move forward to the earliest offset where a `length`-minute session
    /// fits inside a single window, rolling over days as needed.
    ///
    /// The caller guarantees `length` fits the widest window, otherwise this
    /// never returns.
    pub fn align(&mut self, length: u32) {
        loop {
            for window in self.windows {
                if self.minutes_into_day < window.start {
                    self.minutes_into_day = window.start;
                }
                if self.minutes_into_day + length <= window.end {
                    return;
                }
                // Windows that ended before the offset must not pull it back.
                self.minutes_into_day = self.minutes_into_day.max(window.end);
            }
            self.advance_day();
        }
    }

    /// Candidate start instant for the current offset.
    pub fn start_instant(&self) -> NaiveDateTime {
        self.day.and_time(NaiveTime::MIN) + Duration::minutes(i64::from(self.minutes_into_day))
    }

    /// Book a session of `length` minutes followed by a `gap`-minute break.
    ///
    /// A break too long to represent saturates; anything at or past
    /// midnight rolls the day over all the same.
    pub fn book(&mut self, length: u32, gap: u32) {
        self.minutes_studied_today = self.minutes_studied_today.saturating_add(length);
        self.minutes_into_day = self
            .minutes_into_day
            .saturating_add(length)
            .saturating_add(gap);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::MINUTES_PER_DAY;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, d).unwrap()
    }

    fn peak(range: &str) -> PeakHours {
        range.parse().unwrap()
    }

    #[test]
    fn advance_day_resets_to_first_window() {
        let windows = peak("22:00-02:00");
        let mut cursor = DayCursor::new(&windows, day(5), 1320);
        cursor.book(50, 10);
        cursor.advance_day();
        assert_eq!(cursor.day, day(6));
        assert_eq!(cursor.minutes_into_day, 0);
        assert_eq!(cursor.minutes_studied_today, 0);
    }

    #[test]
    fn align_snaps_forward_to_window_start() {
        let windows = peak("09:00-12:00");
        let mut cursor = DayCursor::new(&windows, day(5), 0);
        cursor.align(50);
        assert_eq!(cursor.minutes_into_day, 540);
        assert_eq!(cursor.day, day(5));
    }

    #[test]
    fn align_skips_to_next_window_when_session_does_not_fit() {
        let windows = peak("22:00-02:00");
        let mut cursor = DayCursor::new(&windows, day(5), 100);
        cursor.align(50);
        assert_eq!(cursor.minutes_into_day, 1320);
        assert_eq!(cursor.day, day(5));
    }

    #[test]
    fn align_never_moves_backwards_into_an_earlier_window() {
        let windows = peak("22:00-02:00");
        let mut cursor = DayCursor::new(&windows, day(5), 1380);
        cursor.align(50);
        assert_eq!(cursor.minutes_into_day, 1380);
        assert_eq!(cursor.day, day(5));
    }

    #[test]
    fn align_rolls_over_when_nothing_fits_today() {
        let windows = peak("09:00-12:00");
        let mut cursor = DayCursor::new(&windows, day(5), 700);
        cursor.align(50);
        assert_eq!(cursor.day, day(6));
        assert_eq!(cursor.minutes_into_day, 540);
    }

    #[test]
    fn start_instant_combines_day_and_offset() {
        let windows = peak("09:00-12:00");
        let cursor = DayCursor::new(&windows, day(5), 545);
        assert_eq!(cursor.start_instant().to_string(), "2026-01-05 09:05:00");
    }

    #[test]
    fn huge_break_saturates_past_midnight() {
        let windows = peak("09:00-12:00");
        let mut cursor = DayCursor::new(&windows, day(5), 540);
        cursor.book(50, u32::MAX);
        assert!(cursor.minutes_into_day >= MINUTES_PER_DAY);
        assert_eq!(cursor.minutes_studied_today, 50);
    }
}
