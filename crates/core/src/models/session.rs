use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// The trading-session bounds that decide which samples are charted.
///
/// An explicit configuration value: callers pick the session date and
/// hours, the engine never assumes one. Samples outside
/// `[open_time, close_time]` (inclusive) are excluded from geometry but
/// stay in the parsed series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionWindow {
    pub open_time: NaiveDateTime,
    pub close_time: NaiveDateTime,
}

impl SessionWindow {
    #[must_use]
    pub fn new(open_time: NaiveDateTime, close_time: NaiveDateTime) -> Self {
        Self {
            open_time,
            close_time,
        }
    }

    /// Regular US equities session (09:30 to 16:00) on the given date.
    #[must_use]
    pub fn us_equities(date: NaiveDate) -> Self {
        Self {
            open_time: date.and_time(NaiveTime::from_hms_opt(9, 30, 0).unwrap_or_default()),
            close_time: date.and_time(NaiveTime::from_hms_opt(16, 0, 0).unwrap_or_default()),
        }
    }

    /// Whether a timestamp falls inside the session, both ends inclusive.
    #[must_use]
    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        timestamp >= self.open_time && timestamp <= self.close_time
    }

    /// Session length in fractional minutes. Zero or negative means the
    /// window is degenerate and nothing can be charted against it.
    #[must_use]
    pub fn duration_minutes(&self) -> f64 {
        Self::minutes_between(self.open_time, self.close_time)
    }

    /// Fractional minutes from market open to `timestamp`.
    #[must_use]
    pub fn minutes_since_open(&self, timestamp: NaiveDateTime) -> f64 {
        Self::minutes_between(self.open_time, timestamp)
    }

    fn minutes_between(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
        (to - from).num_seconds() as f64 / 60.0
    }
}
