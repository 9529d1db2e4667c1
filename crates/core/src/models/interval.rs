use serde::{Deserialize, Serialize};

/// Bar spacing of an intraday quote feed.
/// Determines the well-known top-level key the series object lives
/// under (e.g. `"Time Series (5min)"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Interval {
    /// 1-minute bars
    Min1,
    /// 5-minute bars — the feed's default intraday resolution
    Min5,
    /// 15-minute bars
    Min15,
    /// 30-minute bars
    Min30,
    /// 60-minute bars
    Min60,
}

impl Interval {
    /// Wire label used by the quote provider (e.g. `"5min"`).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Interval::Min1 => "1min",
            Interval::Min5 => "5min",
            Interval::Min15 => "15min",
            Interval::Min30 => "30min",
            Interval::Min60 => "60min",
        }
    }

    /// Top-level payload key the series object is stored under.
    #[must_use]
    pub fn series_key(&self) -> String {
        format!("Time Series ({})", self.as_str())
    }

    /// Bar spacing in minutes.
    #[must_use]
    pub fn minutes(&self) -> u32 {
        match self {
            Interval::Min1 => 1,
            Interval::Min5 => 5,
            Interval::Min15 => 15,
            Interval::Min30 => 30,
            Interval::Min60 => 60,
        }
    }
}

impl Default for Interval {
    fn default() -> Self {
        Interval::Min5
    }
}

impl std::fmt::Display for Interval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
