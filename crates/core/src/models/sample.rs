use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One timestamped OHLCV observation from the intraday feed.
///
/// The feed encodes every numeric field as a string; by the time a
/// sample exists they are plain numbers. `volume` is part of the feed
/// contract but unused by the geometry layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceSample {
    /// Bar timestamp, minute resolution, in the feed's session-local timezone
    pub timestamp: NaiveDateTime,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// An ordered intraday price series.
///
/// Sorted non-decreasing by timestamp at construction (the raw feed is
/// an unordered map) and immutable afterwards. Timestamps are unique
/// per series because the source keys its entries by them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    samples: Vec<PriceSample>,
}

impl TimeSeries {
    /// Build a series from raw samples, sorting ascending by timestamp.
    /// The sort is stable, so equal timestamps keep encounter order.
    #[must_use]
    pub fn new(mut samples: Vec<PriceSample>) -> Self {
        samples.sort_by_key(|s| s.timestamp);
        Self { samples }
    }

    #[must_use]
    pub fn samples(&self) -> &[PriceSample] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn first(&self) -> Option<&PriceSample> {
        self.samples.first()
    }

    #[must_use]
    pub fn last(&self) -> Option<&PriceSample> {
        self.samples.last()
    }
}
