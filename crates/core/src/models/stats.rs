use serde::{Deserialize, Serialize};

use super::sample::TimeSeries;

/// Price extremes derived from a parsed series.
///
/// Both values come from the `open` field of each sample, not from the
/// bar high/low fields: the chart plots opens, so the vertical scale
/// spans exactly the plotted values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PriceStatistics {
    /// Highest `open` across the series; `0.0` when the series is empty
    pub highest_open: f64,
    /// Lowest `open` across the series; `0.0` when the series is empty
    pub lowest_open: f64,
}

impl PriceStatistics {
    /// Compute statistics over a series. An empty series yields the
    /// zero statistics rather than an error.
    #[must_use]
    pub fn from_series(series: &TimeSeries) -> Self {
        if series.is_empty() {
            return Self::default();
        }
        let mut highest_open = f64::NEG_INFINITY;
        let mut lowest_open = f64::INFINITY;
        for sample in series.samples() {
            highest_open = highest_open.max(sample.open);
            lowest_open = lowest_open.min(sample.open);
        }
        Self {
            highest_open,
            lowest_open,
        }
    }

    /// Vertical span of the plotted prices.
    #[must_use]
    pub fn price_range(&self) -> f64 {
        self.highest_open - self.lowest_open
    }
}
