use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::CoreError;
use crate::models::interval::Interval;
use crate::models::sample::{PriceSample, TimeSeries};
use crate::models::stats::PriceStatistics;

/// Timestamp format of the series keys, interpreted in the feed's
/// reference timezone. No timezone negotiation.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Top-level key of the payload's metadata block.
const META_KEY: &str = "Meta Data";

/// How the parser treats individual malformed fields and entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldPolicy {
    /// Substitute `0` for unparseable numeric fields and drop entries
    /// with unparseable timestamps or bodies. Degradations are logged,
    /// never raised. Survives the quote provider's real-world payload
    /// quirks at the cost of charting substituted zeros.
    Tolerant,
    /// Surface every malformed field, timestamp, or entry body as an
    /// error. Opt-in for callers that would rather fail than chart a
    /// substituted price of zero.
    Strict,
}

impl Default for FieldPolicy {
    fn default() -> Self {
        FieldPolicy::Tolerant
    }
}

/// Everything one parse produces: the ordered series, its derived
/// price statistics, and the payload's metadata block when present.
#[derive(Debug, Clone, PartialEq)]
pub struct IntradayChart {
    pub series: TimeSeries,
    pub stats: PriceStatistics,
    pub meta: Option<SeriesMetadata>,
}

/// Decodes the quote provider's intraday payload into a typed series.
///
/// The series object is a map from timestamp strings to records of
/// string-encoded numeric fields; the timestamp lives in the map key,
/// not in the record. Decoding is a two-pass transform: first into a
/// generic JSON tree, then each `(key, value)` pair into a
/// [`PriceSample`].
#[derive(Debug, Clone, Default)]
pub struct IntradayParser {
    interval: Interval,
    policy: FieldPolicy,
}

impl IntradayParser {
    /// Parser for 5-minute bars with the tolerant field policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Expect the series under a different bar interval's key.
    #[must_use]
    pub fn with_interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    /// Error on malformed fields and entries instead of degrading.
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.policy = FieldPolicy::Strict;
        self
    }

    #[must_use]
    pub fn interval(&self) -> Interval {
        self.interval
    }

    #[must_use]
    pub fn policy(&self) -> FieldPolicy {
        self.policy
    }

    /// Parse a raw payload.
    ///
    /// Fails only when the payload is not valid JSON or the expected
    /// series key is missing (plus per-field failures under the strict
    /// policy). An empty series object parses to an empty series with
    /// zero statistics. Pure: parsing the same bytes twice yields equal
    /// results.
    pub fn parse(&self, raw: &[u8]) -> Result<IntradayChart, CoreError> {
        let root: Value = serde_json::from_slice(raw)?;

        let key = self.interval.series_key();
        let entries = match root.get(&key).and_then(Value::as_object) {
            Some(map) => map,
            None => return Err(CoreError::MissingSeries(key)),
        };

        // Best-effort: a missing or malformed metadata block never
        // fails the parse.
        let meta = root
            .get(META_KEY)
            .cloned()
            .and_then(|value| serde_json::from_value::<SeriesMetadata>(value).ok());

        let mut samples = Vec::with_capacity(entries.len());
        for (stamp, value) in entries {
            let timestamp = match NaiveDateTime::parse_from_str(stamp, TIMESTAMP_FORMAT) {
                Ok(ts) => ts,
                Err(_) if self.policy == FieldPolicy::Tolerant => {
                    log::warn!("dropping series entry with unparseable timestamp '{stamp}'");
                    continue;
                }
                Err(_) => return Err(CoreError::InvalidTimestamp(stamp.clone())),
            };

            let bar: RawBar = match serde_json::from_value(value.clone()) {
                Ok(bar) => bar,
                Err(e) if self.policy == FieldPolicy::Tolerant => {
                    log::warn!("dropping malformed series entry at '{stamp}': {e}");
                    continue;
                }
                Err(e) => {
                    return Err(CoreError::MalformedPayload(format!(
                        "series entry at '{stamp}': {e}"
                    )))
                }
            };

            samples.push(PriceSample {
                timestamp,
                open: self.price_field("open", stamp, &bar.open)?,
                high: self.price_field("high", stamp, &bar.high)?,
                low: self.price_field("low", stamp, &bar.low)?,
                close: self.price_field("close", stamp, &bar.close)?,
                volume: self.volume_field(stamp, &bar.volume)?,
            });
        }

        let series = TimeSeries::new(samples);
        let stats = PriceStatistics::from_series(&series);
        Ok(IntradayChart {
            series,
            stats,
            meta,
        })
    }

    fn price_field(
        &self,
        field: &'static str,
        timestamp: &str,
        value: &str,
    ) -> Result<f64, CoreError> {
        match value.parse::<f64>() {
            Ok(v) => Ok(v),
            Err(_) if self.policy == FieldPolicy::Tolerant => {
                log::debug!("substituting 0 for unparseable {field} '{value}' at {timestamp}");
                Ok(0.0)
            }
            Err(_) => Err(CoreError::InvalidField {
                field,
                timestamp: timestamp.to_string(),
                value: value.to_string(),
            }),
        }
    }

    fn volume_field(&self, timestamp: &str, value: &str) -> Result<u64, CoreError> {
        match value.parse::<u64>() {
            Ok(v) => Ok(v),
            Err(_) if self.policy == FieldPolicy::Tolerant => {
                log::debug!("substituting 0 for unparseable volume '{value}' at {timestamp}");
                Ok(0)
            }
            Err(_) => Err(CoreError::InvalidField {
                field: "volume",
                timestamp: timestamp.to_string(),
                value: value.to_string(),
            }),
        }
    }
}

// ── Raw feed records ────────────────────────────────────────────────

/// One bar exactly as the feed encodes it: numbered field labels,
/// every numeric value a string.
#[derive(Debug, Deserialize)]
struct RawBar {
    #[serde(rename = "1. open")]
    open: String,
    #[serde(rename = "2. high")]
    high: String,
    #[serde(rename = "3. low")]
    low: String,
    #[serde(rename = "4. close")]
    close: String,
    #[serde(rename = "5. volume")]
    volume: String,
}

/// The payload's `"Meta Data"` block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesMetadata {
    #[serde(rename = "1. Information")]
    pub information: Option<String>,
    #[serde(rename = "2. Symbol")]
    pub symbol: Option<String>,
    #[serde(rename = "3. Last Refreshed")]
    pub last_refreshed: Option<String>,
    #[serde(rename = "4. Interval")]
    pub interval: Option<String>,
    #[serde(rename = "5. Output Size")]
    pub output_size: Option<String>,
    #[serde(rename = "6. Time Zone")]
    pub time_zone: Option<String>,
}
