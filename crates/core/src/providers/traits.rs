use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::interval::Interval;

/// Trait abstraction over sources of raw intraday payloads.
///
/// A feed hands back the payload bytes untouched; decoding belongs to
/// [`IntradayParser`](crate::parser::intraday::IntradayParser). Keeping
/// the two apart lets tests and offline hosts push canned payloads
/// through the exact same path as live HTTP.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait QuoteFeed: Send + Sync {
    /// Human-readable name of this feed (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch the raw intraday payload for a symbol at a bar interval.
    async fn fetch_intraday(
        &self,
        symbol: &str,
        interval: Interval,
    ) -> Result<Vec<u8>, CoreError>;
}
