use async_trait::async_trait;
use reqwest::Client;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use super::traits::QuoteFeed;
use crate::errors::CoreError;
use crate::models::interval::Interval;

const BASE_URL: &str = "https://www.alphavantage.co/query";

/// Alpha Vantage intraday quote feed.
///
/// - **Free tier**: 25 requests/day (across ALL endpoints).
/// - **Requires**: API key.
/// - **Endpoint**: `TIME_SERIES_INTRADAY`, the schema the parser expects.
///
/// Returns payload bytes verbatim so the caller keeps control over the
/// parse policy and interval.
pub struct AlphaVantageFeed {
    client: Client,
    api_key: String,
}

impl AlphaVantageFeed {
    pub fn new(api_key: String) -> Self {
        let builder = Client::builder();
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.timeout(Duration::from_secs(30));
        Self {
            client: builder.build().unwrap_or_else(|_| Client::new()),
            api_key,
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl QuoteFeed for AlphaVantageFeed {
    fn name(&self) -> &str {
        "Alpha Vantage"
    }

    async fn fetch_intraday(
        &self,
        symbol: &str,
        interval: Interval,
    ) -> Result<Vec<u8>, CoreError> {
        let response = self
            .client
            .get(BASE_URL)
            .query(&[
                ("function", "TIME_SERIES_INTRADAY"),
                ("symbol", &symbol.to_uppercase()),
                ("interval", interval.as_str()),
                ("outputsize", "compact"),
                ("apikey", &self.api_key),
            ])
            .send()
            .await?;

        let bytes = response.bytes().await.map_err(|e| CoreError::Api {
            provider: "Alpha Vantage".into(),
            message: format!("Failed to read intraday payload for {symbol}: {e}"),
        })?;

        Ok(bytes.to_vec())
    }
}
