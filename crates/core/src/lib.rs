pub mod errors;
pub mod models;
pub mod parser;
pub mod providers;
pub mod services;

use models::geometry::{PathGeometry, Viewport};
use models::interval::Interval;
use models::sample::TimeSeries;
use models::session::SessionWindow;
use models::stats::PriceStatistics;
use parser::intraday::{IntradayChart, IntradayParser, SeriesMetadata};
use providers::traits::QuoteFeed;
use services::chart_service::ChartService;

use errors::CoreError;

/// Main entry point for the stock chart core library.
/// Holds one parsed intraday series and everything needed to lay it
/// out on a viewport.
#[must_use]
pub struct StockPriceChart {
    series: TimeSeries,
    stats: PriceStatistics,
    meta: Option<SeriesMetadata>,
    session: SessionWindow,
    chart_service: ChartService,
}

impl std::fmt::Debug for StockPriceChart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StockPriceChart")
            .field("samples", &self.series.len())
            .field("stats", &self.stats)
            .field("session", &self.session)
            .finish()
    }
}

impl StockPriceChart {
    /// Parse a raw intraday payload with the default parser (5-minute
    /// bars, tolerant field policy).
    pub fn from_json(raw: &str, session: SessionWindow) -> Result<Self, CoreError> {
        Self::with_parser(raw.as_bytes(), &IntradayParser::new(), session)
    }

    /// Parse a raw payload with a configured parser.
    pub fn with_parser(
        raw: &[u8],
        parser: &IntradayParser,
        session: SessionWindow,
    ) -> Result<Self, CoreError> {
        let chart = parser.parse(raw)?;
        Ok(Self::build(chart, session))
    }

    /// Fetch a symbol's intraday payload from a feed and parse it with
    /// the tolerant policy at the requested interval.
    pub async fn fetch(
        feed: &dyn QuoteFeed,
        symbol: &str,
        interval: Interval,
        session: SessionWindow,
    ) -> Result<Self, CoreError> {
        let raw = feed.fetch_intraday(symbol, interval).await?;
        Self::with_parser(&raw, &IntradayParser::new().with_interval(interval), session)
    }

    // ── Geometry ────────────────────────────────────────────────────

    /// Lay the series out on a viewport.
    ///
    /// Recomputed from scratch on every call: the host invokes this on
    /// each layout pass (viewport changes included) and always gets
    /// geometry consistent with the current inputs.
    #[must_use]
    pub fn geometry(&self, viewport: Viewport) -> PathGeometry {
        self.chart_service
            .compute_geometry(&self.series, &self.stats, &self.session, viewport)
    }

    // ── Accessors ───────────────────────────────────────────────────

    /// The full parsed series; session filtering happens at geometry time.
    #[must_use]
    pub fn series(&self) -> &TimeSeries {
        &self.series
    }

    #[must_use]
    pub fn statistics(&self) -> PriceStatistics {
        self.stats
    }

    #[must_use]
    pub fn session(&self) -> SessionWindow {
        self.session
    }

    /// Point the chart at a different trading session. The next
    /// `geometry` call picks it up.
    pub fn set_session(&mut self, session: SessionWindow) {
        self.session = session;
    }

    /// The payload's metadata block, when the feed supplied one.
    #[must_use]
    pub fn metadata(&self) -> Option<&SeriesMetadata> {
        self.meta.as_ref()
    }

    /// Ticker symbol from the payload metadata.
    #[must_use]
    pub fn symbol(&self) -> Option<&str> {
        self.meta.as_ref().and_then(|m| m.symbol.as_deref())
    }

    // ── Internal ────────────────────────────────────────────────────

    fn build(chart: IntradayChart, session: SessionWindow) -> Self {
        Self {
            series: chart.series,
            stats: chart.stats,
            meta: chart.meta,
            session,
            chart_service: ChartService::new(),
        }
    }
}
