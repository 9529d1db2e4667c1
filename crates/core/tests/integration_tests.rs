// ═══════════════════════════════════════════════════════════════════
// Integration Tests — full payload through parse and layout
// ═══════════════════════════════════════════════════════════════════

use async_trait::async_trait;
use chrono::NaiveDate;

use stock_chart_core::errors::CoreError;
use stock_chart_core::models::geometry::Viewport;
use stock_chart_core::models::interval::Interval;
use stock_chart_core::models::session::SessionWindow;
use stock_chart_core::providers::traits::QuoteFeed;
use stock_chart_core::StockPriceChart;

/// A trimmed quote-provider payload: unordered keys, string-encoded
/// numerics, pre-market, after-hours, and prior-day entries mixed in
/// with the regular session.
const FIXTURE: &str = r#"{
    "Meta Data": {
        "1. Information": "Intraday (5min) open, high, low, close prices and volume",
        "2. Symbol": "IBM",
        "3. Last Refreshed": "2020-12-04 19:25:00",
        "4. Interval": "5min",
        "5. Output Size": "Compact",
        "6. Time Zone": "US/Eastern"
    },
    "Time Series (5min)": {
        "2020-12-04 19:25:00": {
            "1. open": "127.1000",
            "2. high": "127.1000",
            "3. low": "127.1000",
            "4. close": "127.1000",
            "5. volume": "300"
        },
        "2020-12-04 09:30:00": {
            "1. open": "123.9500",
            "2. high": "124.1800",
            "3. low": "123.9400",
            "4. close": "124.1800",
            "5. volume": "2278"
        },
        "2020-12-04 16:00:00": {
            "1. open": "127.1750",
            "2. high": "127.2200",
            "3. low": "127.0500",
            "4. close": "127.1700",
            "5. volume": "262149"
        },
        "2020-12-04 13:30:00": {
            "1. open": "126.8649",
            "2. high": "126.8649",
            "3. low": "126.6200",
            "4. close": "126.6300",
            "5. volume": "67934"
        },
        "2020-12-04 07:05:00": {
            "1. open": "123.9300",
            "2. high": "123.9300",
            "3. low": "123.9300",
            "4. close": "123.9300",
            "5. volume": "165"
        },
        "2020-12-04 15:55:00": {
            "1. open": "127.0500",
            "2. high": "127.2000",
            "3. low": "127.0100",
            "4. close": "127.1750",
            "5. volume": "144602"
        },
        "2020-12-04 10:00:00": {
            "1. open": "124.6271",
            "2. high": "124.7600",
            "3. low": "124.3500",
            "4. close": "124.3900",
            "5. volume": "64153"
        },
        "2020-12-04 09:25:00": {
            "1. open": "123.9500",
            "2. high": "124.1800",
            "3. low": "123.9400",
            "4. close": "124.1800",
            "5. volume": "2278"
        },
        "2020-12-03 15:30:00": {
            "1. open": "124.1600",
            "2. high": "124.1600",
            "3. low": "124.1600",
            "4. close": "124.1600",
            "5. volume": "2969"
        },
        "2020-12-03 16:15:00": {
            "1. open": "123.7500",
            "2. high": "124.0000",
            "3. low": "123.7500",
            "4. close": "124.0000",
            "5. volume": "5044"
        }
    }
}"#;

fn session_dec_4() -> SessionWindow {
    SessionWindow::us_equities(NaiveDate::from_ymd_opt(2020, 12, 4).unwrap())
}

fn fixture_chart() -> StockPriceChart {
    StockPriceChart::from_json(FIXTURE, session_dec_4()).unwrap()
}

// ═══════════════════════════════════════════════════════════════════
// Parse side
// ═══════════════════════════════════════════════════════════════════

mod parse {
    use super::*;

    #[test]
    fn all_entries_survive_the_parse() {
        let chart = fixture_chart();
        assert_eq!(chart.series().len(), 10);
    }

    #[test]
    fn series_is_sorted_ascending() {
        let chart = fixture_chart();
        let stamps: Vec<_> = chart
            .series()
            .samples()
            .iter()
            .map(|s| s.timestamp)
            .collect();
        assert!(stamps.windows(2).all(|pair| pair[0] <= pair[1]));
        assert_eq!(
            chart.series().first().unwrap().timestamp.to_string(),
            "2020-12-03 15:30:00"
        );
        assert_eq!(
            chart.series().last().unwrap().timestamp.to_string(),
            "2020-12-04 19:25:00"
        );
    }

    #[test]
    fn statistics_span_the_whole_series() {
        let chart = fixture_chart();
        // Extremes come from entries outside the charted session too.
        assert_eq!(chart.statistics().highest_open, 127.175);
        assert_eq!(chart.statistics().lowest_open, 123.75);
    }

    #[test]
    fn metadata_is_carried_through() {
        let chart = fixture_chart();
        assert_eq!(chart.symbol(), Some("IBM"));
        let meta = chart.metadata().unwrap();
        assert_eq!(meta.time_zone.as_deref(), Some("US/Eastern"));
    }

    #[test]
    fn debug_summarizes_without_dumping_samples() {
        let chart = fixture_chart();
        let debug = format!("{chart:?}");
        assert!(debug.contains("samples: 10"));
        assert!(!debug.contains("127.1750"));
    }
}

// ═══════════════════════════════════════════════════════════════════
// Layout side
// ═══════════════════════════════════════════════════════════════════

mod layout {
    use super::*;

    #[test]
    fn charts_only_the_session_entries() {
        let chart = fixture_chart();
        let geometry = chart.geometry(Viewport::new(390.0, 281.0));

        // 09:30, 10:00, 13:30, 15:55 and 16:00 fall inside the window.
        assert_eq!(geometry.line_points.len(), 5);
        assert_eq!(geometry.fill_points.len(), 7);
    }

    #[test]
    fn line_spans_open_to_close() {
        let chart = fixture_chart();
        let geometry = chart.geometry(Viewport::new(390.0, 281.0));

        let first = geometry.line_points.first().unwrap();
        let last = geometry.line_points.last().unwrap();
        assert_eq!(first.x, 0.0);
        assert!((last.x - 390.0).abs() < 1e-9);
    }

    #[test]
    fn y_coordinates_stay_inside_the_viewport() {
        let chart = fixture_chart();
        let viewport = Viewport::new(390.0, 281.0);
        let geometry = chart.geometry(viewport);

        assert!(geometry
            .line_points
            .iter()
            .all(|p| p.y >= 0.0 && p.y <= viewport.height));
    }

    #[test]
    fn session_close_bar_is_the_highest_open() {
        let chart = fixture_chart();
        let geometry = chart.geometry(Viewport::new(390.0, 281.0));

        // The 16:00 bar carries the series-wide highest open, so it
        // touches the top edge.
        let last = geometry.line_points.last().unwrap();
        assert!(last.y.abs() < 1e-9);
    }

    #[test]
    fn resize_recomputes_from_the_same_series() {
        let chart = fixture_chart();
        let narrow = chart.geometry(Viewport::new(195.0, 281.0));
        let wide = chart.geometry(Viewport::new(390.0, 281.0));

        assert_eq!(narrow.line_points.len(), wide.line_points.len());
        for (n, w) in narrow.line_points.iter().zip(&wide.line_points) {
            assert!((w.x - n.x * 2.0).abs() < 1e-9);
            assert!((w.y - n.y).abs() < 1e-9);
        }
    }

    #[test]
    fn switching_the_session_recharts_the_prior_day() {
        let mut chart = fixture_chart();
        chart.set_session(SessionWindow::us_equities(
            NaiveDate::from_ymd_opt(2020, 12, 3).unwrap(),
        ));
        let geometry = chart.geometry(Viewport::new(390.0, 281.0));

        // Only the 12-03 15:30 entry is inside that session; the 16:15
        // one is after hours.
        assert_eq!(geometry.line_points.len(), 1);
        assert_eq!(geometry.fill_points.len(), 3);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Feed plumbing
// ═══════════════════════════════════════════════════════════════════

/// Serves the fixture payload without touching the network.
struct MockFeed;

#[async_trait]
impl QuoteFeed for MockFeed {
    fn name(&self) -> &str {
        "MockFeed"
    }

    async fn fetch_intraday(
        &self,
        _symbol: &str,
        _interval: Interval,
    ) -> Result<Vec<u8>, CoreError> {
        Ok(FIXTURE.as_bytes().to_vec())
    }
}

/// A feed that always fails, for error propagation checks.
struct FailingFeed;

#[async_trait]
impl QuoteFeed for FailingFeed {
    fn name(&self) -> &str {
        "FailingFeed"
    }

    async fn fetch_intraday(
        &self,
        symbol: &str,
        _interval: Interval,
    ) -> Result<Vec<u8>, CoreError> {
        Err(CoreError::Api {
            provider: self.name().to_string(),
            message: format!("No intraday data for {symbol}"),
        })
    }
}

mod feed {
    use super::*;

    #[tokio::test]
    async fn fetch_builds_a_chart_from_feed_bytes() {
        let chart = StockPriceChart::fetch(&MockFeed, "IBM", Interval::Min5, session_dec_4())
            .await
            .unwrap();

        assert_eq!(chart.series().len(), 10);
        assert_eq!(chart.symbol(), Some("IBM"));
        assert_eq!(
            chart.geometry(Viewport::new(390.0, 281.0)).line_points.len(),
            5
        );
    }

    #[tokio::test]
    async fn feed_errors_propagate() {
        let result =
            StockPriceChart::fetch(&FailingFeed, "IBM", Interval::Min5, session_dec_4()).await;

        match result.unwrap_err() {
            CoreError::Api { provider, message } => {
                assert_eq!(provider, "FailingFeed");
                assert!(message.contains("IBM"));
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn fetch_at_the_wrong_interval_is_a_missing_series() {
        let result =
            StockPriceChart::fetch(&MockFeed, "IBM", Interval::Min15, session_dec_4()).await;
        assert!(matches!(result.unwrap_err(), CoreError::MissingSeries(_)));
    }
}
