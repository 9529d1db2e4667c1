use crate::models::geometry::{PathGeometry, Point, Viewport};
use crate::models::sample::TimeSeries;
use crate::models::session::SessionWindow;
use crate::models::stats::PriceStatistics;

/// Maps a parsed series onto viewport pixel coordinates.
///
/// The core computes the points — the renderer strokes and fills them.
/// Holds no state between calls: the host recomputes on every layout
/// pass, and every call sees a complete, consistent set of inputs.
pub struct ChartService;

impl ChartService {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Compute the stroke and fill paths for one session on one viewport.
    ///
    /// Never fails. A zero or inverted session window, an empty
    /// in-window sample set, or a zero price range all produce an empty
    /// or collapsed geometry instead.
    #[must_use]
    pub fn compute_geometry(
        &self,
        series: &TimeSeries,
        stats: &PriceStatistics,
        window: &SessionWindow,
        viewport: Viewport,
    ) -> PathGeometry {
        // Guards the division in the x-axis scale.
        let span_minutes = window.duration_minutes();
        if span_minutes <= 0.0 {
            return PathGeometry::default();
        }

        let x_scale = viewport.width / span_minutes;
        let y_scale = Self::y_scale(stats, viewport);

        let mut line_points = Vec::new();
        for sample in series.samples() {
            if !window.contains(sample.timestamp) {
                continue;
            }
            let x = window.minutes_since_open(sample.timestamp) * x_scale;
            let y = viewport.height - (sample.open - stats.lowest_open) * y_scale;
            line_points.push(Point::new(x, y));
        }

        if line_points.is_empty() {
            return PathGeometry::default();
        }

        // Close the fill polygon down to the bottom edge and back to x = 0.
        let mut fill_points = line_points.clone();
        if let Some(last) = line_points.last() {
            fill_points.push(Point::new(last.x, viewport.height));
            fill_points.push(Point::new(0.0, viewport.height));
        }

        PathGeometry {
            line_points,
            fill_points,
        }
    }

    /// Pixels per price unit. Zero when the series is flat or has a
    /// single sample, collapsing every point onto the bottom edge
    /// instead of dividing by zero.
    fn y_scale(stats: &PriceStatistics, viewport: Viewport) -> f64 {
        let range = stats.price_range();
        if range > 0.0 {
            viewport.height / range
        } else {
            0.0
        }
    }
}

impl Default for ChartService {
    fn default() -> Self {
        Self::new()
    }
}
