use serde::{Deserialize, Serialize};

/// A point in viewport pixel space, origin top-left, y growing downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Drawable-area dimensions, supplied by the renderer at layout time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// The two point sequences a renderer needs to draw the chart.
///
/// `line_points` is the stroke path: move to the first point, then
/// straight segments to each subsequent one in timestamp order.
/// `fill_points` is the same polyline plus two closing vertices on the
/// viewport's bottom edge, implicitly closed back to the first point;
/// it masks the gradient fill under the line. Both are empty when
/// nothing is chartable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathGeometry {
    pub line_points: Vec<Point>,
    pub fill_points: Vec<Point>,
}

impl PathGeometry {
    /// True when there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.line_points.is_empty()
    }
}
