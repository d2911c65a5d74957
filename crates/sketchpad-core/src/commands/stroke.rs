//! Freehand marker stroke.

use kurbo::{BezPath, Point};
use serde::{Deserialize, Serialize};

/// A freehand marker stroke (series of points drawn with one thickness).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Points in the order they were recorded.
    pub points: Vec<Point>,
    /// Line width in surface units.
    pub thickness: f64,
}

impl Stroke {
    /// Start a stroke at `origin`.
    pub fn new(origin: Point, thickness: f64) -> Self {
        Self {
            points: vec![origin],
            thickness,
        }
    }

    /// Create from existing points.
    pub fn from_points(points: Vec<Point>, thickness: f64) -> Self {
        Self { points, thickness }
    }

    /// Add a point to the path.
    pub fn drag(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the path is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether replaying this stroke leaves a mark.
    ///
    /// A single press without movement records one point, which draws nothing.
    pub fn is_visible(&self) -> bool {
        self.points.len() >= 2
    }

    /// Build the polyline path, or `None` when there is nothing to draw.
    pub fn to_path(&self) -> Option<BezPath> {
        if !self.is_visible() {
            return None;
        }

        let mut path = BezPath::new();
        path.move_to(self.points[0]);
        for point in self.points.iter().skip(1) {
            path.line_to(*point);
        }
        Some(path)
    }
}
