//! Cursor preview showing where the next mark would land.

use kurbo::{Circle, Point};
use serde::{Deserialize, Serialize};

/// Transient outline following the pointer. Never stored in history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToolPreview {
    /// Pointer position.
    pub anchor: Point,
    /// Outline radius, derived from the active tool.
    pub radius: f64,
}

impl ToolPreview {
    pub fn new(anchor: Point, radius: f64) -> Self {
        Self { anchor, radius }
    }

    /// Move the preview and adopt a new radius.
    pub fn update(&mut self, anchor: Point, radius: f64) {
        self.anchor = anchor;
        self.radius = radius;
    }

    /// The outline as a kurbo circle.
    pub fn circle(&self) -> Circle {
        Circle::new(self.anchor, self.radius)
    }
}
