//! Emoji sticker stamped at a point.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// A glyph placed at an anchor point. Placed and frozen in one step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sticker {
    /// Center of the glyph.
    pub anchor: Point,
    /// The glyph text, usually a single emoji.
    pub glyph: String,
}

impl Sticker {
    pub fn new(anchor: Point, glyph: impl Into<String>) -> Self {
        Self {
            anchor,
            glyph: glyph.into(),
        }
    }
}
