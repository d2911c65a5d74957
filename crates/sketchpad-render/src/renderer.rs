//! Surface trait abstraction.

use kurbo::{BezPath, Cap, Join, Point, Rect, Size};
use peniko::Color;
use sketchpad_core::SketchpadConfig;
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("Surface unavailable: {0}")]
    Unavailable(String),
    #[error("Surface error: {0}")]
    Surface(String),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Outline styling for paths and circles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub width: f64,
    pub cap: Cap,
    pub join: Join,
    pub color: Color,
}

impl StrokeStyle {
    /// Round-capped, round-joined marker ink.
    pub fn marker(width: f64, color: Color) -> Self {
        Self {
            width,
            cap: Cap::Round,
            join: Join::Round,
            color,
        }
    }

    /// Thin hairline used for outlines.
    pub fn hairline(color: Color) -> Self {
        Self {
            width: 1.0,
            cap: Cap::Butt,
            join: Join::Miter,
            color,
        }
    }
}

/// Text styling. Text is always centered on its anchor, both ways.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    /// CSS font shorthand, e.g. `32px sans-serif`.
    pub font: String,
    pub color: Color,
}

/// Colors and fonts used when replaying commands.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderStyle {
    /// Marker ink.
    pub stroke_color: Color,
    /// Cursor preview outline.
    pub preview_color: Color,
    /// Sticker text style.
    pub sticker_text: TextStyle,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self::from_config(&SketchpadConfig::default())
    }
}

impl RenderStyle {
    pub fn from_config(config: &SketchpadConfig) -> Self {
        Self {
            stroke_color: config.stroke_color.into(),
            preview_color: config.preview_color.into(),
            sticker_text: TextStyle {
                font: config.sticker_font.clone(),
                color: config.stroke_color.into(),
            },
        }
    }
}

/// A 2D drawing target that commands are replayed onto.
///
/// Mirrors the subset of a canvas 2D context the sketchpad needs. The core
/// never reads pixels back; it only clears and draws.
pub trait Surface {
    /// Logical size of the drawable area.
    fn size(&self) -> Size;

    /// Erase a region.
    fn clear(&mut self, rect: Rect) -> RenderResult<()>;

    /// Outline a path.
    fn stroke_path(&mut self, path: &BezPath, style: &StrokeStyle) -> RenderResult<()>;

    /// Outline a circle.
    fn stroke_circle(&mut self, center: Point, radius: f64, style: &StrokeStyle) -> RenderResult<()>;

    /// Draw filled text centered on `anchor`.
    fn fill_text(&mut self, text: &str, anchor: Point, style: &TextStyle) -> RenderResult<()>;

    /// Erase the whole surface.
    fn clear_all(&mut self) -> RenderResult<()> {
        let rect = Rect::from_origin_size(Point::ZERO, self.size());
        self.clear(rect)
    }
}
