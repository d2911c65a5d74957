//! Surface that records draw calls instead of rasterizing them.

use crate::renderer::{RenderError, RenderResult, StrokeStyle, Surface, TextStyle};
use kurbo::{BezPath, Point, Rect, Size};

/// One call made against a [`RecordingSurface`].
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Rect),
    StrokePath {
        path: BezPath,
        style: StrokeStyle,
    },
    StrokeCircle {
        center: Point,
        radius: f64,
        style: StrokeStyle,
    },
    FillText {
        text: String,
        anchor: Point,
        style: TextStyle,
    },
}

/// Headless surface. Useful for tests and for comparing replays.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    size: Size,
    calls: Vec<DrawCall>,
    /// When set, the next draw call fails with this message.
    fail_next: Option<String>,
}

impl RecordingSurface {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            calls: Vec::new(),
            fail_next: None,
        }
    }

    /// Calls recorded so far.
    pub fn calls(&self) -> &[DrawCall] {
        &self.calls
    }

    /// Calls since the most recent full clear, i.e. what is currently visible.
    pub fn visible_calls(&self) -> &[DrawCall] {
        let start = self
            .calls
            .iter()
            .rposition(|call| matches!(call, DrawCall::Clear(_)))
            .map_or(0, |i| i + 1);
        &self.calls[start..]
    }

    /// Return and forget everything recorded so far.
    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }

    /// Make the next call fail, to exercise error handling.
    pub fn fail_next(&mut self, message: impl Into<String>) {
        self.fail_next = Some(message.into());
    }

    fn record(&mut self, call: DrawCall) -> RenderResult<()> {
        if let Some(message) = self.fail_next.take() {
            return Err(RenderError::Surface(message));
        }
        self.calls.push(call);
        Ok(())
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self, rect: Rect) -> RenderResult<()> {
        self.record(DrawCall::Clear(rect))
    }

    fn stroke_path(&mut self, path: &BezPath, style: &StrokeStyle) -> RenderResult<()> {
        self.record(DrawCall::StrokePath {
            path: path.clone(),
            style: *style,
        })
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, style: &StrokeStyle) -> RenderResult<()> {
        self.record(DrawCall::StrokeCircle {
            center,
            radius,
            style: *style,
        })
    }

    fn fill_text(&mut self, text: &str, anchor: Point, style: &TextStyle) -> RenderResult<()> {
        self.record(DrawCall::FillText {
            text: text.to_string(),
            anchor,
            style: style.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peniko::Color;

    #[test]
    fn test_clear_all_covers_surface() {
        let mut surface = RecordingSurface::new(Size::new(256.0, 256.0));
        surface.clear_all().unwrap();
        assert_eq!(
            surface.calls(),
            &[DrawCall::Clear(Rect::new(0.0, 0.0, 256.0, 256.0))]
        );
    }

    #[test]
    fn test_visible_calls_start_after_last_clear() {
        let mut surface = RecordingSurface::new(Size::new(10.0, 10.0));
        let style = StrokeStyle::hairline(Color::from_rgba8(0, 0, 0, 255));
        surface.stroke_circle(Point::ZERO, 1.0, &style).unwrap();
        surface.clear_all().unwrap();
        surface.stroke_circle(Point::new(2.0, 2.0), 1.0, &style).unwrap();

        assert_eq!(surface.calls().len(), 3);
        assert_eq!(
            surface.visible_calls(),
            &[DrawCall::StrokeCircle {
                center: Point::new(2.0, 2.0),
                radius: 1.0,
                style,
            }]
        );
    }

    #[test]
    fn test_fail_next_is_one_shot() {
        let mut surface = RecordingSurface::new(Size::new(10.0, 10.0));
        surface.fail_next("lost context");

        assert_eq!(
            surface.clear_all(),
            Err(RenderError::Surface("lost context".to_string()))
        );
        assert!(surface.clear_all().is_ok());
        assert_eq!(surface.calls().len(), 1);
    }
}
