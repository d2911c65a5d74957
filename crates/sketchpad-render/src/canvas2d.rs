//! HTML canvas surface backed by a `CanvasRenderingContext2d`.

use crate::renderer::{RenderError, RenderResult, StrokeStyle, Surface, TextStyle};
use kurbo::{BezPath, Cap, Join, PathEl, Point, Rect, Size};
use peniko::Color;
use sketchpad_core::SerializableColor;
use std::f64::consts::TAU;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Draws onto an HTML canvas element.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    size: Size,
}

impl CanvasSurface {
    /// Wrap the 2D context of `canvas`.
    pub fn new(canvas: &HtmlCanvasElement) -> RenderResult<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(js_error)?
            .ok_or_else(|| RenderError::Unavailable("canvas has no 2d context".to_string()))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| RenderError::Unavailable("context is not a 2d context".to_string()))?;

        Ok(Self {
            ctx,
            size: Size::new(f64::from(canvas.width()), f64::from(canvas.height())),
        })
    }

    fn apply_stroke_style(&self, style: &StrokeStyle) {
        self.ctx.set_line_width(style.width);
        self.ctx.set_line_cap(match style.cap {
            Cap::Butt => "butt",
            Cap::Square => "square",
            Cap::Round => "round",
        });
        self.ctx.set_line_join(match style.join {
            Join::Bevel => "bevel",
            Join::Miter => "miter",
            Join::Round => "round",
        });
        self.ctx.set_stroke_style_str(&css_color(style.color));
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self, rect: Rect) -> RenderResult<()> {
        self.ctx.clear_rect(rect.x0, rect.y0, rect.width(), rect.height());
        Ok(())
    }

    fn stroke_path(&mut self, path: &BezPath, style: &StrokeStyle) -> RenderResult<()> {
        self.apply_stroke_style(style);
        self.ctx.begin_path();
        for el in path.elements() {
            match *el {
                PathEl::MoveTo(p) => self.ctx.move_to(p.x, p.y),
                PathEl::LineTo(p) => self.ctx.line_to(p.x, p.y),
                PathEl::QuadTo(c, p) => self.ctx.quadratic_curve_to(c.x, c.y, p.x, p.y),
                PathEl::CurveTo(c1, c2, p) => {
                    self.ctx.bezier_curve_to(c1.x, c1.y, c2.x, c2.y, p.x, p.y)
                }
                PathEl::ClosePath => self.ctx.close_path(),
            }
        }
        self.ctx.stroke();
        Ok(())
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, style: &StrokeStyle) -> RenderResult<()> {
        self.apply_stroke_style(style);
        self.ctx.begin_path();
        self.ctx
            .arc(center.x, center.y, radius.max(0.0), 0.0, TAU)
            .map_err(js_error)?;
        self.ctx.stroke();
        Ok(())
    }

    fn fill_text(&mut self, text: &str, anchor: Point, style: &TextStyle) -> RenderResult<()> {
        self.ctx.set_font(&style.font);
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");
        self.ctx.set_fill_style_str(&css_color(style.color));
        self.ctx
            .fill_text(text, anchor.x, anchor.y)
            .map_err(js_error)
    }
}

fn css_color(color: Color) -> String {
    SerializableColor::from(color).to_css()
}

fn js_error(value: JsValue) -> RenderError {
    RenderError::Surface(format!("{:?}", value))
}
