//! Render cycle: clear the surface and replay every command in order.

use crate::renderer::{RenderResult, RenderStyle, StrokeStyle, Surface};
use sketchpad_core::{ChangeListener, DrawCommand, Frame, Notification};

/// Replay a single command onto the surface.
pub fn replay<S: Surface + ?Sized>(
    command: &DrawCommand,
    surface: &mut S,
    style: &RenderStyle,
) -> RenderResult<()> {
    match command {
        DrawCommand::Stroke(stroke) => match stroke.to_path() {
            Some(path) => {
                let ink = StrokeStyle::marker(stroke.thickness, style.stroke_color);
                surface.stroke_path(&path, &ink)
            }
            None => Ok(()),
        },
        DrawCommand::Sticker(sticker) => {
            surface.fill_text(&sticker.glyph, sticker.anchor, &style.sticker_text)
        }
        DrawCommand::Preview(preview) => {
            let outline = StrokeStyle::hairline(style.preview_color);
            surface.stroke_circle(preview.anchor, preview.radius, &outline)
        }
    }
}

/// Replay a whole frame: clear, display list in order, then the preview.
pub fn render_frame<S: Surface + ?Sized>(
    frame: Frame<'_>,
    surface: &mut S,
    style: &RenderStyle,
) -> RenderResult<()> {
    surface.clear_all()?;
    for command in frame.commands {
        replay(command, surface, style)?;
    }
    if let Some(preview) = frame.preview {
        replay(&DrawCommand::Preview(*preview), surface, style)?;
    }
    Ok(())
}

/// Redraws its surface on every notification.
#[derive(Debug)]
pub struct RenderCycle<S> {
    surface: S,
    style: RenderStyle,
    /// Frames rendered successfully.
    frames: u64,
    /// Frames abandoned because the surface failed.
    failures: u64,
}

impl<S: Surface> RenderCycle<S> {
    pub fn new(surface: S, style: RenderStyle) -> Self {
        Self {
            surface,
            style,
            frames: 0,
            failures: 0,
        }
    }

    /// Render a frame now. Failures are logged, not returned; the next
    /// notification starts again from a full clear.
    pub fn render(&mut self, frame: Frame<'_>) {
        match render_frame(frame, &mut self.surface, &self.style) {
            Ok(()) => self.frames += 1,
            Err(e) => {
                self.failures += 1;
                log::error!("Failed to render frame: {}", e);
            }
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn failures(&self) -> u64 {
        self.failures
    }
}

impl<S: Surface> ChangeListener for RenderCycle<S> {
    fn notify(&mut self, notification: Notification, frame: Frame<'_>) {
        log::trace!("Redraw on {:?}", notification);
        self.render(frame);
    }
}
