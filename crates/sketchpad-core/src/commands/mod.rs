//! Draw commands: replayable records of single drawing actions.

mod preview;
mod sticker;
mod stroke;

pub use preview::ToolPreview;
pub use sticker::Sticker;
pub use stroke::Stroke;

use serde::{Deserialize, Serialize};

/// One drawing action. Replay dispatches on the variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    Stroke(Stroke),
    Sticker(Sticker),
    /// Cursor preview. Only ever held by the input session.
    Preview(ToolPreview),
}

impl DrawCommand {
    /// Get a short name for this command kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            DrawCommand::Stroke(_) => "stroke",
            DrawCommand::Sticker(_) => "sticker",
            DrawCommand::Preview(_) => "preview",
        }
    }

    /// Transient commands must not be committed to history.
    pub fn is_transient(&self) -> bool {
        matches!(self, DrawCommand::Preview(_))
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            DrawCommand::Stroke(stroke) => Some(stroke),
            _ => None,
        }
    }

    pub fn as_stroke_mut(&mut self) -> Option<&mut Stroke> {
        match self {
            DrawCommand::Stroke(stroke) => Some(stroke),
            _ => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&Sticker> {
        match self {
            DrawCommand::Sticker(sticker) => Some(sticker),
            _ => None,
        }
    }
}

impl From<Stroke> for DrawCommand {
    fn from(stroke: Stroke) -> Self {
        DrawCommand::Stroke(stroke)
    }
}

impl From<Sticker> for DrawCommand {
    fn from(sticker: Sticker) -> Self {
        DrawCommand::Sticker(sticker)
    }
}

impl From<ToolPreview> for DrawCommand {
    fn from(preview: ToolPreview) -> Self {
        DrawCommand::Preview(preview)
    }
}
