//! Input session: turns pointer events into command mutations.

use crate::commands::{Sticker, Stroke, ToolPreview};
use crate::config::SketchpadConfig;
use crate::events::Notification;
use crate::history::{CommandHandle, HistoryStore};
use crate::tools::{ActiveTool, ToolManager};
use kurbo::Point;

/// State of the current pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    /// No button held, or the last stroke was frozen.
    #[default]
    Idle,
    /// A stroke is growing at the tail of the display list.
    Drawing(CommandHandle),
}

/// Notifications raised by one input step, delivered in a fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Signals {
    pub tool_moved: bool,
    pub changed: bool,
}

impl Signals {
    pub const NONE: Self = Self {
        tool_moved: false,
        changed: false,
    };

    pub fn changed() -> Self {
        Self {
            changed: true,
            ..Self::NONE
        }
    }

    pub fn tool_moved() -> Self {
        Self {
            tool_moved: true,
            ..Self::NONE
        }
    }

    /// Preview update first, then the history change.
    pub fn iter(self) -> impl Iterator<Item = Notification> {
        [
            self.tool_moved.then_some(Notification::ToolMoved),
            self.changed.then_some(Notification::Changed),
        ]
        .into_iter()
        .flatten()
    }
}

/// Tracks the active tool, the in-progress stroke and the cursor preview.
#[derive(Debug, Clone, Default)]
pub struct InputSession {
    /// Tool selection and sticker palette.
    pub tools: ToolManager,
    gesture: Gesture,
    preview: Option<ToolPreview>,
}

impl InputSession {
    /// Create a session on the default tools.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session from configuration.
    pub fn from_config(config: &SketchpadConfig) -> Self {
        Self {
            tools: ToolManager::from_config(config),
            gesture: Gesture::Idle,
            preview: None,
        }
    }

    /// Current gesture state.
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// Whether a stroke is currently being drawn.
    pub fn is_drawing(&self) -> bool {
        matches!(self.gesture, Gesture::Drawing(_))
    }

    /// The preview, whether or not it is currently drawn.
    pub fn preview(&self) -> Option<&ToolPreview> {
        self.preview.as_ref()
    }

    /// The preview to render: hidden while a stroke is in progress.
    pub fn visible_preview(&self) -> Option<&ToolPreview> {
        if self.is_drawing() {
            None
        } else {
            self.preview.as_ref()
        }
    }

    /// Pointer pressed: place a sticker or start a stroke.
    pub fn pointer_down(&mut self, history: &mut HistoryStore, position: Point) -> Signals {
        // A press without a matching release still ends the previous stroke.
        self.freeze();

        match self.tools.active() {
            ActiveTool::Sticker { glyph } => {
                history.append(Sticker::new(position, glyph).into());
            }
            ActiveTool::Marker { thickness } => {
                if let Some(handle) = history.append(Stroke::new(position, thickness).into()) {
                    self.gesture = Gesture::Drawing(handle);
                }
            }
        }
        Signals::changed()
    }

    /// Pointer moved: update the preview and grow the stroke if drawing.
    pub fn pointer_move(&mut self, history: &mut HistoryStore, position: Point) -> Signals {
        log::trace!("Pointer at ({}, {})", position.x, position.y);
        let radius = self.tools.preview_radius();
        self.preview
            .get_or_insert_with(|| ToolPreview::new(position, radius))
            .update(position, radius);

        let mut signals = Signals::tool_moved();
        if let Gesture::Drawing(handle) = self.gesture {
            if history.extend_stroke(handle, position) {
                signals.changed = true;
            } else {
                log::warn!("In-progress stroke {} is gone; ending gesture", handle.index());
                self.gesture = Gesture::Idle;
            }
        }
        signals
    }

    /// Pointer released: freeze the stroke and show the preview again.
    pub fn pointer_up(&mut self) -> Signals {
        let was_drawing = self.freeze();
        if was_drawing && self.preview.is_some() {
            Signals::tool_moved()
        } else {
            Signals::NONE
        }
    }

    /// Pointer left the surface: freeze the stroke and hide the preview.
    pub fn pointer_leave(&mut self) -> Signals {
        self.freeze();
        if self.preview.take().is_some() {
            Signals::tool_moved()
        } else {
            Signals::NONE
        }
    }

    /// Resize the preview after a tool switch.
    pub fn refresh_preview(&mut self) -> Signals {
        let radius = self.tools.preview_radius();
        match &mut self.preview {
            Some(preview) if preview.radius != radius => {
                preview.radius = radius;
                Signals::tool_moved()
            }
            _ => Signals::NONE,
        }
    }

    /// Stop growing the in-progress stroke. Returns whether one existed.
    pub fn freeze(&mut self) -> bool {
        match std::mem::take(&mut self.gesture) {
            Gesture::Drawing(handle) => {
                log::debug!("Froze stroke {}", handle.index());
                true
            }
            Gesture::Idle => false,
        }
    }
}
