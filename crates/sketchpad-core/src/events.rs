//! Change notifications from the sketchpad to its renderer.

use crate::commands::{DrawCommand, ToolPreview};

/// What changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notification {
    /// The display list changed.
    Changed,
    /// Only the cursor preview moved or changed size.
    ToolMoved,
}

/// Everything a redraw needs, borrowed from the sketchpad.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Committed commands in replay order.
    pub commands: &'a [DrawCommand],
    /// Cursor preview to draw last. `None` while a stroke is in progress.
    pub preview: Option<&'a ToolPreview>,
}

/// Receives notifications synchronously, before the triggering call returns.
pub trait ChangeListener {
    fn notify(&mut self, notification: Notification, frame: Frame<'_>);
}

/// Listener that ignores everything.
impl ChangeListener for () {
    fn notify(&mut self, _notification: Notification, _frame: Frame<'_>) {}
}

/// Records the notifications it receives.
#[derive(Debug, Clone, Default)]
pub struct NotificationLog {
    entries: Vec<Notification>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return and forget everything recorded so far.
    pub fn take(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.entries)
    }
}

impl ChangeListener for NotificationLog {
    fn notify(&mut self, notification: Notification, _frame: Frame<'_>) {
        self.entries.push(notification);
    }
}
