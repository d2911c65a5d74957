//! Display list and redo stack.

use crate::commands::DrawCommand;
use kurbo::Point;

/// Position of a command inside the display list.
///
/// The input session keeps one of these for the stroke it is growing instead
/// of a second reference to the command itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommandHandle(usize);

impl CommandHandle {
    /// Index into the display list.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Ordered drawing history with undo/redo.
#[derive(Debug, Clone, Default)]
pub struct HistoryStore {
    /// Committed commands, replayed front to back.
    display_list: Vec<DrawCommand>,
    /// Undone commands; the last element is redone first.
    redo_stack: Vec<DrawCommand>,
}

impl HistoryStore {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Commit a new command as the tail of the display list.
    ///
    /// Starting a new visible change forfeits redo history. Preview commands
    /// are refused and yield `None`.
    pub fn append(&mut self, command: DrawCommand) -> Option<CommandHandle> {
        if command.is_transient() {
            log::warn!("Refusing to append transient {} command", command.kind_name());
            return None;
        }

        if !self.redo_stack.is_empty() {
            log::debug!("Discarding {} redo entries", self.redo_stack.len());
            self.redo_stack.clear();
        }

        log::debug!("Append {} at {}", command.kind_name(), self.display_list.len());
        self.display_list.push(command);
        Some(CommandHandle(self.display_list.len() - 1))
    }

    /// Move the most recent command onto the redo stack.
    /// Returns true if undo was performed, false if nothing to undo.
    pub fn undo(&mut self) -> bool {
        if let Some(command) = self.display_list.pop() {
            log::debug!("Undo {}", command.kind_name());
            self.redo_stack.push(command);
            true
        } else {
            false
        }
    }

    /// Reinstate the most recently undone command.
    /// Returns true if redo was performed, false if nothing to redo.
    pub fn redo(&mut self) -> bool {
        if let Some(command) = self.redo_stack.pop() {
            log::debug!("Redo {}", command.kind_name());
            self.display_list.push(command);
            true
        } else {
            false
        }
    }

    /// Empty both the display list and the redo stack.
    pub fn clear(&mut self) {
        log::debug!(
            "Clear history ({} drawn, {} undone)",
            self.display_list.len(),
            self.redo_stack.len()
        );
        self.display_list.clear();
        self.redo_stack.clear();
    }

    /// Append a point to the in-progress stroke named by `handle`.
    ///
    /// Only the tail of the display list can grow, and only if it is a
    /// stroke. Returns false when the handle no longer qualifies.
    pub fn extend_stroke(&mut self, handle: CommandHandle, point: Point) -> bool {
        if handle.0 + 1 != self.display_list.len() {
            return false;
        }

        match self.display_list.last_mut().and_then(DrawCommand::as_stroke_mut) {
            Some(stroke) => {
                stroke.drag(point);
                true
            }
            None => false,
        }
    }

    /// Get a command by handle.
    pub fn get(&self, handle: CommandHandle) -> Option<&DrawCommand> {
        self.display_list.get(handle.0)
    }

    /// Committed commands in replay order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.display_list
    }

    /// Undone commands, bottom of the stack first.
    pub fn redo_commands(&self) -> &[DrawCommand] {
        &self.redo_stack
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.display_list.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Get the number of committed commands.
    pub fn len(&self) -> usize {
        self.display_list.len()
    }

    /// Check if nothing is drawn.
    pub fn is_empty(&self) -> bool {
        self.display_list.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{Sticker, Stroke, ToolPreview};

    fn stroke_at(x: f64) -> DrawCommand {
        Stroke::new(Point::new(x, x), 2.0).into()
    }

    #[test]
    fn test_append_returns_tail_handle() {
        let mut history = HistoryStore::new();
        let first = history.append(stroke_at(0.0)).unwrap();
        let second = history.append(stroke_at(1.0)).unwrap();

        assert_eq!(first.index(), 0);
        assert_eq!(second.index(), 1);
        assert_eq!(history.get(second), Some(&stroke_at(1.0)));
    }

    #[test]
    fn test_undo_all_reverses_into_redo_stack() {
        let mut history = HistoryStore::new();
        let commands: Vec<DrawCommand> = (0..5).map(|i| stroke_at(i as f64)).collect();
        for command in &commands {
            history.append(command.clone());
        }

        for _ in 0..commands.len() {
            assert!(history.undo());
        }

        assert!(history.is_empty());
        // Popping the redo stack yields the commands in append order.
        let popped: Vec<DrawCommand> = history.redo_commands().iter().rev().cloned().collect();
        assert_eq!(popped, commands);
        assert_eq!(history.redo_commands().first(), commands.last());
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let mut history = HistoryStore::new();
        history.append(stroke_at(0.0));
        history.append(stroke_at(1.0));

        assert!(history.undo());
        assert_eq!(history.commands(), &[stroke_at(0.0)]);
        assert_eq!(history.redo_commands(), &[stroke_at(1.0)]);

        assert!(history.redo());
        assert_eq!(history.commands(), &[stroke_at(0.0), stroke_at(1.0)]);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_undo_empty_stack() {
        let mut history = HistoryStore::new();

        assert!(!history.can_undo());
        assert!(!history.undo());

        assert!(!history.can_redo());
        assert!(!history.redo());
        assert!(history.is_empty());
    }

    #[test]
    fn test_append_clears_redo() {
        let mut history = HistoryStore::new();
        history.append(stroke_at(0.0));
        history.append(stroke_at(1.0));
        history.undo();
        history.undo();
        assert_eq!(history.redo_commands().len(), 2);

        history.append(Sticker::new(Point::new(5.0, 5.0), "⭐").into());

        assert!(!history.can_redo());
        assert!(!history.redo());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_clear_empties_both() {
        let mut history = HistoryStore::new();
        for i in 0..5 {
            history.append(stroke_at(i as f64));
        }
        history.undo();
        history.undo();

        history.clear();

        assert!(history.is_empty());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_preview_is_refused() {
        let mut history = HistoryStore::new();
        history.append(stroke_at(0.0));
        history.undo();

        let handle = history.append(ToolPreview::new(Point::ZERO, 1.0).into());

        assert!(handle.is_none());
        assert!(history.is_empty());
        // A refused append is not a new action, so redo survives.
        assert!(history.can_redo());
    }

    #[test]
    fn test_extend_stroke_only_at_tail() {
        let mut history = HistoryStore::new();
        let handle = history.append(stroke_at(0.0)).unwrap();

        assert!(history.extend_stroke(handle, Point::new(9.0, 9.0)));
        assert_eq!(history.get(handle).and_then(DrawCommand::as_stroke).map(Stroke::len), Some(2));

        history.append(stroke_at(1.0));
        assert!(!history.extend_stroke(handle, Point::new(10.0, 10.0)));
        assert_eq!(history.get(handle).and_then(DrawCommand::as_stroke).map(Stroke::len), Some(2));
    }

    #[test]
    fn test_extend_stroke_rejects_sticker_and_stale_handle() {
        let mut history = HistoryStore::new();
        let handle = history.append(Sticker::new(Point::ZERO, "🐸").into()).unwrap();
        assert!(!history.extend_stroke(handle, Point::new(1.0, 1.0)));

        history.undo();
        assert!(!history.extend_stroke(handle, Point::new(1.0, 1.0)));
    }
}
