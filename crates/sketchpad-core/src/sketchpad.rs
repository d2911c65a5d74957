//! Sketchpad state: history, input session and the change listener.

use crate::config::{ConfigResult, SketchpadConfig};
use crate::events::{ChangeListener, Frame, Notification};
use crate::history::HistoryStore;
use crate::input::PointerEvent;
use crate::session::{InputSession, Signals};
use crate::tools::{MarkerSize, ToolManager, ToolResult, ToolSlot};
use kurbo::Point;

/// The whole sketchpad. All mutation goes through here, and every change is
/// reported to the listener before the call returns.
#[derive(Debug, Clone)]
pub struct Sketchpad<L = ()> {
    config: SketchpadConfig,
    history: HistoryStore,
    session: InputSession,
    listener: L,
}

impl Default for Sketchpad<()> {
    fn default() -> Self {
        Self::new()
    }
}

impl Sketchpad<()> {
    /// Create a sketchpad with default configuration and no listener.
    pub fn new() -> Self {
        Self::from_valid_config(SketchpadConfig::default(), ())
    }
}

impl<L: ChangeListener> Sketchpad<L> {
    /// Create a sketchpad that reports changes to `listener`.
    ///
    /// Fails if `config` does not validate, so no tool can produce a
    /// non-positive thickness.
    pub fn with_listener(config: SketchpadConfig, listener: L) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config, listener))
    }

    fn from_valid_config(config: SketchpadConfig, listener: L) -> Self {
        let session = InputSession::from_config(&config);
        Self {
            config,
            history: HistoryStore::new(),
            session,
            listener,
        }
    }

    /// Process a pointer event.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down { position } => self.pointer_down(position),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up { .. } => self.pointer_up(),
            PointerEvent::Leave => self.pointer_leave(),
        }
    }

    pub fn pointer_down(&mut self, position: Point) {
        let signals = self.session.pointer_down(&mut self.history, position);
        self.emit(signals);
    }

    pub fn pointer_move(&mut self, position: Point) {
        let signals = self.session.pointer_move(&mut self.history, position);
        self.emit(signals);
    }

    pub fn pointer_up(&mut self) {
        let signals = self.session.pointer_up();
        self.emit(signals);
    }

    pub fn pointer_leave(&mut self) {
        let signals = self.session.pointer_leave();
        self.emit(signals);
    }

    /// Switch to a marker. Only affects strokes started afterwards.
    pub fn select_marker(&mut self, size: MarkerSize) {
        self.session.tools.select_marker(size);
        let signals = self.session.refresh_preview();
        self.emit(signals);
    }

    /// Switch to the palette sticker with this glyph.
    pub fn select_sticker(&mut self, glyph: &str) -> ToolResult<usize> {
        let index = self.session.tools.select_sticker(glyph)?;
        let signals = self.session.refresh_preview();
        self.emit(signals);
        Ok(index)
    }

    /// Switch to the sticker at `index` in the palette.
    pub fn select_sticker_index(&mut self, index: usize) -> ToolResult<()> {
        self.session.tools.select_sticker_index(index)?;
        let signals = self.session.refresh_preview();
        self.emit(signals);
        Ok(())
    }

    /// Add a custom sticker to the palette without selecting it.
    pub fn add_sticker(&mut self, glyph: &str) -> ToolResult<usize> {
        self.session.tools.add_sticker(glyph)
    }

    /// Undo the last stroke or sticker.
    /// Returns true if undo was performed, false if nothing to undo.
    pub fn undo(&mut self) -> bool {
        self.session.freeze();
        let undone = self.history.undo();
        if undone {
            self.emit(Signals::changed());
        }
        undone
    }

    /// Redo the last undone stroke or sticker.
    /// Returns true if redo was performed, false if nothing to redo.
    pub fn redo(&mut self) -> bool {
        self.session.freeze();
        let redone = self.history.redo();
        if redone {
            self.emit(Signals::changed());
        }
        redone
    }

    /// Erase everything, including redo history.
    pub fn clear(&mut self) {
        self.session.freeze();
        self.history.clear();
        self.emit(Signals::changed());
    }

    /// Ask the listener to redraw the current state, e.g. for the first paint.
    pub fn redraw(&mut self) {
        self.emit(Signals::changed());
    }

    /// State the listener would receive right now.
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            commands: self.history.commands(),
            preview: self.session.visible_preview(),
        }
    }

    fn emit(&mut self, signals: Signals) {
        for notification in signals.iter() {
            let frame = Frame {
                commands: self.history.commands(),
                preview: self.session.visible_preview(),
            };
            self.listener.notify(notification, frame);
        }
    }
}

impl<L> Sketchpad<L> {
    pub fn history(&self) -> &HistoryStore {
        &self.history
    }

    pub fn session(&self) -> &InputSession {
        &self.session
    }

    pub fn tools(&self) -> &ToolManager {
        &self.session.tools
    }

    /// The selected tool slot.
    pub fn current_tool(&self) -> ToolSlot {
        self.session.tools.current()
    }

    pub fn config(&self) -> &SketchpadConfig {
        &self.config
    }

    pub fn listener(&self) -> &L {
        &self.listener
    }

    pub fn listener_mut(&mut self) -> &mut L {
        &mut self.listener
    }
}

/// Convenience for tests and hosts that only need the notifications.
impl Sketchpad<crate::events::NotificationLog> {
    pub fn take_notifications(&mut self) -> Vec<Notification> {
        self.listener.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{DrawCommand, Sticker, Stroke};
    use crate::config::ConfigError;
    use crate::events::NotificationLog;
    use crate::events::Notification::{Changed, ToolMoved};

    fn logged() -> Sketchpad<NotificationLog> {
        let _ = env_logger::builder().is_test(true).try_init();
        Sketchpad::with_listener(SketchpadConfig::default(), NotificationLog::new()).unwrap()
    }

    fn draw(pad: &mut Sketchpad<NotificationLog>, from: (f64, f64), to: (f64, f64)) {
        pad.handle_pointer_event(PointerEvent::Down {
            position: Point::new(from.0, from.1),
        });
        pad.handle_pointer_event(PointerEvent::Move {
            position: Point::new(to.0, to.1),
        });
        pad.handle_pointer_event(PointerEvent::Up {
            position: Point::new(to.0, to.1),
        });
    }

    #[test]
    fn test_thin_stroke_undo_redo_scenario() {
        let mut pad = logged();
        pad.select_marker(MarkerSize::Thin);
        draw(&mut pad, (10.0, 10.0), (50.0, 50.0));

        let expected = DrawCommand::Stroke(Stroke::from_points(
            vec![Point::new(10.0, 10.0), Point::new(50.0, 50.0)],
            2.0,
        ));
        assert_eq!(pad.history().commands(), &[expected.clone()]);

        assert!(pad.undo());
        assert!(pad.history().is_empty());
        assert_eq!(pad.history().redo_commands(), &[expected.clone()]);

        assert!(pad.redo());
        assert_eq!(pad.history().commands(), &[expected]);
        assert!(!pad.history().can_redo());
    }

    #[test]
    fn test_sticker_scenario() {
        let mut pad = logged();
        pad.select_sticker("⭐").unwrap();
        pad.take_notifications();

        pad.pointer_down(Point::new(100.0, 100.0));
        assert_eq!(pad.take_notifications(), vec![Changed]);
        assert!(!pad.session().is_drawing());

        pad.pointer_up();
        assert!(pad.take_notifications().is_empty());
        assert_eq!(
            pad.history().commands(),
            &[DrawCommand::Sticker(Sticker::new(Point::new(100.0, 100.0), "⭐"))]
        );
    }

    #[test]
    fn test_new_stroke_after_undo_loses_redo() {
        let mut pad = logged();
        draw(&mut pad, (0.0, 0.0), (10.0, 10.0));
        pad.undo();
        draw(&mut pad, (20.0, 20.0), (30.0, 30.0));

        assert!(!pad.history().can_redo());
        assert!(!pad.redo());
        assert_eq!(pad.history().len(), 1);
        assert_eq!(
            pad.history().commands()[0].as_stroke().map(|s| s.points[0]),
            Some(Point::new(20.0, 20.0))
        );
    }

    #[test]
    fn test_clear_scenario() {
        let mut pad = logged();
        for i in 0..5 {
            let x = f64::from(i) * 10.0;
            draw(&mut pad, (x, x), (x + 5.0, x + 5.0));
        }
        pad.undo();
        pad.undo();
        assert_eq!(pad.history().len(), 3);
        assert_eq!(pad.history().redo_commands().len(), 2);
        pad.take_notifications();

        pad.clear();

        assert!(pad.history().is_empty());
        assert!(!pad.history().can_redo());
        assert_eq!(pad.take_notifications(), vec![Changed]);
        assert!(pad.frame().commands.is_empty());
    }

    #[test]
    fn test_empty_undo_redo_emit_nothing() {
        let mut pad = logged();
        assert!(!pad.undo());
        assert!(!pad.redo());
        assert!(pad.take_notifications().is_empty());
    }

    #[test]
    fn test_move_notifications() {
        let mut pad = logged();

        pad.pointer_move(Point::new(1.0, 1.0));
        assert_eq!(pad.take_notifications(), vec![ToolMoved]);

        pad.pointer_down(Point::new(1.0, 1.0));
        pad.pointer_move(Point::new(2.0, 2.0));
        assert_eq!(pad.take_notifications(), vec![Changed, ToolMoved, Changed]);
        assert!(pad.frame().preview.is_none());

        pad.pointer_up();
        assert_eq!(pad.take_notifications(), vec![ToolMoved]);
        assert_eq!(pad.frame().preview.map(|p| p.anchor), Some(Point::new(2.0, 2.0)));
    }

    #[test]
    fn test_leave_freezes_stroke() {
        let mut pad = logged();
        pad.pointer_down(Point::new(0.0, 0.0));
        pad.pointer_move(Point::new(5.0, 5.0));
        pad.handle_pointer_event(PointerEvent::Leave);

        assert!(!pad.session().is_drawing());
        assert!(pad.frame().preview.is_none());

        // Moving back in without a press does not extend the frozen stroke.
        pad.pointer_move(Point::new(9.0, 9.0));
        assert_eq!(pad.history().commands()[0].as_stroke().map(Stroke::len), Some(2));
    }

    #[test]
    fn test_tool_switch_is_not_retroactive() {
        let mut pad = logged();
        pad.pointer_down(Point::new(0.0, 0.0));
        pad.select_marker(MarkerSize::Thick);
        pad.pointer_move(Point::new(5.0, 5.0));
        pad.pointer_up();
        draw(&mut pad, (10.0, 10.0), (20.0, 20.0));

        let thicknesses: Vec<f64> = pad
            .history()
            .commands()
            .iter()
            .filter_map(DrawCommand::as_stroke)
            .map(|s| s.thickness)
            .collect();
        assert_eq!(thicknesses, vec![2.0, 7.0]);
        assert_eq!(pad.session().preview().map(|p| p.radius), Some(3.5));
    }

    #[test]
    fn test_tool_switch_resizes_visible_preview() {
        let mut pad = logged();
        pad.pointer_move(Point::new(3.0, 3.0));
        pad.take_notifications();

        pad.select_marker(MarkerSize::Thick);
        assert_eq!(pad.take_notifications(), vec![ToolMoved]);

        pad.select_sticker("🎨").unwrap();
        assert_eq!(pad.take_notifications(), vec![ToolMoved]);
        assert_eq!(pad.frame().preview.map(|p| p.radius), Some(4.0));
        assert_eq!(pad.current_tool(), ToolSlot::Sticker(1));
    }

    #[test]
    fn test_undo_while_drawing_ends_stroke() {
        let mut pad = logged();
        draw(&mut pad, (0.0, 0.0), (1.0, 1.0));
        pad.pointer_down(Point::new(5.0, 5.0));
        pad.undo();

        assert!(!pad.session().is_drawing());
        pad.pointer_move(Point::new(6.0, 6.0));
        assert_eq!(pad.history().len(), 1);
        assert_eq!(pad.history().commands()[0].as_stroke().map(Stroke::len), Some(2));
    }

    #[test]
    fn test_custom_sticker_placement() {
        let mut pad = logged();
        let index = pad.add_sticker("🦀").unwrap();
        pad.select_sticker_index(index).unwrap();
        pad.pointer_down(Point::new(-20.0, 300.0));

        assert_eq!(
            pad.history().commands()[0].as_sticker().map(|s| s.glyph.as_str()),
            Some("🦀")
        );
    }

    #[test]
    fn test_rejects_non_positive_thickness() {
        for thickness in [0.0, -1.0] {
            let config = SketchpadConfig {
                thin_thickness: thickness,
                ..SketchpadConfig::default()
            };
            let result = Sketchpad::with_listener(config, NotificationLog::new());
            assert!(matches!(result, Err(ConfigError::Invalid(_))));
        }
    }

    #[test]
    fn test_default_pad_draws_positive_thickness() {
        let mut pad = Sketchpad::new();
        pad.pointer_down(Point::new(1.0, 1.0));
        let thickness = pad.history().commands()[0].as_stroke().map(|s| s.thickness);
        assert_eq!(thickness, Some(2.0));
    }
}
