//! Application shell: wires the sketchpad to a surface and the toolbar.

use crate::toolbar::{ToolButton, Toolbar};
use sketchpad_core::{
    ConfigError, MarkerSize, PointerEvent, Sketchpad, SketchpadConfig, ToolError, ToolSlot,
};
use sketchpad_render::{RenderCycle, RenderError, RenderStyle, Surface};
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Tool(#[from] ToolError),
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub title: String,
    pub sketchpad: SketchpadConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Sticker Sketchpad".to_string(),
            sketchpad: SketchpadConfig::default(),
        }
    }
}

/// Actions triggered by toolbar buttons and shortcuts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiAction {
    /// Switch to a marker size.
    SelectMarker(MarkerSize),
    /// Switch to the palette sticker at this index.
    SelectSticker(usize),
    /// Add a custom sticker to the palette and select it.
    AddSticker(String),
    Clear,
    Undo,
    Redo,
}

impl From<ToolSlot> for UiAction {
    fn from(slot: ToolSlot) -> Self {
        match slot {
            ToolSlot::Marker(size) => UiAction::SelectMarker(size),
            ToolSlot::Sticker(index) => UiAction::SelectSticker(index),
        }
    }
}

/// The sketchpad, its render cycle and its toolbar.
pub struct App<S: Surface> {
    config: AppConfig,
    sketchpad: Sketchpad<RenderCycle<S>>,
    toolbar: Toolbar,
}

impl<S: Surface> App<S> {
    /// Create the app and paint the empty surface once.
    pub fn new(config: AppConfig, surface: S) -> Result<Self, AppError> {
        let cycle = RenderCycle::new(surface, RenderStyle::from_config(&config.sketchpad));
        let mut sketchpad = Sketchpad::with_listener(config.sketchpad.clone(), cycle)?;
        let toolbar = Toolbar::from_tools(sketchpad.tools());
        sketchpad.redraw();

        log::info!("{} ready", config.title);
        Ok(Self {
            config,
            sketchpad,
            toolbar,
        })
    }

    /// Apply a toolbar or shortcut action.
    pub fn apply(&mut self, action: UiAction) -> Result<(), AppError> {
        log::debug!("UI action {:?}", action);
        match action {
            UiAction::SelectMarker(size) => self.sketchpad.select_marker(size),
            UiAction::SelectSticker(index) => self.sketchpad.select_sticker_index(index)?,
            UiAction::AddSticker(glyph) => {
                let index = self.sketchpad.add_sticker(&glyph)?;
                self.toolbar.sync(self.sketchpad.tools());
                self.sketchpad.select_sticker_index(index)?;
            }
            UiAction::Clear => self.sketchpad.clear(),
            UiAction::Undo => {
                self.sketchpad.undo();
            }
            UiAction::Redo => {
                self.sketchpad.redo();
            }
        }
        Ok(())
    }

    /// Forward a pointer event to the sketchpad.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        self.sketchpad.handle_pointer_event(event);
    }

    /// Index of the toolbar button that is marked selected.
    pub fn selected_button(&self) -> Option<usize> {
        self.toolbar.selected_index(self.sketchpad.current_tool())
    }

    pub fn buttons(&self) -> &[ToolButton] {
        self.toolbar.buttons()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn sketchpad(&self) -> &Sketchpad<RenderCycle<S>> {
        &self.sketchpad
    }

    pub fn surface(&self) -> &S {
        self.sketchpad.listener().surface()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use sketchpad_render::{DrawCall, RecordingSurface};

    fn app() -> App<RecordingSurface> {
        let config = AppConfig::default();
        let surface = RecordingSurface::new(config.sketchpad.canvas_size());
        App::new(config, surface).unwrap()
    }

    #[test]
    fn test_first_paint_clears() {
        let app = app();
        assert_eq!(app.surface().calls().len(), 1);
        assert!(matches!(app.surface().calls()[0], DrawCall::Clear(_)));
        assert_eq!(app.selected_button(), Some(0));
    }

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = AppConfig::default();
        config.sketchpad.canvas_width = 0;
        let surface = RecordingSurface::new(kurbo::Size::new(1.0, 1.0));
        assert!(matches!(App::new(config, surface), Err(AppError::Config(_))));
    }

    #[test]
    fn test_custom_sticker_gets_button_and_selection() {
        let mut app = app();
        app.apply(UiAction::AddSticker("🦀".to_string())).unwrap();

        assert_eq!(app.buttons().len(), 6);
        assert_eq!(app.selected_button(), Some(5));

        app.handle_pointer_event(PointerEvent::Down {
            position: Point::new(30.0, 40.0),
        });
        assert!(matches!(&app.surface().visible_calls()[0],
            DrawCall::FillText { text, .. } if text == "🦀"));
    }

    #[test]
    fn test_bad_sticker_actions() {
        let mut app = app();
        assert!(matches!(
            app.apply(UiAction::AddSticker("  ".to_string())),
            Err(AppError::Tool(ToolError::EmptyGlyph))
        ));
        assert!(matches!(
            app.apply(UiAction::SelectSticker(42)),
            Err(AppError::Tool(ToolError::StickerIndexOutOfRange { .. }))
        ));
        assert_eq!(app.selected_button(), Some(0));
    }

    #[test]
    fn test_button_actions_drive_history() {
        let mut app = app();
        let thick = app.buttons()[1].slot;
        app.apply(thick.into()).unwrap();
        app.handle_pointer_event(PointerEvent::Down {
            position: Point::new(1.0, 1.0),
        });
        app.handle_pointer_event(PointerEvent::Move {
            position: Point::new(9.0, 9.0),
        });
        app.handle_pointer_event(PointerEvent::Up {
            position: Point::new(9.0, 9.0),
        });

        app.apply(UiAction::Undo).unwrap();
        assert!(app.sketchpad().history().is_empty());
        app.apply(UiAction::Redo).unwrap();
        assert_eq!(app.sketchpad().history().len(), 1);
        app.apply(UiAction::Clear).unwrap();
        assert!(app.sketchpad().history().is_empty());
        assert!(!app.sketchpad().history().can_redo());
        assert_eq!(app.selected_button(), Some(1));
    }
}
