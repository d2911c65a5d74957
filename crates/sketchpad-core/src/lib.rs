//! Sketchpad Core Library
//!
//! Platform-agnostic drawing history for the sticker sketchpad: draw commands,
//! the undo/redo store, tool selection and pointer handling.

pub mod commands;
pub mod config;
pub mod events;
pub mod history;
pub mod input;
pub mod session;
pub mod sketchpad;
pub mod tools;

pub use commands::{DrawCommand, Sticker, Stroke, ToolPreview};
pub use config::{ConfigError, SerializableColor, SketchpadConfig};
pub use events::{ChangeListener, Frame, Notification, NotificationLog};
pub use history::{CommandHandle, HistoryStore};
pub use input::PointerEvent;
pub use session::{Gesture, InputSession};
pub use sketchpad::Sketchpad;
pub use tools::{ActiveTool, MarkerSize, ToolError, ToolManager, ToolSlot};
