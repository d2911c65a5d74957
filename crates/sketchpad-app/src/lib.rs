//! Sticker Sketchpad Application
//!
//! The application shell: toolbar state, keyboard shortcuts and the browser
//! entry point that feeds DOM events into the sketchpad.

mod app;
mod shortcuts;
mod toolbar;

pub use app::{App, AppConfig, AppError, UiAction};
pub use shortcuts::{Shortcut, ShortcutRegistry};
pub use toolbar::{ToolButton, Toolbar};

#[cfg(target_arch = "wasm32")]
mod web;

#[cfg(target_arch = "wasm32")]
pub use web::run_wasm;
