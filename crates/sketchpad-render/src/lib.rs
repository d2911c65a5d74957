//! Sketchpad Render Library
//!
//! Surface abstraction and the render cycle that replays the display list.
//! The browser build draws through a canvas 2D context; tests and headless
//! hosts use the recording surface.

mod recording;
mod renderer;
mod replay;

#[cfg(target_arch = "wasm32")]
mod canvas2d;

pub use recording::{DrawCall, RecordingSurface};
pub use renderer::{RenderError, RenderResult, RenderStyle, StrokeStyle, Surface, TextStyle};
pub use replay::{RenderCycle, render_frame, replay};

#[cfg(target_arch = "wasm32")]
pub use canvas2d::CanvasSurface;
