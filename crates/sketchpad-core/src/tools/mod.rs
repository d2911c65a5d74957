//! Tool system: marker sizes and the sticker palette.

use crate::config::SketchpadConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Tool selection errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    #[error("Sticker glyph must not be empty")]
    EmptyGlyph,
    #[error("Sticker not in palette: {0}")]
    UnknownSticker(String),
    #[error("Sticker index {index} out of range (palette has {len})")]
    StickerIndexOutOfRange { index: usize, len: usize },
}

/// Result type for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;

/// Available marker sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum MarkerSize {
    #[default]
    Thin,
    Thick,
}

impl MarkerSize {
    /// Get display name for this marker size.
    pub fn name(self) -> &'static str {
        match self {
            MarkerSize::Thin => "Thin",
            MarkerSize::Thick => "Thick",
        }
    }
}

/// The active drawing mode. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolSlot {
    Marker(MarkerSize),
    /// Index into the sticker palette.
    Sticker(usize),
}

impl Default for ToolSlot {
    fn default() -> Self {
        ToolSlot::Marker(MarkerSize::default())
    }
}

/// What a pointer press produces with the current tool.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActiveTool<'a> {
    Marker { thickness: f64 },
    Sticker { glyph: &'a str },
}

/// Manages the current tool and the sticker palette.
#[derive(Debug, Clone)]
pub struct ToolManager {
    /// Currently selected tool.
    current: ToolSlot,
    /// Thin marker line width.
    thin_thickness: f64,
    /// Thick marker line width.
    thick_thickness: f64,
    /// Sticker glyphs, in toolbar order.
    stickers: Vec<String>,
    /// Preview radius used while a sticker is selected.
    sticker_preview_radius: f64,
}

impl Default for ToolManager {
    fn default() -> Self {
        Self::from_config(&SketchpadConfig::default())
    }
}

impl ToolManager {
    /// Create a new tool manager with the default palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tool manager from configuration. Starts on the thin marker.
    pub fn from_config(config: &SketchpadConfig) -> Self {
        Self {
            current: ToolSlot::default(),
            thin_thickness: config.thin_thickness,
            thick_thickness: config.thick_thickness,
            stickers: config.stickers.clone(),
            sticker_preview_radius: config.sticker_preview_radius,
        }
    }

    /// The selected tool slot.
    pub fn current(&self) -> ToolSlot {
        self.current
    }

    /// Resolve the selected slot into what a press should create.
    pub fn active(&self) -> ActiveTool<'_> {
        match self.current {
            ToolSlot::Marker(size) => ActiveTool::Marker {
                thickness: self.thickness(size),
            },
            ToolSlot::Sticker(index) => ActiveTool::Sticker {
                glyph: &self.stickers[index],
            },
        }
    }

    /// Line width for a marker size.
    pub fn thickness(&self, size: MarkerSize) -> f64 {
        match size {
            MarkerSize::Thin => self.thin_thickness,
            MarkerSize::Thick => self.thick_thickness,
        }
    }

    /// Radius of the cursor preview for the current tool.
    pub fn preview_radius(&self) -> f64 {
        match self.active() {
            ActiveTool::Marker { thickness } => thickness / 2.0,
            ActiveTool::Sticker { .. } => self.sticker_preview_radius,
        }
    }

    /// Switch to a marker, leaving sticker mode.
    pub fn select_marker(&mut self, size: MarkerSize) {
        log::debug!("Selected {} marker", size.name());
        self.current = ToolSlot::Marker(size);
    }

    /// Switch to the palette sticker with this glyph.
    pub fn select_sticker(&mut self, glyph: &str) -> ToolResult<usize> {
        let index = self
            .sticker_index(glyph)
            .ok_or_else(|| ToolError::UnknownSticker(glyph.to_string()))?;
        self.select_sticker_index(index)?;
        Ok(index)
    }

    /// Switch to the sticker at `index` in the palette.
    pub fn select_sticker_index(&mut self, index: usize) -> ToolResult<()> {
        let Some(glyph) = self.stickers.get(index) else {
            return Err(ToolError::StickerIndexOutOfRange {
                index,
                len: self.stickers.len(),
            });
        };
        log::debug!("Selected sticker {}", glyph);
        self.current = ToolSlot::Sticker(index);
        Ok(())
    }

    /// Add a custom sticker to the palette and return its index.
    ///
    /// The glyph is trimmed. A glyph already in the palette is not duplicated.
    pub fn add_sticker(&mut self, glyph: &str) -> ToolResult<usize> {
        let glyph = glyph.trim();
        if glyph.is_empty() {
            return Err(ToolError::EmptyGlyph);
        }
        if let Some(index) = self.sticker_index(glyph) {
            return Ok(index);
        }
        self.stickers.push(glyph.to_string());
        log::debug!("Added sticker {} to palette", glyph);
        Ok(self.stickers.len() - 1)
    }

    /// Sticker glyphs in palette order.
    pub fn stickers(&self) -> &[String] {
        &self.stickers
    }

    fn sticker_index(&self, glyph: &str) -> Option<usize> {
        self.stickers.iter().position(|s| s == glyph)
    }
}
