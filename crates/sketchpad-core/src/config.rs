//! Sketchpad configuration.

use peniko::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stickers offered before the user adds any of their own.
pub const DEFAULT_STICKERS: [&str; 3] = ["⭐", "🎨", "🐸"];

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }

    /// CSS `rgba()` notation, as 2D canvas contexts expect.
    pub fn to_css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            f64::from(self.a) / 255.0
        )
    }
}

impl From<Color> for SerializableColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Tunables for the drawing surface, tools and styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchpadConfig {
    /// Surface width in logical units.
    pub canvas_width: u32,
    /// Surface height in logical units.
    pub canvas_height: u32,
    /// Line width of the thin marker.
    pub thin_thickness: f64,
    /// Line width of the thick marker.
    pub thick_thickness: f64,
    /// Initial sticker palette.
    pub stickers: Vec<String>,
    /// Marker ink color.
    pub stroke_color: SerializableColor,
    /// Outline color of the cursor preview.
    pub preview_color: SerializableColor,
    /// CSS font used for stickers.
    pub sticker_font: String,
    /// Preview outline radius while a sticker is selected.
    pub sticker_preview_radius: f64,
}

impl Default for SketchpadConfig {
    fn default() -> Self {
        Self {
            canvas_width: 256,
            canvas_height: 256,
            thin_thickness: 2.0,
            thick_thickness: 7.0,
            stickers: DEFAULT_STICKERS.iter().map(|s| s.to_string()).collect(),
            stroke_color: SerializableColor::black(),
            preview_color: SerializableColor::new(0, 0, 0, 77),
            sticker_font: "32px sans-serif".to_string(),
            sticker_preview_radius: 4.0,
        }
    }
}

impl SketchpadConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the values make a usable sketchpad.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(ConfigError::Invalid(format!(
                "canvas size {}x{} must be non-zero",
                self.canvas_width, self.canvas_height
            )));
        }
        if !(self.thin_thickness > 0.0) || !(self.thick_thickness > 0.0) {
            return Err(ConfigError::Invalid(
                "marker thickness must be positive".to_string(),
            ));
        }
        if self.thin_thickness >= self.thick_thickness {
            return Err(ConfigError::Invalid(format!(
                "thin marker ({}) must be thinner than thick marker ({})",
                self.thin_thickness, self.thick_thickness
            )));
        }
        if !(self.sticker_preview_radius >= 0.0) {
            return Err(ConfigError::Invalid(
                "sticker preview radius must not be negative".to_string(),
            ));
        }
        if self.stickers.is_empty() {
            return Err(ConfigError::Invalid("sticker palette must not be empty".to_string()));
        }
        if self.stickers.iter().any(|glyph| glyph.trim().is_empty()) {
            return Err(ConfigError::Invalid("sticker glyphs must not be empty".to_string()));
        }
        Ok(())
    }

    /// Surface size as a kurbo size.
    pub fn canvas_size(&self) -> kurbo::Size {
        kurbo::Size::new(f64::from(self.canvas_width), f64::from(self.canvas_height))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SketchpadConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.canvas_size(), kurbo::Size::new(256.0, 256.0));
        assert_eq!(config.thin_thickness, 2.0);
        assert_eq!(config.thick_thickness, 7.0);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SketchpadConfig::from_json(r#"{ "thick_thickness": 10.0 }"#).unwrap();
        assert_eq!(config.thick_thickness, 10.0);
        assert_eq!(config.thin_thickness, 2.0);
        assert_eq!(config.stickers.len(), DEFAULT_STICKERS.len());
    }

    #[test]
    fn test_rejects_inverted_markers() {
        let result = SketchpadConfig::from_json(r#"{ "thin_thickness": 8.0 }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_empty_glyph() {
        let result = SketchpadConfig::from_json(r#"{ "stickers": ["⭐", "  "] }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_empty_palette() {
        let result = SketchpadConfig::from_json(r#"{ "stickers": [] }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_nan_preview_radius() {
        let config = SketchpadConfig {
            sticker_preview_radius: f64::NAN,
            ..SketchpadConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_bad_json() {
        let result = SketchpadConfig::from_json("{ not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_color_conversion() {
        let color = SerializableColor::new(10, 20, 30, 255);
        let peniko_color: Color = color.into();
        assert_eq!(SerializableColor::from(peniko_color), color);
        assert_eq!(color.to_css(), "rgba(10, 20, 30, 1)");
    }
}
