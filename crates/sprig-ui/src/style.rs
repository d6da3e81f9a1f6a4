//! Text styles and widget frame colors.

use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use sprig_core::color::Color8;
use sprig_text::{GlyphSource, MonoFont};
use thiserror::Error;

/// Errors while turning configuration into live objects.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid style configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Font(#[from] sprig_core::errors::FontError),
}

/// How values are turned into pixels: glyphs, pixel height and colors.
///
/// Shared between proxies with `Rc`; a proxy never owns its style.
#[derive(Clone)]
pub struct Style {
    pub font: Rc<dyn GlyphSource>,
    /// Fill behind rendered values. `None` leaves the background untouched.
    pub background: Option<Color8>,
    pub foreground: Color8,
    /// Line height in pixels.
    pub height: f32,
}

impl fmt::Debug for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Style")
            .field("background", &self.background)
            .field("foreground", &self.foreground)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl Style {
    pub fn new(font: Rc<dyn GlyphSource>, height: f32) -> Self {
        let defaults = StyleConfig::default();
        Self {
            font,
            background: defaults.background.map(Color8::from_array),
            foreground: Color8::from_array(defaults.foreground),
            height,
        }
    }

    pub fn with_colors(mut self, background: Option<Color8>, foreground: Color8) -> Self {
        self.background = background;
        self.foreground = foreground;
        self
    }

    /// Build a style from configuration, loading the font file it names.
    pub fn from_config(config: &StyleConfig) -> Result<Self, ConfigError> {
        let font = MonoFont::load(&config.font_path)?;
        Ok(Self {
            font: Rc::new(font),
            background: config.background.map(Color8::from_array),
            foreground: Color8::from_array(config.foreground),
            height: config.height,
        })
    }
}

/// Serializable description of a [`Style`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub font_path: PathBuf,
    pub height: f32,
    /// RGBA.
    pub foreground: [u8; 4],
    /// RGBA, or `null` for no background fill.
    pub background: Option<[u8; 4]>,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_path: PathBuf::from("DejaVuSansMono.ttf"),
            height: 20.0,
            foreground: [0, 192, 255, 255],
            background: Some([0, 0, 64, 255]),
        }
    }
}

impl StyleConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Colors of the debug frame drawn around widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameColors {
    pub fill: Color8,
    pub edge: Color8,
    /// Outline of the content box, if any.
    pub content: Option<Color8>,
}

impl FrameColors {
    pub const LEAF: Self = Self {
        fill: Color8::rgb(192, 192, 192),
        edge: Color8::rgb(128, 128, 128),
        content: Some(Color8::rgb(255, 0, 0)),
    };

    pub const CONTAINER: Self = Self {
        fill: Color8::rgb(192, 192, 192),
        edge: Color8::rgb(64, 64, 64),
        content: None,
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprig_text::BlockFont;

    #[test]
    fn test_config_partial_json_uses_defaults() {
        let c = StyleConfig::from_json(r#"{ "height": 26.0, "background": null }"#).unwrap();
        assert_eq!(c.height, 26.0);
        assert_eq!(c.background, None);
        assert_eq!(c.foreground, [0, 192, 255, 255]);
    }

    #[test]
    fn test_config_rejects_bad_json() {
        let err = StyleConfig::from_json("{ height: ").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_from_config_missing_font() {
        let c = StyleConfig {
            font_path: PathBuf::from("/nonexistent/sprig.ttf"),
            ..Default::default()
        };
        assert!(matches!(Style::from_config(&c), Err(ConfigError::Font(_))));
    }

    #[test]
    fn test_new_uses_default_colors() {
        let s = Style::new(Rc::new(BlockFont), 16.0);
        assert_eq!(s.background, Some(Color8::rgb(0, 0, 64)));
        assert_eq!(s.foreground, Color8::rgb(0, 192, 255));
    }
}
