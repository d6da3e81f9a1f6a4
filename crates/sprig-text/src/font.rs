//! Glyph sources: where glyph metrics and coverage bitmaps come from.

use std::fmt;
use std::path::Path;

use fontdue::{Font, FontSettings};
use sprig_core::errors::FontError;
use sprig_core::geometry::Size;
use sprig_core::image::Image;

/// Vertical metrics of a font at one pixel height.
///
/// All values are in pixels and positive. Ascent and descent are the extents
/// actually reached by the font's tallest and deepest glyphs, which may
/// differ from what the font header claims.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LineMetrics {
    pub max_ascent: f32,
    pub max_descent: f32,
    pub line_gap: f32,
}

/// Placement of one glyph relative to its pen position on the baseline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GlyphMetrics {
    /// Horizontal pen advance.
    pub advance: i32,
    pub left_bearing: i32,
    /// Left edge of the bitmap relative to the pen.
    pub x0: i32,
    /// Top edge of the bitmap relative to the baseline (y grows down, so
    /// glyphs above the baseline have a negative `y0`).
    pub y0: i32,
    pub width: i32,
    pub height: i32,
}

impl GlyphMetrics {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// Provider of glyph metrics and coverage bitmaps.
pub trait GlyphSource {
    fn line_metrics(&self, px: f32) -> LineMetrics;

    fn glyph_metrics(&self, ch: char, px: f32) -> GlyphMetrics;

    /// Coverage bitmap of `ch`, sized `metrics.width` by `metrics.height`.
    fn rasterize(&self, ch: char, px: f32) -> (GlyphMetrics, Image<u8>);
}

/// Glyphs probed for the real maximum ascent.
const HIGH_PROBES: &str = "fhkltÁÉÍÓŐÚŰ[{()}]|";
/// Glyphs probed for the real maximum descent.
const LOW_PROBES: &str = "Qfgjpqty[{()}]|";

/// A TrueType/OpenType font rasterized with fontdue.
///
/// Pixel heights passed to the [`GlyphSource`] methods are line heights:
/// the font is scaled so that header ascent minus descent spans `px`.
pub struct MonoFont {
    font: Font,
    units_per_em: f32,
    /// Header ascent in font units.
    ascent: f32,
    /// Header descent in font units, negative below the baseline.
    descent: f32,
    line_gap: f32,
    max_ascent: f32,
    max_descent: f32,
}

impl fmt::Debug for MonoFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MonoFont")
            .field("units_per_em", &self.units_per_em)
            .field("max_ascent", &self.max_ascent)
            .field("max_descent", &self.max_descent)
            .finish_non_exhaustive()
    }
}

impl MonoFont {
    /// Read and parse a font file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, FontError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| {
            tracing::warn!(path = %path.display(), error = %source, "Cannot open font file");
            FontError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;

        let font = Self::from_bytes(&bytes).map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Font rejected");
            e
        })?;
        tracing::info!(
            path = %path.display(),
            max_ascent = font.max_ascent,
            max_descent = font.max_descent,
            "Loaded font"
        );
        Ok(font)
    }

    /// Parse a font from memory.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FontError> {
        let font = Font::from_bytes(bytes, FontSettings::default())
            .map_err(|reason| FontError::Parse { reason: reason.to_string() })?;

        let units_per_em = font.units_per_em();
        let header = font
            .horizontal_line_metrics(units_per_em)
            .ok_or_else(|| FontError::Parse { reason: "missing horizontal line metrics".into() })?;
        if header.ascent - header.descent <= 0.0 {
            return Err(FontError::DegenerateMetrics {
                ascent: header.ascent,
                descent: header.descent,
            });
        }

        // Header metrics are unreliable for some fonts, so measure the glyphs.
        let mut max_ascent = 0.0f32;
        let mut max_descent = 0.0f32;
        for ch in HIGH_PROBES.chars().chain(LOW_PROBES.chars()) {
            let m = font.metrics(ch, units_per_em);
            max_ascent = max_ascent.max((m.ymin + m.height as i32) as f32);
            max_descent = max_descent.max(-m.ymin as f32);
        }
        if max_ascent + max_descent <= 0.0 {
            max_ascent = header.ascent;
            max_descent = -header.descent;
        }

        Ok(Self {
            font,
            units_per_em,
            ascent: header.ascent,
            descent: header.descent,
            line_gap: header.line_gap,
            max_ascent,
            max_descent,
        })
    }

    /// Font units to pixels for line height `px`.
    fn scale(&self, px: f32) -> f32 {
        px / (self.ascent - self.descent)
    }

    /// fontdue sizes fonts by em; convert a line height to an em size.
    fn em_px(&self, px: f32) -> f32 {
        self.scale(px) * self.units_per_em
    }

    fn convert(m: &fontdue::Metrics) -> GlyphMetrics {
        GlyphMetrics {
            advance: m.advance_width as i32,
            left_bearing: m.bounds.xmin.floor() as i32,
            x0: m.xmin,
            y0: -(m.ymin + m.height as i32),
            width: m.width as i32,
            height: m.height as i32,
        }
    }
}

impl GlyphSource for MonoFont {
    fn line_metrics(&self, px: f32) -> LineMetrics {
        let s = self.scale(px);
        LineMetrics {
            max_ascent: self.max_ascent * s,
            max_descent: self.max_descent * s,
            line_gap: self.line_gap * s,
        }
    }

    fn glyph_metrics(&self, ch: char, px: f32) -> GlyphMetrics {
        Self::convert(&self.font.metrics(ch, self.em_px(px)))
    }

    fn rasterize(&self, ch: char, px: f32) -> (GlyphMetrics, Image<u8>) {
        let (m, coverage) = self.font.rasterize(ch, self.em_px(px));
        let metrics = Self::convert(&m);
        let img = Image::from_raw(metrics.size(), coverage).unwrap_or_default();
        (metrics, img)
    }
}

/// A font without a font file: every glyph is a solid block.
///
/// Letters reach the full ascent; `g j p q y` and brackets also reach the
/// full descent; space has no ink. Used for headless rendering and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BlockFont;

impl BlockFont {
    fn descends(ch: char) -> bool {
        matches!(ch, 'g' | 'j' | 'p' | 'q' | 'y' | '(' | ')' | '[' | ']' | '{' | '}' | '|')
    }
}

impl GlyphSource for BlockFont {
    fn line_metrics(&self, px: f32) -> LineMetrics {
        LineMetrics {
            max_ascent: px * 0.75,
            max_descent: px * 0.25,
            line_gap: px * 0.125,
        }
    }

    fn glyph_metrics(&self, ch: char, px: f32) -> GlyphMetrics {
        let advance = (px * 0.5) as i32;
        let lm = self.line_metrics(px);
        let ascent = lm.max_ascent as i32;
        let descent = lm.max_descent as i32;

        if ch.is_whitespace() || advance < 3 {
            return GlyphMetrics { advance, left_bearing: 0, ..Default::default() };
        }
        GlyphMetrics {
            advance,
            left_bearing: 1,
            x0: 1,
            y0: -ascent,
            width: advance - 2,
            height: if Self::descends(ch) { ascent + descent } else { ascent },
        }
    }

    fn rasterize(&self, ch: char, px: f32) -> (GlyphMetrics, Image<u8>) {
        let m = self.glyph_metrics(ch, px);
        (m, Image::filled(m.size(), 255))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_font_metrics() {
        let f = BlockFont;
        let lm = f.line_metrics(16.0);
        assert_eq!((lm.max_ascent, lm.max_descent, lm.line_gap), (12.0, 4.0, 2.0));

        let a = f.glyph_metrics('a', 16.0);
        assert_eq!(a, GlyphMetrics { advance: 8, left_bearing: 1, x0: 1, y0: -12, width: 6, height: 12 });
        assert_eq!(f.glyph_metrics('g', 16.0).height, 16);
        assert_eq!(f.glyph_metrics(' ', 16.0).size(), Size::ZERO);
    }

    #[test]
    fn test_block_font_rasterize_matches_metrics() {
        let (m, img) = BlockFont.rasterize('q', 20.0);
        assert_eq!(img.size(), m.size());
        assert!(img.data().iter().all(|&c| c == 255));
    }

    #[test]
    fn test_garbage_bytes_rejected() {
        let err = MonoFont::from_bytes(b"definitely not a font").unwrap_err();
        assert!(matches!(err, FontError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = MonoFont::load("/nonexistent/sprig/font.ttf").unwrap_err();
        match err {
            FontError::Io { path, .. } => assert!(path.ends_with("font.ttf")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
