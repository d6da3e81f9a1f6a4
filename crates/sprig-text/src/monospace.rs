//! Single-line monospace text rendering.
//!
//! Both functions assume a monospace font and a string without newlines.
//! The advance of the first character is used as the cell width for every
//! character.

use sprig_core::geometry::{Rect, Size};
use sprig_core::image::Image;

use crate::font::GlyphSource;
use crate::prerendered::PrerenderedText;

/// Smallest pixel height that is rendered at all.
const MIN_PX: f32 = 3.0;

/// Size of the text box `text` would occupy, without padding.
pub fn measure_small_string_monospace(text: &str, font: &dyn GlyphSource, px: f32) -> Size {
    if px < MIN_PX {
        return Size::ZERO;
    }
    let lm = font.line_metrics(px);
    let dw = font.glyph_metrics('A', px).advance;
    let n = text.chars().count() as i32;
    Size::new(dw * n, (lm.max_ascent + lm.max_descent) as i32)
}

/// Render `text` into a coverage bitmap.
///
/// The bitmap has one cell of padding on both sides and one pixel above and
/// below, so `text_align_box` never touches the bitmap border. Heights below
/// three pixels produce an empty result.
pub fn render_small_string_monospace(text: &str, font: &dyn GlyphSource, px: f32) -> PrerenderedText {
    if px < MIN_PX {
        return PrerenderedText::default();
    }

    let chars: Vec<char> = text.chars().collect();
    let n = chars.len() as i32;
    let lm = font.line_metrics(px);
    let first = font.glyph_metrics(chars.first().copied().unwrap_or('A'), px);

    let dw = first.advance;
    let x00 = first.left_bearing + dw;
    let w = x00 + n * dw + dw;
    let h = (lm.max_ascent + lm.max_descent + 2.0) as i32;
    let baseline = (lm.max_ascent + 1.0) as i32;

    let mut img: Image<u8> = Image::new(Size::new(w, h));
    let mut last_x = x00;
    for (i, &ch) in chars.iter().enumerate() {
        let xpos = x00 + dw * i as i32;
        let (m, glyph) = font.rasterize(ch, px);
        let (ox, oy) = (xpos + m.x0, baseline + m.y0);
        for gy in 0..glyph.h() {
            for (gx, &c) in glyph.row(gy).iter().enumerate() {
                if let Some(dst) = img.get_mut(ox + gx as i32, oy + gy) {
                    *dst = (*dst).max(c);
                }
            }
        }
        last_x = if ch == ' ' { xpos + dw } else { xpos + m.x0 + m.width };
    }

    let ascent = lm.max_ascent as i32;
    let text_align_box = Rect::new(
        x00,
        baseline - ascent,
        if chars.is_empty() { dw } else { last_x - x00 },
        (lm.max_ascent + lm.max_descent) as i32,
    );

    PrerenderedText {
        img,
        text_align_box,
        baseline,
        dh: (lm.max_ascent + lm.max_descent + lm.line_gap) as i32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::BlockFont;
    use proptest::prelude::*;
    use sprig_core::image::trim_to_content;

    #[test]
    fn test_render_layout_of_two_chars() {
        let t = render_small_string_monospace("ab", &BlockFont, 16.0);
        assert_eq!(t.size(), Size::new(33, 18));
        assert_eq!(t.baseline, 13);
        assert_eq!(t.dh, 18);
        assert_eq!(t.text_align_box, Rect::new(9, 1, 15, 16));

        // 'a' inks columns 10..16 from row 1 down to the baseline.
        assert_eq!(t.img.get(10, 1), Some(255));
        assert_eq!(t.img.get(9, 1), Some(0));
        assert_eq!(t.img.get(10, 13), Some(0));
    }

    #[test]
    fn test_trailing_space_counts_full_advance() {
        let t = render_small_string_monospace("a ", &BlockFont, 16.0);
        assert_eq!(t.text_align_box.w, 16);
    }

    #[test]
    fn test_empty_text() {
        let t = render_small_string_monospace("", &BlockFont, 16.0);
        assert_eq!(t.size(), Size::new(17, 18));
        assert_eq!(t.text_align_box.w, 8);
        assert!(trim_to_content(&t.img).is_none());
    }

    #[test]
    fn test_tiny_height_renders_nothing() {
        let t = render_small_string_monospace("abc", &BlockFont, 2.5);
        assert!(t.is_empty());
        assert_eq!(measure_small_string_monospace("abc", &BlockFont, 2.0), Size::ZERO);
    }

    #[test]
    fn test_measure() {
        assert_eq!(measure_small_string_monospace("hello", &BlockFont, 16.0), Size::new(40, 16));
    }

    #[test]
    fn test_trim_keeps_baseline_consistent() {
        let mut t = render_small_string_monospace("gap", &BlockFont, 16.0);
        let trim = trim_to_content(&t.img).unwrap();
        let old_baseline = t.baseline;
        let old_box = t.text_align_box;

        t.reduce_margins();
        assert_eq!(t.baseline, old_baseline - trim.y);
        assert_eq!(t.text_align_box.x, old_box.x - trim.x);
        assert_eq!(t.text_align_box.y, old_box.y - trim.y);
        assert_eq!(t.size(), trim.size);
    }

    proptest! {
        #[test]
        fn prop_align_box_strictly_inside(text in "[a-z ]{1,24}", px in 6.0f32..64.0) {
            let t = render_small_string_monospace(&text, &BlockFont, px);
            let b = t.text_align_box;
            prop_assert!(b.x > 0);
            prop_assert!(b.y > 0);
            prop_assert!(b.right() < t.img.w() - 1);
            prop_assert!(b.bottom() < t.img.h());
        }

        #[test]
        fn prop_trim_baseline(text in "[a-z]{1,12}", px in 6.0f32..48.0) {
            let mut t = render_small_string_monospace(&text, &BlockFont, px);
            let trim = trim_to_content(&t.img).unwrap();
            let before = t.baseline;
            t.reduce_margins();
            prop_assert_eq!(t.baseline, before - trim.y);
        }
    }
}
