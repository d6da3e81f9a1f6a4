//! Cached text bitmaps.

use sprig_core::geometry::{Rect, Size};
use sprig_core::image::{trim_to_content, Image};

/// A coverage bitmap of rendered text plus what is needed to align it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PrerenderedText {
    pub img: Image<u8>,
    /// The box text should be aligned by. Glyphs may ink outside of it.
    pub text_align_box: Rect,
    /// Baseline row, measured from the top of `img`.
    pub baseline: i32,
    /// Distance to the next baseline.
    pub dh: i32,
}

impl PrerenderedText {
    pub fn size(&self) -> Size {
        self.img.size()
    }

    pub fn rect(&self) -> Rect {
        self.img.rect()
    }

    pub fn is_empty(&self) -> bool {
        self.img.is_empty()
    }

    /// Crop the bitmap to its inked pixels.
    ///
    /// `baseline` and `text_align_box` are shifted by exactly the removed
    /// offsets. A blank bitmap is left alone and only widens the align box to
    /// the full bitmap width.
    pub fn reduce_margins(&mut self) {
        match trim_to_content(&self.img) {
            None => self.text_align_box.w = self.img.w(),
            Some(trim) => {
                self.baseline -= trim.y;
                self.text_align_box.x -= trim.x;
                self.text_align_box.y -= trim.y;
                self.img = self.img.crop(trim.rect());
            }
        }
    }
}
