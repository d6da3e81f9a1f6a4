//! Drawing surface trait.

use sprig_core::color::Color8;
use sprig_core::geometry::{Pos, Rect, Size};
use sprig_core::image::Image;

/// The drawing operations widgets use.
///
/// Every operation clips against the canvas bounds. Parts that fall outside
/// are dropped silently; nothing here fails.
pub trait Canvas {
    fn size(&self) -> Size;

    fn filled_rect(&mut self, rect: Rect, color: Color8);

    /// One-pixel outline just inside `rect`.
    fn rect(&mut self, rect: Rect, color: Color8);

    /// Filled rect with an outline.
    fn framed_rect(&mut self, rect: Rect, fill: Color8, edge: Color8) {
        self.filled_rect(rect, fill);
        self.rect(rect, edge);
    }

    /// Line between two points, both endpoints included.
    fn line(&mut self, from: Pos, to: Pos, color: Color8);

    /// Copy RGBA pixels with their top-left corner at `(x, y)`.
    fn copy_image(&mut self, img: &Image<Color8>, x: i32, y: i32);

    /// Blend `color` through a coverage mask with its top-left corner at
    /// `(x, y)`.
    fn blend_mask(&mut self, mask: &Image<u8>, x: i32, y: i32, color: Color8);
}
