//! A dense row-major pixel container.

use crate::geometry::{Rect, Size};

/// A 2D image with pixels of type `C`.
///
/// `Image<u8>` holds coverage masks (glyph bitmaps), `Image<Color8>` holds
/// RGBA pixels.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Image<C> {
    size: Size,
    data: Vec<C>,
}

impl<C: Copy + Default> Image<C> {
    /// Create an image filled with the default pixel value.
    pub fn new(size: Size) -> Self {
        let size = size.clamped();
        Self {
            size,
            data: vec![C::default(); size.area() as usize],
        }
    }

    /// Create an image filled with `value`.
    pub fn filled(size: Size, value: C) -> Self {
        let size = size.clamped();
        Self {
            size,
            data: vec![value; size.area() as usize],
        }
    }

    /// Wrap existing row-major pixel data. `None` if the length does not
    /// match the size.
    pub fn from_raw(size: Size, data: Vec<C>) -> Option<Self> {
        let size = size.clamped();
        if data.len() != size.area() as usize {
            return None;
        }
        Some(Self { size, data })
    }

    pub fn w(&self) -> i32 {
        self.size.w
    }

    pub fn h(&self) -> i32 {
        self.size.h
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// The image bounds at the origin.
    pub fn rect(&self) -> Rect {
        Rect::from_size(self.size)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Resize, discarding the previous contents.
    pub fn resize(&mut self, size: Size) {
        self.resize_with(size, C::default());
    }

    /// Resize and fill every pixel with `value`.
    pub fn resize_with(&mut self, size: Size, value: C) {
        let size = size.clamped();
        self.data.clear();
        self.data.resize(size.area() as usize, value);
        self.size = size;
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.size.w || y >= self.size.h {
            return None;
        }
        Some(y as usize * self.size.w as usize + x as usize)
    }

    /// Pixel at `(x, y)`, `None` outside the image.
    pub fn get(&self, x: i32, y: i32) -> Option<C> {
        self.index(x, y).map(|i| self.data[i])
    }

    /// Write a pixel; out-of-bounds writes are dropped.
    pub fn set(&mut self, x: i32, y: i32, value: C) {
        if let Some(i) = self.index(x, y) {
            self.data[i] = value;
        }
    }

    /// Mutable access to a pixel.
    pub fn get_mut(&mut self, x: i32, y: i32) -> Option<&mut C> {
        self.index(x, y).map(move |i| &mut self.data[i])
    }

    pub fn fill(&mut self, value: C) {
        self.data.fill(value);
    }

    pub fn data(&self) -> &[C] {
        &self.data
    }

    /// One row of pixels.
    pub fn row(&self, y: i32) -> &[C] {
        let w = self.size.w as usize;
        let start = y as usize * w;
        &self.data[start..start + w]
    }

    /// Copy out the part of the image covered by `rect` (clipped to the image).
    pub fn crop(&self, rect: Rect) -> Image<C> {
        let r = rect.intersect(&self.rect()).clamped();
        let mut out = Image::new(r.size());
        for y in 0..r.h {
            for x in 0..r.w {
                if let Some(v) = self.get(r.x + x, r.y + y) {
                    out.set(x, y, v);
                }
            }
        }
        out
    }
}

/// Offsets and size of the inked part of a coverage mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trim {
    /// Columns removed from the left.
    pub x: i32,
    /// Rows removed from the top.
    pub y: i32,
    /// Size of the retained area.
    pub size: Size,
}

impl Trim {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.size.w, self.size.h)
    }
}

/// Tight bounding box of the non-zero pixels of a coverage mask.
///
/// Returns `None` when the mask is blank or zero-sized.
pub fn trim_to_content(img: &Image<u8>) -> Option<Trim> {
    let mut x0 = i32::MAX;
    let mut y0 = i32::MAX;
    let mut x1 = -1;
    let mut y1 = -1;

    for y in 0..img.h() {
        let row = img.row(y);
        let Some(first) = row.iter().position(|&c| c != 0) else {
            continue;
        };
        // `first` exists, so `rposition` does too.
        let last = row.iter().rposition(|&c| c != 0).unwrap_or(first);
        x0 = x0.min(first as i32);
        x1 = x1.max(last as i32);
        y0 = y0.min(y);
        y1 = y1.max(y);
    }

    if x1 < 0 {
        return None;
    }
    Some(Trim {
        x: x0,
        y: y0,
        size: Size::new(x1 - x0 + 1, y1 - y0 + 1),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_sized_image() {
        let img: Image<u8> = Image::new(Size::new(-3, 4));
        assert_eq!(img.size(), Size::new(0, 4));
        assert!(img.is_empty());
        assert_eq!(img.get(0, 0), None);
    }

    #[test]
    fn test_set_out_of_bounds_is_dropped() {
        let mut img: Image<u8> = Image::new(Size::new(2, 2));
        img.set(5, 5, 9);
        img.set(1, 1, 7);
        assert_eq!(img.data(), &[0, 0, 0, 7]);
    }

    #[test]
    fn test_trim_to_content() {
        let mut img: Image<u8> = Image::new(Size::new(8, 6));
        img.set(2, 1, 10);
        img.set(5, 4, 200);
        let trim = trim_to_content(&img).unwrap();
        assert_eq!(trim, Trim { x: 2, y: 1, size: Size::new(4, 4) });

        let cropped = img.crop(trim.rect());
        assert_eq!(cropped.get(0, 0), Some(10));
        assert_eq!(cropped.get(3, 3), Some(200));
    }

    #[test]
    fn test_trim_blank() {
        let img: Image<u8> = Image::new(Size::new(4, 4));
        assert_eq!(trim_to_content(&img), None);
    }
}
