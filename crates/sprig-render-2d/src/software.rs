//! In-memory RGBA rasterizer.

use glam::{DVec2, IVec2};
use sprig_core::color::{blend8, Color8};
use sprig_core::geometry::{Pos, Rect, Size};
use sprig_core::image::Image;

use crate::canvas::Canvas;

/// Software rasterizer over an RGBA pixel buffer.
#[derive(Debug, Clone)]
pub struct SoftwareRenderer {
    target: Image<Color8>,
}

impl SoftwareRenderer {
    /// Create a renderer with a white, opaque buffer.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            target: Image::filled(Size::new(width, height), Color8::WHITE),
        }
    }

    /// Resize the buffer; contents are cleared to white.
    pub fn resize(&mut self, size: Size) {
        self.target.resize_with(size, Color8::WHITE);
    }

    /// Clear the buffer to a solid color.
    pub fn clear(&mut self, color: Color8) {
        self.target.fill(color);
    }

    pub fn width(&self) -> i32 {
        self.target.w()
    }

    pub fn height(&self) -> i32 {
        self.target.h()
    }

    pub fn pixel(&self, x: i32, y: i32) -> Option<Color8> {
        self.target.get(x, y)
    }

    pub fn buffer(&self) -> &Image<Color8> {
        &self.target
    }

    /// Raw RGBA bytes, row-major.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.target.data().iter().flat_map(|c| c.to_array()).collect()
    }

    fn clip(&self, rect: Rect) -> Rect {
        rect.intersect(&self.target.rect()).clamped()
    }

    fn hline(&mut self, x0: i32, x1: i32, y: i32, color: Color8) {
        for x in x0..x1 {
            self.target.set(x, y, color);
        }
    }
}

impl Canvas for SoftwareRenderer {
    fn size(&self) -> Size {
        self.target.size()
    }

    fn filled_rect(&mut self, rect: Rect, color: Color8) {
        let r = self.clip(rect);
        for y in r.top()..r.bottom() {
            self.hline(r.left(), r.right(), y, color);
        }
    }

    fn rect(&mut self, rect: Rect, color: Color8) {
        let span = self.clip(rect);
        if rect.is_empty() || span.is_empty() {
            return;
        }
        let (x0, y0) = (rect.left(), rect.top());
        let (x1, y1) = (rect.right() - 1, rect.bottom() - 1);
        self.hline(span.left(), span.right(), y0, color);
        self.hline(span.left(), span.right(), y1, color);
        for y in span.top()..span.bottom() {
            self.target.set(x0, y, color);
            self.target.set(x1, y, color);
        }
    }

    fn line(&mut self, from: Pos, to: Pos, color: Color8) {
        let Some((mut p, end)) = clip_segment(from, to, self.target.rect()) else {
            return;
        };
        let d = (end - p).abs();
        let step = (end - p).signum();
        let mut err = d.x - d.y;

        loop {
            self.target.set(p.x, p.y, color);
            if p == end {
                break;
            }
            let e2 = 2 * err;
            if e2 > -d.y {
                err -= d.y;
                p.x += step.x;
            }
            if e2 < d.x {
                err += d.x;
                p.y += step.y;
            }
        }
    }

    fn copy_image(&mut self, img: &Image<Color8>, x: i32, y: i32) {
        let dst = self.clip(Rect::new(x, y, img.w(), img.h()));
        for py in dst.top()..dst.bottom() {
            for px in dst.left()..dst.right() {
                if let Some(c) = img.get(px - x, py - y) {
                    self.target.set(px, py, c);
                }
            }
        }
    }

    fn blend_mask(&mut self, mask: &Image<u8>, x: i32, y: i32, color: Color8) {
        let dst = self.clip(Rect::new(x, y, mask.w(), mask.h()));
        for py in dst.top()..dst.bottom() {
            for px in dst.left()..dst.right() {
                let coverage = mask.get(px - x, py - y).unwrap_or(0);
                if coverage == 0 {
                    continue;
                }
                let alpha = (coverage as u16 * color.a as u16 / 255) as u8;
                if let Some(d) = self.target.get_mut(px, py) {
                    *d = blend8(*d, alpha, Color8 { a: 255, ..color });
                }
            }
        }
    }
}

/// Liang-Barsky clip of the segment `from..=to` against the pixels of
/// `bounds`. Endpoints already inside are returned unchanged.
fn clip_segment(from: Pos, to: Pos, bounds: Rect) -> Option<(IVec2, IVec2)> {
    if bounds.is_empty() {
        return None;
    }
    let p = IVec2::from(from).as_dvec2();
    let d = IVec2::from(to).as_dvec2() - p;
    let (lo, hi) = (
        DVec2::new(bounds.left() as f64, bounds.top() as f64),
        DVec2::new((bounds.right() - 1) as f64, (bounds.bottom() - 1) as f64),
    );

    let (mut t0, mut t1) = (0.0f64, 1.0f64);
    for (pk, qk) in [(-d.x, p.x - lo.x), (d.x, hi.x - p.x), (-d.y, p.y - lo.y), (d.y, hi.y - p.y)] {
        if pk == 0.0 {
            if qk < 0.0 {
                return None;
            }
        } else {
            let r = qk / pk;
            if pk < 0.0 {
                t0 = t0.max(r);
            } else {
                t1 = t1.min(r);
            }
        }
    }
    if t0 > t1 {
        return None;
    }
    let a = (p + d * t0).round().as_ivec2();
    let b = (p + d * t1).round().as_ivec2();
    Some((a, b))
}
