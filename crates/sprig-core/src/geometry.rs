//! Integer 2D geometry and alignment primitives.
//!
//! Widths and heights may go negative while a computation is in flight
//! (e.g. intersecting disjoint rects). Anything that iterates or allocates
//! must go through [`Rect::clamped`] or [`Size::clamped`] first.

use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use glam::IVec2;

/// A position in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Pos {
    type Output = Pos;

    fn add(self, rhs: Pos) -> Pos {
        Pos::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Pos {
    type Output = Pos;

    fn sub(self, rhs: Pos) -> Pos {
        Pos::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Add<Size> for Pos {
    type Output = Pos;

    fn add(self, rhs: Size) -> Pos {
        Pos::new(self.x + rhs.w, self.y + rhs.h)
    }
}

impl AddAssign for Pos {
    fn add_assign(&mut self, rhs: Pos) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl SubAssign for Pos {
    fn sub_assign(&mut self, rhs: Pos) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl From<IVec2> for Pos {
    fn from(v: IVec2) -> Self {
        Pos::new(v.x, v.y)
    }
}

impl From<Pos> for IVec2 {
    fn from(p: Pos) -> Self {
        IVec2::new(p.x, p.y)
    }
}

/// A width/height pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub w: i32,
    pub h: i32,
}

impl Size {
    pub const ZERO: Self = Self { w: 0, h: 0 };

    pub const fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }

    /// Uniform extent on both axes.
    pub const fn splat(v: i32) -> Self {
        Self { w: v, h: v }
    }

    pub fn area(&self) -> i32 {
        self.w * self.h
    }

    /// Negative extents replaced by zero.
    pub fn clamped(self) -> Size {
        Size::new(self.w.max(0), self.h.max(0))
    }

    /// Per-axis minimum.
    pub fn min(self, other: Size) -> Size {
        Size::new(self.w.min(other.w), self.h.min(other.h))
    }

    /// Per-axis maximum.
    pub fn max(self, other: Size) -> Size {
        Size::new(self.w.max(other.w), self.h.max(other.h))
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }
}

impl Add for Size {
    type Output = Size;

    fn add(self, rhs: Size) -> Size {
        Size::new(self.w + rhs.w, self.h + rhs.h)
    }
}

impl Sub for Size {
    type Output = Size;

    fn sub(self, rhs: Size) -> Size {
        Size::new(self.w - rhs.w, self.h - rhs.h)
    }
}

impl Mul<i32> for Size {
    type Output = Size;

    fn mul(self, rhs: i32) -> Size {
        Size::new(self.w * rhs, self.h * rhs)
    }
}

impl From<IVec2> for Size {
    fn from(v: IVec2) -> Self {
        Size::new(v.x, v.y)
    }
}

impl From<Size> for IVec2 {
    fn from(s: Size) -> Self {
        IVec2::new(s.w, s.h)
    }
}

/// An axis-aligned integer rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Rect from a position and a size.
    pub const fn from_pos_size(pos: Pos, size: Size) -> Self {
        Self { x: pos.x, y: pos.y, w: size.w, h: size.h }
    }

    /// Rect of the given size at the origin.
    pub const fn from_size(size: Size) -> Self {
        Self { x: 0, y: 0, w: size.w, h: size.h }
    }

    pub fn pos(&self) -> Pos {
        Pos::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.w, self.h)
    }

    /// Move without resizing.
    pub fn set_pos(&mut self, pos: Pos) {
        self.x = pos.x;
        self.y = pos.y;
    }

    /// Resize without moving.
    pub fn set_size(&mut self, size: Size) {
        self.w = size.w;
        self.h = size.h;
    }

    pub fn shift_by(&mut self, d: Pos) {
        self.x += d.x;
        self.y += d.y;
    }

    pub fn area(&self) -> i32 {
        self.w * self.h
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.w)
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.h)
    }

    pub fn hcenter(&self) -> i32 {
        self.x.saturating_add(self.w / 2)
    }

    pub fn vcenter(&self) -> i32 {
        self.y.saturating_add(self.h / 2)
    }

    pub fn center(&self) -> Pos {
        Pos::new(self.hcenter(), self.vcenter())
    }

    /// Inclusive point test (edges count as inside).
    pub fn contains(&self, p: Pos) -> bool {
        self.x <= p.x && p.x <= self.right() && self.y <= p.y && p.y <= self.bottom()
    }

    /// Overlap of two rects. Disjoint inputs yield a negative extent;
    /// call [`Rect::clamped`] before iterating over the result.
    pub fn intersect(&self, other: &Rect) -> Rect {
        let x0 = self.left().max(other.left());
        let y0 = self.top().max(other.top());
        let x1 = self.right().min(other.right());
        let y1 = self.bottom().min(other.bottom());
        Rect::new(x0, y0, x1.saturating_sub(x0), y1.saturating_sub(y0))
    }

    /// Same position, negative extents replaced by zero.
    pub fn clamped(self) -> Rect {
        Rect::new(self.x, self.y, self.w.max(0), self.h.max(0))
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }
}

/// Horizontal placement of a content rect inside an outer rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HAlign {
    Left,
    #[default]
    Center,
    Right,
    /// Span the outer width minus the gap on both sides.
    Fill,
}

/// Vertical placement of a content rect inside an outer rect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VAlign {
    Top,
    #[default]
    Center,
    Bottom,
    /// Span the outer height minus the gap on both sides.
    Fill,
}

/// Which way size information flows for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sizing {
    /// The parent assigns the rect; content is the rect shrunk by the gap.
    TopDown,
    /// The intrinsic size decides the rect; the parent has to honor it.
    #[default]
    BottomUp,
}

/// Position (and for `Fill`, resize) `content` inside `outer`.
///
/// Non-`Fill` alignments keep the content's size on that axis. `Fill`
/// overwrites both position and extent and never reads the previous values.
/// When `outer` is narrower than twice the gap, the filled extent is
/// clamped to zero.
pub fn align_content_to_outer(content: &mut Rect, outer: Rect, gap: Size, h: HAlign, v: VAlign) {
    match h {
        HAlign::Left => content.x = outer.left() + gap.w,
        HAlign::Center => content.x = outer.hcenter() - content.w / 2,
        HAlign::Right => content.x = outer.right() - gap.w - content.w,
        HAlign::Fill => {
            content.x = outer.left() + gap.w;
            content.w = (outer.w - 2 * gap.w).max(0);
        }
    }

    match v {
        VAlign::Top => content.y = outer.top() + gap.h,
        VAlign::Center => content.y = outer.vcenter() - content.h / 2,
        VAlign::Bottom => content.y = outer.bottom() - gap.h - content.h,
        VAlign::Fill => {
            content.y = outer.top() + gap.h;
            content.h = (outer.h - 2 * gap.h).max(0);
        }
    }
}

fn center_shrink_axis(x: &mut i32, w: &mut i32, gap: i32) {
    let c = *x + *w / 2;
    *w -= 2 * gap;
    if *w < 0 {
        *w = gap.abs();
    }
    *x = c - *w / 2;
}

/// Shrink `rect` symmetrically around its own center.
///
/// A negative gap grows the rect. An extent that would become negative is
/// replaced by the gap magnitude.
pub fn center_shrink(rect: Rect, gap_x: i32, gap_y: i32) -> Rect {
    let mut r = rect;
    center_shrink_axis(&mut r.x, &mut r.w, gap_x);
    center_shrink_axis(&mut r.y, &mut r.h, gap_y);
    r
}

/// Split `src` into an `nx` by `ny` grid of equal cells separated by gaps.
///
/// Returns an empty vector for a zero cell count.
pub fn subdivide(src: Rect, nx: i32, ny: i32, gap_x: i32, gap_y: i32) -> Vec<Rect> {
    if nx <= 0 || ny <= 0 {
        return Vec::new();
    }
    let w = ((src.w - gap_x * (nx - 1)) / nx).max(0);
    let h = ((src.h - gap_y * (ny - 1)) / ny).max(0);

    let mut cells = Vec::with_capacity((nx * ny) as usize);
    let mut y = src.y;
    for _ in 0..ny {
        let mut x = src.x;
        for _ in 0..nx {
            cells.push(Rect::new(x, y, w, h));
            x += w + gap_x;
        }
        y += h + gap_y;
    }
    cells
}
