//! Sequential list layout along one axis.

use sprig_core::geometry::{Pos, Size, Sizing};

use crate::layout::Layout;
use crate::provider::{ChildProvider, LayoutStrategy};

/// Aggregated child extents: sums and maxima on both axes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListBounds {
    pub w: i32,
    pub h: i32,
    pub max_w: i32,
    pub max_h: i32,
}

/// Sum and maximum of `n` sizes produced by `f`.
pub fn compute_bounds_of(n: usize, mut f: impl FnMut(usize) -> Size) -> ListBounds {
    let mut b = ListBounds::default();
    for i in 0..n {
        let s = f(i);
        b.w += s.w;
        b.h += s.h;
        b.max_w = b.max_w.max(s.w);
        b.max_h = b.max_h.max(s.h);
    }
    b
}

/// Children placed one after another along the primary axis, separated by
/// `elem_gap`. The cross axis is shared and spans the whole content box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListLayout {
    layout: Layout,
    pub elem_gap: i32,
    pub is_horizontal: bool,
}

impl Default for ListLayout {
    fn default() -> Self {
        Self {
            layout: Layout::default(),
            elem_gap: 0,
            is_horizontal: true,
        }
    }
}

impl ListLayout {
    pub fn new(layout: Layout) -> Self {
        Self { layout, ..Default::default() }
    }

    pub fn with_elem_gap(mut self, elem_gap: i32) -> Self {
        self.elem_gap = elem_gap;
        self
    }

    /// Stack children top to bottom.
    pub fn vertical(mut self) -> Self {
        self.is_horizontal = false;
        self
    }

    /// Place children left to right.
    pub fn horizontal(mut self) -> Self {
        self.is_horizontal = true;
        self
    }

    fn total_gap(&self, n: usize) -> i32 {
        (n as i32 - 1).max(0) * self.elem_gap
    }

    /// Equal share of the content box for each of `n` children.
    ///
    /// The primary extent is `floor((E - (n-1)*elem_gap) / n)`, never below
    /// zero. The cross extent is the full content extent. `n == 0` yields
    /// `{0, 0}`.
    pub fn eq_div_size(&self, n: usize) -> Size {
        if n == 0 {
            return Size::ZERO;
        }
        let content = self.layout.content.size();
        let share = |extent: i32| (extent - self.total_gap(n)).div_euclid(n as i32).max(0);
        if self.is_horizontal {
            Size::new(share(content.w), content.h)
        } else {
            Size::new(content.w, share(content.h))
        }
    }

    /// Content size needed to stack `sizes`.
    pub fn content_size_of(&self, sizes: &[Size]) -> Size {
        self.stacked(sizes.len(), |i| sizes[i])
    }

    fn stacked(&self, n: usize, f: impl FnMut(usize) -> Size) -> Size {
        if n == 0 {
            return Size::ZERO;
        }
        let b = compute_bounds_of(n, f);
        let g = self.total_gap(n);
        if self.is_horizontal {
            Size::new(b.w + g, b.max_h)
        } else {
            Size::new(b.max_w, b.h + g)
        }
    }

    fn primary(&self, s: Size) -> i32 {
        if self.is_horizontal {
            s.w
        } else {
            s.h
        }
    }
}

impl LayoutStrategy for ListLayout {
    fn layout(&self) -> &Layout {
        &self.layout
    }

    fn layout_mut(&mut self) -> &mut Layout {
        &mut self.layout
    }

    fn content_size(&self, children: &dyn ChildProvider) -> Size {
        self.stacked(children.count(), |i| children.child_size(i))
    }

    fn update(&mut self, children: &mut dyn ChildProvider) {
        let n = children.count();
        for i in 0..n {
            children.update_child(i);
        }

        match self.layout.sz {
            Sizing::BottomUp => {
                let measured = self.content_size(&*children);
                self.layout.commit_bottom_up(measured);
            }
            Sizing::TopDown => {
                self.layout.commit_top_down();
                let slot = self.eq_div_size(n);
                for i in 0..n {
                    // Preferred size caps the slot; no redistribution to neighbors.
                    let capped = children.child_size(i).min(slot);
                    if let Some(child) = children.child_layout_mut(i) {
                        child.rect.set_size(capped);
                    }
                    children.update_child(i);
                }
            }
        }
    }

    fn realign(&mut self, pos: Pos, outer: Size, children: &mut dyn ChildProvider) {
        self.layout.align_content_and_rect(pos, outer);

        let n = children.count();
        let content = self.layout.content;
        let slot = self.eq_div_size(n);
        let mut cursor = content.pos();

        for i in 0..n {
            let d = match self.layout.sz {
                Sizing::TopDown => self.primary(slot),
                Sizing::BottomUp => match children.child_layout(i) {
                    Some(child) => self.primary(child.rect.size()),
                    None => self.primary(children.child_size(i)),
                },
            };

            if self.is_horizontal {
                children.realign_child(i, cursor, Size::new(d, content.h));
                cursor.x += d + self.elem_gap;
            } else {
                children.realign_child(i, cursor, Size::new(content.w, d));
                cursor.y += d + self.elem_gap;
            }
        }
    }
}
