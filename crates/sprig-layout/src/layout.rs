//! The per-node geometry record.

use sprig_core::geometry::{align_content_to_outer, center_shrink, HAlign, Pos, Rect, Size, Sizing, VAlign};

/// Geometry state owned by exactly one widget node.
///
/// `rect` is the outer box in screen space, `content` the inner box after
/// the symmetric `gap`. `cha`/`cva` describe how this node sits inside the
/// rect handed down by its parent; `icha`/`icva` are what a container pushes
/// onto its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub rect: Rect,
    pub content: Rect,
    pub gap: Size,
    pub cha: HAlign,
    pub cva: VAlign,
    pub icha: HAlign,
    pub icva: VAlign,
    pub sz: Sizing,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            rect: Rect::default(),
            content: Rect::default(),
            gap: Size::splat(1),
            cha: HAlign::Center,
            cva: VAlign::Center,
            icha: HAlign::Center,
            icva: VAlign::Center,
            sz: Sizing::BottomUp,
        }
    }
}

impl Layout {
    /// Set the gap.
    pub fn with_gap(mut self, gap: Size) -> Self {
        self.gap = gap;
        self
    }

    /// Set the sizing mode.
    pub fn with_sizing(mut self, sz: Sizing) -> Self {
        self.sz = sz;
        self
    }

    /// Set how this node aligns inside its parent slot.
    pub fn with_align(mut self, cha: HAlign, cva: VAlign) -> Self {
        self.cha = cha;
        self.cva = cva;
        self
    }

    /// Set the alignment pushed onto children.
    pub fn with_inner_align(mut self, icha: HAlign, icva: VAlign) -> Self {
        self.icha = icha;
        self.icva = icva;
        self
    }

    /// Outer size needed to hold `content`.
    pub fn preferred_size_for(&self, content: Size) -> Size {
        content + self.gap * 2
    }

    /// Adopt the child alignment and sizing mode a container dictates.
    pub fn inherit_from(&mut self, parent: &Layout) {
        self.cha = parent.icha;
        self.cva = parent.icva;
        self.sz = parent.sz;
    }

    /// `BottomUp` commit: content takes the measured size and the rect grows
    /// around it by the gap.
    pub fn commit_bottom_up(&mut self, content: Size) {
        self.content.set_size(content);
        self.rect = center_shrink(self.content, -self.gap.w, -self.gap.h);
    }

    /// `TopDown` commit: content is the assigned rect minus the gap.
    pub fn commit_top_down(&mut self) {
        self.content.set_size((self.rect.size() - self.gap * 2).clamped());
    }

    /// Commit according to the current sizing mode.
    pub fn commit(&mut self, measured: Size) {
        match self.sz {
            Sizing::BottomUp => self.commit_bottom_up(measured),
            Sizing::TopDown => self.commit_top_down(),
        }
    }

    /// Place the rect inside `Rect { pos, outer }` and then the content
    /// inside the placed rect.
    pub fn align_content_and_rect(&mut self, pos: Pos, outer: Size) {
        align_content_to_outer(&mut self.rect, Rect::from_pos_size(pos, outer), Size::ZERO, self.cha, self.cva);
        align_content_to_outer(&mut self.content, self.rect, self.gap, self.cha, self.cva);
    }
}
