//! Child access for layout strategies.

use sprig_core::geometry::{Pos, Size};

use crate::layout::Layout;

/// Indexable access to the children of one node.
///
/// A strategy only ever needs four things from a child: its reported size,
/// its layout record, a way to refresh it and a way to place it. Terminal
/// elements such as bitmaps have no layout record; they return `None` from
/// the layout accessors and ignore update/realign requests.
pub trait ChildProvider {
    /// Number of children.
    fn count(&self) -> usize;

    /// Preferred outer size of child `index`, as of its last update.
    fn child_size(&self, index: usize) -> Size;

    fn child_layout(&self, index: usize) -> Option<&Layout>;

    fn child_layout_mut(&mut self, index: usize) -> Option<&mut Layout>;

    /// Run the child's own update pass.
    fn update_child(&mut self, index: usize);

    /// Place the child inside `Rect { pos, outer }`.
    fn realign_child(&mut self, index: usize, pos: Pos, outer: Size);
}

/// A geometry policy.
pub trait LayoutStrategy {
    fn layout(&self) -> &Layout;

    fn layout_mut(&mut self) -> &mut Layout;

    /// Measured content size. Never mutates anything.
    fn content_size(&self, children: &dyn ChildProvider) -> Size;

    /// Content size plus the gap on both sides.
    fn preferred_size(&self, children: &dyn ChildProvider) -> Size {
        self.layout().preferred_size_for(self.content_size(children))
    }

    /// Commit `rect`/`content` and bring every child up to date.
    fn update(&mut self, children: &mut dyn ChildProvider);

    /// Commit the final screen position of this node and its children.
    fn realign(&mut self, pos: Pos, outer: Size, children: &mut dyn ChildProvider);
}

/// A single element with a fixed size and no layout of its own, e.g. a
/// cached bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Terminal(pub Size);

impl ChildProvider for Terminal {
    fn count(&self) -> usize {
        1
    }

    fn child_size(&self, _index: usize) -> Size {
        self.0
    }

    fn child_layout(&self, _index: usize) -> Option<&Layout> {
        None
    }

    fn child_layout_mut(&mut self, _index: usize) -> Option<&mut Layout> {
        None
    }

    fn update_child(&mut self, _index: usize) {}

    fn realign_child(&mut self, _index: usize, _pos: Pos, _outer: Size) {}
}

/// Bare layout records standing in for elements that have no node of their
/// own (the per-element slots of a data-bound list).
///
/// Sizes come from outside because a record's content may be rewritten by
/// the list before it is measured again.
#[derive(Debug)]
pub struct Placeholders<'a> {
    pub layouts: &'a mut [Layout],
    /// Preferred outer size of each element.
    pub sizes: &'a [Size],
}

impl ChildProvider for Placeholders<'_> {
    fn count(&self) -> usize {
        self.layouts.len().min(self.sizes.len())
    }

    fn child_size(&self, index: usize) -> Size {
        self.sizes.get(index).copied().unwrap_or_default()
    }

    fn child_layout(&self, index: usize) -> Option<&Layout> {
        self.layouts.get(index)
    }

    fn child_layout_mut(&mut self, index: usize) -> Option<&mut Layout> {
        self.layouts.get_mut(index)
    }

    fn update_child(&mut self, index: usize) {
        if let Some(l) = self.layouts.get_mut(index) {
            l.commit_top_down();
        }
    }

    fn realign_child(&mut self, index: usize, pos: Pos, outer: Size) {
        if let Some(l) = self.layouts.get_mut(index) {
            l.align_content_and_rect(pos, outer);
        }
    }
}
