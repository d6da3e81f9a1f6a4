//! Single-element layout: one child fills the content box.

use sprig_core::geometry::{Pos, Size, Sizing};

use crate::layout::Layout;
use crate::provider::{ChildProvider, LayoutStrategy, Terminal};

/// Layout for nodes with exactly one child (or one terminal element).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SingleElementLayout {
    layout: Layout,
}

impl SingleElementLayout {
    pub fn new(layout: Layout) -> Self {
        Self { layout }
    }
}

impl LayoutStrategy for SingleElementLayout {
    fn layout(&self) -> &Layout {
        &self.layout
    }

    fn layout_mut(&mut self) -> &mut Layout {
        &mut self.layout
    }

    fn content_size(&self, children: &dyn ChildProvider) -> Size {
        if children.count() == 0 {
            return Size::ZERO;
        }
        children.child_size(0)
    }

    fn update(&mut self, children: &mut dyn ChildProvider) {
        let has_child = children.count() > 0;
        if has_child {
            children.update_child(0);
        }

        let measured = self.content_size(&*children);
        self.layout.commit(measured);

        if has_child && self.layout.sz == Sizing::TopDown {
            let content = self.layout.content.size();
            if let Some(child) = children.child_layout_mut(0) {
                child.rect.set_size(content);
                children.update_child(0);
            }
        }
    }

    fn realign(&mut self, pos: Pos, outer: Size, children: &mut dyn ChildProvider) {
        self.layout.align_content_and_rect(pos, outer);
        if children.count() > 0 {
            children.realign_child(0, self.layout.content.pos(), self.layout.content.size());
        }
    }
}

/// A row of single-element cells, each wrapping one fixed-size element.
///
/// Fixed composites use this to hand a set of bitmaps to a list layout.
#[derive(Debug)]
pub struct ElementCells<'a> {
    pub cells: &'a mut [SingleElementLayout],
    /// Size of the element inside each cell.
    pub sizes: &'a [Size],
}

impl ElementCells<'_> {
    fn element(&self, index: usize) -> Terminal {
        Terminal(self.sizes.get(index).copied().unwrap_or_default())
    }
}

impl ChildProvider for ElementCells<'_> {
    fn count(&self) -> usize {
        self.cells.len().min(self.sizes.len())
    }

    fn child_size(&self, index: usize) -> Size {
        match self.cells.get(index) {
            Some(cell) => cell.preferred_size(&self.element(index)),
            None => Size::ZERO,
        }
    }

    fn child_layout(&self, index: usize) -> Option<&Layout> {
        self.cells.get(index).map(|c| c.layout())
    }

    fn child_layout_mut(&mut self, index: usize) -> Option<&mut Layout> {
        self.cells.get_mut(index).map(|c| c.layout_mut())
    }

    fn update_child(&mut self, index: usize) {
        let mut element = self.element(index);
        if let Some(cell) = self.cells.get_mut(index) {
            cell.update(&mut element);
        }
    }

    fn realign_child(&mut self, index: usize, pos: Pos, outer: Size) {
        let mut element = self.element(index);
        if let Some(cell) = self.cells.get_mut(index) {
            cell.realign(pos, outer, &mut element);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprig_core::geometry::{HAlign, Rect, VAlign};

    #[test]
    fn test_bottom_up_terminal() {
        let mut single = SingleElementLayout::new(Layout::default().with_gap(Size::new(8, 8)));
        let mut element = Terminal(Size::new(30, 12));
        assert_eq!(single.preferred_size(&element), Size::new(46, 28));

        single.update(&mut element);
        assert_eq!(single.layout().content.size(), Size::new(30, 12));
        assert_eq!(single.layout().rect.size(), Size::new(46, 28));
    }

    #[test]
    fn test_top_down_ignores_element_size() {
        let mut single = SingleElementLayout::new(Layout::default().with_sizing(Sizing::TopDown));
        single.layout_mut().rect = Rect::new(0, 0, 50, 20);
        single.update(&mut Terminal(Size::new(300, 300)));
        assert_eq!(single.layout().content.size(), Size::new(48, 18));
    }

    #[test]
    fn test_realign_centers_on_point_when_outer_is_empty() {
        let mut single = SingleElementLayout::default();
        let mut element = Terminal(Size::new(10, 4));
        single.update(&mut element);
        single.realign(Pos::new(100, 50), Size::ZERO, &mut element);
        assert_eq!(single.layout().rect, Rect::new(94, 47, 12, 6));
        assert_eq!(single.layout().content, Rect::new(95, 48, 10, 4));
    }

    #[test]
    fn test_measure_is_pure() {
        let single = SingleElementLayout::default();
        let before = single.clone();
        let _ = single.preferred_size(&Terminal(Size::new(5, 5)));
        assert_eq!(single, before);
    }

    #[test]
    fn test_nested_single_passes_content_down() {
        let mut cells = [SingleElementLayout::new(
            Layout::default().with_gap(Size::ZERO).with_sizing(Sizing::TopDown).with_align(HAlign::Fill, VAlign::Fill),
        )];
        let sizes = [Size::new(4, 4)];
        let mut outer = SingleElementLayout::new(Layout::default().with_gap(Size::new(2, 2)).with_sizing(Sizing::TopDown));
        outer.layout_mut().rect = Rect::new(0, 0, 40, 30);

        let mut provider = ElementCells { cells: &mut cells, sizes: &sizes };
        outer.update(&mut provider);
        outer.realign(Pos::new(0, 0), Size::new(40, 30), &mut provider);

        assert_eq!(cells[0].layout().rect, Rect::new(2, 2, 36, 26));
        assert_eq!(cells[0].layout().content, Rect::new(2, 2, 36, 26));
    }
}
