//! List widget fed by a multi-value proxy.

use std::fmt;

use sprig_core::geometry::{HAlign, Pos, Size, Sizing, VAlign};
use sprig_layout::{Layout, LayoutStrategy, ListLayout, Placeholders};
use sprig_render_2d::Canvas;

use super::{draw_frame, Node};
use crate::proxy::MultiValueProxy;
use crate::style::FrameColors;
use crate::tree::WidgetTree;

/// A list whose elements come from a [`MultiValueProxy`] instead of child
/// widgets.
///
/// Each element is represented by a bare [`Layout`] cloned from
/// `reference`. The placeholders are rebuilt on every update, so element
/// geometry lives exactly one frame.
pub struct ListData {
    layout: ListLayout,
    /// Template for every element placeholder.
    pub reference: Layout,
    proxy: Option<Box<dyn MultiValueProxy>>,
    placeholders: Vec<Layout>,
    sizes: Vec<Size>,
    pub frame: Option<FrameColors>,
}

impl fmt::Debug for ListData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListData")
            .field("layout", &self.layout)
            .field("reference", &self.reference)
            .field("elements", &self.placeholders.len())
            .finish_non_exhaustive()
    }
}

impl Default for ListData {
    fn default() -> Self {
        let layout = Layout::default()
            .with_gap(Size::splat(8))
            .with_align(HAlign::Center, VAlign::Top)
            .with_inner_align(HAlign::Center, VAlign::Center)
            .with_sizing(Sizing::BottomUp);
        Self {
            layout: ListLayout::new(layout).with_elem_gap(2).vertical(),
            reference: Layout::default().with_gap(Size::splat(1)).with_align(HAlign::Fill, VAlign::Center),
            proxy: None,
            placeholders: Vec::new(),
            sizes: Vec::new(),
            frame: Some(FrameColors::CONTAINER),
        }
    }
}

impl ListData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_proxy(proxy: impl MultiValueProxy + 'static) -> Self {
        let mut list = Self::default();
        list.set_proxy(proxy);
        list
    }

    pub fn set_proxy(&mut self, proxy: impl MultiValueProxy + 'static) {
        self.proxy = Some(Box::new(proxy));
    }

    pub fn list_layout(&self) -> &ListLayout {
        &self.layout
    }

    pub fn list_layout_mut(&mut self) -> &mut ListLayout {
        &mut self.layout
    }

    /// Element geometry from the last update.
    pub fn placeholders(&self) -> &[Layout] {
        &self.placeholders
    }

    fn rebuild_placeholders(&mut self) {
        let n = self.proxy.as_ref().map_or(0, |p| p.n_elems());
        let sz = self.layout.layout().sz;

        let mut placeholders = Vec::with_capacity(n);
        let mut sizes = Vec::with_capacity(n);
        for i in 0..n {
            let elem = self.proxy.as_ref().map(|p| p.elem_size(i)).unwrap_or_default();
            let mut l = self.reference.clone();
            l.sz = sz;
            l.content.set_size(elem);
            if sz == Sizing::BottomUp {
                l.commit_bottom_up(elem);
            }
            sizes.push(l.preferred_size_for(elem));
            placeholders.push(l);
        }

        tracing::trace!(elements = n, "Rebuilt list placeholders");
        self.placeholders = placeholders;
        self.sizes = sizes;
    }
}

impl Node for ListData {
    fn layout(&self) -> &Layout {
        self.layout.layout()
    }

    fn layout_mut(&mut self) -> &mut Layout {
        self.layout.layout_mut()
    }

    fn preferred_size(&self, _tree: &WidgetTree) -> Size {
        let Some(proxy) = &self.proxy else {
            return self.layout.layout().preferred_size_for(Size::ZERO);
        };
        let sizes: Vec<Size> = (0..proxy.n_elems())
            .map(|i| self.reference.preferred_size_for(proxy.elem_size(i)))
            .collect();
        self.layout.layout().preferred_size_for(self.layout.content_size_of(&sizes))
    }

    fn update_content(&mut self, _tree: &mut WidgetTree) {
        if let Some(proxy) = self.proxy.as_mut() {
            proxy.update();
        }
        self.rebuild_placeholders();
        self.layout.update(&mut Placeholders {
            layouts: &mut self.placeholders,
            sizes: &self.sizes,
        });
    }

    fn realign(&mut self, _tree: &mut WidgetTree, pos: Pos, outer: Size) {
        self.layout.realign(
            pos,
            outer,
            &mut Placeholders {
                layouts: &mut self.placeholders,
                sizes: &self.sizes,
            },
        );
    }

    fn draw(&self, _tree: &WidgetTree, canvas: &mut dyn Canvas) {
        draw_frame(self.frame, self.layout.layout(), canvas);
        let Some(proxy) = &self.proxy else {
            return;
        };
        for (i, p) in self.placeholders.iter().enumerate() {
            proxy.draw_elem(i, p.content, canvas);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use sprig_core::color::Color8;
    use sprig_core::geometry::Rect;
    use sprig_render_2d::SoftwareRenderer;
    use sprig_text::BlockFont;

    use proptest::prelude::*;

    use crate::proxy::view_multi_value;
    use crate::style::Style;

    fn style() -> Rc<Style> {
        Rc::new(Style::new(Rc::new(BlockFont), 16.0).with_colors(Some(Color8::BLACK), Color8::WHITE))
    }

    fn inside(inner: Rect, outer: Rect) -> bool {
        inner.left() >= outer.left()
            && inner.top() >= outer.top()
            && inner.right() <= outer.right()
            && inner.bottom() <= outer.bottom()
    }

    #[test]
    fn test_unset_proxy_has_no_elements() {
        let mut tree = WidgetTree::new();
        let mut list = ListData::new();
        list.update_content(&mut tree);
        assert!(list.placeholders().is_empty());
        assert_eq!(list.layout().content.size(), Size::ZERO);
        assert_eq!(list.preferred_size(&tree), Size::new(16, 16));
    }

    #[test]
    fn test_placeholders_follow_value_count() {
        let mut tree = WidgetTree::new();
        let values = Rc::new(RefCell::new(vec![1, 22, 333]));
        let mut list = ListData::with_proxy(view_multi_value(&values, &style()));

        list.update_content(&mut tree);
        assert_eq!(list.placeholders().len(), 3);
        // Widths 25, 33, 41 plus the one pixel reference gap on each side.
        assert_eq!(list.placeholders()[2].rect.size(), Size::new(43, 20));
        assert_eq!(list.layout().content.size(), Size::new(43, 20 * 3 + 2 * 2));
        assert_eq!(list.preferred_size(&tree), Size::new(43 + 16, 64 + 16));

        values.borrow_mut().truncate(1);
        list.update_content(&mut tree);
        assert_eq!(list.placeholders().len(), 1);
    }

    #[test]
    fn test_placeholders_are_fresh_each_update() {
        let mut tree = WidgetTree::new();
        let values = Rc::new(RefCell::new(vec!["a", "b"]));
        let mut list = ListData::with_proxy(view_multi_value(&values, &style()));

        list.update_content(&mut tree);
        let before = list.placeholders().as_ptr();
        values.borrow_mut().extend(["c", "d", "e"]);
        list.update_content(&mut tree);
        assert_eq!(list.placeholders().len(), 5);
        assert_ne!(list.placeholders().as_ptr(), before);
    }

    #[test]
    fn test_realign_and_draw_elements() {
        let mut tree = WidgetTree::new();
        let values = Rc::new(RefCell::new(vec!["x", "yy"]));
        let mut list = ListData::with_proxy(view_multi_value(&values, &style()));
        list.frame = None;
        list.layout_mut().cha = HAlign::Left;

        list.update_content(&mut tree);
        list.realign(&mut tree, Pos::new(0, 0), Size::new(100, 100));

        let content = list.layout().content;
        assert_eq!(content, Rect::new(8, 8, 35, 42));
        let rows: Vec<Rect> = list.placeholders().iter().map(|p| p.rect).collect();
        // Fill stretches both rows across the column.
        assert_eq!(rows, [Rect::new(8, 8, 35, 20), Rect::new(8, 30, 35, 20)]);
        assert_eq!(list.placeholders()[0].content, Rect::new(9, 9, 33, 18));

        let mut canvas = SoftwareRenderer::new(60, 60);
        list.draw(&tree, &mut canvas);
        // Element background covers the whole content box, the row gap does not.
        assert_eq!(canvas.pixel(9 + 32, 9), Some(Color8::BLACK));
        assert_eq!(canvas.pixel(9, 28), Some(Color8::WHITE));
    }

    #[test]
    fn test_top_down_caps_elements_to_slots() {
        let mut tree = WidgetTree::new();
        let values = Rc::new(RefCell::new(vec![1, 22, 333]));
        let mut list = ListData::with_proxy(view_multi_value(&values, &style()));
        list.frame = None;
        list.layout_mut().sz = Sizing::TopDown;
        list.layout_mut().rect = Rect::new(0, 0, 40, 100);
        list.reference.cha = HAlign::Left;
        list.reference.cva = VAlign::Top;

        list.update_content(&mut tree);
        // 40x100 minus the 8 pixel list gap; slots are floor((84 - 2*2) / 3) = 26 high.
        assert_eq!(list.layout().content.size(), Size::new(24, 84));
        assert_eq!(list.list_layout().eq_div_size(3), Size::new(24, 26));
        for p in list.placeholders() {
            assert_eq!(p.rect.size(), Size::new(24, 20));
            assert_eq!(p.content.size(), Size::new(22, 18));
        }

        list.realign(&mut tree, Pos::new(0, 0), Size::new(40, 100));
        let tops: Vec<i32> = list.placeholders().iter().map(|p| p.rect.y).collect();
        assert_eq!(tops, [8, 36, 64]);
        assert_eq!(list.placeholders()[1].content, Rect::new(9, 37, 22, 18));
    }

    proptest! {
        #[test]
        fn prop_placeholders_track_values_inside_content(
            first in proptest::collection::vec(-999i32..1000, 0..8),
            second in proptest::collection::vec(-999i32..1000, 0..8),
            x in -50i32..50, y in -50i32..50, w in 0i32..300, h in 0i32..300,
        ) {
            let mut tree = WidgetTree::new();
            let values = Rc::new(RefCell::new(first));
            let mut list = ListData::with_proxy(view_multi_value(&values, &style()));

            for _ in 0..2 {
                list.update_content(&mut tree);
                list.realign(&mut tree, Pos::new(x, y), Size::new(w, h));
                prop_assert_eq!(list.placeholders().len(), values.borrow().len());
                let content = list.layout().content;
                for p in list.placeholders() {
                    prop_assert!(inside(p.content, content), "{:?} outside {:?}", p.content, content);
                }
                *values.borrow_mut() = second.clone();
            }
        }
    }
}
