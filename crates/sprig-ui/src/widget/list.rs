//! Vertical and horizontal lists of child widgets.

use smallvec::SmallVec;
use sprig_core::geometry::{HAlign, Pos, Size, VAlign};
use sprig_layout::{Layout, LayoutStrategy, ListLayout};
use sprig_render_2d::Canvas;

use super::{draw_frame, Node};
use crate::style::FrameColors;
use crate::tree::{TreeChildren, WidgetId, WidgetTree};

/// A container of explicitly attached widgets, laid out in sequence.
///
/// Children are attached through [`WidgetTree::attach`] and stay owned by
/// the tree.
#[derive(Debug, Clone)]
pub struct List {
    layout: ListLayout,
    children: SmallVec<[WidgetId; 8]>,
    pub frame: Option<FrameColors>,
}

impl Default for List {
    fn default() -> Self {
        let layout = Layout::default()
            .with_gap(Size::splat(8))
            .with_inner_align(HAlign::Fill, VAlign::Center);
        Self {
            layout: ListLayout::new(layout).with_elem_gap(4).vertical(),
            children: SmallVec::new(),
            frame: Some(FrameColors::CONTAINER),
        }
    }
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    /// A list with the given element gap and direction.
    pub fn with_direction(elem_gap: i32, is_horizontal: bool) -> Self {
        let mut list = Self::default();
        list.layout.elem_gap = elem_gap;
        list.layout.is_horizontal = is_horizontal;
        list
    }

    pub fn list_layout(&self) -> &ListLayout {
        &self.layout
    }

    pub fn list_layout_mut(&mut self) -> &mut ListLayout {
        &mut self.layout
    }

    pub fn children(&self) -> &[WidgetId] {
        &self.children
    }

    pub(crate) fn push_child(&mut self, id: WidgetId) {
        self.children.push(id);
    }
}

impl Node for List {
    fn layout(&self) -> &Layout {
        self.layout.layout()
    }

    fn layout_mut(&mut self) -> &mut Layout {
        self.layout.layout_mut()
    }

    fn preferred_size(&self, tree: &WidgetTree) -> Size {
        let sizes: SmallVec<[Size; 8]> = self.children.iter().map(|&c| tree.preferred_size(c)).collect();
        self.layout.layout().preferred_size_for(self.layout.content_size_of(&sizes))
    }

    fn update_content(&mut self, tree: &mut WidgetTree) {
        let own = self.layout.layout();
        for &child in &self.children {
            if let Some(l) = tree.layout_mut(child) {
                l.inherit_from(own);
            }
        }
        self.layout.update(&mut TreeChildren { tree, ids: &self.children });
    }

    fn realign(&mut self, tree: &mut WidgetTree, pos: Pos, outer: Size) {
        self.layout.realign(pos, outer, &mut TreeChildren { tree, ids: &self.children });
    }

    fn draw(&self, tree: &WidgetTree, canvas: &mut dyn Canvas) {
        draw_frame(self.frame, self.layout.layout(), canvas);
        for &child in &self.children {
            tree.draw(child, canvas);
        }
    }
}
