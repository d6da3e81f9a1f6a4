//! Widget nodes.
//!
//! Every widget answers four questions: how big it wants to be, how to
//! refresh its content, where it ends up on screen and how it draws. The
//! answers for container widgets go through the [`WidgetTree`] that owns
//! their children.

mod composite;
mod leaf;
mod list;
mod list_data;

pub use composite::{CellList, Col2, TitleAndTwoCols, TwoRows};
pub use leaf::{Leaf, StaticText};
pub use list::List;
pub use list_data::ListData;

use sprig_core::geometry::{Pos, Size};
use sprig_layout::Layout;
use sprig_render_2d::Canvas;

use crate::style::FrameColors;
use crate::tree::WidgetTree;

/// The widget capability set.
pub trait Node {
    fn layout(&self) -> &Layout;

    fn layout_mut(&mut self) -> &mut Layout;

    /// Outer size this widget would like, from its current content.
    fn preferred_size(&self, tree: &WidgetTree) -> Size;

    /// Refresh content and commit `rect`/`content` sizes.
    fn update_content(&mut self, tree: &mut WidgetTree);

    /// Commit the final position inside `Rect { pos, outer }`.
    fn realign(&mut self, tree: &mut WidgetTree, pos: Pos, outer: Size);

    fn draw(&self, tree: &WidgetTree, canvas: &mut dyn Canvas);
}

/// Any widget that can live in a [`WidgetTree`].
#[derive(Debug)]
pub enum Widget {
    Leaf(Leaf),
    StaticText(StaticText),
    List(List),
    ListData(ListData),
    TwoRows(TwoRows),
    Col2(Col2),
    TitleAndTwoCols(TitleAndTwoCols),
}

impl Widget {
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Widget::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Widget::List(l) => Some(l),
            _ => None,
        }
    }

    fn node(&self) -> &dyn Node {
        match self {
            Widget::Leaf(w) => w,
            Widget::StaticText(w) => w,
            Widget::List(w) => w,
            Widget::ListData(w) => w,
            Widget::TwoRows(w) => w,
            Widget::Col2(w) => w,
            Widget::TitleAndTwoCols(w) => w,
        }
    }

    fn node_mut(&mut self) -> &mut dyn Node {
        match self {
            Widget::Leaf(w) => w,
            Widget::StaticText(w) => w,
            Widget::List(w) => w,
            Widget::ListData(w) => w,
            Widget::TwoRows(w) => w,
            Widget::Col2(w) => w,
            Widget::TitleAndTwoCols(w) => w,
        }
    }
}

impl Node for Widget {
    fn layout(&self) -> &Layout {
        self.node().layout()
    }

    fn layout_mut(&mut self) -> &mut Layout {
        self.node_mut().layout_mut()
    }

    fn preferred_size(&self, tree: &WidgetTree) -> Size {
        self.node().preferred_size(tree)
    }

    fn update_content(&mut self, tree: &mut WidgetTree) {
        self.node_mut().update_content(tree)
    }

    fn realign(&mut self, tree: &mut WidgetTree, pos: Pos, outer: Size) {
        self.node_mut().realign(tree, pos, outer)
    }

    fn draw(&self, tree: &WidgetTree, canvas: &mut dyn Canvas) {
        self.node().draw(tree, canvas)
    }
}

macro_rules! impl_from_widget {
    ($($variant:ident),*) => {
        $(
            impl From<$variant> for Widget {
                fn from(w: $variant) -> Self {
                    Widget::$variant(w)
                }
            }
        )*
    };
}

impl_from_widget!(Leaf, StaticText, List, ListData, TwoRows, Col2, TitleAndTwoCols);

/// Frame around `layout.rect`, plus the content outline when configured.
pub(crate) fn draw_frame(frame: Option<FrameColors>, layout: &Layout, canvas: &mut dyn Canvas) {
    let Some(frame) = frame else {
        return;
    };
    canvas.framed_rect(layout.rect, frame.fill, frame.edge);
    if let Some(c) = frame.content {
        canvas.rect(layout.content, c);
    }
}
