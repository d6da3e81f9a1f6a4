//! Fixed composites: a handful of coverage images arranged by a list
//! layout, without child widgets.

use sprig_core::color::Color8;
use sprig_core::geometry::{HAlign, Pos, Size, VAlign};
use sprig_core::image::Image;
use sprig_layout::{ChildProvider, ElementCells, Layout, LayoutStrategy, ListLayout, SingleElementLayout, Terminal};
use sprig_render_2d::Canvas;
use sprig_text::{render_small_string_monospace, GlyphSource};

use super::{draw_frame, Node};
use crate::style::FrameColors;
use crate::tree::WidgetTree;

fn cell() -> SingleElementLayout {
    SingleElementLayout::new(Layout::default().with_gap(Size::ZERO))
}

/// `N` images, each in its own cell, laid out in sequence.
#[derive(Debug, Clone)]
pub struct CellList<const N: usize> {
    layout: ListLayout,
    cells: [SingleElementLayout; N],
    pub imgs: [Image<u8>; N],
    /// Color the coverage images are blended with.
    pub color: Color8,
    pub frame: Option<FrameColors>,
}

impl<const N: usize> CellList<N> {
    pub fn new(is_horizontal: bool) -> Self {
        let layout = Layout::default()
            .with_gap(Size::splat(8))
            .with_inner_align(HAlign::Center, VAlign::Center);
        let mut layout = ListLayout::new(layout).with_elem_gap(4);
        layout.is_horizontal = is_horizontal;
        Self {
            layout,
            cells: std::array::from_fn(|_| cell()),
            imgs: std::array::from_fn(|_| Image::default()),
            color: Color8::BLACK,
            frame: Some(FrameColors::CONTAINER),
        }
    }

    /// Replace image `index` by `text` rendered with `font`. Out-of-range
    /// indices are ignored.
    pub fn set_text(&mut self, index: usize, text: &str, font: &dyn GlyphSource, px: f32) {
        if let Some(img) = self.imgs.get_mut(index) {
            *img = render_small_string_monospace(text, font, px).img;
        }
    }

    pub fn list_layout(&self) -> &ListLayout {
        &self.layout
    }

    pub fn list_layout_mut(&mut self) -> &mut ListLayout {
        &mut self.layout
    }

    pub fn cell_layout(&self, index: usize) -> Option<&Layout> {
        self.cells.get(index).map(|c| c.layout())
    }

    fn sizes(&self) -> [Size; N] {
        std::array::from_fn(|i| self.imgs[i].size())
    }

    pub fn preferred_size(&self) -> Size {
        let sizes = self.sizes();
        let outer: [Size; N] = std::array::from_fn(|i| self.cells[i].preferred_size(&Terminal(sizes[i])));
        self.layout.layout().preferred_size_for(self.layout.content_size_of(&outer))
    }

    pub fn update(&mut self) {
        let own = self.layout.layout();
        for c in self.cells.iter_mut() {
            c.layout_mut().inherit_from(own);
        }
        let sizes = self.sizes();
        self.layout.update(&mut ElementCells { cells: &mut self.cells, sizes: &sizes });
    }

    pub fn realign(&mut self, pos: Pos, outer: Size) {
        let sizes = self.sizes();
        self.layout.realign(pos, outer, &mut ElementCells { cells: &mut self.cells, sizes: &sizes });
    }

    /// Blend every image at its cell's content origin.
    pub fn draw_cells(&self, canvas: &mut dyn Canvas) {
        for (c, img) in self.cells.iter().zip(&self.imgs) {
            let at = c.layout().content.pos();
            canvas.blend_mask(img, at.x, at.y, self.color);
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        draw_frame(self.frame, self.layout.layout(), canvas);
        self.draw_cells(canvas);
    }
}

macro_rules! cell_list_node {
    ($name:ident) => {
        impl Node for $name {
            fn layout(&self) -> &Layout {
                self.0.layout.layout()
            }

            fn layout_mut(&mut self) -> &mut Layout {
                self.0.layout.layout_mut()
            }

            fn preferred_size(&self, _tree: &WidgetTree) -> Size {
                self.0.preferred_size()
            }

            fn update_content(&mut self, _tree: &mut WidgetTree) {
                self.0.update();
            }

            fn realign(&mut self, _tree: &mut WidgetTree, pos: Pos, outer: Size) {
                self.0.realign(pos, outer);
            }

            fn draw(&self, _tree: &WidgetTree, canvas: &mut dyn Canvas) {
                self.0.draw(canvas);
            }
        }
    };
}

/// Two images stacked vertically.
#[derive(Debug, Clone)]
pub struct TwoRows(pub CellList<2>);

impl TwoRows {
    pub fn new(top: Image<u8>, bottom: Image<u8>) -> Self {
        let mut cells = CellList::new(false);
        cells.imgs = [top, bottom];
        Self(cells)
    }
}

/// Two images side by side.
#[derive(Debug, Clone)]
pub struct Col2(pub CellList<2>);

impl Col2 {
    pub fn new(left: Image<u8>, right: Image<u8>) -> Self {
        let mut cells = CellList::new(true);
        cells.imgs = [left, right];
        Self(cells)
    }
}

cell_list_node!(TwoRows);
cell_list_node!(Col2);

/// A title above two side-by-side columns.
#[derive(Debug, Clone)]
pub struct TitleAndTwoCols {
    layout: ListLayout,
    title: SingleElementLayout,
    pub title_img: Image<u8>,
    pub cols: CellList<2>,
    pub frame: Option<FrameColors>,
}

impl TitleAndTwoCols {
    pub fn new(title: Image<u8>, left: Image<u8>, right: Image<u8>) -> Self {
        let layout = Layout::default()
            .with_gap(Size::splat(8))
            .with_inner_align(HAlign::Center, VAlign::Center);
        let mut cols = CellList::new(true);
        cols.imgs = [left, right];
        cols.frame = None;
        cols.list_layout_mut().layout_mut().gap = Size::ZERO;
        Self {
            layout: ListLayout::new(layout).with_elem_gap(4).vertical(),
            title: cell(),
            title_img: title,
            cols,
            frame: Some(FrameColors::CONTAINER),
        }
    }

    pub fn title_layout(&self) -> &Layout {
        self.title.layout()
    }
}

/// The two rows of a [`TitleAndTwoCols`] seen as list children.
struct TitleAndCols<'a> {
    title: &'a mut SingleElementLayout,
    title_size: Size,
    cols: &'a mut CellList<2>,
}

impl ChildProvider for TitleAndCols<'_> {
    fn count(&self) -> usize {
        2
    }

    fn child_size(&self, index: usize) -> Size {
        match index {
            0 => self.title.preferred_size(&Terminal(self.title_size)),
            1 => self.cols.preferred_size(),
            _ => Size::ZERO,
        }
    }

    fn child_layout(&self, index: usize) -> Option<&Layout> {
        match index {
            0 => Some(self.title.layout()),
            1 => Some(self.cols.layout.layout()),
            _ => None,
        }
    }

    fn child_layout_mut(&mut self, index: usize) -> Option<&mut Layout> {
        match index {
            0 => Some(self.title.layout_mut()),
            1 => Some(self.cols.layout.layout_mut()),
            _ => None,
        }
    }

    fn update_child(&mut self, index: usize) {
        match index {
            0 => self.title.update(&mut Terminal(self.title_size)),
            1 => self.cols.update(),
            _ => {}
        }
    }

    fn realign_child(&mut self, index: usize, pos: Pos, outer: Size) {
        match index {
            0 => self.title.realign(pos, outer, &mut Terminal(self.title_size)),
            1 => self.cols.realign(pos, outer),
            _ => {}
        }
    }
}

impl Node for TitleAndTwoCols {
    fn layout(&self) -> &Layout {
        self.layout.layout()
    }

    fn layout_mut(&mut self) -> &mut Layout {
        self.layout.layout_mut()
    }

    fn preferred_size(&self, _tree: &WidgetTree) -> Size {
        let title = self.title.preferred_size(&Terminal(self.title_img.size()));
        let sizes = [title, self.cols.preferred_size()];
        self.layout.layout().preferred_size_for(self.layout.content_size_of(&sizes))
    }

    fn update_content(&mut self, _tree: &mut WidgetTree) {
        let own = self.layout.layout();
        self.title.layout_mut().inherit_from(own);
        self.cols.layout.layout_mut().inherit_from(own);
        let mut parts = TitleAndCols {
            title: &mut self.title,
            title_size: self.title_img.size(),
            cols: &mut self.cols,
        };
        self.layout.update(&mut parts);
    }

    fn realign(&mut self, _tree: &mut WidgetTree, pos: Pos, outer: Size) {
        let mut parts = TitleAndCols {
            title: &mut self.title,
            title_size: self.title_img.size(),
            cols: &mut self.cols,
        };
        self.layout.realign(pos, outer, &mut parts);
    }

    fn draw(&self, _tree: &WidgetTree, canvas: &mut dyn Canvas) {
        draw_frame(self.frame, self.layout.layout(), canvas);
        let at = self.title.layout().content.pos();
        canvas.blend_mask(&self.title_img, at.x, at.y, self.cols.color);
        self.cols.draw(canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprig_core::geometry::Rect;
    use sprig_render_2d::SoftwareRenderer;
    use sprig_text::BlockFont;

    fn solid(w: i32, h: i32) -> Image<u8> {
        Image::filled(Size::new(w, h), 255)
    }

    #[test]
    fn test_two_rows_stack_and_center() {
        let mut tree = WidgetTree::new();
        let mut rows = TwoRows::new(solid(10, 4), solid(6, 8));
        assert_eq!(rows.preferred_size(&tree), Size::new(26, 32));

        rows.update_content(&mut tree);
        rows.realign(&mut tree, Pos::new(0, 0), Size::new(26, 32));
        assert_eq!(rows.layout().content, Rect::new(8, 8, 10, 16));
        assert_eq!(rows.0.cell_layout(0).map(|l| l.rect), Some(Rect::new(8, 8, 10, 4)));
        assert_eq!(rows.0.cell_layout(1).map(|l| l.rect), Some(Rect::new(10, 16, 6, 8)));

        let mut canvas = SoftwareRenderer::new(30, 40);
        rows.draw(&tree, &mut canvas);
        assert_eq!(canvas.pixel(10, 16), Some(Color8::BLACK));
        // Between the rows only the frame fill shows.
        assert_eq!(canvas.pixel(9, 13), Some(FrameColors::CONTAINER.fill));
    }

    #[test]
    fn test_col2_is_horizontal() {
        let mut tree = WidgetTree::new();
        let mut cols = Col2::new(solid(10, 4), solid(6, 8));
        cols.update_content(&mut tree);
        assert_eq!(cols.layout().content.size(), Size::new(20, 8));
        assert_eq!(cols.preferred_size(&tree), Size::new(36, 24));

        cols.layout_mut().cha = HAlign::Left;
        cols.layout_mut().cva = VAlign::Top;
        cols.realign(&mut tree, Pos::new(0, 0), Size::new(100, 100));
        assert_eq!(cols.0.cell_layout(0).map(|l| l.rect.pos()), Some(Pos::new(8, 10)));
        assert_eq!(cols.0.cell_layout(1).map(|l| l.rect.pos()), Some(Pos::new(22, 8)));
    }

    #[test]
    fn test_set_text_renders_into_cell() {
        let mut cols = CellList::<2>::new(true);
        cols.set_text(0, "ab", &BlockFont, 16.0);
        cols.set_text(7, "ignored", &BlockFont, 16.0);
        assert_eq!(cols.imgs[0].size(), Size::new(33, 18));
        assert!(cols.imgs[1].is_empty());
    }

    #[test]
    fn test_title_and_two_cols() {
        let mut tree = WidgetTree::new();
        let mut w = TitleAndTwoCols::new(solid(20, 6), solid(10, 4), solid(6, 8));
        assert_eq!(w.preferred_size(&tree), Size::new(36, 34));

        w.update_content(&mut tree);
        assert_eq!(w.layout().content.size(), Size::new(20, 18));

        w.realign(&mut tree, Pos::new(0, 0), Size::new(36, 34));
        assert_eq!(w.title_layout().rect, Rect::new(8, 8, 20, 6));
        assert_eq!(w.cols.list_layout().layout().rect, Rect::new(8, 18, 20, 8));
        assert_eq!(w.cols.cell_layout(1).map(|l| l.rect), Some(Rect::new(22, 18, 6, 8)));

        let mut canvas = SoftwareRenderer::new(40, 40);
        w.draw(&tree, &mut canvas);
        assert_eq!(canvas.pixel(8, 8), Some(Color8::BLACK));
        assert_eq!(canvas.pixel(27, 25), Some(Color8::BLACK));
    }
}
