//! Single-value leaf widgets.

use std::fmt;
use std::rc::Rc;

use sprig_core::color::Color8;
use sprig_core::geometry::{HAlign, Pos, Size, Sizing, VAlign};
use sprig_layout::{Layout, LayoutStrategy, SingleElementLayout, Terminal};
use sprig_render_2d::Canvas;
use sprig_text::{render_small_string_monospace, GlyphSource, PrerenderedText};

use super::{draw_frame, Node};
use crate::proxy::ValueProxy;
use crate::style::FrameColors;
use crate::tree::WidgetTree;

fn leaf_layout() -> SingleElementLayout {
    SingleElementLayout::new(
        Layout::default()
            .with_gap(Size::splat(8))
            .with_align(HAlign::Center, VAlign::Bottom)
            .with_inner_align(HAlign::Center, VAlign::Bottom)
            .with_sizing(Sizing::BottomUp),
    )
}

/// A widget showing one value through a [`ValueProxy`].
pub struct Leaf {
    layout: SingleElementLayout,
    proxy: Option<Box<dyn ValueProxy>>,
    pub frame: Option<FrameColors>,
}

impl fmt::Debug for Leaf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Leaf")
            .field("layout", &self.layout)
            .field("has_proxy", &self.proxy.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for Leaf {
    fn default() -> Self {
        Self {
            layout: leaf_layout(),
            proxy: None,
            frame: Some(FrameColors::LEAF),
        }
    }
}

impl Leaf {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_proxy(proxy: impl ValueProxy + 'static) -> Self {
        let mut leaf = Self::default();
        leaf.set_proxy(proxy);
        leaf
    }

    pub fn set_proxy(&mut self, proxy: impl ValueProxy + 'static) {
        self.proxy = Some(Box::new(proxy));
    }

    fn element(&self) -> Terminal {
        Terminal(self.proxy.as_ref().map(|p| p.size()).unwrap_or_default())
    }
}

impl Node for Leaf {
    fn layout(&self) -> &Layout {
        self.layout.layout()
    }

    fn layout_mut(&mut self) -> &mut Layout {
        self.layout.layout_mut()
    }

    fn preferred_size(&self, _tree: &WidgetTree) -> Size {
        self.layout.preferred_size(&self.element())
    }

    fn update_content(&mut self, _tree: &mut WidgetTree) {
        if let Some(proxy) = self.proxy.as_mut() {
            proxy.update();
        }
        let mut element = self.element();
        self.layout.update(&mut element);
    }

    fn realign(&mut self, _tree: &mut WidgetTree, pos: Pos, outer: Size) {
        let mut element = self.element();
        self.layout.realign(pos, outer, &mut element);
    }

    fn draw(&self, _tree: &WidgetTree, canvas: &mut dyn Canvas) {
        draw_frame(self.frame, self.layout.layout(), canvas);
        if let Some(proxy) = &self.proxy {
            proxy.draw(self.layout.layout().content, canvas);
        }
    }
}

/// A fixed string rendered with its own font, without a proxy.
pub struct StaticText {
    layout: SingleElementLayout,
    font: Rc<dyn GlyphSource>,
    pub text: String,
    pub height: f32,
    pub color: Color8,
    rendered: PrerenderedText,
    pub frame: Option<FrameColors>,
}

impl fmt::Debug for StaticText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticText")
            .field("layout", &self.layout)
            .field("text", &self.text)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl StaticText {
    pub fn new(font: Rc<dyn GlyphSource>, text: impl Into<String>, height: f32) -> Self {
        Self {
            layout: leaf_layout(),
            font,
            text: text.into(),
            height,
            color: Color8::WHITE,
            rendered: PrerenderedText::default(),
            frame: Some(FrameColors::LEAF),
        }
    }

    pub fn with_color(mut self, color: Color8) -> Self {
        self.color = color;
        self
    }
}

impl Node for StaticText {
    fn layout(&self) -> &Layout {
        self.layout.layout()
    }

    fn layout_mut(&mut self) -> &mut Layout {
        self.layout.layout_mut()
    }

    fn preferred_size(&self, _tree: &WidgetTree) -> Size {
        self.layout.preferred_size(&Terminal(self.rendered.size()))
    }

    fn update_content(&mut self, _tree: &mut WidgetTree) {
        self.rendered = render_small_string_monospace(&self.text, &*self.font, self.height);
        self.layout.update(&mut Terminal(self.rendered.size()));
    }

    fn realign(&mut self, _tree: &mut WidgetTree, pos: Pos, outer: Size) {
        self.layout.realign(pos, outer, &mut Terminal(self.rendered.size()));
    }

    fn draw(&self, _tree: &WidgetTree, canvas: &mut dyn Canvas) {
        draw_frame(self.frame, self.layout.layout(), canvas);
        let content = self.layout.layout().content;
        canvas.blend_mask(&self.rendered.img, content.x, content.y, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use sprig_core::geometry::Rect;
    use sprig_render_2d::SoftwareRenderer;
    use sprig_text::BlockFont;

    use crate::proxy::view_value;
    use crate::style::Style;

    #[test]
    fn test_leaf_without_proxy_is_just_the_gap() {
        let tree = WidgetTree::new();
        let leaf = Leaf::new();
        assert_eq!(leaf.preferred_size(&tree), Size::new(16, 16));
    }

    #[test]
    fn test_leaf_update_realign_draw() {
        let mut tree = WidgetTree::new();
        let style = Rc::new(Style::new(Rc::new(BlockFont), 16.0).with_colors(None, Color8::BLACK));
        let value = Rc::new(RefCell::new("hi"));
        let mut leaf = Leaf::with_proxy(view_value(&value, &style));
        leaf.frame = None;

        leaf.update_content(&mut tree);
        assert_eq!(leaf.layout().content.size(), Size::new(33, 18));
        assert_eq!(leaf.preferred_size(&tree), Size::new(49, 34));

        leaf.layout_mut().cha = HAlign::Left;
        leaf.layout_mut().cva = VAlign::Top;
        leaf.realign(&mut tree, Pos::new(10, 10), Size::new(100, 100));
        assert_eq!(leaf.layout().rect, Rect::new(10, 10, 49, 34));
        assert_eq!(leaf.layout().content, Rect::new(18, 18, 33, 18));

        let mut canvas = SoftwareRenderer::new(80, 60);
        leaf.draw(&tree, &mut canvas);
        // First glyph starts one cell plus bearing into the bitmap.
        assert_eq!(canvas.pixel(18 + 10, 18 + 1), Some(Color8::BLACK));
        assert_eq!(canvas.pixel(18, 18), Some(Color8::WHITE));
    }

    #[test]
    fn test_static_text_draws_frame() {
        let mut tree = WidgetTree::new();
        let mut text = StaticText::new(Rc::new(BlockFont), "static", 12.0);
        text.update_content(&mut tree);
        text.realign(&mut tree, Pos::new(100, 50), Size::ZERO);

        let rect = text.layout().rect;
        let mut canvas = SoftwareRenderer::new(200, 100);
        text.draw(&tree, &mut canvas);
        // Bottom alignment: the rect sits above the given point.
        assert_eq!(rect, Rect::new(68, 20, 65, 30));
        assert_eq!(canvas.pixel(rect.x, rect.y), Some(FrameColors::LEAF.edge));
    }
}
