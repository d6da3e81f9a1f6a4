//! Value proxies: the bridge between application data and widgets.
//!
//! A proxy watches a value it does not own and caches a rendered bitmap of
//! it. Rendering happens only in `update`; size queries and drawing read the
//! cache.

use std::cell::RefCell;
use std::fmt::{self, Display};
use std::rc::{Rc, Weak};

use sprig_core::geometry::{Rect, Size};
use sprig_render_2d::Canvas;
use sprig_text::{render_small_string_monospace, PrerenderedText};

use crate::style::Style;

/// A proxy for one value.
pub trait ValueProxy {
    /// Re-render the cached bitmap from the current value.
    fn update(&mut self);

    fn n_elems(&self) -> usize;

    /// Size of the cached bitmap.
    fn size(&self) -> Size;

    fn draw(&self, rect: Rect, canvas: &mut dyn Canvas);
}

/// A proxy for a sequence of values.
pub trait MultiValueProxy {
    fn update(&mut self);

    /// Current length of the watched sequence.
    fn n_elems(&self) -> usize;

    /// Size of the cached bitmap of element `index`; zero when out of range.
    fn elem_size(&self, index: usize) -> Size;

    fn draw_elem(&self, index: usize, rect: Rect, canvas: &mut dyn Canvas);
}

fn render(value: &impl Display, style: &Style) -> PrerenderedText {
    render_small_string_monospace(&value.to_string(), &*style.font, style.height)
}

fn blit(text: &PrerenderedText, rect: Rect, style: &Style, canvas: &mut dyn Canvas) {
    canvas.blend_mask(&text.img, rect.x, rect.y, style.foreground);
}

/// Displays a single value through its [`Display`] form.
pub struct ValueView<T> {
    target: Weak<RefCell<T>>,
    style: Option<Rc<Style>>,
    text: PrerenderedText,
}

impl<T> Default for ValueView<T> {
    fn default() -> Self {
        Self {
            target: Weak::new(),
            style: None,
            text: PrerenderedText::default(),
        }
    }
}

impl<T> fmt::Debug for ValueView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueView")
            .field("bound", &(self.target.strong_count() > 0))
            .field("size", &self.text.size())
            .finish_non_exhaustive()
    }
}

impl<T: Display> ValueView<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_target(&mut self, target: &Rc<RefCell<T>>) {
        self.target = Rc::downgrade(target);
    }

    pub fn set_style(&mut self, style: Rc<Style>) {
        self.style = Some(style);
    }
}

impl<T: Display> ValueProxy for ValueView<T> {
    fn update(&mut self) {
        self.text = match (self.target.upgrade(), &self.style) {
            (Some(target), Some(style)) => render(&*target.borrow(), style),
            _ => PrerenderedText::default(),
        };
    }

    fn n_elems(&self) -> usize {
        usize::from(self.target.strong_count() > 0)
    }

    fn size(&self) -> Size {
        self.text.size()
    }

    fn draw(&self, rect: Rect, canvas: &mut dyn Canvas) {
        let Some(style) = &self.style else {
            return;
        };
        if let Some(bg) = style.background {
            canvas.filled_rect(Rect::from_pos_size(rect.pos(), self.text.size()), bg);
        }
        blit(&self.text, rect, style, canvas);
    }
}

/// Displays every element of a `Vec` through its [`Display`] form.
pub struct MultiValueView<T> {
    target: Weak<RefCell<Vec<T>>>,
    style: Option<Rc<Style>>,
    texts: Vec<PrerenderedText>,
}

impl<T> Default for MultiValueView<T> {
    fn default() -> Self {
        Self {
            target: Weak::new(),
            style: None,
            texts: Vec::new(),
        }
    }
}

impl<T> fmt::Debug for MultiValueView<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MultiValueView")
            .field("bound", &(self.target.strong_count() > 0))
            .field("cached", &self.texts.len())
            .finish_non_exhaustive()
    }
}

impl<T: Display> MultiValueView<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_target(&mut self, target: &Rc<RefCell<Vec<T>>>) {
        self.target = Rc::downgrade(target);
    }

    pub fn set_style(&mut self, style: Rc<Style>) {
        self.style = Some(style);
    }
}

impl<T: Display> MultiValueProxy for MultiValueView<T> {
    fn update(&mut self) {
        self.texts = match (self.target.upgrade(), &self.style) {
            (Some(target), Some(style)) => target.borrow().iter().map(|v| render(v, style)).collect(),
            _ => Vec::new(),
        };
    }

    fn n_elems(&self) -> usize {
        self.target.upgrade().map_or(0, |t| t.borrow().len())
    }

    fn elem_size(&self, index: usize) -> Size {
        self.texts.get(index).map(PrerenderedText::size).unwrap_or_default()
    }

    fn draw_elem(&self, index: usize, rect: Rect, canvas: &mut dyn Canvas) {
        let (Some(style), Some(text)) = (&self.style, self.texts.get(index)) else {
            return;
        };
        if let Some(bg) = style.background {
            canvas.filled_rect(rect, bg);
        }
        blit(text, rect, style, canvas);
    }
}

/// Proxy for `target` rendered with `style`.
pub fn view_value<T: Display>(target: &Rc<RefCell<T>>, style: &Rc<Style>) -> ValueView<T> {
    let mut view = ValueView::new();
    view.set_target(target);
    view.set_style(Rc::clone(style));
    view
}

/// Proxy for every element of `target` rendered with `style`.
pub fn view_multi_value<T: Display>(target: &Rc<RefCell<Vec<T>>>, style: &Rc<Style>) -> MultiValueView<T> {
    let mut view = MultiValueView::new();
    view.set_target(target);
    view.set_style(Rc::clone(style));
    view
}
