//! Frame driver and the platform event boundary.
//!
//! A frame is three passes over the widget tree, always run to completion
//! in order: update, realign, draw. Events arrive one at a time through
//! [`EventLoop`]; nothing here talks to a real window system.

use sprig_core::geometry::{Pos, Size};
use sprig_render_2d::Canvas;

use crate::tree::{WidgetId, WidgetTree};

/// Run one full frame for the subtree at `root`, placed inside
/// `Rect { pos, outer }`.
pub fn run_frame(tree: &mut WidgetTree, root: WidgetId, pos: Pos, outer: Size, canvas: &mut dyn Canvas) {
    {
        let _span = tracing::debug_span!("update", root = root.index()).entered();
        tree.update_content(root);
    }
    {
        let _span = tracing::debug_span!("realign", root = root.index()).entered();
        tree.realign(root, pos, outer);
    }
    let _span = tracing::debug_span!("draw", root = root.index()).entered();
    tree.draw(root, canvas);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Other(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonState {
    Pressed,
    Released,
}

/// Input delivered by the platform layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    MouseMove { pos: Pos },
    MouseButton { pos: Pos, button: MouseButton, state: ButtonState },
    Scroll { pos: Pos, delta: Pos },
    Char(char),
    /// A non-character key, by platform key code.
    Key { code: u32, pressed: bool },
    Resize { w: i32, h: i32, minimized: bool },
    ExitRequest,
    Idle,
    /// The platform needs the window contents now.
    Paint,
}

/// What the application wants after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Control {
    #[default]
    Continue,
    Redraw,
    Quit,
}

/// An application driven by [`EventLoop`].
pub trait App {
    fn on_event(&mut self, event: &Event) -> Control;

    fn render(&mut self, canvas: &mut dyn Canvas);
}

/// Outcome of [`EventLoop::run`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub events: usize,
    pub frames: usize,
    pub quit: bool,
}

/// Sequential event dispatch.
#[derive(Debug, Default)]
pub struct EventLoop {
    summary: RunSummary,
}

impl EventLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed `events` to `app` in order until it quits or input runs out.
    ///
    /// `Paint` renders without consulting the app first; any other event
    /// renders only when the app answers [`Control::Redraw`].
    pub fn run(
        mut self,
        events: impl IntoIterator<Item = Event>,
        app: &mut dyn App,
        canvas: &mut dyn Canvas,
    ) -> RunSummary {
        for event in events {
            self.summary.events += 1;
            let control = match event {
                Event::Paint => Control::Redraw,
                ref e => app.on_event(e),
            };
            match control {
                Control::Continue => {}
                Control::Redraw => {
                    app.render(canvas);
                    self.summary.frames += 1;
                }
                Control::Quit => {
                    tracing::debug!(events = self.summary.events, "Event loop stopped");
                    self.summary.quit = true;
                    break;
                }
            }
        }
        self.summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use sprig_core::color::Color8;
    use sprig_render_2d::SoftwareRenderer;
    use sprig_text::BlockFont;

    use crate::proxy::view_value;
    use crate::style::{FrameColors, Style};
    use crate::widget::{Leaf, List};

    #[derive(Default)]
    struct Recorder {
        seen: Vec<Event>,
        renders: usize,
    }

    impl App for Recorder {
        fn on_event(&mut self, event: &Event) -> Control {
            self.seen.push(event.clone());
            match event {
                Event::ExitRequest => Control::Quit,
                Event::Resize { minimized: false, .. } | Event::Char(_) => Control::Redraw,
                _ => Control::Continue,
            }
        }

        fn render(&mut self, canvas: &mut dyn Canvas) {
            self.renders += 1;
            canvas.filled_rect(sprig_core::geometry::Rect::new(0, 0, 1, 1), Color8::BLACK);
        }
    }

    #[test]
    fn test_paint_renders_without_dispatch() {
        let mut app = Recorder::default();
        let mut canvas = SoftwareRenderer::new(4, 4);
        let summary = EventLoop::new().run([Event::Paint, Event::Idle], &mut app, &mut canvas);

        assert_eq!(summary, RunSummary { events: 2, frames: 1, quit: false });
        assert_eq!(app.seen, [Event::Idle]);
        assert_eq!(canvas.pixel(0, 0), Some(Color8::BLACK));
    }

    #[test]
    fn test_quit_stops_dispatch() {
        let mut app = Recorder::default();
        let mut canvas = SoftwareRenderer::new(4, 4);
        let events = [
            Event::Resize { w: 10, h: 10, minimized: true },
            Event::Char('q'),
            Event::ExitRequest,
            Event::Paint,
        ];
        let summary = EventLoop::new().run(events, &mut app, &mut canvas);

        assert!(summary.quit);
        assert_eq!(summary.events, 3);
        assert_eq!(app.renders, 1);
        assert_eq!(app.seen.len(), 3);
    }

    #[test]
    fn test_run_frame_sees_current_values() {
        let mut tree = WidgetTree::new();
        let style = Rc::new(Style::new(Rc::new(BlockFont), 16.0));
        let value = Rc::new(RefCell::new(5));

        let root = tree.insert(List::new());
        let leaf = tree.insert(Leaf::with_proxy(view_value(&value, &style)));
        tree.attach(root, leaf).unwrap();

        let mut canvas = SoftwareRenderer::new(200, 200);
        run_frame(&mut tree, root, Pos::new(100, 100), Size::ZERO, &mut canvas);
        let narrow = tree.layout(leaf).unwrap().content.w;
        let rect = tree.layout(root).unwrap().rect;
        assert_eq!(canvas.pixel(rect.x, rect.y), Some(FrameColors::CONTAINER.edge));

        *value.borrow_mut() = 123_456;
        run_frame(&mut tree, root, Pos::new(100, 100), Size::ZERO, &mut canvas);
        assert_eq!(tree.layout(leaf).unwrap().content.w, narrow + 5 * 8);
    }
}
