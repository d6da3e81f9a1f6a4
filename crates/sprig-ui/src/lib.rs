//! Widgets and the frame driver for the sprig UI toolkit.
//!
//! Applications keep ownership of their data. Widgets watch it through
//! value proxies and re-render it once per frame.
//!
//! # Architecture
//!
//! 1. **Tree**: widgets live in a [`WidgetTree`] arena; lists hold child ids.
//! 2. **Proxies**: [`ValueView`]/[`MultiValueView`] turn values into cached
//!    bitmaps during update.
//! 3. **Frame**: [`run_frame`] runs update, realign and draw on a subtree.
//!
//! # Example
//!
//! ```
//! # fn main() -> Result<(), sprig_core::SprigError> {
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use sprig_core::{Pos, Size};
//! use sprig_render_2d::SoftwareRenderer;
//! use sprig_text::BlockFont;
//! use sprig_ui::{run_frame, view_value, Leaf, List, Style, WidgetTree};
//!
//! let style = Rc::new(Style::new(Rc::new(BlockFont), 16.0));
//! let counter = Rc::new(RefCell::new(0u32));
//!
//! let mut tree = WidgetTree::new();
//! let root = tree.insert(List::new());
//! let leaf = tree.insert(Leaf::with_proxy(view_value(&counter, &style)));
//! tree.attach(root, leaf)?;
//!
//! let mut canvas = SoftwareRenderer::new(320, 240);
//! run_frame(&mut tree, root, Pos::new(160, 120), Size::ZERO, &mut canvas);
//! # Ok(())
//! # }
//! ```

pub mod frame;
pub mod proxy;
pub mod style;
pub mod tree;
pub mod widget;

pub use frame::{run_frame, App, ButtonState, Control, Event, EventLoop, MouseButton, RunSummary};
pub use proxy::{view_multi_value, view_value, MultiValueProxy, MultiValueView, ValueProxy, ValueView};
pub use style::{ConfigError, FrameColors, Style, StyleConfig};
pub use tree::{WidgetId, WidgetTree};
pub use widget::{CellList, Col2, Leaf, List, ListData, Node, StaticText, TitleAndTwoCols, TwoRows, Widget};
