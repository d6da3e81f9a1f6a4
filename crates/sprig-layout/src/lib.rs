//! Layout computation for sprig widget trees.
//!
//! Every node owns one geometry-policy object. Each frame the policy is
//! driven through three steps, always in this order:
//!
//! 1. **Measure** ([`LayoutStrategy::content_size`]): pure, derived from the
//!    children's reported sizes. Safe to call speculatively.
//! 2. **Update** ([`LayoutStrategy::update`]): commits `rect`/`content`.
//!    `BottomUp` nodes derive their rect from the measured content, `TopDown`
//!    nodes split the rect their parent assigned and update each child
//!    right away.
//! 3. **Realign** ([`LayoutStrategy::realign`]): places the node at the
//!    parent-dictated origin and walks the children with an advancing cursor.
//!
//! Strategies never see concrete widget types. They reach children only
//! through the [`ChildProvider`] capability trait, so the same list
//! algorithm drives static lists, data-bound lists and fixed composites.
//!
//! # Example
//!
//! ```
//! use sprig_core::{Pos, Size, Sizing};
//! use sprig_layout::{LayoutStrategy, SingleElementLayout, Terminal};
//!
//! let mut single = SingleElementLayout::default();
//! single.layout_mut().sz = Sizing::BottomUp;
//! let mut text = Terminal(Size::new(40, 12));
//! single.update(&mut text);
//! single.realign(Pos::new(100, 100), Size::ZERO, &mut text);
//! assert_eq!(single.layout().content.size(), Size::new(40, 12));
//! ```

mod layout;
mod list;
mod provider;
mod single;

pub use layout::Layout;
pub use list::{compute_bounds_of, ListBounds, ListLayout};
pub use provider::{ChildProvider, LayoutStrategy, Placeholders, Terminal};
pub use single::{ElementCells, SingleElementLayout};
