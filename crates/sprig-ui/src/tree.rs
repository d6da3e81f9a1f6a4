//! Widget storage.
//!
//! Widgets live in an arena and refer to each other by [`WidgetId`]. The
//! tree does not decide what is drawn where; it only hands widgets their
//! children while a pass runs.

use indexmap::IndexMap;
use sprig_core::errors::TreeError;
use sprig_core::geometry::{Pos, Size};
use sprig_layout::{ChildProvider, Layout};
use sprig_render_2d::Canvas;

use crate::widget::{Node, Widget};

/// Handle to a widget in a [`WidgetTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(usize);

impl WidgetId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Arena of widgets.
#[derive(Debug, Default)]
pub struct WidgetTree {
    /// `None` while a widget is taken out for a pass.
    nodes: Vec<Option<Widget>>,
    parents: Vec<Option<WidgetId>>,
    names: IndexMap<String, WidgetId>,
}

impl WidgetTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, widget: impl Into<Widget>) -> WidgetId {
        let id = WidgetId(self.nodes.len());
        self.nodes.push(Some(widget.into()));
        self.parents.push(None);
        id
    }

    /// Insert and register under `name`. A name already in use is moved to
    /// the new widget.
    pub fn insert_named(&mut self, name: impl Into<String>, widget: impl Into<Widget>) -> WidgetId {
        let id = self.insert(widget);
        self.names.insert(name.into(), id);
        id
    }

    pub fn find(&self, name: &str) -> Option<WidgetId> {
        self.names.get(name).copied()
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = (&str, WidgetId)> {
        self.names.iter().map(|(n, &id)| (n.as_str(), id))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: WidgetId) -> Option<&Widget> {
        self.nodes.get(id.0)?.as_ref()
    }

    pub fn get_mut(&mut self, id: WidgetId) -> Option<&mut Widget> {
        self.nodes.get_mut(id.0)?.as_mut()
    }

    pub fn parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.parents.get(id.0).copied().flatten()
    }

    /// Append `child` to the children of the list widget `list`.
    pub fn attach(&mut self, list: WidgetId, child: WidgetId) -> Result<(), TreeError> {
        if self.get(child).is_none() {
            return Err(TreeError::UnknownWidget { id: child.0 });
        }
        match self.get(list) {
            None => return Err(TreeError::UnknownWidget { id: list.0 }),
            Some(w) if w.as_list().is_none() => return Err(TreeError::NotAContainer { id: list.0 }),
            Some(_) => {}
        }
        if let Some(parent) = self.parent(child) {
            return Err(TreeError::AlreadyAttached {
                child: child.0,
                parent: parent.0,
            });
        }

        let mut cursor = Some(list);
        while let Some(id) = cursor {
            if id == child {
                return Err(TreeError::CycleDetected {
                    parent: list.0,
                    child: child.0,
                });
            }
            cursor = self.parent(id);
        }

        if let Some(l) = self.get_mut(list).and_then(Widget::as_list_mut) {
            l.push_child(child);
        }
        self.parents[child.0] = Some(list);
        Ok(())
    }

    pub fn layout(&self, id: WidgetId) -> Option<&Layout> {
        self.get(id).map(|w| w.layout())
    }

    pub fn layout_mut(&mut self, id: WidgetId) -> Option<&mut Layout> {
        self.get_mut(id).map(|w| w.layout_mut())
    }

    /// Preferred outer size; zero for an unknown id.
    pub fn preferred_size(&self, id: WidgetId) -> Size {
        self.get(id).map(|w| w.preferred_size(self)).unwrap_or_default()
    }

    pub fn update_content(&mut self, id: WidgetId) {
        self.with_taken(id, |w, tree| w.update_content(tree));
    }

    pub fn realign(&mut self, id: WidgetId, pos: Pos, outer: Size) {
        self.with_taken(id, |w, tree| w.realign(tree, pos, outer));
    }

    pub fn draw(&self, id: WidgetId, canvas: &mut dyn Canvas) {
        if let Some(w) = self.get(id) {
            w.draw(self, canvas);
        }
    }

    /// Deepest widget under `root` whose rect contains `pos`. Later
    /// children win over earlier ones.
    pub fn hit_test(&self, root: WidgetId, pos: Pos) -> Option<WidgetId> {
        let widget = self.get(root)?;
        if !widget.layout().rect.contains(pos) {
            return None;
        }
        if let Some(list) = widget.as_list() {
            for &child in list.children().iter().rev() {
                if let Some(hit) = self.hit_test(child, pos) {
                    return Some(hit);
                }
            }
        }
        Some(root)
    }

    /// Run `f` on a widget while it is out of the arena, so it can reach
    /// its children through `&mut self`.
    fn with_taken(&mut self, id: WidgetId, f: impl FnOnce(&mut Widget, &mut WidgetTree)) {
        let Some(mut widget) = self.nodes.get_mut(id.0).and_then(Option::take) else {
            return;
        };
        f(&mut widget, self);
        self.nodes[id.0] = Some(widget);
    }
}

/// A slice of tree widgets seen as the children of one layout.
pub(crate) struct TreeChildren<'a> {
    pub tree: &'a mut WidgetTree,
    pub ids: &'a [WidgetId],
}

impl TreeChildren<'_> {
    fn id(&self, index: usize) -> Option<WidgetId> {
        self.ids.get(index).copied()
    }
}

impl ChildProvider for TreeChildren<'_> {
    fn count(&self) -> usize {
        self.ids.len()
    }

    fn child_size(&self, index: usize) -> Size {
        self.id(index).map(|id| self.tree.preferred_size(id)).unwrap_or_default()
    }

    fn child_layout(&self, index: usize) -> Option<&Layout> {
        self.tree.layout(self.id(index)?)
    }

    fn child_layout_mut(&mut self, index: usize) -> Option<&mut Layout> {
        let id = self.id(index)?;
        self.tree.layout_mut(id)
    }

    fn update_child(&mut self, index: usize) {
        if let Some(id) = self.id(index) {
            self.tree.update_content(id);
        }
    }

    fn realign_child(&mut self, index: usize, pos: Pos, outer: Size) {
        if let Some(id) = self.id(index) {
            self.tree.realign(id, pos, outer);
        }
    }
}
