use std::any::{Any, type_name};

use tracing::warn;

use crate::{
    core::{
        config::SceneConfig,
        font::FontBackend,
        id::{NodeId, TypedId},
        world::Core,
    },
    error::{Error, Result},
    geom::{Point, Rect},
    widget::{Element, Widget},
};

/// Read-only view of the scene from the perspective of one node.
pub trait ViewContext {
    /// The node this context is bound to.
    fn node_id(&self) -> NodeId;

    /// A node's assigned rectangle, if it exists.
    fn node_rect(&self, node: NodeId) -> Option<Rect>;

    /// This node's assigned rectangle.
    fn rect(&self) -> Rect {
        self.node_rect(self.node_id()).unwrap_or_default()
    }

    /// Children of a node, in paint order.
    fn children_of(&self, node: NodeId) -> Vec<NodeId>;

    /// Children of this node.
    fn children(&self) -> Vec<NodeId> {
        self.children_of(self.node_id())
    }

    /// Parent of a node.
    fn parent_of(&self, node: NodeId) -> Option<NodeId>;

    /// Pointer position from the current input sample.
    fn pointer(&self) -> Point;

    /// The hovered node.
    fn hovered(&self) -> Option<NodeId>;

    /// The pressed node.
    fn pressed(&self) -> Option<NodeId>;

    /// The focused node.
    fn focused(&self) -> Option<NodeId>;

    /// Is this node hovered?
    fn is_hovered(&self) -> bool {
        self.hovered() == Some(self.node_id())
    }

    /// Is this node pressed?
    fn is_pressed(&self) -> bool {
        self.pressed() == Some(self.node_id())
    }

    /// Does this node hold focus?
    fn is_focused(&self) -> bool {
        self.focused() == Some(self.node_id())
    }

    /// The scene font.
    fn font(&self) -> &dyn FontBackend;

    /// The scene configuration.
    fn config(&self) -> &SceneConfig;
}

/// Mutable access to the scene, handed to event handlers and signal slots.
pub trait Context: ViewContext {
    /// Run a closure with mutable access to a widget and a context bound to
    /// it. Fails with [`Error::Reentrant`] if the widget is already borrowed,
    /// which is always the case for the widget currently handling an event.
    fn with_widget_mut(
        &mut self,
        node: NodeId,
        f: &mut dyn FnMut(&mut dyn Widget, &mut dyn Context) -> Result<()>,
    ) -> Result<()>;

    /// Add a detached widget node.
    fn add(&mut self, widget: Box<dyn Widget>) -> NodeId;

    /// Add a detached subtree.
    fn build(&mut self, element: Element) -> NodeId;

    /// Attach a detached node as the last child of `parent`.
    fn mount_child_to(&mut self, parent: NodeId, child: NodeId) -> Result<()>;

    /// Remove a node and its subtree. Hover, press and focus references into
    /// the subtree are cleared.
    fn remove(&mut self, node: NodeId) -> Result<()>;

    /// Hide or show a node. Returns true if visibility changed.
    fn set_hidden(&mut self, node: NodeId, hidden: bool) -> bool;

    /// Request a full relayout before the next paint.
    fn invalidate(&mut self);

    /// Drop focus if this node holds it. No focus event is delivered; the
    /// caller updates its own state. Returns true if focus was held.
    fn release_focus(&mut self) -> bool;
}

impl dyn Context + '_ {
    /// Borrow the widget at `node` as a `W` for the duration of `f`.
    pub fn with_widget<W, R>(
        &mut self,
        node: NodeId,
        mut f: impl FnMut(&mut W, &mut dyn Context) -> R,
    ) -> Result<R>
    where
        W: Widget,
    {
        let mut output = None;
        self.with_widget_mut(node, &mut |widget, ctx| {
            let any = widget as &mut dyn Any;
            let widget = any.downcast_mut::<W>().ok_or_else(|| {
                Error::Invalid(format!("expected widget type {}", type_name::<W>()))
            })?;
            output = Some(f(widget, ctx));
            Ok(())
        })?;
        output.ok_or_else(|| Error::Internal("widget closure did not run".into()))
    }

    /// Like [`with_widget`](Self::with_widget), for a typed handle.
    pub fn with_typed<W, R>(
        &mut self,
        node: TypedId<W>,
        f: impl FnMut(&mut W, &mut dyn Context) -> R,
    ) -> Result<R>
    where
        W: Widget,
    {
        self.with_widget(node.into(), f)
    }

    /// Add a widget as a child of this node.
    pub fn add_child(&mut self, child: impl Into<Element>) -> Result<NodeId> {
        let parent = self.node_id();
        self.add_child_to(parent, child)
    }

    /// Add a widget as a child of a specific parent. If the parent cannot
    /// take the child, the freshly built subtree is removed again.
    pub fn add_child_to(&mut self, parent: NodeId, child: impl Into<Element>) -> Result<NodeId> {
        let id = self.build(child.into());
        if let Err(e) = self.mount_child_to(parent, id) {
            if let Err(cleanup) = self.remove(id) {
                warn!(?id, %cleanup, "could not discard unmounted subtree");
            }
            return Err(e);
        }
        Ok(id)
    }
}

/// Mutable scene access scoped to one node, used during dispatch.
pub struct CoreContext<'a> {
    /// Core state reference.
    core: &'a mut Core,
    /// The node events are being delivered to.
    node_id: NodeId,
}

impl<'a> CoreContext<'a> {
    /// Bind a context to `node_id`.
    pub fn new(core: &'a mut Core, node_id: NodeId) -> Self {
        Self { core, node_id }
    }
}

impl ViewContext for CoreContext<'_> {
    fn node_id(&self) -> NodeId {
        self.node_id
    }

    fn node_rect(&self, node: NodeId) -> Option<Rect> {
        self.core.rect(node)
    }

    fn children_of(&self, node: NodeId) -> Vec<NodeId> {
        self.core.children(node)
    }

    fn parent_of(&self, node: NodeId) -> Option<NodeId> {
        self.core.parent(node)
    }

    fn pointer(&self) -> Point {
        self.core.input.pointer()
    }

    fn hovered(&self) -> Option<NodeId> {
        self.core.input.hovered()
    }

    fn pressed(&self) -> Option<NodeId> {
        self.core.input.pressed()
    }

    fn focused(&self) -> Option<NodeId> {
        self.core.input.focused()
    }

    fn font(&self) -> &dyn FontBackend {
        self.core.font()
    }

    fn config(&self) -> &SceneConfig {
        &self.core.config
    }
}

impl Context for CoreContext<'_> {
    fn with_widget_mut(
        &mut self,
        node: NodeId,
        f: &mut dyn FnMut(&mut dyn Widget, &mut dyn Context) -> Result<()>,
    ) -> Result<()> {
        self.core.layout_dirty = true;
        self.core.with_widget_mut(node, |widget, core| {
            let mut ctx = CoreContext::new(core, node);
            f(widget, &mut ctx)
        })?
    }

    fn add(&mut self, widget: Box<dyn Widget>) -> NodeId {
        self.core.add(widget)
    }

    fn build(&mut self, element: Element) -> NodeId {
        self.core.build(element)
    }

    fn mount_child_to(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        self.core.attach(parent, child)
    }

    fn remove(&mut self, node: NodeId) -> Result<()> {
        self.core.remove_subtree(node)
    }

    fn set_hidden(&mut self, node: NodeId, hidden: bool) -> bool {
        self.core.set_hidden(node, hidden)
    }

    fn invalidate(&mut self) {
        self.core.layout_dirty = true;
    }

    fn release_focus(&mut self) -> bool {
        if self.core.input.focused() == Some(self.node_id) {
            self.core.input.focused = None;
            return true;
        }
        false
    }
}

/// Read-only context used while painting.
pub struct CoreView<'a> {
    /// Core state reference.
    core: &'a Core,
    /// Node bound to this view.
    node_id: NodeId,
}

impl<'a> CoreView<'a> {
    /// Bind a view to `node_id`.
    pub fn new(core: &'a Core, node_id: NodeId) -> Self {
        Self { core, node_id }
    }
}

impl ViewContext for CoreView<'_> {
    fn node_id(&self) -> NodeId {
        self.node_id
    }

    fn node_rect(&self, node: NodeId) -> Option<Rect> {
        self.core.rect(node)
    }

    fn children_of(&self, node: NodeId) -> Vec<NodeId> {
        self.core.children(node)
    }

    fn parent_of(&self, node: NodeId) -> Option<NodeId> {
        self.core.parent(node)
    }

    fn pointer(&self) -> Point {
        self.core.input.pointer()
    }

    fn hovered(&self) -> Option<NodeId> {
        self.core.input.hovered()
    }

    fn pressed(&self) -> Option<NodeId> {
        self.core.input.pressed()
    }

    fn focused(&self) -> Option<NodeId> {
        self.core.input.focused()
    }

    fn font(&self) -> &dyn FontBackend {
        self.core.font()
    }

    fn config(&self) -> &SceneConfig {
        &self.core.config
    }
}
