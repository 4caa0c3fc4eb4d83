use std::{
    any::{Any, type_name},
    rc::Rc,
};

use tracing::{debug, debug_span};

use crate::{
    Context,
    core::{
        canvas::Canvas,
        config::SceneConfig,
        context::CoreContext,
        dump,
        event::InputSample,
        font::{BlockFont, FontBackend},
        id::{NodeId, TypedId},
        node::Node,
        world::Core,
    },
    error::{Error, Result},
    geom::{Expanse, Point, Rect},
    widget::{Element, Widget},
};

/// The scene root: an ordered list of top-level widgets and the per-frame
/// layout, routing and paint cycle that drives them.
///
/// Top-level widgets each receive the whole surface and are painted in
/// insertion order.
pub struct Scene {
    /// Arena, router state and layout engine.
    core: Core,
    /// Frames ticked so far.
    frames: u64,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// An empty scene using the built-in block font and default config.
    pub fn new() -> Self {
        Self::with_parts(BlockFont, SceneConfig::default())
    }

    /// An empty scene with an explicit font and config.
    pub fn with_parts(font: impl FontBackend + 'static, config: SceneConfig) -> Self {
        Self {
            core: Core::new(Rc::new(font), config),
            frames: 0,
        }
    }

    /// Replace the font. Forces a relayout.
    pub fn set_font(&mut self, font: impl FontBackend + 'static) {
        self.core.font = Rc::new(font);
        self.core.layout_dirty = true;
    }

    /// The scene configuration.
    pub fn config(&self) -> &SceneConfig {
        &self.core.config
    }

    /// Replace the configuration. Forces a relayout.
    pub fn set_config(&mut self, config: SceneConfig) {
        self.core.config = config;
        self.core.layout_dirty = true;
    }

    /// Read access to the arena.
    pub fn core(&self) -> &Core {
        &self.core
    }

    /// Add a top-level widget (with any children) at the front of the paint order.
    pub fn add(&mut self, element: impl Into<Element>) -> NodeId {
        let id = self.core.build(element.into());
        self.core.roots.push(id);
        debug!(?id, "added top-level node");
        id
    }

    /// Add a top-level widget and return a typed handle to it.
    pub fn add_typed<W: Widget>(&mut self, widget: W) -> TypedId<W> {
        TypedId::new(self.add(widget))
    }

    /// Add a subtree as the last child of `parent`.
    pub fn add_child(&mut self, parent: NodeId, element: impl Into<Element>) -> Result<NodeId> {
        if self.core.node(parent).is_none() {
            return Err(Error::NotFound(parent));
        }
        let id = self.core.build(element.into());
        self.core.attach(parent, id)?;
        Ok(id)
    }

    /// Add a widget as the last child of `parent` and return a typed handle.
    pub fn add_child_typed<W: Widget>(&mut self, parent: NodeId, widget: W) -> Result<TypedId<W>> {
        self.add_child(parent, widget).map(TypedId::new)
    }

    /// Remove a node and its subtree.
    pub fn remove(&mut self, node: impl Into<NodeId>) -> Result<()> {
        self.core.remove_subtree(node.into())
    }

    /// Remove every widget.
    pub fn clear(&mut self) {
        self.core.clear();
    }

    /// Hide or show a node.
    pub fn set_hidden(&mut self, node: impl Into<NodeId>, hidden: bool) -> bool {
        self.core.set_hidden(node.into(), hidden)
    }

    /// Make a node visible or invisible to hit-testing.
    pub fn set_interactive(&mut self, node: impl Into<NodeId>, interactive: bool) -> Result<()> {
        self.core.set_interactive(node.into(), interactive)
    }

    /// Top-level nodes in paint order.
    pub fn roots(&self) -> &[NodeId] {
        self.core.roots()
    }

    /// Look up a node.
    pub fn node(&self, node: impl Into<NodeId>) -> Option<&Node> {
        self.core.node(node.into())
    }

    /// A node's assigned rectangle.
    pub fn rect(&self, node: impl Into<NodeId>) -> Option<Rect> {
        self.core.rect(node.into())
    }

    /// Children of a node.
    pub fn children(&self, node: impl Into<NodeId>) -> Vec<NodeId> {
        self.core.children(node.into())
    }

    /// The child of `node` at `index`.
    pub fn child_at(&self, node: impl Into<NodeId>, index: usize) -> Result<NodeId> {
        let node = node.into();
        if self.core.node(node).is_none() {
            return Err(Error::NotFound(node));
        }
        self.core
            .children(node)
            .get(index)
            .copied()
            .ok_or_else(|| Error::Invalid(format!("node has no child at index {index}")))
    }

    /// Borrow a widget of type `W`.
    pub fn widget<W: Widget>(&self, node: impl Into<NodeId>) -> Option<&W> {
        let widget = self.core.widget(node.into())?;
        (widget as &dyn Any).downcast_ref::<W>()
    }

    /// Mutate a widget of type `W`. The closure also receives a context bound
    /// to the node, so it can emit signals or reach other widgets. Any
    /// mutable access schedules a relayout.
    pub fn with_widget<W, R>(
        &mut self,
        node: impl Into<NodeId>,
        f: impl FnOnce(&mut W, &mut dyn Context) -> R,
    ) -> Result<R>
    where
        W: Widget,
    {
        let node = node.into();
        self.core.layout_dirty = true;
        self.core.with_widget_mut(node, |widget, core| {
            let any = widget as &mut dyn Any;
            let widget = any
                .downcast_mut::<W>()
                .ok_or_else(|| Error::Invalid(format!("expected widget type {}", type_name::<W>())))?;
            let mut ctx = CoreContext::new(core, node);
            Ok(f(widget, &mut ctx))
        })?
    }

    /// Move keyboard focus. Nodes that are not both focusable and
    /// interactive clear focus.
    pub fn set_focus(&mut self, node: Option<NodeId>) {
        self.core.set_focus(node);
    }

    /// The focused node.
    pub fn focused(&self) -> Option<NodeId> {
        self.core.input.focused()
    }

    /// The hovered node.
    pub fn hovered(&self) -> Option<NodeId> {
        self.core.input.hovered()
    }

    /// The pressed node.
    pub fn pressed(&self) -> Option<NodeId> {
        self.core.input.pressed()
    }

    /// Topmost interactive node at a point, as of the last layout.
    pub fn locate(&self, p: Point) -> Option<NodeId> {
        self.core.locate(p)
    }

    /// Notify the scene of a new surface size. Layout reruns on the next tick.
    pub fn resize(&mut self, size: Expanse) {
        if size != self.core.size {
            self.core.layout_dirty = true;
        }
        self.core.size = size;
    }

    /// The surface size of the most recent layout or resize.
    pub fn size(&self) -> Expanse {
        self.core.size
    }

    /// Request a full relayout on the next tick.
    pub fn invalidate(&mut self) {
        self.core.layout_dirty = true;
    }

    /// Run layout now if anything is dirty.
    pub fn layout(&mut self, size: Expanse) {
        self.resize(size);
        if self.core.layout_dirty {
            self.core.update_layout(size);
        }
    }

    /// Frames ticked so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// One frame: lay out if dirty or resized, route the input sample, lay
    /// out again if routing changed anything, then paint into `canvas`.
    ///
    /// Nothing here fails the frame. Widgets that cannot be reached are
    /// skipped and logged.
    pub fn tick(&mut self, input: &InputSample, size: Expanse, canvas: &mut Canvas) {
        let _span = debug_span!("tick", frame = self.frames).entered();
        canvas.resize(size);
        self.layout(size);
        self.core.route(input);
        if self.core.layout_dirty && self.core.config.relayout_on_input {
            self.core.update_layout(size);
        }
        self.core.paint(canvas);
        self.frames += 1;
    }

    /// A textual dump of the tree, for debugging.
    pub fn dump(&self) -> Result<String> {
        dump::dump(&self.core)
    }
}
