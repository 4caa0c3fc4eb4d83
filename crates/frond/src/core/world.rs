use std::{collections::HashSet, rc::Rc};

use slotmap::SlotMap;
use tracing::{debug, trace, warn};

use crate::{
    core::{
        canvas::Canvas,
        config::SceneConfig,
        context::{CoreContext, CoreView},
        event::{Event, InputSample},
        font::FontBackend,
        id::NodeId,
        node::Node,
        router::{self, InputState},
    },
    error::{Error, Result},
    geom::{Expanse, Point, Rect},
    layout::{Constraints, LayoutContext},
    widget::{Element, EventOutcome, Widget},
};

/// The node arena and everything that operates on the whole tree: structure
/// edits, layout, painting and hit-testing.
pub struct Core {
    /// Node storage.
    pub(crate) nodes: SlotMap<NodeId, Node>,
    /// Top-level nodes in paint order.
    pub(crate) roots: Vec<NodeId>,
    /// Pointer, hover, press and focus state.
    pub(crate) input: InputState,
    /// Font used for text measurement and painting.
    pub(crate) font: Rc<dyn FontBackend>,
    /// Scene-wide defaults.
    pub(crate) config: SceneConfig,
    /// Set when the tree or a widget's size may have changed.
    pub(crate) layout_dirty: bool,
    /// Surface size used by the most recent layout.
    pub(crate) size: Expanse,
}

impl Core {
    /// Create an empty core.
    pub fn new(font: Rc<dyn FontBackend>, config: SceneConfig) -> Self {
        Self {
            nodes: SlotMap::with_key(),
            roots: Vec::new(),
            input: InputState::default(),
            font,
            config,
            layout_dirty: true,
            size: Expanse::zero(),
        }
    }

    /// The scene font.
    pub fn font(&self) -> &dyn FontBackend {
        self.font.as_ref()
    }

    /// Look up a node.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// A node's assigned rectangle.
    pub fn rect(&self, id: NodeId) -> Option<Rect> {
        self.nodes.get(id).map(|n| n.rect)
    }

    /// A node's children, or nothing if the node does not exist.
    pub fn children(&self, id: NodeId) -> Vec<NodeId> {
        self.nodes
            .get(id)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    /// A node's parent.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id).and_then(|n| n.parent)
    }

    /// Top-level nodes in paint order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Number of live nodes, attached or not.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Is the arena empty?
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Insert a detached node and run its mount hook.
    pub fn add(&mut self, widget: Box<dyn Widget>) -> NodeId {
        let id = self.nodes.insert(Node::new(widget));
        let mounted = self
            .with_widget_mut(id, |w, core| w.on_mount(&mut CoreContext::new(core, id)))
            .and_then(|r| r);
        if let Err(e) = mounted {
            warn!(?id, error = %e, "mount hook failed");
        }
        self.layout_dirty = true;
        id
    }

    /// Insert a detached subtree.
    pub fn build(&mut self, element: Element) -> NodeId {
        let Element { widget, children } = element;
        let id = self.add(widget);
        for child in children {
            let child_id = self.build(child);
            if let Some(node) = self.nodes.get_mut(child_id) {
                node.parent = Some(id);
            }
            if let Some(node) = self.nodes.get_mut(id) {
                node.children.push(child_id);
            }
        }
        id
    }

    /// Is `ancestor` on the parent chain of `node`, or `node` itself?
    pub fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut cur = Some(node);
        while let Some(id) = cur {
            if id == ancestor {
                return true;
            }
            cur = self.parent(id);
        }
        false
    }

    /// Is the node attached, directly or through its ancestors, to the top-level list?
    pub fn is_attached(&self, node: NodeId) -> bool {
        let mut cur = node;
        while let Some(parent) = self.parent(cur) {
            cur = parent;
        }
        self.nodes.contains_key(cur) && self.roots.contains(&cur)
    }

    /// Check that `child` exists and is free to be attached somewhere.
    fn check_detached(&self, child: NodeId) -> Result<()> {
        let node = self.nodes.get(child).ok_or(Error::NotFound(child))?;
        if node.parent.is_some() || self.roots.contains(&child) {
            return Err(Error::Invalid("node is already attached".into()));
        }
        Ok(())
    }

    /// Attach a detached node as the last child of `parent`.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) -> Result<()> {
        if !self.nodes.contains_key(parent) {
            return Err(Error::NotFound(parent));
        }
        self.check_detached(child)?;
        if self.is_ancestor(child, parent) {
            return Err(Error::Invalid("attaching a node under itself".into()));
        }
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);
        self.layout_dirty = true;
        Ok(())
    }

    /// Append a detached node to the top-level list.
    pub fn attach_root(&mut self, node: NodeId) -> Result<()> {
        self.check_detached(node)?;
        self.roots.push(node);
        self.layout_dirty = true;
        Ok(())
    }

    /// Detach a node from its parent or the top-level list. The subtree stays
    /// in the arena.
    pub fn detach(&mut self, node: NodeId) -> Result<()> {
        let parent = self
            .nodes
            .get(node)
            .ok_or(Error::NotFound(node))?
            .parent;
        match parent {
            Some(parent) => {
                if let Some(p) = self.nodes.get_mut(parent) {
                    p.children.retain(|c| *c != node);
                }
                self.nodes[node].parent = None;
            }
            None => self.roots.retain(|r| *r != node),
        }
        let subtree: HashSet<NodeId> = self.subtree(node).into_iter().collect();
        self.input.forget(|id| subtree.contains(&id));
        self.layout_dirty = true;
        Ok(())
    }

    /// Collect a subtree in pre-order, including the root.
    pub fn subtree(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![root];
        while let Some(id) = stack.pop() {
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            out.push(id);
            for child in node.children.iter().rev() {
                stack.push(*child);
            }
        }
        out
    }

    /// Remove a node and all descendants from the arena.
    pub fn remove_subtree(&mut self, root: NodeId) -> Result<()> {
        self.detach(root)?;
        let doomed = self.subtree(root);
        for id in &doomed {
            self.nodes.remove(*id);
        }
        debug!(?root, count = doomed.len(), "removed subtree");
        Ok(())
    }

    /// Remove every node, attached or not.
    pub fn clear(&mut self) {
        debug!(count = self.nodes.len(), "clearing scene");
        self.nodes.clear();
        self.roots.clear();
        self.input.forget(|_| true);
        self.layout_dirty = true;
    }

    /// Set a node's hidden flag. Hidden subtrees lose hover, press and focus.
    /// Returns `true` if visibility changed.
    pub fn set_hidden(&mut self, node: NodeId, hidden: bool) -> bool {
        let Some(n) = self.nodes.get_mut(node) else {
            return false;
        };
        let changed = n.hidden != hidden;
        n.hidden = hidden;
        if changed {
            if hidden {
                let subtree: HashSet<NodeId> = self.subtree(node).into_iter().collect();
                self.input.forget(|id| subtree.contains(&id));
            }
            self.layout_dirty = true;
        }
        changed
    }

    /// Override whether a node takes part in hit-testing.
    pub fn set_interactive(&mut self, node: NodeId, interactive: bool) -> Result<()> {
        let n = self.nodes.get_mut(node).ok_or(Error::NotFound(node))?;
        n.interactive = interactive;
        if !interactive {
            self.input.forget(|id| id == node);
        }
        Ok(())
    }

    /// Take a widget out of its slot.
    fn take_widget(&mut self, id: NodeId) -> Result<Box<dyn Widget>> {
        self.nodes
            .get_mut(id)
            .ok_or(Error::NotFound(id))?
            .widget
            .take()
            .ok_or(Error::Reentrant(id))
    }

    /// Put a widget back. If the node was removed while the widget was out,
    /// the widget is dropped.
    fn restore_widget(&mut self, id: NodeId, widget: Box<dyn Widget>) {
        if let Some(node) = self.nodes.get_mut(id)
            && node.widget.is_none()
        {
            node.widget = Some(widget);
        }
    }

    /// Take a mutable reference to a widget for a single call.
    pub(crate) fn with_widget_mut<R>(
        &mut self,
        id: NodeId,
        f: impl FnOnce(&mut dyn Widget, &mut Self) -> R,
    ) -> Result<R> {
        let mut widget = self.take_widget(id)?;
        let out = f(widget.as_mut(), self);
        self.restore_widget(id, widget);
        Ok(out)
    }

    /// Borrow a widget immutably.
    pub fn widget(&self, id: NodeId) -> Option<&dyn Widget> {
        self.nodes.get(id).and_then(|n| n.widget.as_deref())
    }

    /// Deliver an event to a single node. Events do not bubble.
    pub fn deliver(&mut self, id: NodeId, event: &Event) -> Result<EventOutcome> {
        let outcome = self.with_widget_mut(id, |w, core| {
            let mut ctx = CoreContext::new(core, id);
            w.on_event(event, &mut ctx)
        })??;
        trace!(?id, ?event, ?outcome, "delivered");
        Ok(outcome)
    }

    /// Deliver an event, logging rather than propagating failure.
    pub(crate) fn notify(&mut self, id: NodeId, event: Event) {
        if let Err(e) = self.deliver(id, &event) {
            warn!(?id, ?event, error = %e, "event delivery failed");
        }
    }

    /// Apply one input sample: hover, press, release, drag, then keyboard.
    pub fn route(&mut self, sample: &InputSample) {
        router::route(self, sample);
    }

    /// Move keyboard focus. Only focusable nodes can hold it.
    pub fn set_focus(&mut self, node: Option<NodeId>) {
        router::set_focus(self, node);
    }

    /// Pointer, hover, press and focus state.
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Measure and arrange every top-level node into a surface of `size`.
    pub fn update_layout(&mut self, size: Expanse) {
        self.size = size;
        let roots = self.roots.clone();
        debug!(?size, roots = roots.len(), "layout");
        for root in roots {
            let mut pass = LayoutPass::new(self, root);
            pass.measure_node(root, Constraints::tight(size));
            pass.arrange_node(root, size.rect());
        }
        self.layout_dirty = false;
    }

    /// Clear the canvas and paint every visible node, back to front.
    pub fn paint(&mut self, canvas: &mut Canvas) {
        canvas.clear(self.config.background);
        for root in self.roots.clone() {
            self.paint_node(root, canvas);
        }
    }

    /// Paint a node, then its children, clipped to the node's rectangle.
    fn paint_node(&mut self, id: NodeId, canvas: &mut Canvas) {
        let Some(node) = self.nodes.get(id) else {
            return;
        };
        if node.hidden || node.rect.is_zero() {
            return;
        }
        let rect = node.rect;
        let children = node.children.clone();
        let prev = canvas.push_clip(rect);
        match self.take_widget(id) {
            Ok(mut widget) => {
                widget.paint(canvas, rect, &CoreView::new(self, id));
                self.restore_widget(id, widget);
            }
            Err(e) => warn!(?id, error = %e, "skipping paint"),
        }
        for child in children {
            self.paint_node(child, canvas);
        }
        canvas.restore_clip(prev);
    }

    /// Find the topmost interactive node at a surface point.
    pub fn locate(&self, p: Point) -> Option<NodeId> {
        let surface = self.size.rect();
        self.roots
            .iter()
            .rev()
            .find_map(|root| self.locate_in(*root, p, surface))
    }

    /// Depth-first, front-to-back search below `id`.
    fn locate_in(&self, id: NodeId, p: Point, clip: Rect) -> Option<NodeId> {
        let node = self.nodes.get(id)?;
        if node.hidden || node.rect.is_zero() {
            return None;
        }
        let clip = node.rect.intersect(&clip)?;
        if !clip.contains_point(p) {
            return None;
        }
        if let Some(hit) = node
            .children
            .iter()
            .rev()
            .find_map(|child| self.locate_in(*child, p, clip))
        {
            return Some(hit);
        }
        let hit = node.interactive && node.widget.as_ref().is_some_and(|w| w.hit(node.rect, p));
        hit.then_some(id)
    }

    /// Is the point inside any visible, interactive, focusable node?
    pub fn within_focusable(&self, p: Point) -> bool {
        let surface = self.size.rect();
        let mut stack: Vec<(NodeId, Rect)> = self.roots.iter().map(|r| (*r, surface)).collect();
        while let Some((id, clip)) = stack.pop() {
            let Some(node) = self.nodes.get(id) else {
                continue;
            };
            if node.hidden {
                continue;
            }
            let Some(clip) = node.rect.intersect(&clip) else {
                continue;
            };
            if node.focusable && node.interactive && clip.contains_point(p) {
                return true;
            }
            stack.extend(node.children.iter().map(|c| (*c, clip)));
        }
        false
    }
}

/// Layout state bound to the node currently being measured or arranged.
struct LayoutPass<'a> {
    /// Core being laid out.
    core: &'a mut Core,
    /// Node whose widget holds this context.
    node: NodeId,
}

impl<'a> LayoutPass<'a> {
    /// Bind a pass to a node.
    fn new(core: &'a mut Core, node: NodeId) -> Self {
        Self { core, node }
    }

    /// Measure a node and record the result.
    fn measure_node(&mut self, id: NodeId, c: Constraints) -> Expanse {
        let measured = self.core.with_widget_mut(id, |w, core| {
            let mut sub = LayoutPass::new(core, id);
            w.measure(c, &mut sub)
        });
        let size = match measured {
            Ok(size) => c.apply(size),
            Err(e) => {
                warn!(?id, error = %e, "measure failed");
                Expanse::zero()
            }
        };
        if let Some(node) = self.core.nodes.get_mut(id) {
            node.measured = size;
        }
        size
    }

    /// Assign a node's rectangle and arrange its children.
    fn arrange_node(&mut self, id: NodeId, rect: Rect) {
        let Some(node) = self.core.nodes.get_mut(id) else {
            return;
        };
        node.rect = rect;
        let arranged = self.core.with_widget_mut(id, |w, core| {
            let mut sub = LayoutPass::new(core, id);
            w.arrange(rect, &mut sub);
        });
        if let Err(e) = arranged {
            warn!(?id, error = %e, "arrange failed");
        }
    }

    /// Is `child` a direct child of the bound node?
    fn owns(&self, child: NodeId) -> bool {
        let owned = self.core.parent(child) == Some(self.node);
        if !owned {
            warn!(parent = ?self.node, ?child, "layout of a node that is not a child");
        }
        owned
    }
}

impl LayoutContext for LayoutPass<'_> {
    fn node_id(&self) -> NodeId {
        self.node
    }

    fn children(&self) -> Vec<NodeId> {
        self.core
            .children(self.node)
            .into_iter()
            .filter(|c| self.core.nodes.get(*c).is_some_and(|n| !n.hidden))
            .collect()
    }

    fn measure_child(&mut self, child: NodeId, c: Constraints) -> Expanse {
        if !self.owns(child) {
            return Expanse::zero();
        }
        self.measure_node(child, c)
    }

    fn arrange_child(&mut self, child: NodeId, rect: Rect) {
        if self.owns(child) {
            self.arrange_node(child, rect);
        }
    }

    fn measured(&self, child: NodeId) -> Expanse {
        self.core
            .nodes
            .get(child)
            .map(|n| n.measured)
            .unwrap_or_default()
    }

    fn child_flex(&self, child: NodeId) -> Option<u32> {
        self.core.widget(child).and_then(|w| w.flex())
    }

    fn font(&self) -> &dyn FontBackend {
        self.core.font()
    }

    fn config(&self) -> &SceneConfig {
        &self.core.config
    }
}
