use slotmap::Key;

use crate::{
    Context, ViewContext,
    core::{
        NodeId,
        config::SceneConfig,
        font::{BlockFont, FontBackend},
    },
    error::{Error, Result},
    geom::{Expanse, Point, Rect},
    layout::{Constraints, LayoutContext},
    widget::{Element, Widget},
};

/// Dummy context for tests. Stands in for both [`Context`] and
/// [`LayoutContext`] when a widget is exercised outside a scene: the node has
/// no children, tree edits fail, and input state is whatever the test sets.
pub struct DummyContext {
    /// Current node identifier.
    pub node_id: NodeId,
    /// Rectangle reported for the current node.
    pub rect: Rect,
    /// Pointer position.
    pub pointer: Point,
    /// Hovered node.
    pub hovered: Option<NodeId>,
    /// Pressed node.
    pub pressed: Option<NodeId>,
    /// Focused node.
    pub focused: Option<NodeId>,
    /// Number of `invalidate` calls.
    pub invalidated: usize,
    /// Font used for measurement.
    font: BlockFont,
    /// Configuration.
    pub config: SceneConfig,
}

impl Default for DummyContext {
    fn default() -> Self {
        Self {
            node_id: NodeId::null(),
            rect: Rect::zero(),
            pointer: Point::zero(),
            hovered: None,
            pressed: None,
            focused: None,
            invalidated: 0,
            font: BlockFont,
            config: SceneConfig::default(),
        }
    }
}

impl DummyContext {
    /// A context whose node holds focus.
    pub fn with_focus() -> Self {
        Self {
            focused: Some(NodeId::null()),
            ..Self::default()
        }
    }

    /// A context whose node occupies `rect`.
    pub fn with_rect(rect: Rect) -> Self {
        Self {
            rect,
            ..Self::default()
        }
    }
}

impl ViewContext for DummyContext {
    fn node_id(&self) -> NodeId {
        self.node_id
    }

    fn node_rect(&self, node: NodeId) -> Option<Rect> {
        (node == self.node_id).then_some(self.rect)
    }

    fn children_of(&self, _node: NodeId) -> Vec<NodeId> {
        Vec::new()
    }

    fn parent_of(&self, _node: NodeId) -> Option<NodeId> {
        None
    }

    fn pointer(&self) -> Point {
        self.pointer
    }

    fn hovered(&self) -> Option<NodeId> {
        self.hovered
    }

    fn pressed(&self) -> Option<NodeId> {
        self.pressed
    }

    fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    fn font(&self) -> &dyn FontBackend {
        &self.font
    }

    fn config(&self) -> &SceneConfig {
        &self.config
    }
}

impl Context for DummyContext {
    fn with_widget_mut(
        &mut self,
        node: NodeId,
        _f: &mut dyn FnMut(&mut dyn Widget, &mut dyn Context) -> Result<()>,
    ) -> Result<()> {
        Err(Error::NotFound(node))
    }

    fn add(&mut self, _widget: Box<dyn Widget>) -> NodeId {
        NodeId::null()
    }

    fn build(&mut self, _element: Element) -> NodeId {
        NodeId::null()
    }

    fn mount_child_to(&mut self, parent: NodeId, _child: NodeId) -> Result<()> {
        Err(Error::NotFound(parent))
    }

    fn remove(&mut self, node: NodeId) -> Result<()> {
        Err(Error::NotFound(node))
    }

    fn set_hidden(&mut self, _node: NodeId, _hidden: bool) -> bool {
        false
    }

    fn invalidate(&mut self) {
        self.invalidated += 1;
    }

    fn release_focus(&mut self) -> bool {
        if self.focused == Some(self.node_id) {
            self.focused = None;
            return true;
        }
        false
    }
}

impl LayoutContext for DummyContext {
    fn node_id(&self) -> NodeId {
        self.node_id
    }

    fn children(&self) -> Vec<NodeId> {
        Vec::new()
    }

    fn measure_child(&mut self, _child: NodeId, _c: Constraints) -> Expanse {
        Expanse::zero()
    }

    fn arrange_child(&mut self, _child: NodeId, _rect: Rect) {}

    fn measured(&self, _child: NodeId) -> Expanse {
        Expanse::zero()
    }

    fn child_flex(&self, _child: NodeId) -> Option<u32> {
        None
    }

    fn font(&self) -> &dyn FontBackend {
        &self.font
    }

    fn config(&self) -> &SceneConfig {
        &self.config
    }
}
