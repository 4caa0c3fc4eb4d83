use crate::{
    core::{id::NodeId, state::NodeName},
    geom::{Expanse, Rect},
    widget::Widget,
};

/// Node data stored in the scene arena.
pub struct Node {
    /// Widget behavior and state. `None` while the widget is borrowed out of
    /// its slot for a call.
    pub(crate) widget: Option<Box<dyn Widget>>,

    /// Parent in the arena tree. Top-level nodes have none.
    pub(crate) parent: Option<NodeId>,
    /// Children in paint order.
    pub(crate) children: Vec<NodeId>,

    /// Final rectangle in surface coordinates, assigned by the parent.
    pub(crate) rect: Rect,
    /// Size reported by the most recent measure.
    pub(crate) measured: Expanse,

    /// Participates in hit-testing.
    pub(crate) interactive: bool,
    /// Can hold keyboard focus.
    pub(crate) focusable: bool,
    /// Hidden nodes are skipped by layout, paint and hit-testing.
    pub(crate) hidden: bool,
    /// Widget name, cached at insertion.
    pub(crate) name: NodeName,
}

impl Node {
    /// Wrap a widget in a detached node.
    pub(crate) fn new(widget: Box<dyn Widget>) -> Self {
        Self {
            interactive: widget.interactive(),
            focusable: widget.accepts_focus(),
            name: widget.name(),
            widget: Some(widget),
            parent: None,
            children: Vec::new(),
            rect: Rect::zero(),
            measured: Expanse::zero(),
            hidden: false,
        }
    }

    /// Snake-case widget name.
    pub fn name(&self) -> &NodeName {
        &self.name
    }

    /// Parent node; none for top-level nodes.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Children in paint order.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Rectangle assigned by the last arrange.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Size from the last measure.
    pub fn measured(&self) -> Expanse {
        self.measured
    }

    /// Skipped by layout, paint and hit-testing?
    pub fn hidden(&self) -> bool {
        self.hidden
    }

    /// Visible to hit-testing?
    pub fn interactive(&self) -> bool {
        self.interactive
    }

    /// May hold keyboard focus?
    pub fn focusable(&self) -> bool {
        self.focusable
    }
}
