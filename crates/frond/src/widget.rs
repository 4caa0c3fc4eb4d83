//! Widget trait, event outcome and tree builder types.

use std::any::{Any, type_name};

use crate::{
    Context, ViewContext,
    core::{canvas::Canvas, event::Event, state::NodeName},
    error::Result,
    geom::{Expanse, Point, Rect},
    layout::{Constraints, LayoutContext},
};

/// The result of an event handler.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EventOutcome {
    /// The event changed widget state.
    Handle,
    /// The event was processed without a state change.
    Consume,
    /// The event was not relevant to this widget.
    Ignore,
}

/// Widgets are the behavior attached to nodes in the scene arena.
///
/// The engine owns tree structure and rectangles. A widget reports a size in
/// [`Widget::measure`], positions its children in [`Widget::arrange`], and
/// draws itself in [`Widget::paint`]. Children are painted by the engine after
/// their parent.
pub trait Widget: Any {
    /// Desired size under `c`. The default sizes to the first child, or to
    /// zero for a childless node.
    fn measure(&mut self, c: Constraints, ctx: &mut dyn LayoutContext) -> Expanse {
        match ctx.children().first() {
            Some(child) => {
                let size = ctx.measure_child(*child, c);
                c.apply(size)
            }
            None => c.apply(Expanse::zero()),
        }
    }

    /// Position children inside `rect`, which the parent has already assigned
    /// to this node. The default gives every child the full rectangle.
    fn arrange(&mut self, rect: Rect, ctx: &mut dyn LayoutContext) {
        for child in ctx.children() {
            ctx.arrange_child(child, rect);
        }
    }

    /// Flex weight reported to an enclosing row or column.
    fn flex(&self) -> Option<u32> {
        None
    }

    /// Draw this widget's own content. Does not paint children.
    fn paint(&mut self, _canvas: &mut Canvas, _rect: Rect, _ctx: &dyn ViewContext) {}

    /// Does this widget receive pointer input?
    fn interactive(&self) -> bool {
        false
    }

    /// Can this widget hold keyboard focus?
    fn accepts_focus(&self) -> bool {
        false
    }

    /// Refine hit-testing inside the assigned rectangle.
    fn hit(&self, rect: Rect, p: Point) -> bool {
        rect.contains_point(p)
    }

    /// Handle a routed event.
    fn on_event(&mut self, _event: &Event, _ctx: &mut dyn Context) -> Result<EventOutcome> {
        Ok(EventOutcome::Ignore)
    }

    /// Called once, right after the node is inserted into the arena.
    fn on_mount(&mut self, _ctx: &mut dyn Context) -> Result<()> {
        Ok(())
    }

    /// Name used in tree dumps and logs.
    fn name(&self) -> NodeName {
        let name = type_name::<Self>();
        let short = name.rsplit("::").next().unwrap_or(name);
        NodeName::convert(short)
    }
}

/// Convert widgets into boxed trait objects.
impl<W> From<W> for Box<dyn Widget>
where
    W: Widget + 'static,
{
    fn from(widget: W) -> Self {
        Box::new(widget)
    }
}

/// A widget together with the children it should be built with.
pub struct Element {
    /// Widget for the node.
    pub(crate) widget: Box<dyn Widget>,
    /// Child elements in paint order.
    pub(crate) children: Vec<Element>,
}

impl Element {
    /// Wrap a widget with no children.
    pub fn new(widget: impl Widget) -> Self {
        Self {
            widget: Box::new(widget),
            children: Vec::new(),
        }
    }

    /// Append a child.
    pub fn child(mut self, child: impl Into<Self>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append several children.
    pub fn children<I, E>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Self>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }
}

impl<W: Widget> From<W> for Element {
    fn from(widget: W) -> Self {
        Self::new(widget)
    }
}

/// Builder shorthand available on every widget.
pub trait WidgetExt: Widget + Sized {
    /// Start an element with one child.
    fn child(self, child: impl Into<Element>) -> Element {
        Element::new(self).child(child)
    }

    /// Start an element with several children.
    fn children<I, E>(self, children: I) -> Element
    where
        I: IntoIterator<Item = E>,
        E: Into<Element>,
    {
        Element::new(self).children(children)
    }
}

impl<W: Widget> WidgetExt for W {}
