use crate::{
    geom::{Expanse, Insets, Rect},
    layout::{Constraints, LayoutContext},
    widget::Widget,
};

/// Insets its children by a fixed amount on each edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Padding {
    /// Space on each edge.
    insets: Insets,
}

impl Padding {
    /// Padding with explicit insets.
    pub fn new(insets: Insets) -> Self {
        Self { insets }
    }

    /// The same padding on every edge.
    pub fn all(v: u32) -> Self {
        Self::new(Insets::all(v))
    }

    /// The configured insets.
    pub fn insets(&self) -> Insets {
        self.insets
    }
}

impl Widget for Padding {
    fn measure(&mut self, c: Constraints, ctx: &mut dyn LayoutContext) -> Expanse {
        let inner = c.deflate(self.insets);
        let content = ctx
            .children()
            .into_iter()
            .map(|child| ctx.measure_child(child, inner))
            .fold(Expanse::zero(), |acc, s| acc.max(s));
        c.apply(Expanse::new(
            content.w.saturating_add(self.insets.horizontal()),
            content.h.saturating_add(self.insets.vertical()),
        ))
    }

    fn arrange(&mut self, rect: Rect, ctx: &mut dyn LayoutContext) {
        let inner = rect.inset(self.insets);
        for child in ctx.children() {
            ctx.arrange_child(child, inner);
        }
    }
}
