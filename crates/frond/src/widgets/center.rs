use crate::{
    geom::{Expanse, Rect},
    layout::{Constraints, LayoutContext, center_offset},
    widget::Widget,
};

/// Centers each child in the available space.
///
/// On a bounded axis the center takes all the space offered; on an
/// unbounded axis it shrinks to its largest child.
#[derive(Debug, Clone, Copy, Default)]
pub struct Center;

impl Center {
    /// Create a new Center widget.
    pub fn new() -> Self {
        Self
    }
}

impl Widget for Center {
    fn measure(&mut self, c: Constraints, ctx: &mut dyn LayoutContext) -> Expanse {
        let loose = c.loosen();
        let content = ctx
            .children()
            .into_iter()
            .map(|child| ctx.measure_child(child, loose))
            .fold(Expanse::zero(), |acc, s| acc.max(s));
        Expanse::new(
            c.width.max().unwrap_or(content.w),
            c.height.max().unwrap_or(content.h),
        )
    }

    fn arrange(&mut self, rect: Rect, ctx: &mut dyn LayoutContext) {
        for child in ctx.children() {
            let size = ctx.measured(child);
            let x = rect.tl.x.saturating_add(center_offset(size.w, rect.w));
            let y = rect.tl.y.saturating_add(center_offset(size.h, rect.h));
            ctx.arrange_child(child, Rect::new(x, y, size.w, size.h));
        }
    }
}
