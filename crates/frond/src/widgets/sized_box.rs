use crate::{
    geom::{Expanse, Rect},
    layout::{Constraints, LayoutContext},
    widget::Widget,
};

/// A fixed-size box. Without a child it is a spacer; a child is laid out
/// tight into the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SizedBox {
    /// Configured size.
    size: Expanse,
}

impl SizedBox {
    /// A box of `w` by `h` pixels.
    pub fn new(w: u32, h: u32) -> Self {
        Self {
            size: Expanse::new(w, h),
        }
    }

    /// A horizontal spacer.
    pub fn width(w: u32) -> Self {
        Self::new(w, 0)
    }

    /// A vertical spacer.
    pub fn height(h: u32) -> Self {
        Self::new(0, h)
    }

    /// The configured size.
    pub fn size(&self) -> Expanse {
        self.size
    }
}

impl Widget for SizedBox {
    fn measure(&mut self, c: Constraints, ctx: &mut dyn LayoutContext) -> Expanse {
        let size = c.apply(self.size);
        for child in ctx.children() {
            ctx.measure_child(child, Constraints::tight(size));
        }
        size
    }
}
