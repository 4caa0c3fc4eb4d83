use crate::{
    Color, ViewContext,
    canvas::Canvas,
    geom::{Expanse, Rect},
    layout::{Constraint, Constraints, LayoutContext},
    widget::Widget,
};

/// A box with a painted background.
///
/// A non-zero configured width or height fixes that axis; a zero one sizes
/// to the child.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Container {
    /// Configured width, or zero to follow the child.
    width: u32,
    /// Configured height, or zero to follow the child.
    height: u32,
    /// Fill color.
    background: Color,
    /// Corner radius.
    radius: u32,
    /// Optional top-to-bottom gradient, replacing the flat fill.
    gradient: Option<(Color, Color)>,
}

impl Container {
    /// A transparent container that sizes to its child.
    pub fn new() -> Self {
        Self {
            width: 0,
            height: 0,
            background: Color::TRANSPARENT,
            radius: 0,
            gradient: None,
        }
    }

    /// A fixed-size container filled with `background`.
    pub fn fixed(width: u32, height: u32, background: Color) -> Self {
        Self::new().with_size(width, height).with_background(background)
    }

    /// Fix the width and height. Zero follows the child.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Round the corners.
    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    /// Fill with a vertical gradient.
    pub fn with_gradient(mut self, top: Color, bottom: Color) -> Self {
        self.gradient = Some((top, bottom));
        self
    }

    /// The background color.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Change the background color.
    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    /// Axis constraint for the child given a configured extent.
    fn child_constraint(configured: u32, available: Constraint) -> Constraint {
        if configured > 0 {
            Constraint::Exact(available.apply(configured))
        } else {
            available.loosen()
        }
    }
}

impl Default for Container {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for Container {
    fn measure(&mut self, c: Constraints, ctx: &mut dyn LayoutContext) -> Expanse {
        let inner = Constraints::new(
            Self::child_constraint(self.width, c.width),
            Self::child_constraint(self.height, c.height),
        );
        let content = ctx
            .children()
            .into_iter()
            .map(|child| ctx.measure_child(child, inner))
            .fold(Expanse::zero(), |acc, s| acc.max(s));
        let w = if self.width > 0 { self.width } else { content.w };
        let h = if self.height > 0 { self.height } else { content.h };
        c.apply(Expanse::new(w, h))
    }

    fn paint(&mut self, canvas: &mut Canvas, rect: Rect, _ctx: &dyn ViewContext) {
        match self.gradient {
            Some((top, bottom)) => canvas.fill_gradient(rect, top, bottom),
            None if self.background.a() == 0 => {}
            None if self.radius > 0 => canvas.fill_rounded_rect(rect, self.radius, self.background),
            None => canvas.fill_rect(rect, self.background),
        }
    }
}
