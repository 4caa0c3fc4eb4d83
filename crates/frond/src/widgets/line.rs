use crate::{
    Color, ViewContext,
    canvas::Canvas,
    geom::{Expanse, Point, Rect},
    layout::{Constraints, LayoutContext},
    widget::Widget,
};

/// A straight line between two points given relative to the widget's
/// rectangle. Purely decorative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    /// Start point, relative to the top-left corner.
    from: Point,
    /// End point, relative to the top-left corner.
    to: Point,
    /// Stroke width.
    thickness: u32,
    /// Stroke color.
    color: Color,
}

impl Line {
    /// A line from `from` to `to`.
    pub fn new(from: impl Into<Point>, to: impl Into<Point>, thickness: u32, color: Color) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            thickness,
            color,
        }
    }

    /// Move the endpoints.
    pub fn set_points(&mut self, from: Point, to: Point) {
        self.from = from;
        self.to = to;
    }

    /// The endpoints.
    pub fn points(&self) -> (Point, Point) {
        (self.from, self.to)
    }
}

impl Widget for Line {
    fn measure(&mut self, c: Constraints, _ctx: &mut dyn LayoutContext) -> Expanse {
        let extent = |a: i32, b: i32| -> u32 {
            let far = a.max(b).max(0) as u32;
            far.saturating_add(self.thickness.max(1))
        };
        c.apply(Expanse::new(
            extent(self.from.x, self.to.x),
            extent(self.from.y, self.to.y),
        ))
    }

    fn paint(&mut self, canvas: &mut Canvas, rect: Rect, _ctx: &dyn ViewContext) {
        let from = rect.tl + self.from;
        let to = rect.tl + self.to;
        canvas.line(from, to, self.thickness, self.color);
    }
}
