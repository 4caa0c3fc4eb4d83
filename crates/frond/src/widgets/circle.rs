use crate::{
    Color, Context, Signal, ViewContext,
    canvas::Canvas,
    error::Result,
    event::Event,
    geom::{Expanse, Point, Rect},
    layout::{Constraints, LayoutContext},
    widget::{EventOutcome, Widget},
};

/// A filled disc that reports hover and clicks. Hit-testing follows the
/// disc, not its bounding box.
pub struct Circle {
    /// Radius in pixels.
    radius: u32,
    /// Fill color.
    color: Color,
    /// Ring width and color drawn inside the edge.
    border: Option<(u32, Color)>,
    /// Pointer is over the disc.
    hovered: bool,
    /// Fires on click.
    pub on_click: Signal<()>,
    /// Fires with `true` on enter and `false` on exit.
    pub on_hover: Signal<bool>,
}

impl Circle {
    /// A disc of the given radius and color.
    pub fn new(radius: u32, color: Color) -> Self {
        Self {
            radius,
            color,
            border: None,
            hovered: false,
            on_click: Signal::new(),
            on_hover: Signal::new(),
        }
    }

    /// Add a border ring.
    pub fn with_border(mut self, width: u32, color: Color) -> Self {
        self.border = Some((width, color));
        self
    }

    /// The radius.
    pub fn radius(&self) -> u32 {
        self.radius
    }

    /// Change the radius.
    pub fn set_radius(&mut self, radius: u32) {
        self.radius = radius;
    }

    /// The fill color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Change the fill color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Is the pointer over the disc?
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Center of the disc inside its rectangle.
    fn center(&self, rect: Rect) -> Point {
        let r = i32::try_from(self.radius).unwrap_or(i32::MAX);
        rect.tl.offset(r, r)
    }
}

impl Widget for Circle {
    fn measure(&mut self, c: Constraints, _ctx: &mut dyn LayoutContext) -> Expanse {
        let d = self.radius.saturating_mul(2);
        c.apply(Expanse::new(d, d))
    }

    fn interactive(&self) -> bool {
        true
    }

    fn hit(&self, rect: Rect, p: Point) -> bool {
        let c = self.center(rect);
        let (dx, dy) = (i128::from(p.x) - i128::from(c.x), i128::from(p.y) - i128::from(c.y));
        let r = i128::from(self.radius);
        rect.contains_point(p) && dx * dx + dy * dy <= r * r
    }

    fn paint(&mut self, canvas: &mut Canvas, rect: Rect, ctx: &dyn ViewContext) {
        let center = self.center(rect);
        let fill = if self.hovered {
            self.color.lighten(ctx.config().hover_tint)
        } else {
            self.color
        };
        canvas.fill_circle(center, self.radius, fill);
        if let Some((width, color)) = self.border {
            canvas.stroke_circle(center, self.radius, width, color);
        }
    }

    fn on_event(&mut self, event: &Event, ctx: &mut dyn Context) -> Result<EventOutcome> {
        match event {
            Event::Hover(h) => {
                self.hovered = *h;
                self.on_hover.emit(ctx, h);
                Ok(EventOutcome::Handle)
            }
            Event::Click => {
                self.on_click.emit(ctx, &());
                Ok(EventOutcome::Handle)
            }
            _ => Ok(EventOutcome::Ignore),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;
    use crate::core::testing::dummyctx::DummyContext;

    #[test]
    fn hit_follows_disc() {
        let c = Circle::new(10, Color::RED);
        let rect = Rect::new(0, 0, 20, 20);
        assert!(c.hit(rect, Point::new(10, 10)));
        assert!(c.hit(rect, Point::new(10, 1)));
        assert!(!c.hit(rect, Point::new(1, 1)));
    }

    #[test]
    fn signals() -> Result<()> {
        let mut c = Circle::new(5, Color::RED);
        let clicks = Rc::new(Cell::new(0));
        let hover = Rc::new(Cell::new(false));
        let k = clicks.clone();
        c.on_click.connect(move |_, _| k.set(k.get() + 1));
        let h = hover.clone();
        c.on_hover.connect(move |_, v| h.set(*v));

        let mut ctx = DummyContext::default();
        c.on_event(&Event::Hover(true), &mut ctx)?;
        assert!(hover.get() && c.is_hovered());
        c.on_event(&Event::Click, &mut ctx)?;
        c.on_event(&Event::Click, &mut ctx)?;
        assert_eq!(clicks.get(), 2);
        assert_eq!(c.on_event(&Event::Focus(true), &mut ctx)?, EventOutcome::Ignore);
        Ok(())
    }
}
