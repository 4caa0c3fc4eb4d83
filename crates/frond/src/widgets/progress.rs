//! Progress indicators: a horizontal bar and a ring.

use crate::{
    Color, Context, Signal, ViewContext,
    canvas::Canvas,
    geom::{Expanse, Rect},
    layout::{Constraints, LayoutContext, center_offset},
    widget::Widget,
    widgets::{range::RangeValue, text::draw_text},
};

/// Value model and signals shared by the progress widgets.
struct Progress {
    /// Value model.
    range: RangeValue,
    /// Fires with the new value whenever it changes.
    on_value_changed: Signal<f32>,
    /// Fires when the value reaches the maximum from below.
    on_complete: Signal<()>,
}

impl Progress {
    /// A model over `[min, max]` at `value`.
    fn new(min: f32, max: f32, value: f32) -> Self {
        Self {
            range: RangeValue::new(min, max, value),
            on_value_changed: Signal::new(),
            on_complete: Signal::new(),
        }
    }

    /// Store a value and emit change and completion signals.
    fn set(&mut self, ctx: &mut dyn Context, value: f32) {
        let was_complete = self.range.is_complete();
        if !self.range.set(value) {
            return;
        }
        self.on_value_changed.emit(ctx, &self.range.value());
        if self.range.is_complete() && !was_complete {
            self.on_complete.emit(ctx, &());
        }
    }

    /// Whole percent, for labels.
    fn percent_label(&self) -> String {
        format!("{}%", (self.range.fraction() * 100.0) as u32)
    }
}

/// A horizontal progress bar.
pub struct ProgressBar {
    /// Value model and signals.
    progress: Progress,
    /// Widget size.
    size: Expanse,
    /// Unfilled background.
    background: Color,
    /// Filled portion.
    fill: Color,
    /// Border width and color.
    border: Option<(u32, Color)>,
    /// Draw a centered percentage label.
    show_percentage: bool,
}

impl ProgressBar {
    /// A bar over `[min, max]` at `value`.
    pub fn new(min: f32, max: f32, value: f32) -> Self {
        Self {
            progress: Progress::new(min, max, value),
            size: Expanse::new(200, 20),
            background: Color::DARK_GRAY,
            fill: Color::rgb(0x28, 0xa7, 0x45),
            border: None,
            show_percentage: false,
        }
    }

    /// Set the size.
    pub fn with_size(mut self, w: u32, h: u32) -> Self {
        self.size = Expanse::new(w, h);
        self
    }

    /// Set the background and fill colors.
    pub fn with_colors(mut self, background: Color, fill: Color) -> Self {
        self.background = background;
        self.fill = fill;
        self
    }

    /// Draw a border.
    pub fn with_border(mut self, width: u32, color: Color) -> Self {
        self.border = Some((width, color));
        self
    }

    /// Draw a percentage label.
    pub fn with_percentage(mut self) -> Self {
        self.show_percentage = true;
        self
    }

    /// Current value.
    pub fn value(&self) -> f32 {
        self.progress.range.value()
    }

    /// Fraction of the range covered, 0 to 1.
    pub fn fraction(&self) -> f32 {
        self.progress.range.fraction()
    }

    /// Set the value, clamped. Emits `on_value_changed`, and `on_complete`
    /// when the maximum is reached.
    pub fn set_value(&mut self, ctx: &mut dyn Context, value: f32) {
        self.progress.set(ctx, value);
    }

    /// Fires with the new value whenever it changes.
    pub fn on_value_changed(&self) -> &Signal<f32> {
        &self.progress.on_value_changed
    }

    /// Fires when the value reaches the maximum.
    pub fn on_complete(&self) -> &Signal<()> {
        &self.progress.on_complete
    }
}

impl Widget for ProgressBar {
    fn measure(&mut self, c: Constraints, _ctx: &mut dyn LayoutContext) -> Expanse {
        c.apply(self.size)
    }

    fn paint(&mut self, canvas: &mut Canvas, rect: Rect, ctx: &dyn ViewContext) {
        canvas.fill_rect(rect, self.background);
        let fill_w = (self.fraction() * rect.w as f32) as u32;
        canvas.fill_rect(Rect::new(rect.tl.x, rect.tl.y, fill_w, rect.h), self.fill);
        if let Some((width, color)) = self.border {
            canvas.stroke_rect(rect, width, color);
        }
        if self.show_percentage {
            let label = self.progress.percent_label();
            let size = ctx.config().font_size.min(rect.h);
            let m = ctx.font().measure(&label, size);
            let tl = rect.tl.offset(
                center_offset(m.width, rect.w),
                center_offset(m.height, rect.h),
            );
            draw_text(canvas, ctx.font(), &label, size, tl, ctx.config().text_color);
        }
    }
}

/// A ring that fills clockwise from twelve o'clock.
pub struct CircularIndicator {
    /// Value model and signals.
    progress: Progress,
    /// Outer radius.
    radius: u32,
    /// Ring thickness.
    thickness: u32,
    /// Unfilled ring.
    track: Color,
    /// Filled arc.
    fill: Color,
    /// Draw a centered percentage label.
    show_percentage: bool,
}

impl CircularIndicator {
    /// A ring over `[min, max]` at `value`.
    pub fn new(min: f32, max: f32, value: f32) -> Self {
        Self {
            progress: Progress::new(min, max, value),
            radius: 40,
            thickness: 8,
            track: Color::DARK_GRAY,
            fill: Color::rgb(0x3d, 0x8b, 0xfd),
            show_percentage: false,
        }
    }

    /// Set the outer radius and ring thickness.
    pub fn with_radius(mut self, radius: u32, thickness: u32) -> Self {
        self.radius = radius;
        self.thickness = thickness;
        self
    }

    /// Set the track and fill colors.
    pub fn with_colors(mut self, track: Color, fill: Color) -> Self {
        self.track = track;
        self.fill = fill;
        self
    }

    /// Draw a percentage label.
    pub fn with_percentage(mut self) -> Self {
        self.show_percentage = true;
        self
    }

    /// Current value.
    pub fn value(&self) -> f32 {
        self.progress.range.value()
    }

    /// Fraction of the range covered, 0 to 1.
    pub fn fraction(&self) -> f32 {
        self.progress.range.fraction()
    }

    /// Set the value, clamped. Emits `on_value_changed`, and `on_complete`
    /// when the maximum is reached.
    pub fn set_value(&mut self, ctx: &mut dyn Context, value: f32) {
        self.progress.set(ctx, value);
    }

    /// Fires with the new value whenever it changes.
    pub fn on_value_changed(&self) -> &Signal<f32> {
        &self.progress.on_value_changed
    }

    /// Fires when the value reaches the maximum.
    pub fn on_complete(&self) -> &Signal<()> {
        &self.progress.on_complete
    }
}

impl Widget for CircularIndicator {
    fn measure(&mut self, c: Constraints, _ctx: &mut dyn LayoutContext) -> Expanse {
        let d = self.radius.saturating_mul(2);
        c.apply(Expanse::new(d, d))
    }

    fn paint(&mut self, canvas: &mut Canvas, rect: Rect, ctx: &dyn ViewContext) {
        let r = i32::try_from(self.radius).unwrap_or(i32::MAX);
        let center = rect.tl.offset(r, r);
        canvas.stroke_circle(center, self.radius, self.thickness, self.track);
        canvas.stroke_arc(center, self.radius, self.thickness, self.fraction(), self.fill);
        if self.show_percentage {
            let label = self.progress.percent_label();
            let size = ctx.config().font_size;
            let m = ctx.font().measure(&label, size);
            let tl = center.offset(
                -((m.width / 2) as i32),
                -((m.height / 2) as i32),
            );
            draw_text(canvas, ctx.font(), &label, size, tl, ctx.config().text_color);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use super::*;
    use crate::core::testing::dummyctx::DummyContext;

    #[test]
    fn complete_fires_once_on_reaching_max() {
        let mut bar = ProgressBar::new(0.0, 10.0, 0.0);
        let changes = Rc::new(Cell::new(0));
        let done = Rc::new(Cell::new(0));
        let c = changes.clone();
        bar.on_value_changed().connect(move |_, _| c.set(c.get() + 1));
        let d = done.clone();
        bar.on_complete().connect(move |_, _| d.set(d.get() + 1));

        let mut ctx = DummyContext::default();
        bar.set_value(&mut ctx, 5.0);
        bar.set_value(&mut ctx, 50.0);
        bar.set_value(&mut ctx, 10.0);
        assert_eq!(bar.value(), 10.0);
        assert_eq!((changes.get(), done.get()), (2, 1));
        bar.set_value(&mut ctx, 0.0);
        bar.set_value(&mut ctx, 10.0);
        assert_eq!(done.get(), 2);
    }

    #[test]
    fn ring_paints_fraction() {
        let mut ring = CircularIndicator::new(0.0, 1.0, 0.25)
            .with_radius(10, 3)
            .with_colors(Color::GRAY, Color::RED);
        let mut canvas = Canvas::new(Expanse::new(20, 20));
        ring.paint(&mut canvas, Rect::new(0, 0, 20, 20), &DummyContext::default());
        // Right of center is inside the first quarter turn; left is not.
        assert_eq!(canvas.get(18, 8), Some(Color::RED));
        assert_eq!(canvas.get(1, 10), Some(Color::GRAY));
        assert_eq!(ring.fraction(), 0.25);
    }

    #[test]
    fn percent_label() {
        let bar = ProgressBar::new(0.0, 200.0, 50.0);
        assert_eq!(bar.progress.percent_label(), "25%");
    }
}
