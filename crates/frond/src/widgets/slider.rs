use crate::{
    Color, Context, Signal, ViewContext,
    canvas::Canvas,
    error::Result,
    event::Event,
    geom::{Expanse, Point, Rect},
    layout::{Constraints, LayoutContext},
    widget::{EventOutcome, Widget},
    widgets::range::RangeValue,
};

/// Colors and thumb size for a [`Slider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderStyle {
    /// Unfilled track.
    pub track: Color,
    /// Track left of the thumb.
    pub fill: Color,
    /// Thumb at rest.
    pub thumb: Color,
    /// Thumb while hovered or dragged.
    pub thumb_hover: Color,
    /// Thumb radius.
    pub thumb_radius: u32,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            track: Color::DARK_GRAY,
            fill: Color::rgb(0x3d, 0x8b, 0xfd),
            thumb: Color::LIGHT_GRAY,
            thumb_hover: Color::WHITE,
            thumb_radius: 8,
        }
    }
}

/// A horizontal value slider. Pressing anywhere on the track jumps the value
/// to the pointer; dragging keeps following it until release.
pub struct Slider {
    /// Value model.
    range: RangeValue,
    /// Widget size.
    size: Expanse,
    /// Colors.
    style: SliderStyle,
    /// Pointer is over the slider.
    hovered: bool,
    /// A drag is in progress.
    dragging: bool,
    /// Fires with the new value whenever it changes.
    pub on_value_changed: Signal<f32>,
    /// Fires with `true` when a drag starts and `false` when it ends.
    pub on_dragging: Signal<bool>,
}

impl Slider {
    /// A slider over `[min, max]` starting at `value`.
    pub fn new(min: f32, max: f32, value: f32) -> Self {
        Self {
            range: RangeValue::new(min, max, value),
            size: Expanse::new(200, 20),
            style: SliderStyle::default(),
            hovered: false,
            dragging: false,
            on_value_changed: Signal::new(),
            on_dragging: Signal::new(),
        }
    }

    /// Set the size.
    pub fn with_size(mut self, w: u32, h: u32) -> Self {
        self.size = Expanse::new(w, h);
        self
    }

    /// Set the style.
    pub fn with_style(mut self, style: SliderStyle) -> Self {
        self.style = style;
        self
    }

    /// Current value.
    pub fn value(&self) -> f32 {
        self.range.value()
    }

    /// Lower bound.
    pub fn min(&self) -> f32 {
        self.range.min()
    }

    /// Upper bound.
    pub fn max(&self) -> f32 {
        self.range.max()
    }

    /// Is a drag in progress?
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Set the value, clamped to the range. Emits `on_value_changed` if it
    /// changed.
    pub fn set_value(&mut self, ctx: &mut dyn Context, value: f32) {
        if self.range.set(value) {
            self.on_value_changed.emit(ctx, &self.range.value());
        }
    }

    /// Replace the bounds. Emits `on_value_changed` if clamping moved the value.
    pub fn set_range(&mut self, ctx: &mut dyn Context, min: f32, max: f32) {
        if self.range.set_bounds(min, max) {
            self.on_value_changed.emit(ctx, &self.range.value());
        }
    }

    /// Set the value from a pointer x coordinate.
    fn track_to(&mut self, ctx: &mut dyn Context, x: i32) {
        let rect = ctx.rect();
        if rect.w == 0 {
            return;
        }
        let rel = (x as i64 - rect.tl.x as i64).clamp(0, rect.w as i64);
        if self.range.set_fraction(rel as f32 / rect.w as f32) {
            self.on_value_changed.emit(ctx, &self.range.value());
        }
    }

    /// Thumb center within `rect`.
    fn thumb_center(&self, rect: Rect) -> Point {
        let x = (self.range.fraction() * rect.w as f32) as i32;
        rect.tl.offset(x, (rect.h / 2) as i32)
    }
}

impl Widget for Slider {
    fn measure(&mut self, c: Constraints, _ctx: &mut dyn LayoutContext) -> Expanse {
        c.apply(self.size)
    }

    fn interactive(&self) -> bool {
        true
    }

    fn paint(&mut self, canvas: &mut Canvas, rect: Rect, _ctx: &dyn ViewContext) {
        let track_h = (rect.h / 3).max(1);
        let track_y = rect.tl.y + (rect.h.saturating_sub(track_h) / 2) as i32;
        canvas.fill_rect(Rect::new(rect.tl.x, track_y, rect.w, track_h), self.style.track);
        let thumb = self.thumb_center(rect);
        let fill_w = (thumb.x - rect.tl.x).max(0) as u32;
        canvas.fill_rect(Rect::new(rect.tl.x, track_y, fill_w, track_h), self.style.fill);
        let color = if self.hovered || self.dragging {
            self.style.thumb_hover
        } else {
            self.style.thumb
        };
        canvas.fill_circle(thumb, self.style.thumb_radius, color);
    }

    fn on_event(&mut self, event: &Event, ctx: &mut dyn Context) -> Result<EventOutcome> {
        match event {
            Event::Hover(h) => self.hovered = *h,
            Event::Press(true) => {
                self.dragging = true;
                self.on_dragging.emit(ctx, &true);
                let x = ctx.pointer().x;
                self.track_to(ctx, x);
            }
            Event::Press(false) => {
                if self.dragging {
                    self.dragging = false;
                    self.on_dragging.emit(ctx, &false);
                }
            }
            Event::Drag(p) if self.dragging => self.track_to(ctx, p.x),
            _ => return Ok(EventOutcome::Ignore),
        }
        Ok(EventOutcome::Handle)
    }
}
