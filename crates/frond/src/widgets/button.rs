//! Push buttons.

use crate::{
    Color, Context, Signal, ViewContext,
    canvas::Canvas,
    error::Result,
    event::Event,
    geom::{Expanse, Rect},
    layout::{Constraints, LayoutContext, center_offset},
    widget::{EventOutcome, Widget},
    widgets::text::draw_text,
};

/// Horizontal padding around an auto-sized label.
const LABEL_PAD: u32 = 12;

/// Colors and shape for a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonStyle {
    /// Background at rest.
    pub normal: Color,
    /// Background while hovered.
    pub hover: Color,
    /// Background while pressed.
    pub press: Color,
    /// Label color.
    pub text: Color,
    /// Corner radius.
    pub radius: u32,
    /// Border ring width, zero for none.
    pub border_width: u32,
    /// Border color.
    pub border_color: Color,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self {
            normal: Color(0xFF33_66CC),
            hover: Color(0xFF44_77DD),
            press: Color(0xFF22_55BB),
            text: Color::WHITE,
            radius: 4,
            border_width: 0,
            border_color: Color(0xFF66_6666),
        }
    }
}

impl ButtonStyle {
    /// Blue.
    pub fn primary() -> Self {
        Self::palette(0xFF00_7BFF, 0xFF00_56B3, 0xFF00_4085)
    }

    /// Gray.
    pub fn secondary() -> Self {
        Self::palette(0xFF6C_757D, 0xFF54_5B62, 0xFF49_4F54)
    }

    /// Green.
    pub fn success() -> Self {
        Self::palette(0xFF28_A745, 0xFF1E_7E34, 0xFF15_5724)
    }

    /// Red.
    pub fn danger() -> Self {
        Self::palette(0xFFDC_3545, 0xFFC8_2333, 0xFFBD_2130)
    }

    /// A style from three background shades.
    fn palette(normal: u32, hover: u32, press: u32) -> Self {
        Self {
            normal: Color(normal),
            hover: Color(hover),
            press: Color(press),
            ..Self::default()
        }
    }
}

/// A labelled push button.
///
/// A click fires only when press and release both land on the button;
/// dragging off before release cancels it.
pub struct Button {
    /// Label text.
    label: String,
    /// Fixed size, or zero to fit the label.
    size: Expanse,
    /// Label size, or the scene default.
    font_size: Option<u32>,
    /// Colors and shape.
    style: ButtonStyle,
    /// Pointer is over the button.
    hovered: bool,
    /// Left button went down on the button and has not been released.
    pressed: bool,
    /// Fires on click.
    pub on_click: Signal<()>,
    /// Fires with `true` on enter and `false` on exit.
    pub on_hover: Signal<bool>,
    /// Fires with `true` on press and `false` on release.
    pub on_press: Signal<bool>,
}

impl Button {
    /// A button sized to fit `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            size: Expanse::zero(),
            font_size: None,
            style: ButtonStyle::default(),
            hovered: false,
            pressed: false,
            on_click: Signal::new(),
            on_hover: Signal::new(),
            on_press: Signal::new(),
        }
    }

    /// Fix the button size.
    pub fn with_size(mut self, w: u32, h: u32) -> Self {
        self.size = Expanse::new(w, h);
        self
    }

    /// Set the style.
    pub fn with_style(mut self, style: ButtonStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the label size.
    pub fn with_font_size(mut self, size: u32) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Return the button label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replace the button label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Replace the style.
    pub fn set_style(&mut self, style: ButtonStyle) {
        self.style = style;
    }

    /// Is the pointer over the button?
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Is the button held down?
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Background for the current state.
    fn background(&self) -> Color {
        if self.pressed {
            self.style.press
        } else if self.hovered {
            self.style.hover
        } else {
            self.style.normal
        }
    }
}

impl Widget for Button {
    fn measure(&mut self, c: Constraints, ctx: &mut dyn LayoutContext) -> Expanse {
        let font_size = self.font_size.unwrap_or(ctx.config().font_size);
        let m = ctx.font().measure(&self.label, font_size);
        let w = match self.size.w {
            0 => m.width.saturating_add(LABEL_PAD * 2),
            w => w,
        };
        let h = match self.size.h {
            0 => m.height.saturating_add(LABEL_PAD),
            h => h,
        };
        c.apply(Expanse::new(w, h))
    }

    fn interactive(&self) -> bool {
        true
    }

    fn paint(&mut self, canvas: &mut Canvas, rect: Rect, ctx: &dyn ViewContext) {
        canvas.fill_rounded_rect(rect, self.style.radius, self.background());
        canvas.stroke_rect(rect, self.style.border_width, self.style.border_color);
        let font_size = self.font_size.unwrap_or(ctx.config().font_size);
        let m = ctx.font().measure(&self.label, font_size);
        let tl = rect.tl.offset(
            center_offset(m.width, rect.w),
            center_offset(m.height, rect.h),
        );
        draw_text(canvas, ctx.font(), &self.label, font_size, tl, self.style.text);
    }

    fn on_event(&mut self, event: &Event, ctx: &mut dyn Context) -> Result<EventOutcome> {
        match event {
            Event::Hover(h) => {
                self.hovered = *h;
                self.on_hover.emit(ctx, h);
            }
            Event::Press(p) => {
                self.pressed = *p;
                self.on_press.emit(ctx, p);
            }
            Event::Click => self.on_click.emit(ctx, &()),
            _ => return Ok(EventOutcome::Ignore),
        }
        Ok(EventOutcome::Handle)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::core::testing::dummyctx::DummyContext;

    #[test]
    fn auto_size() {
        let mut b = Button::new("OK").with_font_size(20);
        let size = b.measure(Constraints::unbounded(), &mut DummyContext::default());
        assert_eq!(size, Expanse::new(20 + 24, 20 + 12));
        let mut b = Button::new("OK").with_size(100, 30);
        let size = b.measure(Constraints::unbounded(), &mut DummyContext::default());
        assert_eq!(size, Expanse::new(100, 30));
    }

    #[test]
    fn state_colors() -> Result<()> {
        let mut b = Button::new("x");
        let mut ctx = DummyContext::default();
        assert_eq!(b.background(), b.style.normal);
        b.on_event(&Event::Hover(true), &mut ctx)?;
        assert_eq!(b.background(), b.style.hover);
        b.on_event(&Event::Press(true), &mut ctx)?;
        assert_eq!(b.background(), b.style.press);
        b.on_event(&Event::Press(false), &mut ctx)?;
        b.on_event(&Event::Hover(false), &mut ctx)?;
        assert_eq!(b.background(), b.style.normal);
        Ok(())
    }

    #[test]
    fn signal_order() -> Result<()> {
        let mut b = Button::new("x");
        let log = Rc::new(RefCell::new(Vec::new()));
        let l = log.clone();
        b.on_press.connect(move |_, p| l.borrow_mut().push(format!("press {p}")));
        let l = log.clone();
        b.on_click.connect(move |_, _| l.borrow_mut().push("click".into()));
        let mut ctx = DummyContext::default();
        for ev in [Event::Press(true), Event::Press(false), Event::Click] {
            b.on_event(&ev, &mut ctx)?;
        }
        assert_eq!(*log.borrow(), vec!["press true", "press false", "click"]);
        Ok(())
    }
}
