//! Static text.

use crate::{
    Color, ViewContext,
    canvas::Canvas,
    font::FontBackend,
    geom::{Expanse, Point, Rect},
    layout::{Constraints, LayoutContext},
    widget::Widget,
};

/// Paint `text` with its line box at `tl`, aligning the backend's mask
/// baseline with the measured baseline.
pub(crate) fn draw_text(
    canvas: &mut Canvas,
    font: &dyn FontBackend,
    text: &str,
    size: u32,
    tl: Point,
    color: Color,
) {
    if text.is_empty() {
        return;
    }
    let metrics = font.measure(text, size);
    let mask = font.rasterize(text, size);
    if mask.is_empty() {
        return;
    }
    let y = i64::from(tl.y) + i64::from(metrics.baseline) - i64::from(mask.baseline);
    let y = i32::try_from(y).unwrap_or(if y < 0 { i32::MIN } else { i32::MAX });
    canvas.blend_mask(Point::new(tl.x, y), &mask, color);
}

/// A single line of text. Its intrinsic size is whatever the font backend
/// reports for the content.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    /// Content.
    text: String,
    /// Pixel size, or the scene default.
    size: Option<u32>,
    /// Color, or the scene default.
    color: Option<Color>,
}

impl Text {
    /// Text with the scene's default size and color.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            size: None,
            color: None,
        }
    }

    /// Set the pixel size.
    pub fn with_size(mut self, size: u32) -> Self {
        self.size = Some(size);
        self
    }

    /// Set the color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    /// The content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the content.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Change the color.
    pub fn set_color(&mut self, color: Color) {
        self.color = Some(color);
    }

    /// Change the pixel size.
    pub fn set_size(&mut self, size: u32) {
        self.size = Some(size);
    }
}

impl Widget for Text {
    fn measure(&mut self, c: Constraints, ctx: &mut dyn LayoutContext) -> Expanse {
        let size = self.size.unwrap_or(ctx.config().font_size);
        let m = ctx.font().measure(&self.text, size);
        c.apply(Expanse::new(m.width, m.height))
    }

    fn paint(&mut self, canvas: &mut Canvas, rect: Rect, ctx: &dyn ViewContext) {
        let size = self.size.unwrap_or(ctx.config().font_size);
        let color = self.color.unwrap_or(ctx.config().text_color);
        draw_text(canvas, ctx.font(), &self.text, size, rect.tl, color);
    }
}
