//! A single-choice dropdown list.

use crate::{
    Color, Context, Signal, ViewContext,
    canvas::Canvas,
    error::Result,
    event::{Event, key::Key},
    geom::{Expanse, Rect},
    layout::{Constraints, LayoutContext, center_offset},
    widget::{EventOutcome, Widget},
    widgets::text::draw_text,
};

/// Left inset for item text.
const TEXT_INSET: i32 = 8;

/// A header showing the current choice, which expands downward into the item
/// list while open. The widget grows while open, so opening and closing
/// request a relayout.
///
/// A dropdown takes keyboard focus like a text-entry widget. Pressing it
/// moves focus away from any focused text input, Up/Down/Enter/Escape are
/// delivered to it while open, and losing focus (a press outside every
/// focusable node, or focus moving elsewhere) closes the list.
pub struct Dropdown {
    /// Choices.
    items: Vec<String>,
    /// Index of the chosen item.
    selected: Option<usize>,
    /// Is the list expanded?
    open: bool,
    /// Header text when nothing is chosen.
    placeholder: String,
    /// Fixed width.
    width: u32,
    /// Height of the header and of each item row.
    item_height: u32,
    /// Fires with the new index when the choice changes.
    pub on_selection_changed: Signal<usize>,
    /// Fires with the chosen text when the choice changes.
    pub on_item_selected: Signal<String>,
    /// Fires when the list opens or closes.
    pub on_open_changed: Signal<bool>,
}

impl Dropdown {
    /// A closed dropdown over `items` with nothing chosen.
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
            selected: None,
            open: false,
            placeholder: "Select...".into(),
            width: 160,
            item_height: 28,
            on_selection_changed: Signal::new(),
            on_item_selected: Signal::new(),
            on_open_changed: Signal::new(),
        }
    }

    /// Set the header placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the width and row height.
    pub fn with_size(mut self, width: u32, item_height: u32) -> Self {
        self.width = width;
        self.item_height = item_height.max(1);
        self
    }

    /// Start with an item chosen. No signals fire.
    pub fn with_selected(mut self, index: usize) -> Self {
        if index < self.items.len() {
            self.selected = Some(index);
        }
        self
    }

    /// The choices.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Index of the chosen item.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Text of the chosen item.
    pub fn selected_text(&self) -> Option<&str> {
        self.selected
            .and_then(|i| self.items.get(i))
            .map(String::as_str)
    }

    /// Is the list expanded?
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Replace the choices. A selection past the end is cleared.
    pub fn set_items<I, S>(&mut self, ctx: &mut dyn Context, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items = items.into_iter().map(Into::into).collect();
        if self.selected.is_some_and(|i| i >= self.items.len()) {
            self.selected = None;
        }
        ctx.invalidate();
    }

    /// Choose an item. Out-of-range indices are ignored.
    pub fn select(&mut self, ctx: &mut dyn Context, index: usize) {
        if index >= self.items.len() || self.selected == Some(index) {
            return;
        }
        self.selected = Some(index);
        self.on_selection_changed.emit(ctx, &index);
        let text = self.items[index].clone();
        self.on_item_selected.emit(ctx, &text);
    }

    /// Open or close the list.
    pub fn set_open(&mut self, ctx: &mut dyn Context, open: bool) {
        if self.open == open {
            return;
        }
        self.open = open;
        self.on_open_changed.emit(ctx, &open);
        ctx.invalidate();
    }

    /// The header rectangle within `rect`.
    fn header(&self, rect: Rect) -> Rect {
        Rect::new(rect.tl.x, rect.tl.y, rect.w, self.item_height.min(rect.h))
    }

    /// The rectangle of item `i` within `rect`.
    fn item_rect(&self, rect: Rect, i: usize) -> Rect {
        let y = rect.tl.y as i64 + self.item_height as i64 * (i as i64 + 1);
        Rect::new(rect.tl.x, y as i32, rect.w, self.item_height)
    }

    /// Index of the open-list item under a y coordinate.
    fn item_at(&self, rect: Rect, y: i32) -> Option<usize> {
        if !self.open {
            return None;
        }
        let rel = y as i64 - rect.tl.y as i64 - self.item_height as i64;
        if rel < 0 {
            return None;
        }
        let i = (rel / self.item_height as i64) as usize;
        (i < self.items.len()).then_some(i)
    }

    /// Draw one row of text, vertically centered in `row`.
    fn draw_row(
        &self,
        canvas: &mut Canvas,
        row: Rect,
        text: &str,
        color: Color,
        ctx: &dyn ViewContext,
    ) {
        let size = ctx.config().font_size;
        let m = ctx.font().measure(text, size);
        let tl = row.tl.offset(TEXT_INSET, center_offset(m.height, row.h));
        let prev = canvas.push_clip(row);
        draw_text(canvas, ctx.font(), text, size, tl, color);
        canvas.restore_clip(prev);
    }
}

impl Widget for Dropdown {
    fn measure(&mut self, c: Constraints, _ctx: &mut dyn LayoutContext) -> Expanse {
        let rows = if self.open { 1 + self.items.len() } else { 1 };
        let h = self.item_height.saturating_mul(rows as u32);
        c.apply(Expanse::new(self.width, h))
    }

    fn interactive(&self) -> bool {
        true
    }

    fn accepts_focus(&self) -> bool {
        true
    }

    fn paint(&mut self, canvas: &mut Canvas, rect: Rect, ctx: &dyn ViewContext) {
        let config = ctx.config();
        let header = self.header(rect);
        canvas.fill_rect(header, Color::WHITE);
        let border = if ctx.is_focused() {
            config.accent
        } else {
            Color::GRAY
        };
        canvas.stroke_rect(header, 1, border);
        match self.selected_text() {
            Some(text) => self.draw_row(canvas, header, text, Color::BLACK, ctx),
            None => self.draw_row(canvas, header, &self.placeholder, Color::GRAY, ctx),
        }

        // Chevron on the right edge of the header.
        let size = header.h / 3;
        let cx = header.tl.x + header.w as i32 - TEXT_INSET - size as i32;
        let cy = header.tl.y + center_offset(size, header.h);
        for row in 0..size / 2 + 1 {
            let y = if self.open {
                cy + (size / 2 - row) as i32
            } else {
                cy + row as i32
            };
            let w = size.saturating_sub(row * 2);
            canvas.fill_rect(Rect::new(cx + row as i32, y, w, 1), Color::DARK_GRAY);
        }

        if !self.open {
            return;
        }
        let hovered = if ctx.is_hovered() {
            self.item_at(rect, ctx.pointer().y)
        } else {
            None
        };
        for (i, item) in self.items.iter().enumerate() {
            let row = self.item_rect(rect, i);
            let bg = if Some(i) == self.selected {
                config.accent
            } else if Some(i) == hovered {
                Color::LIGHT_GRAY
            } else {
                Color::WHITE
            };
            canvas.fill_rect(row, bg);
            let fg = if Some(i) == self.selected {
                Color::WHITE
            } else {
                Color::BLACK
            };
            self.draw_row(canvas, row, item, fg, ctx);
        }
        let list = Rect::new(
            rect.tl.x,
            rect.tl.y + self.item_height as i32,
            rect.w,
            rect.h.saturating_sub(self.item_height),
        );
        canvas.stroke_rect(list, 1, Color::GRAY);
    }

    fn on_event(&mut self, event: &Event, ctx: &mut dyn Context) -> Result<EventOutcome> {
        match event {
            Event::Click => {
                let rect = ctx.rect();
                match self.item_at(rect, ctx.pointer().y) {
                    Some(i) => {
                        self.select(ctx, i);
                        self.set_open(ctx, false);
                    }
                    None => self.set_open(ctx, !self.open),
                }
            }
            Event::Focus(false) => self.set_open(ctx, false),
            Event::Key(Key::Escape) => self.set_open(ctx, false),
            Event::Key(Key::Enter) => self.set_open(ctx, !self.open),
            Event::Key(Key::Down) => {
                let next = self.selected.map_or(0, |i| i + 1);
                self.select(ctx, next);
            }
            Event::Key(Key::Up) => {
                if let Some(prev) = self.selected.and_then(|i| i.checked_sub(1)) {
                    self.select(ctx, prev);
                }
            }
            Event::Hover(_) => return Ok(EventOutcome::Consume),
            _ => return Ok(EventOutcome::Ignore),
        }
        Ok(EventOutcome::Handle)
    }
}
