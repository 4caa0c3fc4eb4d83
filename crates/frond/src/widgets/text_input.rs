//! Single-line editable text.

use unicode_segmentation::UnicodeSegmentation;

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

/// Left inset for the text run.
const TEXT_INSET: u32 = 6;
/// Cursor bar width.
const CURSOR_WIDTH: u32 = 2;

/// A one-line text field. The cursor moves by grapheme cluster, so combined
/// characters are edited as a unit.
pub struct TextInput {
    /// Content.
    text: String,
    /// Hint shown while empty.
    placeholder: String,
    /// Cursor position in graphemes.
    cursor: usize,
    /// Maximum length in graphemes.
    max_len: usize,
    /// Fixed width.
    width: u32,
    /// Text size, or the scene default.
    font_size: Option<u32>,
    /// Holds keyboard focus.
    focused: bool,
    /// Fires with the full text after every edit.
    pub on_text_changed: Signal<String>,
    /// Fires with the full text when Enter is pressed.
    pub on_enter: Signal<String>,
    /// Fires when focus is gained or lost.
    pub on_focus_changed: Signal<bool>,
}

impl TextInput {
    /// An empty field.
    pub fn new() -> Self {
        Self {
            text: String::new(),
            placeholder: String::new(),
            cursor: 0,
            max_len: 256,
            width: 200,
            font_size: None,
            focused: false,
            on_text_changed: Signal::new(),
            on_enter: Signal::new(),
            on_focus_changed: Signal::new(),
        }
    }

    /// Set the placeholder.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the width.
    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Limit the length, in graphemes.
    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Set the text size.
    pub fn with_font_size(mut self, size: u32) -> Self {
        self.font_size = Some(size);
        self
    }

    /// Current content.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in graphemes.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Does the field think it holds focus?
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Replace the content, truncated to the length limit, and move the
    /// cursor to the end. Emits `on_text_changed` if the text differs.
    pub fn set_text(&mut self, ctx: &mut dyn Context, text: impl Into<String>) {
        let text: String = text.into();
        let text: String = text.graphemes(true).take(self.max_len).collect();
        self.cursor = text.graphemes(true).count();
        if text != self.text {
            self.text = text;
            self.changed(ctx);
        }
    }

    /// Number of graphemes in the content.
    fn len(&self) -> usize {
        self.text.graphemes(true).count()
    }

    /// Byte offset of grapheme `n`, or the end of the text.
    fn byte_offset(&self, n: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .nth(n)
            .map_or(self.text.len(), |(i, _)| i)
    }

    /// Text size in effect.
    fn size(&self, ctx: &dyn ViewContext) -> u32 {
        self.font_size.unwrap_or(ctx.config().font_size)
    }

    /// Announce an edit.
    fn changed(&self, ctx: &mut dyn Context) {
        ctx.invalidate();
        self.on_text_changed.emit(ctx, &self.text);
    }

    /// Insert typed text at the cursor, dropping what exceeds the length limit.
    fn insert(&mut self, ctx: &mut dyn Context, s: &str) -> bool {
        let room = self.max_len.saturating_sub(self.len());
        let add: String = s
            .graphemes(true)
            .filter(|g| !g.chars().any(char::is_control))
            .take(room)
            .collect();
        if add.is_empty() {
            return false;
        }
        let at = self.byte_offset(self.cursor);
        self.text.insert_str(at, &add);
        self.cursor += add.graphemes(true).count();
        self.changed(ctx);
        true
    }

    /// Delete grapheme `n`, if it exists.
    fn delete_at(&mut self, ctx: &mut dyn Context, n: usize) -> bool {
        if n >= self.len() {
            return false;
        }
        let start = self.byte_offset(n);
        let end = self.byte_offset(n + 1);
        self.text.replace_range(start..end, "");
        self.changed(ctx);
        true
    }

    /// Cursor position nearest to `x` pixels from the start of the run.
    fn cursor_at(&self, x: i32, ctx: &dyn ViewContext) -> usize {
        let size = self.size(ctx);
        let mut prefix = String::new();
        let mut prev = 0i32;
        for (i, g) in self.text.graphemes(true).enumerate() {
            prefix.push_str(g);
            let end = ctx.font().measure(&prefix, size).width as i32;
            if x < (prev + end) / 2 {
                return i;
            }
            prev = end;
        }
        self.len()
    }

    /// Handle a special key. Returns false if the key means nothing here.
    fn key(&mut self, ctx: &mut dyn Context, key: Key) -> bool {
        match key {
            Key::Left => self.cursor = self.cursor.saturating_sub(1),
            Key::Right => self.cursor = (self.cursor + 1).min(self.len()),
            Key::Home => self.cursor = 0,
            Key::End => self.cursor = self.len(),
            Key::Backspace => {
                if self.cursor == 0 {
                    return true;
                }
                self.cursor -= 1;
                self.delete_at(ctx, self.cursor);
            }
            Key::Delete => {
                self.delete_at(ctx, self.cursor);
            }
            Key::Enter => self.on_enter.emit(ctx, &self.text),
            Key::Escape => {
                if ctx.release_focus() {
                    self.focused = false;
                    self.on_focus_changed.emit(ctx, &false);
                }
            }
            Key::Up | Key::Down | Key::Tab => return false,
        }
        true
    }
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for TextInput {
    fn measure(&mut self, c: Constraints, ctx: &mut dyn LayoutContext) -> Expanse {
        let size = self.font_size.unwrap_or(ctx.config().font_size);
        let line = ctx.font().measure("", size).height.max(size);
        c.apply(Expanse::new(self.width, line.saturating_add(TEXT_INSET * 2)))
    }

    fn interactive(&self) -> bool {
        true
    }

    fn accepts_focus(&self) -> bool {
        true
    }

    fn paint(&mut self, canvas: &mut Canvas, rect: Rect, ctx: &dyn ViewContext) {
        let config = ctx.config();
        canvas.fill_rect(rect, Color::WHITE);
        let (border, width) = if self.focused {
            (config.accent, 2)
        } else {
            (Color::GRAY, 1)
        };
        canvas.stroke_rect(rect, width, border);

        let size = self.size(ctx);
        let line = ctx.font().measure("", size).height.max(size);
        let tl = rect.tl.offset(TEXT_INSET as i32, center_offset(line, rect.h));
        let pad = TEXT_INSET.min(rect.w / 2);
        let prev = canvas.push_clip(Rect::new(
            rect.tl.x + pad as i32,
            rect.tl.y,
            rect.w - pad * 2,
            rect.h,
        ));
        if self.text.is_empty() {
            draw_text(canvas, ctx.font(), &self.placeholder, size, tl, Color::GRAY);
        } else {
            draw_text(canvas, ctx.font(), &self.text, size, tl, Color::BLACK);
        }
        if self.focused {
            let before = &self.text[..self.byte_offset(self.cursor)];
            let x = ctx.font().measure(before, size).width as i32;
            canvas.fill_rect(Rect::new(tl.x + x, tl.y, CURSOR_WIDTH, line), Color::BLACK);
        }
        canvas.restore_clip(prev);
    }

    fn on_event(&mut self, event: &Event, ctx: &mut dyn Context) -> Result<EventOutcome> {
        let handled = match event {
            Event::Focus(f) => {
                self.focused = *f;
                if *f {
                    self.cursor = self.len();
                }
                self.on_focus_changed.emit(ctx, f);
                true
            }
            Event::Text(s) => self.insert(ctx, s),
            Event::Key(k) => self.key(ctx, *k),
            Event::Click => {
                let rect = ctx.rect();
                let x = ctx.pointer().x - rect.tl.x - TEXT_INSET as i32;
                self.cursor = self.cursor_at(x, &*ctx);
                true
            }
            _ => false,
        };
        Ok(if handled {
            EventOutcome::Handle
        } else {
            EventOutcome::Ignore
        })
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use super::*;
    use crate::core::testing::dummyctx::DummyContext;

    fn typed(input: &mut TextInput, ctx: &mut DummyContext, s: &str) -> Result<()> {
        input.on_event(&Event::Text(s.into()), ctx)?;
        Ok(())
    }

    #[test]
    fn edits_by_grapheme() -> Result<()> {
        let mut t = TextInput::new();
        let mut ctx = DummyContext::with_focus();
        typed(&mut t, &mut ctx, "ae\u{301}b")?;
        assert_eq!(t.cursor(), 3);
        t.on_event(&Event::Key(Key::Left), &mut ctx)?;
        t.on_event(&Event::Key(Key::Backspace), &mut ctx)?;
        assert_eq!(t.text(), "ab");
        assert_eq!(t.cursor(), 1);
        t.on_event(&Event::Key(Key::Home), &mut ctx)?;
        t.on_event(&Event::Key(Key::Delete), &mut ctx)?;
        assert_eq!(t.text(), "b");
        t.on_event(&Event::Key(Key::Backspace), &mut ctx)?;
        assert_eq!(t.text(), "b");
        Ok(())
    }

    #[test]
    fn max_len_truncates() -> Result<()> {
        let mut t = TextInput::new().with_max_len(3);
        let mut ctx = DummyContext::with_focus();
        typed(&mut t, &mut ctx, "abcdef")?;
        assert_eq!(t.text(), "abc");
        let out = t.on_event(&Event::Text("x".into()), &mut ctx)?;
        assert_eq!(out, EventOutcome::Ignore);
        t.set_text(&mut ctx, "hello");
        assert_eq!((t.text(), t.cursor()), ("hel", 3));
        Ok(())
    }

    #[test]
    fn enter_and_escape() -> Result<()> {
        let mut t = TextInput::new();
        let mut ctx = DummyContext::with_focus();
        let log = Rc::new(RefCell::new(Vec::new()));
        let l = log.clone();
        t.on_enter
            .connect(move |_, s: &String| l.borrow_mut().push(format!("enter {s}")));
        let l = log.clone();
        t.on_focus_changed
            .connect(move |_, f: &bool| l.borrow_mut().push(format!("focus {f}")));

        t.on_event(&Event::Focus(true), &mut ctx)?;
        typed(&mut t, &mut ctx, "hi")?;
        t.on_event(&Event::Key(Key::Enter), &mut ctx)?;
        t.on_event(&Event::Key(Key::Escape), &mut ctx)?;
        assert!(!t.is_focused());
        assert_eq!(ctx.focused, None);
        assert_eq!(*log.borrow(), vec!["focus true", "enter hi", "focus false"]);
        Ok(())
    }

    #[test]
    fn click_places_cursor() -> Result<()> {
        let mut t = TextInput::new();
        let mut ctx = DummyContext::with_rect(Rect::new(0, 0, 200, 28));
        t.set_text(&mut ctx, "abcd");
        // Each glyph advances 8px at the default size; 6px inset.
        ctx.pointer = (6 + 17, 10).into();
        t.on_event(&Event::Click, &mut ctx)?;
        assert_eq!(t.cursor(), 2);
        ctx.pointer = (190, 10).into();
        t.on_event(&Event::Click, &mut ctx)?;
        assert_eq!(t.cursor(), 4);
        Ok(())
    }
}
