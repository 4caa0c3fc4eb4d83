//! Mutually exclusive radio buttons.

use std::{cell::RefCell, rc::Rc};

use tracing::warn;

use crate::{
    Color, Context, NodeId, Signal, ViewContext,
    canvas::Canvas,
    error::Result,
    event::Event,
    geom::{Expanse, Rect},
    layout::{Constraints, LayoutContext, center_offset},
    widget::{EventOutcome, Widget},
    widgets::text::draw_text,
};

/// A shared membership list. Selecting one member deselects the rest.
///
/// Members join when they are mounted; clones share the same list.
#[derive(Debug, Clone, Default)]
pub struct RadioGroup {
    /// Member nodes in mount order.
    members: Rc<RefCell<Vec<NodeId>>>,
}

impl RadioGroup {
    /// An empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current members.
    pub fn members(&self) -> Vec<NodeId> {
        self.members.borrow().clone()
    }

    /// Register a node.
    fn join(&self, node: NodeId) {
        let mut members = self.members.borrow_mut();
        if !members.contains(&node) {
            members.push(node);
        }
    }
}

/// A round selector with a label to its right.
pub struct RadioButton {
    /// Label text.
    label: String,
    /// Outer circle radius.
    radius: u32,
    /// Gap between circle and label.
    spacing: u32,
    /// Is this option chosen?
    selected: bool,
    /// Pointer is over the widget.
    hovered: bool,
    /// Exclusive group, if any.
    group: Option<RadioGroup>,
    /// Fires with the new selection state when it changes.
    pub on_selection_changed: Signal<bool>,
    /// Fires when this option becomes selected.
    pub on_selected: Signal<()>,
}

impl RadioButton {
    /// An unselected, ungrouped option.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            radius: 8,
            spacing: 8,
            selected: false,
            hovered: false,
            group: None,
            on_selection_changed: Signal::new(),
            on_selected: Signal::new(),
        }
    }

    /// Join an exclusive group.
    pub fn with_group(mut self, group: &RadioGroup) -> Self {
        self.group = Some(group.clone());
        self
    }

    /// Start selected. No signals fire.
    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Set the circle radius.
    pub fn with_radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    /// The label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Is this option chosen?
    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Change the selection. Selecting a grouped button deselects every
    /// other member of its group.
    pub fn set_selected(&mut self, ctx: &mut dyn Context, selected: bool) {
        if self.selected == selected {
            return;
        }
        self.selected = selected;
        self.on_selection_changed.emit(ctx, &selected);
        if !selected {
            return;
        }
        self.on_selected.emit(ctx, &());
        let Some(group) = &self.group else {
            return;
        };
        let me = ctx.node_id();
        for member in group.members().into_iter().filter(|m| *m != me) {
            if let Err(e) =
                ctx.with_widget::<RadioButton, _>(member, |r, ctx| r.set_selected(ctx, false))
            {
                warn!(?member, error = %e, "could not deselect radio member");
            }
        }
    }
}

impl Widget for RadioButton {
    fn measure(&mut self, c: Constraints, ctx: &mut dyn LayoutContext) -> Expanse {
        let d = self.radius.saturating_mul(2);
        let m = ctx.font().measure(&self.label, ctx.config().font_size);
        let w = match m.width {
            0 => d,
            lw => d.saturating_add(self.spacing).saturating_add(lw),
        };
        c.apply(Expanse::new(w, d.max(m.height)))
    }

    fn interactive(&self) -> bool {
        true
    }

    fn on_mount(&mut self, ctx: &mut dyn Context) -> Result<()> {
        if let Some(group) = &self.group {
            group.join(ctx.node_id());
        }
        Ok(())
    }

    fn paint(&mut self, canvas: &mut Canvas, rect: Rect, ctx: &dyn ViewContext) {
        let config = ctx.config();
        let d = self.radius.saturating_mul(2);
        let r = i32::try_from(self.radius).unwrap_or(i32::MAX);
        let center = rect.tl.offset(r, center_offset(d, rect.h).saturating_add(r));
        let ring = if self.hovered {
            Color::LIGHT_GRAY.lighten(config.hover_tint)
        } else {
            Color::LIGHT_GRAY
        };
        canvas.stroke_circle(center, self.radius, 2.min(self.radius), ring);
        if self.selected {
            canvas.fill_circle(center, self.radius / 2, config.accent);
        }
        let m = ctx.font().measure(&self.label, config.font_size);
        let tl = rect.tl.offset(
            i32::try_from(d.saturating_add(self.spacing)).unwrap_or(i32::MAX),
            center_offset(m.height, rect.h),
        );
        draw_text(
            canvas,
            ctx.font(),
            &self.label,
            config.font_size,
            tl,
            config.text_color,
        );
    }

    fn on_event(&mut self, event: &Event, ctx: &mut dyn Context) -> Result<EventOutcome> {
        match event {
            Event::Hover(h) => self.hovered = *h,
            Event::Click => self.set_selected(ctx, true),
            _ => return Ok(EventOutcome::Ignore),
        }
        Ok(EventOutcome::Handle)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::core::testing::dummyctx::DummyContext;

    #[test]
    fn click_selects_once() -> Result<()> {
        let mut r = RadioButton::new("a");
        let fired = Rc::new(Cell::new(0));
        let f = fired.clone();
        r.on_selected.connect(move |_, _| f.set(f.get() + 1));
        let mut ctx = DummyContext::default();
        r.on_event(&Event::Click, &mut ctx)?;
        r.on_event(&Event::Click, &mut ctx)?;
        assert!(r.is_selected());
        assert_eq!(fired.get(), 1);
        Ok(())
    }

    #[test]
    fn measure_includes_label() {
        let mut r = RadioButton::new("ab");
        let size = r.measure(Constraints::unbounded(), &mut DummyContext::default());
        // 16px circle, 8px gap, two 8px glyphs at the default 16px size.
        assert_eq!(size, Expanse::new(16 + 8 + 16, 16));
    }
}
