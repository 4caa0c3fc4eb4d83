use std::{cell::Cell, rc::Rc};

use frond::{
    Color, Context, NodeId, Scene, WidgetExt,
    error::Result,
    layout::CrossAxisAlignment,
    widgets::{Button, Center, Flex, Text},
};
use tracing::warn;

use crate::palette;

/// Handles into a built counter scene.
#[derive(Debug, Clone, Copy)]
pub struct Counter {
    /// The big number.
    pub display: NodeId,
    /// The status line under it.
    pub status: NodeId,
    /// Subtract one.
    pub decrement: NodeId,
    /// Back to zero.
    pub reset: NodeId,
    /// Add one.
    pub increment: NodeId,
}

/// Status text and color for a count.
pub fn status(count: i32) -> (&'static str, Color) {
    match count {
        0 => ("Start counting!", palette::MUTED),
        1..=10 => ("Getting started", palette::BLUE),
        11..=50 => ("Making progress!", palette::GREEN),
        n if n > 50 => ("You're on fire!", palette::GREEN),
        _ => ("Going backwards", palette::RED),
    }
}

/// Push a new count into the display and status widgets.
fn show(ctx: &mut dyn Context, counter: Counter, count: i32) {
    let (text, color) = status(count);
    let updated = ctx
        .with_widget::<Text, _>(counter.display, |t, _| t.set_text(count.to_string()))
        .and_then(|()| {
            ctx.with_widget::<Text, _>(counter.status, |t, _| {
                t.set_text(text);
                t.set_color(color);
            })
        });
    if let Err(e) = updated {
        warn!(error = %e, "counter display out of sync");
    }
}

/// Wire `button` to apply `step` to the shared count.
fn wire(
    scene: &mut Scene,
    button: NodeId,
    counter: Counter,
    count: &Rc<Cell<i32>>,
    step: fn(i32) -> i32,
) -> Result<()> {
    let count = count.clone();
    scene.with_widget::<Button, _>(button, move |b, _| {
        b.on_click.connect(move |ctx, _| {
            count.set(step(count.get()));
            show(ctx, counter, count.get());
        });
    })
}

/// Build the counter into `scene`.
pub fn build(scene: &mut Scene) -> Result<Counter> {
    let (initial, color) = status(0);
    let root = scene.add(
        Center::new().child(
            Flex::column()
                .with_gap(16)
                .with_cross_align(CrossAxisAlignment::Center)
                .child(Text::new("COUNTER").with_size(32))
                .child(Text::new("0").with_size(64).with_color(palette::BLUE))
                .child(Text::new(initial).with_color(color))
                .child(
                    Flex::row()
                        .with_gap(12)
                        .child(
                            Button::new("-")
                                .with_size(64, 40)
                                .with_style(palette::button(palette::RED)),
                        )
                        .child(
                            Button::new("Reset")
                                .with_size(96, 40)
                                .with_style(palette::button(palette::SURFACE)),
                        )
                        .child(
                            Button::new("+")
                                .with_size(64, 40)
                                .with_style(palette::button(palette::GREEN)),
                        ),
                ),
        ),
    );
    let column = scene.child_at(root, 0)?;
    let buttons = scene.child_at(column, 3)?;
    let counter = Counter {
        display: scene.child_at(column, 1)?,
        status: scene.child_at(column, 2)?,
        decrement: scene.child_at(buttons, 0)?,
        reset: scene.child_at(buttons, 1)?,
        increment: scene.child_at(buttons, 2)?,
    };

    let count = Rc::new(Cell::new(0));
    wire(scene, counter.decrement, counter, &count, |n| n - 1)?;
    wire(scene, counter.reset, counter, &count, |_| 0)?;
    wire(scene, counter.increment, counter, &count, |n| n + 1)?;
    Ok(counter)
}
