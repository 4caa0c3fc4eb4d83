use frond::{
    Color, Context, NodeId, Scene, WidgetExt,
    error::Result,
    layout::CrossAxisAlignment,
    widgets::{
        Circle, CircularIndicator, Container, Flex, Line, Padding, ProgressBar, Slider, Text,
    },
};
use tracing::warn;

use crate::palette;

/// Handles into a built gallery scene.
#[derive(Debug, Clone, Copy)]
pub struct Gallery {
    /// Drives both indicators.
    pub slider: NodeId,
    /// Horizontal indicator.
    pub bar: NodeId,
    /// Ring indicator.
    pub ring: NodeId,
    /// Clickable discs.
    pub circles: [NodeId; 2],
    /// Status line.
    pub status: NodeId,
}

/// Replace the status line.
fn say(ctx: &mut dyn Context, status: NodeId, text: String) {
    if let Err(e) = ctx.with_widget::<Text, _>(status, |t, _| t.set_text(text.clone())) {
        warn!(error = %e, "status update failed");
    }
}

/// Build the gallery into `scene`.
pub fn build(scene: &mut Scene) -> Result<Gallery> {
    let shapes = Flex::row()
        .with_gap(16)
        .child(Circle::new(24, palette::BLUE).with_border(3, Color::WHITE))
        .child(Circle::new(24, palette::GREEN))
        .child(
            Container::new()
                .with_size(120, 48)
                .with_gradient(palette::BLUE, palette::GREEN),
        )
        .child(Line::new((0, 0), (80, 48), 3, palette::RED));

    let root = scene.add(
        Padding::all(16).child(
            Flex::column()
                .with_gap(16)
                .with_cross_align(CrossAxisAlignment::Start)
                .child(Text::new("GALLERY").with_size(32))
                .child(shapes)
                .child(
                    ProgressBar::new(0.0, 100.0, 30.0)
                        .with_size(300, 24)
                        .with_colors(palette::SURFACE, palette::GREEN)
                        .with_border(1, palette::MUTED)
                        .with_percentage(),
                )
                .child(
                    CircularIndicator::new(0.0, 100.0, 30.0)
                        .with_radius(40, 8)
                        .with_colors(palette::SURFACE, palette::BLUE)
                        .with_percentage(),
                )
                .child(Slider::new(0.0, 100.0, 30.0).with_size(300, 24))
                .child(Text::new("Drag the slider").with_color(palette::MUTED)),
        ),
    );
    let column = scene.child_at(root, 0)?;
    let row = scene.child_at(column, 1)?;
    let gallery = Gallery {
        circles: [scene.child_at(row, 0)?, scene.child_at(row, 1)?],
        bar: scene.child_at(column, 2)?,
        ring: scene.child_at(column, 3)?,
        slider: scene.child_at(column, 4)?,
        status: scene.child_at(column, 5)?,
    };

    scene.with_widget::<Slider, _>(gallery.slider, |s, _| {
        s.on_value_changed.connect(move |ctx, v: &f32| {
            let v = *v;
            let bar = ctx.with_widget::<ProgressBar, _>(gallery.bar, |b, ctx| b.set_value(ctx, v));
            let ring = ctx
                .with_widget::<CircularIndicator, _>(gallery.ring, |r, ctx| r.set_value(ctx, v));
            if let Err(e) = bar.and(ring) {
                warn!(error = %e, "indicator update failed");
            }
        });
    })?;

    scene.with_widget::<ProgressBar, _>(gallery.bar, |b, _| {
        b.on_complete()
            .connect(move |ctx, _| say(ctx, gallery.status, "Complete!".into()));
    })?;

    for (i, circle) in gallery.circles.into_iter().enumerate() {
        scene.with_widget::<Circle, _>(circle, |c, _| {
            c.on_click
                .connect(move |ctx, _| say(ctx, gallery.status, format!("Circle {} clicked", i + 1)));
        })?;
    }
    Ok(gallery)
}
