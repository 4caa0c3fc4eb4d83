//! Integration tests for the scene frame loop.

#[cfg(test)]
mod tests {
    use std::{cell::Cell, rc::Rc};

    use frond::{
        Color, NodeId, Scene, WidgetExt,
        config::SceneConfig,
        error::{Error, Result},
        font::{BlockFont, FontBackend, GlyphMask, TextMetrics},
        geom::{Expanse, Rect},
        layout::CrossAxisAlignment,
        testing::harness::Harness,
        widgets::{Button, Center, Circle, Container, Flex, Text},
    };

    /// A backend whose masks carry less coverage than their size claims.
    struct ShortMasks;

    impl FontBackend for ShortMasks {
        fn measure(&self, _text: &str, _size: u32) -> TextMetrics {
            TextMetrics {
                width: 10,
                height: 10,
                baseline: 8,
            }
        }

        fn rasterize(&self, _text: &str, _size: u32) -> GlyphMask {
            GlyphMask {
                width: 10,
                height: 10,
                baseline: 8,
                alpha: vec![255; 3],
            }
        }
    }

    /// A label over a "+" button that increments it. Returns (label, button).
    fn counter(h: &mut Harness) -> Result<(NodeId, NodeId)> {
        let col = h.add(
            Flex::column()
                .with_gap(10)
                .with_cross_align(CrossAxisAlignment::Start)
                .child(Text::new("0"))
                .child(Button::new("+").with_size(60, 30)),
        );
        let kids = h.scene.children(col);
        let (label, button) = (kids[0], kids[1]);
        let count = Rc::new(Cell::new(0u32));
        h.scene.with_widget::<Button, _>(button, |b, _| {
            b.on_click.connect(move |ctx, _| {
                count.set(count.get() + 1);
                let n = count.get();
                ctx.with_widget::<Text, _>(label, |t, _| t.set_text(n.to_string()))
                    .expect("label");
            });
        })?;
        h.tick();
        Ok((label, button))
    }

    #[test]
    fn counter_counts_clicks() -> Result<()> {
        let mut h = Harness::new();
        let (label, button) = counter(&mut h)?;
        assert_eq!(h.rect(label).w, 8);
        for _ in 0..10 {
            h.click(button);
        }
        let text = h.scene.widget::<Text>(label).map(|t| t.text().to_string());
        assert_eq!(text.as_deref(), Some("10"));
        // The label grew and was laid out again in the same frame.
        assert_eq!(h.rect(label).w, 16);
        Ok(())
    }

    #[test]
    fn handlers_cannot_reach_their_own_widget() -> Result<()> {
        let mut h = Harness::new();
        let button = h.add(Center::new().child(Button::new("me").with_size(40, 20)));
        let button = h.scene.children(button)[0];
        let reentrant = Rc::new(Cell::new(false));
        let seen = reentrant.clone();
        h.scene.with_widget::<Button, _>(button, |b, _| {
            b.on_click.connect(move |ctx, _| {
                let me = ctx.node_id();
                let r = ctx.with_widget::<Button, _>(me, |_, _| ());
                seen.set(matches!(r, Err(Error::Reentrant(_))));
            });
        })?;
        h.click(button);
        assert!(reentrant.get());
        Ok(())
    }

    #[test]
    fn config_drives_background_and_text_size() -> Result<()> {
        let config = SceneConfig {
            background: Color::RED,
            ..SceneConfig::from_json(r#"{ "font_size": 24 }"#)?
        };
        let scene = Scene::with_parts(BlockFont, config);
        let mut h = Harness::with_scene(scene, Expanse::new(100, 100));
        let center = h.add(Center::new().child(Text::new("ab")));
        let text = h.scene.children(center)[0];
        assert_eq!(h.canvas.get(0, 0), Some(Color::RED));
        assert_eq!(h.rect(text), Rect::new(38, 38, 24, 24));

        h.scene.set_config(SceneConfig {
            background: Color::BLUE,
            ..SceneConfig::default()
        });
        h.tick();
        assert_eq!(h.canvas.get(0, 0), Some(Color::BLUE));
        assert_eq!(h.rect(text), Rect::new(42, 42, 16, 16));
        Ok(())
    }

    #[test]
    fn paints_children_over_parents() {
        let mut h = Harness::with_size(Expanse::new(40, 40));
        h.add(
            Container::fixed(40, 40, Color::GREEN)
                .child(Center::new().child(Container::fixed(10, 10, Color::YELLOW))),
        );
        assert_eq!(h.canvas.count(Color::YELLOW), 100);
        assert_eq!(h.canvas.count(Color::GREEN), 1600 - 100);
        assert_eq!(h.canvas.get(20, 20), Some(Color::YELLOW));
    }

    #[test]
    fn ticks_are_counted_and_resize_relays_out() {
        let mut h = Harness::with_size(Expanse::new(50, 50));
        let root = h.add(Center::new());
        assert_eq!(h.scene.frames(), 1);
        h.resize(Expanse::new(80, 30));
        assert_eq!(h.scene.frames(), 2);
        assert_eq!(h.rect(root), Rect::new(0, 0, 80, 30));
        assert_eq!(h.canvas.size(), Expanse::new(80, 30));
    }

    #[test]
    fn dump_lists_the_tree() -> Result<()> {
        let mut h = Harness::new();
        let (_, button) = counter(&mut h)?;
        h.move_to(h.rect(button).center());
        let dump = h.scene.dump()?;
        let lines: Vec<&str> = dump.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("column "));
        assert!(lines[1].starts_with("    text "));
        assert!(lines[2].starts_with("    button "));
        assert!(lines[2].ends_with("hovered"));
        Ok(())
    }

    #[test]
    fn clear_empties_the_scene() {
        let mut h = Harness::new();
        let root = h.add(Center::new().child(Button::new("x")));
        h.scene.clear();
        h.tick();
        assert!(h.scene.roots().is_empty());
        assert!(h.scene.node(root).is_none());
        assert_eq!(h.canvas.count(Color::BLACK), 200 * 200);
    }

    #[test]
    fn missing_nodes_report_not_found() {
        let mut scene = Scene::new();
        let id = scene.add(Center::new());
        scene.remove(id).ok();
        assert!(matches!(scene.remove(id), Err(Error::NotFound(_))));
        assert!(matches!(
            scene.add_child(id, Center::new()),
            Err(Error::NotFound(_))
        ));
        assert!(matches!(
            scene.with_widget::<Center, _>(id, |_, _| ()),
            Err(Error::NotFound(_))
        ));
    }

    #[test]
    fn oversized_circles_do_not_abort_the_frame() {
        let mut h = Harness::with_size(Expanse::new(50, 50));
        h.add(Circle::new(50_000, Color::RED));
        h.add(Center::new().child(Circle::new(u32::MAX, Color::BLUE)));
        assert_eq!(h.scene.frames(), 2);
        assert_eq!(h.canvas.size(), Expanse::new(50, 50));
    }

    #[test]
    fn malformed_glyph_masks_paint_nothing() {
        let scene = Scene::with_parts(ShortMasks, SceneConfig::default());
        let mut h = Harness::with_scene(scene, Expanse::new(50, 50));
        let text = h.add(Text::new("x").with_color(Color::WHITE));
        assert_eq!(h.scene.frames(), 1);
        assert_eq!(h.rect(text), Rect::new(0, 0, 50, 50));
        assert_eq!(h.canvas.count(Color::WHITE), 0);
        assert_eq!(h.canvas.count(Color::BLACK), 50 * 50);
    }

    #[test]
    fn failed_mounts_leave_no_orphans() -> Result<()> {
        let mut scene = Scene::new();
        let host = scene.add(Center::new());
        let gone = scene.add(Center::new());
        scene.remove(gone)?;
        let before = scene.core().len();
        let added = scene.with_widget::<Center, _>(host, |_, ctx| {
            ctx.add_child_to(gone, Flex::row().child(Text::new("a")))
        })?;
        assert!(matches!(added, Err(Error::NotFound(_))));
        assert_eq!(scene.core().len(), before);
        assert!(scene.children(host).is_empty());
        Ok(())
    }
}
