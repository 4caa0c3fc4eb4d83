//! Integration tests for pointer and keyboard routing.

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use frond::{
        NodeId, WidgetExt,
        error::Result,
        event::key::Key,
        geom::Expanse,
        layout::CrossAxisAlignment,
        testing::harness::Harness,
        widgets::{Button, Flex, Padding, Slider, TextInput},
    };

    type Log = Rc<RefCell<Vec<String>>>;

    fn log() -> Log {
        Rc::new(RefCell::new(Vec::new()))
    }

    fn take(log: &Log) -> Vec<String> {
        log.borrow_mut().drain(..).collect()
    }

    /// A button that records hover, press and click into `log`.
    fn button(name: &'static str, log: &Log) -> Button {
        let b = Button::new(name).with_size(50, 30);
        let l = log.clone();
        b.on_hover.connect(move |_, h: &bool| {
            let what = if *h { "enter" } else { "exit" };
            l.borrow_mut().push(format!("{name} {what}"));
        });
        let l = log.clone();
        b.on_press
            .connect(move |_, p: &bool| l.borrow_mut().push(format!("{name} press {p}")));
        let l = log.clone();
        b.on_click
            .connect(move |_, _| l.borrow_mut().push(format!("{name} click")));
        b
    }

    /// A text input that records focus changes into `log`.
    fn input(name: &'static str, log: &Log) -> TextInput {
        let t = TextInput::new();
        let l = log.clone();
        t.on_focus_changed
            .connect(move |_, f: &bool| l.borrow_mut().push(format!("{name} focus {f}")));
        t
    }

    /// Two buttons side by side at (20, 20) and (80, 20), each 50x30.
    fn two_buttons(h: &mut Harness, log: &Log) -> (NodeId, NodeId) {
        let pad = h.add(
            Padding::all(20).child(
                Flex::row()
                    .with_gap(10)
                    .with_cross_align(CrossAxisAlignment::Start)
                    .child(button("a", log))
                    .child(button("b", log)),
            ),
        );
        let row = h.scene.children(pad)[0];
        let kids = h.scene.children(row);
        (kids[0], kids[1])
    }

    /// Two text inputs stacked at y=20 and y=58.
    fn two_inputs(h: &mut Harness, log: &Log) -> (NodeId, NodeId) {
        let pad = h.add(
            Padding::all(20).child(
                Flex::column()
                    .with_gap(10)
                    .with_cross_align(CrossAxisAlignment::Start)
                    .child(input("a", log))
                    .child(input("b", log)),
            ),
        );
        let col = h.scene.children(pad)[0];
        let kids = h.scene.children(col);
        (kids[0], kids[1])
    }

    #[test]
    fn hover_exits_before_entering() {
        let mut h = Harness::new();
        let log = log();
        let (a, b) = two_buttons(&mut h, &log);
        assert!(take(&log).is_empty());

        h.move_to((30, 30));
        assert_eq!(take(&log), vec!["a enter"]);
        assert_eq!(h.scene.hovered(), Some(a));

        h.move_to((35, 30));
        assert!(take(&log).is_empty());

        h.move_to((90, 30));
        assert_eq!(take(&log), vec!["a exit", "b enter"]);
        assert_eq!(h.scene.hovered(), Some(b));

        h.move_to((5, 5));
        assert_eq!(take(&log), vec!["b exit"]);
        assert_eq!(h.scene.hovered(), None);
    }

    #[test]
    fn click_needs_release_on_the_pressed_node() {
        let mut h = Harness::new();
        let log = log();
        let (a, _) = two_buttons(&mut h, &log);

        h.press((30, 30));
        assert_eq!(h.scene.pressed(), Some(a));
        h.release((90, 30));
        let events = take(&log);
        assert!(events.contains(&"a press false".to_string()));
        assert!(!events.iter().any(|e| e.ends_with("click")));
        assert_eq!(h.scene.pressed(), None);

        h.click_at((30, 30));
        let events = take(&log);
        assert_eq!(
            events,
            vec!["b exit", "a enter", "a press true", "a press false", "a click"]
        );
    }

    #[test]
    fn press_on_empty_space_presses_nothing() {
        let mut h = Harness::new();
        let log = log();
        two_buttons(&mut h, &log);
        h.press((150, 150));
        h.move_to((30, 30));
        h.release((30, 30));
        assert_eq!(take(&log), vec!["a enter"]);
    }

    #[test]
    fn drag_follows_the_pressed_node() {
        let mut h = Harness::new();
        let slider = h.add(
            Flex::row()
                .with_cross_align(CrossAxisAlignment::Start)
                .child(Slider::new(0.0, 100.0, 0.0).with_size(100, 20)),
        );
        let slider = h.scene.children(slider)[0];
        let value = |h: &Harness| h.scene.widget::<Slider>(slider).map(|s| s.value());

        h.press((25, 10));
        assert_eq!(value(&h), Some(25.0));
        h.move_to((50, 10));
        assert_eq!(value(&h), Some(50.0));
        // Still tracking after the pointer leaves the slider.
        h.move_to((150, 80));
        assert_eq!(value(&h), Some(100.0));
        h.release((150, 80));
        h.move_to((10, 10));
        assert_eq!(value(&h), Some(100.0));
    }

    #[test]
    fn focus_is_lost_before_it_is_gained() {
        let mut h = Harness::new();
        let log = log();
        let (a, b) = two_inputs(&mut h, &log);

        h.click(a);
        assert_eq!(take(&log), vec!["a focus true"]);
        assert_eq!(h.scene.focused(), Some(a));

        h.click(b);
        assert_eq!(take(&log), vec!["a focus false", "b focus true"]);
        assert_eq!(h.scene.focused(), Some(b));

        // Pressing outside every focusable node clears focus.
        h.click_at((100, 180));
        assert_eq!(take(&log), vec!["b focus false"]);
        assert_eq!(h.scene.focused(), None);
    }

    #[test]
    fn programmatic_focus_only_lands_on_focusable_nodes() {
        let mut h = Harness::new();
        let log = log();
        let (a, _) = two_inputs(&mut h, &log);
        let root = h.scene.roots()[0];

        h.scene.set_focus(Some(a));
        assert_eq!(h.scene.focused(), Some(a));
        h.scene.set_focus(Some(root));
        assert_eq!(h.scene.focused(), None);
        assert_eq!(take(&log), vec!["a focus true", "a focus false"]);
    }

    #[test]
    fn keyboard_goes_only_to_the_focus_holder() {
        let mut h = Harness::new();
        let log = log();
        let (a, b) = two_inputs(&mut h, &log);
        let text = |h: &Harness, n: NodeId| {
            h.scene
                .widget::<TextInput>(n)
                .map(|t| t.text().to_string())
                .unwrap_or_default()
        };

        h.type_text("lost");
        assert_eq!(text(&h, a), "");

        h.click(b);
        h.type_text("hello");
        h.key(Key::Backspace);
        assert_eq!(text(&h, a), "");
        assert_eq!(text(&h, b), "hell");

        h.key(Key::Escape);
        assert_eq!(h.scene.focused(), None);
        h.type_text("!");
        assert_eq!(text(&h, b), "hell");
    }

    #[test]
    fn removal_clears_router_references() {
        let mut h = Harness::new();
        let log = log();
        let (a, _) = two_inputs(&mut h, &log);

        h.click(a);
        assert_eq!(h.scene.hovered(), Some(a));
        assert_eq!(h.scene.focused(), Some(a));

        h.scene.remove(a).expect("remove");
        assert_eq!(h.scene.hovered(), None);
        assert_eq!(h.scene.focused(), None);
        assert!(h.scene.node(a).is_none());

        h.tick();
        h.type_text("x");
        assert_eq!(take(&log), vec!["a focus true"]);
    }

    #[test]
    fn hidden_nodes_are_not_hit() {
        let mut h = Harness::new();
        let log = log();
        let (_, b) = two_buttons(&mut h, &log);
        h.scene.set_hidden(b, true);
        h.move_to((90, 30));
        assert!(take(&log).is_empty());
        assert_eq!(h.scene.hovered(), None);
    }

    #[test]
    fn pressing_a_button_outside_text_entry_clears_focus() {
        let mut h = Harness::with_size(Expanse::new(400, 200));
        let log = log();
        let pad = h.add(
            Padding::all(20).child(
                Flex::row()
                    .with_gap(10)
                    .with_cross_align(CrossAxisAlignment::Start)
                    .child(input("a", &log))
                    .child(button("ok", &log)),
            ),
        );
        let row = h.scene.children(pad)[0];
        let kids = h.scene.children(row);
        let (a, ok) = (kids[0], kids[1]);
        assert!(!h.rect(a).contains_point(h.rect(ok).center()));

        h.click(a);
        assert_eq!(take(&log), vec!["a focus true"]);

        h.click(ok);
        assert_eq!(
            take(&log),
            vec![
                "ok enter",
                "a focus false",
                "ok press true",
                "ok press false",
                "ok click"
            ]
        );
        assert_eq!(h.scene.focused(), None);
    }

    #[test]
    fn non_interactive_nodes_are_never_hovered_pressed_or_focused() -> Result<()> {
        let mut h = Harness::new();
        let log = log();
        let (a, b) = two_buttons(&mut h, &log);
        h.scene.set_interactive(b, false)?;
        h.move_to((90, 30));
        assert_eq!(h.scene.hovered(), None);
        h.press((90, 30));
        assert_eq!(h.scene.pressed(), None);
        h.release((90, 30));
        assert!(take(&log).is_empty());
        h.click(a);
        assert!(take(&log).contains(&"a click".to_string()));

        let mut h = Harness::new();
        let (x, y) = two_inputs(&mut h, &log);
        h.scene.set_interactive(x, false)?;
        h.click(x);
        assert_eq!(h.scene.focused(), None);
        h.scene.set_focus(Some(x));
        assert_eq!(h.scene.focused(), None);
        assert!(take(&log).is_empty());

        // Turning interactivity off drops the node's existing references.
        h.click(y);
        assert_eq!(h.scene.focused(), Some(y));
        h.scene.set_interactive(y, false)?;
        assert_eq!(h.scene.focused(), None);
        assert_eq!(h.scene.hovered(), None);
        Ok(())
    }
}
