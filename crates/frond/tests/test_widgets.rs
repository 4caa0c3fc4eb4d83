//! Integration tests for interactive widgets inside a running scene.

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use frond::{
        NodeId, WidgetExt,
        error::Result,
        event::key::Key,
        geom::Rect,
        layout::CrossAxisAlignment,
        testing::harness::Harness,
        widgets::{Dropdown, Flex, ProgressBar, RadioButton, RadioGroup, TextInput},
    };

    fn column() -> Flex {
        Flex::column()
            .with_gap(4)
            .with_cross_align(CrossAxisAlignment::Start)
    }

    #[test]
    fn dropdown_opens_selects_and_closes() {
        let mut h = Harness::new();
        let col = h.add(column().child(Dropdown::new(["red", "green", "blue"]).with_size(100, 20)));
        let dd = h.scene.children(col)[0];
        let dropdown = |h: &Harness| {
            h.scene
                .widget::<Dropdown>(dd)
                .map(|d| (d.is_open(), d.selected()))
        };

        h.click_at((50, 10));
        assert_eq!(dropdown(&h), Some((true, None)));
        assert_eq!(h.rect(dd), Rect::new(0, 0, 100, 80));
        assert_eq!(h.scene.focused(), Some(dd));

        h.click_at((50, 65));
        assert_eq!(dropdown(&h), Some((false, Some(2))));
        assert_eq!(h.rect(dd), Rect::new(0, 0, 100, 20));

        h.key(Key::Up);
        assert_eq!(dropdown(&h), Some((false, Some(1))));
    }

    #[test]
    fn dropdown_closes_when_focus_leaves() {
        let mut h = Harness::new();
        let col = h.add(column().child(Dropdown::new(["a", "b"]).with_size(100, 20)));
        let dd = h.scene.children(col)[0];
        h.click_at((50, 10));
        h.click_at((150, 150));
        assert_eq!(h.scene.focused(), None);
        let open = h.scene.widget::<Dropdown>(dd).map(Dropdown::is_open);
        assert_eq!(open, Some(false));
    }

    #[test]
    fn dropdown_takes_focus_from_text_input() {
        let mut h = Harness::new();
        let col = h.add(
            column()
                .child(TextInput::new().with_width(100))
                .child(Dropdown::new(["a", "b"]).with_size(100, 20)),
        );
        let kids = h.scene.children(col);
        let (input, dd) = (kids[0], kids[1]);
        let text = |h: &Harness| {
            h.scene
                .widget::<TextInput>(input)
                .map(|t| t.text().to_string())
        };

        h.click(input);
        h.type_text("hi");
        assert_eq!(text(&h).as_deref(), Some("hi"));

        h.click(dd);
        assert_eq!(h.scene.focused(), Some(dd));
        assert!(h.scene.widget::<TextInput>(input).is_some_and(|t| !t.is_focused()));
        h.type_text("x");
        assert_eq!(text(&h).as_deref(), Some("hi"));
        h.key(Key::Escape);
        let open = h.scene.widget::<Dropdown>(dd).map(Dropdown::is_open);
        assert_eq!(open, Some(false));
    }

    #[test]
    fn radio_group_is_exclusive() {
        let mut h = Harness::new();
        let group = RadioGroup::new();
        let col = h.add(column().children(
            ["one", "two", "three"].map(|l| RadioButton::new(l).with_group(&group)),
        ));
        let radios = h.scene.children(col);
        assert_eq!(group.members(), radios);
        let selected = |h: &Harness| -> Vec<bool> {
            radios
                .iter()
                .map(|r| {
                    h.scene
                        .widget::<RadioButton>(*r)
                        .is_some_and(RadioButton::is_selected)
                })
                .collect()
        };

        h.click(radios[0]);
        assert_eq!(selected(&h), vec![true, false, false]);
        h.click(radios[2]);
        assert_eq!(selected(&h), vec![false, false, true]);
        h.click(radios[2]);
        assert_eq!(selected(&h), vec![false, false, true]);
    }

    #[test]
    fn progress_reports_completion() -> Result<()> {
        let mut h = Harness::new();
        let bar = h.scene.add_typed(ProgressBar::new(0.0, 4.0, 0.0));
        h.tick();
        let log: Rc<RefCell<Vec<String>>> = Rc::default();
        let l = log.clone();
        let c = log.clone();
        h.scene.with_widget::<ProgressBar, _>(bar, |b, _| {
            b.on_value_changed()
                .connect(move |_, v: &f32| l.borrow_mut().push(format!("value {v}")));
            b.on_complete()
                .connect(move |_, _| c.borrow_mut().push("complete".into()));
        })?;
        for step in 1..=5 {
            h.scene
                .with_widget::<ProgressBar, _>(bar, |b, ctx| b.set_value(ctx, step as f32))?;
        }
        assert_eq!(
            *log.borrow(),
            vec!["value 1", "value 2", "value 3", "value 4", "complete"]
        );
        Ok(())
    }

    #[test]
    fn radio_members_are_tracked_by_node() {
        let mut h = Harness::new();
        let group = RadioGroup::new();
        let a: NodeId = h.add(RadioButton::new("a").with_group(&group));
        assert_eq!(group.members(), vec![a]);
    }
}
