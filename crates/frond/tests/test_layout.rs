//! Integration tests for measure and arrange.

#[cfg(test)]
mod tests {
    use frond::{
        WidgetExt,
        geom::{Expanse, Rect},
        layout::{CrossAxisAlignment, MainAxisAlignment},
        testing::harness::Harness,
        widgets::{Center, Expanded, Flex, Padding, SizedBox, Text},
    };

    fn stretch_row() -> Flex {
        Flex::row().with_cross_align(CrossAxisAlignment::Stretch)
    }

    #[test]
    fn flex_weights_split_remaining_space() {
        let mut h = Harness::with_size(Expanse::new(300, 40));
        let row = h.add(stretch_row().children([Expanded::new(1), Expanded::new(2)]));
        let kids = h.scene.children(row);
        assert_eq!(h.rect(kids[0]), Rect::new(0, 0, 100, 40));
        assert_eq!(h.rect(kids[1]), Rect::new(100, 0, 200, 40));
    }

    #[test]
    fn leftover_pixels_go_to_the_first_children() {
        let mut h = Harness::with_size(Expanse::new(100, 10));
        let row = h.add(stretch_row().children([
            Expanded::new(1),
            Expanded::new(1),
            Expanded::new(1),
        ]));
        let widths: Vec<u32> = h.scene.children(row).iter().map(|c| h.rect(*c).w).collect();
        assert_eq!(widths, vec![34, 33, 33]);
    }

    #[test]
    fn fixed_children_and_gaps_come_off_the_top() {
        let mut h = Harness::with_size(Expanse::new(300, 10));
        let row = h.add(
            stretch_row()
                .with_gap(10)
                .child(SizedBox::new(50, 10))
                .child(Expanded::new(1).child(SizedBox::new(5, 5)))
                .child(SizedBox::new(50, 10)),
        );
        let kids = h.scene.children(row);
        assert_eq!(h.rect(kids[0]).tl.x, 0);
        assert_eq!(h.rect(kids[1]), Rect::new(60, 0, 180, 10));
        assert_eq!(h.rect(kids[2]).tl.x, 250);
        // The expanded child hands its whole share down.
        let inner = h.scene.children(kids[1])[0];
        assert_eq!(h.rect(inner), Rect::new(60, 0, 180, 10));
    }

    #[test]
    fn gaps_separate_fixed_children() {
        let mut h = Harness::new();
        let col = h.add(
            Flex::column()
                .with_gap(5)
                .with_cross_align(CrossAxisAlignment::Start)
                .children([
                    SizedBox::new(20, 10),
                    SizedBox::new(30, 10),
                    SizedBox::new(40, 10),
                ]),
        );
        let rects: Vec<Rect> = h.scene.children(col).iter().map(|c| h.rect(*c)).collect();
        assert_eq!(
            rects,
            vec![
                Rect::new(0, 0, 20, 10),
                Rect::new(0, 15, 30, 10),
                Rect::new(0, 30, 40, 10),
            ]
        );
    }

    #[test]
    fn hidden_children_take_no_space() {
        let mut h = Harness::new();
        let row = h.add(
            Flex::row()
                .with_gap(10)
                .children([SizedBox::new(20, 20), SizedBox::new(20, 20), SizedBox::new(20, 20)]),
        );
        let kids = h.scene.children(row);
        assert_eq!(h.rect(kids[2]).tl.x, 60);
        h.scene.set_hidden(kids[1], true);
        h.tick();
        assert_eq!(h.rect(kids[2]).tl.x, 30);
    }

    #[test]
    fn center_recenters_text_on_resize() {
        let mut h = Harness::with_size(Expanse::new(200, 200));
        let center = h.add(Center::new().child(Text::new("ABCgyp").with_size(24)));
        let text = h.scene.children(center)[0];
        assert_eq!(h.rect(text), Rect::new(64, 88, 72, 24));
        h.resize(Expanse::new(300, 100));
        assert_eq!(h.rect(text), Rect::new(114, 38, 72, 24));
        assert_eq!(h.rect(center), Rect::new(0, 0, 300, 100));
    }

    #[test]
    fn padding_insets_children() {
        let mut h = Harness::with_size(Expanse::new(100, 60));
        let pad = h.add(Padding::all(10).child(SizedBox::new(5, 5)));
        let child = h.scene.children(pad)[0];
        assert_eq!(h.rect(child), Rect::new(10, 10, 80, 40));
    }

    /// Main-axis x offsets of a 200 wide row holding a 20 and a 40 wide box.
    fn aligned_offsets(align: MainAxisAlignment) -> Vec<i32> {
        let mut h = Harness::with_size(Expanse::new(200, 40));
        let row = h.add(
            Flex::row()
                .with_main_align(align)
                .with_cross_align(CrossAxisAlignment::Start)
                .children([SizedBox::new(20, 10), SizedBox::new(40, 10)]),
        );
        h.scene
            .children(row)
            .iter()
            .map(|c| h.rect(*c).tl.x)
            .collect()
    }

    #[test]
    fn main_axis_alignment_places_fixed_children() {
        assert_eq!(aligned_offsets(MainAxisAlignment::Start), vec![0, 20]);
        assert_eq!(aligned_offsets(MainAxisAlignment::Center), vec![70, 90]);
        assert_eq!(aligned_offsets(MainAxisAlignment::End), vec![140, 160]);
        assert_eq!(aligned_offsets(MainAxisAlignment::SpaceBetween), vec![0, 160]);
    }

    #[test]
    fn expanded_children_disable_main_axis_alignment() {
        let mut h = Harness::with_size(Expanse::new(200, 40));
        let row = h.add(
            Flex::row()
                .with_main_align(MainAxisAlignment::End)
                .with_cross_align(CrossAxisAlignment::Start)
                .child(SizedBox::new(20, 10))
                .child(Expanded::new(1)),
        );
        let kids = h.scene.children(row);
        assert_eq!(h.rect(kids[0]), Rect::new(0, 0, 20, 10));
        let grown = h.rect(kids[1]);
        assert_eq!((grown.tl.x, grown.w), (20, 180));
    }
}
