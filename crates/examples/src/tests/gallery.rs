use frond::{
    error::Result,
    geom::{Expanse, Point},
    testing::harness::Harness,
    widgets::{CircularIndicator, ProgressBar, Text},
};

use crate::gallery;

#[test]
fn slider_drives_indicators() -> Result<()> {
    let mut h = Harness::with_size(Expanse::new(480, 420));
    let g = gallery::build(&mut h.scene)?;
    h.tick();

    let track = h.rect(g.slider);
    let y = track.center().y;
    h.press(Point::new(track.tl.x, y));
    h.move_to(Point::new(track.tl.x + track.w as i32 / 2, y));
    h.release(Point::new(track.tl.x + track.w as i32 / 2, y));
    let bar = h.scene.widget::<ProgressBar>(g.bar).map(ProgressBar::value);
    let ring = h
        .scene
        .widget::<CircularIndicator>(g.ring)
        .map(CircularIndicator::value);
    assert_eq!(bar, Some(50.0));
    assert_eq!(ring, Some(50.0));

    h.press(Point::new(track.tl.x + 5, y));
    h.move_to(Point::new(track.tl.x + track.w as i32 + 50, y));
    let status = h.scene.widget::<Text>(g.status).map(|t| t.text().to_string());
    assert_eq!(status.as_deref(), Some("Complete!"));
    Ok(())
}

#[test]
fn circles_report_clicks() -> Result<()> {
    let mut h = Harness::with_size(Expanse::new(480, 420));
    let g = gallery::build(&mut h.scene)?;
    h.tick();
    h.click(g.circles[1]);
    let status = h.scene.widget::<Text>(g.status).map(|t| t.text().to_string());
    assert_eq!(status.as_deref(), Some("Circle 2 clicked"));
    Ok(())
}
