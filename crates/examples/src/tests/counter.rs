use frond::{NodeId, error::Result, geom::Expanse, testing::harness::Harness, widgets::Text};

use crate::counter::{self, status};

fn text(h: &Harness, node: NodeId) -> String {
    h.scene
        .widget::<Text>(node)
        .map(|t| t.text().to_string())
        .unwrap_or_default()
}

#[test]
fn ten_clicks_reach_ten() -> Result<()> {
    let mut h = Harness::with_size(Expanse::new(480, 360));
    let c = counter::build(&mut h.scene)?;
    h.tick();
    assert_eq!(text(&h, c.display), "0");
    for _ in 0..10 {
        h.click(c.increment);
    }
    assert_eq!(text(&h, c.display), "10");
    assert_eq!(text(&h, c.status), "Getting started");
    Ok(())
}

#[test]
fn reset_and_negative_counts() -> Result<()> {
    let mut h = Harness::with_size(Expanse::new(480, 360));
    let c = counter::build(&mut h.scene)?;
    h.tick();
    h.click(c.increment);
    h.click(c.reset);
    assert_eq!(text(&h, c.display), "0");
    h.click(c.decrement);
    assert_eq!(text(&h, c.display), "-1");
    assert_eq!(text(&h, c.status), "Going backwards");
    Ok(())
}

#[test]
fn status_bands() {
    assert_eq!(status(0).0, "Start counting!");
    assert_eq!(status(11).0, "Making progress!");
    assert_eq!(status(51).0, "You're on fire!");
}
