use frond::{
    error::Result, event::key::Key, geom::Expanse, testing::harness::Harness, widgets::Text,
};

use crate::form;

fn summary(h: &Harness, f: &form::Form) -> String {
    h.scene
        .widget::<Text>(f.summary)
        .map(|t| t.text().to_string())
        .unwrap_or_default()
}

#[test]
fn submit_summarizes_the_entry() -> Result<()> {
    let mut h = Harness::with_size(Expanse::new(480, 360));
    let f = form::build(&mut h.scene)?;
    h.tick();

    h.click(f.submit);
    assert_eq!(summary(&h, &f), "Please enter a name");

    h.click(f.name);
    h.type_text("Ada");
    h.click(f.plans[1]);
    h.click(f.submit);
    assert_eq!(summary(&h, &f), "Ada, no role on the pro plan");
    Ok(())
}

#[test]
fn dropdown_choice_and_enter() -> Result<()> {
    let mut h = Harness::with_size(Expanse::new(480, 360));
    let f = form::build(&mut h.scene)?;
    h.tick();

    let role = h.rect(f.role);
    h.click(f.role);
    // Rows are as tall as the closed header; pick the first item.
    h.click_at((role.center().x, role.tl.y + role.h as i32 * 3 / 2));
    h.click(f.name);
    h.type_text("Grace");
    h.key(Key::Enter);
    assert_eq!(summary(&h, &f), "Grace, Engineer on the free plan");
    Ok(())
}
