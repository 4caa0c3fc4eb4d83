use std::{cell::RefCell, rc::Rc};

use frond::{
    Context, NodeId, Scene, WidgetExt,
    error::Result,
    layout::CrossAxisAlignment,
    widgets::{Button, Dropdown, Flex, Padding, RadioButton, RadioGroup, Text, TextInput},
};
use tracing::warn;

use crate::palette;

/// Choices offered by the dropdown.
pub const ROLES: [&str; 3] = ["Engineer", "Designer", "Manager"];

/// Handles into a built form scene.
#[derive(Debug, Clone, Copy)]
pub struct Form {
    /// Name entry.
    pub name: NodeId,
    /// Role choice.
    pub role: NodeId,
    /// Plan choices.
    pub plans: [NodeId; 2],
    /// Submit button.
    pub submit: NodeId,
    /// Result line.
    pub summary: NodeId,
}

/// What the user has entered so far.
#[derive(Debug, Default)]
struct Entry {
    /// Name text.
    name: String,
    /// Chosen role.
    role: Option<String>,
    /// Chosen plan.
    plan: Option<&'static str>,
}

impl Entry {
    /// One-line summary for the result text.
    fn summary(&self) -> String {
        if self.name.is_empty() {
            return "Please enter a name".into();
        }
        format!(
            "{}, {} on the {} plan",
            self.name,
            self.role.as_deref().unwrap_or("no role"),
            self.plan.unwrap_or("free"),
        )
    }
}

/// Build the form into `scene`.
pub fn build(scene: &mut Scene) -> Result<Form> {
    let plans = RadioGroup::new();
    let root = scene.add(
        Padding::all(16).child(
            Flex::column()
                .with_gap(12)
                .with_cross_align(CrossAxisAlignment::Start)
                .child(Text::new("SIGN UP").with_size(32))
                .child(TextInput::new().with_placeholder("Your name").with_width(240))
                .child(Dropdown::new(ROLES).with_placeholder("Role").with_size(240, 28))
                .child(
                    Flex::row()
                        .with_gap(16)
                        .child(RadioButton::new("Free").with_group(&plans))
                        .child(RadioButton::new("Pro").with_group(&plans)),
                )
                .child(
                    Button::new("Submit")
                        .with_size(120, 36)
                        .with_style(palette::button(palette::BLUE)),
                )
                .child(Text::new("").with_color(palette::MUTED)),
        ),
    );
    let column = scene.child_at(root, 0)?;
    let radios = scene.child_at(column, 3)?;
    let form = Form {
        name: scene.child_at(column, 1)?,
        role: scene.child_at(column, 2)?,
        plans: [scene.child_at(radios, 0)?, scene.child_at(radios, 1)?],
        submit: scene.child_at(column, 4)?,
        summary: scene.child_at(column, 5)?,
    };

    let entry = Rc::new(RefCell::new(Entry::default()));

    let e = entry.clone();
    scene.with_widget::<TextInput, _>(form.name, |t, _| {
        t.on_text_changed
            .connect(move |_, s: &String| e.borrow_mut().name = s.trim().to_string());
    })?;

    let e = entry.clone();
    scene.with_widget::<Dropdown, _>(form.role, |d, _| {
        d.on_item_selected
            .connect(move |_, s: &String| e.borrow_mut().role = Some(s.clone()));
    })?;

    for (plan, node) in ["free", "pro"].into_iter().zip(form.plans) {
        let e = entry.clone();
        scene.with_widget::<RadioButton, _>(node, |r, _| {
            r.on_selected
                .connect(move |_, _| e.borrow_mut().plan = Some(plan));
        })?;
    }

    let submit = move |ctx: &mut dyn Context, entry: &Rc<RefCell<Entry>>| {
        let summary = entry.borrow().summary();
        if let Err(e) = ctx.with_widget::<Text, _>(form.summary, |t, _| t.set_text(summary.clone()))
        {
            warn!(error = %e, "summary update failed");
        }
    };
    let e = entry.clone();
    scene.with_widget::<Button, _>(form.submit, |b, _| {
        b.on_click.connect(move |ctx, _| submit(ctx, &e));
    })?;
    scene.with_widget::<TextInput, _>(form.name, |t, _| {
        t.on_enter.connect(move |ctx, _| submit(ctx, &entry));
    })?;
    Ok(form)
}
