//! Pointer and keyboard routing.
//!
//! One [`InputSample`] per frame drives a small state machine over three
//! node references: the hovered node, the pressed node and the focused node.
//! All three are cleared when their node leaves the tree.

use tracing::{debug, trace};

use crate::{
    core::{
        event::{Button, Buttons, Event, InputSample},
        id::NodeId,
        world::Core,
    },
    geom::Point,
};

/// Router state carried between samples.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputState {
    /// Pointer position from the latest sample.
    pub(crate) pointer: Point,
    /// Buttons held in the latest sample.
    pub(crate) buttons: Buttons,
    /// Topmost interactive node under the pointer.
    pub(crate) hovered: Option<NodeId>,
    /// Node the left button went down on, until release.
    pub(crate) pressed: Option<NodeId>,
    /// Keyboard focus holder.
    pub(crate) focused: Option<NodeId>,
}

impl InputState {
    /// Pointer position from the latest sample.
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Buttons held in the latest sample.
    pub fn buttons(&self) -> Buttons {
        self.buttons
    }

    /// The hovered node.
    pub fn hovered(&self) -> Option<NodeId> {
        self.hovered
    }

    /// The pressed node.
    pub fn pressed(&self) -> Option<NodeId> {
        self.pressed
    }

    /// The focused node.
    pub fn focused(&self) -> Option<NodeId> {
        self.focused
    }

    /// Drop every reference for which `gone` returns true.
    pub(crate) fn forget(&mut self, gone: impl Fn(NodeId) -> bool) {
        for slot in [&mut self.hovered, &mut self.pressed, &mut self.focused] {
            if slot.is_some_and(&gone) {
                *slot = None;
            }
        }
    }
}

/// Apply one input sample: hover transitions, then press/release and
/// focus, then keyboard delivery to the focus holder.
pub(crate) fn route(core: &mut Core, sample: &InputSample) {
    let moved = sample.pointer != core.input.pointer;
    core.input.pointer = sample.pointer;
    let target = core.locate(sample.pointer);
    trace!(pointer = ?sample.pointer, ?target, "route");

    update_hover(core, target);

    let was_down = core.input.buttons.contains(Button::Left);
    let is_down = sample.buttons.contains(Button::Left);
    core.input.buttons = sample.buttons;
    match (was_down, is_down) {
        (false, true) => press(core, target, sample.pointer),
        (true, false) => release(core, target),
        (true, true) if moved => {
            if let Some(pressed) = core.input.pressed {
                core.notify(pressed, Event::Drag(sample.pointer));
            }
        }
        _ => {}
    }

    route_keyboard(core, sample);
}

/// Move hover to `target`, exiting the old node before entering the new one.
fn update_hover(core: &mut Core, target: Option<NodeId>) {
    if target == core.input.hovered {
        return;
    }
    if let Some(old) = core.input.hovered.take() {
        core.notify(old, Event::Hover(false));
    }
    let target = target.filter(|t| core.nodes.contains_key(*t));
    core.input.hovered = target;
    if let Some(new) = target {
        core.notify(new, Event::Hover(true));
    }
}

/// Left button went down.
fn press(core: &mut Core, target: Option<NodeId>, at: Point) {
    let target = target.filter(|t| core.nodes.contains_key(*t));
    let focusable = target.filter(|t| core.nodes[*t].focusable);
    if focusable.is_some() {
        set_focus(core, focusable);
    } else if core.input.focused.is_some() && !core.within_focusable(at) {
        set_focus(core, None);
    }
    core.input.pressed = target.filter(|t| core.nodes.contains_key(*t));
    if let Some(t) = core.input.pressed {
        core.notify(t, Event::Press(true));
    }
}

/// Left button went up. A click fires only when release lands on the
/// node that was pressed.
fn release(core: &mut Core, target: Option<NodeId>) {
    let Some(pressed) = core.input.pressed.take() else {
        return;
    };
    core.notify(pressed, Event::Press(false));
    if target == Some(pressed) && core.nodes.contains_key(pressed) {
        core.notify(pressed, Event::Click);
    } else {
        trace!(?pressed, ?target, "press cancelled");
    }
}

/// Deliver typed text, then special keys, to the focus holder only.
fn route_keyboard(core: &mut Core, sample: &InputSample) {
    if sample.text.is_empty() && sample.keys.is_empty() {
        return;
    }
    if core.input.focused.is_none() {
        trace!("keyboard input dropped: nothing focused");
        return;
    }
    if !sample.text.is_empty()
        && let Some(f) = core.input.focused
    {
        core.notify(f, Event::Text(sample.text.clone()));
    }
    for key in &sample.keys {
        // A handler may drop focus part way through the sample.
        let Some(f) = core.input.focused else {
            break;
        };
        core.notify(f, Event::Key(*key));
    }
}

/// Move focus. The old holder hears `Focus(false)` strictly before the
/// new holder hears `Focus(true)`, and at no point do both hold focus.
pub(crate) fn set_focus(core: &mut Core, node: Option<NodeId>) {
    if node == core.input.focused {
        return;
    }
    debug!(from = ?core.input.focused, to = ?node, "focus");
    if let Some(old) = core.input.focused.take() {
        core.notify(old, Event::Focus(false));
    }
    let node = node.filter(|n| {
        core.nodes
            .get(*n)
            .is_some_and(|n| n.focusable && n.interactive)
    });
    core.input.focused = node;
    if let Some(new) = node {
        core.notify(new, Event::Focus(true));
    }
}
