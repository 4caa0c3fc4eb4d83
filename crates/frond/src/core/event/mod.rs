//! Input samples supplied by the host and events routed to widgets.

pub mod key;

use std::ops::{BitOr, BitOrAssign};

use crate::geom::Point;

/// Pointer buttons.
#[derive(Debug, PartialOrd, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Button {
    /// Left mouse button. Drives press, click and focus.
    Left,
    /// Right mouse button.
    Right,
    /// Middle mouse button.
    Middle,
}

impl Button {
    /// Bit for this button in a [`Buttons`] set.
    fn bit(self) -> u8 {
        match self {
            Self::Left => 1,
            Self::Right => 2,
            Self::Middle => 4,
        }
    }
}

/// The set of buttons held down.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Buttons(u8);

impl Buttons {
    /// No buttons held.
    pub fn none() -> Self {
        Self(0)
    }

    /// Is `b` held?
    pub fn contains(self, b: Button) -> bool {
        self.0 & b.bit() != 0
    }

    /// Add a button to the set.
    pub fn insert(&mut self, b: Button) {
        self.0 |= b.bit();
    }

    /// Remove a button from the set.
    pub fn remove(&mut self, b: Button) {
        self.0 &= !b.bit();
    }

    /// Is no button held?
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl From<Button> for Buttons {
    fn from(b: Button) -> Self {
        Self(b.bit())
    }
}

impl BitOr<Button> for Buttons {
    type Output = Self;

    fn bitor(mut self, b: Button) -> Self {
        self.insert(b);
        self
    }
}

impl BitOrAssign<Button> for Buttons {
    fn bitor_assign(&mut self, b: Button) {
        self.insert(b);
    }
}

/// One frame's worth of raw input from the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputSample {
    /// Pointer position in surface coordinates.
    pub pointer: Point,
    /// Buttons currently held.
    pub buttons: Buttons,
    /// Characters typed since the previous sample.
    pub text: String,
    /// Special keys pressed since the previous sample, in order.
    pub keys: Vec<key::Key>,
}

impl InputSample {
    /// A sample with the pointer at `p` and nothing held.
    pub fn at(p: impl Into<Point>) -> Self {
        Self {
            pointer: p.into(),
            ..Default::default()
        }
    }

    /// Set the held buttons.
    pub fn with_buttons(mut self, buttons: impl Into<Buttons>) -> Self {
        self.buttons = buttons.into();
        self
    }

    /// Append typed text.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text.push_str(&text.into());
        self
    }

    /// Append a special key.
    pub fn with_key(mut self, k: key::Key) -> Self {
        self.keys.push(k);
        self
    }
}

/// Events routed to individual widgets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The pointer entered (true) or left (false) the widget.
    Hover(bool),
    /// The left button went down (true) over the widget, or was released
    /// (false) after going down over it.
    Press(bool),
    /// Press and release both landed on the widget.
    Click,
    /// The widget gained (true) or lost (false) keyboard focus.
    Focus(bool),
    /// The pointer moved while the widget is pressed.
    Drag(Point),
    /// A special key, delivered to the focused widget.
    Key(key::Key),
    /// Typed characters, delivered to the focused widget.
    Text(String),
}
