/// Non-character keys delivered to the focused widget.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Key {
    /// Cursor left.
    Left,
    /// Cursor right.
    Right,
    /// Cursor up.
    Up,
    /// Cursor down.
    Down,
    /// Start of line.
    Home,
    /// End of line.
    End,
    /// Delete backwards.
    Backspace,
    /// Delete forwards.
    Delete,
    /// Commit.
    Enter,
    /// Cancel.
    Escape,
    /// Tab.
    Tab,
}
