/// Space reserved on each edge of a rectangle.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Insets {
    /// Top edge.
    pub top: u32,
    /// Right edge.
    pub right: u32,
    /// Bottom edge.
    pub bottom: u32,
    /// Left edge.
    pub left: u32,
}

impl Insets {
    /// Construct insets from explicit edges, clockwise from the top.
    pub fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The same inset on every edge.
    pub fn all(v: u32) -> Self {
        Self::new(v, v, v, v)
    }

    /// Horizontal and vertical insets.
    pub fn symmetric(horizontal: u32, vertical: u32) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    /// Total horizontal inset.
    pub fn horizontal(&self) -> u32 {
        self.left.saturating_add(self.right)
    }

    /// Total vertical inset.
    pub fn vertical(&self) -> u32 {
        self.top.saturating_add(self.bottom)
    }
}
