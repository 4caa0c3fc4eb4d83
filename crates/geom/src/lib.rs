//! Geometry primitives used across frond.

/// Width/height size type.
mod expanse;
/// Per-edge insets.
mod insets;
/// Point helpers.
mod point;
/// Rectangle operations.
mod rect;

pub use expanse::Expanse;
pub use insets::Insets;
pub use point::Point;
pub use rect::Rect;

/// Layout axis.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Axis {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
}

impl Axis {
    /// The perpendicular axis.
    pub fn cross(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }
}
