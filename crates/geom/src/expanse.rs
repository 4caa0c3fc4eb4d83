use super::{Axis, Point, Rect};

/// An `Expanse` has a width and height but no location. Measurement results
/// and surface dimensions are expanses.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Expanse {
    /// Width.
    pub w: u32,
    /// Height.
    pub h: u32,
}

impl Expanse {
    /// Construct an expanse.
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }

    /// The zero expanse.
    pub fn zero() -> Self {
        Self::default()
    }

    /// The area of this expanse.
    pub fn area(&self) -> u64 {
        self.w as u64 * self.h as u64
    }

    /// Does either dimension vanish?
    pub fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// A `Rect` with these dimensions at the origin.
    pub fn rect(&self) -> Rect {
        Rect {
            tl: Point::zero(),
            w: self.w,
            h: self.h,
        }
    }

    /// True if this expanse can completely enclose `other`.
    pub fn contains(&self, other: &Self) -> bool {
        self.w >= other.w && self.h >= other.h
    }

    /// The extent along an axis.
    pub fn along(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.w,
            Axis::Vertical => self.h,
        }
    }

    /// Build an expanse from main and cross extents.
    pub fn from_axes(axis: Axis, main: u32, cross: u32) -> Self {
        match axis {
            Axis::Horizontal => Self::new(main, cross),
            Axis::Vertical => Self::new(cross, main),
        }
    }

    /// Component-wise minimum.
    pub fn min(&self, other: Self) -> Self {
        Self::new(self.w.min(other.w), self.h.min(other.h))
    }

    /// Component-wise maximum.
    pub fn max(&self, other: Self) -> Self {
        Self::new(self.w.max(other.w), self.h.max(other.h))
    }
}

impl From<Rect> for Expanse {
    fn from(r: Rect) -> Self {
        Self { w: r.w, h: r.h }
    }
}

impl From<(u32, u32)> for Expanse {
    fn from(v: (u32, u32)) -> Self {
        Self { w: v.0, h: v.1 }
    }
}
