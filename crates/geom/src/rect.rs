use super::{Axis, Expanse, Insets, Point};

/// A rectangle with a signed origin and unsigned size.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Rect {
    /// Top-left corner.
    pub tl: Point,
    /// Width.
    pub w: u32,
    /// Height.
    pub h: u32,
}

impl Rect {
    /// Construct a rectangle from coordinates and size.
    pub fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self {
            tl: Point { x, y },
            w,
            h,
        }
    }

    /// A rectangle at `tl` with the given size.
    pub fn at(tl: Point, size: Expanse) -> Self {
        Self {
            tl,
            w: size.w,
            h: size.h,
        }
    }

    /// A zero-sized rectangle at the origin.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Does this rect have zero area?
    pub fn is_zero(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// The size of this rectangle.
    pub fn expanse(&self) -> Expanse {
        Expanse::new(self.w, self.h)
    }

    /// Exclusive right edge, widened to avoid overflow.
    pub fn right(&self) -> i64 {
        self.tl.x as i64 + self.w as i64
    }

    /// Exclusive bottom edge, widened to avoid overflow.
    pub fn bottom(&self) -> i64 {
        self.tl.y as i64 + self.h as i64
    }

    /// The center point, truncated toward the origin corner.
    pub fn center(&self) -> Point {
        Point::new(
            (self.tl.x as i64 + self.w as i64 / 2) as i32,
            (self.tl.y as i64 + self.h as i64 / 2) as i32,
        )
    }

    /// Does the rectangle contain the point? Zero-area rectangles contain nothing.
    pub fn contains_point(&self, p: Point) -> bool {
        let (x, y) = (p.x as i64, p.y as i64);
        x >= self.tl.x as i64 && x < self.right() && y >= self.tl.y as i64 && y < self.bottom()
    }

    /// Shrink the rectangle by insets, collapsing to zero rather than underflowing.
    pub fn inset(&self, insets: Insets) -> Self {
        Self {
            tl: self.tl.offset(insets.left as i32, insets.top as i32),
            w: self.w.saturating_sub(insets.horizontal()),
            h: self.h.saturating_sub(insets.vertical()),
        }
    }

    /// Move the rectangle by an offset.
    pub fn shift(&self, dx: i32, dy: i32) -> Self {
        Self {
            tl: self.tl.offset(dx, dy),
            ..*self
        }
    }

    /// Intersect two rectangles. Returns `None` if they do not overlap.
    pub fn intersect(&self, other: &Self) -> Option<Self> {
        let left = (self.tl.x as i64).max(other.tl.x as i64);
        let top = (self.tl.y as i64).max(other.tl.y as i64);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right <= left || bottom <= top {
            return None;
        }
        Some(Self::new(
            left as i32,
            top as i32,
            (right - left) as u32,
            (bottom - top) as u32,
        ))
    }

    /// Origin coordinate along an axis.
    pub fn origin_along(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.tl.x,
            Axis::Vertical => self.tl.y,
        }
    }

    /// Extent along an axis.
    pub fn extent_along(&self, axis: Axis) -> u32 {
        self.expanse().along(axis)
    }

    /// Build a rectangle from main/cross origin and extent.
    pub fn from_axes(axis: Axis, main: i32, cross: i32, main_len: u32, cross_len: u32) -> Self {
        match axis {
            Axis::Horizontal => Self::new(main, cross, main_len, cross_len),
            Axis::Vertical => Self::new(cross, main, cross_len, main_len),
        }
    }
}

impl From<Expanse> for Rect {
    fn from(e: Expanse) -> Self {
        e.rect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains() {
        let r = Rect::new(10, 10, 5, 5);
        assert!(r.contains_point(Point::new(10, 10)));
        assert!(r.contains_point(Point::new(14, 14)));
        assert!(!r.contains_point(Point::new(15, 10)));
        assert!(!Rect::new(0, 0, 0, 10).contains_point(Point::zero()));
    }

    #[test]
    fn inset_collapses() {
        let r = Rect::new(0, 0, 10, 4);
        assert_eq!(r.inset(Insets::all(2)), Rect::new(2, 2, 6, 0));
        assert_eq!(r.inset(Insets::all(20)).expanse(), Expanse::zero());
    }

    #[test]
    fn intersect() {
        let a = Rect::new(0, 0, 10, 10);
        let b = Rect::new(-5, 5, 10, 10);
        assert_eq!(a.intersect(&b), Some(Rect::new(0, 5, 5, 5)));
        assert_eq!(a.intersect(&Rect::new(10, 0, 5, 5)), None);
    }

    #[test]
    fn axes() {
        let r = Rect::from_axes(Axis::Vertical, 3, 1, 10, 4);
        assert_eq!(r, Rect::new(1, 3, 4, 10));
        assert_eq!(r.extent_along(Axis::Vertical), 10);
        assert_eq!(r.origin_along(Axis::Horizontal), 1);
    }
}
