//! The pixel surface widgets paint into.

use crate::{
    core::{color::Color, font::GlyphMask},
    geom::{Expanse, Point, Rect},
};

/// Squared distance component, wide enough for any pair of `i32` coordinates.
fn square(v: i64) -> i128 {
    i128::from(v) * i128::from(v)
}

/// An owned ARGB pixel buffer with a clip rectangle.
///
/// All drawing is clipped to both the buffer bounds and the current clip.
/// Out-of-range writes are dropped silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    /// Buffer size.
    size: Expanse,
    /// Row-major pixels.
    pixels: Vec<u32>,
    /// Active clip, always inside the buffer bounds.
    clip: Rect,
}

impl Canvas {
    /// A canvas of `size`, cleared to transparent.
    pub fn new(size: impl Into<Expanse>) -> Self {
        let size = size.into();
        Self {
            size,
            pixels: vec![0; size.area() as usize],
            clip: size.rect(),
        }
    }

    /// Reallocate for a new size. Contents are cleared.
    pub fn resize(&mut self, size: Expanse) {
        if size != self.size {
            *self = Self::new(size);
        }
    }

    /// The buffer size.
    pub fn size(&self) -> Expanse {
        self.size
    }

    /// Raw pixels, row-major, `0xAARRGGBB`.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// The pixel at `(x, y)`, if inside the buffer.
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| Color(self.pixels[i]))
    }

    /// The active clip rectangle.
    pub fn clip(&self) -> Rect {
        self.clip
    }

    /// Narrow the clip to `rect` and return the previous clip for
    /// [`Canvas::restore_clip`].
    pub fn push_clip(&mut self, rect: Rect) -> Rect {
        let prev = self.clip;
        self.clip = prev
            .intersect(&rect)
            .unwrap_or_else(|| Rect::at(prev.tl, Expanse::zero()));
        prev
    }

    /// Restore a clip returned by [`Canvas::push_clip`].
    pub fn restore_clip(&mut self, prev: Rect) {
        self.clip = prev;
    }

    /// Overwrite every pixel, ignoring the clip.
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.0);
    }

    /// Buffer index for a coordinate inside the buffer.
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as u32 >= self.size.w || y as u32 >= self.size.h {
            return None;
        }
        Some(y as usize * self.size.w as usize + x as usize)
    }

    /// Composite one pixel, honoring the clip.
    pub fn blend(&mut self, x: i32, y: i32, color: Color, coverage: u8) {
        if !self.clip.contains_point(Point::new(x, y)) {
            return;
        }
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color.over(Color(self.pixels[i]), coverage).0;
        }
    }

    /// Fill a rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let Some(area) = rect.intersect(&self.clip) else {
            return;
        };
        for y in area.tl.y..area.tl.y + area.h as i32 {
            for x in area.tl.x..area.tl.x + area.w as i32 {
                self.blend(x, y, color, 255);
            }
        }
    }

    /// Stroke a rectangle's outline, `width` pixels thick, inside its edges.
    pub fn stroke_rect(&mut self, rect: Rect, width: u32, color: Color) {
        let w = width.min(rect.w).min(rect.h);
        if w == 0 {
            return;
        }
        let (x, y) = (rect.tl.x, rect.tl.y);
        let inner_h = rect.h.saturating_sub(2 * w);
        self.fill_rect(Rect::new(x, y, rect.w, w), color);
        self.fill_rect(
            Rect::new(x, y.saturating_add_unsigned(rect.h - w), rect.w, w),
            color,
        );
        self.fill_rect(
            Rect::new(x, y.saturating_add_unsigned(w), w, inner_h),
            color,
        );
        self.fill_rect(
            Rect::new(
                x.saturating_add_unsigned(rect.w - w),
                y.saturating_add_unsigned(w),
                w,
                inner_h,
            ),
            color,
        );
    }

    /// Fill a rectangle with a vertical gradient from `top` to `bottom`.
    pub fn fill_gradient(&mut self, rect: Rect, top: Color, bottom: Color) {
        let Some(area) = rect.intersect(&self.clip) else {
            return;
        };
        let span = rect.h.saturating_sub(1).max(1) as f32;
        for y in area.tl.y..area.tl.y + area.h as i32 {
            let color = top.lerp(bottom, (y - rect.tl.y) as f32 / span);
            for x in area.tl.x..area.tl.x + area.w as i32 {
                self.blend(x, y, color, 255);
            }
        }
    }

    /// Inclusive pixel bounds of the square of half-side `r` around
    /// `center`, narrowed to the clip.
    fn clipped_square(&self, center: Point, r: i64) -> Option<(i64, i64, i64, i64)> {
        if self.clip.w == 0 || self.clip.h == 0 {
            return None;
        }
        let (cx, cy) = (i64::from(center.x), i64::from(center.y));
        let (left, top) = (i64::from(self.clip.tl.x), i64::from(self.clip.tl.y));
        let x0 = (cx - r).max(left);
        let x1 = (cx + r).min(left + i64::from(self.clip.w) - 1);
        let y0 = (cy - r).max(top);
        let y1 = (cy + r).min(top + i64::from(self.clip.h) - 1);
        (x0 <= x1 && y0 <= y1).then_some((x0, x1, y0, y1))
    }

    /// Fill a rectangle with rounded corners. The radius is clamped to half
    /// the shorter side.
    pub fn fill_rounded_rect(&mut self, rect: Rect, radius: u32, color: Color) {
        let r = i64::from(radius.min(rect.w / 2).min(rect.h / 2));
        if r == 0 {
            self.fill_rect(rect, color);
            return;
        }
        let Some(area) = rect.intersect(&self.clip) else {
            return;
        };
        let (left, top) = (i64::from(rect.tl.x), i64::from(rect.tl.y));
        let right = left + i64::from(rect.w) - 1;
        let bottom = top + i64::from(rect.h) - 1;
        for y in area.tl.y..area.tl.y + area.h as i32 {
            for x in area.tl.x..area.tl.x + area.w as i32 {
                let (px, py) = (i64::from(x), i64::from(y));
                let cx = px.clamp(left + r, right - r);
                let cy = py.clamp(top + r, bottom - r);
                let (dx, dy) = (px - cx, py - cy);
                if dx * dx + dy * dy <= r * r {
                    self.blend(x, y, color, 255);
                }
            }
        }
    }

    /// Fill a disc. Only the part inside the clip is visited.
    pub fn fill_circle(&mut self, center: Point, radius: u32, color: Color) {
        let r = i64::from(radius);
        let Some((x0, x1, y0, y1)) = self.clipped_square(center, r) else {
            return;
        };
        let (cx, cy) = (i64::from(center.x), i64::from(center.y));
        for y in y0..=y1 {
            let dy = y - cy;
            for x in x0..=x1 {
                if square(x - cx) + square(dy) <= square(r) {
                    self.blend(x as i32, y as i32, color, 255);
                }
            }
        }
    }

    /// Stroke a ring of the given thickness, inside `radius`.
    pub fn stroke_circle(&mut self, center: Point, radius: u32, thickness: u32, color: Color) {
        self.stroke_arc(center, radius, thickness, 1.0, color);
    }

    /// Stroke part of a ring, clockwise from twelve o'clock, covering
    /// `fraction` of the full turn.
    pub fn stroke_arc(
        &mut self,
        center: Point,
        radius: u32,
        thickness: u32,
        fraction: f32,
        color: Color,
    ) {
        let fraction = fraction.clamp(0.0, 1.0);
        if fraction == 0.0 {
            return;
        }
        let r = i64::from(radius);
        let inner = r - i64::from(thickness.min(radius));
        let Some((x0, x1, y0, y1)) = self.clipped_square(center, r) else {
            return;
        };
        let (cx, cy) = (i64::from(center.x), i64::from(center.y));
        for y in y0..=y1 {
            let dy = y - cy;
            for x in x0..=x1 {
                let dx = x - cx;
                let d2 = square(dx) + square(dy);
                if d2 > square(r) || d2 < square(inner) {
                    continue;
                }
                let angle = (dx as f64).atan2(-dy as f64);
                let turn = if angle < 0.0 {
                    angle / std::f64::consts::TAU + 1.0
                } else {
                    angle / std::f64::consts::TAU
                };
                if turn <= f64::from(fraction) {
                    self.blend(x as i32, y as i32, color, 255);
                }
            }
        }
    }

    /// Draw a line with Bresenham stepping, stamping a disc of radius
    /// `thickness / 2` at each step.
    pub fn line(&mut self, from: Point, to: Point, thickness: u32, color: Color) {
        let (fx, fy) = (i64::from(from.x), i64::from(from.y));
        let (tx, ty) = (i64::from(to.x), i64::from(to.y));
        let (mut x, mut y) = (fx, fy);
        let dx = (tx - fx).abs();
        let dy = -(ty - fy).abs();
        let sx = if fx < tx { 1 } else { -1 };
        let sy = if fy < ty { 1 } else { -1 };
        let mut err = dx + dy;
        let stamp = thickness / 2;
        loop {
            // x and y stay between the endpoints, so they fit in i32.
            let p = Point::new(x as i32, y as i32);
            if stamp == 0 {
                self.blend(p.x, p.y, color, 255);
            } else {
                self.fill_circle(p, stamp, color);
            }
            if x == tx && y == ty {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Composite a coverage mask with its top-left corner at `tl`. A mask
    /// whose coverage does not match its dimensions paints nothing.
    pub fn blend_mask(&mut self, tl: Point, mask: &GlyphMask, color: Color) {
        let width = mask.width as usize;
        if width.checked_mul(mask.height as usize) != Some(mask.alpha.len()) {
            return;
        }
        for (row, line) in mask.alpha.chunks_exact(width.max(1)).enumerate() {
            for (col, coverage) in line.iter().enumerate() {
                if *coverage > 0 {
                    self.blend(
                        tl.x.saturating_add(col as i32),
                        tl.y.saturating_add(row as i32),
                        color,
                        *coverage,
                    );
                }
            }
        }
    }

    /// Pixels as RGBA bytes, for image encoders.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for p in &self.pixels {
            let c = Color(*p);
            out.extend_from_slice(&[c.r(), c.g(), c.b(), c.a()]);
        }
        out
    }

    /// Count the pixels exactly equal to `color`.
    pub fn count(&self, color: Color) -> usize {
        self.pixels.iter().filter(|p| **p == color.0).count()
    }
}
