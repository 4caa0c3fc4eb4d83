/// A value clamped to a closed range, shared by sliders and progress
/// indicators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeValue {
    /// Lower bound.
    min: f32,
    /// Upper bound, never below `min`.
    max: f32,
    /// Current value, always within bounds.
    value: f32,
}

impl RangeValue {
    /// A range with `value` clamped into `[min, max]`. Reversed bounds are
    /// swapped and non-finite inputs fall back to zero.
    pub fn new(min: f32, max: f32, value: f32) -> Self {
        let finite = |v: f32| if v.is_finite() { v } else { 0.0 };
        let (min, max) = (finite(min), finite(max));
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        Self {
            min,
            max,
            value: finite(value).clamp(min, max),
        }
    }

    /// Lower bound.
    pub fn min(&self) -> f32 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Current value.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Clamp and store `v`. Returns true if the value changed.
    pub fn set(&mut self, v: f32) -> bool {
        if !v.is_finite() {
            return false;
        }
        let v = v.clamp(self.min, self.max);
        let changed = v != self.value;
        self.value = v;
        changed
    }

    /// Replace the bounds, re-clamping the value. Returns true if the value
    /// changed.
    pub fn set_bounds(&mut self, min: f32, max: f32) -> bool {
        let old = self.value;
        *self = Self::new(min, max, old);
        self.value != old
    }

    /// Position of the value within the range, 0 to 1. An empty range is 0.
    pub fn fraction(&self) -> f32 {
        let span = self.max - self.min;
        if span <= 0.0 {
            return 0.0;
        }
        ((self.value - self.min) / span).clamp(0.0, 1.0)
    }

    /// Set the value from a fraction of the range.
    pub fn set_fraction(&mut self, f: f32) -> bool {
        self.set(self.min + f.clamp(0.0, 1.0) * (self.max - self.min))
    }

    /// Is the value at the upper bound of a non-empty range?
    pub fn is_complete(&self) -> bool {
        self.max > self.min && self.value >= self.max
    }
}

impl Default for RangeValue {
    fn default() -> Self {
        Self::new(0.0, 100.0, 0.0)
    }
}
