//! Constraint types and the arithmetic shared by layout containers.

use crate::{
    core::{config::SceneConfig, font::FontBackend, id::NodeId},
    geom::{Axis, Expanse, Insets, Rect},
};

/// Bound on one axis during measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Constraint {
    /// The widget must take exactly this size.
    Exact(u32),
    /// The widget may take up to this size.
    AtMost(u32),
    /// No bound; the widget reports its intrinsic size.
    #[default]
    Unbounded,
}

impl Constraint {
    /// Clamp a desired size to this constraint.
    pub fn apply(self, v: u32) -> u32 {
        match self {
            Self::Exact(n) => n,
            Self::AtMost(n) => v.min(n),
            Self::Unbounded => v,
        }
    }

    /// The upper bound, if any.
    pub fn max(self) -> Option<u32> {
        match self {
            Self::Exact(n) | Self::AtMost(n) => Some(n),
            Self::Unbounded => None,
        }
    }

    /// Is there an upper bound?
    pub fn is_bounded(self) -> bool {
        self.max().is_some()
    }

    /// Turn an exact bound into an upper bound.
    pub fn loosen(self) -> Self {
        match self {
            Self::Exact(n) => Self::AtMost(n),
            c => c,
        }
    }

    /// Reduce the bound by `by`, saturating at zero.
    pub fn shrink(self, by: u32) -> Self {
        match self {
            Self::Exact(n) => Self::Exact(n.saturating_sub(by)),
            Self::AtMost(n) => Self::AtMost(n.saturating_sub(by)),
            Self::Unbounded => Self::Unbounded,
        }
    }
}

/// Per-axis bounds passed top-down during measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Constraints {
    /// Horizontal bound.
    pub width: Constraint,
    /// Vertical bound.
    pub height: Constraint,
}

impl Constraints {
    /// Construct from explicit axis bounds.
    pub fn new(width: Constraint, height: Constraint) -> Self {
        Self { width, height }
    }

    /// Both axes exact.
    pub fn tight(size: Expanse) -> Self {
        Self::new(Constraint::Exact(size.w), Constraint::Exact(size.h))
    }

    /// Both axes bounded above.
    pub fn loose(size: Expanse) -> Self {
        Self::new(Constraint::AtMost(size.w), Constraint::AtMost(size.h))
    }

    /// No bounds.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Clamp a desired size to these constraints.
    pub fn apply(&self, size: Expanse) -> Expanse {
        Expanse::new(self.width.apply(size.w), self.height.apply(size.h))
    }

    /// Loosen both axes.
    pub fn loosen(&self) -> Self {
        Self::new(self.width.loosen(), self.height.loosen())
    }

    /// Shrink both axes by insets.
    pub fn deflate(&self, insets: Insets) -> Self {
        Self::new(
            self.width.shrink(insets.horizontal()),
            self.height.shrink(insets.vertical()),
        )
    }

    /// The bound along an axis.
    pub fn along(&self, axis: Axis) -> Constraint {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Build constraints from main and cross bounds.
    pub fn from_axes(axis: Axis, main: Constraint, cross: Constraint) -> Self {
        match axis {
            Axis::Horizontal => Self::new(main, cross),
            Axis::Vertical => Self::new(cross, main),
        }
    }
}

/// Placement of children along the main axis when they do not fill it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MainAxisAlignment {
    /// Pack at the start.
    #[default]
    Start,
    /// Pack in the middle.
    Center,
    /// Pack at the end.
    End,
    /// Free space between children, none at the edges.
    SpaceBetween,
    /// Half-size spaces at the edges.
    SpaceAround,
    /// Equal spaces everywhere.
    SpaceEvenly,
}

/// Placement of each child across the main axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CrossAxisAlignment {
    /// Align to the leading edge.
    Start,
    /// Center in the cross extent.
    #[default]
    Center,
    /// Align to the trailing edge.
    End,
    /// Fill the cross extent.
    Stretch,
}

/// Layout services available to a widget while it is measured or arranged.
pub trait LayoutContext {
    /// The node being laid out.
    fn node_id(&self) -> NodeId;

    /// Visible children of the node being laid out, in paint order.
    fn children(&self) -> Vec<NodeId>;

    /// Measure a child. Failures degrade to a zero size.
    fn measure_child(&mut self, child: NodeId, c: Constraints) -> Expanse;

    /// Assign a child's final rectangle and arrange its subtree.
    fn arrange_child(&mut self, child: NodeId, rect: Rect);

    /// The size a child reported at its most recent measure.
    fn measured(&self, child: NodeId) -> Expanse;

    /// A child's flex weight, if it is a flex wrapper.
    fn child_flex(&self, child: NodeId) -> Option<u32>;

    /// The font backend used for text measurement.
    fn font(&self) -> &dyn FontBackend;

    /// Scene configuration, for default text sizes.
    fn config(&self) -> &SceneConfig;
}

/// Split `remaining` proportionally across `weights`, exactly.
///
/// Shares are floored, then leftover units go to the largest remainders,
/// ties broken by position. A zero weight counts as one.
pub fn allocate_flex_shares(remaining: u32, weights: &[u32]) -> Vec<u32> {
    if remaining == 0 || weights.is_empty() {
        return vec![0; weights.len()];
    }
    let total: u64 = weights.iter().map(|w| (*w).max(1) as u64).sum();

    let mut base = Vec::with_capacity(weights.len());
    let mut rem = Vec::with_capacity(weights.len());
    for w in weights {
        let prod = remaining as u64 * (*w).max(1) as u64;
        base.push((prod / total) as u32);
        rem.push(prod % total);
    }

    let used: u32 = base.iter().sum();
    let extra = remaining.saturating_sub(used) as usize;
    let mut idx: Vec<usize> = (0..weights.len()).collect();
    idx.sort_by(|a, b| rem[*b].cmp(&rem[*a]).then_with(|| a.cmp(b)));
    for target in idx.into_iter().take(extra) {
        base[target] = base[target].saturating_add(1);
    }
    base
}

/// Signed offset of a child within a span, truncated toward zero.
pub fn center_offset(child: u32, available: u32) -> i32 {
    ((available as i64 - child as i64) / 2) as i32
}

/// Cross-axis offset and extent of a child.
pub fn cross_place(child: u32, available: u32, align: CrossAxisAlignment) -> (i32, u32) {
    match align {
        CrossAxisAlignment::Start => (0, child),
        CrossAxisAlignment::Center => (center_offset(child, available), child),
        CrossAxisAlignment::End => ((available as i64 - child as i64) as i32, child),
        CrossAxisAlignment::Stretch => (0, available),
    }
}

/// Leading offset and inter-child spacing for `count` children occupying
/// `used` of `available` along the main axis, with `gap` between children.
pub fn main_spacing(
    used: u32,
    available: u32,
    count: usize,
    gap: u32,
    align: MainAxisAlignment,
) -> (u32, u32) {
    let free = available.saturating_sub(used);
    let n = count as u32;
    if n == 0 {
        return (0, gap);
    }
    match align {
        MainAxisAlignment::Start => (0, gap),
        MainAxisAlignment::Center => (free / 2, gap),
        MainAxisAlignment::End => (free, gap),
        MainAxisAlignment::SpaceBetween if n > 1 => (0, gap + free / (n - 1)),
        MainAxisAlignment::SpaceBetween => (0, gap),
        MainAxisAlignment::SpaceAround => (free / (2 * n), gap + free / n),
        MainAxisAlignment::SpaceEvenly => (free / (n + 1), gap + free / (n + 1)),
    }
}
