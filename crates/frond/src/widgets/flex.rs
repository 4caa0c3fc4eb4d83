//! Row and column containers.

use crate::{
    geom::{Axis, Expanse, Rect},
    layout::{
        Constraint, Constraints, CrossAxisAlignment, LayoutContext, MainAxisAlignment,
        allocate_flex_shares, cross_place, main_spacing,
    },
    state::NodeName,
    widget::Widget,
};

/// A linear container. Children are laid out along the main axis in order,
/// with a fixed gap between neighbours.
///
/// Children that report a flex weight (see [`super::Expanded`]) split
/// whatever main-axis space the fixed children and gaps leave over. Main-axis
/// alignment only applies when no child is flexible, since flex children
/// always consume the free space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flex {
    /// Main axis.
    axis: Axis,
    /// Space between adjacent children.
    gap: u32,
    /// Placement along the main axis.
    main_align: MainAxisAlignment,
    /// Placement across the main axis.
    cross_align: CrossAxisAlignment,
}

impl Flex {
    /// A container with the given main axis.
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            gap: 0,
            main_align: MainAxisAlignment::default(),
            cross_align: CrossAxisAlignment::default(),
        }
    }

    /// Children flow left to right.
    pub fn row() -> Self {
        Self::new(Axis::Horizontal)
    }

    /// Children flow top to bottom.
    pub fn column() -> Self {
        Self::new(Axis::Vertical)
    }

    /// Set the gap between children.
    pub fn with_gap(mut self, gap: u32) -> Self {
        self.gap = gap;
        self
    }

    /// Set main-axis alignment.
    pub fn with_main_align(mut self, align: MainAxisAlignment) -> Self {
        self.main_align = align;
        self
    }

    /// Set cross-axis alignment.
    pub fn with_cross_align(mut self, align: CrossAxisAlignment) -> Self {
        self.cross_align = align;
        self
    }

    /// The main axis.
    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// The gap between children.
    pub fn gap(&self) -> u32 {
        self.gap
    }

    /// Total gap space for `n` children.
    fn gaps(&self, n: usize) -> u32 {
        self.gap
            .saturating_mul(u32::try_from(n.saturating_sub(1)).unwrap_or(u32::MAX))
    }

    /// Constraints for measuring a child across the main axis.
    fn cross_constraint(&self, available: Constraint) -> Constraint {
        match (self.cross_align, available.max()) {
            (CrossAxisAlignment::Stretch, Some(n)) => Constraint::Exact(n),
            _ => available.loosen(),
        }
    }
}

impl Widget for Flex {
    fn measure(&mut self, c: Constraints, ctx: &mut dyn LayoutContext) -> Expanse {
        let axis = self.axis;
        let children = ctx.children();
        let cross_c = self.cross_constraint(c.along(axis.cross()));

        let mut main: u32 = 0;
        let mut cross: u32 = 0;
        let mut has_flex = false;
        for child in &children {
            // Flex children get their main size in arrange; only their cross
            // extent matters here.
            let flexible = ctx.child_flex(*child).is_some();
            has_flex |= flexible;
            let size = ctx.measure_child(
                *child,
                Constraints::from_axes(axis, Constraint::Unbounded, cross_c),
            );
            if !flexible {
                main = main.saturating_add(size.along(axis));
            }
            cross = cross.max(size.along(axis.cross()));
        }
        let main = main.saturating_add(self.gaps(children.len()));

        let main_c = c.along(axis);
        let main = match main_c.max() {
            Some(bound) if has_flex => bound,
            _ => main_c.apply(main),
        };
        let cross = c.along(axis.cross()).apply(cross);
        Expanse::from_axes(axis, main, cross)
    }

    fn arrange(&mut self, rect: Rect, ctx: &mut dyn LayoutContext) {
        let axis = self.axis;
        let children = ctx.children();
        if children.is_empty() {
            return;
        }
        let main_len = rect.extent_along(axis);
        let cross_len = rect.extent_along(axis.cross());
        let gaps = self.gaps(children.len());

        let flex: Vec<Option<u32>> = children.iter().map(|c| ctx.child_flex(*c)).collect();
        let fixed: u32 = children
            .iter()
            .zip(&flex)
            .filter(|(_, f)| f.is_none())
            .map(|(c, _)| ctx.measured(*c).along(axis))
            .fold(0, u32::saturating_add);
        let weights: Vec<u32> = flex.iter().flatten().copied().collect();
        let remaining = main_len.saturating_sub(fixed.saturating_add(gaps));
        let mut shares = allocate_flex_shares(remaining, &weights).into_iter();

        let cross_c = self.cross_constraint(Constraint::AtMost(cross_len));
        let mut sizes = Vec::with_capacity(children.len());
        for (child, f) in children.iter().zip(&flex) {
            let size = match f {
                Some(_) => {
                    let share = shares.next().unwrap_or(0);
                    let c = Constraints::from_axes(axis, Constraint::Exact(share), cross_c);
                    ctx.measure_child(*child, c)
                }
                None => ctx.measured(*child),
            };
            sizes.push(size);
        }

        let (lead, spacing) = if weights.is_empty() {
            main_spacing(
                fixed.saturating_add(gaps),
                main_len,
                children.len(),
                self.gap,
                self.main_align,
            )
        } else {
            (0, self.gap)
        };

        let cross_origin = rect.origin_along(axis.cross());
        let mut cursor = rect.origin_along(axis).saturating_add_unsigned(lead);
        for (child, size) in children.iter().zip(sizes) {
            let main = size.along(axis);
            let (offset, extent) = cross_place(size.along(axis.cross()), cross_len, self.cross_align);
            let r = Rect::from_axes(
                axis,
                cursor,
                cross_origin.saturating_add(offset),
                main,
                extent,
            );
            ctx.arrange_child(*child, r);
            cursor = cursor
                .saturating_add_unsigned(main)
                .saturating_add_unsigned(spacing);
        }
    }

    fn name(&self) -> NodeName {
        match self.axis {
            Axis::Horizontal => NodeName::convert("row"),
            Axis::Vertical => NodeName::convert("column"),
        }
    }
}
