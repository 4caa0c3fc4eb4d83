//! Convenience re-exports for common Frond types.

pub use crate::{
    Canvas, Color, Context, Element, EventOutcome, NodeId, Scene, Signal, TypedId, ViewContext,
    Widget, WidgetExt, error,
    event::{Button, Buttons, Event, InputSample, key::Key},
    geom::{Axis, Expanse, Insets, Point, Rect},
    layout::{Constraint, Constraints, CrossAxisAlignment, LayoutContext, MainAxisAlignment},
    state::NodeName,
};

/// Common result alias for Frond operations.
pub type Result<T> = error::Result<T>;
