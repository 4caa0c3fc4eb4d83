//! Frond: a retained-mode UI engine.
//!
//! A tree of widget nodes measures and arranges itself, routes pointer and
//! keyboard input to the right node, and paints into a pixel buffer once per
//! frame.
//!
//! # Quick Start
//!
//! The main entry points are:
//! - [`Scene`] - The scene root and frame loop
//! - [`Widget`] - The trait implemented by all widgets
//! - [`Signal`] - Typed callbacks widgets use to publish state changes
//!
//! # Module Organization
//!
//! - [`geom`] - Geometry primitives (Rect, Point, Expanse, etc.)
//! - [`layout`] - Constraints and flex arithmetic
//! - [`widgets`] - Built-in widget implementations

#![warn(missing_docs)]

mod core;

// Public modules
pub mod geom;
pub mod layout;
pub mod prelude;
pub mod widget;
pub mod widgets;

#[cfg(any(test, feature = "testing"))]
pub use core::testing;
// Re-export core types
pub use core::{Context, Core, NodeId, Scene, TypedId, ViewContext};
pub use core::{
    canvas, color, config, dump, error, event, font, logging, node, router, signal, state,
};

pub use canvas::Canvas;
pub use color::Color;
pub use signal::Signal;
pub use widget::{Element, EventOutcome, Widget, WidgetExt};
