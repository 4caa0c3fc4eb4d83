//! Geometry primitives, re-exported from the `geom` crate.

pub use ::geom::*;
