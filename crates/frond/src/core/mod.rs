//! Core types: arena, contexts, routing, painting and the scene root.

/// Pixel buffer and drawing primitives.
pub mod canvas;
/// ARGB colors.
pub mod color;
/// Scene configuration.
pub mod config;
/// Core context traits and implementations.
pub mod context;
/// Debug dump utilities.
pub mod dump;
/// Core error types.
pub mod error;
/// Input samples and routed events.
pub mod event;
/// Font backends.
pub mod font;
/// Node ID types.
pub mod id;
/// Logging setup.
pub mod logging;
/// Node data.
pub mod node;
/// Pointer and keyboard routing.
pub mod router;
/// The scene root and frame loop.
pub mod scene;
/// Signal/slot channels.
pub mod signal;
/// Shared node name types.
pub mod state;
/// Testing utilities.
#[cfg(any(test, feature = "testing"))]
pub mod testing;
/// The node arena and layout engine.
pub mod world;

pub use context::{Context, ViewContext};
pub use id::{NodeId, TypedId};
pub use scene::Scene;
pub use world::Core;
