use std::result::Result as StdResult;

use thiserror::Error;

use crate::core::id::NodeId;

/// Result type for frond operations.
pub type Result<T> = StdResult<T, Error>;

/// Core error type.
#[derive(PartialEq, Eq, Error, Debug, Clone)]
pub enum Error {
    /// A node id did not resolve to a live node.
    #[error("node not found: {0:?}")]
    NotFound(NodeId),
    /// A widget was borrowed while already taken out of its slot.
    #[error("reentrant widget access: {0:?}")]
    Reentrant(NodeId),
    #[error("invalid: {0}")]
    /// Invalid input error.
    Invalid(String),
    #[error("layout: {0}")]
    /// Layout failure.
    Layout(String),
    #[error("font: {0}")]
    /// Font loading or rasterization failure.
    Font(String),
    #[error("config: {0}")]
    /// Configuration could not be loaded.
    Config(String),
    #[error("internal: {0}")]
    /// Internal error.
    Internal(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Config(e.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Config(e.to_string())
    }
}
