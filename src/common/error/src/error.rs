//! Core error types for Trellis.

use thiserror::Error;

/// Result type alias using `TrellisError`.
pub type TrellisResult<T> = std::result::Result<T, TrellisError>;

/// Core error type for Trellis operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TrellisError {
    /// A caller-supplied node is absent from the host graph.
    #[error("UnknownNode: node {0} is not in the host graph")]
    UnknownNode(u32),

    /// Graph structure error.
    #[error("GraphError: {0}")]
    GraphError(String),

    /// Invalid parameter provided.
    #[error("InvalidParameter: {0}")]
    InvalidParameter(String),

    /// Internal error (bug in Trellis).
    #[error("InternalError: {0}")]
    InternalError(String),
}

impl TrellisError {
    /// Create a new `UnknownNode` error.
    pub fn unknown_node(id: u32) -> Self {
        Self::UnknownNode(id)
    }

    /// Create a new `GraphError`.
    pub fn graph<S: Into<String>>(msg: S) -> Self {
        Self::GraphError(msg.into())
    }

    /// Create a new `InvalidParameter` error.
    pub fn invalid_parameter<S: Into<String>>(msg: S) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Create a new `InternalError`.
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Self::InternalError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrellisError::unknown_node(99);
        assert_eq!(err.to_string(), "UnknownNode: node 99 is not in the host graph");
    }

    #[test]
    fn test_error_constructors() {
        let _ = TrellisError::graph("asymmetric adjacency");
        let _ = TrellisError::invalid_parameter("empty subset");
        let _ = TrellisError::internal("unexpected state");
    }
}
