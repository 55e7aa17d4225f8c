//! Error types for k-shortest path operations.
//!
//! All fallible operations return [`GraphResult`]. Errors fail fast: a
//! precondition violation aborts the whole search before any path is returned.

use thiserror::Error;

use crate::graph::NodeId;

/// Result type alias for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Error type for all graph and path search operations.
#[derive(Error, Debug)]
pub enum GraphError {
    // ========== Configuration Errors ==========
    /// Invalid configuration parameter.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ========== Graph Structure Errors ==========
    /// Edge weight is negative or NaN.
    ///
    /// Shortest-path optimality requires nonnegative weights everywhere,
    /// so this is reported even when the edge lies on no feasible path.
    #[error("Negative edge weight {weight} on edge {from} -> {to}")]
    NegativeWeight { from: NodeId, to: NodeId, weight: f64 },

    /// Edge not found in graph.
    #[error("Edge not found: source={0}, target={1}")]
    EdgeNotFound(NodeId, NodeId),

    // ========== Serialization Errors ==========
    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for GraphError {
    fn from(err: serde_json::Error) -> Self {
        GraphError::Serialization(err.to_string())
    }
}

static_assertions::assert_impl_all!(GraphError: Send, Sync, std::error::Error);
