//! Shortest-path oracle types.

use crate::graph::{GraphView, NodeId};

/// Result of a single shortest-path query.
#[derive(Debug, Clone, PartialEq)]
pub struct OraclePath {
    /// Path from source to target (empty if unreachable).
    pub nodes: Vec<NodeId>,

    /// Total path weight (infinity if unreachable).
    pub weight: f64,

    /// Number of nodes settled before the search stopped.
    pub nodes_explored: usize,
}

impl OraclePath {
    /// Create result for an unreachable target.
    #[must_use]
    pub fn unreachable(nodes_explored: usize) -> Self {
        Self {
            nodes: Vec::new(),
            weight: f64::INFINITY,
            nodes_explored,
        }
    }

    /// Create result with found path.
    #[must_use]
    pub fn found(nodes: Vec<NodeId>, weight: f64, nodes_explored: usize) -> Self {
        Self {
            nodes,
            weight,
            nodes_explored,
        }
    }

    /// Whether a path was found.
    #[must_use]
    pub fn path_found(&self) -> bool {
        !self.nodes.is_empty()
    }

    /// Get number of edges in path.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Exact single-pair shortest-path search.
///
/// Implementations must:
/// - work over any [`GraphView`], including filtered views
/// - return a loopless minimum-weight path
/// - report an unreachable target as an empty path with infinite weight
/// - return `[source]` with weight 0.0 when `source == target`
///
/// Callers guarantee that every edge weight is nonnegative.
pub trait ShortestPathOracle {
    /// Find a minimum-weight path from `source` to `target` in `graph`.
    fn shortest_path<G: GraphView + ?Sized>(
        &self,
        graph: &G,
        source: NodeId,
        target: NodeId,
    ) -> OraclePath;
}
