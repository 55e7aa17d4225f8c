//! Hop-count weighting.

use super::{GraphView, NodeId};

/// View that gives every existing edge weight 1.0.
///
/// Searches over this view minimise the number of edges instead of the
/// stored weights. Reachability is unchanged.
#[derive(Debug, Clone, Copy)]
pub struct UniformCost<G> {
    inner: G,
}

impl<G: GraphView> UniformCost<G> {
    /// Wrap `inner`.
    pub fn new(inner: G) -> Self {
        Self { inner }
    }

    /// Unwrap the underlying view.
    pub fn into_inner(self) -> G {
        self.inner
    }
}

impl<G: GraphView> GraphView for UniformCost<G> {
    fn node_ids(&self) -> Vec<NodeId> {
        self.inner.node_ids()
    }

    fn neighbors(&self, id: NodeId) -> Vec<NodeId> {
        self.inner.neighbors(id)
    }

    fn is_directed(&self) -> bool {
        self.inner.is_directed()
    }

    fn weight(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.inner.weight(from, to).map(|_| 1.0)
    }
}
