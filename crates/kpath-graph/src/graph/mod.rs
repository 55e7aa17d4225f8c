//! Read-only graph capability consumed by the path searches.
//!
//! Search algorithms never touch a concrete graph type. They work against
//! [`GraphView`], the minimal surface a shortest-path search needs:
//! node enumeration, outgoing neighbors, the directed flag, and edge weights.
//! Decorators such as [`UniformCost`] and the Yen mask implement the same
//! trait, so an oracle cannot tell a filtered view from the real graph.
//!
//! # Components
//!
//! - [`GraphView`]: the capability trait
//! - [`AdjacencyGraph`]: in-memory weighted graph (directed or undirected)
//! - [`UniformCost`]: hop-count weighting over any view
//! - [`path`]: path weight and shape helpers

mod adjacency;
pub mod path;
mod uniform;

pub use adjacency::AdjacencyGraph;
pub use path::{is_loopless, path_weight};
pub use uniform::UniformCost;

use crate::error::{GraphError, GraphResult};

/// Node identifier. Opaque, totally ordered and hashable.
pub type NodeId = i64;

/// Minimal read-only graph capability.
///
/// Implementations must be deterministic: repeated calls with the same
/// arguments return the same answer in the same order.
pub trait GraphView {
    /// All node ids in the graph.
    fn node_ids(&self) -> Vec<NodeId>;

    /// Nodes reachable from `id` over a single edge.
    ///
    /// Unknown nodes have no neighbors.
    fn neighbors(&self, id: NodeId) -> Vec<NodeId>;

    /// Whether edges are one-way.
    fn is_directed(&self) -> bool;

    /// Weight of the edge `from -> to`, or `None` if there is no such edge.
    fn weight(&self, from: NodeId, to: NodeId) -> Option<f64>;
}

impl<G: GraphView + ?Sized> GraphView for &G {
    fn node_ids(&self) -> Vec<NodeId> {
        (**self).node_ids()
    }

    fn neighbors(&self, id: NodeId) -> Vec<NodeId> {
        (**self).neighbors(id)
    }

    fn is_directed(&self) -> bool {
        (**self).is_directed()
    }

    fn weight(&self, from: NodeId, to: NodeId) -> Option<f64> {
        (**self).weight(from, to)
    }
}

/// Check every edge in `graph` for a negative or NaN weight.
///
/// # Errors
/// * `GraphError::NegativeWeight` - first offending edge in node id order
pub fn validate_weights<G: GraphView + ?Sized>(graph: &G) -> GraphResult<()> {
    for from in graph.node_ids() {
        for to in graph.neighbors(from) {
            let weight = graph.weight(from, to).unwrap_or(0.0);
            if weight < 0.0 || weight.is_nan() {
                log::debug!("Rejecting graph: edge {} -> {} has weight {}", from, to, weight);
                return Err(GraphError::NegativeWeight { from, to, weight });
            }
        }
    }
    Ok(())
}
