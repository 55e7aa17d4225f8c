//! Dijkstra shortest-path oracle.
//!
//! Exact single-pair search over any [`GraphView`](crate::graph::GraphView).
//! Yen's algorithm calls it once per spur node, always through a filtered
//! view, so it must not assume anything about the concrete graph type.
//!
//! # Contract
//!
//! - Unreachable target: empty path, weight `f64::INFINITY`
//! - `source == target`: `[source]`, weight 0.0
//! - Weights must be nonnegative (checked by the caller, not here)
//!
//! # Performance
//!
//! O((V + E) log V) with a binary heap. Stale heap entries are skipped
//! lazily instead of decreasing keys.

mod algorithm;
mod node;
mod types;


pub use algorithm::{dijkstra_search, Dijkstra};
pub use types::{OraclePath, ShortestPathOracle};

use crate::graph::{GraphView, NodeId};

/// Convenience function: shortest path nodes, or `None` if unreachable.
pub fn dijkstra_path<G: GraphView + ?Sized>(
    graph: &G,
    source: NodeId,
    target: NodeId,
) -> Option<Vec<NodeId>> {
    let result = dijkstra_search(graph, source, target);
    if result.path_found() {
        Some(result.nodes)
    } else {
        None
    }
}
