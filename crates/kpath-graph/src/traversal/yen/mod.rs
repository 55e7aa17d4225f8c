//! Yen's k-shortest loopless paths.
//!
//! Deviation search on top of an exact shortest-path oracle. The first path is
//! the plain shortest path. Each later round takes the most recently accepted
//! path and, for every node on it except the last (the spur node), asks the
//! oracle for the cheapest way from the spur to the target that:
//!
//! - does not reuse the root prefix (root nodes other than the spur are
//!   suppressed), and
//! - does not leave the spur along an edge some accepted path with the same
//!   root already took (those edges are suppressed).
//!
//! Root prefix + spur path becomes a candidate. The cheapest candidate is
//! promoted each round until the count or cost bound is hit.
//!
//! # Components
//!
//! - [`MaskedView`]: node/edge suppression over a borrowed graph
//! - [`CandidatePool`]: deduplicated pending paths, cheapest-first
//! - [`yen_search`]: the orchestrator
//!
//! # Ordering
//!
//! Weights are nondecreasing across the result. Among equal weights,
//! candidates are promoted in generation order: earlier outer rounds first,
//! and within a round, spur nodes closer to the source first.
//!
//! # References
//!
//! J. Y. Yen, "Finding the K Shortest Loopless Paths in a Network",
//! Management Science 17(11), 1971.

mod algorithm;
mod candidate;
mod mask;
mod types;


pub use algorithm::yen_search;
pub use candidate::{is_same_path, CandidatePool};
pub use mask::MaskedView;
pub use types::{KspResult, WeightedPath};

use crate::config::KspConfig;
use crate::error::GraphResult;
use crate::graph::{GraphView, NodeId};
use crate::traversal::dijkstra::Dijkstra;

/// Convenience function: k-shortest paths as bare node sequences.
///
/// `k < 0` bounds the search by `cost_budget` only. Uses [`Dijkstra`].
///
/// # Errors
/// * `GraphError::NegativeWeight` - any edge weight is negative
/// * `GraphError::InvalidConfig` - `cost_budget` is negative or NaN
pub fn k_shortest_paths<G: GraphView + ?Sized>(
    graph: &G,
    k: i64,
    cost_budget: f64,
    source: NodeId,
    target: NodeId,
) -> GraphResult<Vec<Vec<NodeId>>> {
    let config = KspConfig::from_k(k, cost_budget);
    let result = yen_search(graph, &Dijkstra, source, target, &config)?;
    Ok(result.into_node_paths())
}

/// Find weighted k-shortest paths with the default [`Dijkstra`] oracle.
pub fn yen_paths<G: GraphView + ?Sized>(
    graph: &G,
    source: NodeId,
    target: NodeId,
    config: &KspConfig,
) -> GraphResult<Vec<WeightedPath>> {
    Ok(yen_search(graph, &Dijkstra, source, target, config)?.paths)
}
