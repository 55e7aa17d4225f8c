//! Path helpers.
//!
//! A path is a node sequence from source to target. Its weight is the sum of
//! the weights of consecutive edges.

use std::collections::HashSet;

use crate::error::{GraphError, GraphResult};

use super::{GraphView, NodeId};

/// Sum the edge weights along `path`.
///
/// Paths with fewer than two nodes weigh 0.0.
///
/// # Errors
/// * `GraphError::EdgeNotFound` - two consecutive nodes are not connected
pub fn path_weight<G: GraphView + ?Sized>(graph: &G, path: &[NodeId]) -> GraphResult<f64> {
    path.windows(2).try_fold(0.0, |total, pair| {
        graph
            .weight(pair[0], pair[1])
            .map(|w| total + w)
            .ok_or(GraphError::EdgeNotFound(pair[0], pair[1]))
    })
}

/// Whether no node appears twice in `path`.
#[must_use]
pub fn is_loopless(path: &[NodeId]) -> bool {
    let mut seen = HashSet::with_capacity(path.len());
    path.iter().all(|id| seen.insert(*id))
}
