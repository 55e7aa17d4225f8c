//! Dijkstra priority queue node.
//!
//! Implements ordering for BinaryHeap min-heap behavior.

use std::cmp::Ordering;

use crate::graph::NodeId;

/// Entry in the Dijkstra frontier.
///
/// Ordered so that BinaryHeap (max-heap) pops the smallest distance first,
/// and among equal distances the smallest node id.
#[derive(Debug, Clone)]
pub(crate) struct FrontierNode {
    /// Node ID.
    pub node_id: NodeId,
    /// Tentative distance from the source.
    pub distance: f64,
}

impl FrontierNode {
    pub fn new(node_id: NodeId, distance: f64) -> Self {
        Self { node_id, distance }
    }
}

impl PartialEq for FrontierNode {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierNode {}

impl PartialOrd for FrontierNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys for min-heap behavior
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node_id.cmp(&self.node_id))
    }
}
