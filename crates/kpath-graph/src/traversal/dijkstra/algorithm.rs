//! Core Dijkstra search implementation.

use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap, HashSet};

use crate::graph::{GraphView, NodeId};

use super::node::FrontierNode;
use super::types::{OraclePath, ShortestPathOracle};

/// Binary-heap Dijkstra search.
///
/// Settles nodes in (distance, node id) order and only replaces a tentative
/// distance with a strictly smaller one, so equal-weight ties always resolve
/// the same way for the same graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dijkstra;

impl ShortestPathOracle for Dijkstra {
    fn shortest_path<G: GraphView + ?Sized>(
        &self,
        graph: &G,
        source: NodeId,
        target: NodeId,
    ) -> OraclePath {
        dijkstra_search(graph, source, target)
    }
}

/// Find a minimum-weight path from `source` to `target`.
///
/// Edges reported by `neighbors` but without a weight are ignored.
///
/// # Example
///
/// ```
/// use kpath_graph::graph::AdjacencyGraph;
/// use kpath_graph::traversal::dijkstra_search;
///
/// let graph = AdjacencyGraph::from_edges(true, [(1, 2, 1.0), (2, 3, 1.0), (1, 3, 5.0)]);
/// let result = dijkstra_search(&graph, 1, 3);
/// assert_eq!(result.nodes, vec![1, 2, 3]);
/// assert_eq!(result.weight, 2.0);
/// ```
pub fn dijkstra_search<G: GraphView + ?Sized>(
    graph: &G,
    source: NodeId,
    target: NodeId,
) -> OraclePath {
    // Handle trivial case
    if source == target {
        return OraclePath::found(vec![source], 0.0, 0);
    }

    let mut frontier: BinaryHeap<FrontierNode> = BinaryHeap::new();
    frontier.push(FrontierNode::new(source, 0.0));

    let mut distances: HashMap<NodeId, f64> = HashMap::new();
    distances.insert(source, 0.0);

    let mut came_from: HashMap<NodeId, NodeId> = HashMap::new();
    let mut settled: HashSet<NodeId> = HashSet::new();

    while let Some(current) = frontier.pop() {
        let current_id = current.node_id;

        // Stale heap entry
        if !settled.insert(current_id) {
            continue;
        }

        if current_id == target {
            let mut path = vec![target];
            let mut node = target;
            while let Some(&parent) = came_from.get(&node) {
                path.push(parent);
                node = parent;
            }
            path.reverse();

            log::trace!(
                "Dijkstra {} -> {}: {} nodes, weight {}, {} settled",
                source,
                target,
                path.len(),
                current.distance,
                settled.len()
            );
            return OraclePath::found(path, current.distance, settled.len());
        }

        for neighbor_id in graph.neighbors(current_id) {
            if settled.contains(&neighbor_id) {
                continue;
            }
            let Some(weight) = graph.weight(current_id, neighbor_id) else {
                continue;
            };

            let tentative = current.distance + weight;
            match distances.entry(neighbor_id) {
                Entry::Occupied(mut known) => {
                    if tentative >= *known.get() {
                        continue;
                    }
                    known.insert(tentative);
                }
                Entry::Vacant(slot) => {
                    slot.insert(tentative);
                }
            }

            came_from.insert(neighbor_id, current_id);
            frontier.push(FrontierNode::new(neighbor_id, tentative));
        }
    }

    OraclePath::unreachable(settled.len())
}
