//! Deterministic graph generators for benchmarks.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use kpath_graph::{AdjacencyGraph, NodeId};

/// Generate a directed graph with a spanning path `0 -> 1 -> ... -> n-1`
/// plus `avg_edges_per_node` hashed edges per node, weights in `1..=10`.
pub fn generate_weighted_graph(node_count: usize, avg_edges_per_node: usize) -> AdjacencyGraph {
    let mut graph = AdjacencyGraph::directed();

    for node in 0..node_count as u64 {
        graph.add_node(node as NodeId);

        // Ensure connectivity: connect to next node (forms spanning path)
        if node + 1 < node_count as u64 {
            graph.add_edge(node as NodeId, (node + 1) as NodeId, hashed_weight(node, node + 1));
        }

        for i in 0..avg_edges_per_node {
            let mut hasher = DefaultHasher::new();
            (node, i).hash(&mut hasher);
            let target = hasher.finish() % node_count as u64;
            if target != node {
                graph.add_edge(node as NodeId, target as NodeId, hashed_weight(node, target));
            }
        }
    }

    graph
}

fn hashed_weight(from: u64, to: u64) -> f64 {
    let mut hasher = DefaultHasher::new();
    (from, to, "weight").hash(&mut hasher);
    (1 + hasher.finish() % 10) as f64
}
