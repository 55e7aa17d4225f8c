//! Yen search types.
//!
//! Contains the weighted path and the search result returned by `yen_search`.

use crate::graph::NodeId;

/// A path together with its total weight.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightedPath {
    /// Nodes from source to target.
    pub nodes: Vec<NodeId>,

    /// Sum of edge weights along `nodes`.
    pub weight: f64,
}

impl WeightedPath {
    #[must_use]
    pub fn new(nodes: Vec<NodeId>, weight: f64) -> Self {
        Self { nodes, weight }
    }

    /// Get path length (number of nodes).
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the path has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get number of edges in path.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Result of a k-shortest paths search.
#[derive(Debug, Clone, PartialEq)]
pub struct KspResult {
    /// Accepted paths, by nondecreasing weight. First is the shortest.
    pub paths: Vec<WeightedPath>,

    /// Absolute weight ceiling: shortest weight + cost budget.
    /// Infinite when no path exists.
    pub ceiling: f64,

    /// Number of shortest-path oracle queries issued.
    pub oracle_calls: usize,

    /// Number of distinct candidates added to the pool.
    pub candidates_generated: usize,

    /// Number of generated candidates dropped as duplicates.
    pub duplicates_skipped: usize,
}

impl KspResult {
    /// Create empty result (no path, or nothing requested).
    #[must_use]
    pub fn empty(oracle_calls: usize) -> Self {
        Self {
            paths: Vec::new(),
            ceiling: f64::INFINITY,
            oracle_calls,
            candidates_generated: 0,
            duplicates_skipped: 0,
        }
    }

    /// Number of accepted paths.
    #[must_use]
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Weight of the shortest path, if any.
    #[must_use]
    pub fn shortest_weight(&self) -> Option<f64> {
        self.paths.first().map(|p| p.weight)
    }

    /// Drop weights and statistics, keeping node sequences.
    #[must_use]
    pub fn into_node_paths(self) -> Vec<Vec<NodeId>> {
        self.paths.into_iter().map(|p| p.nodes).collect()
    }
}
