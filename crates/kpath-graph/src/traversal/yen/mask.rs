//! Masked graph view for spur searches.
//!
//! Yen's algorithm needs "the graph minus some nodes and edges" once per spur
//! node. Mutating the real graph is not an option, so [`MaskedView`] wraps a
//! [`GraphView`] and filters neighbor enumeration through two suppression
//! sets. Weights pass through unchanged.
//!
//! The sets are cleared with `reset()` rather than reallocated, so one view
//! serves every spur search of a run.

use std::collections::HashSet;

use crate::graph::{GraphView, NodeId};

/// Decorator hiding suppressed nodes and edges of a wrapped graph.
///
/// Valid for one query between `reset()` calls.
#[derive(Debug)]
pub struct MaskedView<'g, G: ?Sized> {
    graph: &'g G,
    directed: bool,
    nodes: HashSet<NodeId>,
    edges: HashSet<(NodeId, NodeId)>,
}

impl<'g, G: GraphView + ?Sized> MaskedView<'g, G> {
    /// Wrap `graph` with nothing suppressed.
    pub fn new(graph: &'g G) -> Self {
        Self {
            graph,
            directed: graph.is_directed(),
            nodes: HashSet::new(),
            edges: HashSet::new(),
        }
    }

    /// Clear both suppression sets, keeping their capacity.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    /// Hide `id`: it is never returned as a neighbor and has no neighbors.
    pub fn suppress_node(&mut self, id: NodeId) {
        self.nodes.insert(id);
    }

    /// Hide the edge `from -> to`, and `to -> from` if the graph is undirected.
    pub fn suppress_edge(&mut self, from: NodeId, to: NodeId) {
        self.edges.insert((from, to));
        if !self.directed {
            self.edges.insert((to, from));
        }
    }

    /// Whether `id` is suppressed.
    #[must_use]
    pub fn is_node_suppressed(&self, id: NodeId) -> bool {
        self.nodes.contains(&id)
    }

    /// Whether the directed edge `from -> to` is suppressed.
    #[must_use]
    pub fn is_edge_suppressed(&self, from: NodeId, to: NodeId) -> bool {
        self.edges.contains(&(from, to))
    }

    /// Number of suppressed nodes and directed edges.
    #[must_use]
    pub fn suppressed_counts(&self) -> (usize, usize) {
        (self.nodes.len(), self.edges.len())
    }

    /// The wrapped graph.
    #[must_use]
    pub fn inner(&self) -> &'g G {
        self.graph
    }

    fn can_walk(&self, from: NodeId, to: NodeId) -> bool {
        !self.nodes.contains(&to) && !self.edges.contains(&(from, to))
    }
}

impl<G: GraphView + ?Sized> GraphView for MaskedView<'_, G> {
    fn node_ids(&self) -> Vec<NodeId> {
        self.graph.node_ids()
    }

    fn neighbors(&self, id: NodeId) -> Vec<NodeId> {
        if self.nodes.contains(&id) {
            return Vec::new();
        }
        let mut out = self.graph.neighbors(id);
        out.retain(|&to| self.can_walk(id, to));
        out
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn weight(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.graph.weight(from, to)
    }
}
