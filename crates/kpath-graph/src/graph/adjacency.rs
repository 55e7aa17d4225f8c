//! In-memory adjacency graph.

use std::collections::BTreeMap;

use super::{GraphView, NodeId};

/// Weighted graph stored as sorted adjacency maps.
///
/// Neighbor enumeration is in ascending node id order, which keeps every
/// search over this graph deterministic. Undirected edges are stored in both
/// directions with the same weight.
///
/// Weights are stored as given. Negative weights are accepted here and
/// rejected by the searches that cannot handle them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdjacencyGraph {
    directed: bool,
    adjacency: BTreeMap<NodeId, BTreeMap<NodeId, f64>>,
}

impl AdjacencyGraph {
    /// Create an empty directed graph.
    #[must_use]
    pub fn directed() -> Self {
        Self {
            directed: true,
            adjacency: BTreeMap::new(),
        }
    }

    /// Create an empty undirected graph.
    #[must_use]
    pub fn undirected() -> Self {
        Self {
            directed: false,
            adjacency: BTreeMap::new(),
        }
    }

    /// Build a graph from `(from, to, weight)` triples.
    pub fn from_edges<I>(directed: bool, edges: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, NodeId, f64)>,
    {
        let mut graph = if directed {
            Self::directed()
        } else {
            Self::undirected()
        };
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Add an isolated node. No-op if the node exists.
    pub fn add_node(&mut self, id: NodeId) {
        self.adjacency.entry(id).or_default();
    }

    /// Add or replace the edge `from -> to`.
    ///
    /// Both endpoints are added as nodes. For undirected graphs the reverse
    /// edge is set too.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: f64) {
        self.adjacency.entry(from).or_default().insert(to, weight);
        let reverse = self.adjacency.entry(to).or_default();
        if !self.directed {
            reverse.insert(from, weight);
        }
    }

    /// Remove the edge `from -> to` (and `to -> from` if undirected).
    ///
    /// Returns the removed weight. Endpoints stay in the graph.
    pub fn remove_edge(&mut self, from: NodeId, to: NodeId) -> Option<f64> {
        let removed = self.adjacency.get_mut(&from)?.remove(&to);
        if !self.directed {
            if let Some(reverse) = self.adjacency.get_mut(&to) {
                reverse.remove(&from);
            }
        }
        removed
    }

    /// Whether `id` is a node of this graph.
    #[must_use]
    pub fn contains_node(&self, id: NodeId) -> bool {
        self.adjacency.contains_key(&id)
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges. An undirected edge counts once.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        let stored: usize = self.adjacency.values().map(BTreeMap::len).sum();
        if self.directed {
            return stored;
        }
        let loops = self
            .adjacency
            .iter()
            .filter(|(id, out)| out.contains_key(id))
            .count();
        (stored + loops) / 2
    }
}

impl GraphView for AdjacencyGraph {
    fn node_ids(&self) -> Vec<NodeId> {
        self.adjacency.keys().copied().collect()
    }

    fn neighbors(&self, id: NodeId) -> Vec<NodeId> {
        self.adjacency
            .get(&id)
            .map(|out| out.keys().copied().collect())
            .unwrap_or_default()
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn weight(&self, from: NodeId, to: NodeId) -> Option<f64> {
        self.adjacency.get(&from)?.get(&to).copied()
    }
}
