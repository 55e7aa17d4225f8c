//! Path search algorithms.
//!
//! # Algorithms
//!
//! - **Dijkstra**: exact single-pair shortest path, the oracle every other
//!   search is built on
//! - **Yen**: k-shortest loopless paths within a cost budget of the shortest
//!
//! Both run against [`GraphView`](crate::graph::GraphView), never a concrete
//! graph type.
//!
//! # Examples
//!
//! ## Shortest Path
//!
//! ```rust
//! use kpath_graph::graph::AdjacencyGraph;
//! use kpath_graph::traversal::dijkstra_path;
//!
//! let graph = AdjacencyGraph::from_edges(true, [(1, 2, 1.0), (2, 3, 1.0)]);
//! assert_eq!(dijkstra_path(&graph, 1, 3), Some(vec![1, 2, 3]));
//! ```
//!
//! ## K Shortest Paths
//!
//! ```rust
//! use kpath_graph::graph::AdjacencyGraph;
//! use kpath_graph::traversal::k_shortest_paths;
//!
//! let graph = AdjacencyGraph::from_edges(false, [(1, 2, 1.0), (2, 3, 1.0), (1, 3, 2.5)]);
//! let paths = k_shortest_paths(&graph, 2, f64::INFINITY, 1, 3)?;
//! assert_eq!(paths, vec![vec![1, 2, 3], vec![1, 3]]);
//! # Ok::<(), kpath_graph::error::GraphError>(())
//! ```

pub mod dijkstra;
pub mod yen;

pub use dijkstra::{dijkstra_path, dijkstra_search, Dijkstra, OraclePath, ShortestPathOracle};
pub use yen::{
    is_same_path, k_shortest_paths, yen_paths, yen_search, CandidatePool, KspResult, MaskedView,
    WeightedPath,
};
