//! K-shortest loopless paths over read-only weighted graphs.
//!
//! This crate finds the k cheapest loopless paths between two nodes with
//! Yen's deviation algorithm, optionally bounded by a cost excess over the
//! absolute shortest path.
//!
//! # Architecture
//!
//! - **graph**: `GraphView` capability trait, in-memory `AdjacencyGraph`,
//!   `UniformCost` hop-count view, path helpers
//! - **traversal**: Dijkstra oracle and Yen's k-shortest paths
//! - **config**: `KspConfig` search bounds
//! - **error**: `GraphError` and `GraphResult`
//!
//! # Example
//!
//! ```
//! use kpath_graph::{k_shortest_paths, AdjacencyGraph, GraphResult};
//!
//! fn example() -> GraphResult<()> {
//!     let graph = AdjacencyGraph::from_edges(
//!         true,
//!         [(1, 2, 1.0), (1, 3, 2.0), (2, 4, 1.0), (3, 4, 1.0), (2, 3, 1.0), (4, 5, 1.0)],
//!     );
//!     let paths = k_shortest_paths(&graph, 1, f64::INFINITY, 1, 5)?;
//!     assert_eq!(paths, vec![vec![1, 2, 4, 5]]);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod traversal;

// Re-exports for convenience
pub use config::KspConfig;
pub use error::{GraphError, GraphResult};
pub use graph::{AdjacencyGraph, GraphView, NodeId, UniformCost};
pub use traversal::{
    dijkstra_path, k_shortest_paths, yen_paths, yen_search, Dijkstra, KspResult, ShortestPathOracle,
    WeightedPath,
};
