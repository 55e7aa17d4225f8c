//! Boundary conditions of the public entry points.

use kpath_graph::traversal::{yen_search, Dijkstra};
use kpath_graph::{k_shortest_paths, AdjacencyGraph, GraphError, KspConfig};

use crate::common::fixtures::generate_random_graph;
use crate::common::helpers::{assert_ksp_invariants, brute_force_simple_paths, node_set};

#[test]
fn test_empty_graph() {
    let graph = AdjacencyGraph::directed();

    let paths = k_shortest_paths(&graph, 5, f64::INFINITY, 1, 2).expect("Yen failed");

    assert!(paths.is_empty());
}

#[test]
fn test_source_equals_target_in_empty_graph() {
    let graph = AdjacencyGraph::directed();

    // Dijkstra does not need the node to exist for the trivial path
    let paths = k_shortest_paths(&graph, 5, f64::INFINITY, 3, 3).expect("Yen failed");

    assert_eq!(paths, vec![vec![3]]);
}

#[test]
fn test_single_edge() {
    let graph = AdjacencyGraph::from_edges(true, [(1, 2, 4.0)]);

    let paths = k_shortest_paths(&graph, -1, f64::INFINITY, 1, 2).expect("Yen failed");

    assert_eq!(paths, vec![vec![1, 2]]);
}

#[test]
fn test_parallel_routes_in_undirected_graph_are_not_reversed() {
    // Undirected edges must not let a spur path walk back over the root
    let graph = AdjacencyGraph::from_edges(
        false,
        [(1, 2, 1.0), (2, 3, 1.0), (1, 3, 5.0), (3, 4, 1.0)],
    );

    let result = yen_search(&graph, &Dijkstra, 1, 4, &KspConfig::unbounded()).expect("Yen failed");

    assert_ksp_invariants(&graph, &result.paths, 1, 4, f64::INFINITY);
    assert_eq!(
        result.clone().into_node_paths(),
        vec![vec![1, 2, 3, 4], vec![1, 3, 4]]
    );
}

#[test]
fn test_zero_weight_cycle_stays_loopless() {
    let graph = AdjacencyGraph::from_edges(
        true,
        [(1, 2, 0.0), (2, 3, 0.0), (3, 1, 0.0), (2, 4, 1.0), (3, 4, 1.0)],
    );

    let result = yen_search(&graph, &Dijkstra, 1, 4, &KspConfig::unbounded()).expect("Yen failed");

    assert_ksp_invariants(&graph, &result.paths, 1, 4, f64::INFINITY);
    assert_eq!(result.path_count(), 2);
}

#[test]
fn test_large_k_is_bounded_by_path_supply() {
    let graph = generate_random_graph(7, 6, 0.5, true, 5);
    let all = k_shortest_paths(&graph, -1, f64::INFINITY, 0, 5).expect("Yen failed");

    let capped = k_shortest_paths(&graph, 10_000, f64::INFINITY, 0, 5).expect("Yen failed");

    assert_eq!(capped, all);
}

#[test]
fn test_nan_budget_rejected() {
    let graph = AdjacencyGraph::from_edges(true, [(1, 2, 1.0)]);

    let err = k_shortest_paths(&graph, 2, f64::NAN, 1, 2).unwrap_err();

    assert!(matches!(err, GraphError::InvalidConfig(_)));
}

#[test]
fn test_nan_weight_rejected() {
    let graph = AdjacencyGraph::from_edges(true, [(1, 2, 1.0), (2, 3, f64::NAN)]);

    let err = k_shortest_paths(&graph, 2, 1.0, 1, 2).unwrap_err();

    assert!(matches!(err, GraphError::NegativeWeight { from: 2, to: 3, .. }));
}

#[test]
fn test_infinite_weight_edges_never_returned() {
    for seed in 0..12 {
        let mut graph = generate_random_graph(seed, 6, 0.4, true, 5);
        graph.add_edge(0, 5, f64::INFINITY);
        graph.add_edge(2, 5, f64::INFINITY);

        let finite: Vec<_> = brute_force_simple_paths(&graph, 0, 5)
            .into_iter()
            .filter(|p| p.weight.is_finite())
            .collect();

        let result =
            yen_search(&graph, &Dijkstra, 0, 5, &KspConfig::unbounded()).expect("Yen failed");

        assert_ksp_invariants(&graph, &result.paths, 0, 5, f64::INFINITY);
        assert_eq!(node_set(&result.paths), node_set(&finite), "seed {}", seed);
    }
}
