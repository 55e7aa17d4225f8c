//! Config loading feeding real searches.

use kpath_graph::{yen_paths, AdjacencyGraph, GraphError, KspConfig};

fn diamond() -> AdjacencyGraph {
    AdjacencyGraph::from_edges(
        true,
        [(1, 2, 1.0), (1, 3, 2.0), (2, 4, 1.0), (3, 4, 1.0), (2, 3, 1.0), (4, 5, 1.0)],
    )
}

#[test]
fn test_json_config_drives_search() {
    let config = KspConfig::from_json(r#"{ "max_paths": 2, "cost_budget": null }"#)
        .expect("config should parse");

    let paths = yen_paths(&diamond(), 1, 5, &config).expect("Yen failed");

    assert_eq!(paths.len(), 2);
    assert_eq!(paths[1].nodes, vec![1, 3, 4, 5]);
}

#[test]
fn test_json_budget_limits_search() {
    let config = KspConfig::from_json(r#"{ "max_paths": null, "cost_budget": 0.5 }"#)
        .expect("config should parse");

    let paths = yen_paths(&diamond(), 1, 5, &config).expect("Yen failed");

    assert_eq!(paths.len(), 1);
}

#[test]
fn test_json_round_trip_preserves_unbounded() {
    let json = serde_json::to_string(&KspConfig::unbounded()).expect("serialize");

    let parsed = KspConfig::from_json(&json).expect("parse");

    assert_eq!(parsed, KspConfig::unbounded());
}

#[test]
fn test_json_rejects_negative_budget() {
    let err = KspConfig::from_json(r#"{ "cost_budget": -3 }"#).unwrap_err();

    assert!(matches!(err, GraphError::InvalidConfig(_)));
}
