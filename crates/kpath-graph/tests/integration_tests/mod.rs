//! Integration tests for kpath-graph.
//!
//! All tests use real graphs and the real Dijkstra oracle. Expected answers
//! come from exhaustive enumeration, never from the code under test.

mod config_tests;
mod edge_case_tests;
