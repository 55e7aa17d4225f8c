//! Benchmark suite for kpath-graph.
//!
//! - Dijkstra single-pair query on sparse random graphs
//! - Yen k-shortest paths for increasing k
//! - Yen bounded only by cost budget
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench --package kpath-graph
//!
//! # Run specific benchmark
//! cargo bench --package kpath-graph -- yen
//! ```

use criterion::{criterion_group, criterion_main, Criterion};
use std::time::Duration;

mod generators;

criterion_group!(
    name = dijkstra_bench_group;
    config = Criterion::default()
        .sample_size(100)
        .measurement_time(Duration::from_secs(5));
    targets = ksp_benches::bench_dijkstra
);

criterion_group!(
    name = yen_bench_group;
    config = Criterion::default()
        .sample_size(20)
        .measurement_time(Duration::from_secs(5));
    targets = ksp_benches::bench_yen, ksp_benches::bench_yen_cost_budget
);

criterion_main!(dijkstra_bench_group, yen_bench_group);
