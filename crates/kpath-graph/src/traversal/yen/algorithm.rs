//! Core Yen search implementation.
//!
//! Contains the `yen_search` orchestrator.

use crate::config::KspConfig;
use crate::error::GraphResult;
use crate::graph::{path_weight, validate_weights, GraphView, NodeId};
use crate::traversal::dijkstra::ShortestPathOracle;

use super::candidate::CandidatePool;
use super::mask::MaskedView;
use super::types::{KspResult, WeightedPath};

/// Find up to `config.max_paths` loopless paths from `source` to `target`.
///
/// Paths come back by nondecreasing weight, the first being the shortest
/// path reported by `oracle`. No path weighs more than the shortest weight
/// plus `config.cost_budget`. Equal-weight candidates are accepted in the
/// order they were generated.
///
/// # Arguments
/// * `graph` - Graph to search, never modified
/// * `oracle` - Exact shortest-path search used for every sub-query
/// * `source` - Start node
/// * `target` - End node
/// * `config` - Path count and cost bounds
///
/// # Returns
/// * `Ok(KspResult)` - Accepted paths (empty if `target` is unreachable,
///   only reachable over infinite-weight edges, or `max_paths` is 0)
/// * `Err(GraphError::InvalidConfig)` - Negative or NaN cost budget
/// * `Err(GraphError::NegativeWeight)` - Any edge in `graph` has a negative
///   or NaN weight, whether or not it lies on a path
/// * `Err(GraphError::EdgeNotFound)` - A root prefix edge vanished from
///   `graph` between queries (inconsistent `GraphView`)
///
/// # Example
///
/// ```
/// use kpath_graph::config::KspConfig;
/// use kpath_graph::graph::AdjacencyGraph;
/// use kpath_graph::traversal::{yen_search, Dijkstra};
///
/// let graph = AdjacencyGraph::from_edges(
///     true,
///     [(1, 2, 1.0), (1, 3, 2.0), (2, 4, 1.0), (3, 4, 1.0), (2, 3, 1.0), (4, 5, 1.0)],
/// );
/// let result = yen_search(&graph, &Dijkstra, 1, 5, &KspConfig::default().max_paths(3))?;
///
/// assert_eq!(result.paths[0].nodes, vec![1, 2, 4, 5]);
/// assert_eq!(result.paths[1].nodes, vec![1, 3, 4, 5]);
/// assert_eq!(result.paths[2].nodes, vec![1, 2, 3, 4, 5]);
/// # Ok::<(), kpath_graph::error::GraphError>(())
/// ```
pub fn yen_search<G, O>(
    graph: &G,
    oracle: &O,
    source: NodeId,
    target: NodeId,
    config: &KspConfig,
) -> GraphResult<KspResult>
where
    G: GraphView + ?Sized,
    O: ShortestPathOracle,
{
    config.validate()?;
    validate_weights(graph)?;

    if config.is_full(0) {
        return Ok(KspResult::empty(0));
    }

    let shortest = oracle.shortest_path(graph, source, target);
    let mut oracle_calls = 1;

    // An infinite-weight route is as good as none
    if !shortest.path_found() || shortest.weight.is_infinite() {
        log::debug!("Yen {} -> {}: target unreachable", source, target);
        return Ok(KspResult::empty(oracle_calls));
    }

    let ceiling = shortest.weight + config.cost_budget;
    let mut paths = vec![WeightedPath::new(shortest.nodes, shortest.weight)];

    let mut pool = CandidatePool::new();
    let mut candidates_generated = 0;
    let mut duplicates_skipped = 0;

    // source == target: the singleton path is the only loopless answer
    if paths[0].len() > 1 {
        let mut view = MaskedView::new(graph);

        while !config.is_full(paths.len()) {
            let last = paths[paths.len() - 1].nodes.clone();

            for n in 0..last.len() - 1 {
                view.reset();

                let spur = last[n];
                let root = &last[..=n];

                for accepted in &paths {
                    if accepted.nodes.len() > n + 1 && accepted.nodes[..=n] == *root {
                        view.suppress_edge(accepted.nodes[n], accepted.nodes[n + 1]);
                    }
                }
                for &id in &root[..n] {
                    view.suppress_node(id);
                }

                let spur_path = oracle.shortest_path(&view, spur, target);
                oracle_calls += 1;

                if !spur_path.path_found()
                    || spur_path.weight.is_infinite()
                    || spur_path.weight > ceiling
                {
                    continue;
                }

                let mut nodes = spur_path.nodes;
                let mut weight = spur_path.weight;
                if n > 0 {
                    weight += path_weight(graph, root)?;
                    let mut spliced = Vec::with_capacity(n + nodes.len());
                    spliced.extend_from_slice(&root[..n]);
                    spliced.append(&mut nodes);
                    nodes = spliced;
                }

                log::trace!(
                    "Yen spur {} (index {}): candidate of {} nodes, weight {}",
                    spur,
                    n,
                    nodes.len(),
                    weight
                );

                if pool.insert(WeightedPath::new(nodes, weight)) {
                    candidates_generated += 1;
                } else {
                    duplicates_skipped += 1;
                }
            }

            let Some(best) = pool.peek_min() else {
                break;
            };
            if best.len() <= 1 || best.weight > ceiling {
                break;
            }

            if let Some(best) = pool.pop_min() {
                log::trace!("Yen promoting path #{} with weight {}", paths.len() + 1, best.weight);
                paths.push(best);
            }
        }
    }

    log::debug!(
        "Yen {} -> {}: {} paths, {} oracle calls, {} candidates ({} duplicates), ceiling {}",
        source,
        target,
        paths.len(),
        oracle_calls,
        candidates_generated,
        duplicates_skipped,
        ceiling
    );

    Ok(KspResult {
        paths,
        ceiling,
        oracle_calls,
        candidates_generated,
        duplicates_skipped,
    })
}
