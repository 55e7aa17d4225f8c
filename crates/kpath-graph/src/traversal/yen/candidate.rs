//! Candidate pool for deviation paths.
//!
//! Holds spliced paths not yet promoted to the result list. Selection is by
//! weight; equal weights go to the candidate generated first.

use crate::graph::NodeId;

use super::types::WeightedPath;

/// A pooled deviation path.
#[derive(Debug, Clone)]
pub(crate) struct Candidate {
    pub path: WeightedPath,
    /// Generation order, used to break weight ties.
    pub seq: u64,
}

/// Pending deviation paths, unique by node sequence.
#[derive(Debug, Default)]
pub struct CandidatePool {
    candidates: Vec<Candidate>,
    next_seq: u64,
}

impl CandidatePool {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `path` unless an identical node sequence is already pooled.
    ///
    /// Returns `true` if the path was added.
    pub fn insert(&mut self, path: WeightedPath) -> bool {
        if self.contains(&path.nodes) {
            return false;
        }
        self.candidates.push(Candidate {
            path,
            seq: self.next_seq,
        });
        self.next_seq += 1;
        true
    }

    /// Whether a candidate with exactly these nodes is pooled.
    #[must_use]
    pub fn contains(&self, nodes: &[NodeId]) -> bool {
        self.candidates
            .iter()
            .any(|c| is_same_path(&c.path.nodes, nodes))
    }

    /// The cheapest candidate, without removing it.
    #[must_use]
    pub fn peek_min(&self) -> Option<&WeightedPath> {
        self.min_index().map(|i| &self.candidates[i].path)
    }

    /// Remove and return the cheapest candidate.
    pub fn pop_min(&mut self) -> Option<WeightedPath> {
        let index = self.min_index()?;
        Some(self.candidates.swap_remove(index).path)
    }

    /// Number of pooled candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    fn min_index(&self) -> Option<usize> {
        self.candidates
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| {
                a.path
                    .weight
                    .total_cmp(&b.path.weight)
                    .then_with(|| a.seq.cmp(&b.seq))
            })
            .map(|(i, _)| i)
    }
}

/// Whether two paths visit the same nodes in the same order.
#[must_use]
pub fn is_same_path(a: &[NodeId], b: &[NodeId]) -> bool {
    a == b
}
