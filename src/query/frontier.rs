//! Priority frontier for A*

use crate::graph::VertexId;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A vertex waiting in the frontier, ordered by estimated total cost
///
/// Equal estimates are ordered by insertion sequence, so the earliest
/// admitted vertex pops first.
#[derive(Debug, Clone, Copy)]
pub(crate) struct FrontierEntry {
    pub vertex: VertexId,
    pub estimated_total: f64,
    sequence: u64,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.estimated_total
            .total_cmp(&other.estimated_total)
            .then(self.sequence.cmp(&other.sequence))
    }
}

/// Min-heap of frontier entries
#[derive(Debug, Default)]
pub(crate) struct Frontier {
    heap: BinaryHeap<Reverse<FrontierEntry>>,
    next_sequence: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, vertex: VertexId, estimated_total: f64) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Reverse(FrontierEntry {
            vertex,
            estimated_total,
            sequence,
        }));
    }

    /// Remove the entry with the lowest estimated total
    pub fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop().map(|Reverse(entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }
}
