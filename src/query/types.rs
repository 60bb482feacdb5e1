//! Query result structures

use crate::graph::Edge;

/// Result of a path query
#[derive(Debug, Clone, PartialEq)]
pub struct PathResult {
    /// Whether the target was reached
    pub found: bool,
    /// Edges from start to target in travel order
    pub edges: Vec<Edge>,
    /// Sum of edge costs along `edges` (infinite when not found)
    pub total_cost: f64,
    /// Number of vertices expanded by the search
    pub expanded: usize,
}

impl PathResult {
    pub fn not_found(expanded: usize) -> Self {
        Self {
            found: false,
            edges: Vec::new(),
            total_cost: f64::INFINITY,
            expanded,
        }
    }

    pub fn found(edges: Vec<Edge>, total_cost: f64, expanded: usize) -> Self {
        Self {
            found: true,
            edges,
            total_cost,
            expanded,
        }
    }

    /// Number of edges in the path
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
