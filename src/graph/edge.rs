//! Undirected, named road segments

use super::vertex::VertexId;
use serde::{Deserialize, Serialize};

/// Road class of an edge, consumed by cost calculators
///
/// Lower numbers are faster classes (1 = motorway).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(u8);

impl Category {
    pub const fn new(category: u8) -> Self {
        Self(category)
    }

    pub fn get(&self) -> u8 {
        self.0
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u8> for Category {
    fn from(category: u8) -> Self {
        Self(category)
    }
}

/// An undirected edge between two vertices
///
/// Traversal is allowed in both directions at the same cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Unique name, the key within a graph
    pub name: String,
    /// One endpoint
    pub start: VertexId,
    /// The other endpoint
    pub end: VertexId,
    /// Physical length
    pub length: f64,
    /// Road class
    pub category: Category,
}

impl Edge {
    pub fn new(
        name: impl Into<String>,
        start: VertexId,
        end: VertexId,
        length: f64,
        category: Category,
    ) -> Self {
        Self {
            name: name.into(),
            start,
            end,
            length,
            category,
        }
    }

    /// Check whether this edge joins `a` and `b`, in either direction
    pub fn connects(&self, a: VertexId, b: VertexId) -> bool {
        (self.start == a && self.end == b) || (self.start == b && self.end == a)
    }

    /// Check whether `vertex` is one of the endpoints
    pub fn touches(&self, vertex: VertexId) -> bool {
        self.start == vertex || self.end == vertex
    }

    /// The endpoint across from `vertex`, if `vertex` is an endpoint
    pub fn opposite(&self, vertex: VertexId) -> Option<VertexId> {
        if self.start == vertex {
            Some(self.end)
        } else if self.end == vertex {
            Some(self.start)
        } else {
            None
        }
    }
}

/// Plain edge record, insertable with [`Graph::add_edge_data`](super::Graph::add_edge_data)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeData {
    pub name: String,
    pub start_id: VertexId,
    pub end_id: VertexId,
    pub length: f64,
    pub category: Category,
}

impl EdgeData {
    pub fn new(
        name: impl Into<String>,
        start_id: VertexId,
        end_id: VertexId,
        length: f64,
        category: Category,
    ) -> Self {
        Self {
            name: name.into(),
            start_id,
            end_id,
            length,
            category,
        }
    }
}
