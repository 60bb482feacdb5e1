//! Vertex representation in the road graph

use super::coordinate::Coordinate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(u64);

impl VertexId {
    /// Create a VertexId from a caller-chosen value
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Draw a random VertexId from a v4 UUID
    ///
    /// Both 64-bit halves of the UUID are folded together. Uniqueness is
    /// not guaranteed here; the graph re-draws on collision.
    pub fn random() -> Self {
        let (high, low) = Uuid::new_v4().as_u64_pair();
        Self(high ^ low)
    }

    /// Get the inner value
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for VertexId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// A vertex in the road graph
///
/// Vertices are plain data. Search bookkeeping (cost so far, estimated
/// total, predecessor) lives in a per-query scratch map, never here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// Unique identifier
    pub id: VertexId,
    /// Geographic position
    pub coordinate: Coordinate,
}

impl Vertex {
    pub fn new(id: VertexId, coordinate: Coordinate) -> Self {
        Self { id, coordinate }
    }
}
