//! Graph: the road network and the entry point for path queries

use super::coordinate::Coordinate;
use super::edge::{Category, Edge, EdgeData};
use super::vertex::{Vertex, VertexId};
use crate::cost::{CostCalculator, LengthCost};
use crate::query::{self, PathResult};
use std::collections::{BTreeMap, HashMap};
use thiserror::Error;

/// Errors that can occur while building a graph
#[derive(Debug, Error, PartialEq)]
pub enum GraphError {
    #[error("Invalid vertex id: {0}")]
    InvalidVertexId(VertexId),
}

/// Result type for graph operations
pub type GraphResult<T> = Result<T, GraphError>;

/// A weighted, undirected spatial graph
///
/// Owns its vertices (keyed by id) and edges (keyed by name). There is no
/// vertex-to-edge index: adjacency is found by scanning every edge, which
/// is O(E) per lookup.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: HashMap<VertexId, Vertex>,
    edges: BTreeMap<String, Edge>,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            vertices: HashMap::new(),
            edges: BTreeMap::new(),
        }
    }

    /// Add a vertex under a freshly generated id
    ///
    /// A generated id that is already taken is discarded and drawn again.
    pub fn add_vertex(&mut self, longitude: f64, latitude: f64) -> VertexId {
        let mut id = VertexId::random();
        while self.vertices.contains_key(&id) {
            tracing::debug!(%id, "generated vertex id collided, drawing again");
            id = VertexId::random();
        }
        self.insert_vertex(id, Coordinate::new(longitude, latitude))
    }

    /// Insert a vertex under a caller-supplied id
    ///
    /// An existing vertex with the same id is replaced. Returns `id` unchanged.
    pub fn insert_vertex(&mut self, id: VertexId, coordinate: Coordinate) -> VertexId {
        if self.vertices.insert(id, Vertex::new(id, coordinate)).is_some() {
            tracing::debug!(%id, "replaced vertex");
        }
        id
    }

    /// Add (or replace) a named edge between two known vertices
    ///
    /// Fails with [`GraphError::InvalidVertexId`] if either endpoint is
    /// unknown; the edge collection is left untouched in that case.
    pub fn add_edge(
        &mut self,
        name: impl Into<String>,
        start: VertexId,
        end: VertexId,
        length: f64,
        category: Category,
    ) -> GraphResult<()> {
        for id in [start, end] {
            if !self.vertices.contains_key(&id) {
                return Err(GraphError::InvalidVertexId(id));
            }
        }

        let edge = Edge::new(name, start, end, length, category);
        tracing::debug!(name = %edge.name, %start, %end, length, "added edge");
        if let Some(previous) = self.edges.insert(edge.name.clone(), edge) {
            tracing::debug!(name = %previous.name, "replaced edge");
        }
        Ok(())
    }

    /// Add an edge from a plain record
    pub fn add_edge_data(&mut self, data: EdgeData) -> GraphResult<()> {
        self.add_edge(data.name, data.start_id, data.end_id, data.length, data.category)
    }

    /// Start vertex of the named edge
    pub fn start_vertex_of(&self, edge_name: &str) -> Option<VertexId> {
        self.edges.get(edge_name).map(|e| e.start)
    }

    /// Get a vertex by id
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(&id)
    }

    /// Get an edge by name
    pub fn edge(&self, name: &str) -> Option<&Edge> {
        self.edges.get(name)
    }

    /// All vertices, in no particular order
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.values()
    }

    /// All edges
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.values()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Edges with `vertex` as an endpoint (linear scan)
    pub fn incident_edges(&self, vertex: VertexId) -> impl Iterator<Item = &Edge> {
        self.edges.values().filter(move |e| e.touches(vertex))
    }

    /// First edge joining `a` and `b` in name order (linear scan)
    pub fn edge_between(&self, a: VertexId, b: VertexId) -> Option<&Edge> {
        self.edges.values().find(|e| e.connects(a, b))
    }

    /// Path minimizing total edge length
    ///
    /// Returns the edges from `start` to `target` in travel order. The result
    /// is empty when `start == target` or when no route exists.
    pub fn find_shortest_path(&self, start: VertexId, target: VertexId) -> Vec<Edge> {
        self.route(start, target, &LengthCost).edges
    }

    /// Path minimizing the costs reported by `calculator`
    ///
    /// `calculator.estimated_costs` must never overestimate, or the result
    /// may not be minimal.
    pub fn find_minimal_path(
        &self,
        start: VertexId,
        target: VertexId,
        calculator: &dyn CostCalculator,
    ) -> Vec<Edge> {
        self.route(start, target, calculator).edges
    }

    /// Full search outcome, including whether a route was found
    pub fn route(
        &self,
        start: VertexId,
        target: VertexId,
        calculator: &dyn CostCalculator,
    ) -> PathResult {
        query::astar(self, start, target, calculator)
    }

    /// Sum of edge lengths; 0 for an empty path
    pub fn path_length<'a>(&self, path: impl IntoIterator<Item = &'a Edge>) -> f64 {
        path.into_iter().map(|e| e.length).sum()
    }

    /// Sum of edge costs under `calculator`; 0 for an empty path
    pub fn path_costs<'a>(
        &self,
        path: impl IntoIterator<Item = &'a Edge>,
        calculator: &dyn CostCalculator,
    ) -> f64 {
        path.into_iter().map(|e| calculator.costs(e)).sum()
    }
}
