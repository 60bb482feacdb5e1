//! Core graph data structures

mod coordinate;
mod edge;
mod engine;
mod vertex;


pub use coordinate::Coordinate;
pub use edge::{Category, Edge, EdgeData};
pub use engine::{Graph, GraphError, GraphResult};
pub use vertex::{Vertex, VertexId};
