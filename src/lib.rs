//! Routegraph: weighted spatial road graph with A* path search
//!
//! Build a network of geo-located vertices joined by named, undirected
//! edges, then ask for the path between two vertices that minimizes either
//! physical length or a pluggable cost metric.
//!
//! # Core Concepts
//!
//! - **Vertices**: identity plus a longitude/latitude coordinate
//! - **Edges**: named road segments with a length and a road category
//! - **Cost calculators**: strategies supplying edge costs and admissible
//!   estimates, decoupling "cheapest" from "shortest"
//!
//! # Example
//!
//! ```
//! use routegraph::{Category, Graph};
//!
//! let mut graph = Graph::new();
//! let linz = graph.add_vertex(14.30, 48.32);
//! let wels = graph.add_vertex(14.02, 48.16);
//! graph.add_edge("wellnz", wels, linz, 28.0, Category::new(1)).unwrap();
//!
//! let path = graph.find_shortest_path(linz, wels);
//! assert_eq!(graph.path_length(&path), 28.0);
//! ```

pub mod config;
pub mod cost;
mod graph;
pub mod logging;
pub mod query;

pub use config::{ConfigError, ConfigResult, TravelTimeConfig};
pub use cost::{CostCalculator, LengthCost, TravelTimeCalculator};
pub use graph::{
    Category, Coordinate, Edge, EdgeData, Graph, GraphError, GraphResult, Vertex, VertexId,
};
pub use query::PathResult;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
