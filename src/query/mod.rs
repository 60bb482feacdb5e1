//! Path queries over a road graph
//!
//! Shortest and least-cost searches both run the same A* routine; they
//! differ only in the cost calculator handed to it.

mod frontier;
mod path;
mod types;

pub use path::astar;
pub use types::PathResult;
