//! Cost calculators: pluggable strategies for least-cost path queries
//!
//! A calculator supplies the actual traversal cost of an edge and a lower
//! bound on the remaining cost between two vertices. The search engine
//! never checks that the bound is admissible; that is on the calculator.

mod length;
mod travel_time;

pub use length::LengthCost;
pub use travel_time::TravelTimeCalculator;

use crate::graph::{Edge, Vertex};

/// Strategy supplying edge costs and remaining-cost estimates to the search
pub trait CostCalculator {
    /// Cost of traversing `edge` in either direction
    fn costs(&self, edge: &Edge) -> f64;

    /// Estimate of the cheapest remaining cost from `from` to `to`
    ///
    /// Must never exceed the true cost for search results to be minimal.
    fn estimated_costs(&self, from: &Vertex, to: &Vertex) -> f64;
}
