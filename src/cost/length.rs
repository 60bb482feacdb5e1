//! Physical length as cost

use super::CostCalculator;
use crate::graph::{Edge, Vertex};

/// Cost equals edge length; the estimate is the planar coordinate distance
///
/// This is what shortest-path queries run with.
#[derive(Debug, Clone, Copy, Default)]
pub struct LengthCost;

impl CostCalculator for LengthCost {
    fn costs(&self, edge: &Edge) -> f64 {
        edge.length
    }

    fn estimated_costs(&self, from: &Vertex, to: &Vertex) -> f64 {
        from.coordinate.planar_distance(&to.coordinate)
    }
}
