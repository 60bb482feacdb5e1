//! Travel time as cost: length over the speed of the road class

use super::CostCalculator;
use crate::config::{ConfigResult, TravelTimeConfig};
use crate::graph::{Category, Edge, Vertex};

/// Cost of an edge is `length / speed(category)`, in hours for km and km/h
///
/// The estimate divides the planar coordinate distance by the fastest
/// configured speed, so it stays below the true cost as long as edge
/// lengths are no shorter than the planar distance between their endpoints.
#[derive(Debug, Clone)]
pub struct TravelTimeCalculator {
    config: TravelTimeConfig,
    max_speed: f64,
}

impl TravelTimeCalculator {
    /// Build a calculator from a validated configuration
    pub fn new(config: TravelTimeConfig) -> ConfigResult<Self> {
        config.validate()?;
        let max_speed = config.max_speed();
        Ok(Self { config, max_speed })
    }

    pub fn config(&self) -> &TravelTimeConfig {
        &self.config
    }

    pub fn speed_for(&self, category: Category) -> f64 {
        self.config.speed_for(category)
    }
}

impl Default for TravelTimeCalculator {
    fn default() -> Self {
        let config = TravelTimeConfig::default();
        let max_speed = config.max_speed();
        Self { config, max_speed }
    }
}

impl CostCalculator for TravelTimeCalculator {
    fn costs(&self, edge: &Edge) -> f64 {
        edge.length / self.speed_for(edge.category)
    }

    fn estimated_costs(&self, from: &Vertex, to: &Vertex) -> f64 {
        from.coordinate.planar_distance(&to.coordinate) / self.max_speed
    }
}
