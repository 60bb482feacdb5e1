//! Point on the sphere, stored as raw longitude/latitude

use serde::{Deserialize, Serialize};

/// An immutable longitude/latitude pair.
///
/// No range validation is applied; any finite pair is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    longitude: f64,
    latitude: f64,
}

impl Coordinate {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Straight-line distance on the raw coordinate plane (not geodesic)
    pub fn planar_distance(&self, other: &Coordinate) -> f64 {
        let dx = other.longitude - self.longitude;
        let dy = other.latitude - self.latitude;
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.longitude, self.latitude)
    }
}
