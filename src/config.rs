//! Configuration for the travel-time cost calculator
//!
//! Speeds are given in km/h per road category and can be loaded from YAML
//! or JSON:
//!
//! ```yaml
//! fallback_speed: 30.0
//! speeds:
//!   1: 130.0
//!   2: 100.0
//! ```

use crate::graph::Category;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid speed {speed} for {target}: must be finite and positive")]
    InvalidSpeed { target: String, speed: f64 },
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Travel speeds per road category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TravelTimeConfig {
    /// Speed in km/h for each known category
    pub speeds: BTreeMap<Category, f64>,
    /// Speed in km/h for categories missing from `speeds`
    pub fallback_speed: f64,
}

impl Default for TravelTimeConfig {
    fn default() -> Self {
        let speeds = [(1, 130.0), (2, 100.0), (3, 70.0), (4, 50.0)]
            .into_iter()
            .map(|(category, speed)| (Category::new(category), speed))
            .collect();

        Self {
            speeds,
            fallback_speed: 30.0,
        }
    }
}

impl TravelTimeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the speed for one category
    pub fn with_speed(mut self, category: Category, speed: f64) -> Self {
        self.speeds.insert(category, speed);
        self
    }

    /// Set the speed used for unlisted categories
    pub fn with_fallback_speed(mut self, speed: f64) -> Self {
        self.fallback_speed = speed;
        self
    }

    /// Speed for `category`, falling back to `fallback_speed`
    pub fn speed_for(&self, category: Category) -> f64 {
        self.speeds
            .get(&category)
            .copied()
            .unwrap_or(self.fallback_speed)
    }

    /// Highest configured speed, including the fallback
    pub fn max_speed(&self) -> f64 {
        self.speeds
            .values()
            .copied()
            .fold(self.fallback_speed, f64::max)
    }

    /// Check every speed is finite and positive
    pub fn validate(&self) -> ConfigResult<()> {
        let listed = self
            .speeds
            .iter()
            .map(|(category, speed)| (format!("category {category}"), *speed));
        let fallback = std::iter::once(("fallback".to_string(), self.fallback_speed));

        for (target, speed) in listed.chain(fallback) {
            if !speed.is_finite() || speed <= 0.0 {
                return Err(ConfigError::InvalidSpeed { target, speed });
            }
        }
        Ok(())
    }

    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a `.yaml`, `.yml` or `.json` file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let contents = std::fs::read_to_string(path)?;

        let config = match extension.as_str() {
            "yaml" | "yml" => Self::from_yaml_str(&contents)?,
            "json" => Self::from_json_str(&contents)?,
            _ => return Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        };
        tracing::debug!(path = %path.display(), categories = config.speeds.len(), "loaded travel time config");
        Ok(config)
    }
}
