//! Evaluation configuration with documented defaults
//!
//! All tunables of the impact evaluation are collected here. Every field
//! has a default, so a config file only needs to name what it changes.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::core::error::LoadError;
use crate::core::types::MetricField;

/// Named property probed when an element has no 2D geometry
pub const DEFAULT_AREA_PROPERTY: &str = "Area";

/// Named property probed when an element has no solid geometry
pub const DEFAULT_VOLUME_PROPERTY: &str = "Volume";

/// Configuration for impact evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// Metric used when the caller does not name one
    pub default_field: MetricField,

    /// Fallback property for area-based declarations
    ///
    /// Only consulted when the element cannot answer an area query
    /// from its geometry.
    pub area_property: String,

    /// Fallback property for volume- and mass-based declarations
    ///
    /// Only consulted when the element's geometry does not support a
    /// solid-volume query.
    pub volume_property: String,

    /// Batch size from which elements are evaluated in parallel
    ///
    /// Below this count the rayon thread pool costs more than it saves.
    pub parallel_threshold: usize,
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            default_field: MetricField::GlobalWarmingPotential,
            area_property: DEFAULT_AREA_PROPERTY.to_string(),
            volume_property: DEFAULT_VOLUME_PROPERTY.to_string(),
            parallel_threshold: 64,
        }
    }
}

impl EvaluationConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self, LoadError> {
        let config: EvaluationConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Validate that the configuration values are usable
    pub fn validate(&self) -> Result<(), String> {
        if self.area_property.trim().is_empty() {
            return Err("area_property must not be empty".into());
        }
        if self.volume_property.trim().is_empty() {
            return Err("volume_property must not be empty".into());
        }
        if self.parallel_threshold == 0 {
            return Err("parallel_threshold must be at least 1".into());
        }
        Ok(())
    }
}
