pub mod config;
pub mod error;
pub mod types;

pub use config::EvaluationConfig;
pub use error::{ImpactError, LoadError, Result};
pub use types::{ElementId, MetricField, QuantityType};
