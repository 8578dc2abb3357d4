//! EPD layer - declarations, metrics, and metric extraction

pub mod declaration;
pub mod metrics;

pub use declaration::{EnvironmentalMetric, EnvironmentalProductDeclaration};
pub use metrics::{element_metrics, epd_metrics};
