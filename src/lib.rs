//! EPD Impact - environmental impact of building elements from EPD data

pub mod core;
pub mod element;
pub mod epd;
pub mod impact;
pub mod model;

pub use crate::core::{ElementId, EvaluationConfig, ImpactError, LoadError, MetricField, QuantityType};
pub use element::{BuildingElement, ElementFragment, ElementGeometry, GeometryQuery, Material};
pub use epd::{element_metrics, epd_metrics, EnvironmentalMetric, EnvironmentalProductDeclaration};
pub use impact::{Diagnostics, Evaluation, ImpactEvaluator, ImpactReport};
pub use model::BuildingModel;
