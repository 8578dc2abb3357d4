//! Metric extraction from declarations and elements

use crate::element::BuildingElement;

use super::declaration::{EnvironmentalMetric, EnvironmentalProductDeclaration};

/// Metrics declared by an EPD, in declaration order
pub fn epd_metrics(epd: Option<&EnvironmentalProductDeclaration>) -> Vec<EnvironmentalMetric> {
    epd.map(|epd| epd.metrics.clone()).unwrap_or_default()
}

/// Metrics of every EPD in an element's material composition
///
/// Materials are visited in composition order. Metrics are not merged:
/// two materials sharing one declaration contribute its metrics twice.
pub fn element_metrics(element: Option<&BuildingElement>) -> Vec<EnvironmentalMetric> {
    let Some(element) = element else {
        return Vec::new();
    };

    element
        .materials()
        .iter()
        .filter_map(|material| material.epd())
        .flat_map(|epd| epd.metrics.iter().copied())
        .collect()
}
