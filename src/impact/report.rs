//! Batch evaluation output and serialization

use serde::Serialize;

use super::evaluator::Evaluation;
use super::resolver::QuantitySource;
use crate::core::error::Result;
use crate::core::types::{ElementId, MetricField, QuantityType};
use crate::element::BuildingElement;

/// Outcome for a single element of a batch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementImpact {
    pub element_id: ElementId,
    pub element: String,
    pub epd: Option<String>,
    pub basis: Option<QuantityType>,
    pub quantity: Option<f64>,
    pub source: Option<QuantitySource>,
    pub impact: Option<f64>,
    pub error: Option<String>,
}

impl ElementImpact {
    pub fn new(element: &BuildingElement, result: Result<Evaluation>) -> Self {
        let epd = element.epd_fragment();
        let mut entry = Self {
            element_id: element.id,
            element: element.name.clone(),
            epd: epd.map(|e| e.name.clone()),
            basis: epd.map(|e| e.quantity_type),
            quantity: None,
            source: None,
            impact: None,
            error: None,
        };

        match result {
            Ok(evaluation) => {
                entry.quantity = Some(evaluation.quantity.value);
                entry.source = Some(evaluation.quantity.source);
                entry.impact = Some(evaluation.impact);
            }
            Err(error) => entry.error = Some(error.to_string()),
        }
        entry
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Impacts of a set of elements for one metric
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactReport {
    pub field: MetricField,
    pub unit: String,
    /// One entry per element, in input order
    pub elements: Vec<ElementImpact>,
    /// Sum over elements that evaluated successfully
    pub total: f64,
    pub failed: usize,
}

impl ImpactReport {
    pub fn new(field: MetricField, elements: Vec<ElementImpact>) -> Self {
        let total = elements.iter().filter_map(|e| e.impact).sum();
        let failed = elements.iter().filter(|e| !e.is_ok()).count();
        Self {
            field,
            unit: field.unit().to_string(),
            elements,
            total,
            failed,
        }
    }

    pub fn succeeded(&self) -> usize {
        self.elements.len() - self.failed
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(&self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn summary(&self) -> String {
        format!(
            "{}: {:.3} {} over {} elements ({} failed)",
            self.field,
            self.total,
            self.unit,
            self.elements.len(),
            self.failed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ImpactError;
    use crate::impact::resolver::ResolvedQuantity;

    fn evaluation(impact: f64) -> Evaluation {
        Evaluation {
            field: MetricField::GlobalWarmingPotential,
            quantity: ResolvedQuantity {
                basis: QuantityType::Volume,
                value: 1.0,
                source: QuantitySource::Geometry,
            },
            factor: impact,
            impact,
        }
    }

    #[test]
    fn test_report_totals_only_successes() {
        let a = BuildingElement::new("A");
        let b = BuildingElement::new("B");
        let c = BuildingElement::new("C");

        let report = ImpactReport::new(
            MetricField::GlobalWarmingPotential,
            vec![
                ElementImpact::new(&a, Ok(evaluation(10.0))),
                ElementImpact::new(&b, Err(ImpactError::MissingEpdData { element: "B".into() })),
                ElementImpact::new(&c, Ok(evaluation(-2.5))),
            ],
        );

        assert_eq!(report.total, 7.5);
        assert_eq!(report.failed, 1);
        assert_eq!(report.succeeded(), 2);
        assert_eq!(report.unit, "kg CO2-eq");
        assert!(report.elements[1].error.as_deref().unwrap().contains("no EPD data"));
    }

    #[test]
    fn test_report_json_shape() {
        let a = BuildingElement::new("A");
        let report = ImpactReport::new(
            MetricField::GlobalWarmingPotential,
            vec![ElementImpact::new(&a, Ok(evaluation(3.0)))],
        );

        let json: serde_json::Value = serde_json::from_str(&report.to_json()).unwrap();
        assert_eq!(json["field"], "global_warming_potential");
        assert_eq!(json["total"], 3.0);
        assert_eq!(json["elements"][0]["source"], "geometry");
        assert!(json["elements"][0]["error"].is_null());
    }
}
