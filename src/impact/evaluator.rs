//! Impact evaluation - quantity times per-unit factor
//!
//! Each basis has its own evaluation path that can be called directly when
//! the caller already knows the quantity. Every path checks the element's
//! EPD is declared against that basis; the top-level `evaluate` resolves the
//! quantity first and then goes through the same paths.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::diagnostics::Diagnostics;
use super::report::{ElementImpact, ImpactReport};
use super::resolver::{QuantityResolver, QuantitySource, ResolvedQuantity};
use crate::core::config::EvaluationConfig;
use crate::core::error::{ImpactError, Result};
use crate::core::types::{MetricField, QuantityType};
use crate::element::BuildingElement;
use crate::epd::EnvironmentalProductDeclaration;

/// Full result of evaluating one element
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub field: MetricField,
    pub quantity: ResolvedQuantity,
    /// Factor per declared unit taken from the EPD
    pub factor: f64,
    pub impact: f64,
}

/// Evaluates environmental impacts of building elements
#[derive(Debug, Clone, Default)]
pub struct ImpactEvaluator {
    config: EvaluationConfig,
}

impl ImpactEvaluator {
    pub fn new(config: EvaluationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    /// Resolve the element's governing quantity and evaluate `field`
    pub fn evaluate(
        &self,
        element: Option<&BuildingElement>,
        field: MetricField,
    ) -> Result<Evaluation> {
        let element = element.ok_or(ImpactError::MissingInput)?;
        let epd = governing_epd(element)?;

        if !epd.quantity_type.is_evaluable() {
            return Err(ImpactError::UnsupportedBasis {
                epd: epd.name.clone(),
                declared: epd.quantity_type,
            });
        }

        let quantity = QuantityResolver::new(&self.config).resolve(element, epd)?;
        let factor = checked_factor(epd, field, quantity.basis)?;

        Ok(Evaluation {
            field,
            quantity,
            factor,
            impact: quantity.value * factor,
        })
    }

    /// Evaluate the configured default metric
    pub fn evaluate_default(&self, element: Option<&BuildingElement>) -> Result<Evaluation> {
        self.evaluate(element, self.config.default_field)
    }

    /// Impact of `area` m2 of an area-declared element
    pub fn evaluate_by_area(
        &self,
        element: Option<&BuildingElement>,
        field: MetricField,
        area: f64,
    ) -> Result<f64> {
        evaluate_by(element, field, QuantityType::Area, area)
    }

    /// Impact of `volume` m3 of a volume-declared element
    pub fn evaluate_by_volume(
        &self,
        element: Option<&BuildingElement>,
        field: MetricField,
        volume: f64,
    ) -> Result<f64> {
        evaluate_by(element, field, QuantityType::Volume, volume)
    }

    /// Impact of `mass` kg of a mass-declared element
    pub fn evaluate_by_mass(
        &self,
        element: Option<&BuildingElement>,
        field: MetricField,
        mass: f64,
    ) -> Result<f64> {
        evaluate_by(element, field, QuantityType::Mass, mass)
    }

    /// Sentinel form of `evaluate`: failures become one error and 0.0
    ///
    /// A quantity taken from a named property instead of geometry is
    /// reported as a warning.
    pub fn evaluate_or_zero(
        &self,
        element: Option<&BuildingElement>,
        field: MetricField,
        diagnostics: &mut Diagnostics,
    ) -> f64 {
        match self.evaluate(element, field) {
            Ok(evaluation) => {
                if evaluation.quantity.source == QuantitySource::NamedProperty {
                    let name = element.map(|e| e.name.as_str()).unwrap_or_default();
                    diagnostics.record_warning(format!(
                        "{} of element '{}' was taken from a named property, not geometry",
                        evaluation.quantity.basis, name
                    ));
                }
                evaluation.impact
            }
            Err(error) => diagnostics.settle(Err(error)),
        }
    }

    /// Evaluate every element, in parallel for large batches
    pub fn evaluate_all(&self, elements: &[BuildingElement], field: MetricField) -> ImpactReport {
        let evaluate_one = |element: &BuildingElement| {
            ElementImpact::new(element, self.evaluate(Some(element), field))
        };

        let entries: Vec<ElementImpact> = if elements.len() >= self.config.parallel_threshold {
            elements.par_iter().map(evaluate_one).collect()
        } else {
            elements.iter().map(evaluate_one).collect()
        };

        let report = ImpactReport::new(field, entries);
        tracing::debug!(
            "Evaluated {} elements for {} ({} failed)",
            report.elements.len(),
            field,
            report.failed
        );
        report
    }
}

fn governing_epd(element: &BuildingElement) -> Result<&EnvironmentalProductDeclaration> {
    element
        .epd_fragment()
        .ok_or_else(|| ImpactError::MissingEpdData {
            element: element.name.clone(),
        })
}

/// Factor for `field`, after checking `epd` is declared against `requested`
fn checked_factor(
    epd: &EnvironmentalProductDeclaration,
    field: MetricField,
    requested: QuantityType,
) -> Result<f64> {
    if epd.quantity_type != requested {
        return Err(ImpactError::BasisMismatch {
            epd: epd.name.clone(),
            declared: epd.quantity_type,
            requested,
        });
    }

    epd.metric_value(field)
        .ok_or_else(|| ImpactError::MetricNotDeclared {
            epd: epd.name.clone(),
            field,
        })
}

fn evaluate_by(
    element: Option<&BuildingElement>,
    field: MetricField,
    basis: QuantityType,
    quantity: f64,
) -> Result<f64> {
    let element = element.ok_or(ImpactError::MissingInput)?;
    let epd = governing_epd(element)?;
    let factor = checked_factor(epd, field, basis)?;
    Ok(quantity * factor)
}
