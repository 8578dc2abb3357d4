//! Property tests for the evaluation paths

use epd_impact::core::types::{MetricField, QuantityType};
use epd_impact::element::{BuildingElement, ElementGeometry, Material};
use epd_impact::epd::{element_metrics, EnvironmentalProductDeclaration};
use epd_impact::impact::{Diagnostics, ImpactEvaluator};
use epd_impact::ImpactError;
use glam::DVec2;
use proptest::prelude::*;
use std::sync::Arc;

fn basis() -> impl Strategy<Value = QuantityType> {
    prop_oneof![
        Just(QuantityType::Mass),
        Just(QuantityType::Volume),
        Just(QuantityType::Area),
    ]
}

fn field() -> impl Strategy<Value = MetricField> {
    proptest::sample::select(MetricField::ALL.to_vec())
}

fn element_declared(basis: QuantityType, field: MetricField, factor: f64) -> BuildingElement {
    let epd = EnvironmentalProductDeclaration::new("Generated", basis)
        .with_density(1000.0)
        .with_metric(field, factor);
    BuildingElement::new("Generated element").with_epd(Arc::new(epd))
}

fn evaluate_path(
    evaluator: &ImpactEvaluator,
    element: &BuildingElement,
    path: QuantityType,
    field: MetricField,
    quantity: f64,
) -> Result<f64, ImpactError> {
    match path {
        QuantityType::Area => evaluator.evaluate_by_area(Some(element), field, quantity),
        QuantityType::Volume => evaluator.evaluate_by_volume(Some(element), field, quantity),
        QuantityType::Mass => evaluator.evaluate_by_mass(Some(element), field, quantity),
        other => panic!("no evaluation path for {}", other),
    }
}

proptest! {
    #[test]
    fn matching_path_is_quantity_times_factor(
        basis in basis(),
        field in field(),
        quantity in 1e-6f64..1e6,
        factor in -1e4f64..1e4,
    ) {
        let evaluator = ImpactEvaluator::default();
        let element = element_declared(basis, field, factor);

        let impact = evaluate_path(&evaluator, &element, basis, field, quantity);
        prop_assert_eq!(impact, Ok(quantity * factor));
    }

    #[test]
    fn mismatched_path_reports_and_returns_zero(
        declared in basis(),
        requested in basis(),
        quantity in 1e-6f64..1e6,
        factor in -1e4f64..1e4,
    ) {
        prop_assume!(declared != requested);
        let evaluator = ImpactEvaluator::default();
        let element = element_declared(declared, MetricField::GlobalWarmingPotential, factor);

        let result = evaluate_path(
            &evaluator,
            &element,
            requested,
            MetricField::GlobalWarmingPotential,
            quantity,
        );
        let is_mismatch = matches!(result, Err(ImpactError::BasisMismatch { .. }));
        prop_assert!(is_mismatch);

        let mut diagnostics = Diagnostics::new();
        prop_assert_eq!(diagnostics.settle(result), 0.0);
        prop_assert_eq!(diagnostics.errors().count(), 1);
    }

    #[test]
    fn planar_area_evaluation_scales_with_outline(
        width in 0.01f64..100.0,
        height in 0.01f64..100.0,
        factor in -50.0f64..50.0,
    ) {
        let element = element_declared(QuantityType::Area, MetricField::GlobalWarmingPotential, factor)
            .with_geometry(ElementGeometry::Surface {
                outline: vec![
                    DVec2::new(0.0, 0.0),
                    DVec2::new(width, 0.0),
                    DVec2::new(width, height),
                    DVec2::new(0.0, height),
                ],
                thickness: None,
            });

        let evaluation = ImpactEvaluator::default()
            .evaluate(Some(&element), MetricField::GlobalWarmingPotential)
            .unwrap();
        let expected = width * height * factor;
        prop_assert!((evaluation.impact - expected).abs() <= 1e-9 * expected.abs().max(1.0));
    }

    #[test]
    fn element_metrics_repeat_once_per_declared_material(
        declared_layers in 0usize..6,
        bare_layers in 0usize..4,
    ) {
        let epd = Arc::new(
            EnvironmentalProductDeclaration::new("Layer", QuantityType::Area)
                .with_metric(MetricField::GlobalWarmingPotential, 1.0)
                .with_metric(MetricField::AcidificationPotential, 0.01),
        );
        let mut element = BuildingElement::new("Layered");
        for i in 0..declared_layers {
            element = element.with_material(Material::new(format!("declared {}", i)).with_epd(epd.clone()));
        }
        for i in 0..bare_layers {
            element = element.with_material(Material::new(format!("bare {}", i)));
        }

        prop_assert_eq!(element_metrics(Some(&element)).len(), declared_layers * 2);
    }
}
