//! Environmental Product Declarations and their metrics

use serde::{Deserialize, Serialize};

use crate::core::types::{MetricField, QuantityType};

/// One impact category and its factor per declared unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalMetric {
    pub field: MetricField,
    /// Impact per declared unit; negative for sequestration credits
    pub value: f64,
}

impl EnvironmentalMetric {
    pub fn new(field: MetricField, value: f64) -> Self {
        Self { field, value }
    }
}

/// Environmental footprint of one material or product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvironmentalProductDeclaration {
    /// Unique name within a catalog
    pub name: String,
    /// Quantity the metric factors are normalized against
    pub quantity_type: QuantityType,
    /// Density in kg/m3, needed when mass has to be derived from volume
    #[serde(default)]
    pub density: Option<f64>,
    /// Declared metrics, in declaration order
    #[serde(default)]
    pub metrics: Vec<EnvironmentalMetric>,
}

impl EnvironmentalProductDeclaration {
    pub fn new(name: impl Into<String>, quantity_type: QuantityType) -> Self {
        Self {
            name: name.into(),
            quantity_type,
            density: None,
            metrics: Vec::new(),
        }
    }

    pub fn with_density(mut self, density: f64) -> Self {
        self.density = Some(density);
        self
    }

    pub fn with_metric(mut self, field: MetricField, value: f64) -> Self {
        self.metrics.push(EnvironmentalMetric::new(field, value));
        self
    }

    /// Factor declared for `field`, first declaration wins
    pub fn metric_value(&self, field: MetricField) -> Option<f64> {
        self.metrics.iter().find(|m| m.field == field).map(|m| m.value)
    }

    /// Density usable for a volume-to-mass conversion
    pub fn usable_density(&self) -> Option<f64> {
        self.density.filter(|d| d.is_finite() && *d > 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_value_lookup() {
        let epd = EnvironmentalProductDeclaration::new("Glulam", QuantityType::Volume)
            .with_metric(MetricField::GlobalWarmingPotential, -650.0)
            .with_metric(MetricField::AcidificationPotential, 0.4);

        assert_eq!(epd.metric_value(MetricField::GlobalWarmingPotential), Some(-650.0));
        assert_eq!(epd.metric_value(MetricField::AcidificationPotential), Some(0.4));
        assert_eq!(epd.metric_value(MetricField::OzoneDepletionPotential), None);
    }

    #[test]
    fn test_first_declared_metric_wins() {
        let epd = EnvironmentalProductDeclaration::new("Steel", QuantityType::Mass)
            .with_metric(MetricField::GlobalWarmingPotential, 1.2)
            .with_metric(MetricField::GlobalWarmingPotential, 9.9);
        assert_eq!(epd.metric_value(MetricField::GlobalWarmingPotential), Some(1.2));
    }

    #[test]
    fn test_usable_density() {
        let epd = EnvironmentalProductDeclaration::new("Concrete", QuantityType::Mass);
        assert_eq!(epd.usable_density(), None);
        assert_eq!(epd.clone().with_density(2400.0).usable_density(), Some(2400.0));
        assert_eq!(epd.clone().with_density(0.0).usable_density(), None);
        assert_eq!(epd.with_density(f64::NAN).usable_density(), None);
    }

    #[test]
    fn test_deserialize_from_toml() {
        let epd: EnvironmentalProductDeclaration = toml::from_str(
            r#"
            name = "Brick"
            quantity_type = "mass"
            density = 1800.0
            metrics = [{ field = "global_warming_potential", value = 0.24 }]
            "#,
        )
        .unwrap();
        assert_eq!(epd.quantity_type, QuantityType::Mass);
        assert_eq!(epd.density, Some(1800.0));
        assert_eq!(epd.metrics.len(), 1);
    }
}
