//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unique identifier for building elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(pub Uuid);

impl ElementId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ElementId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Physical quantity an EPD's factors are normalized against
///
/// Declarations may carry any of these tags, but only `Mass`, `Volume`
/// and `Area` can be evaluated against a building element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantityType {
    Mass,
    Volume,
    Area,
    Length,
    Item,
    Energy,
    Undefined,
}

impl QuantityType {
    /// Whether an evaluation path exists for this basis
    pub fn is_evaluable(&self) -> bool {
        matches!(self, QuantityType::Mass | QuantityType::Volume | QuantityType::Area)
    }

    /// SI unit of the quantity (declared unit of the EPD)
    pub fn unit(&self) -> &'static str {
        match self {
            QuantityType::Mass => "kg",
            QuantityType::Volume => "m3",
            QuantityType::Area => "m2",
            QuantityType::Length => "m",
            QuantityType::Item => "item",
            QuantityType::Energy => "MJ",
            QuantityType::Undefined => "-",
        }
    }
}

impl fmt::Display for QuantityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuantityType::Mass => "Mass",
            QuantityType::Volume => "Volume",
            QuantityType::Area => "Area",
            QuantityType::Length => "Length",
            QuantityType::Item => "Item",
            QuantityType::Energy => "Energy",
            QuantityType::Undefined => "Undefined",
        };
        f.write_str(name)
    }
}

/// Impact category of an environmental metric
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricField {
    #[default]
    GlobalWarmingPotential,
    AcidificationPotential,
    EutrophicationPotential,
    OzoneDepletionPotential,
    PhotochemicalOzoneCreationPotential,
    DepletionOfAbioticResourcesFossilFuels,
    DepletionOfAbioticResourcesElements,
}

impl MetricField {
    pub const ALL: [MetricField; 7] = [
        MetricField::GlobalWarmingPotential,
        MetricField::AcidificationPotential,
        MetricField::EutrophicationPotential,
        MetricField::OzoneDepletionPotential,
        MetricField::PhotochemicalOzoneCreationPotential,
        MetricField::DepletionOfAbioticResourcesFossilFuels,
        MetricField::DepletionOfAbioticResourcesElements,
    ];

    /// Short abbreviation used in reports and on the command line
    pub fn abbreviation(&self) -> &'static str {
        match self {
            MetricField::GlobalWarmingPotential => "gwp",
            MetricField::AcidificationPotential => "ap",
            MetricField::EutrophicationPotential => "ep",
            MetricField::OzoneDepletionPotential => "odp",
            MetricField::PhotochemicalOzoneCreationPotential => "pocp",
            MetricField::DepletionOfAbioticResourcesFossilFuels => "adpf",
            MetricField::DepletionOfAbioticResourcesElements => "adpe",
        }
    }

    /// snake_case name, as written in model and config files
    pub fn name(&self) -> &'static str {
        match self {
            MetricField::GlobalWarmingPotential => "global_warming_potential",
            MetricField::AcidificationPotential => "acidification_potential",
            MetricField::EutrophicationPotential => "eutrophication_potential",
            MetricField::OzoneDepletionPotential => "ozone_depletion_potential",
            MetricField::PhotochemicalOzoneCreationPotential => {
                "photochemical_ozone_creation_potential"
            }
            MetricField::DepletionOfAbioticResourcesFossilFuels => {
                "depletion_of_abiotic_resources_fossil_fuels"
            }
            MetricField::DepletionOfAbioticResourcesElements => {
                "depletion_of_abiotic_resources_elements"
            }
        }
    }

    /// Reference unit of the impact per declared unit
    pub fn unit(&self) -> &'static str {
        match self {
            MetricField::GlobalWarmingPotential => "kg CO2-eq",
            MetricField::AcidificationPotential => "kg SO2-eq",
            MetricField::EutrophicationPotential => "kg PO4-eq",
            MetricField::OzoneDepletionPotential => "kg CFC-11-eq",
            MetricField::PhotochemicalOzoneCreationPotential => "kg C2H4-eq",
            MetricField::DepletionOfAbioticResourcesFossilFuels => "MJ",
            MetricField::DepletionOfAbioticResourcesElements => "kg Sb-eq",
        }
    }
}

impl fmt::Display for MetricField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MetricField::GlobalWarmingPotential => "Global Warming Potential",
            MetricField::AcidificationPotential => "Acidification Potential",
            MetricField::EutrophicationPotential => "Eutrophication Potential",
            MetricField::OzoneDepletionPotential => "Ozone Depletion Potential",
            MetricField::PhotochemicalOzoneCreationPotential => {
                "Photochemical Ozone Creation Potential"
            }
            MetricField::DepletionOfAbioticResourcesFossilFuels => {
                "Depletion of Abiotic Resources (fossil fuels)"
            }
            MetricField::DepletionOfAbioticResourcesElements => {
                "Depletion of Abiotic Resources (elements)"
            }
        };
        f.write_str(name)
    }
}

impl FromStr for MetricField {
    type Err = String;

    /// Accepts the abbreviation or the snake_case name, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        MetricField::ALL
            .iter()
            .copied()
            .find(|field| field.abbreviation() == key || field.name() == key)
            .ok_or_else(|| format!("unknown metric field: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_mass_volume_area_are_evaluable() {
        let evaluable: Vec<_> = [
            QuantityType::Mass,
            QuantityType::Volume,
            QuantityType::Area,
            QuantityType::Length,
            QuantityType::Item,
            QuantityType::Energy,
            QuantityType::Undefined,
        ]
        .into_iter()
        .filter(QuantityType::is_evaluable)
        .collect();
        assert_eq!(
            evaluable,
            vec![QuantityType::Mass, QuantityType::Volume, QuantityType::Area]
        );
    }

    #[test]
    fn test_metric_field_parses_abbreviation_and_name() {
        assert_eq!("gwp".parse::<MetricField>(), Ok(MetricField::GlobalWarmingPotential));
        assert_eq!("GWP".parse::<MetricField>(), Ok(MetricField::GlobalWarmingPotential));
        assert_eq!(
            "ozone-depletion-potential".parse::<MetricField>(),
            Ok(MetricField::OzoneDepletionPotential)
        );
        assert_eq!(
            "depletion_of_abiotic_resources_fossil_fuels".parse::<MetricField>(),
            Ok(MetricField::DepletionOfAbioticResourcesFossilFuels)
        );
        assert!("carbon".parse::<MetricField>().is_err());
    }

    #[test]
    fn test_metric_field_name_matches_serialized_tag() {
        for field in MetricField::ALL {
            let tag = serde_json::to_value(field).unwrap();
            assert_eq!(tag.as_str(), Some(field.name()));
            assert_eq!(field.name().parse::<MetricField>(), Ok(field));
        }
    }

    #[test]
    fn test_default_field_is_gwp() {
        assert_eq!(MetricField::default(), MetricField::GlobalWarmingPotential);
    }
}
