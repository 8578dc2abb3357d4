//! Quantity resolution - derive the physical quantity an EPD is declared against
//!
//! Structured geometry is always asked first. The named-property fallback is
//! only taken when the geometry kind cannot answer the query at all; a
//! geometry that answers with zero is reported, never papered over.

use serde::{Deserialize, Serialize};

use crate::core::config::EvaluationConfig;
use crate::core::error::{ImpactError, Result};
use crate::core::types::QuantityType;
use crate::element::{BuildingElement, GeometryQuery};
use crate::epd::EnvironmentalProductDeclaration;

/// Where a resolved quantity came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuantitySource {
    /// Structured geometry query
    Geometry,
    /// Generic named property on the element
    NamedProperty,
}

/// A physical quantity ready to be multiplied by an EPD factor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResolvedQuantity {
    pub basis: QuantityType,
    /// Value in the basis' SI unit (kg, m3, m2)
    pub value: f64,
    pub source: QuantitySource,
}

/// Resolves areas, volumes and masses of building elements
#[derive(Debug, Clone, Copy)]
pub struct QuantityResolver<'a> {
    area_property: &'a str,
    volume_property: &'a str,
}

impl<'a> QuantityResolver<'a> {
    pub fn new(config: &'a EvaluationConfig) -> Self {
        Self {
            area_property: &config.area_property,
            volume_property: &config.volume_property,
        }
    }

    /// Resolve the quantity `epd` is declared against
    pub fn resolve(
        &self,
        element: &BuildingElement,
        epd: &EnvironmentalProductDeclaration,
    ) -> Result<ResolvedQuantity> {
        match epd.quantity_type {
            QuantityType::Area => self.resolve_area(element),
            QuantityType::Volume => self.resolve_volume(element),
            QuantityType::Mass => self.resolve_mass(element, epd),
            declared => Err(ImpactError::UnsupportedBasis {
                epd: epd.name.clone(),
                declared,
            }),
        }
    }

    /// Planar area in m2
    pub fn resolve_area(&self, element: &BuildingElement) -> Result<ResolvedQuantity> {
        match element.area() {
            GeometryQuery::Measured(area) if area > 0.0 => {
                Ok(from_geometry(QuantityType::Area, area))
            }
            GeometryQuery::Measured(area) => Err(invalid(element, QuantityType::Area, area)),
            GeometryQuery::Zero => Err(invalid(element, QuantityType::Area, 0.0)),
            GeometryQuery::Unsupported => {
                self.from_property(element, self.area_property, QuantityType::Area)
            }
        }
    }

    /// Solid volume in m3
    pub fn resolve_volume(&self, element: &BuildingElement) -> Result<ResolvedQuantity> {
        match element.solid_volume() {
            GeometryQuery::Measured(volume) if volume > 0.0 => {
                Ok(from_geometry(QuantityType::Volume, volume))
            }
            GeometryQuery::Measured(volume) => {
                Err(invalid(element, QuantityType::Volume, volume))
            }
            // Ambiguous between "no geometry" and "empty solid"
            GeometryQuery::Zero => Err(invalid(element, QuantityType::Volume, 0.0)),
            GeometryQuery::Unsupported => {
                self.from_property(element, self.volume_property, QuantityType::Volume)
            }
        }
    }

    /// Mass in kg, from the resolved volume and the EPD density
    pub fn resolve_mass(
        &self,
        element: &BuildingElement,
        epd: &EnvironmentalProductDeclaration,
    ) -> Result<ResolvedQuantity> {
        let volume = self.resolve_volume(element)?;
        let density = epd.usable_density().ok_or_else(|| ImpactError::MissingDensity {
            epd: epd.name.clone(),
        })?;

        Ok(ResolvedQuantity {
            basis: QuantityType::Mass,
            value: volume.value * density,
            source: volume.source,
        })
    }

    fn from_property(
        &self,
        element: &BuildingElement,
        property: &str,
        quantity: QuantityType,
    ) -> Result<ResolvedQuantity> {
        tracing::debug!(
            "Element '{}' has no geometric {}, probing property '{}'",
            element.name,
            quantity,
            property
        );

        let value = element
            .named_property(property)
            .and_then(|v| v.as_number())
            .ok_or_else(|| ImpactError::UnresolvableQuantity {
                element: element.name.clone(),
                quantity,
                property: property.to_string(),
            })?;

        if value < 0.0 {
            return Err(invalid(element, quantity, value));
        }

        Ok(ResolvedQuantity {
            basis: quantity,
            value,
            source: QuantitySource::NamedProperty,
        })
    }
}

fn from_geometry(basis: QuantityType, value: f64) -> ResolvedQuantity {
    ResolvedQuantity {
        basis,
        value,
        source: QuantitySource::Geometry,
    }
}

fn invalid(element: &BuildingElement, quantity: QuantityType, value: f64) -> ImpactError {
    ImpactError::InvalidQuantityValue {
        element: element.name.clone(),
        quantity,
        value,
    }
}
