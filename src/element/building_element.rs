//! Building elements, their material composition and attached data

use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::geometry::{ElementGeometry, GeometryQuery};
use crate::core::types::ElementId;
use crate::epd::EnvironmentalProductDeclaration;

/// Loosely typed value of a named element property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Number(f64),
    Flag(bool),
    Text(String),
}

impl PropertyValue {
    /// Numeric reading of the value, if it has a finite one
    pub fn as_number(&self) -> Option<f64> {
        let value = match self {
            PropertyValue::Number(n) => *n,
            PropertyValue::Text(s) => s.trim().parse::<f64>().ok()?,
            PropertyValue::Flag(_) => return None,
        };
        value.is_finite().then_some(value)
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Number(value)
    }
}

impl From<&str> for PropertyValue {
    fn from(value: &str) -> Self {
        PropertyValue::Text(value.to_string())
    }
}

/// Typed property attached to a material
#[derive(Debug, Clone, PartialEq)]
pub enum MaterialProperty {
    /// Environmental data for the material
    Epd(Arc<EnvironmentalProductDeclaration>),
}

/// A constituent material of an element
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub name: String,
    pub properties: Vec<MaterialProperty>,
}

impl Material {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    pub fn with_epd(mut self, epd: Arc<EnvironmentalProductDeclaration>) -> Self {
        self.properties.push(MaterialProperty::Epd(epd));
        self
    }

    /// The material's EPD, if it carries one
    pub fn epd(&self) -> Option<&EnvironmentalProductDeclaration> {
        self.properties.iter().find_map(|p| match p {
            MaterialProperty::Epd(epd) => Some(epd.as_ref()),
        })
    }
}

/// Data fragment attached to an element
#[derive(Debug, Clone, PartialEq)]
pub enum ElementFragment {
    /// Declaration governing the element's impact evaluation
    EpdData(Arc<EnvironmentalProductDeclaration>),
    /// Entry in a classification system (e.g. Uniclass, OmniClass)
    Classification { system: String, code: String },
}

/// A geometry-bearing building element
#[derive(Debug, Clone, PartialEq)]
pub struct BuildingElement {
    pub id: ElementId,
    pub name: String,
    /// Material composition, outermost layer first
    pub materials: Vec<Material>,
    pub fragments: Vec<ElementFragment>,
    pub geometry: Option<ElementGeometry>,
    /// Generic properties, only consulted when geometry cannot answer
    pub properties: AHashMap<String, PropertyValue>,
}

impl BuildingElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: ElementId::new(),
            name: name.into(),
            materials: Vec::new(),
            fragments: Vec::new(),
            geometry: None,
            properties: AHashMap::new(),
        }
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.materials.push(material);
        self
    }

    pub fn with_fragment(mut self, fragment: ElementFragment) -> Self {
        self.fragments.push(fragment);
        self
    }

    pub fn with_epd(self, epd: Arc<EnvironmentalProductDeclaration>) -> Self {
        self.with_fragment(ElementFragment::EpdData(epd))
    }

    pub fn with_geometry(mut self, geometry: ElementGeometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Material composition of the element
    pub fn materials(&self) -> &[Material] {
        &self.materials
    }

    /// First fragment carrying EPD data
    pub fn epd_fragment(&self) -> Option<&EnvironmentalProductDeclaration> {
        self.fragments.iter().find_map(|f| match f {
            ElementFragment::EpdData(epd) => Some(epd.as_ref()),
            _ => None,
        })
    }

    /// Generic property lookup by name
    pub fn named_property(&self, name: &str) -> Option<&PropertyValue> {
        self.properties.get(name)
    }

    pub fn area(&self) -> GeometryQuery {
        self.geometry
            .as_ref()
            .map_or(GeometryQuery::Unsupported, ElementGeometry::area)
    }

    pub fn solid_volume(&self) -> GeometryQuery {
        self.geometry
            .as_ref()
            .map_or(GeometryQuery::Unsupported, ElementGeometry::solid_volume)
    }
}
