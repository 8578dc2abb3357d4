//! Building model files - an EPD catalog plus the elements referencing it
//!
//! Elements refer to declarations by name, both for their governing EPD
//! fragment and for each material of their composition. References are
//! resolved at load time so every loaded element shares its catalog entries.

use ahash::AHashMap;
use glam::DVec2;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use uuid::Uuid;

use crate::core::error::LoadError;
use crate::core::types::ElementId;
use crate::element::{BuildingElement, ElementFragment, ElementGeometry, Material, PropertyValue};
use crate::epd::EnvironmentalProductDeclaration;

/// A loaded set of EPDs and building elements
#[derive(Debug, Clone, Default)]
pub struct BuildingModel {
    epds: Vec<Arc<EnvironmentalProductDeclaration>>,
    elements: Vec<BuildingElement>,
}

impl BuildingModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a model from a TOML file
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path)?;
        let model = Self::parse_toml(&content)?;
        tracing::info!(
            "Loaded {} EPDs and {} elements from {}",
            model.epds.len(),
            model.elements.len(),
            path.display()
        );
        Ok(model)
    }

    /// Parse a model from a TOML string
    pub fn parse_toml(content: &str) -> Result<Self, LoadError> {
        let file: TomlModel = toml::from_str(content)?;

        let mut catalog: AHashMap<String, Arc<EnvironmentalProductDeclaration>> =
            AHashMap::new();
        let mut epds = Vec::with_capacity(file.epds.len());
        for epd in file.epds {
            if catalog.contains_key(&epd.name) {
                return Err(LoadError::DuplicateEpd(epd.name));
            }
            let epd = Arc::new(epd);
            catalog.insert(epd.name.clone(), epd.clone());
            epds.push(epd);
        }

        let elements = file
            .elements
            .into_iter()
            .map(|element| element.into_element(&catalog))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { epds, elements })
    }

    pub fn epds(&self) -> &[Arc<EnvironmentalProductDeclaration>] {
        &self.epds
    }

    pub fn elements(&self) -> &[BuildingElement] {
        &self.elements
    }

    /// Get an EPD by name
    pub fn epd(&self, name: &str) -> Option<&EnvironmentalProductDeclaration> {
        self.epds.iter().find(|e| e.name == name).map(|e| e.as_ref())
    }

    /// Get an element by name
    pub fn element_by_name(&self, name: &str) -> Option<&BuildingElement> {
        self.elements.iter().find(|e| e.name == name)
    }
}

/// TOML representation of a model file
#[derive(Debug, Deserialize)]
struct TomlModel {
    #[serde(default)]
    epds: Vec<EnvironmentalProductDeclaration>,
    #[serde(default)]
    elements: Vec<TomlElement>,
}

/// TOML representation of a single element
#[derive(Debug, Deserialize)]
struct TomlElement {
    #[serde(default)]
    id: Option<Uuid>,
    name: String,
    /// Name of the governing EPD
    #[serde(default)]
    epd: Option<String>,
    #[serde(default)]
    classification: Option<TomlClassification>,
    #[serde(default)]
    materials: Vec<TomlMaterial>,
    #[serde(default)]
    geometry: Option<TomlGeometry>,
    #[serde(default)]
    properties: AHashMap<String, PropertyValue>,
}

#[derive(Debug, Deserialize)]
struct TomlClassification {
    system: String,
    code: String,
}

/// Density is declared on the EPD, never on the material
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlMaterial {
    name: String,
    #[serde(default)]
    epd: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum TomlGeometry {
    Surface {
        outline: Vec<[f64; 2]>,
        #[serde(default)]
        thickness: Option<f64>,
    },
    Extrusion {
        profile: Vec<[f64; 2]>,
        depth: f64,
    },
    Bar {
        length: f64,
        section_area: f64,
    },
}

impl TomlElement {
    fn into_element(
        self,
        catalog: &AHashMap<String, Arc<EnvironmentalProductDeclaration>>,
    ) -> Result<BuildingElement, LoadError> {
        let lookup = |epd: String| {
            catalog.get(&epd).cloned().ok_or_else(|| LoadError::UnknownEpd {
                element: self.name.clone(),
                epd,
            })
        };

        let mut fragments = Vec::new();
        if let Some(epd) = self.epd.clone() {
            fragments.push(ElementFragment::EpdData(lookup(epd)?));
        }
        if let Some(classification) = &self.classification {
            fragments.push(ElementFragment::Classification {
                system: classification.system.clone(),
                code: classification.code.clone(),
            });
        }

        let mut materials = Vec::with_capacity(self.materials.len());
        for entry in &self.materials {
            let mut material = Material::new(entry.name.clone());
            if let Some(epd) = entry.epd.clone() {
                material = material.with_epd(lookup(epd)?);
            }
            materials.push(material);
        }

        let geometry = match &self.geometry {
            Some(geometry) => {
                let geometry = geometry.to_geometry();
                geometry
                    .validate()
                    .map_err(|reason| LoadError::InvalidGeometry {
                        element: self.name.clone(),
                        reason,
                    })?;
                Some(geometry)
            }
            None => None,
        };

        Ok(BuildingElement {
            id: self.id.map(ElementId).unwrap_or_default(),
            name: self.name,
            materials,
            fragments,
            geometry,
            properties: self.properties,
        })
    }
}

impl TomlGeometry {
    fn to_geometry(&self) -> ElementGeometry {
        match self {
            TomlGeometry::Surface { outline, thickness } => ElementGeometry::Surface {
                outline: to_points(outline),
                thickness: *thickness,
            },
            TomlGeometry::Extrusion { profile, depth } => ElementGeometry::Extrusion {
                profile: to_points(profile),
                depth: *depth,
            },
            TomlGeometry::Bar {
                length,
                section_area,
            } => ElementGeometry::Bar {
                length: *length,
                section_area: *section_area,
            },
        }
    }
}

fn to_points(raw: &[[f64; 2]]) -> Vec<DVec2> {
    raw.iter().map(|p| DVec2::from_array(*p)).collect()
}
