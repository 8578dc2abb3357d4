//! Element layer - building elements, materials, and geometry

pub mod building_element;
pub mod geometry;

pub use building_element::{
    BuildingElement, ElementFragment, Material, MaterialProperty, PropertyValue,
};
pub use geometry::{polygon_area, ElementGeometry, GeometryQuery};
