//! Model layer - loading EPD catalogs and elements from files

pub mod building_model;

pub use building_model::BuildingModel;
