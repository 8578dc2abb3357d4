use thiserror::Error;

use crate::core::types::{MetricField, QuantityType};

/// Reasons an impact evaluation could not produce a value
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ImpactError {
    #[error("No building element was provided")]
    MissingInput,

    #[error("Element '{element}' carries no EPD data fragment")]
    MissingEpdData { element: String },

    #[error("EPD '{epd}' declares {declared} but the {requested} evaluation was requested")]
    BasisMismatch {
        epd: String,
        declared: QuantityType,
        requested: QuantityType,
    },

    #[error("Could not resolve the {quantity} of element '{element}' from geometry or the '{property}' property")]
    UnresolvableQuantity {
        element: String,
        quantity: QuantityType,
        property: String,
    },

    #[error("Element '{element}' has an invalid {quantity} of {value}")]
    InvalidQuantityValue {
        element: String,
        quantity: QuantityType,
        value: f64,
    },

    #[error("EPD '{epd}' declares {declared}, which cannot be evaluated")]
    UnsupportedBasis { epd: String, declared: QuantityType },

    #[error("EPD '{epd}' declares mass but no positive density")]
    MissingDensity { epd: String },

    #[error("EPD '{epd}' has no {field} metric")]
    MetricNotDeclared { epd: String, field: MetricField },
}

pub type Result<T> = std::result::Result<T, ImpactError>;

/// Errors raised while reading model or configuration files
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Element '{element}' references unknown EPD '{epd}'")]
    UnknownEpd { element: String, epd: String },

    #[error("EPD '{0}' is declared more than once")]
    DuplicateEpd(String),

    #[error("Element '{element}' has invalid geometry: {reason}")]
    InvalidGeometry { element: String, reason: String },
}
