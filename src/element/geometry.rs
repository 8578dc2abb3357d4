//! Element geometry and typed quantity queries
//!
//! Geometry answers the two structured queries the resolver needs: planar
//! area and solid volume. A query never fails silently; it reports whether
//! the geometry kind supports it and whether the measured value is zero.

use geo::{Area, LineString, Polygon};
use glam::DVec2;

/// Outcome of a structured geometry query
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GeometryQuery {
    /// The geometry produced a non-zero value
    Measured(f64),
    /// The geometry supports the query but measured exactly zero
    Zero,
    /// The geometry kind cannot answer this query
    Unsupported,
}

impl GeometryQuery {
    /// Classify a raw measurement; non-finite values count as unsupported
    pub fn from_measurement(value: f64) -> Self {
        if !value.is_finite() {
            GeometryQuery::Unsupported
        } else if value == 0.0 {
            GeometryQuery::Zero
        } else {
            GeometryQuery::Measured(value)
        }
    }
}

/// Geometric representation of a building element
#[derive(Debug, Clone, PartialEq)]
pub enum ElementGeometry {
    /// Planar element (slab, wall, roof panel) with optional thickness
    Surface {
        outline: Vec<DVec2>,
        thickness: Option<f64>,
    },
    /// Prismatic solid: planar profile swept along its normal
    Extrusion { profile: Vec<DVec2>, depth: f64 },
    /// Linear member (beam, column, brace)
    Bar { length: f64, section_area: f64 },
}

impl ElementGeometry {
    /// Planar area in m2
    pub fn area(&self) -> GeometryQuery {
        match self {
            ElementGeometry::Surface { outline, .. } => {
                GeometryQuery::from_measurement(polygon_area(outline))
            }
            _ => GeometryQuery::Unsupported,
        }
    }

    /// Solid volume in m3
    pub fn solid_volume(&self) -> GeometryQuery {
        match self {
            ElementGeometry::Surface {
                outline,
                thickness: Some(thickness),
            } => GeometryQuery::from_measurement(polygon_area(outline) * thickness),
            ElementGeometry::Surface { thickness: None, .. } => GeometryQuery::Unsupported,
            ElementGeometry::Extrusion { profile, depth } => {
                GeometryQuery::from_measurement(polygon_area(profile) * depth)
            }
            ElementGeometry::Bar {
                length,
                section_area,
            } => GeometryQuery::from_measurement(length * section_area),
        }
    }

    /// Check the geometry is well-formed
    pub fn validate(&self) -> Result<(), String> {
        match self {
            ElementGeometry::Surface { outline, thickness } => {
                validate_polygon("outline", outline)?;
                if let Some(t) = thickness {
                    validate_dimension("thickness", *t)?;
                }
                Ok(())
            }
            ElementGeometry::Extrusion { profile, depth } => {
                validate_polygon("profile", profile)?;
                validate_dimension("depth", *depth)
            }
            ElementGeometry::Bar {
                length,
                section_area,
            } => {
                validate_dimension("length", *length)?;
                validate_dimension("section_area", *section_area)
            }
        }
    }
}

/// Unsigned area of a simple polygon; the ring is closed implicitly
pub fn polygon_area(vertices: &[DVec2]) -> f64 {
    if vertices.len() < 3 {
        return 0.0;
    }
    let coords: Vec<(f64, f64)> = vertices.iter().map(|v| (v.x, v.y)).collect();
    Polygon::new(LineString::from(coords), vec![]).unsigned_area()
}

fn validate_polygon(name: &str, vertices: &[DVec2]) -> Result<(), String> {
    if vertices.len() < 3 {
        return Err(format!(
            "{} needs at least 3 vertices, got {}",
            name,
            vertices.len()
        ));
    }
    if vertices.iter().any(|v| !v.is_finite()) {
        return Err(format!("{} contains a non-finite vertex", name));
    }
    Ok(())
}

fn validate_dimension(name: &str, value: f64) -> Result<(), String> {
    if !value.is_finite() || value < 0.0 {
        return Err(format!("{} must be a finite non-negative number, got {}", name, value));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(w: f64, h: f64) -> Vec<DVec2> {
        vec![
            DVec2::new(0.0, 0.0),
            DVec2::new(w, 0.0),
            DVec2::new(w, h),
            DVec2::new(0.0, h),
        ]
    }

    #[test]
    fn test_polygon_area_ignores_winding() {
        let ccw = rect(5.0, 2.5);
        let mut cw = ccw.clone();
        cw.reverse();
        assert!((polygon_area(&ccw) - 12.5).abs() < 1e-12);
        assert!((polygon_area(&cw) - 12.5).abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_polygon_has_zero_area() {
        assert_eq!(polygon_area(&[DVec2::ZERO, DVec2::X]), 0.0);
        let collinear = vec![DVec2::ZERO, DVec2::X, DVec2::new(2.0, 0.0)];
        let surface = ElementGeometry::Surface {
            outline: collinear,
            thickness: None,
        };
        assert_eq!(surface.area(), GeometryQuery::Zero);
    }

    #[test]
    fn test_surface_queries() {
        let bare = ElementGeometry::Surface {
            outline: rect(4.0, 3.0),
            thickness: None,
        };
        assert_eq!(bare.area(), GeometryQuery::Measured(12.0));
        assert_eq!(bare.solid_volume(), GeometryQuery::Unsupported);

        let slab = ElementGeometry::Surface {
            outline: rect(4.0, 3.0),
            thickness: Some(0.25),
        };
        assert_eq!(slab.solid_volume(), GeometryQuery::Measured(3.0));
    }

    #[test]
    fn test_solid_kinds_have_no_area() {
        let column = ElementGeometry::Bar {
            length: 3.0,
            section_area: 0.09,
        };
        assert_eq!(column.area(), GeometryQuery::Unsupported);
        match column.solid_volume() {
            GeometryQuery::Measured(v) => assert!((v - 0.27).abs() < 1e-12),
            other => panic!("Expected measured volume, got {:?}", other),
        }

        let footing = ElementGeometry::Extrusion {
            profile: rect(2.0, 2.0),
            depth: 0.0,
        };
        assert_eq!(footing.area(), GeometryQuery::Unsupported);
        assert_eq!(footing.solid_volume(), GeometryQuery::Zero);
    }

    #[test]
    fn test_non_finite_measurement_is_unsupported() {
        assert_eq!(GeometryQuery::from_measurement(f64::NAN), GeometryQuery::Unsupported);
        assert_eq!(
            GeometryQuery::from_measurement(f64::INFINITY),
            GeometryQuery::Unsupported
        );
        assert_eq!(GeometryQuery::from_measurement(-1.0), GeometryQuery::Measured(-1.0));
    }

    #[test]
    fn test_validate_rejects_bad_geometry() {
        let too_few = ElementGeometry::Surface {
            outline: vec![DVec2::ZERO, DVec2::X],
            thickness: None,
        };
        assert!(too_few.validate().is_err());

        let negative = ElementGeometry::Bar {
            length: -1.0,
            section_area: 0.1,
        };
        assert!(negative.validate().is_err());

        let ok = ElementGeometry::Extrusion {
            profile: rect(1.0, 1.0),
            depth: 2.0,
        };
        assert!(ok.validate().is_ok());
    }
}
