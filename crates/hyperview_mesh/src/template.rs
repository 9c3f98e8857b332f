//! Serializable shape templates
//!
//! ShapeTemplate stores the construction parameters of a generated mesh so
//! scenes can be described in configuration files. All shapes are created in
//! **local space**; the object's model transform places them in the world.

use serde::{Serialize, Deserialize};

use crate::{shapes, SimplexBuffer4D, SimplexDimension};

/// Serializable shape template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ShapeTemplate {
    /// Tesseract boundary cells (tetrahedra)
    TesseractCells {
        /// Full side length
        size: f32,
    },
    /// Tesseract square faces (triangles)
    TesseractSurface {
        /// Full side length
        size: f32,
    },
    /// Tesseract edges (lines)
    TesseractWireframe {
        /// Full side length
        size: f32,
    },
    /// Regular 5-cell (tetrahedra)
    Pentachoron {
        /// Circumradius
        radius: f32,
    },
    /// Checkerboard floor slab (tetrahedra)
    CheckerFloor {
        /// Half-extent in X and Z
        size: f32,
        /// Cells along each axis
        cells: u32,
        /// Y thickness
        thickness: f32,
        /// Half-extent in W
        w_extent: f32,
    },
}

impl ShapeTemplate {
    /// Build the simplex buffer described by this template
    pub fn create_buffer(&self) -> SimplexBuffer4D {
        match self {
            ShapeTemplate::TesseractCells { size } => shapes::tesseract_cells(*size),
            ShapeTemplate::TesseractSurface { size } => shapes::tesseract_surface(*size),
            ShapeTemplate::TesseractWireframe { size } => shapes::tesseract_wireframe(*size),
            ShapeTemplate::Pentachoron { radius } => shapes::pentachoron(*radius),
            ShapeTemplate::CheckerFloor { size, cells, thickness, w_extent } => {
                shapes::checker_floor(*size, *cells as usize, *thickness, *w_extent)
            }
        }
    }

    /// Simplex dimension of the buffer this template builds
    pub fn dimension(&self) -> SimplexDimension {
        match self {
            ShapeTemplate::TesseractWireframe { .. } => SimplexDimension::Line,
            ShapeTemplate::TesseractSurface { .. } => SimplexDimension::Triangle,
            ShapeTemplate::TesseractCells { .. }
            | ShapeTemplate::Pentachoron { .. }
            | ShapeTemplate::CheckerFloor { .. } => SimplexDimension::Tetrahedron,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_matches_buffer() {
        let templates = [
            ShapeTemplate::TesseractCells { size: 2.0 },
            ShapeTemplate::TesseractSurface { size: 2.0 },
            ShapeTemplate::TesseractWireframe { size: 2.0 },
            ShapeTemplate::Pentachoron { radius: 1.0 },
            ShapeTemplate::CheckerFloor { size: 2.0, cells: 2, thickness: 0.1, w_extent: 1.0 },
        ];
        for t in &templates {
            assert_eq!(t.create_buffer().dimension(), t.dimension(), "{:?}", t);
        }
    }

    #[test]
    fn test_tesseract_serialization() {
        let template = ShapeTemplate::TesseractCells { size: 2.5 };
        let serialized = ron::to_string(&template).unwrap();
        let deserialized: ShapeTemplate = ron::from_str(&serialized).unwrap();
        assert_eq!(deserialized, template);
    }

    #[test]
    fn test_floor_from_ron() {
        let src = r#"(type: "CheckerFloor", size: 4.0, cells: 4, thickness: 0.1, w_extent: 2.0)"#;
        let template: ShapeTemplate = ron::from_str(src).unwrap();
        match template {
            ShapeTemplate::CheckerFloor { cells, w_extent, .. } => {
                assert_eq!(cells, 4);
                assert_eq!(w_extent, 2.0);
            }
            _ => panic!("Expected CheckerFloor variant"),
        }
    }
}
