//! SceneBuilder - Declarative scene construction
//!
//! Provides a fluent API for placing generated shapes.

use hyperview_math::{Transform4D, Vec4};
use hyperview_mesh::{MeshError, ShapeTemplate, SimplexBuffer4D};

use super::{Scene, SceneObject};

/// Builder for constructing 4D scenes
///
/// # Example
/// ```ignore
/// let scene = SceneBuilder::new()
///     .add_floor(-2.0, 6.0)
///     .add_tesseract(Vec4::ZERO, 2.0, "main_tesseract")
///     .build()?;
/// ```
pub struct SceneBuilder {
    objects: Vec<(String, SimplexBuffer4D, Transform4D)>,
}

impl SceneBuilder {
    /// Create a new scene builder
    pub fn new() -> Self {
        Self { objects: Vec::new() }
    }

    /// Add a checkerboard floor slab with its top face at the given Y
    pub fn add_floor(self, y: f32, size: f32) -> Self {
        let thickness = 0.2;
        let template = ShapeTemplate::CheckerFloor {
            size,
            cells: (size.max(1.0) as u32) * 2,
            thickness,
            w_extent: size / 2.0,
        };
        self.add_template("floor", &template, Vec4::new(0.0, y - thickness, 0.0, 0.0))
    }

    /// Add a tesseract (cells) centered at `position`
    pub fn add_tesseract(self, position: Vec4, size: f32, name: &str) -> Self {
        self.add_template(name, &ShapeTemplate::TesseractCells { size }, position)
    }

    /// Add any templated shape at `position`
    pub fn add_template(self, name: &str, template: &ShapeTemplate, position: Vec4) -> Self {
        self.add_buffer(name, template.create_buffer(), Transform4D::from_position(position))
    }

    /// Add a prebuilt buffer with an arbitrary transform
    pub fn add_buffer(mut self, name: &str, buffer: SimplexBuffer4D, transform: Transform4D) -> Self {
        self.objects.push((name.to_string(), buffer, transform));
        self
    }

    /// Build the scene, validating every buffer
    pub fn build(self) -> Result<Scene, MeshError> {
        let mut scene = Scene::new();
        for (name, buffer, transform) in self.objects {
            scene.add(SceneObject::new(name, buffer, transform)?);
        }
        Ok(scene)
    }
}

impl Default for SceneBuilder {
    fn default() -> Self {
        Self::new()
    }
}
