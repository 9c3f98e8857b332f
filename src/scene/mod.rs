//! Scene construction utilities
//!
//! A scene is a flat list of objects, each a simplex buffer placed in the
//! world by a model transform.

mod scene_builder;

pub use scene_builder::SceneBuilder;

use hyperview_math::{BoundingSphere4D, Transform4D};
use hyperview_mesh::{MeshError, SimplexBuffer4D};

use crate::config::{placement, spin_in_place, ObjectConfig, PlaneAngles, SceneConfig};

/// A simplex buffer with its placement in the world
#[derive(Debug, Clone)]
pub struct SceneObject {
    pub name: String,
    pub buffer: SimplexBuffer4D,
    pub transform: Transform4D,
    /// Angular velocity per plane (radians per second)
    pub spin: PlaneAngles,
    /// Bound of the buffer in its local space
    local_bounds: BoundingSphere4D,
}

impl SceneObject {
    /// Wrap a buffer, checking its invariants
    pub fn new(name: impl Into<String>, buffer: SimplexBuffer4D, transform: Transform4D) -> Result<Self, MeshError> {
        buffer.validate()?;
        let local_bounds = buffer.bounding_sphere();
        Ok(Self {
            name: name.into(),
            buffer,
            transform,
            spin: [0.0; 6],
            local_bounds,
        })
    }

    /// Build an object from its configuration
    pub fn from_config(config: &ObjectConfig) -> Result<Self, MeshError> {
        let transform = placement(config.position, &config.rotation, config.scale);
        let mut object = Self::new(config.name.clone(), config.shape.create_buffer(), transform)?;
        object.spin = config.spin;
        Ok(object)
    }

    /// Bounding sphere in world space
    pub fn world_bounds(&self) -> BoundingSphere4D {
        self.local_bounds.transformed(&self.transform)
    }

    /// Rotate in place by `spin * dt`, about the object's own position
    pub fn advance(&mut self, dt: f32) {
        spin_in_place(&mut self.transform, &self.spin, dt);
    }
}

/// Objects rendered together
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<SceneObject>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build every configured object
    pub fn from_config(config: &SceneConfig) -> Result<Self, MeshError> {
        let objects = config
            .objects
            .iter()
            .map(SceneObject::from_config)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { objects })
    }

    pub fn add(&mut self, object: SceneObject) {
        self.objects.push(object);
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn get(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.name == name)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Advance every object's spin
    pub fn update(&mut self, dt: f32) {
        for object in &mut self.objects {
            object.advance(dt);
        }
    }
}
