//! 4D affine transform (linear part + translation)
//!
//! Used for both observer (view) transforms and per-object model transforms.
//! The linear part is usually a rotation, optionally with uniform scale.

use serde::{Serialize, Deserialize};

use crate::mat4::{self, Mat4};
use crate::Vec4;

/// An affine map of 4-space: `p -> matrix * p + position`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transform4D {
    /// Linear part (column-major)
    pub matrix: Mat4,
    /// Translation, applied after the linear part
    pub position: Vec4,
}

impl Default for Transform4D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform4D {
    /// Create an identity transform
    pub fn identity() -> Self {
        Self {
            matrix: mat4::IDENTITY,
            position: Vec4::ZERO,
        }
    }

    /// Create a transform with just a position
    pub fn from_position(position: Vec4) -> Self {
        Self {
            matrix: mat4::IDENTITY,
            position,
        }
    }

    /// Create a transform from a linear part and a translation
    pub fn from_matrix_position(matrix: Mat4, position: Vec4) -> Self {
        Self { matrix, position }
    }

    /// Create a pure rotation in the plane spanned by axes `p1` and `p2`
    pub fn from_plane_rotation(p1: usize, p2: usize, angle: f32) -> Self {
        Self {
            matrix: mat4::plane_rotation(angle, p1, p2),
            position: Vec4::ZERO,
        }
    }

    /// Transform a point from local space to parent space
    pub fn transform_point(&self, p: Vec4) -> Vec4 {
        mat4::transform(self.matrix, p) + self.position
    }

    /// Transform a direction (no translation)
    pub fn transform_direction(&self, d: Vec4) -> Vec4 {
        mat4::transform(self.matrix, d)
    }

    /// Local axis `i` expressed in parent space
    pub fn axis(&self, i: usize) -> Vec4 {
        mat4::get_column(self.matrix, i)
    }

    /// Compute the inverse transform
    ///
    /// Singular linear parts (zero or degenerate scale) have no inverse; they
    /// fall back to the transpose with a warning.
    pub fn inverse(&self) -> Self {
        let inv = mat4::inverse(self.matrix).unwrap_or_else(|| {
            log::warn!("Inverting a singular transform, falling back to the transpose");
            mat4::transpose(self.matrix)
        });
        Self::from_matrix_position(inv, -mat4::transform(inv, self.position))
    }

    /// Compose two transforms: result = self * other
    ///
    /// The composed transform applies `other` first, then `self`.
    pub fn compose(&self, other: &Self) -> Self {
        Self {
            matrix: mat4::mul(self.matrix, other.matrix),
            position: self.transform_point(other.position),
        }
    }

    /// Translate the transform by a parent-space offset
    pub fn translate(&mut self, offset: Vec4) {
        self.position += offset;
    }

    /// Rotate in a parent-space plane (applied after the current transform)
    pub fn rotate(&mut self, p1: usize, p2: usize, angle: f32) {
        *self = Self::from_plane_rotation(p1, p2, angle).compose(self);
    }

    /// Multiply the linear part by a uniform scale (applied first)
    pub fn with_scale(mut self, s: f32) -> Self {
        self.matrix = mat4::mul(self.matrix, mat4::scale(s));
        self
    }
}
