//! 4D Mathematics Library
//!
//! This crate provides the vector, matrix, transform, and boundary types the
//! projection engine is built on.
//!
//! ## Core Types
//!
//! - [`Vec4`] - 4D vector with x, y, z, w components (w is view depth)
//! - [`Mat4`] - 4x4 column-major matrix for the linear part of transforms
//! - [`Transform4D`] - Affine observer/model transform
//! - [`HalfSpace4D`] - Clip/cull boundary with crossing interpolation
//! - [`BoundingSphere4D`] - Broad-phase visibility bound

mod vec4;
mod transform;
mod half_space;
mod sphere;
pub mod mat4;

pub use vec4::{Vec4, lerp};
pub use mat4::Mat4;
pub use transform::Transform4D;
pub use half_space::HalfSpace4D;
pub use sphere::BoundingSphere4D;
