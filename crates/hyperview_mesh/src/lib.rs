//! Simplex meshes for 4D projection
//!
//! This crate provides the data the projection engine consumes and produces:
//!
//! - [`SimplexDimension`] - Point, line, triangle or tetrahedron
//! - [`Profile`] - Per-corner shading attributes (color, UV, normal)
//! - [`SimplexBuffer4D`] - 4D vertices, simplex indices and corner profiles
//! - [`SimplexBuffer3D`] - Projected 3D primitives being accumulated
//! - [`RenderMesh`] - Finalized interleaved mesh for a rendering backend
//! - [`shapes`] - Generators for tesseracts, 5-cells and floors
//! - [`ShapeTemplate`] - Serializable shape description

mod simplex;
mod profile;
mod error;
mod buffer4d;
mod buffer3d;
mod render_mesh;
mod template;
pub mod shapes;

pub use simplex::SimplexDimension;
pub use profile::Profile;
pub use error::MeshError;
pub use buffer4d::SimplexBuffer4D;
pub use buffer3d::{AttributeMask, SimplexBuffer3D, Topology};
pub use render_mesh::{MeshVertex, RenderMesh};
pub use template::ShapeTemplate;

// Re-export math types used in this crate's API
pub use hyperview_math::{BoundingSphere4D, Vec4};
