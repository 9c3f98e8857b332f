//! Hyperview - 4D to 3D projection engine
//!
//! Builds scenes of 4D simplex buffers from configuration and projects them
//! every frame into 3D meshes with either the cross-section or the frustum
//! projector.

pub mod config;
pub mod scene;
pub mod systems;
