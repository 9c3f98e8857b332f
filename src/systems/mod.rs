//! Application systems
//!
//! The frame loop is split into simulation (motion) and rendering
//! (projection into meshes).

mod render;
mod simulation;

pub use render::{build_projector, FrameOutput, FrameRenderer, FrameStats, ObjectMesh, SceneProjector};
pub use simulation::SimulationSystem;
