//! 4D to 3D projection
//!
//! Two interchangeable [`Projector`]s turn [`SimplexBuffer4D`](hyperview_mesh::SimplexBuffer4D)s
//! into 3D polygons:
//!
//! - [`CrossSectionProjector`] - Slices with the observer's hyperplane
//! - [`FrustumProjector`] - Clips to a 4D frustum and applies perspective
//!
//! Polygons stream into a [`Visualizer`], which builds the output mesh:
//!
//! - [`PointVisualizer`] - Point clouds
//! - [`WireVisualizer`] - Line segments
//! - [`SolidVisualizer`] - Fan-triangulated surfaces
//!
//! Projectors also implement [`DebugDraw`] to outline their own geometry.

mod error;
mod scratch;
mod lookup_tables;
mod projector;
mod settings;
mod cross_section;
mod frustum;
mod gizmo;
mod visualizer;

pub use error::SettingsError;
pub use scratch::MAX_CLIP_VERTICES;
pub use projector::{ProjectionStats, Projector};
pub use settings::{FrustumSettings, MIN_NEAR_CLIP};
pub use cross_section::{CrossSectionProjector, SLICE_EPSILON};
pub use frustum::{ClipFlags, FrustumProjector, MIN_PROJECT_DEPTH};
pub use gizmo::{DebugDraw, GizmoContext, GizmoLine};
pub use visualizer::{
    PointVisualizer, SolidVisualizer, Visualizer, VisualizerSettings, WireVisualizer,
};
