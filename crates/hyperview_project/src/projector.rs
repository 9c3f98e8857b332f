//! The projector interface shared by all 4D → 3D strategies

use hyperview_math::{BoundingSphere4D, Transform4D, Vec4};
use hyperview_mesh::{SimplexBuffer4D, SimplexDimension};

use crate::Visualizer;

/// Per-call counters reported by a projector
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProjectionStats {
    /// Simplices read from the input buffer
    pub simplices: usize,
    /// Simplices discarded without emitting anything
    pub rejected: usize,
    /// Simplices that had to be cut (sliced or clipped)
    pub cut: usize,
    /// Polygons handed to the visualizer
    pub emitted: usize,
}

impl ProjectionStats {
    /// Add another call's counters to this one
    pub fn accumulate(&mut self, other: &ProjectionStats) {
        self.simplices += other.simplices;
        self.rejected += other.rejected;
        self.cut += other.cut;
        self.emitted += other.emitted;
    }
}

/// A strategy that turns 4D simplex buffers into 3D polygons
///
/// The observer is fixed by [`setup`](Projector::setup) once per frame; every
/// other call reads the derived state without changing it, except for the
/// scratch storage and counters `project` reuses.
pub trait Projector {
    /// Capture the observer for this frame and derive view state
    ///
    /// Calling it twice with the same observer leaves the same state.
    fn setup(&mut self, observer: &Transform4D);

    /// Project every simplex of `buffer` placed by `model`
    ///
    /// Polygons are streamed into `visualizer`. Empty buffers emit nothing.
    fn project(
        &mut self,
        buffer: &SimplexBuffer4D,
        model: &Transform4D,
        visualizer: &mut dyn Visualizer,
    );

    /// True when a world-space sphere certainly produces no output
    fn is_cullable(&self, sphere: &BoundingSphere4D) -> bool;

    /// Project a single world-space point without any culling
    fn project_point(&self, point: Vec4) -> [f32; 3] {
        self.project_point_culled(point).0
    }

    /// Project a single world-space point, also reporting whether it would
    /// be culled
    fn project_point_culled(&self, point: Vec4) -> ([f32; 3], bool);

    /// Input simplex dimension this projector needs so a visualizer drawing
    /// `mode` primitives receives them
    ///
    /// `None` when no input dimension produces that output.
    fn simplex_mode_for_visualizing(&self, mode: SimplexDimension) -> Option<SimplexDimension>;

    /// Dimension of the polygons emitted for an input of dimension `input`
    ///
    /// `None` when such input produces nothing.
    fn output_dimension(&self, input: SimplexDimension) -> Option<SimplexDimension>;

    /// Counters from the most recent `project` call
    fn last_stats(&self) -> ProjectionStats;
}
