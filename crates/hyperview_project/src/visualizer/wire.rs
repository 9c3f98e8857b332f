//! Line segment output

use hyperview_mesh::{AttributeMask, Profile, RenderMesh, SimplexBuffer3D, SimplexDimension, Topology};

use super::{profile_at, Visualizer};

/// Emits a line segment for each consecutive pair of received points
///
/// A trailing unpaired point is ignored.
#[derive(Debug)]
pub struct WireVisualizer {
    buffer: SimplexBuffer3D,
}

impl WireVisualizer {
    pub fn new() -> Self {
        Self {
            buffer: SimplexBuffer3D::new(Topology::Lines),
        }
    }
}

impl Default for WireVisualizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Visualizer for WireVisualizer {
    fn drawing_dimension(&self) -> SimplexDimension {
        SimplexDimension::Line
    }

    fn initialize(&mut self) {
        self.buffer.reset(Topology::Lines);
    }

    fn render(&mut self, points: &[[f32; 3]], profiles: Option<&[Profile]>) {
        for (pair, segment) in points.chunks_exact(2).enumerate() {
            let a = self.buffer.add_vertex(segment[0], &profile_at(profiles, pair * 2));
            let b = self.buffer.add_vertex(segment[1], &profile_at(profiles, pair * 2 + 1));
            self.buffer.add_line(a, b);
        }
    }

    fn end(&mut self, mesh: &mut RenderMesh, attributes: AttributeMask) {
        mesh.fill_from(&self.buffer, attributes);
        self.buffer.reset(Topology::Lines);
    }

    fn buffer(&self) -> &SimplexBuffer3D {
        &self.buffer
    }
}
