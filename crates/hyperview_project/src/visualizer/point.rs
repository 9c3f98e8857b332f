//! Point cloud output

use hyperview_mesh::{AttributeMask, Profile, RenderMesh, SimplexBuffer3D, SimplexDimension, Topology};

use super::{profile_at, Visualizer};

/// Emits one point primitive per received point
#[derive(Debug)]
pub struct PointVisualizer {
    buffer: SimplexBuffer3D,
}

impl PointVisualizer {
    pub fn new() -> Self {
        Self {
            buffer: SimplexBuffer3D::new(Topology::Points),
        }
    }
}

impl Default for PointVisualizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Visualizer for PointVisualizer {
    fn drawing_dimension(&self) -> SimplexDimension {
        SimplexDimension::Point
    }

    fn initialize(&mut self) {
        self.buffer.reset(Topology::Points);
    }

    fn render(&mut self, points: &[[f32; 3]], profiles: Option<&[Profile]>) {
        for (i, &p) in points.iter().enumerate() {
            let v = self.buffer.add_vertex(p, &profile_at(profiles, i));
            self.buffer.add_point(v);
        }
    }

    fn end(&mut self, mesh: &mut RenderMesh, attributes: AttributeMask) {
        mesh.fill_from(&self.buffer, attributes);
        self.buffer.reset(Topology::Points);
    }

    fn buffer(&self) -> &SimplexBuffer3D {
        &self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_point_per_input() {
        let mut vis = PointVisualizer::new();
        vis.initialize();
        vis.render(&[[0.0, 0.0, 0.0]], None);
        vis.render(&[[1.0, 0.0, 0.0], [2.0, 0.0, 0.0]], None);
        assert_eq!(vis.buffer().primitive_count(), 3);

        let mut mesh = RenderMesh::new();
        vis.end(&mut mesh, AttributeMask::all());
        assert_eq!(mesh.topology, Topology::Points);
        assert_eq!(mesh.indices, vec![0, 1, 2]);
        assert!(vis.buffer().is_empty());
    }

    #[test]
    fn test_initialize_discards_previous() {
        let mut vis = PointVisualizer::new();
        vis.render(&[[0.0, 0.0, 0.0]], None);
        vis.initialize();
        assert_eq!(vis.buffer().vertex_count(), 0);
    }

    #[test]
    fn test_colors_follow_profiles() {
        let mut vis = PointVisualizer::new();
        vis.initialize();
        let red = Profile::from_color([1.0, 0.0, 0.0, 1.0]);
        vis.render(&[[0.0, 0.0, 0.0]], Some(&[red]));

        let mut mesh = RenderMesh::new();
        vis.end(&mut mesh, AttributeMask::COLOR);
        assert_eq!(mesh.vertices[0].color, [1.0, 0.0, 0.0, 1.0]);
    }
}
