//! Filled triangle output

use hyperview_mesh::{AttributeMask, Profile, RenderMesh, SimplexBuffer3D, SimplexDimension, Topology};

use super::{profile_at, Visualizer};

/// Fan-triangulates each received polygon of 3 or more points
///
/// Normals are always recomputed from the finished geometry when the normal
/// channel is requested, replacing any normals carried by corner profiles.
/// Without smoothing every polygon owns its vertices and gets a flat normal;
/// with smoothing vertices at identical positions are shared and their
/// normals averaged.
#[derive(Debug)]
pub struct SolidVisualizer {
    buffer: SimplexBuffer3D,
    smooth_normals: bool,
    fix_winding: bool,
}

impl SolidVisualizer {
    pub fn new() -> Self {
        Self {
            buffer: SimplexBuffer3D::new(Topology::Triangles),
            smooth_normals: false,
            fix_winding: false,
        }
    }

    /// Share vertices by position and average normals across polygons
    pub fn with_smooth_normals(mut self, enabled: bool) -> Self {
        self.smooth_normals = enabled;
        self
    }

    /// Flip triangles whose normal points toward the mesh centroid
    pub fn with_fix_winding(mut self, enabled: bool) -> Self {
        self.fix_winding = enabled;
        self
    }

    fn push_corner(&mut self, point: [f32; 3], profiles: Option<&[Profile]>, i: usize) -> u32 {
        let profile = profile_at(profiles, i);
        if self.smooth_normals {
            self.buffer.add_merged_vertex(point, &profile)
        } else {
            self.buffer.add_vertex(point, &profile)
        }
    }

    fn orient_outward(&mut self) {
        let positions = &self.buffer.positions;
        if positions.is_empty() {
            return;
        }
        let mut centroid = [0.0f32; 3];
        for p in positions {
            centroid = add3(centroid, *p);
        }
        let centroid = scale3(centroid, 1.0 / positions.len() as f32);

        for tri in self.buffer.indices.chunks_exact_mut(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| positions[i as usize]);
            let normal = cross3(sub3(b, a), sub3(c, a));
            let center = scale3(add3(add3(a, b), c), 1.0 / 3.0);
            if dot3(normal, sub3(center, centroid)) < 0.0 {
                tri.swap(1, 2);
            }
        }
    }

    fn compute_normals(&mut self) {
        let buffer = &mut self.buffer;
        let mut sums = vec![[0.0f32; 3]; buffer.positions.len()];
        for tri in buffer.indices.chunks_exact(3) {
            let [a, b, c] = [tri[0], tri[1], tri[2]].map(|i| buffer.positions[i as usize]);
            // Area weighted
            let n = cross3(sub3(b, a), sub3(c, a));
            for &i in tri {
                sums[i as usize] = add3(sums[i as usize], n);
            }
        }
        for (normal, sum) in buffer.normals.iter_mut().zip(sums) {
            let len = dot3(sum, sum).sqrt();
            if len > f32::EPSILON {
                *normal = scale3(sum, 1.0 / len);
            }
        }
    }
}

impl Default for SolidVisualizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Visualizer for SolidVisualizer {
    fn drawing_dimension(&self) -> SimplexDimension {
        SimplexDimension::Triangle
    }

    fn initialize(&mut self) {
        self.buffer.reset(Topology::Triangles);
    }

    fn render(&mut self, points: &[[f32; 3]], profiles: Option<&[Profile]>) {
        if points.len() < 3 {
            return;
        }
        let first = self.push_corner(points[0], profiles, 0);
        let mut prev = self.push_corner(points[1], profiles, 1);
        for i in 2..points.len() {
            let next = self.push_corner(points[i], profiles, i);
            // Merging can collapse corners onto one vertex
            if first != prev && prev != next && first != next {
                self.buffer.add_triangle(first, prev, next);
            }
            prev = next;
        }
    }

    fn end(&mut self, mesh: &mut RenderMesh, attributes: AttributeMask) {
        if self.fix_winding {
            self.orient_outward();
        }
        if attributes.contains(AttributeMask::NORMAL) {
            self.compute_normals();
        }
        mesh.fill_from(&self.buffer, attributes);
        self.buffer.reset(Topology::Triangles);
    }

    fn buffer(&self) -> &SimplexBuffer3D {
        &self.buffer
    }
}

#[inline]
fn add3(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

#[inline]
fn sub3(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
fn scale3(a: [f32; 3], s: f32) -> [f32; 3] {
    [a[0] * s, a[1] * s, a[2] * s]
}

#[inline]
fn dot3(a: [f32; 3], b: [f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
fn cross3(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}
