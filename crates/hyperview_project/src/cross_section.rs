//! Cross-section projection
//!
//! Slices every simplex with the observer's `w = 0` hyperplane. A k-simplex
//! straddling the hyperplane yields a (k-1)-dimensional polygon: tetrahedra
//! become triangles or quads, triangles become segments, lines become
//! points. Everything off the hyperplane is discarded.

use hyperview_math::{BoundingSphere4D, Transform4D, Vec4};
use hyperview_mesh::{Profile, SimplexBuffer4D, SimplexDimension};

use crate::gizmo::{DebugDraw, GizmoContext};
use crate::lookup_tables::{edge_table, MAX_CROSSINGS};
use crate::projector::{ProjectionStats, Projector};
use crate::scratch::VertexScratch;
use crate::Visualizer;

/// Depth beyond which a single point counts as off the slicing hyperplane
pub const SLICE_EPSILON: f32 = 1e-4;

/// Projector that keeps only what lies on the observer's hyperplane
#[derive(Debug)]
pub struct CrossSectionProjector {
    observer: Transform4D,
    view: Transform4D,
    /// Side of each transformed vertex: true when `w > 0`
    scratch: VertexScratch<bool>,
    stats: ProjectionStats,
    /// Half-extent of the debug outline of the slicing hyperplane
    pub gizmo_extent: f32,
}

impl Default for CrossSectionProjector {
    fn default() -> Self {
        Self::new()
    }
}

impl CrossSectionProjector {
    pub fn new() -> Self {
        Self {
            observer: Transform4D::identity(),
            view: Transform4D::identity(),
            scratch: VertexScratch::default(),
            stats: ProjectionStats::default(),
            gizmo_extent: 2.0,
        }
    }

    /// World-to-view transform captured by the last `setup`
    pub fn view(&self) -> &Transform4D {
        &self.view
    }
}

impl Projector for CrossSectionProjector {
    fn setup(&mut self, observer: &Transform4D) {
        self.observer = *observer;
        self.view = observer.inverse();
    }

    fn project(
        &mut self,
        buffer: &SimplexBuffer4D,
        model: &Transform4D,
        visualizer: &mut dyn Visualizer,
    ) {
        self.stats = ProjectionStats::default();
        if buffer.is_empty() {
            return;
        }

        let view_model = self.view.compose(model);
        let vertices = buffer.vertices();
        self.scratch.prepare(vertices.len());
        let positions = &mut self.scratch.positions;
        let sides = &mut self.scratch.marks;
        for (i, v) in vertices.iter().enumerate() {
            let p = view_model.transform_point(*v);
            positions[i] = p;
            sides[i] = p.w > 0.0;
        }

        let corners = buffer.dimension().corners();
        let (left, right) = edge_table(buffer.dimension());
        let profiles = buffer.profiles();
        let mut points = [[0.0f32; 3]; MAX_CROSSINGS];
        let mut crossing_profiles = [Profile::default(); MAX_CROSSINGS];

        for (s, simplex) in buffer.simplices().enumerate() {
            self.stats.simplices += 1;
            let first = sides[simplex[0] as usize];
            if simplex.iter().all(|&i| sides[i as usize] == first) {
                self.stats.rejected += 1;
                continue;
            }

            let corner_profiles = profiles.and_then(|p| p.get(s * corners..(s + 1) * corners));
            let mut count = 0;
            for (&l, &r) in left.iter().zip(right) {
                let (a, b) = (simplex[l] as usize, simplex[r] as usize);
                if sides[a] == sides[b] {
                    continue;
                }
                let (pa, pb) = (positions[a], positions[b]);
                // Sides differ, so the depths differ and the division is safe
                let t = pa.w / (pa.w - pb.w);
                points[count] = pa.lerp(pb, t).xyz();
                if let Some(cp) = corner_profiles {
                    crossing_profiles[count] = cp[l].lerp(&cp[r], t);
                }
                count += 1;
            }

            self.stats.cut += 1;
            self.stats.emitted += 1;
            visualizer.render(
                &points[..count],
                corner_profiles.map(|_| &crossing_profiles[..count]),
            );
        }
    }

    fn is_cullable(&self, sphere: &BoundingSphere4D) -> bool {
        let view_sphere = sphere.transformed(&self.view);
        view_sphere.center.w.abs() > view_sphere.radius
    }

    fn project_point_culled(&self, point: Vec4) -> ([f32; 3], bool) {
        let p = self.view.transform_point(point);
        (p.xyz(), p.w.abs() > SLICE_EPSILON)
    }

    fn simplex_mode_for_visualizing(&self, mode: SimplexDimension) -> Option<SimplexDimension> {
        mode.higher()
    }

    fn output_dimension(&self, input: SimplexDimension) -> Option<SimplexDimension> {
        input.lower()
    }

    fn last_stats(&self) -> ProjectionStats {
        self.stats
    }
}

impl DebugDraw for CrossSectionProjector {
    fn draw_gizmos(&self, ctx: &mut GizmoContext) {
        let saved = ctx.transform;
        ctx.transform = self.observer;
        ctx.cube(Vec4::ZERO, self.gizmo_extent, 0.0);
        ctx.transform = saved;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PointVisualizer, SolidVisualizer, WireVisualizer};
    use hyperview_mesh::shapes;

    const EPSILON: f32 = 1e-5;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    /// Records every polygon it receives
    #[derive(Default)]
    struct Recorder {
        polygons: Vec<Vec<[f32; 3]>>,
        profiles: Vec<Option<Vec<Profile>>>,
        inner: PointVisualizer,
    }

    impl Visualizer for Recorder {
        fn drawing_dimension(&self) -> SimplexDimension {
            SimplexDimension::Triangle
        }
        fn initialize(&mut self) {
            self.polygons.clear();
        }
        fn render(&mut self, points: &[[f32; 3]], profiles: Option<&[Profile]>) {
            self.polygons.push(points.to_vec());
            self.profiles.push(profiles.map(|p| p.to_vec()));
        }
        fn end(&mut self, mesh: &mut hyperview_mesh::RenderMesh, attributes: hyperview_mesh::AttributeMask) {
            self.inner.end(mesh, attributes);
        }
        fn buffer(&self) -> &hyperview_mesh::SimplexBuffer3D {
            self.inner.buffer()
        }
    }

    fn single_line(a: Vec4, b: Vec4) -> SimplexBuffer4D {
        let mut buffer = SimplexBuffer4D::new(SimplexDimension::Line);
        let i = buffer.add_vertex(a);
        let j = buffer.add_vertex(b);
        buffer.add_simplex(&[i, j]);
        buffer
    }

    fn single_tetra(corners: [Vec4; 4]) -> SimplexBuffer4D {
        let mut buffer = SimplexBuffer4D::new(SimplexDimension::Tetrahedron);
        let ids = corners.map(|c| buffer.add_vertex(c));
        buffer.add_simplex(&ids);
        buffer
    }

    fn projector() -> CrossSectionProjector {
        let mut p = CrossSectionProjector::new();
        p.setup(&Transform4D::identity());
        p
    }

    #[test]
    fn test_line_crossing_midpoint() {
        let buffer = single_line(Vec4::new(0.0, 0.0, 0.0, -1.0), Vec4::new(0.0, 0.0, 0.0, 1.0));
        let mut rec = Recorder::default();
        projector().project(&buffer, &Transform4D::identity(), &mut rec);
        assert_eq!(rec.polygons, vec![vec![[0.0, 0.0, 0.0]]]);
    }

    #[test]
    fn test_line_crossing_phase() {
        let buffer = single_line(Vec4::new(0.0, 0.0, 0.0, -1.0), Vec4::new(4.0, 0.0, 0.0, 3.0));
        let mut rec = Recorder::default();
        projector().project(&buffer, &Transform4D::identity(), &mut rec);
        assert_eq!(rec.polygons.len(), 1);
        assert!(approx_eq(rec.polygons[0][0][0], 1.0));
    }

    #[test]
    fn test_simplex_on_one_side_emits_nothing() {
        let buffer = single_line(Vec4::new(0.0, 0.0, 0.0, 1.0), Vec4::new(1.0, 0.0, 0.0, 2.0));
        let mut rec = Recorder::default();
        let mut p = projector();
        p.project(&buffer, &Transform4D::identity(), &mut rec);
        assert!(rec.polygons.is_empty());
        assert_eq!(p.last_stats().rejected, 1);
    }

    #[test]
    fn test_zero_depth_counts_as_negative() {
        // Both corners at w = 0 are on the same (non-positive) side
        let buffer = single_line(Vec4::new(0.0, 0.0, 0.0, 0.0), Vec4::new(1.0, 0.0, 0.0, 0.0));
        let mut rec = Recorder::default();
        projector().project(&buffer, &Transform4D::identity(), &mut rec);
        assert!(rec.polygons.is_empty());
    }

    #[test]
    fn test_empty_buffer_emits_nothing() {
        let buffer = SimplexBuffer4D::new(SimplexDimension::Tetrahedron);
        let mut rec = Recorder::default();
        projector().project(&buffer, &Transform4D::identity(), &mut rec);
        assert!(rec.polygons.is_empty());
    }

    #[test]
    fn test_point_buffers_never_cross() {
        let mut buffer = SimplexBuffer4D::new(SimplexDimension::Point);
        let i = buffer.add_vertex(Vec4::ZERO);
        buffer.add_simplex(&[i]);
        let mut rec = Recorder::default();
        projector().project(&buffer, &Transform4D::identity(), &mut rec);
        assert!(rec.polygons.is_empty());
    }

    #[test]
    fn test_tetra_one_corner_above_gives_triangle() {
        let buffer = single_tetra([
            Vec4::new(0.0, 0.0, 0.0, 1.0),
            Vec4::new(1.0, 0.0, 0.0, -1.0),
            Vec4::new(0.0, 1.0, 0.0, -1.0),
            Vec4::new(0.0, 0.0, 1.0, -1.0),
        ]);
        let mut rec = Recorder::default();
        projector().project(&buffer, &Transform4D::identity(), &mut rec);
        assert_eq!(rec.polygons.len(), 1);
        assert_eq!(rec.polygons[0].len(), 3);
    }

    #[test]
    fn test_tetra_two_corners_above_gives_quad() {
        let buffer = single_tetra([
            Vec4::new(0.0, 0.0, 0.0, 1.0),
            Vec4::new(1.0, 0.0, 0.0, -1.0),
            Vec4::new(0.0, 1.0, 0.0, 1.0),
            Vec4::new(0.0, 0.0, 1.0, -1.0),
        ]);
        let mut rec = Recorder::default();
        projector().project(&buffer, &Transform4D::identity(), &mut rec);
        assert_eq!(rec.polygons[0].len(), 4);

        // Fanning the quad must give it twice the area of either fan half,
        // which fails if the corners come out in bow-tie order.
        let quad = &rec.polygons[0];
        let area = |a: [f32; 3], b: [f32; 3], c: [f32; 3]| {
            let u = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
            let v = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
            let n = [u[1] * v[2] - u[2] * v[1], u[2] * v[0] - u[0] * v[2], u[0] * v[1] - u[1] * v[0]];
            0.5 * (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt()
        };
        let fan = area(quad[0], quad[1], quad[2]) + area(quad[0], quad[2], quad[3]);
        let other = area(quad[1], quad[2], quad[3]) + area(quad[1], quad[3], quad[0]);
        assert!(approx_eq(fan, other));
    }

    #[test]
    fn test_profiles_interpolated() {
        let mut buffer = SimplexBuffer4D::new(SimplexDimension::Line);
        let a = buffer.add_vertex(Vec4::new(0.0, 0.0, 0.0, -1.0));
        let b = buffer.add_vertex(Vec4::new(0.0, 0.0, 0.0, 3.0));
        buffer.add_simplex_with_profiles(
            &[a, b],
            &[Profile::from_color([0.0, 0.0, 0.0, 1.0]), Profile::from_color([1.0, 1.0, 1.0, 1.0])],
        );
        let mut rec = Recorder::default();
        projector().project(&buffer, &Transform4D::identity(), &mut rec);
        let profiles = rec.profiles[0].as_ref().unwrap();
        assert!(approx_eq(profiles[0].color[0], 0.25));
    }

    #[test]
    fn test_no_profiles_passes_none() {
        let buffer = single_line(Vec4::new(0.0, 0.0, 0.0, -1.0), Vec4::new(0.0, 0.0, 0.0, 1.0));
        let mut rec = Recorder::default();
        projector().project(&buffer, &Transform4D::identity(), &mut rec);
        assert!(rec.profiles[0].is_none());
    }

    #[test]
    fn test_model_transform_applied() {
        // Line lies entirely at w = 5 until the model moves it onto the slice
        let buffer = single_line(Vec4::new(0.0, 0.0, 0.0, 4.0), Vec4::new(0.0, 0.0, 0.0, 6.0));
        let model = Transform4D::from_position(Vec4::new(1.0, 0.0, 0.0, -5.0));
        let mut rec = Recorder::default();
        projector().project(&buffer, &model, &mut rec);
        assert_eq!(rec.polygons.len(), 1);
        assert!(approx_eq(rec.polygons[0][0][0], 1.0));
    }

    #[test]
    fn test_observer_moves_slice() {
        let buffer = single_line(Vec4::new(0.0, 0.0, 0.0, 4.0), Vec4::new(0.0, 0.0, 0.0, 6.0));
        let mut p = CrossSectionProjector::new();
        p.setup(&Transform4D::from_position(Vec4::new(0.0, 0.0, 0.0, 5.0)));
        let mut rec = Recorder::default();
        p.project(&buffer, &Transform4D::identity(), &mut rec);
        assert_eq!(rec.polygons.len(), 1);
    }

    #[test]
    fn test_tesseract_slice_is_cube_surface() {
        let buffer = shapes::tesseract_cells(2.0);
        let mut p = CrossSectionProjector::new();
        // Slice slightly off-center so no vertex sits exactly on the hyperplane
        p.setup(&Transform4D::from_position(Vec4::new(0.0, 0.0, 0.0, 0.25)));
        let mut vis = SolidVisualizer::new();
        vis.initialize();
        p.project(&buffer, &Transform4D::identity(), &mut vis);
        assert!(!vis.buffer().is_empty());
        for pos in &vis.buffer().positions {
            let max = pos.iter().fold(0.0f32, |m, c| m.max(c.abs()));
            assert!(approx_eq(max, 1.0), "point {:?} not on cube surface", pos);
        }
    }

    #[test]
    fn test_triangle_slices_into_segments() {
        let buffer = shapes::tesseract_surface(2.0);
        let mut p = CrossSectionProjector::new();
        p.setup(&Transform4D::from_position(Vec4::new(0.0, 0.0, 0.0, 0.5)));
        let mut vis = WireVisualizer::new();
        vis.initialize();
        p.project(&buffer, &Transform4D::identity(), &mut vis);
        assert!(vis.buffer().primitive_count() > 0);
        assert_eq!(p.last_stats().emitted, vis.buffer().primitive_count());
    }

    #[test]
    fn test_cullable_by_depth() {
        let p = projector();
        assert!(p.is_cullable(&BoundingSphere4D::new(Vec4::new(0.0, 0.0, 0.0, 3.0), 1.0)));
        assert!(p.is_cullable(&BoundingSphere4D::new(Vec4::new(0.0, 0.0, 0.0, -3.0), 1.0)));
        assert!(!p.is_cullable(&BoundingSphere4D::new(Vec4::new(0.0, 0.0, 0.0, 0.5), 1.0)));
        // Lateral offset never culls
        assert!(!p.is_cullable(&BoundingSphere4D::new(Vec4::new(100.0, 0.0, 0.0, 0.0), 1.0)));
    }

    #[test]
    fn test_project_point() {
        let p = projector();
        assert_eq!(p.project_point(Vec4::new(1.0, 2.0, 3.0, 4.0)), [1.0, 2.0, 3.0]);
        assert!(!p.project_point_culled(Vec4::new(1.0, 2.0, 3.0, 0.0)).1);
        assert!(p.project_point_culled(Vec4::new(1.0, 2.0, 3.0, 0.1)).1);
    }

    #[test]
    fn test_dimension_mapping() {
        let p = projector();
        assert_eq!(p.simplex_mode_for_visualizing(SimplexDimension::Triangle), Some(SimplexDimension::Tetrahedron));
        assert_eq!(p.simplex_mode_for_visualizing(SimplexDimension::Point), Some(SimplexDimension::Line));
        assert_eq!(p.simplex_mode_for_visualizing(SimplexDimension::Tetrahedron), None);
        assert_eq!(p.output_dimension(SimplexDimension::Tetrahedron), Some(SimplexDimension::Triangle));
        assert_eq!(p.output_dimension(SimplexDimension::Point), None);
    }

    #[test]
    fn test_setup_idempotent() {
        let observer = Transform4D::from_plane_rotation(0, 3, 0.3);
        let mut p = CrossSectionProjector::new();
        p.setup(&observer);
        let first = *p.view();

        let straddling = BoundingSphere4D::new(observer.transform_point(Vec4::new(0.0, 0.0, 0.0, 0.5)), 1.0);
        let distant = BoundingSphere4D::new(observer.transform_point(Vec4::new(0.0, 0.0, 0.0, 5.0)), 1.0);
        let culled = [p.is_cullable(&straddling), p.is_cullable(&distant)];
        assert_eq!(culled, [false, true]);

        p.setup(&observer);
        assert_eq!(*p.view(), first);
        assert_eq!([p.is_cullable(&straddling), p.is_cullable(&distant)], culled);
    }

    #[test]
    fn test_gizmo_lies_on_slice() {
        let observer = Transform4D::from_position(Vec4::new(0.0, 0.0, 0.0, 2.0));
        let mut p = CrossSectionProjector::new();
        p.setup(&observer);
        let mut ctx = GizmoContext::new();
        p.draw_gizmos(&mut ctx);
        assert_eq!(ctx.lines().len(), 12);
        for line in ctx.lines() {
            assert!(approx_eq(line.start.w, 2.0));
        }
        assert_eq!(ctx.transform, Transform4D::identity());
    }
}
