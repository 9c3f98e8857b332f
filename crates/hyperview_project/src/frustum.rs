//! Perspective frustum projection
//!
//! Simplices are moved into the observer's frame, clipped against up to eight
//! half-spaces (near, far and two per lateral axis), then scaled toward the
//! observer by their depth. The frustum at depth `w` spans `±focal_length * w`
//! on each of x, y and z, which the perspective divide maps onto `[-1, 1]`.

use bitflags::bitflags;
use hyperview_math::{lerp, BoundingSphere4D, HalfSpace4D, Transform4D, Vec4};
use hyperview_mesh::{Profile, SimplexBuffer4D, SimplexDimension};

use crate::error::SettingsError;
use crate::gizmo::{DebugDraw, GizmoContext};
use crate::lookup_tables::TETRA_FACES;
use crate::projector::{ProjectionStats, Projector};
use crate::scratch::{ClipPolygon, VertexScratch, MAX_CLIP_VERTICES};
use crate::settings::FrustumSettings;
use crate::Visualizer;

/// Smallest depth the perspective divide accepts
pub const MIN_PROJECT_DEPTH: f32 = 1e-6;

bitflags! {
    /// Half-spaces a vertex lies outside of
    ///
    /// The bit position of each flag is the index of its plane.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ClipFlags: u8 {
        const X_MINUS = 1 << 0;
        const X_PLUS = 1 << 1;
        const Y_MINUS = 1 << 2;
        const Y_PLUS = 1 << 3;
        const Z_MINUS = 1 << 4;
        const Z_PLUS = 1 << 5;
        const NEAR = 1 << 6;
        const FAR = 1 << 7;

        const LATERAL = Self::X_MINUS.bits() | Self::X_PLUS.bits()
            | Self::Y_MINUS.bits() | Self::Y_PLUS.bits()
            | Self::Z_MINUS.bits() | Self::Z_PLUS.bits();
        const DEPTH = Self::NEAR.bits() | Self::FAR.bits();
    }
}

/// Order in which polygons are clipped: depth first, then lateral
const CLIP_ORDER: [ClipFlags; 8] = [
    ClipFlags::NEAR,
    ClipFlags::FAR,
    ClipFlags::X_MINUS,
    ClipFlags::X_PLUS,
    ClipFlags::Y_MINUS,
    ClipFlags::Y_PLUS,
    ClipFlags::Z_MINUS,
    ClipFlags::Z_PLUS,
];

/// Index into the plane array for a single-bit flag
#[inline]
fn plane_index(flag: ClipFlags) -> usize {
    flag.bits().trailing_zeros() as usize
}

/// Plane indices named by `flags`, in clip order
fn plane_indices(flags: ClipFlags) -> impl Iterator<Item = usize> {
    CLIP_ORDER
        .into_iter()
        .filter(move |f| flags.contains(*f))
        .map(plane_index)
}

const UNUSED_PLANE: HalfSpace4D = HalfSpace4D {
    normal: Vec4::ZERO,
    offset: 0.0,
};

/// Build the clip planes for a frustum, indexed by flag bit
fn frustum_planes(settings: &FrustumSettings) -> [HalfSpace4D; 8] {
    let mut planes = [UNUSED_PLANE; 8];
    planes[plane_index(ClipFlags::NEAR)] = HalfSpace4D::new(Vec4::W, settings.near_clip);
    planes[plane_index(ClipFlags::FAR)] = HalfSpace4D::new(-Vec4::W, -settings.far_clip);
    if settings.lateral_culling {
        let slope = Vec4::W * settings.focal_length;
        for axis in 0..3 {
            let e = Vec4::axis(axis);
            // |p[axis]| <= focal_length * w
            planes[axis * 2] = HalfSpace4D::new(e + slope, 0.0);
            planes[axis * 2 + 1] = HalfSpace4D::new(-e + slope, 0.0);
        }
    }
    planes
}

/// Scale a view-space position toward the observer by its depth
#[inline]
fn perspective(p: Vec4, depth: f32, ratio: f32, perspectiveness: f32) -> [f32; 3] {
    let s = lerp(1.0, ratio / depth, perspectiveness);
    [p.x * s, p.y * s, p.z * s]
}

/// One Sutherland-Hodgman pass: keep the part of `src` inside `plane`
fn clip_polygon(plane: &HalfSpace4D, src: &ClipPolygon, dst: &mut ClipPolygon) {
    dst.clear();
    let points = src.points();
    let profiles = src.profiles();
    let n = points.len();
    for i in 0..n {
        let j = (i + 1) % n;
        let (cur, next) = (points[i], points[j]);
        let cur_in = plane.signed_distance(cur) >= 0.0;
        let next_in = plane.signed_distance(next) >= 0.0;
        if cur_in {
            dst.push(cur, profiles[i]);
        }
        if cur_in != next_in {
            // Always interpolate outside -> inside so shared edges of
            // neighbouring polygons produce the same crossing
            let (o, k) = if cur_in { (j, i) } else { (i, j) };
            let t = plane.intersect(points[o], points[k]);
            dst.push(points[o].lerp(points[k], t), profiles[o].lerp(&profiles[k], t));
        }
    }
}

/// Projector that clips to a 4D viewing frustum and applies perspective
#[derive(Debug)]
pub struct FrustumProjector {
    settings: FrustumSettings,
    /// Observer pulled back by `shift_clip`; the frustum apex
    apex: Transform4D,
    view: Transform4D,
    ratio: f32,
    planes: [HalfSpace4D; 8],
    active: ClipFlags,
    scratch: VertexScratch<ClipFlags>,
    poly_a: ClipPolygon,
    poly_b: ClipPolygon,
    stats: ProjectionStats,
}

impl FrustumProjector {
    /// Create a projector, rejecting unusable settings
    pub fn new(settings: FrustumSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        let mut projector = Self {
            settings: FrustumSettings::default(),
            apex: Transform4D::identity(),
            view: Transform4D::identity(),
            ratio: 1.0,
            planes: [UNUSED_PLANE; 8],
            active: ClipFlags::DEPTH,
            scratch: VertexScratch::default(),
            poly_a: ClipPolygon::default(),
            poly_b: ClipPolygon::default(),
            stats: ProjectionStats::default(),
        };
        projector.apply(settings);
        Ok(projector)
    }

    /// Replace the settings; takes effect for the observer at the next `setup`
    pub fn set_settings(&mut self, settings: FrustumSettings) -> Result<(), SettingsError> {
        settings.validate()?;
        self.apply(settings);
        Ok(())
    }

    fn apply(&mut self, settings: FrustumSettings) {
        self.ratio = 1.0 / settings.focal_length;
        self.planes = frustum_planes(&settings);
        self.active = if settings.lateral_culling {
            ClipFlags::all()
        } else {
            ClipFlags::DEPTH
        };
        self.settings = settings;
    }

    pub fn settings(&self) -> &FrustumSettings {
        &self.settings
    }

    /// Clip planes in view space, indexed by flag bit
    pub fn planes(&self) -> &[HalfSpace4D; 8] {
        &self.planes
    }

    /// Planes vertices are classified and clipped against
    pub fn active_planes(&self) -> ClipFlags {
        self.active
    }

    /// World-to-view transform captured by the last `setup`
    pub fn view(&self) -> &Transform4D {
        &self.view
    }

    /// Planes a view-space point lies outside of
    pub fn classify(&self, p: Vec4) -> ClipFlags {
        let mut flags = ClipFlags::empty();
        for flag in CLIP_ORDER {
            if self.active.contains(flag) && self.planes[plane_index(flag)].signed_distance(p) < 0.0 {
                flags |= flag;
            }
        }
        flags
    }

    fn project_clipped(&self, p: Vec4) -> [f32; 3] {
        assert!(
            p.w > MIN_PROJECT_DEPTH,
            "perspective divide at depth {} behind the near boundary",
            p.w
        );
        perspective(p, p.w, self.ratio, self.settings.perspectiveness)
    }

    fn emit_point(&mut self, vertex: usize, profiles: Option<&[Profile]>, visualizer: &mut dyn Visualizer) {
        let p = self.project_clipped(self.scratch.positions[vertex]);
        self.stats.emitted += 1;
        visualizer.render(&[p], profiles.map(|cp| &cp[..1]));
    }

    fn clip_line(&mut self, corners: [usize; 2], profiles: Option<&[Profile]>, visualizer: &mut dyn Visualizer) {
        let [a, b] = corners;
        let (pa, pb) = (self.scratch.positions[a], self.scratch.positions[b]);
        let (fa, fb) = (self.scratch.marks[a], self.scratch.marks[b]);

        // Each endpoint moves inward to the last boundary it crosses
        let ta = plane_indices(fa)
            .map(|i| self.planes[i].intersect(pa, pb))
            .fold(0.0f32, f32::max);
        let tb = plane_indices(fb)
            .map(|i| self.planes[i].intersect(pb, pa))
            .fold(0.0f32, f32::max);
        if ta + tb >= 1.0 {
            return;
        }

        let points = [
            self.project_clipped(pa.lerp(pb, ta)),
            self.project_clipped(pb.lerp(pa, tb)),
        ];
        let clipped_profiles = profiles.map(|cp| [cp[0].lerp(&cp[1], ta), cp[1].lerp(&cp[0], tb)]);
        self.stats.emitted += 1;
        visualizer.render(&points, clipped_profiles.as_ref().map(|p| &p[..]));
    }

    fn clip_triangle(
        &mut self,
        corners: [usize; 3],
        profiles: Option<[Profile; 3]>,
        visualizer: &mut dyn Visualizer,
    ) {
        let flags = corners.map(|i| self.scratch.marks[i]);
        if !(flags[0] & flags[1] & flags[2]).is_empty() {
            return;
        }
        let outside = flags[0] | flags[1] | flags[2];

        self.poly_a.clear();
        for (k, &i) in corners.iter().enumerate() {
            let profile = profiles.map_or_else(Profile::default, |p| p[k]);
            self.poly_a.push(self.scratch.positions[i], profile);
        }

        let mut src = &mut self.poly_a;
        let mut dst = &mut self.poly_b;
        for flag in CLIP_ORDER {
            if !outside.contains(flag) {
                continue;
            }
            clip_polygon(&self.planes[plane_index(flag)], src, dst);
            std::mem::swap(&mut src, &mut dst);
            if src.is_empty() {
                return;
            }
        }

        let mut points = [[0.0f32; 3]; MAX_CLIP_VERTICES];
        for (out, &p) in points.iter_mut().zip(src.points()) {
            assert!(
                p.w > MIN_PROJECT_DEPTH,
                "perspective divide at depth {} behind the near boundary",
                p.w
            );
            *out = perspective(p, p.w, self.ratio, self.settings.perspectiveness);
        }
        self.stats.emitted += 1;
        visualizer.render(&points[..src.len()], profiles.map(|_| src.profiles()));
    }
}

impl Projector for FrustumProjector {
    fn setup(&mut self, observer: &Transform4D) {
        let pull_back = Transform4D::from_position(Vec4::W * -self.settings.shift_clip);
        self.apex = observer.compose(&pull_back);
        self.view = self.apex.inverse();
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
        for (i, v) in vertices.iter().enumerate() {
            let p = view_model.transform_point(*v);
            let flags = self.classify(p);
            self.scratch.positions[i] = p;
            self.scratch.marks[i] = flags;
        }

        let dimension = buffer.dimension();
        let corners = dimension.corners();
        let profiles = buffer.profiles();

        for (s, simplex) in buffer.simplices().enumerate() {
            self.stats.simplices += 1;
            let mut inside_all = ClipFlags::all();
            let mut outside_any = ClipFlags::empty();
            for &i in simplex {
                let flags = self.scratch.marks[i as usize];
                inside_all &= flags;
                outside_any |= flags;
            }
            if !inside_all.is_empty() {
                self.stats.rejected += 1;
                continue;
            }
            if !outside_any.is_empty() {
                self.stats.cut += 1;
            }

            let corner_profiles = profiles.and_then(|p| p.get(s * corners..(s + 1) * corners));
            match dimension {
                SimplexDimension::Point => {
                    self.emit_point(simplex[0] as usize, corner_profiles, visualizer);
                }
                SimplexDimension::Line => {
                    let ends = [simplex[0] as usize, simplex[1] as usize];
                    self.clip_line(ends, corner_profiles, visualizer);
                }
                SimplexDimension::Triangle => {
                    let tri = [simplex[0] as usize, simplex[1] as usize, simplex[2] as usize];
                    let tri_profiles = corner_profiles.map(|cp| [cp[0], cp[1], cp[2]]);
                    self.clip_triangle(tri, tri_profiles, visualizer);
                }
                SimplexDimension::Tetrahedron => {
                    for face in TETRA_FACES {
                        let tri = face.map(|c| simplex[c] as usize);
                        let tri_profiles = corner_profiles.map(|cp| face.map(|c| cp[c]));
                        self.clip_triangle(tri, tri_profiles, visualizer);
                    }
                }
            }
        }
    }

    fn is_cullable(&self, sphere: &BoundingSphere4D) -> bool {
        let view_sphere = sphere.transformed(&self.view);
        let tested = if self.settings.lateral_culling {
            self.active
        } else {
            ClipFlags::NEAR
        };
        plane_indices(tested)
            .any(|i| self.planes[i].signed_distance(view_sphere.center) < -view_sphere.radius)
    }

    fn project_point_culled(&self, point: Vec4) -> ([f32; 3], bool) {
        let p = self.view.transform_point(point);
        let depth = p.w.max(MIN_PROJECT_DEPTH);
        let culled = p.w <= MIN_PROJECT_DEPTH || !self.classify(p).is_empty();
        (perspective(p, depth, self.ratio, self.settings.perspectiveness), culled)
    }

    fn simplex_mode_for_visualizing(&self, mode: SimplexDimension) -> Option<SimplexDimension> {
        Some(mode)
    }

    fn output_dimension(&self, input: SimplexDimension) -> Option<SimplexDimension> {
        // Tetrahedra are drawn through their faces
        Some(input.min(SimplexDimension::Triangle))
    }

    fn last_stats(&self) -> ProjectionStats {
        self.stats
    }
}

impl DebugDraw for FrustumProjector {
    fn draw_gizmos(&self, ctx: &mut GizmoContext) {
        let saved = ctx.transform;
        ctx.transform = self.apex;

        let (near, far) = (self.settings.near_clip, self.settings.far_clip);
        let f = self.settings.focal_length;
        ctx.cube(Vec4::ZERO, f * near, near);
        ctx.cube(Vec4::ZERO, f * far, far);
        for i in 0..8usize {
            let sign = |bit: usize| if i & (1 << bit) != 0 { 1.0 } else { -1.0 };
            let dir = Vec4::new(sign(0) * f, sign(1) * f, sign(2) * f, 1.0);
            ctx.line(dir * near, dir * far);
        }

        ctx.transform = saved;
    }
}
