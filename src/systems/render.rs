//! Frame rendering system
//!
//! Drives one projector over a scene each frame:
//! - Observer setup (once per frame)
//! - Bounding-sphere culling per object
//! - Projection into the visualizer matching the output dimension
//! - Mesh finalization

use hyperview_math::Transform4D;
use hyperview_mesh::{AttributeMask, RenderMesh, SimplexDimension};
use hyperview_project::{
    CrossSectionProjector, DebugDraw, FrustumProjector, GizmoContext, GizmoLine,
    ProjectionStats, Projector, SettingsError, Visualizer, VisualizerSettings,
};

use crate::config::{ProjectionConfig, ProjectionMode};
use crate::scene::Scene;

/// A projector that can also outline itself
pub trait SceneProjector: Projector + DebugDraw {}

impl<T: Projector + DebugDraw> SceneProjector for T {}

/// Build the projector selected by the configuration
pub fn build_projector(config: &ProjectionConfig) -> Result<Box<dyn SceneProjector>, SettingsError> {
    Ok(match config.mode {
        ProjectionMode::CrossSection => {
            let mut projector = CrossSectionProjector::new();
            projector.gizmo_extent = config.slice_gizmo_extent;
            Box::new(projector)
        }
        ProjectionMode::Frustum => Box::new(FrustumProjector::new(config.frustum.clone())?),
    })
}

/// Per-frame counters
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Objects in the scene
    pub objects: usize,
    /// Objects skipped by bounding-sphere culling
    pub culled: usize,
    /// Objects whose buffers no visualizer can draw
    pub skipped: usize,
    /// Simplex counters summed over projected objects
    pub projection: ProjectionStats,
    /// Primitives in the finished meshes
    pub primitives: usize,
}

/// Finished mesh of one scene object
#[derive(Clone, Debug)]
pub struct ObjectMesh {
    pub name: String,
    pub mesh: RenderMesh,
}

/// Everything produced by one frame
#[derive(Clone, Debug, Default)]
pub struct FrameOutput {
    /// One mesh per visible object, in scene order
    pub meshes: Vec<ObjectMesh>,
    /// World-space debug lines, when gizmos are enabled
    pub gizmos: Vec<GizmoLine>,
    pub stats: FrameStats,
}

/// Projects a scene into render meshes
pub struct FrameRenderer {
    projector: Box<dyn SceneProjector>,
    /// Indexed by drawing dimension (points, lines, triangles)
    visualizers: Vec<Box<dyn Visualizer>>,
    attributes: AttributeMask,
    gizmos: Option<GizmoContext>,
}

impl FrameRenderer {
    /// Create a renderer around a projector
    pub fn new(projector: Box<dyn SceneProjector>, settings: &VisualizerSettings) -> Self {
        let visualizers = [SimplexDimension::Point, SimplexDimension::Line, SimplexDimension::Triangle]
            .into_iter()
            .filter_map(|d| settings.build(d))
            .collect();
        Self {
            projector,
            visualizers,
            attributes: settings.attributes(),
            gizmos: None,
        }
    }

    /// Collect the projector's debug lines every frame
    pub fn with_gizmos(mut self, enabled: bool) -> Self {
        self.gizmos = enabled.then(GizmoContext::new);
        self
    }

    pub fn projector(&self) -> &dyn SceneProjector {
        self.projector.as_ref()
    }

    /// Render one frame of `scene` seen from `observer`
    pub fn render_frame(&mut self, observer: &Transform4D, scene: &Scene) -> FrameOutput {
        let mut output = FrameOutput::default();
        self.projector.setup(observer);

        for object in scene.objects() {
            output.stats.objects += 1;
            if object.buffer.is_empty() {
                continue;
            }

            let visualizer = self
                .projector
                .output_dimension(object.buffer.dimension())
                .and_then(|d| self.visualizers.get_mut(d as usize));
            let Some(visualizer) = visualizer else {
                log::warn!(
                    "No visualizer for {:?} output of object '{}'",
                    object.buffer.dimension(),
                    object.name
                );
                output.stats.skipped += 1;
                continue;
            };

            if self.projector.is_cullable(&object.world_bounds()) {
                output.stats.culled += 1;
                continue;
            }

            visualizer.initialize();
            self.projector.project(&object.buffer, &object.transform, visualizer.as_mut());
            output.stats.projection.accumulate(&self.projector.last_stats());

            let mut mesh = RenderMesh::new();
            visualizer.end(&mut mesh, self.attributes);
            output.stats.primitives += mesh.primitive_count();
            output.meshes.push(ObjectMesh {
                name: object.name.clone(),
                mesh,
            });
        }

        if let Some(ctx) = self.gizmos.as_mut() {
            ctx.clear();
            self.projector.draw_gizmos(ctx);
            output.gizmos = ctx.lines().to_vec();
        }

        log::debug!(
            "Frame: {} objects, {} culled, {} simplices ({} rejected, {} cut), {} primitives",
            output.stats.objects,
            output.stats.culled,
            output.stats.projection.simplices,
            output.stats.projection.rejected,
            output.stats.projection.cut,
            output.stats.primitives
        );
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneBuilder;
    use hyperview_math::Vec4;
    use hyperview_mesh::{shapes, Topology};
    use hyperview_project::FrustumSettings;

    fn cross_section() -> FrameRenderer {
        let projector = build_projector(&ProjectionConfig::default()).unwrap();
        FrameRenderer::new(projector, &VisualizerSettings::default())
    }

    fn frustum() -> FrameRenderer {
        let config = ProjectionConfig {
            mode: ProjectionMode::Frustum,
            ..Default::default()
        };
        FrameRenderer::new(build_projector(&config).unwrap(), &VisualizerSettings::default())
    }

    #[test]
    fn test_build_projector_rejects_bad_frustum() {
        let config = ProjectionConfig {
            mode: ProjectionMode::Frustum,
            frustum: FrustumSettings { focal_length: -1.0, ..Default::default() },
            ..Default::default()
        };
        assert!(build_projector(&config).is_err());
    }

    #[test]
    fn test_cross_section_of_tesseract() {
        let scene = SceneBuilder::new()
            .add_tesseract(Vec4::new(0.0, 0.0, 0.0, 0.3), 2.0, "tess")
            .build()
            .unwrap();
        let mut renderer = cross_section();
        let output = renderer.render_frame(&Transform4D::identity(), &scene);

        assert_eq!(output.meshes.len(), 1);
        let mesh = &output.meshes[0].mesh;
        assert_eq!(mesh.topology, Topology::Triangles);
        assert!(mesh.primitive_count() > 0);
        assert_eq!(output.stats.primitives, mesh.primitive_count());
    }

    #[test]
    fn test_cross_section_culls_distant_objects() {
        let scene = SceneBuilder::new()
            .add_tesseract(Vec4::new(0.0, 0.0, 0.0, 10.0), 2.0, "far")
            .add_tesseract(Vec4::ZERO, 2.0, "near")
            .build()
            .unwrap();
        let mut renderer = cross_section();
        let output = renderer.render_frame(&Transform4D::identity(), &scene);
        assert_eq!(output.stats.culled, 1);
        assert_eq!(output.meshes.len(), 1);
        assert_eq!(output.meshes[0].name, "near");
    }

    #[test]
    fn test_wireframe_slices_into_points() {
        let scene = SceneBuilder::new()
            .add_buffer("wire", shapes::tesseract_wireframe(2.0), Transform4D::identity())
            .build()
            .unwrap();
        let mut renderer = cross_section();
        let output = renderer.render_frame(&Transform4D::identity(), &scene);
        let mesh = &output.meshes[0].mesh;
        assert_eq!(mesh.topology, Topology::Points);
        // The 8 edges parallel to w each cross the hyperplane once
        assert_eq!(mesh.primitive_count(), 8);
    }

    #[test]
    fn test_frustum_draws_faces() {
        let scene = SceneBuilder::new()
            .add_tesseract(Vec4::new(0.0, 0.0, 0.0, 6.0), 2.0, "tess")
            .build()
            .unwrap();
        let mut renderer = frustum();
        let output = renderer.render_frame(&Transform4D::identity(), &scene);
        let mesh = &output.meshes[0].mesh;
        assert_eq!(mesh.topology, Topology::Triangles);
        // 48 tetrahedra, 4 faces each, all inside the frustum
        assert_eq!(mesh.primitive_count(), 192);
        for v in &mesh.vertices {
            assert!(v.position.iter().all(|c| c.abs() <= 1.0));
        }
    }

    #[test]
    fn test_frustum_culls_behind_observer() {
        let scene = SceneBuilder::new()
            .add_tesseract(Vec4::new(0.0, 0.0, 0.0, -6.0), 2.0, "behind")
            .build()
            .unwrap();
        let mut renderer = frustum();
        let output = renderer.render_frame(&Transform4D::identity(), &scene);
        assert!(output.meshes.is_empty());
        assert_eq!(output.stats.culled, 1);
    }

    #[test]
    fn test_point_buffers_skipped_by_cross_section() {
        let mut points = hyperview_mesh::SimplexBuffer4D::new(SimplexDimension::Point);
        let v = points.add_vertex(Vec4::ZERO);
        points.add_simplex(&[v]);
        let scene = SceneBuilder::new()
            .add_buffer("dots", points, Transform4D::identity())
            .build()
            .unwrap();
        let mut renderer = cross_section();
        let output = renderer.render_frame(&Transform4D::identity(), &scene);
        assert_eq!(output.stats.skipped, 1);
        assert!(output.meshes.is_empty());
    }

    #[test]
    fn test_gizmos_collected_when_enabled() {
        let scene = Scene::new();
        let mut renderer = frustum().with_gizmos(true);
        let output = renderer.render_frame(&Transform4D::identity(), &scene);
        assert_eq!(output.gizmos.len(), 32);

        let mut renderer = frustum();
        let output = renderer.render_frame(&Transform4D::identity(), &scene);
        assert!(output.gizmos.is_empty());
    }
}
