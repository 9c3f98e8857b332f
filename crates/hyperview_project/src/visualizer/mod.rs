//! Visualizers turn projected polygons into 3D primitives
//!
//! A visualizer runs one accumulation session per mesh:
//! [`initialize`](Visualizer::initialize), any number of
//! [`render`](Visualizer::render) calls from a projector, then
//! [`end`](Visualizer::end) to finalize into a [`RenderMesh`].

mod point;
mod wire;
mod solid;

pub use point::PointVisualizer;
pub use wire::WireVisualizer;
pub use solid::SolidVisualizer;

use hyperview_mesh::{AttributeMask, Profile, RenderMesh, SimplexBuffer3D, SimplexDimension};
use serde::{Serialize, Deserialize};

/// Consumer of projected polygons
pub trait Visualizer {
    /// Dimension of the primitives this visualizer draws
    fn drawing_dimension(&self) -> SimplexDimension;

    /// Start a new accumulation session, discarding previous output
    fn initialize(&mut self);

    /// Receive one projected polygon
    ///
    /// `profiles`, when present, is parallel to `points`.
    fn render(&mut self, points: &[[f32; 3]], profiles: Option<&[Profile]>);

    /// Finalize the session into `mesh`, keeping only the `attributes`
    /// channels
    fn end(&mut self, mesh: &mut RenderMesh, attributes: AttributeMask);

    /// Output accumulated so far in the current session
    fn buffer(&self) -> &SimplexBuffer3D;
}

/// Visualizer configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerSettings {
    /// Merge coincident vertices and share normals (solid only)
    pub smooth_normals: bool,
    /// Flip triangles facing the mesh centroid (solid only)
    pub fix_winding: bool,
    /// Carry colors into finished meshes
    pub color: bool,
    /// Carry texture coordinates into finished meshes
    pub uv: bool,
    /// Carry normals into finished meshes
    pub normals: bool,
}

impl Default for VisualizerSettings {
    fn default() -> Self {
        Self {
            smooth_normals: false,
            fix_winding: true,
            color: true,
            uv: false,
            normals: true,
        }
    }
}

impl VisualizerSettings {
    /// Build the visualizer drawing primitives of `dimension`
    ///
    /// `None` for tetrahedra, which no visualizer draws.
    pub fn build(&self, dimension: SimplexDimension) -> Option<Box<dyn Visualizer>> {
        match dimension {
            SimplexDimension::Point => Some(Box::new(PointVisualizer::new())),
            SimplexDimension::Line => Some(Box::new(WireVisualizer::new())),
            SimplexDimension::Triangle => Some(Box::new(
                SolidVisualizer::new()
                    .with_smooth_normals(self.smooth_normals)
                    .with_fix_winding(self.fix_winding),
            )),
            SimplexDimension::Tetrahedron => None,
        }
    }

    /// Attribute channels selected for finished meshes
    pub fn attributes(&self) -> AttributeMask {
        let mut mask = AttributeMask::empty();
        mask.set(AttributeMask::COLOR, self.color);
        mask.set(AttributeMask::UV, self.uv);
        mask.set(AttributeMask::NORMAL, self.normals);
        mask
    }
}

/// Profile for corner `i` of a polygon, or the default
#[inline]
pub(crate) fn profile_at(profiles: Option<&[Profile]>, i: usize) -> Profile {
    profiles
        .and_then(|p| p.get(i))
        .copied()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_matches_dimension() {
        let settings = VisualizerSettings::default();
        for d in [SimplexDimension::Point, SimplexDimension::Line, SimplexDimension::Triangle] {
            assert_eq!(settings.build(d).map(|v| v.drawing_dimension()), Some(d));
        }
        assert!(settings.build(SimplexDimension::Tetrahedron).is_none());
    }

    #[test]
    fn test_attributes() {
        let settings = VisualizerSettings::default();
        assert_eq!(settings.attributes(), AttributeMask::COLOR | AttributeMask::NORMAL);
        let none = VisualizerSettings { color: false, normals: false, ..Default::default() };
        assert!(none.attributes().is_empty());
    }

    #[test]
    fn test_settings_from_toml() {
        let settings: VisualizerSettings = toml::from_str(
            r#"
            smooth_normals = true
            uv = true
            "#,
        )
        .unwrap();
        assert!(settings.smooth_normals);
        assert!(settings.uv);
        assert!(settings.fix_winding);
    }

    #[test]
    fn test_profile_at_falls_back() {
        let red = Profile::from_color([1.0, 0.0, 0.0, 1.0]);
        assert_eq!(profile_at(Some(&[red]), 0), red);
        assert_eq!(profile_at(Some(&[red]), 1), Profile::default());
        assert_eq!(profile_at(None, 0), Profile::default());
    }
}
