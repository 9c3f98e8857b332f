//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`HV_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use serde::{Serialize, Deserialize};
use std::path::Path;

use hyperview_math::{Transform4D, Vec4};
use hyperview_mesh::ShapeTemplate;
use hyperview_project::{FrustumSettings, SettingsError, VisualizerSettings};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Projection configuration
    #[serde(default)]
    pub projection: ProjectionConfig,
    /// Visualizer configuration
    #[serde(default)]
    pub visualizer: VisualizerSettings,
    /// Scene configuration
    #[serde(default)]
    pub scene: SceneConfig,
    /// Frame loop configuration
    #[serde(default)]
    pub run: RunConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`HV_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        } else {
            log::warn!("{} not found, using built-in defaults", default_path.display());
        }

        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // HV_PROJECTION__MODE=frustum -> projection.mode = "frustum"
        figment = figment.merge(Env::prefixed("HV_").split("__"));

        let config: AppConfig = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that deserialize fine but cannot be used
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.projection.frustum.validate()?;
        if !(self.run.dt.is_finite() && self.run.dt > 0.0) {
            return Err(ConfigError::new(format!("run.dt must be positive, got {}", self.run.dt)));
        }
        Ok(())
    }
}

/// Which projector drives the frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectionMode {
    /// Slice with the observer's hyperplane
    #[default]
    CrossSection,
    /// Clip to a frustum and apply perspective
    Frustum,
}

/// Projection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionConfig {
    /// Projector to use
    pub mode: ProjectionMode,
    /// Frustum parameters (frustum mode only)
    pub frustum: FrustumSettings,
    /// Half-extent of the slicing hyperplane outline (cross-section mode only)
    pub slice_gizmo_extent: f32,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            mode: ProjectionMode::CrossSection,
            frustum: FrustumSettings::default(),
            slice_gizmo_extent: 2.0,
        }
    }
}

/// Rotation angles (radians) in the six coordinate planes
///
/// Order: XY, XZ, XW, YZ, YW, ZW.
pub type PlaneAngles = [f32; 6];

/// Axis pairs matching [`PlaneAngles`]
pub const ROTATION_PLANES: [(usize, usize); 6] = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

/// Build a transform from a position, plane rotations and uniform scale
pub fn placement(position: [f32; 4], rotation: &PlaneAngles, scale: f32) -> Transform4D {
    let mut transform = Transform4D::identity().with_scale(scale);
    for (&(p1, p2), &angle) in ROTATION_PLANES.iter().zip(rotation) {
        if angle != 0.0 {
            transform.rotate(p1, p2, angle);
        }
    }
    transform.translate(Vec4::new(position[0], position[1], position[2], position[3]));
    transform
}

/// Rotate a transform by `spin * dt` about its own position
pub fn spin_in_place(transform: &mut Transform4D, spin: &PlaneAngles, dt: f32) {
    let position = transform.position;
    transform.position = Vec4::ZERO;
    for (&(p1, p2), &rate) in ROTATION_PLANES.iter().zip(spin) {
        if rate != 0.0 {
            transform.rotate(p1, p2, rate * dt);
        }
    }
    transform.position = position;
}

/// One object placed in the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectConfig {
    /// Object name
    pub name: String,
    /// Shape to generate
    pub shape: ShapeTemplate,
    /// World position [x, y, z, w]
    #[serde(default)]
    pub position: [f32; 4],
    /// Initial rotation per plane (radians)
    #[serde(default)]
    pub rotation: PlaneAngles,
    /// Uniform scale
    #[serde(default = "default_scale")]
    pub scale: f32,
    /// Angular velocity per plane (radians per second)
    #[serde(default)]
    pub spin: PlaneAngles,
}

fn default_scale() -> f32 {
    1.0
}

/// Scene configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Objects to build
    pub objects: Vec<ObjectConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            objects: vec![
                ObjectConfig {
                    name: "floor".to_string(),
                    shape: ShapeTemplate::CheckerFloor { size: 6.0, cells: 6, thickness: 0.2, w_extent: 3.0 },
                    position: [0.0, -2.0, 0.0, 0.0],
                    rotation: [0.0; 6],
                    scale: 1.0,
                    spin: [0.0; 6],
                },
                ObjectConfig {
                    name: "tesseract".to_string(),
                    shape: ShapeTemplate::TesseractCells { size: 2.0 },
                    position: [0.0, 0.0, 0.0, 0.0],
                    rotation: [0.0; 6],
                    scale: 1.0,
                    spin: [0.0, 0.0, 0.5, 0.0, 0.3, 0.0],
                },
            ],
        }
    }
}

/// Frame loop configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Number of frames to render
    pub frames: u32,
    /// Simulated seconds per frame
    pub dt: f32,
    /// Observer position [x, y, z, w]
    pub observer_position: [f32; 4],
    /// Observer angular velocity per plane (radians per second)
    pub observer_spin: PlaneAngles,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            frames: 120,
            dt: 1.0 / 60.0,
            observer_position: [0.0, 0.0, 0.0, 0.0],
            observer_spin: [0.0, 0.0, 0.0, 0.0, 0.0, 0.2],
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
    /// Collect projector gizmo lines every frame
    pub gizmos: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            gizmos: false,
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError::new(e.to_string())
    }
}

impl From<SettingsError> for ConfigError {
    fn from(e: SettingsError) -> Self {
        ConfigError::new(e.to_string())
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}
