//! Frustum projector settings

use serde::{Serialize, Deserialize};

use crate::error::SettingsError;

/// Smallest allowed near clip distance
pub const MIN_NEAR_CLIP: f32 = 1e-4;

/// Parameters of the perspective frustum
///
/// Depth is measured along the observer's local w axis. The lateral extent
/// at depth `w` is `±focal_length * w` on each of x, y and z.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrustumSettings {
    /// Lateral half-extent per unit depth
    pub focal_length: f32,
    /// Depth of the near clip boundary
    pub near_clip: f32,
    /// Depth of the far clip boundary
    pub far_clip: f32,
    /// Blend between orthographic (0) and perspective (1)
    pub perspectiveness: f32,
    /// Distance the frustum apex is pulled back behind the observer
    pub shift_clip: f32,
    /// Cull and clip against the six lateral boundaries too
    pub lateral_culling: bool,
}

impl Default for FrustumSettings {
    fn default() -> Self {
        Self {
            focal_length: 1.0,
            near_clip: 0.1,
            far_clip: 100.0,
            perspectiveness: 1.0,
            shift_clip: 0.0,
            lateral_culling: true,
        }
    }
}

impl FrustumSettings {
    /// Check the settings describe a usable frustum
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !(self.focal_length.is_finite() && self.focal_length > 0.0) {
            return Err(SettingsError::InvalidFocalLength(self.focal_length));
        }
        if !(self.near_clip >= MIN_NEAR_CLIP) {
            return Err(SettingsError::NearClipTooSmall {
                near: self.near_clip,
                min: MIN_NEAR_CLIP,
            });
        }
        if !(self.far_clip > self.near_clip) {
            return Err(SettingsError::EmptyDepthRange {
                near: self.near_clip,
                far: self.far_clip,
            });
        }
        if !(0.0..=1.0).contains(&self.perspectiveness) {
            return Err(SettingsError::PerspectivenessOutOfRange(self.perspectiveness));
        }
        if !self.shift_clip.is_finite() {
            return Err(SettingsError::InvalidShift(self.shift_clip));
        }
        Ok(())
    }
}
