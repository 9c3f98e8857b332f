//! Projection error types

use std::fmt;

/// Invalid projector settings
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    /// Focal length must be positive and finite
    InvalidFocalLength(f32),
    /// Near clip distance is too close to the observer
    NearClipTooSmall { near: f32, min: f32 },
    /// Far clip distance must lie beyond the near clip distance
    EmptyDepthRange { near: f32, far: f32 },
    /// Perspectiveness must lie in [0, 1]
    PerspectivenessOutOfRange(f32),
    /// Clip shift must be finite
    InvalidShift(f32),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::InvalidFocalLength(v) => {
                write!(f, "Focal length must be positive and finite, got {}", v)
            }
            SettingsError::NearClipTooSmall { near, min } => {
                write!(f, "Near clip distance {} is below the minimum {}", near, min)
            }
            SettingsError::EmptyDepthRange { near, far } => {
                write!(f, "Far clip distance {} must exceed near clip distance {}", far, near)
            }
            SettingsError::PerspectivenessOutOfRange(v) => {
                write!(f, "Perspectiveness must be within [0, 1], got {}", v)
            }
            SettingsError::InvalidShift(v) => write!(f, "Clip shift must be finite, got {}", v),
        }
    }
}

impl std::error::Error for SettingsError {}
