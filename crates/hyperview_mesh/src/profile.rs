//! Per-corner shading attributes

use bytemuck::{Pod, Zeroable};
use serde::{Serialize, Deserialize};

/// Shading attributes attached to one simplex corner
///
/// Profiles live on corners rather than vertices, so a shared vertex can
/// carry different colors or texture coordinates in each simplex that uses it.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Profile {
    /// RGBA color
    pub color: [f32; 4],
    /// Texture coordinate
    pub uv: [f32; 2],
    /// Shading normal in output (3D) space
    pub normal: [f32; 3],
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 1.0, 1.0],
            uv: [0.0, 0.0],
            normal: [0.0, 0.0, 1.0],
        }
    }
}

impl Profile {
    /// Create a profile with only a color set
    pub fn from_color(color: [f32; 4]) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    /// Create a profile with color and texture coordinate
    pub fn new(color: [f32; 4], uv: [f32; 2]) -> Self {
        Self {
            color,
            uv,
            ..Self::default()
        }
    }

    /// Linear interpolation of every attribute
    ///
    /// `t` is not clamped; clip crossings may extrapolate slightly past the
    /// endpoints and the attributes must follow the positions exactly.
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            color: lerp_array(self.color, other.color, t),
            uv: lerp_array(self.uv, other.uv, t),
            normal: lerp_array(self.normal, other.normal, t),
        }
    }
}

#[inline]
fn lerp_array<const N: usize>(a: [f32; N], b: [f32; N], t: f32) -> [f32; N] {
    let mut out = a;
    for i in 0..N {
        out[i] = a[i] * (1.0 - t) + b[i] * t;
    }
    out
}
