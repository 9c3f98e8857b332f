//! Half-spaces of 4D space, used as clip and cull boundaries

use serde::{Serialize, Deserialize};

use crate::Vec4;

/// The set of points on the positive side of a 3D hyperplane in 4D
///
/// The boundary equation is `normal · p = offset`. Points with
/// `normal · p >= offset` are inside.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HalfSpace4D {
    /// Unit normal pointing into the kept region
    pub normal: Vec4,
    /// Signed distance of the boundary from the origin along the normal
    pub offset: f32,
}

impl HalfSpace4D {
    /// Create a half-space from a normal and offset
    ///
    /// The normal will be normalized automatically; `offset` is taken as given.
    pub fn new(normal: Vec4, offset: f32) -> Self {
        Self {
            normal: normal.normalized(),
            offset,
        }
    }

    /// Create a half-space whose boundary passes through `point`
    pub fn from_point_normal(point: Vec4, normal: Vec4) -> Self {
        let n = normal.normalized();
        Self {
            normal: n,
            offset: n.dot(point),
        }
    }

    /// Signed distance from the boundary
    ///
    /// Positive = inside, negative = outside, zero = on the boundary.
    #[inline]
    pub fn signed_distance(&self, point: Vec4) -> f32 {
        self.normal.dot(point) - self.offset
    }

    /// Check if a point is inside or on the boundary
    #[inline]
    pub fn contains(&self, point: Vec4) -> bool {
        self.signed_distance(point) >= 0.0
    }

    /// Interpolation parameter where the segment `outside -> inside` crosses the boundary
    ///
    /// `outside.lerp(inside, t)` lies on the boundary. The endpoints only need to
    /// be on opposite sides; the result is in [0, 1] in that case.
    #[inline]
    pub fn intersect(&self, outside: Vec4, inside: Vec4) -> f32 {
        let d_out = self.signed_distance(outside);
        let d_in = self.signed_distance(inside);
        d_out / (d_out - d_in)
    }
}
