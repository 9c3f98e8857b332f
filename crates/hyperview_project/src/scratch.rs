//! Reusable scratch storage owned by projectors
//!
//! Nothing here allocates per frame once the buffers have grown to the
//! largest mesh seen.

use hyperview_math::Vec4;
use hyperview_mesh::Profile;

/// Most vertices a triangle can have after clipping against 8 half-spaces
///
/// Each half-space cuts at most one corner off a convex polygon, adding one
/// vertex: 3 + 8 = 11.
pub const MAX_CLIP_VERTICES: usize = 11;

/// Per-vertex view-space positions and classification marks
///
/// Capacity doubles whenever a buffer with more vertices arrives.
#[derive(Debug, Default)]
pub(crate) struct VertexScratch<M: Copy + Default> {
    pub positions: Vec<Vec4>,
    pub marks: Vec<M>,
}

impl<M: Copy + Default> VertexScratch<M> {
    /// Make room for `vertex_count` vertices
    pub fn prepare(&mut self, vertex_count: usize) {
        let capacity = self.positions.len();
        if vertex_count <= capacity {
            return;
        }
        let mut grown = capacity.max(1);
        while grown < vertex_count {
            grown *= 2;
        }
        log::debug!("Growing projection scratch from {} to {} vertices", capacity, grown);
        self.positions.resize(grown, Vec4::ZERO);
        self.marks.resize(grown, M::default());
    }

    /// Current capacity in vertices
    pub fn capacity(&self) -> usize {
        self.positions.len()
    }
}

/// Fixed-capacity polygon used by the clipping passes
#[derive(Clone, Copy, Debug)]
pub(crate) struct ClipPolygon {
    points: [Vec4; MAX_CLIP_VERTICES],
    profiles: [Profile; MAX_CLIP_VERTICES],
    len: usize,
}

impl Default for ClipPolygon {
    fn default() -> Self {
        Self {
            points: [Vec4::ZERO; MAX_CLIP_VERTICES],
            profiles: [Profile::default(); MAX_CLIP_VERTICES],
            len: 0,
        }
    }
}

impl ClipPolygon {
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Append a corner
    ///
    /// # Panics
    /// If the polygon already holds [`MAX_CLIP_VERTICES`] corners. Convex
    /// input cannot get there, so reaching it means corrupted geometry.
    #[inline]
    pub fn push(&mut self, point: Vec4, profile: Profile) {
        assert!(
            self.len < MAX_CLIP_VERTICES,
            "clip polygon overflow: more than {} vertices",
            MAX_CLIP_VERTICES
        );
        self.points[self.len] = point;
        self.profiles[self.len] = profile;
        self.len += 1;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn points(&self) -> &[Vec4] {
        &self.points[..self.len]
    }

    #[inline]
    pub fn profiles(&self) -> &[Profile] {
        &self.profiles[..self.len]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scratch_doubles() {
        let mut s: VertexScratch<bool> = VertexScratch::default();
        s.prepare(3);
        assert_eq!(s.capacity(), 4);
        s.prepare(4);
        assert_eq!(s.capacity(), 4);
        s.prepare(5);
        assert_eq!(s.capacity(), 8);
        s.prepare(100);
        assert_eq!(s.capacity(), 128);
        assert_eq!(s.marks.len(), 128);
    }

    #[test]
    fn test_scratch_never_shrinks() {
        let mut s: VertexScratch<u8> = VertexScratch::default();
        s.prepare(16);
        s.prepare(2);
        assert_eq!(s.capacity(), 16);
    }

    #[test]
    fn test_polygon_push() {
        let mut poly = ClipPolygon::default();
        assert!(poly.is_empty());
        poly.push(Vec4::X, Profile::default());
        poly.push(Vec4::Y, Profile::default());
        assert_eq!(poly.len(), 2);
        assert_eq!(poly.points(), &[Vec4::X, Vec4::Y]);
        poly.clear();
        assert!(poly.is_empty());
    }

    #[test]
    fn test_polygon_holds_worst_case() {
        let mut poly = ClipPolygon::default();
        for _ in 0..MAX_CLIP_VERTICES {
            poly.push(Vec4::ZERO, Profile::default());
        }
        assert_eq!(poly.len(), 11);
    }

    #[test]
    #[should_panic(expected = "clip polygon overflow")]
    fn test_polygon_overflow_panics() {
        let mut poly = ClipPolygon::default();
        for _ in 0..=MAX_CLIP_VERTICES {
            poly.push(Vec4::ZERO, Profile::default());
        }
    }
}
