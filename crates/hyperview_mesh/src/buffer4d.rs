//! 4D simplex buffers - the input to projection
//!
//! A buffer holds vertices, index groups of a fixed simplex dimension, and
//! optional per-corner profiles. Buffers are built once by generators and are
//! read-only while projecting.

use hyperview_math::{BoundingSphere4D, Vec4};

use crate::{MeshError, Profile, SimplexDimension};

/// Vertices, simplex topology and per-corner profiles in 4-space
#[derive(Clone, Debug)]
pub struct SimplexBuffer4D {
    dimension: SimplexDimension,
    vertices: Vec<Vec4>,
    indices: Vec<u32>,
    /// One profile per corner slot (parallel to `indices`), when present
    profiles: Option<Vec<Profile>>,
}

impl SimplexBuffer4D {
    /// Create an empty buffer of the given simplex dimension
    pub fn new(dimension: SimplexDimension) -> Self {
        Self {
            dimension,
            vertices: Vec::new(),
            indices: Vec::new(),
            profiles: None,
        }
    }

    /// Create an empty buffer with pre-allocated capacity
    pub fn with_capacity(dimension: SimplexDimension, vertices: usize, simplices: usize) -> Self {
        Self {
            dimension,
            vertices: Vec::with_capacity(vertices),
            indices: Vec::with_capacity(simplices * dimension.corners()),
            profiles: None,
        }
    }

    /// Simplex dimension of every index group
    #[inline]
    pub fn dimension(&self) -> SimplexDimension {
        self.dimension
    }

    /// Append a vertex and return its index
    pub fn add_vertex(&mut self, p: Vec4) -> u32 {
        self.vertices.push(p);
        (self.vertices.len() - 1) as u32
    }

    /// Append one simplex given its corner indices
    ///
    /// `corners` must hold exactly `dimension.corners()` indices. Indices are
    /// not checked against the vertex list.
    pub fn add_simplex(&mut self, corners: &[u32]) {
        debug_assert_eq!(corners.len(), self.dimension.corners());
        self.indices.extend_from_slice(corners);
    }

    /// Append one simplex together with a profile for each of its corners
    pub fn add_simplex_with_profiles(&mut self, corners: &[u32], profiles: &[Profile]) {
        debug_assert_eq!(corners.len(), profiles.len());
        let first_slot = self.indices.len();
        self.add_simplex(corners);
        for (i, profile) in profiles.iter().enumerate() {
            self.set_profile(first_slot + i, *profile);
        }
    }

    /// Set the profile of a corner slot
    ///
    /// The first call allocates the profile channel, filled with
    /// [`Profile::default`] for every existing corner.
    pub fn set_profile(&mut self, corner_slot: usize, profile: Profile) {
        let wanted = self.indices.len().max(corner_slot + 1);
        let profiles = self.profiles.get_or_insert_with(Vec::new);
        if profiles.len() < wanted {
            profiles.resize(wanted, Profile::default());
        }
        profiles[corner_slot] = profile;
    }

    /// Check whether there is nothing to project
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty() || self.vertices.is_empty()
    }

    /// All vertices
    #[inline]
    pub fn vertices(&self) -> &[Vec4] {
        &self.vertices
    }

    /// All corner indices, grouped by simplex
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Per-corner profiles, if any were set
    #[inline]
    pub fn profiles(&self) -> Option<&[Profile]> {
        self.profiles.as_deref()
    }

    /// Check whether a profile channel is attached
    #[inline]
    pub fn has_profiles(&self) -> bool {
        self.profiles.is_some()
    }

    /// Get the number of vertices
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of simplices
    #[inline]
    pub fn simplex_count(&self) -> usize {
        self.indices.len() / self.dimension.corners()
    }

    /// Corner indices of simplex `i`
    #[inline]
    pub fn simplex(&self, i: usize) -> &[u32] {
        let n = self.dimension.corners();
        &self.indices[i * n..(i + 1) * n]
    }

    /// Corner profiles of simplex `i`, if profiles are attached
    #[inline]
    pub fn corner_profiles(&self, i: usize) -> Option<&[Profile]> {
        let n = self.dimension.corners();
        self.profiles.as_deref().map(|p| &p[i * n..(i + 1) * n])
    }

    /// Iterate over the corner index groups
    pub fn simplices(&self) -> std::slice::ChunksExact<'_, u32> {
        self.indices.chunks_exact(self.dimension.corners())
    }

    /// Local-space bound of all vertices
    pub fn bounding_sphere(&self) -> BoundingSphere4D {
        BoundingSphere4D::from_points(&self.vertices)
    }

    /// Check the buffer invariants
    ///
    /// Every index must name a vertex, the index count must be a whole number
    /// of simplices, and profiles (if present) must match the index count.
    pub fn validate(&self) -> Result<(), MeshError> {
        let corners = self.dimension.corners();
        if self.indices.len() % corners != 0 {
            return Err(MeshError::RaggedIndices { len: self.indices.len(), corners });
        }
        for (slot, &index) in self.indices.iter().enumerate() {
            if index as usize >= self.vertices.len() {
                return Err(MeshError::IndexOutOfRange {
                    slot,
                    index,
                    vertex_count: self.vertices.len(),
                });
            }
        }
        if let Some(profiles) = &self.profiles {
            if profiles.len() != self.indices.len() {
                return Err(MeshError::ProfileCountMismatch {
                    profiles: profiles.len(),
                    indices: self.indices.len(),
                });
            }
        }
        Ok(())
    }

    /// Remove all vertices, simplices and profiles
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
        self.profiles = None;
    }
}
