//! Mesh error types
//!
//! Buffers never validate on insertion; these errors are reported by
//! [`SimplexBuffer4D::validate`](crate::SimplexBuffer4D::validate) when a
//! generator or test wants to check the buffer invariants explicitly.

use std::fmt;

/// A broken simplex buffer invariant
#[derive(Debug, Clone, PartialEq)]
pub enum MeshError {
    /// An index names a vertex that does not exist
    IndexOutOfRange {
        /// Corner slot holding the bad index
        slot: usize,
        /// The index value
        index: u32,
        /// Number of vertices in the buffer
        vertex_count: usize,
    },
    /// The index count is not a multiple of the corners per simplex
    RaggedIndices {
        /// Number of indices
        len: usize,
        /// Corners per simplex
        corners: usize,
    },
    /// Profiles are present but do not match the corner count
    ProfileCountMismatch {
        /// Number of profiles
        profiles: usize,
        /// Number of indices (corner slots)
        indices: usize,
    },
}

impl fmt::Display for MeshError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MeshError::IndexOutOfRange { slot, index, vertex_count } => write!(
                f,
                "Corner slot {} references vertex {} but the buffer has {} vertices",
                slot, index, vertex_count
            ),
            MeshError::RaggedIndices { len, corners } => write!(
                f,
                "Index count {} is not a multiple of {} corners per simplex",
                len, corners
            ),
            MeshError::ProfileCountMismatch { profiles, indices } => write!(
                f,
                "Profile count {} does not match index count {}",
                profiles, indices
            ),
        }
    }
}

impl std::error::Error for MeshError {}
