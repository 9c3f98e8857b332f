//! Simplex dimensions

use serde::{Serialize, Deserialize};

/// Dimension of the simplices stored in a buffer
///
/// A k-simplex has k+1 corners. Ordering follows dimension, so
/// `Point < Line < Triangle < Tetrahedron`.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SimplexDimension {
    Point = 0,
    Line = 1,
    Triangle = 2,
    Tetrahedron = 3,
}

impl SimplexDimension {
    /// All dimensions, in order
    pub const ALL: [SimplexDimension; 4] = [
        SimplexDimension::Point,
        SimplexDimension::Line,
        SimplexDimension::Triangle,
        SimplexDimension::Tetrahedron,
    ];

    /// Number of corners (dimension + 1)
    #[inline]
    pub const fn corners(self) -> usize {
        self as usize + 1
    }

    /// Dimension from its numeric value, if supported
    pub fn from_index(k: usize) -> Option<Self> {
        Self::ALL.get(k).copied()
    }

    /// One dimension higher (`None` above tetrahedra)
    pub fn higher(self) -> Option<Self> {
        Self::from_index(self as usize + 1)
    }

    /// One dimension lower (`None` below points)
    pub fn lower(self) -> Option<Self> {
        (self as usize).checked_sub(1).and_then(Self::from_index)
    }
}
