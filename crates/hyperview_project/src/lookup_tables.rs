//! Edge and face tables for slicing and clipping simplices
//!
//! Edges are stored as two parallel arrays of corner indices (left, right).
//! The table order is significant: for a tetrahedron, the crossings of any
//! straddling configuration come out in boundary order, so a 4-point
//! cross-section is a simple quad that fans without self-overlap.

use hyperview_mesh::SimplexDimension;

/// Left corners of the line edge
pub const LINE_EDGES_LEFT: [usize; 1] = [0];
/// Right corners of the line edge
pub const LINE_EDGES_RIGHT: [usize; 1] = [1];

/// Left corners of the 3 triangle edges
pub const TRI_EDGES_LEFT: [usize; 3] = [0, 0, 1];
/// Right corners of the 3 triangle edges
pub const TRI_EDGES_RIGHT: [usize; 3] = [1, 2, 2];

/// Left corners of the 6 tetrahedron edges
pub const TETRA_EDGES_LEFT: [usize; 6] = [0, 0, 1, 2, 1, 0];
/// Right corners of the 6 tetrahedron edges
pub const TETRA_EDGES_RIGHT: [usize; 6] = [1, 2, 2, 3, 3, 3];

/// The 4 triangular faces of a tetrahedron
pub const TETRA_FACES: [[usize; 3]; 4] = [[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]];

/// Most edges a simplex of any supported dimension can cross
pub const MAX_CROSSINGS: usize = 4;

/// Edge table (left, right) for a simplex dimension
///
/// Points have no edges.
pub fn edge_table(dimension: SimplexDimension) -> (&'static [usize], &'static [usize]) {
    match dimension {
        SimplexDimension::Point => (&[], &[]),
        SimplexDimension::Line => (&LINE_EDGES_LEFT, &LINE_EDGES_RIGHT),
        SimplexDimension::Triangle => (&TRI_EDGES_LEFT, &TRI_EDGES_RIGHT),
        SimplexDimension::Tetrahedron => (&TETRA_EDGES_LEFT, &TETRA_EDGES_RIGHT),
    }
}
