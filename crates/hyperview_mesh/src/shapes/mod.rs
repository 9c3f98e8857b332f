//! Mesh generators producing ready-to-project simplex buffers
//!
//! Shapes are created in **local space**, centered at the origin. Use a model
//! transform to place them in the world.

mod tesseract;
mod pentachoron;
mod floor;

pub use tesseract::{tesseract_cells, tesseract_surface, tesseract_wireframe};
pub use pentachoron::pentachoron;
pub use floor::checker_floor;

use std::collections::HashSet;

/// Boundary tetrahedra of a unit hypercube in binary vertex numbering
///
/// Vertex `i` of the cube has coordinate bit `k` set when axis `k` is at its
/// upper value. The Kuhn triangulation splits the cube into 24 5-cells (one
/// per axis permutation); each 5-cell contributes the tetrahedra obtained by
/// omitting one of its vertices. Only tetrahedra lying in a cubic facet (all
/// four corners agree on some bit) are kept, giving the 48 that tile the
/// boundary.
pub(crate) fn kuhn_boundary_tetrahedra() -> Vec<[u32; 4]> {
    let permutations = [
        [0, 1, 2, 3], [0, 1, 3, 2], [0, 2, 1, 3], [0, 2, 3, 1], [0, 3, 1, 2], [0, 3, 2, 1],
        [1, 0, 2, 3], [1, 0, 3, 2], [1, 2, 0, 3], [1, 2, 3, 0], [1, 3, 0, 2], [1, 3, 2, 0],
        [2, 0, 1, 3], [2, 0, 3, 1], [2, 1, 0, 3], [2, 1, 3, 0], [2, 3, 0, 1], [2, 3, 1, 0],
        [3, 0, 1, 2], [3, 0, 2, 1], [3, 1, 0, 2], [3, 1, 2, 0], [3, 2, 0, 1], [3, 2, 1, 0],
    ];

    let mut seen: HashSet<[u32; 4]> = HashSet::new();
    let mut tetrahedra = Vec::new();

    for perm in &permutations {
        let mut path = [0u32; 5];
        let mut current = 0u32;
        for (i, &axis) in perm.iter().enumerate() {
            current |= 1 << axis;
            path[i + 1] = current;
        }

        for omit in 0..5 {
            let mut tet = [0u32; 4];
            let mut n = 0;
            for (i, &v) in path.iter().enumerate() {
                if i != omit {
                    tet[n] = v;
                    n += 1;
                }
            }
            if !on_cube_facet(&tet) {
                continue;
            }
            let mut canonical = tet;
            canonical.sort();
            if seen.insert(canonical) {
                tetrahedra.push(tet);
            }
        }
    }

    tetrahedra
}

/// All corners share the value of at least one coordinate bit
fn on_cube_facet(tet: &[u32; 4]) -> bool {
    let all_set = tet.iter().fold(0b1111, |acc, v| acc & v);
    let all_clear = tet.iter().fold(0b1111, |acc, v| acc & !v);
    (all_set | all_clear) != 0
}

/// Color for the `i`-th cell or face of a generated shape
pub(crate) fn palette(i: usize) -> [f32; 4] {
    const COLORS: [[f32; 4]; 8] = [
        [0.90, 0.30, 0.30, 1.0],
        [0.30, 0.80, 0.35, 1.0],
        [0.30, 0.45, 0.90, 1.0],
        [0.95, 0.80, 0.25, 1.0],
        [0.80, 0.35, 0.85, 1.0],
        [0.25, 0.85, 0.85, 1.0],
        [0.95, 0.55, 0.20, 1.0],
        [0.70, 0.70, 0.75, 1.0],
    ];
    COLORS[i % COLORS.len()]
}
