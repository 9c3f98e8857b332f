//! Checkerboard floor slab
//!
//! A thin slab at y in [0, thickness] spanning X and Z, with extent in W so
//! it survives slicing. The slab is a grid of cells, each a flattened
//! tesseract split into its boundary tetrahedra. Grid vertices are shared
//! between neighbouring cells; the checker colors come from per-corner
//! profiles, so no vertex is duplicated along color seams.

use hyperview_math::Vec4;

use super::kuhn_boundary_tetrahedra;
use crate::{Profile, SimplexBuffer4D, SimplexDimension};

const DARK: [f32; 4] = [0.3, 0.3, 0.35, 1.0];
const LIGHT: [f32; 4] = [0.7, 0.7, 0.75, 1.0];

/// Create a checkerboard floor
///
/// # Arguments
/// * `size` - Half-extent in X and Z (total size is 2*size)
/// * `cells` - Number of cells along each of X and Z
/// * `thickness` - Y thickness (bottom at y=0 in local space)
/// * `w_extent` - Half-extent in W
pub fn checker_floor(size: f32, cells: usize, thickness: f32, w_extent: f32) -> SimplexBuffer4D {
    let cells = cells.max(1);
    let side = cells + 1;
    let step = size * 2.0 / cells as f32;
    let tets = kuhn_boundary_tetrahedra();

    let mut buf = SimplexBuffer4D::with_capacity(
        SimplexDimension::Tetrahedron,
        side * side * 4,
        cells * cells * tets.len(),
    );

    // Lattice order: x fastest, then z, then y, then w
    for w in [-w_extent, w_extent] {
        for y in [0.0, thickness] {
            for k in 0..side {
                for i in 0..side {
                    buf.add_vertex(Vec4::new(
                        -size + i as f32 * step,
                        y,
                        -size + k as f32 * step,
                        w,
                    ));
                }
            }
        }
    }
    let lattice = |i: usize, y: usize, k: usize, w: usize| -> u32 {
        (((w * 2 + y) * side + k) * side + i) as u32
    };

    for ci in 0..cells {
        for ck in 0..cells {
            let color = if (ci + ck) % 2 == 0 { DARK } else { LIGHT };
            let profile = Profile::from_color(color);
            // Local corner bits: 0 = x, 1 = y, 2 = z, 3 = w
            let corner = |bits: u32| {
                let b = |n: u32| ((bits >> n) & 1) as usize;
                lattice(ci + b(0), b(1), ck + b(2), b(3))
            };
            for &tet in &tets {
                let global = tet.map(&corner);
                buf.add_simplex_with_profiles(&global, &[profile; 4]);
            }
        }
    }

    buf
}
