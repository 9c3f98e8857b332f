//! Tesseract (4D hypercube) generators
//!
//! A tesseract has 16 vertices (all combinations of ±h for x,y,z,w),
//! 32 edges, 24 square faces and 8 cubic cells. Each generator exposes a
//! different skeleton of it for a different simplex dimension.

use hyperview_math::Vec4;

use super::{kuhn_boundary_tetrahedra, palette};
use crate::{Profile, SimplexBuffer4D, SimplexDimension};

/// The 16 corners in binary order: bit k of the index selects +h on axis k
fn corners(h: f32) -> [Vec4; 16] {
    let mut out = [Vec4::ZERO; 16];
    for (i, v) in out.iter_mut().enumerate() {
        for axis in 0..4 {
            v[axis] = if (i >> axis) & 1 == 1 { h } else { -h };
        }
    }
    out
}

fn push_corners(buf: &mut SimplexBuffer4D, size: f32) {
    for v in corners(size * 0.5) {
        buf.add_vertex(v);
    }
}

/// Boundary cells as tetrahedra, for cross-sectioning into solids
///
/// The 8 cubic cells are split into 6 tetrahedra each (48 in total). Every
/// corner is colored by the cell its tetrahedron belongs to.
pub fn tesseract_cells(size: f32) -> SimplexBuffer4D {
    let tets = kuhn_boundary_tetrahedra();
    let mut buf = SimplexBuffer4D::with_capacity(SimplexDimension::Tetrahedron, 16, tets.len());
    push_corners(&mut buf, size);

    for tet in &tets {
        let cell = facet_of(tet);
        let profile = Profile::from_color(palette(cell));
        buf.add_simplex_with_profiles(tet, &[profile; 4]);
    }
    buf
}

/// Index (0..8) of the cubic cell containing a boundary tetrahedron
fn facet_of(tet: &[u32; 4]) -> usize {
    for axis in 0..4 {
        let bits: Vec<u32> = tet.iter().map(|v| (v >> axis) & 1).collect();
        if bits.iter().all(|&b| b == bits[0]) {
            return axis * 2 + bits[0] as usize;
        }
    }
    0
}

/// The 24 square faces as triangles, with per-face colors and UVs
///
/// Corners are shared between faces, but each face gets its own color and a
/// full [0, 1] UV square through per-corner profiles.
pub fn tesseract_surface(size: f32) -> SimplexBuffer4D {
    let mut buf = SimplexBuffer4D::with_capacity(SimplexDimension::Triangle, 16, 48);
    push_corners(&mut buf, size);

    let mut face = 0;
    for a in 0..4 {
        for b in (a + 1)..4 {
            let fixed: Vec<usize> = (0..4).filter(|&k| k != a && k != b).collect();
            for combo in 0..4u32 {
                let mut base = 0u32;
                if combo & 1 == 1 {
                    base |= 1 << fixed[0];
                }
                if combo & 2 == 2 {
                    base |= 1 << fixed[1];
                }
                // Square in cyclic order
                let quad = [base, base | 1 << a, base | 1 << a | 1 << b, base | 1 << b];
                let color = palette(face);
                let uv = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
                let p = |i: usize| Profile::new(color, uv[i]);

                buf.add_simplex_with_profiles(&[quad[0], quad[1], quad[2]], &[p(0), p(1), p(2)]);
                buf.add_simplex_with_profiles(&[quad[0], quad[2], quad[3]], &[p(0), p(2), p(3)]);
                face += 1;
            }
        }
    }
    buf
}

/// The 32 edges as line simplices
pub fn tesseract_wireframe(size: f32) -> SimplexBuffer4D {
    let mut buf = SimplexBuffer4D::with_capacity(SimplexDimension::Line, 16, 32);
    push_corners(&mut buf, size);

    for i in 0u32..16 {
        for axis in 0..4 {
            let j = i | 1 << axis;
            if j != i {
                buf.add_simplex(&[i, j]);
            }
        }
    }
    buf
}
