//! Regular 5-cell (pentachoron)

use hyperview_math::Vec4;

use super::palette;
use crate::{Profile, SimplexBuffer4D, SimplexDimension};

/// A regular 5-cell with the given circumradius, as its 5 boundary tetrahedra
pub fn pentachoron(radius: f32) -> SimplexBuffer4D {
    let r5 = 1.0 / 5.0f32.sqrt();
    // Circumradius of this template is 4/sqrt(5)
    let s = radius / (4.0 * r5);
    let template = [
        Vec4::new(1.0, 1.0, 1.0, -r5),
        Vec4::new(1.0, -1.0, -1.0, -r5),
        Vec4::new(-1.0, 1.0, -1.0, -r5),
        Vec4::new(-1.0, -1.0, 1.0, -r5),
        Vec4::new(0.0, 0.0, 0.0, 4.0 * r5),
    ];

    let mut buf = SimplexBuffer4D::with_capacity(SimplexDimension::Tetrahedron, 5, 5);
    for v in template {
        buf.add_vertex(v * s);
    }
    for omit in 0..5u32 {
        let cell: Vec<u32> = (0..5).filter(|&i| i != omit).collect();
        let profile = Profile::from_color(palette(omit as usize));
        buf.add_simplex_with_profiles(&cell, &[profile; 4]);
    }
    buf
}
