//! Debug line drawing in 4D world space
//!
//! Projectors describe their own geometry (slicing plane, frustum) as 4D
//! lines. The collected lines form an ordinary line buffer, so a host can
//! push them through any projector and a [`WireVisualizer`](crate::WireVisualizer).

use hyperview_math::{Transform4D, Vec4};
use hyperview_mesh::{Profile, SimplexBuffer4D, SimplexDimension};

/// One colored 4D segment
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GizmoLine {
    pub start: Vec4,
    pub end: Vec4,
    pub color: [f32; 4],
}

/// Collects debug lines
///
/// Points passed to [`line`](GizmoContext::line) are transformed by the
/// current `transform` and tagged with the current `color`.
#[derive(Clone, Debug)]
pub struct GizmoContext {
    pub color: [f32; 4],
    pub transform: Transform4D,
    lines: Vec<GizmoLine>,
}

impl Default for GizmoContext {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 0.0, 1.0],
            transform: Transform4D::identity(),
            lines: Vec::new(),
        }
    }
}

impl GizmoContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a segment between two local-space points
    pub fn line(&mut self, start: Vec4, end: Vec4) {
        self.lines.push(GizmoLine {
            start: self.transform.transform_point(start),
            end: self.transform.transform_point(end),
            color: self.color,
        });
    }

    /// Add the 12 edges of an axis-aligned cube in the `xyz` subspace at
    /// depth `w`
    pub fn cube(&mut self, center: Vec4, half_extent: f32, w: f32) {
        let corner = |i: usize| {
            let sign = |bit: usize| if i & (1 << bit) != 0 { half_extent } else { -half_extent };
            Vec4::new(center.x + sign(0), center.y + sign(1), center.z + sign(2), w)
        };
        for i in 0..8usize {
            for bit in 0..3 {
                let j = i | (1 << bit);
                if j != i {
                    self.line(corner(i), corner(j));
                }
            }
        }
    }

    /// Collected lines in world space
    pub fn lines(&self) -> &[GizmoLine] {
        &self.lines
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Pack the collected lines into a line buffer with colored profiles
    pub fn to_line_buffer(&self) -> SimplexBuffer4D {
        let mut buffer = SimplexBuffer4D::with_capacity(
            SimplexDimension::Line,
            self.lines.len() * 2,
            self.lines.len(),
        );
        for line in &self.lines {
            let a = buffer.add_vertex(line.start);
            let b = buffer.add_vertex(line.end);
            let profile = Profile::from_color(line.color);
            buffer.add_simplex_with_profiles(&[a, b], &[profile, profile]);
        }
        buffer
    }
}

/// Something that can describe itself with debug lines
pub trait DebugDraw {
    fn draw_gizmos(&self, ctx: &mut GizmoContext);
}
