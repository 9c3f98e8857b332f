//! 4x4 Matrix utilities for the linear part of 4D transformations
//!
//! Matrices are stored column-major as `m[column][row]`, matching the layout
//! a GPU backend expects.

use crate::Vec4;

/// 4x4 matrix type (column-major)
pub type Mat4 = [[f32; 4]; 4];

/// Identity matrix
pub const IDENTITY: Mat4 = [
    [1.0, 0.0, 0.0, 0.0],
    [0.0, 1.0, 0.0, 0.0],
    [0.0, 0.0, 1.0, 0.0],
    [0.0, 0.0, 0.0, 1.0],
];

/// Create a rotation matrix in a specific 2D plane within 4D space.
///
/// # Arguments
/// * `angle` - Rotation angle in radians
/// * `p1`, `p2` - Indices of the axes forming the rotation plane (0=X, 1=Y, 2=Z, 3=W)
///
/// Rotating by a positive angle turns axis `p1` towards axis `p2`.
///
/// # Example
/// ```
/// use hyperview_math::mat4::{plane_rotation, transform};
/// use hyperview_math::Vec4;
/// // Quarter turn in the XW plane sends X onto the depth axis
/// let m = plane_rotation(std::f32::consts::FRAC_PI_2, 0, 3);
/// let v = transform(m, Vec4::X);
/// assert!((v.w - 1.0).abs() < 1e-6);
/// ```
pub fn plane_rotation(angle: f32, p1: usize, p2: usize) -> Mat4 {
    let cs = angle.cos();
    let sn = angle.sin();

    let mut m = IDENTITY;
    m[p1][p1] = cs;
    m[p2][p2] = cs;
    m[p1][p2] = sn;
    m[p2][p1] = -sn;
    m
}

/// Uniform scale matrix
pub fn scale(s: f32) -> Mat4 {
    let mut m = IDENTITY;
    for (i, col) in m.iter_mut().enumerate() {
        col[i] = s;
    }
    m
}

/// Multiply two 4x4 matrices: result = a * b
///
/// In column-major convention, this applies b first, then a.
#[allow(clippy::needless_range_loop)]
pub fn mul(a: Mat4, b: Mat4) -> Mat4 {
    let mut result = [[0.0f32; 4]; 4];

    for i in 0..4 {
        for j in 0..4 {
            for k in 0..4 {
                result[i][j] += a[k][j] * b[i][k];
            }
        }
    }

    result
}

/// Transform a Vec4 by a 4x4 matrix (column-major)
///
/// result = M * v
pub fn transform(m: Mat4, v: Vec4) -> Vec4 {
    Vec4::new(
        m[0][0] * v.x + m[1][0] * v.y + m[2][0] * v.z + m[3][0] * v.w,
        m[0][1] * v.x + m[1][1] * v.y + m[2][1] * v.z + m[3][1] * v.w,
        m[0][2] * v.x + m[1][2] * v.y + m[2][2] * v.z + m[3][2] * v.w,
        m[0][3] * v.x + m[1][3] * v.y + m[2][3] * v.z + m[3][3] * v.w,
    )
}

/// Get a column vector from a matrix
pub fn get_column(m: Mat4, col: usize) -> Vec4 {
    Vec4::new(m[col][0], m[col][1], m[col][2], m[col][3])
}

/// Transpose a matrix
pub fn transpose(m: Mat4) -> Mat4 {
    [
        [m[0][0], m[1][0], m[2][0], m[3][0]],
        [m[0][1], m[1][1], m[2][1], m[3][1]],
        [m[0][2], m[1][2], m[2][2], m[3][2]],
        [m[0][3], m[1][3], m[2][3], m[3][3]],
    ]
}

/// Invert a matrix with Gauss-Jordan elimination and partial pivoting
///
/// Returns `None` for singular (or numerically singular) matrices.
#[allow(clippy::needless_range_loop)]
pub fn inverse(m: Mat4) -> Option<Mat4> {
    let mut a = m;
    let mut inv = IDENTITY;

    for col in 0..4 {
        // Pick the largest pivot in this column
        let mut pivot = col;
        for row in (col + 1)..4 {
            if a[row][col].abs() > a[pivot][col].abs() {
                pivot = row;
            }
        }
        if a[pivot][col].abs() < 1e-12 {
            return None;
        }
        a.swap(col, pivot);
        inv.swap(col, pivot);

        let p = 1.0 / a[col][col];
        for k in 0..4 {
            a[col][k] *= p;
            inv[col][k] *= p;
        }

        for row in 0..4 {
            if row != col {
                let f = a[row][col];
                if f != 0.0 {
                    for k in 0..4 {
                        a[row][k] -= f * a[col][k];
                        inv[row][k] -= f * inv[col][k];
                    }
                }
            }
        }
    }

    Some(inv)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    fn vec_approx_eq(a: Vec4, b: Vec4) -> bool {
        approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z) && approx_eq(a.w, b.w)
    }

    fn mat_approx_eq(a: Mat4, b: Mat4) -> bool {
        for i in 0..4 {
            for j in 0..4 {
                if !approx_eq(a[i][j], b[i][j]) {
                    return false;
                }
            }
        }
        true
    }

    #[test]
    fn test_identity() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert!(vec_approx_eq(v, transform(IDENTITY, v)));
    }

    #[test]
    fn test_plane_rotation_zw() {
        use std::f32::consts::FRAC_PI_2;

        let m = plane_rotation(FRAC_PI_2, 2, 3);

        let result = transform(m, Vec4::Z);
        assert!(vec_approx_eq(result, Vec4::W), "Z should become W, got {:?}", result);

        let result = transform(m, Vec4::W);
        assert!(vec_approx_eq(result, -Vec4::Z), "W should become -Z, got {:?}", result);

        let result = transform(m, Vec4::X);
        assert!(vec_approx_eq(result, Vec4::X), "X should be unchanged, got {:?}", result);
    }

    #[test]
    fn test_mul_composition() {
        use std::f32::consts::FRAC_PI_4;

        let r45 = plane_rotation(FRAC_PI_4, 0, 3);
        let r90 = plane_rotation(FRAC_PI_4 * 2.0, 0, 3);
        let composed = mul(r45, r45);

        let v = Vec4::new(1.0, 0.5, 0.0, 0.0);
        assert!(vec_approx_eq(transform(composed, v), transform(r90, v)));
    }

    #[test]
    fn test_transpose_of_rotation_is_inverse() {
        let r = mul(plane_rotation(0.7, 0, 1), plane_rotation(-0.3, 1, 3));
        assert!(mat_approx_eq(mul(transpose(r), r), IDENTITY));
    }

    #[test]
    fn test_inverse_rotation_scale() {
        let m = mul(scale(2.5), plane_rotation(0.4, 0, 3));
        let inv = inverse(m).expect("invertible");
        assert!(mat_approx_eq(mul(inv, m), IDENTITY));
        assert!(mat_approx_eq(mul(m, inv), IDENTITY));
    }

    #[test]
    fn test_inverse_needs_pivoting() {
        // Zero on the leading diagonal entry
        let m: Mat4 = [
            [0.0, 1.0, 0.0, 0.0],
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0, 2.0],
            [0.0, 0.0, 3.0, 0.0],
        ];
        let inv = inverse(m).expect("invertible");
        assert!(mat_approx_eq(mul(m, inv), IDENTITY));
    }

    #[test]
    fn test_inverse_singular() {
        assert!(inverse(scale(0.0)).is_none());
    }

    #[test]
    fn test_get_column() {
        let m = plane_rotation(0.5, 1, 2);
        assert!(vec_approx_eq(get_column(m, 0), Vec4::X));
    }
}
