//! Bounding spheres for broad-phase visibility tests

use serde::{Serialize, Deserialize};

use crate::{Transform4D, Vec4};

/// A 4D sphere defined by center and radius
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingSphere4D {
    pub center: Vec4,
    pub radius: f32,
}

impl BoundingSphere4D {
    /// Create a new sphere at the given center with the given radius
    pub fn new(center: Vec4, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Sphere around a point set: centered on the centroid, reaching the farthest point
    ///
    /// Not minimal, but cheap and always conservative: the radius is nudged
    /// outward so rounding never leaves the farthest point outside. Empty input
    /// gives a zero sphere at the origin.
    pub fn from_points(points: &[Vec4]) -> Self {
        if points.is_empty() {
            return Self::new(Vec4::ZERO, 0.0);
        }
        let mut sum = Vec4::ZERO;
        for p in points {
            sum += *p;
        }
        let center = sum * (1.0 / points.len() as f32);
        let radius = points
            .iter()
            .map(|p| (*p - center).length_squared())
            .fold(0.0f32, f32::max)
            .sqrt();
        Self { center, radius: radius * (1.0 + 1e-5) }
    }

    /// Check if a point is inside or on the sphere
    pub fn contains(&self, point: Vec4) -> bool {
        (point - self.center).length_squared() <= self.radius * self.radius
    }

    /// Move the sphere through an affine transform
    ///
    /// The radius grows by an upper bound on the linear part's largest
    /// stretch: the square root of the largest absolute row sum of `MᵀM`.
    /// This is exact for rotation with uniform scale and conservative under
    /// non-uniform scale or shear.
    pub fn transformed(&self, t: &Transform4D) -> Self {
        let axes = [t.axis(0), t.axis(1), t.axis(2), t.axis(3)];
        let stretch = axes
            .iter()
            .map(|a| axes.iter().map(|b| a.dot(*b).abs()).sum::<f32>())
            .fold(0.0f32, f32::max)
            .sqrt();
        Self {
            center: t.transform_point(self.center),
            radius: self.radius * stretch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points() {
        let points = [
            Vec4::new(-1.0, 0.0, 0.0, 0.0),
            Vec4::new(1.0, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
            Vec4::new(0.0, 0.0, 0.0, -1.0),
        ];
        let s = BoundingSphere4D::from_points(&points);
        assert_eq!(s.center, Vec4::ZERO);
        assert!((s.radius - 1.0).abs() < 1e-4);
        for p in &points {
            assert!(s.contains(*p));
        }
    }

    #[test]
    fn test_from_no_points() {
        let s = BoundingSphere4D::from_points(&[]);
        assert_eq!(s.radius, 0.0);
    }

    #[test]
    fn test_transformed() {
        let s = BoundingSphere4D::new(Vec4::X, 1.0);
        let t = Transform4D::from_position(Vec4::new(0.0, 0.0, 0.0, 5.0)).with_scale(3.0);
        let moved = s.transformed(&t);
        assert_eq!(moved.center, Vec4::new(3.0, 0.0, 0.0, 5.0));
        assert_eq!(moved.radius, 3.0);
    }

    #[test]
    fn test_transformed_covers_sheared_points() {
        // Shear x += 2y stretches (1, 1) / sqrt(2) beyond either column length
        let mut t = Transform4D::identity();
        t.matrix[1][0] = 2.0;
        let s = BoundingSphere4D::new(Vec4::ZERO, 1.0);
        let moved = s.transformed(&t);
        for i in 0..64 {
            let a = i as f32 * std::f32::consts::TAU / 64.0;
            let p = t.transform_point(Vec4::new(a.cos(), a.sin(), 0.0, 0.0));
            assert!(moved.contains(p), "{:?} escapes radius {}", p, moved.radius);
        }
    }

    #[test]
    fn test_transformed_rotation_keeps_radius() {
        let t = Transform4D::from_plane_rotation(0, 3, 0.7).with_scale(2.0);
        let moved = BoundingSphere4D::new(Vec4::ZERO, 1.5).transformed(&t);
        assert!((moved.radius - 3.0).abs() < 1e-4);
    }
}
