//! # Coordinate Transformer
//!
//! Composes a [`Transform`] into one homogeneous matrix and applies it to
//! point sets. The matrix is built as `T · Rx · Ry · Rz · S`, so a point is
//! scaled first, then rotated about Z, Y and X, then translated.

use glam::{DMat4, DVec3};
use slicekit_core::{Point3D, Transform, Vector3};

fn to_dvec3(v: Vector3) -> DVec3 {
    DVec3::new(v.x, v.y, v.z)
}

/// A composed affine transform ready to apply to points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformMatrix {
    matrix: DMat4,
}

impl TransformMatrix {
    pub fn identity() -> Self {
        Self {
            matrix: DMat4::IDENTITY,
        }
    }

    /// Compose the matrix for `transform`. Rotation angles are in degrees.
    pub fn from_transform(transform: &Transform) -> Self {
        let rotation = transform.rotation;
        let matrix = DMat4::from_translation(to_dvec3(transform.translation))
            * DMat4::from_rotation_x(rotation.x.to_radians())
            * DMat4::from_rotation_y(rotation.y.to_radians())
            * DMat4::from_rotation_z(rotation.z.to_radians())
            * DMat4::from_scale(to_dvec3(transform.scale));
        Self { matrix }
    }

    pub fn matrix(&self) -> &DMat4 {
        &self.matrix
    }

    pub fn apply(&self, point: Point3D) -> Point3D {
        let p = self
            .matrix
            .transform_point3(DVec3::new(point.x, point.y, point.z));
        Point3D::new(p.x, p.y, p.z)
    }

    pub fn apply_all(&self, points: &[Point3D]) -> Vec<Point3D> {
        points.iter().map(|p| self.apply(*p)).collect()
    }
}

impl Default for TransformMatrix {
    fn default() -> Self {
        Self::identity()
    }
}

impl From<&Transform> for TransformMatrix {
    fn from(transform: &Transform) -> Self {
        Self::from_transform(transform)
    }
}

/// Transform a single point.
pub fn transform_point(point: Point3D, transform: &Transform) -> Point3D {
    TransformMatrix::from_transform(transform).apply(point)
}

/// Transform a point set with one composed matrix.
pub fn transform_points(points: &[Point3D], transform: &Transform) -> Vec<Point3D> {
    if points.is_empty() {
        return Vec::new();
    }
    TransformMatrix::from_transform(transform).apply_all(points)
}
