//! # Layer Slicer
//!
//! Cross-section contours of a shape at an arbitrary build height.
//!
//! Every function returns an empty contour when `z` lies outside the shape's
//! Z range; out-of-range heights are not an error.

use crate::geometry::{rectangle, ring};
use slicekit_core::constants::{
    APEX_EPSILON, DEFAULT_SEGMENTS, LAYER_COUNT_TOLERANCE, MAX_LAYER_COUNT,
};
use slicekit_core::{Point3D, ShapeParameters, ZRange};
use tracing::warn;

/// Cube cross-section: the full X/Y rectangle, identical at every height in range.
pub fn slice_cube_at_z(width: f64, height: f64, depth: f64, z: f64, center: Point3D) -> Vec<Point3D> {
    let half_d = depth / 2.0;
    if !ZRange::new(center.z - half_d, center.z + half_d).contains(z) {
        return Vec::new();
    }
    rectangle(center, width / 2.0, height / 2.0, z)
}

/// Cylinder cross-section: constant-radius circle.
pub fn slice_cylinder_at_z(
    radius: f64,
    height: f64,
    z: f64,
    center: Point3D,
    segments: usize,
) -> Vec<Point3D> {
    let half_height = height / 2.0;
    if !ZRange::new(center.z - half_height, center.z + half_height).contains(z) {
        return Vec::new();
    }
    ring(center, radius, z, segments)
}

/// Sphere cross-section: circle of radius `sqrt(r² - (z - cz)²)`.
///
/// At the poles the circle degenerates to the single apex point.
pub fn slice_sphere_at_z(radius: f64, z: f64, center: Point3D, segments: usize) -> Vec<Point3D> {
    if !ZRange::new(center.z - radius, center.z + radius).contains(z) {
        return Vec::new();
    }

    let dz = z - center.z;
    let slice_radius = (radius * radius - dz * dz).max(0.0).sqrt();
    if slice_radius < APEX_EPSILON {
        return vec![center.with_z(z)];
    }

    ring(center, slice_radius, z, segments)
}

/// Perimeter of `shape` at height `z`.
pub fn layer_contour_at_z(
    shape: &ShapeParameters,
    z: f64,
    center: Point3D,
    segments: usize,
) -> Vec<Point3D> {
    match shape {
        ShapeParameters::Cube(d) => slice_cube_at_z(d.width, d.height, d.depth, z, center),
        ShapeParameters::Cylinder(d) => slice_cylinder_at_z(d.radius, d.height, z, center, segments),
        ShapeParameters::Sphere(d) => slice_sphere_at_z(d.radius, z, center, segments),
        ShapeParameters::Unknown => Vec::new(),
    }
}

/// [`layer_contour_at_z`] about the origin with the default segment count.
pub fn contour_at_z(shape: &ShapeParameters, z: f64) -> Vec<Point3D> {
    layer_contour_at_z(shape, z, Point3D::ORIGIN, DEFAULT_SEGMENTS)
}

/// Z interval in which `shape` has a non-empty cross-section.
pub fn shape_z_range(shape: &ShapeParameters, center: Point3D) -> ZRange {
    match shape {
        ShapeParameters::Cube(d) => {
            let half_d = d.depth / 2.0;
            ZRange::new(center.z - half_d, center.z + half_d)
        }
        ShapeParameters::Cylinder(d) => {
            let half_h = d.height / 2.0;
            ZRange::new(center.z - half_h, center.z + half_h)
        }
        ShapeParameters::Sphere(d) => ZRange::new(center.z - d.radius, center.z + d.radius),
        ShapeParameters::Unknown => ZRange::default(),
    }
}

/// Slicing heights from `range.min_z` upward in steps of `layer_height`.
///
/// Produces `ceil(span / layer_height)` layers (at least one), so a span that
/// is an exact multiple of the step does not gain an extra top layer. A
/// non-positive or non-finite step yields the single bottom layer. At most
/// [`MAX_LAYER_COUNT`] heights are returned, so a vanishingly small step
/// covers only the bottom of the range.
pub fn layer_heights(range: ZRange, layer_height: f64) -> Vec<f64> {
    if !layer_height.is_finite() || layer_height <= 0.0 || !range.span().is_finite() {
        return vec![range.min_z];
    }

    let steps = (range.span() / layer_height - LAYER_COUNT_TOLERANCE).ceil();
    let count = if steps >= 1.0 {
        (steps as usize).min(MAX_LAYER_COUNT)
    } else {
        1
    };
    if count == MAX_LAYER_COUNT {
        warn!("Layer count capped at {} for step {}", MAX_LAYER_COUNT, layer_height);
    }

    (0..count)
        .map(|i| range.min_z + i as f64 * layer_height)
        .collect()
}
