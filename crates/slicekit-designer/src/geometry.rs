//! # Shape Point Generators
//!
//! Produces the full surface point set of a shape, for point-cloud previews
//! and for encoding a shape without per-layer slicing.

use slicekit_core::constants::DEFAULT_SEGMENTS;
use slicekit_core::{Point3D, ShapeParameters};
use std::f64::consts::PI;

/// Closed ring of `segments + 1` points around `center` at height `z`.
///
/// The last point repeats the first so the loop closes.
pub(crate) fn ring(center: Point3D, radius: f64, z: f64, segments: usize) -> Vec<Point3D> {
    let segments = segments.max(1);
    (0..=segments)
        .map(|i| {
            let theta = (i as f64 / segments as f64) * PI * 2.0;
            Point3D::new(
                center.x + radius * theta.cos(),
                center.y + radius * theta.sin(),
                z,
            )
        })
        .collect()
}

/// Closed axis-aligned rectangle (4 corners + closing point) at height `z`.
pub(crate) fn rectangle(center: Point3D, half_w: f64, half_h: f64, z: f64) -> Vec<Point3D> {
    vec![
        Point3D::new(center.x - half_w, center.y - half_h, z),
        Point3D::new(center.x + half_w, center.y - half_h, z),
        Point3D::new(center.x + half_w, center.y + half_h, z),
        Point3D::new(center.x - half_w, center.y + half_h, z),
        Point3D::new(center.x - half_w, center.y - half_h, z),
    ]
}

/// Bottom and top outlines of a box, each a closed 5-point loop.
pub fn generate_cube_points(width: f64, height: f64, depth: f64, center: Point3D) -> Vec<Point3D> {
    let half_w = width / 2.0;
    let half_h = height / 2.0;
    let half_d = depth / 2.0;

    let mut points = rectangle(center, half_w, half_h, center.z - half_d);
    points.extend(rectangle(center, half_w, half_h, center.z + half_d));
    points
}

/// Latitude/longitude grid over the sphere surface.
///
/// The outer loop walks azimuth (θ) and the inner loop walks the polar
/// angle (φ) from the +Z pole to the -Z pole, giving `(segments + 1)²` points.
pub fn generate_sphere_points(radius: f64, center: Point3D, segments: usize) -> Vec<Point3D> {
    let segments = segments.max(1);
    let mut points = Vec::with_capacity((segments + 1) * (segments + 1));

    for i in 0..=segments {
        let theta = (i as f64 / segments as f64) * PI * 2.0;
        for j in 0..=segments {
            let phi = (j as f64 / segments as f64) * PI;
            points.push(Point3D::new(
                center.x + radius * phi.sin() * theta.cos(),
                center.y + radius * phi.sin() * theta.sin(),
                center.z + radius * phi.cos(),
            ));
        }
    }

    points
}

/// Bottom ring followed by top ring, `segments + 1` points each.
pub fn generate_cylinder_points(
    radius: f64,
    height: f64,
    center: Point3D,
    segments: usize,
) -> Vec<Point3D> {
    let half_height = height / 2.0;
    let mut points = ring(center, radius, center.z - half_height, segments);
    points.extend(ring(center, radius, center.z + half_height, segments));
    points
}

/// Full point set for any shape. Unknown shapes produce no points.
pub fn generate_shape_points(
    shape: &ShapeParameters,
    center: Point3D,
    segments: usize,
) -> Vec<Point3D> {
    match shape {
        ShapeParameters::Cube(d) => generate_cube_points(d.width, d.height, d.depth, center),
        ShapeParameters::Sphere(d) => generate_sphere_points(d.radius, center, segments),
        ShapeParameters::Cylinder(d) => {
            generate_cylinder_points(d.radius, d.height, center, segments)
        }
        ShapeParameters::Unknown => Vec::new(),
    }
}

/// [`generate_shape_points`] at the origin with the default segment count.
pub fn shape_points(shape: &ShapeParameters) -> Vec<Point3D> {
    generate_shape_points(shape, Point3D::ORIGIN, DEFAULT_SEGMENTS)
}
