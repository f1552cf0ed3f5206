//! Property-based tests for shape slicing and transforms

use proptest::prelude::*;
use slicekit_core::{Point3D, ShapeParameters, Transform};
use slicekit_designer::{
    contour_at_z, generate_shape_points, layer_heights, shape_z_range, transform_points,
};

fn shape_strategy() -> impl Strategy<Value = ShapeParameters> {
    prop_oneof![
        (0.5f64..100.0, 0.5f64..100.0, 0.5f64..100.0)
            .prop_map(|(w, h, d)| ShapeParameters::cube(w, h, d)),
        (0.5f64..50.0).prop_map(ShapeParameters::sphere),
        (0.5f64..50.0, 0.5f64..100.0).prop_map(|(r, h)| ShapeParameters::cylinder(r, h)),
    ]
}

fn point_strategy() -> impl Strategy<Value = Point3D> {
    (-500.0f64..500.0, -500.0f64..500.0, -500.0f64..500.0)
        .prop_map(|(x, y, z)| Point3D::new(x, y, z))
}

proptest! {
    #[test]
    fn contours_exist_only_inside_z_range(shape in shape_strategy(), t in -2.0f64..2.0) {
        let range = shape_z_range(&shape, Point3D::ORIGIN);
        let z = range.min_z + t * range.span();
        let contour = contour_at_z(&shape, z);
        prop_assert_eq!(range.contains(z), !contour.is_empty());
        prop_assert!(contour.iter().all(|p| p.z == z));
    }

    #[test]
    fn cube_contour_does_not_depend_on_height(
        w in 0.5f64..100.0,
        h in 0.5f64..100.0,
        d in 0.5f64..100.0,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0,
    ) {
        let shape = ShapeParameters::cube(w, h, d);
        let lower = contour_at_z(&shape, -d / 2.0 + a * d);
        let upper = contour_at_z(&shape, -d / 2.0 + b * d);
        prop_assert_eq!(lower.len(), upper.len());
        for (p, q) in lower.iter().zip(&upper) {
            prop_assert_eq!((p.x, p.y), (q.x, q.y));
        }
    }

    #[test]
    fn layer_heights_stay_in_range(shape in shape_strategy(), layer_height in 0.05f64..5.0) {
        let range = shape_z_range(&shape, Point3D::ORIGIN);
        let heights = layer_heights(range, layer_height);
        prop_assert!(!heights.is_empty());
        prop_assert_eq!(heights[0], range.min_z);
        prop_assert!(heights.iter().all(|z| *z < range.max_z + 1e-9));
        prop_assert!(heights.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn identity_transform_preserves_points(points in prop::collection::vec(point_strategy(), 0..64)) {
        let out = transform_points(&points, &Transform::identity());
        prop_assert_eq!(out.len(), points.len());
        for (a, b) in points.iter().zip(&out) {
            prop_assert!((a.x - b.x).abs() < 1e-9);
            prop_assert!((a.y - b.y).abs() < 1e-9);
            prop_assert!((a.z - b.z).abs() < 1e-9);
        }
    }

    #[test]
    fn translation_shifts_every_point(
        shape in shape_strategy(),
        tx in -100.0f64..100.0,
        ty in -100.0f64..100.0,
        tz in -100.0f64..100.0,
    ) {
        let points = generate_shape_points(&shape, Point3D::ORIGIN, 8);
        let moved = transform_points(&points, &Transform::identity().with_translation(tx, ty, tz));
        for (a, b) in points.iter().zip(&moved) {
            prop_assert!((b.x - a.x - tx).abs() < 1e-9);
            prop_assert!((b.y - a.y - ty).abs() < 1e-9);
            prop_assert!((b.z - a.z - tz).abs() < 1e-9);
        }
    }
}
