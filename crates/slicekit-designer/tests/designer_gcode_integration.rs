// Integration tests for shape-to-G-code generation

use slicekit_core::{Point3D, PrinterSettings, ShapeParameters, Transform};
use slicekit_designer::{
    contour_at_z, layer_heights, shape_z_range, EncodeMode, ToolpathToGcode,
};

fn motion_lines(lines: &[String]) -> Vec<&String> {
    lines
        .iter()
        .filter(|l| l.starts_with("G0 ") || l.starts_with("G1 "))
        .collect()
}

#[test]
fn test_cube_layers_follow_layer_height() {
    let shape = ShapeParameters::cube(10.0, 10.0, 10.0);
    let range = shape_z_range(&shape, Point3D::ORIGIN);
    let heights = layer_heights(range, 2.0);

    assert_eq!(heights.len(), 5);
    for z in heights {
        let contour = contour_at_z(&shape, z);
        assert_eq!(contour.len(), 5);
        assert!(contour.iter().all(|p| p.z == z));
    }
}

#[test]
fn test_each_layer_moves_share_one_height() {
    let settings = PrinterSettings {
        layer_height: 1.0,
        ..Default::default()
    };
    let encoder = ToolpathToGcode::new(settings).with_segments(12);
    let lines = encoder.generate(&ShapeParameters::cylinder(4.0, 3.0), &Transform::identity());

    let mut current: Option<String> = None;
    for line in &lines {
        if line.starts_with("; Layer ") {
            current = None;
            continue;
        }
        if !(line.starts_with("G0 ") || line.starts_with("G1 ")) {
            continue;
        }
        let z = line
            .split_whitespace()
            .find(|t| t.starts_with('Z'))
            .map(str::to_string);
        match &current {
            None => current = z,
            Some(expected) => assert_eq!(Some(expected.clone()), z),
        }
    }
}

#[test]
fn test_sphere_layers_start_at_apex() {
    let settings = PrinterSettings {
        layer_height: 1.0,
        ..Default::default()
    };
    let encoder = ToolpathToGcode::new(settings);
    let layers = encoder.layer_contours(&ShapeParameters::sphere(5.0), &Transform::identity());

    assert_eq!(layers.len(), 10);
    // Bottom pole degenerates to a single apex point.
    assert_eq!(layers[0].len(), 1);
    assert!(layers[5].len() > 1);
}

#[test]
fn test_layer_contours_are_transformed() {
    let settings = PrinterSettings {
        layer_height: 5.0,
        ..Default::default()
    };
    let transform = Transform::identity()
        .with_scale(2.0, 2.0, 2.0)
        .with_translation(0.0, 0.0, 10.0);
    let layers = ToolpathToGcode::new(settings)
        .layer_contours(&ShapeParameters::cube(10.0, 10.0, 10.0), &transform);

    assert_eq!(layers.len(), 2);
    assert_eq!(layers[0][0], Point3D::new(-10.0, -10.0, 0.0));
    assert_eq!(layers[1][0], Point3D::new(-10.0, -10.0, 10.0));
}

#[test]
fn test_point_cloud_encodes_whole_surface() {
    let encoder = ToolpathToGcode::new(PrinterSettings::default())
        .with_mode(EncodeMode::PointCloud)
        .with_segments(4);
    let lines = encoder.generate(&ShapeParameters::cylinder(5.0, 10.0), &Transform::identity());
    let moves = motion_lines(&lines);

    assert_eq!(moves.len(), 10);
    assert!(moves[0].starts_with("G0 "));
    assert!(moves[1..].iter().all(|l| l.starts_with("G1 ")));
}

#[test]
fn test_program_ends_with_shutdown() {
    let lines = ToolpathToGcode::new(PrinterSettings::default())
        .generate(&ShapeParameters::default(), &Transform::identity());
    let tail: Vec<&str> = lines.iter().rev().take(3).map(String::as_str).collect();
    assert!(tail[0].starts_with("M84"));
    assert!(tail.iter().any(|l| l.starts_with("M104 S0")));
    assert!(tail.iter().any(|l| l.starts_with("M140 S0")));
}
