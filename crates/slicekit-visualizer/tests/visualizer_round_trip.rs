// Round-trip tests: generated G-code decoded back into moves, stats and buffers

use slicekit_core::{PrinterSettings, ShapeParameters, Transform};
use slicekit_designer::{generate_gcode, EncodeMode, ToolpathToGcode};
use slicekit_visualizer::{
    build_path_segments, calculate_stats, parse_gcode, render_gcode,
};
use std::collections::BTreeSet;

fn cube_gcode(layer_height: f64) -> Vec<String> {
    let settings = PrinterSettings {
        layer_height,
        ..Default::default()
    };
    generate_gcode(
        &ShapeParameters::cube(10.0, 10.0, 10.0),
        &Transform::identity(),
        &settings,
    )
}

fn motion_lines(lines: &[String]) -> Vec<&String> {
    lines
        .iter()
        .filter(|l| l.starts_with("G0 ") || l.starts_with("G1 "))
        .collect()
}

#[test]
fn test_cube_decodes_to_five_layers() {
    let lines = cube_gcode(2.0);
    let parsed = parse_gcode(&lines);
    assert_eq!(parsed.layer_count, 5);
    assert_eq!(parsed.moves.len(), motion_lines(&lines).len());
}

#[test]
fn test_stats_layers_match_distinct_emitted_heights() {
    let lines = cube_gcode(2.0);
    let emitted: BTreeSet<String> = motion_lines(&lines)
        .iter()
        .filter_map(|l| l.split_whitespace().find(|t| t.starts_with('Z')))
        .map(str::to_string)
        .collect();

    let stats = calculate_stats(&lines);
    assert_eq!(stats.layer_count, emitted.len());
    assert_eq!(stats.layer_count, 5);
}

#[test]
fn test_stats_filament_matches_final_e() {
    let lines = cube_gcode(2.0);
    let last_e = motion_lines(&lines)
        .iter()
        .rev()
        .filter_map(|l| l.split_whitespace().find(|t| t.starts_with('E')))
        .find_map(|t| t[1..].parse::<f64>().ok())
        .unwrap();

    let stats = calculate_stats(&lines);
    assert_eq!(stats.filament_used, last_e);
    assert_eq!(stats.total_moves, motion_lines(&lines).len());
    assert!(stats.print_time > 0.0);
}

#[test]
fn test_travel_moves_are_not_extrusion() {
    let lines = cube_gcode(2.0);
    let parsed = parse_gcode(&lines);
    for (line, parsed_move) in motion_lines(&lines).iter().zip(&parsed.moves) {
        if line.starts_with("G0 ") {
            assert!(!parsed_move.is_extrusion);
            assert!(parsed_move.e.is_none());
        } else {
            assert!(parsed_move.is_extrusion, "{}", line);
        }
    }
}

#[test]
fn test_layer_indices_follow_markers() {
    let lines = cube_gcode(2.0);
    let parsed = parse_gcode(&lines);
    let first = parsed.moves.first().unwrap();
    let last = parsed.moves.last().unwrap();
    assert_eq!(first.layer_index, Some(0));
    assert_eq!(last.layer_index, Some(4));
}

#[test]
fn test_render_buffers_cover_every_segment() {
    let lines = cube_gcode(2.0);
    let parsed = parse_gcode(&lines);
    let segments = build_path_segments(&parsed.moves);
    let buffers = render_gcode(&lines);

    assert_eq!(segments.len(), parsed.moves.len() - 1);
    assert_eq!(buffers.positions.len(), segments.len() * 6);
    assert_eq!(buffers.colors.len(), segments.len() * 6);
    assert!(buffers.colors.iter().all(|c| (0.0..=1.0).contains(c)));
}

#[test]
fn test_viewer_frame_uses_build_height_as_up() {
    let lines = cube_gcode(10.0);
    let parsed = parse_gcode(&lines);
    let segments = build_path_segments(&parsed.moves);
    // Single layer at z = -5: every viewer Y is the build height.
    assert!(segments.iter().all(|s| s.start.y == -5.0 && s.end.y == -5.0));
}

#[test]
fn test_point_cloud_round_trip() {
    let lines = ToolpathToGcode::new(PrinterSettings::default())
        .with_mode(EncodeMode::PointCloud)
        .generate(&ShapeParameters::sphere(5.0), &Transform::identity());
    let parsed = parse_gcode(&lines);
    assert_eq!(parsed.layer_count, 1);
    assert_eq!(parsed.moves.len(), 33 * 33);
}

#[test]
fn test_unknown_shape_round_trip_is_empty() {
    let lines = generate_gcode(
        &ShapeParameters::Unknown,
        &Transform::identity(),
        &PrinterSettings::default(),
    );
    let parsed = parse_gcode(&lines);
    let stats = calculate_stats(&lines);
    assert!(parsed.moves.is_empty());
    assert_eq!(parsed.layer_count, 0);
    assert!(stats.is_empty());
    assert_eq!(stats.layer_count, 0);
}
