//! Line-segment buffers for toolpath previews.
//!
//! G-code uses Z as build height; the viewer uses Y as up. Every position
//! leaving this module is in the viewer frame `(X, Z, Y)`.

use super::color::segment_color;
use crate::gcode::{parse_gcode, ParsedMove};
use serde::{Deserialize, Serialize};
use slicekit_core::constants::MIN_EXTRUSION_NORMALIZER;
use slicekit_core::Point3D;
use tracing::{debug, trace};

/// Floats per segment in each render buffer (two vertices of three components).
pub const FLOATS_PER_SEGMENT: usize = 6;

/// A preview line between two consecutive decoded moves.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PathSegment {
    pub start: Point3D,
    pub end: Point3D,
    /// `E` delta along the segment; 0 when either end lacks `E`.
    pub extrusion: f64,
    pub layer_index: usize,
}

/// Map a G-code position into the viewer frame.
pub fn to_viewer_frame(x: f64, y: f64, z: f64) -> Point3D {
    Point3D::new(x, z, y)
}

fn viewer_point(m: &ParsedMove) -> Point3D {
    to_viewer_frame(m.x, m.y, m.z)
}

/// One segment per consecutive pair of moves.
pub fn build_path_segments(moves: &[ParsedMove]) -> Vec<PathSegment> {
    moves
        .windows(2)
        .map(|pair| {
            let (prev, curr) = (&pair[0], &pair[1]);
            let extrusion = match (prev.e, curr.e) {
                (Some(a), Some(b)) => b - a,
                _ => 0.0,
            };
            PathSegment {
                start: viewer_point(prev),
                end: viewer_point(curr),
                extrusion,
                layer_index: curr.layer_index.or(prev.layer_index).unwrap_or(0),
            }
        })
        .collect()
}

/// Flat vertex and colour arrays ready for a line-segment renderer.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RenderBuffers {
    pub positions: Vec<f32>,
    pub colors: Vec<f32>,
}

impl RenderBuffers {
    pub fn segment_count(&self) -> usize {
        self.positions.len() / FLOATS_PER_SEGMENT
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Largest extrusion in the set, never below the normalization floor.
pub fn max_extrusion(segments: &[PathSegment]) -> f64 {
    segments
        .iter()
        .map(|s| s.extrusion)
        .fold(MIN_EXTRUSION_NORMALIZER, f64::max)
}

pub fn build_render_buffers(segments: &[PathSegment]) -> RenderBuffers {
    if segments.is_empty() {
        trace!("No segments to render");
        return RenderBuffers::default();
    }

    let max_extrusion = max_extrusion(segments);
    let mut buffers = RenderBuffers {
        positions: Vec::with_capacity(segments.len() * FLOATS_PER_SEGMENT),
        colors: Vec::with_capacity(segments.len() * FLOATS_PER_SEGMENT),
    };

    for segment in segments {
        let color = segment_color(segment.layer_index, segment.extrusion, max_extrusion);
        for p in [segment.start, segment.end] {
            buffers
                .positions
                .extend([p.x as f32, p.y as f32, p.z as f32]);
            buffers.colors.extend(color);
        }
    }

    debug!(
        "Built render buffers for {} segments (max extrusion {:.5})",
        segments.len(),
        max_extrusion
    );
    buffers
}

/// Decode G-code text straight into render buffers.
pub fn render_gcode<S: AsRef<str>>(lines: &[S]) -> RenderBuffers {
    let parsed = parse_gcode(lines);
    build_render_buffers(&build_path_segments(&parsed.moves))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(x: f64, y: f64, z: f64, e: Option<f64>, layer_index: Option<usize>) -> ParsedMove {
        ParsedMove {
            x,
            y,
            z,
            e,
            is_extrusion: false,
            layer_index,
        }
    }

    #[test]
    fn test_viewer_frame_swaps_y_and_z() {
        assert_eq!(to_viewer_frame(1.0, 2.0, 3.0), Point3D::new(1.0, 3.0, 2.0));
    }

    #[test]
    fn test_segment_per_consecutive_pair() {
        let moves = vec![
            mv(0.0, 0.0, 0.2, Some(0.0), Some(0)),
            mv(10.0, 0.0, 0.2, Some(0.5), Some(0)),
            mv(10.0, 10.0, 0.2, None, Some(1)),
        ];
        let segments = build_path_segments(&moves);
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].start, Point3D::new(0.0, 0.2, 0.0));
        assert_eq!(segments[0].end, Point3D::new(10.0, 0.2, 0.0));
        assert_eq!(segments[0].extrusion, 0.5);
        assert_eq!(segments[1].extrusion, 0.0);
        assert_eq!(segments[1].layer_index, 1);
    }

    #[test]
    fn test_layer_index_falls_back_to_previous_then_zero() {
        let moves = vec![
            mv(0.0, 0.0, 0.0, None, Some(3)),
            mv(1.0, 0.0, 0.0, None, None),
            mv(2.0, 0.0, 0.0, None, None),
        ];
        let segments = build_path_segments(&moves);
        assert_eq!(segments[0].layer_index, 3);
        assert_eq!(segments[1].layer_index, 0);
    }

    #[test]
    fn test_fewer_than_two_moves() {
        assert!(build_path_segments(&[]).is_empty());
        assert!(build_path_segments(&[mv(1.0, 1.0, 1.0, None, None)]).is_empty());
        assert!(build_render_buffers(&[]).is_empty());
    }

    #[test]
    fn test_buffer_layout() {
        let moves = vec![
            mv(0.0, 0.0, 0.0, Some(0.0), Some(0)),
            mv(1.0, 2.0, 3.0, Some(1.0), Some(0)),
            mv(4.0, 5.0, 6.0, Some(1.5), Some(0)),
        ];
        let buffers = build_render_buffers(&build_path_segments(&moves));
        assert_eq!(buffers.positions.len(), 12);
        assert_eq!(buffers.colors.len(), 12);
        assert_eq!(buffers.segment_count(), 2);
        assert_eq!(&buffers.positions[..6], &[0.0, 0.0, 0.0, 1.0, 3.0, 2.0]);
        // Both vertices of a segment share a colour.
        assert_eq!(buffers.colors[0..3], buffers.colors[3..6]);
    }

    #[test]
    fn test_max_extrusion_floor() {
        let moves = vec![
            mv(0.0, 0.0, 0.0, Some(2.0), None),
            mv(1.0, 0.0, 0.0, Some(1.0), None),
        ];
        assert_eq!(max_extrusion(&build_path_segments(&moves)), MIN_EXTRUSION_NORMALIZER);
    }

    #[test]
    fn test_render_gcode_end_to_end() {
        let buffers = render_gcode(&["; Layer 1", "G0 X0 Y0 Z0.2", "G1 X10 Y0 Z0.2 E0.5"]);
        assert_eq!(buffers.segment_count(), 1);
        assert_eq!(&buffers.positions[3..6], &[10.0, 0.2, 0.0]);
    }
}
