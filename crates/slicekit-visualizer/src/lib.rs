//! # SliceKit Visualizer
//!
//! G-code decoding, statistics and preview buffers for SliceKit.
//! Includes the lenient move decoder, the strict statistics scan, and the
//! path builder that turns decoded moves into renderer-ready arrays.

pub mod gcode;
pub mod visualizer;

pub use gcode::{calculate_stats, parse_gcode, ParsedGCode, ParsedMove};

pub use visualizer::{
    build_path_segments, build_render_buffers, hsl_to_rgb, render_gcode, PathSegment,
    RenderBuffers,
};
