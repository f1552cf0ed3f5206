//! Toolpath preview module
//!
//! This module provides:
//! - Move-pair path segments in the viewer frame
//! - Layer and flow based colouring
//! - Flat position/colour buffers for line renderers

pub mod color;
pub mod path_builder;

pub use color::{hsl_to_rgb, layer_hue, segment_color};
pub use path_builder::{
    build_path_segments, build_render_buffers, max_extrusion, render_gcode, to_viewer_frame,
    PathSegment, RenderBuffers, FLOATS_PER_SEGMENT,
};
