//! # SliceKit
//!
//! Generates 3D-printer G-code from parametric solids and reads it back.
//!
//! ## Architecture
//!
//! SliceKit is organized as a workspace with multiple crates:
//!
//! 1. **slicekit-core** - Points, shapes, transforms, printer settings, errors, unit formatting
//! 2. **slicekit-designer** - Shape points, layer slicing, transforms, G-code generation
//! 3. **slicekit-visualizer** - G-code decoding, print statistics, render buffers
//! 4. **slicekit-settings** - JSON/TOML job configuration
//! 5. **slicekit** - Job runner, logging setup and the command-line binary
//!
//! ## Data flow
//!
//! ```text
//! JobConfig ─► ToolpathToGcode ─► G-code lines ─┬─► parse_gcode ─► path segments ─► RenderBuffers
//!                                               └─► calculate_stats ─► PrintStats
//! ```

pub mod job;

pub use slicekit_designer as designer;
pub use slicekit_settings as settings;
pub use slicekit_visualizer as visualizer;

pub use job::{generate_job, generate_job_async, read_gcode_lines, PrintJobOutput};

pub use slicekit_core::{
    format_length, format_time, Error, JobError, Point3D, PrintStats, PrinterSettings, Result,
    ShapeKind, ShapeParameters, Transform,
};

pub use slicekit_designer::{EncodeMode, ToolpathToGcode};
pub use slicekit_settings::{JobConfig, OutputSettings};
pub use slicekit_visualizer::{
    build_path_segments, build_render_buffers, calculate_stats, parse_gcode, ParsedGCode,
    PathSegment, RenderBuffers,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging with:
/// - RUST_LOG environment variable support (INFO by default)
/// - Human-readable output on stderr, or JSON lines when `json` is set
///
/// Logs go to stderr so G-code can be piped from stdout.
pub fn init_logging(json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let text_layer = (!json).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true)
    });
    let json_layer = json.then(|| {
        fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_current_span(false)
    });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(text_layer)
        .with(json_layer)
        .try_init()?;

    Ok(())
}
