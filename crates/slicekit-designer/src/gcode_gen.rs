//! G-code generation from sliced shapes.
//!
//! Output uses absolute positioning and absolute extrusion throughout. Each
//! layer starts with a `; Layer <n>` marker (one-based) followed by a travel
//! move to the first contour vertex and one extruding move per remaining
//! vertex. `E` is cumulative across the whole program.

use crate::geometry::generate_shape_points;
use crate::slicer::{layer_contour_at_z, layer_heights, shape_z_range};
use crate::transform::TransformMatrix;
use serde::{Deserialize, Serialize};
use slicekit_core::constants::DEFAULT_SEGMENTS;
use slicekit_core::{distance, Point3D, PrinterSettings, ShapeParameters, Transform};
use tracing::{debug, trace};

/// How the shape is turned into moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EncodeMode {
    /// Slice the shape every `layer_height` and print each contour.
    #[default]
    Layered,
    /// Transform the whole-shape point set and print it as one path.
    PointCloud,
}

/// Round to `decimals` places and drop the sign of zero.
fn format_number(value: f64, decimals: usize) -> String {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * scale).round() / scale;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.*}", decimals, rounded)
}

/// Running absolute-extrusion state.
///
/// `last` is cleared at every layer change so the first vertex of a layer is
/// reached by a travel move and never extrudes across the layer gap.
#[derive(Debug, Clone, Copy, Default)]
struct ExtrusionTracker {
    e: f64,
    last: Option<Point3D>,
}

impl ExtrusionTracker {
    fn reset_position(&mut self) {
        self.last = None;
    }

    /// Advance to `to`; returns the new cumulative E, or `None` for a travel move.
    fn advance(&mut self, to: Point3D, extrusion_per_mm: f64) -> Option<f64> {
        let from = self.last.replace(to)?;
        let added = distance(from, to) * extrusion_per_mm;
        if added.is_finite() && added > 0.0 {
            self.e += added;
        }
        Some(self.e)
    }
}

/// G-code generator for converting shapes to printer G-code.
#[derive(Debug, Clone)]
pub struct ToolpathToGcode {
    settings: PrinterSettings,
    mode: EncodeMode,
    segments: usize,
    center: Point3D,
}

impl ToolpathToGcode {
    /// Creates a new G-code generator.
    pub fn new(settings: PrinterSettings) -> Self {
        Self {
            settings,
            mode: EncodeMode::Layered,
            segments: DEFAULT_SEGMENTS,
            center: Point3D::ORIGIN,
        }
    }

    pub fn with_mode(mut self, mode: EncodeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Number of segments used for round shapes.
    pub fn with_segments(mut self, segments: usize) -> Self {
        self.segments = segments;
        self
    }

    /// Shape center before the transform is applied.
    pub fn with_center(mut self, center: Point3D) -> Self {
        self.center = center;
        self
    }

    pub fn settings(&self) -> &PrinterSettings {
        &self.settings
    }

    /// Generates the complete program for `shape` placed by `transform`.
    pub fn generate(&self, shape: &ShapeParameters, transform: &Transform) -> Vec<String> {
        let layers = self.layer_contours(shape, transform);
        debug!(
            "Encoding {} ({:?}) into {} layers",
            shape,
            self.mode,
            layers.len()
        );

        let mut lines = self.generate_header(shape, layers.len());
        lines.extend(self.generate_body(&layers));
        lines.extend(self.generate_footer());
        lines
    }

    /// Transformed contours, one entry per emitted layer.
    pub fn layer_contours(&self, shape: &ShapeParameters, transform: &Transform) -> Vec<Vec<Point3D>> {
        let matrix = TransformMatrix::from_transform(transform);
        match self.mode {
            EncodeMode::Layered => {
                let range = shape_z_range(shape, self.center);
                layer_heights(range, self.settings.layer_height)
                    .into_iter()
                    .map(|z| {
                        let contour = layer_contour_at_z(shape, z, self.center, self.segments);
                        matrix.apply_all(&contour)
                    })
                    .filter(|contour| !contour.is_empty())
                    .collect()
            }
            EncodeMode::PointCloud => {
                let points = generate_shape_points(shape, self.center, self.segments);
                if points.is_empty() {
                    Vec::new()
                } else {
                    vec![matrix.apply_all(&points)]
                }
            }
        }
    }

    /// Generates the program preamble: heat-up, homing, and absolute modes.
    pub fn generate_header(&self, shape: &ShapeParameters, layer_count: usize) -> Vec<String> {
        let s = &self.settings;
        vec![
            "; Generated by SliceKit".to_string(),
            format!("; Shape: {}", shape),
            format!("; Height per layer: {}mm", format_number(s.layer_height, 3)),
            format!("; Print speed: {} mm/s", format_number(s.print_speed, 1)),
            format!("; Total layers: {}", layer_count),
            format!("M140 S{} ; Set bed temperature", format_number(s.bed_temperature, 0)),
            format!("M104 S{} ; Set nozzle temperature", format_number(s.nozzle_temperature, 0)),
            format!("M190 S{} ; Wait for bed temperature", format_number(s.bed_temperature, 0)),
            format!("M109 S{} ; Wait for nozzle temperature", format_number(s.nozzle_temperature, 0)),
            "G28 ; Home all axes".to_string(),
            "G21 ; Millimeter units".to_string(),
            "G90 ; Absolute positioning".to_string(),
            "M82 ; Absolute extrusion".to_string(),
            "G92 E0 ; Reset extruder".to_string(),
        ]
    }

    /// Generates the layer-by-layer moves for already transformed contours.
    pub fn generate_body(&self, layers: &[Vec<Point3D>]) -> Vec<String> {
        let feed = format_number(self.settings.feed_rate(), 0);
        let extrusion_per_mm = self.settings.extrusion_per_mm();
        let mut tracker = ExtrusionTracker::default();
        let mut lines = Vec::with_capacity(layers.iter().map(|l| l.len() + 1).sum());

        for (index, contour) in layers.iter().enumerate() {
            trace!("Layer {}: {} vertices", index + 1, contour.len());
            lines.push(format!("; Layer {}", index + 1));
            tracker.reset_position();

            for point in contour {
                let xyz = format!(
                    "X{} Y{} Z{}",
                    format_number(point.x, 3),
                    format_number(point.y, 3),
                    format_number(point.z, 3)
                );
                match tracker.advance(*point, extrusion_per_mm) {
                    None => lines.push(format!("G0 {} F{}", xyz, feed)),
                    Some(e) => lines.push(format!("G1 {} E{} F{}", xyz, format_number(e, 5), feed)),
                }
            }
        }

        lines
    }

    /// Generates the program postamble.
    pub fn generate_footer(&self) -> Vec<String> {
        vec![
            "; End of print".to_string(),
            "M104 S0 ; Turn off nozzle".to_string(),
            "M140 S0 ; Turn off bed".to_string(),
            "M84 ; Disable motors".to_string(),
        ]
    }
}

/// Generates the full program for a shape with default segment count and layered mode.
pub fn generate_gcode(
    shape: &ShapeParameters,
    transform: &Transform,
    settings: &PrinterSettings,
) -> Vec<String> {
    ToolpathToGcode::new(*settings).generate(shape, transform)
}
