//! G-code decoder for preview rendering.
//!
//! Recovers positions, extrusion and layer membership from encoded text.
//! Recognition is deliberately lenient: any non-comment line carrying an
//! `X`/`Y`/`Z`/`E` word counts as a move, not only `G0`/`G1` lines, so hand
//! edited files still preview. [`crate::gcode::stats`] uses a stricter
//! predicate and its own scan.

use regex::Regex;
use serde::{Deserialize, Serialize};
use slicekit_core::Point3D;
use std::sync::OnceLock;
use tracing::{debug, trace};

/// One decoded motion with the absolute state after it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ParsedMove {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    /// Present only when the line carried an `E` word.
    pub e: Option<f64>,
    /// `E` was present and exceeded the previous move's `E`.
    pub is_extrusion: bool,
    /// Zero-based layer index in effect for this move.
    pub layer_index: Option<usize>,
}

impl ParsedMove {
    pub fn position(&self) -> Point3D {
        Point3D::new(self.x, self.y, self.z)
    }
}

/// Decoded moves plus the number of layers announced by `; Layer <n>` markers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParsedGCode {
    pub moves: Vec<ParsedMove>,
    pub layer_count: usize,
}

impl ParsedGCode {
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn extrusion_move_count(&self) -> usize {
        self.moves.iter().filter(|m| m.is_extrusion).count()
    }
}

fn layer_marker_regex() -> &'static Regex {
    static LAYER_REGEX: OnceLock<Regex> = OnceLock::new();
    LAYER_REGEX
        .get_or_init(|| Regex::new(r"(?i)^;\s*Layer\s+(\d+)").expect("invalid regex pattern"))
}

fn axis_word_regex() -> &'static Regex {
    static AXIS_REGEX: OnceLock<Regex> = OnceLock::new();
    AXIS_REGEX.get_or_init(|| {
        Regex::new(r"([XYZEF])([-+]?(?:\d+\.?\d*|\.\d+))").expect("invalid regex pattern")
    })
}

/// Axis words of one line. Repeated letters keep the last value.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct AxisWords {
    x: Option<f64>,
    y: Option<f64>,
    z: Option<f64>,
    e: Option<f64>,
    f: Option<f64>,
}

impl AxisWords {
    fn scan(code: &str) -> Self {
        axis_word_regex()
            .captures_iter(code)
            .fold(Self::default(), |mut words, caps| {
                let Ok(value) = caps[2].parse::<f64>() else {
                    return words;
                };
                match &caps[1] {
                    "X" => words.x = Some(value),
                    "Y" => words.y = Some(value),
                    "Z" => words.z = Some(value),
                    "E" => words.e = Some(value),
                    "F" => words.f = Some(value),
                    _ => {}
                }
                words
            })
    }

    fn has_motion_axis(&self) -> bool {
        self.x.is_some() || self.y.is_some() || self.z.is_some() || self.e.is_some()
    }
}

/// What a single trimmed line means to the decoder.
#[derive(Debug, Clone, Copy, PartialEq)]
enum LineKind {
    Ignored,
    LayerMarker(usize),
    ExtruderReset(Option<f64>),
    Motion(AxisWords),
}

fn classify_line(line: &str) -> LineKind {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Ignored;
    }

    if let Some(caps) = layer_marker_regex().captures(trimmed) {
        return match caps[1].parse::<usize>() {
            Ok(number) => LineKind::LayerMarker(number.saturating_sub(1)),
            Err(_) => LineKind::Ignored,
        };
    }

    // Whole-line comments never move; words after an inline `;` still count.
    if trimmed.starts_with(';') {
        return LineKind::Ignored;
    }

    if trimmed.starts_with("G92") {
        return LineKind::ExtruderReset(AxisWords::scan(trimmed).e);
    }

    let words = AxisWords::scan(trimmed);
    let explicit_move = trimmed.starts_with("G0 ") || trimmed.starts_with("G1 ");
    if explicit_move || words.has_motion_axis() {
        LineKind::Motion(words)
    } else {
        LineKind::Ignored
    }
}

/// Decoder snapshot between lines.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct DecoderState {
    x: f64,
    y: f64,
    z: f64,
    e: f64,
    /// `E` of the last move that carried one. `G92` does not touch it.
    prev_e: f64,
    layer_index: usize,
    layer_count: usize,
}

impl DecoderState {
    fn step(self, line: &str) -> (Self, Option<ParsedMove>) {
        match classify_line(line) {
            LineKind::Ignored => (self, None),
            LineKind::LayerMarker(index) => {
                trace!("Layer marker {}", index + 1);
                let next = Self {
                    layer_index: index,
                    layer_count: self.layer_count.max(index.saturating_add(1)),
                    ..self
                };
                (next, None)
            }
            LineKind::ExtruderReset(e) => (
                Self {
                    e: e.unwrap_or(self.e),
                    ..self
                },
                None,
            ),
            LineKind::Motion(words) => {
                let e = words.e.unwrap_or(self.e);
                let next = Self {
                    x: words.x.unwrap_or(self.x),
                    y: words.y.unwrap_or(self.y),
                    z: words.z.unwrap_or(self.z),
                    e,
                    prev_e: if words.e.is_some() { e } else { self.prev_e },
                    ..self
                };
                let parsed = ParsedMove {
                    x: next.x,
                    y: next.y,
                    z: next.z,
                    e: words.e,
                    is_extrusion: words.e.is_some() && e > self.prev_e,
                    layer_index: Some(self.layer_index),
                };
                (next, Some(parsed))
            }
        }
    }
}

/// Decode G-code text into moves and a marker-based layer count.
///
/// Total over any input: unknown commands and unparsable words are skipped.
pub fn parse_gcode<S: AsRef<str>>(lines: &[S]) -> ParsedGCode {
    let (state, moves) = lines.iter().fold(
        (DecoderState::default(), Vec::new()),
        |(state, mut moves), line| {
            let (next, parsed) = state.step(line.as_ref());
            moves.extend(parsed);
            (next, moves)
        },
    );

    debug!(
        "Decoded {} moves across {} layers from {} lines",
        moves.len(),
        state.layer_count,
        lines.len()
    );

    ParsedGCode {
        moves,
        layer_count: state.layer_count,
    }
}
