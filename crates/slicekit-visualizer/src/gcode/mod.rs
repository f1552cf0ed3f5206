//! G-code decoding and statistics
//!
//! This module provides:
//! - Lenient move/layer decoding for preview rendering
//! - Strict statistics reconstruction for reporting
//!
//! The two scans share no code and intentionally disagree on what a move is
//! and how layers are counted.

pub mod parser;
pub mod stats;

pub use parser::{parse_gcode, ParsedGCode, ParsedMove};
pub use stats::calculate_stats;
