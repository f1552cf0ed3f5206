//! Print statistics from G-code text.
//!
//! An independent scan from [`crate::gcode::parser`]: only lines starting
//! with `G0 ` or `G1 ` count, each axis takes the first matching word on the
//! line, feed is not modal, and layers are counted as distinct Z values
//! rather than from layer markers.

use regex::Regex;
use slicekit_core::constants::DEFAULT_FEED_RATE_MM_MIN;
use slicekit_core::{distance, Point3D, PrintStats};
use std::collections::HashSet;
use std::sync::OnceLock;
use tracing::debug;

fn move_word_regex() -> &'static Regex {
    static WORD_REGEX: OnceLock<Regex> = OnceLock::new();
    WORD_REGEX.get_or_init(|| {
        Regex::new(r"([XYZEF])([-+]?(?:\d+\.?\d*|\.\d+))").expect("invalid regex pattern")
    })
}

fn is_move_command(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with("G0 ") || trimmed.starts_with("G1 ")
}

/// First value of `letter` on the line.
fn first_word(line: &str, letter: &str) -> Option<f64> {
    move_word_regex()
        .captures_iter(line)
        .filter(|caps| &caps[1] == letter)
        .find_map(|caps| caps[2].parse::<f64>().ok())
}

/// Z as a hashable key with `-0.0` folded onto `0.0`.
fn z_key(z: f64) -> u64 {
    (z + 0.0).to_bits()
}

#[derive(Debug, Default)]
struct StatsAccumulator {
    position: Point3D,
    print_time: f64,
    filament_used: f64,
    z_heights: HashSet<u64>,
    total_moves: usize,
}

impl StatsAccumulator {
    fn step(mut self, line: &str) -> Self {
        if !is_move_command(line) {
            return self;
        }

        let feed = first_word(line, "F").unwrap_or(DEFAULT_FEED_RATE_MM_MIN);
        let z = first_word(line, "Z");
        let target = Point3D::new(
            first_word(line, "X").unwrap_or(self.position.x),
            first_word(line, "Y").unwrap_or(self.position.y),
            z.unwrap_or(self.position.z),
        );

        self.total_moves += 1;
        if let Some(z) = z {
            self.z_heights.insert(z_key(z));
        }
        if let Some(e) = first_word(line, "E") {
            self.filament_used = self.filament_used.max(e);
        }

        let travelled = distance(self.position, target);
        if travelled > 0.0 && feed > 0.0 {
            self.print_time += travelled / feed;
        }
        self.position = target;
        self
    }

    fn finish(self) -> PrintStats {
        PrintStats {
            print_time: self.print_time,
            filament_used: self.filament_used,
            layer_count: self.z_heights.len(),
            total_moves: self.total_moves,
        }
    }
}

/// Re-derive print time (minutes), filament (mm of E), layer count and move
/// count from G-code text. Position starts at the origin.
pub fn calculate_stats<S: AsRef<str>>(lines: &[S]) -> PrintStats {
    let stats = lines
        .iter()
        .fold(StatsAccumulator::default(), |acc, line| acc.step(line.as_ref()))
        .finish();

    debug!(
        "Stats: {} moves, {} layers, {:.3} min, {:.3} mm filament",
        stats.total_moves, stats.layer_count, stats.print_time, stats.filament_used
    );
    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_is_all_zero() {
        assert_eq!(calculate_stats::<String>(&[]), PrintStats::default());
    }

    #[test]
    fn test_single_move_time() {
        let stats = calculate_stats(&["G1 X10 Y0 Z0 F600"]);
        assert_eq!(stats.print_time, 10.0 / 600.0);
        assert_eq!(stats.total_moves, 1);
        assert_eq!(stats.layer_count, 1);
    }

    #[test]
    fn test_feed_is_not_modal() {
        let stats = calculate_stats(&["G1 X10 F600", "G1 X20"]);
        assert_eq!(stats.print_time, 10.0 / 600.0 + 10.0 / 3600.0);
    }

    #[test]
    fn test_zero_feed_adds_no_time() {
        let stats = calculate_stats(&["G1 X10 F0"]);
        assert_eq!(stats.print_time, 0.0);
        assert_eq!(stats.total_moves, 1);
    }

    #[test]
    fn test_filament_is_running_max() {
        let stats = calculate_stats(&["G1 X1 E5", "G1 X2 E3", "G1 X3 E3"]);
        assert_eq!(stats.filament_used, 5.0);
    }

    #[test]
    fn test_first_occurrence_wins() {
        let stats = calculate_stats(&["G1 X5 X10 F60"]);
        assert_eq!(stats.print_time, 5.0 / 60.0);
    }

    #[test]
    fn test_only_g0_g1_lines_count() {
        let stats = calculate_stats(&["X10 Y10", "G92 E0", "G28", "  G0 X1", "G10 X5", "G1X5"]);
        assert_eq!(stats.total_moves, 1);
    }

    #[test]
    fn test_negative_zero_is_zero_layer() {
        let stats = calculate_stats(&["G1 Z0", "G1 Z-0", "G1 Z-0.0", "G1 Z0.2"]);
        assert_eq!(stats.layer_count, 2);
    }

    #[test]
    fn test_layers_are_distinct_heights_not_markers() {
        let stats = calculate_stats(&["; Layer 1", "G1 Z1", "; Layer 2", "G1 Z1", "; Layer 3"]);
        assert_eq!(stats.layer_count, 1);
    }
}
