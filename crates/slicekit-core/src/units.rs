//! Unit formatting utilities
//!
//! Human-readable rendering of the values in [`crate::PrintStats`].

use crate::types::Point3D;

/// Format a duration given in minutes as `"1h 2m 3s"`, `"2m 3s"` or `"3s"`.
///
/// Negative and non-finite inputs format as `"0s"`.
pub fn format_time(minutes: f64) -> String {
    let minutes = if minutes.is_finite() && minutes > 0.0 {
        minutes
    } else {
        0.0
    };

    let hours = (minutes / 60.0).floor() as u64;
    let mins = (minutes % 60.0).floor() as u64;
    let secs = ((minutes % 1.0) * 60.0).floor() as u64;

    if hours > 0 {
        format!("{}h {}m {}s", hours, mins, secs)
    } else if mins > 0 {
        format!("{}m {}s", mins, secs)
    } else {
        format!("{}s", secs)
    }
}

/// Format a length given in millimeters, switching to meters at 1000 mm.
pub fn format_length(mm: f64) -> String {
    if mm >= 1000.0 {
        format!("{:.2} m", mm / 1000.0)
    } else {
        format!("{:.2} mm", mm)
    }
}

/// Euclidean distance between two points.
pub fn distance(p1: Point3D, p2: Point3D) -> f64 {
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let dz = p2.z - p1.z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}
