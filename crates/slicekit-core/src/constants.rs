//! Shared numeric constants.

/// Default number of segments used to approximate circles and spheres.
pub const DEFAULT_SEGMENTS: usize = 32;

/// Radius below which a sphere cross-section collapses to its apex point.
pub const APEX_EPSILON: f64 = 1e-6;

/// Feed rate assumed by the statistics scan when a move carries no `F` word (mm/min).
pub const DEFAULT_FEED_RATE_MM_MIN: f64 = 3600.0;

/// Floor for the extrusion normalization denominator when colouring paths.
pub const MIN_EXTRUSION_NORMALIZER: f64 = 1e-4;

/// Tolerance used when counting layers so exact multiples don't add a layer.
pub const LAYER_COUNT_TOLERANCE: f64 = 1e-9;

/// Upper bound on slicing heights per job; smaller steps are clamped to it.
pub const MAX_LAYER_COUNT: usize = 100_000;

/// Seconds per minute, for mm/s → mm/min feed conversion.
pub const SECONDS_PER_MINUTE: f64 = 60.0;
