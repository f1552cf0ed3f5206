//! Points and per-axis triples.

use serde::{Deserialize, Serialize};

/// A point in build-volume millimeters.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    /// The build-volume origin.
    pub const ORIGIN: Point3D = Point3D {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Same X/Y, different build height.
    pub fn with_z(self, z: f64) -> Self {
        Self { z, ..self }
    }
}

/// A per-axis triple, used for rotation angles, scale factors and offsets.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3::splat(0.0);
    pub const ONE: Vector3 = Vector3::splat(1.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub const fn splat(v: f64) -> Self {
        Self { x: v, y: v, z: v }
    }
}

impl Default for Vector3 {
    fn default() -> Self {
        Self::ZERO
    }
}
