//! Rigid transform description (pure data; composition lives in the designer crate).

use super::point::Vector3;
use serde::{Deserialize, Serialize};

/// Rotation (degrees per axis), per-axis scale, and translation (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transform {
    pub rotation: Vector3,
    pub scale: Vector3,
    pub translation: Vector3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    /// No rotation, unit scale, no offset.
    pub const fn identity() -> Self {
        Self {
            rotation: Vector3::ZERO,
            scale: Vector3::ONE,
            translation: Vector3::ZERO,
        }
    }

    pub fn with_rotation(self, x: f64, y: f64, z: f64) -> Self {
        Self {
            rotation: Vector3::new(x, y, z),
            ..self
        }
    }

    pub fn with_scale(self, x: f64, y: f64, z: f64) -> Self {
        Self {
            scale: Vector3::new(x, y, z),
            ..self
        }
    }

    pub fn with_translation(self, x: f64, y: f64, z: f64) -> Self {
        Self {
            translation: Vector3::new(x, y, z),
            ..self
        }
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::identity()
    }
}
