//! Parametric shape descriptions
//!
//! Each shape kind owns one payload struct. Missing dimensions are filled
//! in by the payload's `Default` impl, both when constructed in code and when
//! deserialized from a job file, so the generator and slicer never see
//! optional fields.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cube edge lengths (mm). `width` is the X extent, `height` Y, `depth` Z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CubeDimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

impl Default for CubeDimensions {
    fn default() -> Self {
        Self {
            width: 10.0,
            height: 10.0,
            depth: 10.0,
        }
    }
}

/// Sphere radius (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereDimensions {
    pub radius: f64,
}

impl Default for SphereDimensions {
    fn default() -> Self {
        Self { radius: 5.0 }
    }
}

/// Cylinder radius and height (mm). The axis is parallel to Z.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CylinderDimensions {
    pub radius: f64,
    pub height: f64,
}

impl Default for CylinderDimensions {
    fn default() -> Self {
        Self {
            radius: 5.0,
            height: 10.0,
        }
    }
}

/// A parametric solid.
///
/// Serialized as `{ "type": "cube", "dimensions": { ... } }`. A tag that names
/// no known shape deserializes to [`ShapeParameters::Unknown`], which every
/// pipeline stage treats as an empty shape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "dimensions", rename_all = "lowercase")]
pub enum ShapeParameters {
    Cube(CubeDimensions),
    Sphere(SphereDimensions),
    Cylinder(CylinderDimensions),
    #[serde(other)]
    Unknown,
}

impl Default for ShapeParameters {
    fn default() -> Self {
        Self::Cube(CubeDimensions::default())
    }
}

impl ShapeParameters {
    pub fn cube(width: f64, height: f64, depth: f64) -> Self {
        Self::Cube(CubeDimensions {
            width,
            height,
            depth,
        })
    }

    pub fn sphere(radius: f64) -> Self {
        Self::Sphere(SphereDimensions { radius })
    }

    pub fn cylinder(radius: f64, height: f64) -> Self {
        Self::Cylinder(CylinderDimensions { radius, height })
    }

    /// The shape of the given kind with all default dimensions.
    pub fn default_for(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Cube => Self::Cube(CubeDimensions::default()),
            ShapeKind::Sphere => Self::Sphere(SphereDimensions::default()),
            ShapeKind::Cylinder => Self::Cylinder(CylinderDimensions::default()),
        }
    }

    pub fn kind(&self) -> Option<ShapeKind> {
        match self {
            Self::Cube(_) => Some(ShapeKind::Cube),
            Self::Sphere(_) => Some(ShapeKind::Sphere),
            Self::Cylinder(_) => Some(ShapeKind::Cylinder),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for ShapeParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cube(d) => write!(f, "cube {}x{}x{}mm", d.width, d.height, d.depth),
            Self::Sphere(d) => write!(f, "sphere r={}mm", d.radius),
            Self::Cylinder(d) => write!(f, "cylinder r={}mm h={}mm", d.radius, d.height),
            Self::Unknown => write!(f, "unknown shape"),
        }
    }
}

/// Shape selector without dimensions, used by the CLI and UI collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Cube,
    Sphere,
    Cylinder,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cube => write!(f, "cube"),
            Self::Sphere => write!(f, "sphere"),
            Self::Cylinder => write!(f, "cylinder"),
        }
    }
}

impl FromStr for ShapeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cube" | "box" => Ok(Self::Cube),
            "sphere" | "ball" => Ok(Self::Sphere),
            "cylinder" => Ok(Self::Cylinder),
            _ => Err(format!("Unknown shape: {}", s)),
        }
    }
}

/// Inclusive build-height interval occupied by a shape.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ZRange {
    pub min_z: f64,
    pub max_z: f64,
}

impl ZRange {
    pub const fn new(min_z: f64, max_z: f64) -> Self {
        Self { min_z, max_z }
    }

    pub fn contains(&self, z: f64) -> bool {
        z >= self.min_z && z <= self.max_z
    }

    pub fn span(&self) -> f64 {
        self.max_z - self.min_z
    }
}
