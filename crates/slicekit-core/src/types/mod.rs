//! Value types shared by every SliceKit crate.

pub mod point;
pub mod printer;
pub mod shape;
pub mod stats;
pub mod transform;

pub use point::{Point3D, Vector3};
pub use printer::PrinterSettings;
pub use shape::{
    CubeDimensions, CylinderDimensions, ShapeKind, ShapeParameters, SphereDimensions, ZRange,
};
pub use stats::PrintStats;
pub use transform::Transform;
