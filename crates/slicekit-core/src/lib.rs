//! # SliceKit Core
//!
//! Core types, errors, and utilities for SliceKit.
//! Provides the plain values that flow through the shape → G-code pipeline:
//! points, parametric shape descriptions, rigid transforms, printer settings,
//! and the aggregate print statistics reported back to callers.

pub mod constants;
pub mod error;
pub mod types;
pub mod units;

pub use error::{Error, JobError, Result};

pub use types::{
    CubeDimensions, CylinderDimensions, Point3D, PrintStats, PrinterSettings, ShapeKind,
    ShapeParameters, SphereDimensions, Transform, Vector3, ZRange,
};

pub use units::{distance, format_length, format_time};
