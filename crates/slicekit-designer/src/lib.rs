//! # SliceKit Designer
//!
//! Turns parametric shapes into printer G-code.
//!
//! ## Core Components
//!
//! - **Geometry**: Whole-shape surface point sets for cubes, spheres and cylinders
//! - **Slicer**: Per-layer cross-section contours and layer height planning
//! - **Transform**: Scale, rotate and translate point sets with one composed matrix
//! - **G-code generation**: Layered or point-cloud encoding with absolute extrusion
//!
//! ## Pipeline
//!
//! ```text
//! ShapeParameters
//!   └── shape_z_range → layer_heights
//!         └── layer_contour_at_z (shape-local)
//!               └── TransformMatrix::apply_all
//!                     └── ToolpathToGcode::generate_body
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use slicekit_core::{PrinterSettings, ShapeParameters, Transform};
//! use slicekit_designer::generate_gcode;
//!
//! let lines = generate_gcode(
//!     &ShapeParameters::cube(20.0, 20.0, 10.0),
//!     &Transform::identity().with_translation(100.0, 100.0, 5.0),
//!     &PrinterSettings::default(),
//! );
//! assert!(lines.iter().any(|l| l == "; Layer 1"));
//! ```

pub mod gcode_gen;
pub mod geometry;
pub mod slicer;
pub mod transform;

pub use gcode_gen::{generate_gcode, EncodeMode, ToolpathToGcode};
pub use geometry::{
    generate_cube_points, generate_cylinder_points, generate_shape_points, generate_sphere_points,
    shape_points,
};
pub use slicer::{
    contour_at_z, layer_contour_at_z, layer_heights, shape_z_range, slice_cube_at_z,
    slice_cylinder_at_z, slice_sphere_at_z,
};
pub use transform::{transform_point, transform_points, TransformMatrix};
