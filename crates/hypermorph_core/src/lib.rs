//! Animation kernel for Hypermorph
//!
//! This crate turns two animation clocks into the 16 vertices of a
//! tesseract folding through a nested cube:
//!
//! - [`AnimationClock`] - Transformation and rotation progress, running flag
//! - [`derive_parameters`] - Progress to blend coefficients `(k1, k2, x)`
//! - [`build_vertices`] - Coefficients to object-space vertices
//! - [`EDGES`] - Fixed edge table indexing the vertex array
//! - [`ModelRotation`] - Rotation progress to a model matrix
//! - [`TesseractFrame`] - All of the above for one frame
//!
//! Everything here is single-threaded, allocation-free and pure apart from
//! the clock itself.

mod clock;
mod config;
mod frame;
mod geometry;
mod params;
mod rotation;

pub use clock::{AnimationClock, StepDirection};
pub use config::{
    KernelConfig, KernelConfigError,
    INNER_HALF_SIZE, OUTER_HALF_SIZE, ROTATION_SPEED, TRANSFORMATION_SPEED,
};
pub use frame::TesseractFrame;
pub use geometry::{build_vertices, line_list, EDGES, EDGE_COUNT, LINE_VERTEX_COUNT, VERTEX_COUNT};
pub use params::{derive_parameters, parameters_from_eased, MorphParameters, FOLD_PHASE_START, FOLD_RATE};
pub use rotation::ModelRotation;

// Re-export commonly used types from hypermorph_math for convenience
pub use hypermorph_math::{Mat4, Vec3};
