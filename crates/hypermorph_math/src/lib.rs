//! Math library for Hypermorph
//!
//! This crate provides the scalar and vector building blocks of the
//! tesseract animation kernel.
//!
//! ## Core Types
//!
//! - [`Vec3`] - 3D vector with x, y, z components (GPU-compatible layout)
//! - [`Mat4`] - 4x4 column-major matrix for object, view and clip transforms
//!
//! ## Scalar Helpers
//!
//! - [`easing`] - quadratic and circular in-out easing curves
//! - [`transit`] - endpoint blending used by the vertex formulas

mod vec3;
pub mod easing;
pub mod mat4;
pub mod transit;

pub use vec3::Vec3;
pub use mat4::Mat4;
pub use easing::{ease_circular_in_out, ease_quad_in_out};
pub use transit::{transit, transit_with_offset, trig_to_unit};
