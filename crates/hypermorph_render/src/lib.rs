//! Wireframe rendering for Hypermorph
//!
//! ## Key Components
//!
//! - [`context::RenderContext`] - WGPU device, queue, and surface management
//! - [`camera::FixedCamera`] - Stationary perspective camera
//! - [`pipeline::LinePipeline`] - Line-list pipeline drawing the tesseract edges

pub mod camera;
pub mod context;
pub mod pipeline;

pub use camera::FixedCamera;
pub use context::{RenderContext, RenderContextError};
pub use pipeline::{LinePipeline, LineUniforms};
