//! Rendering pipeline components

pub mod types;
pub mod line_pipeline;

pub use types::{edge_indices, LineUniforms};
pub use line_pipeline::LinePipeline;
