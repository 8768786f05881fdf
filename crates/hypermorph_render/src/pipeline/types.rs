//! GPU-compatible data types for the wireframe pipeline
//!
//! These types match the layouts in `line.wgsl` exactly.

use bytemuck::{Pod, Zeroable};
use hypermorph_core::{EDGES, LINE_VERTEX_COUNT};
use hypermorph_math::{mat4, Mat4};

/// Uniforms shared by the vertex and fragment stages
///
/// Layout: 144 bytes total (must match line.wgsl LineUniforms)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct LineUniforms {
    /// Projection * view (64 bytes)
    pub view_projection: Mat4,
    /// Model rotation (64 bytes)
    pub model: Mat4,
    /// RGBA line color (16 bytes)
    pub line_color: [f32; 4],
}

impl Default for LineUniforms {
    fn default() -> Self {
        Self {
            view_projection: mat4::IDENTITY,
            model: mat4::IDENTITY,
            line_color: [1.0, 1.0, 1.0, 1.0],
        }
    }
}

/// Index data for drawing every edge as a line segment
pub fn edge_indices() -> [u16; LINE_VERTEX_COUNT] {
    let mut indices = [0u16; LINE_VERTEX_COUNT];
    for (i, [from, to]) in EDGES.iter().enumerate() {
        indices[2 * i] = *from;
        indices[2 * i + 1] = *to;
    }
    indices
}
