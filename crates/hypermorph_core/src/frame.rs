//! Per-frame assembly of the kernel outputs

use hypermorph_math::{Mat4, Vec3};

use crate::clock::AnimationClock;
use crate::config::KernelConfig;
use crate::geometry::{build_vertices, line_list, LINE_VERTEX_COUNT, VERTEX_COUNT};
use crate::params::{derive_parameters, MorphParameters};
use crate::rotation::ModelRotation;

/// Everything a renderer needs for one frame
///
/// Frames are plain values recomputed from the clock each time; nothing is
/// carried over from the previous frame.
#[derive(Clone, Debug, PartialEq)]
pub struct TesseractFrame {
    /// Coefficients the vertices were built from
    pub parameters: MorphParameters,
    /// Object-space vertices
    pub vertices: [Vec3; VERTEX_COUNT],
    /// Whole-model rotation
    pub rotation: ModelRotation,
}

impl TesseractFrame {
    /// Solve parameters and build vertices for the clock's current state
    pub fn compute(clock: &AnimationClock, config: &KernelConfig) -> Self {
        let parameters = derive_parameters(clock.transformation(), config.fold_offset());
        let vertices = build_vertices(parameters, config.outer_size(), config.inner_size());

        Self {
            parameters,
            vertices,
            rotation: ModelRotation::from_progress(clock.rotation()),
        }
    }

    /// Model matrix for this frame
    pub fn model_matrix(&self) -> Mat4 {
        self.rotation.to_matrix()
    }

    /// Edge endpoints in line-list order
    pub fn line_list(&self) -> [Vec3; LINE_VERTEX_COUNT] {
        line_list(&self.vertices)
    }
}
