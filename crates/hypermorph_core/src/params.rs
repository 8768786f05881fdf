//! Morph parameter solver
//!
//! Maps raw transformation progress onto the three coefficients that drive
//! the vertex formulas:
//!
//! - `k1` contracts the outer cube onto the inner one over the whole cycle.
//! - `x` slides the inner cube's face along x during the first quarter of
//!   the eased cycle, then holds at the fold offset.
//! - `k2` folds the inner cube across x. It stays at zero for the first
//!   quarter and then follows a sine running at `pi + 1` rather than `pi`, so
//!   its phase drifts against `k1` instead of repeating in lockstep.

use std::f64::consts::{FRAC_PI_2, PI};

use hypermorph_math::{ease_quad_in_out, trig_to_unit};

/// Eased progress at which the offset ramp ends and the fold begins
pub const FOLD_PHASE_START: f64 = 0.25;

/// Angular rate of the fold coefficient
pub const FOLD_RATE: f64 = PI + 1.0;

/// Blend coefficients for one frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MorphParameters {
    /// Outer to inner contraction, in `[0, 1]`
    pub k1: f64,
    /// Secondary fold, in `[0, 1]`; zero before the fold phase
    pub k2: f64,
    /// Offset of the inner cube along x
    pub x: f64,
}

impl MorphParameters {
    /// Coefficients of the rest pose: both cubes at full size, no offset
    pub const REST: Self = Self { k1: 0.0, k2: 0.0, x: 0.0 };
}

/// Derive `(k1, k2, x)` from raw transformation progress `t` in `[0, 1)`
///
/// `fold_offset` is the configured offset magnitude
/// (see [`KernelConfig::fold_offset`](crate::KernelConfig::fold_offset)).
pub fn derive_parameters(t: f64, fold_offset: f64) -> MorphParameters {
    parameters_from_eased(ease_quad_in_out(t), fold_offset)
}

/// Same as [`derive_parameters`], starting from already eased progress
pub fn parameters_from_eased(eased: f64, fold_offset: f64) -> MorphParameters {
    let k1 = trig_to_unit((PI * eased - FRAC_PI_2).sin());

    if eased < FOLD_PHASE_START {
        MorphParameters {
            k1,
            k2: 0.0,
            x: ramp_offset(eased, fold_offset),
        }
    } else {
        MorphParameters {
            k1,
            k2: fold_coefficient(eased),
            x: fold_offset,
        }
    }
}

/// Offset during the ramp phase; reaches `fold_offset` exactly at the
/// phase boundary
#[inline]
fn ramp_offset(eased: f64, fold_offset: f64) -> f64 {
    fold_offset * eased * 4.0
}

#[inline]
fn fold_coefficient(eased: f64) -> f64 {
    trig_to_unit((FOLD_RATE * (eased - FOLD_PHASE_START) - FRAC_PI_2).sin())
}
