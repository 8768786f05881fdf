//! Kernel constants
//!
//! The two cube half-extents and the two per-tick speeds are the only tuning
//! surface of the kernel. The fold offset is derived from the half-extents
//! once, when the configuration is built.

use std::fmt;

/// Half-extent of the outer cube
pub const OUTER_HALF_SIZE: f64 = 0.5;
/// Half-extent of the inner cube
pub const INNER_HALF_SIZE: f64 = 0.2;
/// Transformation progress added per tick
pub const TRANSFORMATION_SPEED: f64 = 0.004;
/// Rotation progress added per tick
pub const ROTATION_SPEED: f64 = 0.0017;

/// Validated kernel configuration
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KernelConfig {
    outer_size: f64,
    inner_size: f64,
    transformation_speed: f64,
    rotation_speed: f64,
    /// How far the inner cube's face travels along x before the fold starts
    fold_offset: f64,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            outer_size: OUTER_HALF_SIZE,
            inner_size: INNER_HALF_SIZE,
            transformation_speed: TRANSFORMATION_SPEED,
            rotation_speed: ROTATION_SPEED,
            fold_offset: fold_offset(OUTER_HALF_SIZE, INNER_HALF_SIZE),
        }
    }
}

impl KernelConfig {
    /// Build a configuration from explicit constants
    ///
    /// Sizes must be finite with `outer > inner > 0`. Speeds must be finite
    /// and in `(0, 1)`.
    pub fn new(
        outer_size: f64,
        inner_size: f64,
        transformation_speed: f64,
        rotation_speed: f64,
    ) -> Result<Self, KernelConfigError> {
        if !(outer_size.is_finite() && inner_size.is_finite()) || inner_size <= 0.0 {
            return Err(KernelConfigError::InvalidSize { outer: outer_size, inner: inner_size });
        }
        if inner_size >= outer_size {
            return Err(KernelConfigError::InnerNotSmaller { outer: outer_size, inner: inner_size });
        }
        for (name, speed) in [("transformation", transformation_speed), ("rotation", rotation_speed)] {
            if !(speed.is_finite() && speed > 0.0 && speed < 1.0) {
                return Err(KernelConfigError::InvalidSpeed { name, value: speed });
            }
        }

        Ok(Self {
            outer_size,
            inner_size,
            transformation_speed,
            rotation_speed,
            fold_offset: fold_offset(outer_size, inner_size),
        })
    }

    /// Outer cube half-extent (`a`)
    #[inline]
    pub fn outer_size(&self) -> f64 {
        self.outer_size
    }

    /// Inner cube half-extent (`b`)
    #[inline]
    pub fn inner_size(&self) -> f64 {
        self.inner_size
    }

    #[inline]
    pub fn transformation_speed(&self) -> f64 {
        self.transformation_speed
    }

    #[inline]
    pub fn rotation_speed(&self) -> f64 {
        self.rotation_speed
    }

    /// Fold offset `d = -(a - b) / 2`
    #[inline]
    pub fn fold_offset(&self) -> f64 {
        self.fold_offset
    }
}

fn fold_offset(outer: f64, inner: f64) -> f64 {
    -(outer - inner) / 2.0
}

/// Kernel configuration error
#[derive(Debug, Clone, PartialEq)]
pub enum KernelConfigError {
    /// A half-extent is non-finite or not positive
    InvalidSize { outer: f64, inner: f64 },
    /// The inner cube does not fit inside the outer cube
    InnerNotSmaller { outer: f64, inner: f64 },
    /// A per-tick speed is outside `(0, 1)`
    InvalidSpeed { name: &'static str, value: f64 },
}

impl fmt::Display for KernelConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KernelConfigError::InvalidSize { outer, inner } => {
                write!(f, "Cube sizes must be positive and finite (outer {}, inner {})", outer, inner)
            }
            KernelConfigError::InnerNotSmaller { outer, inner } => {
                write!(f, "Inner cube size {} must be smaller than outer size {}", inner, outer)
            }
            KernelConfigError::InvalidSpeed { name, value } => {
                write!(f, "The {} speed must be in (0, 1), got {}", name, value)
            }
        }
    }
}

impl std::error::Error for KernelConfigError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let config = KernelConfig::default();
        assert_eq!(config.outer_size(), 0.5);
        assert_eq!(config.inner_size(), 0.2);
        assert_eq!(config.transformation_speed(), 0.004);
        assert_eq!(config.rotation_speed(), 0.0017);
    }

    #[test]
    fn test_fold_offset_derived_once() {
        let config = KernelConfig::default();
        assert!((config.fold_offset() + 0.15).abs() < 1e-12);

        let custom = KernelConfig::new(1.0, 0.5, 0.01, 0.01).unwrap();
        assert_eq!(custom.fold_offset(), -0.25);
    }

    #[test]
    fn test_new_matches_default() {
        let config = KernelConfig::new(
            OUTER_HALF_SIZE,
            INNER_HALF_SIZE,
            TRANSFORMATION_SPEED,
            ROTATION_SPEED,
        )
        .unwrap();
        assert_eq!(config, KernelConfig::default());
    }

    #[test]
    fn test_rejects_inverted_sizes() {
        let err = KernelConfig::new(0.2, 0.5, 0.004, 0.0017).unwrap_err();
        assert!(matches!(err, KernelConfigError::InnerNotSmaller { .. }));
    }

    #[test]
    fn test_rejects_non_positive_size() {
        let err = KernelConfig::new(0.5, 0.0, 0.004, 0.0017).unwrap_err();
        assert!(matches!(err, KernelConfigError::InvalidSize { .. }));

        let err = KernelConfig::new(f64::NAN, 0.2, 0.004, 0.0017).unwrap_err();
        assert!(matches!(err, KernelConfigError::InvalidSize { .. }));
    }

    #[test]
    fn test_rejects_bad_speed() {
        let err = KernelConfig::new(0.5, 0.2, 0.0, 0.0017).unwrap_err();
        assert_eq!(err, KernelConfigError::InvalidSpeed { name: "transformation", value: 0.0 });

        let err = KernelConfig::new(0.5, 0.2, 0.004, 1.0).unwrap_err();
        assert_eq!(err, KernelConfigError::InvalidSpeed { name: "rotation", value: 1.0 });
    }

    #[test]
    fn test_error_display() {
        let err = KernelConfigError::InvalidSpeed { name: "rotation", value: 2.0 };
        assert_eq!(err.to_string(), "The rotation speed must be in (0, 1), got 2");
    }
}
