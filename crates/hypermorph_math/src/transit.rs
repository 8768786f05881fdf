//! Blend helpers for the vertex formulas

/// Linear blend from `from` to `to` by `k`
///
/// `k` is normally in `[0, 1]` but is not clamped here.
#[inline]
pub fn transit(from: f64, to: f64, k: f64) -> f64 {
    from + (to - from) * k
}

/// Linear blend whose start point is shifted by `x`
///
/// At `k = 0` the result is `from + x`; at `k = 1` it is `to`.
#[inline]
pub fn transit_with_offset(from: f64, to: f64, k: f64, x: f64) -> f64 {
    from + x + (to - x - from) * k
}

/// Rescale a value in `[-1, 1]` (e.g. a sine) to `[0, 1]`
#[inline]
pub fn trig_to_unit(h: f64) -> f64 {
    (h + 1.0) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transit_endpoints() {
        assert_eq!(transit(0.5, 0.2, 0.0), 0.5);
        assert_eq!(transit(0.5, 0.2, 1.0), 0.2);
        assert!((transit(-1.0, 1.0, 0.25) + 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_transit_extrapolates() {
        assert_eq!(transit(0.0, 1.0, 2.0), 2.0);
    }

    #[test]
    fn test_transit_with_offset_endpoints() {
        let x = -0.15;
        assert!((transit_with_offset(0.2, -0.2, 0.0, x) - 0.05).abs() < 1e-12);
        assert!((transit_with_offset(0.2, -0.2, 1.0, x) + 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_transit_with_zero_offset_is_transit() {
        for k in [0.0, 0.3, 0.5, 0.9, 1.0] {
            assert!((transit_with_offset(0.5, -0.5, k, 0.0) - transit(0.5, -0.5, k)).abs() < 1e-12);
        }
    }

    #[test]
    fn test_trig_to_unit() {
        assert_eq!(trig_to_unit(-1.0), 0.0);
        assert_eq!(trig_to_unit(0.0), 0.5);
        assert_eq!(trig_to_unit(1.0), 1.0);
    }
}
