//! Easing curves
//!
//! Both curves map a normalized progress `t` in `[0, 1]` onto `[0, 1]`,
//! pass through `(0, 0)`, `(0.5, 0.5)` and `(1, 1)`, and are monotone
//! non-decreasing. They are continuous at `t = 0.5`, where the two branches
//! meet; the slope is not required to match there.
//!
//! Callers clamp or wrap `t` into range before easing.

/// Quadratic in-out easing
///
/// ```text
/// y = 2t^2             ; t in [0, 0.5)
/// y = -2t^2 + 4t - 1   ; t in [0.5, 1]
/// ```
///
/// # Example
/// ```
/// use hypermorph_math::easing::ease_quad_in_out;
/// assert_eq!(ease_quad_in_out(0.5), 0.5);
/// assert_eq!(ease_quad_in_out(0.25), 0.125);
/// ```
#[inline]
pub fn ease_quad_in_out(t: f64) -> f64 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -2.0 * t * t + 4.0 * t - 1.0
    }
}

/// Circular in-out easing
///
/// ```text
/// y = 1/2 (1 - sqrt(1 - 4t^2))          ; t in [0, 0.5)
/// y = 1/2 (sqrt(-(2t - 3)(2t - 1)) + 1) ; t in [0.5, 1]
/// ```
///
/// Radicands are clamped to zero so rounding at `t = 0`, `0.5` and `1`
/// cannot produce NaN.
#[inline]
pub fn ease_circular_in_out(t: f64) -> f64 {
    if t < 0.5 {
        0.5 * (1.0 - clamped_sqrt(1.0 - 4.0 * t * t))
    } else {
        0.5 * (clamped_sqrt(-(2.0 * t - 3.0) * (2.0 * t - 1.0)) + 1.0)
    }
}

#[inline]
fn clamped_sqrt(radicand: f64) -> f64 {
    radicand.max(0.0).sqrt()
}
