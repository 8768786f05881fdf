//! Animation clock
//!
//! Two independent progress scalars, each kept in `[0, 1)`, plus a
//! running/paused flag. The clock only moves when it is ticked or stepped;
//! it has no notion of wall time.

use crate::config::KernelConfig;

/// Direction of a manual step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepDirection {
    /// Next frame (+1)
    Forward,
    /// Previous frame (-1)
    Backward,
}

impl StepDirection {
    /// Signed multiplier applied to the per-step deltas
    #[inline]
    pub fn sign(self) -> f64 {
        match self {
            StepDirection::Forward => 1.0,
            StepDirection::Backward => -1.0,
        }
    }
}

/// Transformation and rotation progress with a running flag
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationClock {
    transformation: f64,
    rotation: f64,
    running: bool,
    transformation_speed: f64,
    rotation_speed: f64,
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(&KernelConfig::default())
    }
}

impl AnimationClock {
    /// Create a running clock at progress zero
    pub fn new(config: &KernelConfig) -> Self {
        Self {
            transformation: 0.0,
            rotation: 0.0,
            running: true,
            transformation_speed: config.transformation_speed(),
            rotation_speed: config.rotation_speed(),
        }
    }

    /// Builder: start running or paused
    pub fn with_running(mut self, running: bool) -> Self {
        self.running = running;
        self
    }

    /// Transformation progress in `[0, 1)`
    #[inline]
    pub fn transformation(&self) -> f64 {
        self.transformation
    }

    /// Rotation progress in `[0, 1)`
    #[inline]
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Whether ticks advance the clock
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Flip between running and paused, returning the new state
    pub fn toggle(&mut self) -> bool {
        self.running = !self.running;
        self.running
    }

    /// Move both progress scalars one step, regardless of the running flag
    pub fn step(&mut self, direction: StepDirection) {
        let sign = direction.sign();
        self.transformation = wrap_progress(self.transformation, sign * self.transformation_speed);
        self.rotation = wrap_progress(self.rotation, sign * self.rotation_speed);
    }

    /// Per-frame advance: steps forward only while running
    ///
    /// Returns true if the clock moved.
    pub fn tick(&mut self) -> bool {
        if self.running {
            self.step(StepDirection::Forward);
        }
        self.running
    }
}

/// Add `delta` to `progress` and wrap into `[0, 1)`
///
/// One is added before taking the remainder so a backward step from zero
/// lands just below one instead of going negative.
#[inline]
fn wrap_progress(progress: f64, delta: f64) -> f64 {
    (1.0 + progress + delta).rem_euclid(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    /// Distance on the unit circle, so 0.999... and 0.0 count as close
    fn cyclic_distance(a: f64, b: f64) -> f64 {
        let d = (a - b).abs();
        d.min(1.0 - d)
    }

    #[test]
    fn test_starts_running_at_zero() {
        let clock = AnimationClock::default();
        assert_eq!(clock.transformation(), 0.0);
        assert_eq!(clock.rotation(), 0.0);
        assert!(clock.is_running());
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut clock = AnimationClock::default();
        assert!(!clock.toggle());
        assert!(clock.toggle());
        assert!(clock.is_running());
    }

    #[test]
    fn test_tick_advances_only_while_running() {
        let mut clock = AnimationClock::default();
        assert!(clock.tick());
        assert!((clock.transformation() - 0.004).abs() < EPSILON);
        assert!((clock.rotation() - 0.0017).abs() < EPSILON);

        clock.toggle();
        let before = clock.clone();
        assert!(!clock.tick());
        assert_eq!(clock, before);
    }

    #[test]
    fn test_step_ignores_paused_flag() {
        let mut clock = AnimationClock::default().with_running(false);
        clock.step(StepDirection::Forward);
        assert!((clock.transformation() - 0.004).abs() < EPSILON);
        assert!(!clock.is_running());
    }

    #[test]
    fn test_backward_from_zero_wraps_below_one() {
        let mut clock = AnimationClock::default();
        clock.step(StepDirection::Backward);
        assert!((clock.transformation() - 0.996).abs() < EPSILON);
        assert!((clock.rotation() - 0.9983).abs() < EPSILON);
        assert!(clock.transformation() < 1.0 && clock.rotation() < 1.0);
    }

    #[test]
    fn test_forward_then_backward_is_identity() {
        let mut clock = AnimationClock::default();
        for _ in 0..37 {
            clock.step(StepDirection::Forward);
        }
        let (t, r) = (clock.transformation(), clock.rotation());

        clock.step(StepDirection::Forward);
        clock.step(StepDirection::Backward);
        assert!(cyclic_distance(clock.transformation(), t) < EPSILON);
        assert!(cyclic_distance(clock.rotation(), r) < EPSILON);
    }

    #[test]
    fn test_full_cycle_returns_to_start() {
        let config = KernelConfig::default();
        let mut clock = AnimationClock::new(&config);
        let steps = (1.0 / config.transformation_speed()).round() as usize;
        assert_eq!(steps, 250);

        for _ in 0..steps {
            clock.step(StepDirection::Forward);
            assert!((0.0..1.0).contains(&clock.transformation()));
            assert!((0.0..1.0).contains(&clock.rotation()));
        }
        assert!(cyclic_distance(clock.transformation(), 0.0) < EPSILON);
    }

    #[test]
    fn test_rotation_cycle_closes() {
        let config = KernelConfig::new(0.5, 0.2, 0.004, 0.0025).unwrap();
        let mut clock = AnimationClock::new(&config);
        for _ in 0..400 {
            clock.step(StepDirection::Backward);
        }
        assert!(cyclic_distance(clock.rotation(), 0.0) < EPSILON);
    }

    #[test]
    fn test_wrap_progress() {
        assert_eq!(wrap_progress(0.5, 0.25), 0.75);
        assert_eq!(wrap_progress(0.75, 0.25), 0.0);
        assert_eq!(wrap_progress(0.0, -0.25), 0.75);
    }
}
