//! Keyboard control of the animation clock
//!
//! Controls:
//! - T: Toggle running/paused
//! - N: Step one frame forward
//! - P: Step one frame backward
//!
//! Held keys auto-repeat, so holding N or P scrubs through the animation.

use hypermorph_core::{AnimationClock, StepDirection};
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Commands the animation clock understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationCommand {
    /// Flip between running and paused
    Toggle,
    /// Advance one frame
    StepForward,
    /// Go back one frame
    StepBackward,
}

/// Key assignments for the animation commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub toggle: KeyCode,
    pub step_forward: KeyCode,
    pub step_backward: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            toggle: KeyCode::KeyT,
            step_forward: KeyCode::KeyN,
            step_backward: KeyCode::KeyP,
        }
    }
}

/// Animation controller for handling input
///
/// Key presses are queued and applied in order on the next
/// [`update`](Self::update), just before the per-frame tick.
pub struct AnimationController {
    bindings: KeyBindings,
    pending: Vec<AnimationCommand>,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new()
    }
}

impl AnimationController {
    pub fn new() -> Self {
        Self {
            bindings: KeyBindings::default(),
            pending: Vec::new(),
        }
    }

    /// Builder: replace the key bindings
    pub fn with_bindings(mut self, bindings: KeyBindings) -> Self {
        self.bindings = bindings;
        self
    }

    /// Current key bindings
    pub fn bindings(&self) -> KeyBindings {
        self.bindings
    }

    /// Map a key to a command without queueing it
    pub fn map_key(&self, key: KeyCode) -> Option<AnimationCommand> {
        if key == self.bindings.toggle {
            Some(AnimationCommand::Toggle)
        } else if key == self.bindings.step_forward {
            Some(AnimationCommand::StepForward)
        } else if key == self.bindings.step_backward {
            Some(AnimationCommand::StepBackward)
        } else {
            None
        }
    }

    /// Process keyboard input
    ///
    /// Returns true if the key was an animation key. Releases are ignored.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        match self.map_key(key) {
            Some(command) => {
                if state == ElementState::Pressed {
                    self.pending.push(command);
                }
                true
            }
            None => false,
        }
    }

    /// Queue a command directly
    pub fn push_command(&mut self, command: AnimationCommand) {
        self.pending.push(command);
    }

    /// Number of commands waiting for the next update
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Apply queued commands, then tick once
    ///
    /// Returns true if the tick advanced the clock.
    pub fn update<C: AnimationControl>(&mut self, control: &mut C) -> bool {
        for command in self.pending.drain(..) {
            apply(control, command);
        }
        control.tick()
    }
}

/// Apply a single command to an animation
pub fn apply<C: AnimationControl>(control: &mut C, command: AnimationCommand) {
    match command {
        AnimationCommand::Toggle => {
            let running = control.toggle();
            log::info!("Animation {}", if running { "resumed" } else { "paused" });
        }
        AnimationCommand::StepForward => {
            control.step(StepDirection::Forward);
            log::info!("Stepped forward");
        }
        AnimationCommand::StepBackward => {
            control.step(StepDirection::Backward);
            log::info!("Stepped backward");
        }
    }
}

/// Trait for animation control
/// Allows the controller to drive different clock implementations
pub trait AnimationControl {
    fn toggle(&mut self) -> bool;
    fn step(&mut self, direction: StepDirection);
    fn tick(&mut self) -> bool;
}

impl AnimationControl for AnimationClock {
    fn toggle(&mut self) -> bool {
        AnimationClock::toggle(self)
    }

    fn step(&mut self, direction: StepDirection) {
        AnimationClock::step(self, direction)
    }

    fn tick(&mut self) -> bool {
        AnimationClock::tick(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Records calls instead of moving a clock
    #[derive(Default)]
    struct Recorder {
        running: bool,
        steps: Vec<StepDirection>,
        ticks: usize,
    }

    impl AnimationControl for Recorder {
        fn toggle(&mut self) -> bool {
            self.running = !self.running;
            self.running
        }

        fn step(&mut self, direction: StepDirection) {
            self.steps.push(direction);
        }

        fn tick(&mut self) -> bool {
            self.ticks += 1;
            self.running
        }
    }

    #[test]
    fn test_default_bindings() {
        let controller = AnimationController::new();
        assert_eq!(controller.map_key(KeyCode::KeyT), Some(AnimationCommand::Toggle));
        assert_eq!(controller.map_key(KeyCode::KeyN), Some(AnimationCommand::StepForward));
        assert_eq!(controller.map_key(KeyCode::KeyP), Some(AnimationCommand::StepBackward));
        assert_eq!(controller.map_key(KeyCode::KeyQ), None);
    }

    #[test]
    fn test_release_is_consumed_but_not_queued() {
        let mut controller = AnimationController::new();
        assert!(controller.process_keyboard(KeyCode::KeyN, ElementState::Released));
        assert_eq!(controller.pending_count(), 0);
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut controller = AnimationController::new();
        assert!(!controller.process_keyboard(KeyCode::Escape, ElementState::Pressed));
        assert_eq!(controller.pending_count(), 0);
    }

    #[test]
    fn test_commands_applied_in_order_before_tick() {
        let mut controller = AnimationController::new();
        controller.process_keyboard(KeyCode::KeyN, ElementState::Pressed);
        controller.process_keyboard(KeyCode::KeyP, ElementState::Pressed);
        controller.process_keyboard(KeyCode::KeyT, ElementState::Pressed);

        let mut recorder = Recorder::default();
        let advanced = controller.update(&mut recorder);

        assert_eq!(recorder.steps, vec![StepDirection::Forward, StepDirection::Backward]);
        assert!(recorder.running);
        assert!(advanced);
        assert_eq!(recorder.ticks, 1);
        assert_eq!(controller.pending_count(), 0);
    }

    #[test]
    fn test_custom_bindings() {
        let bindings = KeyBindings {
            toggle: KeyCode::Space,
            step_forward: KeyCode::ArrowRight,
            step_backward: KeyCode::ArrowLeft,
        };
        let controller = AnimationController::new().with_bindings(bindings);
        assert_eq!(controller.map_key(KeyCode::Space), Some(AnimationCommand::Toggle));
        assert_eq!(controller.map_key(KeyCode::KeyT), None);
        assert_eq!(controller.bindings(), bindings);
    }

    #[test]
    fn test_drives_real_clock() {
        let mut controller = AnimationController::new();
        let mut clock = AnimationClock::default();

        // Pause, then step forward twice by hand
        controller.push_command(AnimationCommand::Toggle);
        controller.push_command(AnimationCommand::StepForward);
        controller.push_command(AnimationCommand::StepForward);
        let advanced = controller.update(&mut clock);

        assert!(!advanced);
        assert!(!clock.is_running());
        assert!((clock.transformation() - 0.008).abs() < 1e-12);
    }
}
