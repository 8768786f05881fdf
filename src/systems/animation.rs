//! Animation system
//!
//! Owns the animation clock and turns queued key presses plus the per-frame
//! tick into a [`TesseractFrame`] ready for rendering.

use hypermorph_core::{AnimationClock, KernelConfig, TesseractFrame};
use hypermorph_input::AnimationController;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::config::AnimationConfig;

/// Drives the morph animation one frame at a time
pub struct AnimationSystem {
    config: KernelConfig,
    clock: AnimationClock,
    controller: AnimationController,
    /// Whether the last update's tick moved the clock
    advanced: bool,
}

impl AnimationSystem {
    /// Create the system from config
    ///
    /// Invalid sizes or speeds fall back to the defaults with a warning.
    pub fn new(config: &AnimationConfig) -> Self {
        let kernel = config.to_kernel_config().unwrap_or_else(|e| {
            log::warn!("Invalid animation config: {}. Using defaults.", e);
            KernelConfig::default()
        });

        let clock = AnimationClock::new(&kernel).with_running(config.start_running);

        Self {
            config: kernel,
            clock,
            controller: AnimationController::new(),
            advanced: false,
        }
    }

    /// Kernel configuration in use
    pub fn kernel_config(&self) -> &KernelConfig {
        &self.config
    }

    /// Current clock state
    pub fn clock(&self) -> &AnimationClock {
        &self.clock
    }

    /// Whether the last [`update`](Self::update) ticked the clock forward
    ///
    /// False while paused, even if a manual step moved it.
    pub fn advanced(&self) -> bool {
        self.advanced
    }

    /// Forward a key to the animation controller
    ///
    /// Returns true if the key belongs to the animation.
    pub fn process_keyboard(&mut self, key: KeyCode, state: ElementState) -> bool {
        self.controller.process_keyboard(key, state)
    }

    /// Apply pending commands, tick the clock, and compute the frame to draw
    pub fn update(&mut self) -> TesseractFrame {
        self.advanced = self.controller.update(&mut self.clock);
        let frame = TesseractFrame::compute(&self.clock, &self.config);

        if self.advanced {
            log::trace!(
                "t={:.4} r={:.4} k1={:.4} k2={:.4} x={:.4}",
                self.clock.transformation(),
                self.clock.rotation(),
                frame.parameters.k1,
                frame.parameters.k2,
                frame.parameters.x
            );
        }

        frame
    }
}

impl Default for AnimationSystem {
    fn default() -> Self {
        Self::new(&AnimationConfig::default())
    }
}
