//! Input handling for Hypermorph
//!
//! This crate maps keyboard input onto the animation clock's commands.

mod animation_controller;

pub use animation_controller::{
    apply, AnimationCommand, AnimationControl, AnimationController, KeyBindings,
};
