//! Application systems
//!
//! Each system owns one concern of the frame loop; `main` wires them together.

mod animation;
mod render;
mod window;

pub use animation::AnimationSystem;
pub use render::{RenderError, RenderSystem};
pub use window::{WindowError, WindowSystem};
