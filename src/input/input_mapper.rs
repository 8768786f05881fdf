//! Input mapping from raw events to application actions
//!
//! Maps keyboard input to window-level actions like Exit and ToggleFullscreen.
//! Animation keys (T, N, P) are NOT mapped here - they go directly to the
//! AnimationController.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions that affect the application rather than the animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
}

/// Maps raw input events to application actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `None` for releases and for keys the application does not own
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            _ => None,
        }
    }
}
