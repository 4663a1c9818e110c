//! Input mapping from raw events to application actions
//!
//! Maps the few keys that act on the application rather than the magnets.
//! Magnet controls (arrows, `+`/`-`, pointer drag) go directly to the
//! MagnetController.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Actions triggered by application keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
    /// Toggle fullscreen mode (F key)
    ToggleFullscreen,
    /// Scatter a fresh population of the current size (R key)
    Regenerate,
    /// Put the movable magnet back at its start, upright (Home key)
    ResetMagnet,
}

/// Maps raw input events to application actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for application keys, `None` for everything
    /// the MagnetController handles
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            KeyCode::KeyF => Some(InputAction::ToggleFullscreen),
            KeyCode::KeyR => Some(InputAction::Regenerate),
            KeyCode::Home => Some(InputAction::ResetMagnet),
            _ => None,
        }
    }
}
