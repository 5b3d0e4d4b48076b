//! Input mapping from raw events to semantic actions
//!
//! The animation has no interactive controls; the only actions end it.

use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::animation::Termination;

/// Actions triggered by input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Exit application (Escape)
    Exit,
    /// Window close button
    Close,
}

impl InputAction {
    /// The termination reason this action requests
    pub fn termination(self) -> Termination {
        match self {
            InputAction::Exit => Termination::EscapePressed,
            InputAction::Close => Termination::WindowClosed,
        }
    }
}

/// Maps raw input events to semantic actions
pub struct InputMapper;

impl InputMapper {
    /// Map keyboard input to an action
    ///
    /// Returns `Some(action)` for mapped keys, `None` for everything else
    pub fn map_keyboard(key: KeyCode, state: ElementState) -> Option<InputAction> {
        // Only handle key presses, not releases
        if state != ElementState::Pressed {
            return None;
        }

        match key {
            KeyCode::Escape => Some(InputAction::Exit),
            _ => None,
        }
    }

    /// Map a window close request to an action
    pub fn map_close_requested() -> InputAction {
        InputAction::Close
    }
}
