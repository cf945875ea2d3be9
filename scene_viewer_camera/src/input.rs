//! Input model: already-extracted pointer/keyboard state pushed by the host.
//!
//! The camera never subscribes to window events. The host converts its own
//! events into [`InputEvent`] values (winit hosts can use the `From` impls
//! below) and hands them to `CameraController::handle_event`.

use bitflags::bitflags;
use glam::Vec2;
use crate::viewport::ViewportSize;

/// Pointer button held during a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PointerButton {
    #[default]
    None,
    Left,
    Right,
    Middle,
}

bitflags! {
    /// Keyboard modifiers held during a pointer event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const SHIFT   = 1 << 0;
        const CONTROL = 1 << 1;
        const ALT     = 1 << 2;
    }
}

/// Event forwarded from the host to a camera controller.
///
/// Positions are cursor pixels relative to the viewport, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A button was pressed
    PointerDown { position: Vec2, button: PointerButton, modifiers: Modifiers },
    /// The cursor moved; `button` is the button currently held (or `None`)
    PointerMove { position: Vec2, button: PointerButton, modifiers: Modifiers },
    /// A button was released
    PointerUp { position: Vec2, button: PointerButton },
    /// Wheel notches (positive = away from the user = zoom in)
    Wheel { delta: i32, position: Vec2 },
    /// The viewport changed size
    Resize(ViewportSize),
}

impl From<winit::event::MouseButton> for PointerButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => PointerButton::Left,
            winit::event::MouseButton::Right => PointerButton::Right,
            winit::event::MouseButton::Middle => PointerButton::Middle,
            _ => PointerButton::None,
        }
    }
}

impl From<winit::keyboard::ModifiersState> for Modifiers {
    fn from(state: winit::keyboard::ModifiersState) -> Self {
        let mut modifiers = Modifiers::empty();
        modifiers.set(Modifiers::SHIFT, state.shift_key());
        modifiers.set(Modifiers::CONTROL, state.control_key());
        modifiers.set(Modifiers::ALT, state.alt_key());
        modifiers
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
