//! winit boundary adapter.
//!
//! Accumulates window events into a pressed-state snapshot and serves it
//! through [`InputSource`]. Keycodes are translated once here; codes the
//! toolkit does not track are ignored.

use glam::Vec2;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::keys::{Key, MouseButton};
use super::state::InputSource;

/// Held-key/button tracker fed from a winit event loop. Feed every
/// `WindowEvent` to [`WinitInput::handle_event`], then poll the frame's
/// [`Input`](super::state::Input) from it once per frame.
#[derive(Debug, Clone)]
pub struct WinitInput {
    keys: [bool; Key::COUNT],
    buttons: [bool; MouseButton::COUNT],
    cursor: Vec2,
}

impl WinitInput {
    pub fn new() -> Self {
        Self {
            keys: [false; Key::COUNT],
            buttons: [false; MouseButton::COUNT],
            cursor: Vec2::ZERO,
        }
    }

    /// Track one window event. Returns true if the event changed input
    /// state.
    pub fn handle_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return false;
                };
                let Some(key) = translate_key(code) else {
                    return false;
                };
                self.keys[key.index()] = event.state == ElementState::Pressed;
                true
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let Some(button) = translate_button(*button) else {
                    return false;
                };
                self.buttons[button.index()] = *state == ElementState::Pressed;
                true
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = Vec2::new(position.x as f32, position.y as f32);
                true
            }
            _ => false,
        }
    }
}

impl Default for WinitInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for WinitInput {
    fn key_down(&self, key: Key) -> bool {
        self.keys[key.index()]
    }

    fn button_down(&self, button: MouseButton) -> bool {
        self.buttons[button.index()]
    }

    fn cursor_position(&self) -> Vec2 {
        self.cursor
    }
}

/// Map a winit keycode to a tracked key. Untracked codes yield `None`.
pub fn translate_key(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::Enter | KeyCode::NumpadEnter => Key::Enter,
        KeyCode::Escape => Key::Escape,
        KeyCode::ShiftLeft => Key::ShiftLeft,
        KeyCode::ShiftRight => Key::ShiftRight,
        KeyCode::Space => Key::Space,
        KeyCode::ArrowLeft => Key::Left,
        KeyCode::ArrowRight => Key::Right,
        KeyCode::ArrowUp => Key::Up,
        KeyCode::ArrowDown => Key::Down,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Tab => Key::Tab,
        KeyCode::Digit0 => Key::Digit0,
        KeyCode::Digit1 => Key::Digit1,
        KeyCode::Digit2 => Key::Digit2,
        KeyCode::Digit3 => Key::Digit3,
        KeyCode::Digit4 => Key::Digit4,
        KeyCode::Digit5 => Key::Digit5,
        KeyCode::Digit6 => Key::Digit6,
        KeyCode::Digit7 => Key::Digit7,
        KeyCode::Digit8 => Key::Digit8,
        KeyCode::Digit9 => Key::Digit9,
        KeyCode::F1 => Key::F1,
        KeyCode::F2 => Key::F2,
        KeyCode::F3 => Key::F3,
        KeyCode::F4 => Key::F4,
        KeyCode::F5 => Key::F5,
        KeyCode::F6 => Key::F6,
        KeyCode::F7 => Key::F7,
        KeyCode::F8 => Key::F8,
        KeyCode::F9 => Key::F9,
        KeyCode::F10 => Key::F10,
        KeyCode::F11 => Key::F11,
        KeyCode::F12 => Key::F12,
        KeyCode::Equal | KeyCode::NumpadAdd => Key::Plus,
        KeyCode::Minus | KeyCode::NumpadSubtract => Key::Minus,
        KeyCode::Period => Key::Period,
        KeyCode::KeyA => Key::A,
        KeyCode::KeyB => Key::B,
        KeyCode::KeyC => Key::C,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyF => Key::F,
        KeyCode::KeyG => Key::G,
        KeyCode::KeyH => Key::H,
        KeyCode::KeyI => Key::I,
        KeyCode::KeyJ => Key::J,
        KeyCode::KeyK => Key::K,
        KeyCode::KeyL => Key::L,
        KeyCode::KeyM => Key::M,
        KeyCode::KeyN => Key::N,
        KeyCode::KeyO => Key::O,
        KeyCode::KeyP => Key::P,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyR => Key::R,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyT => Key::T,
        KeyCode::KeyU => Key::U,
        KeyCode::KeyV => Key::V,
        KeyCode::KeyW => Key::W,
        KeyCode::KeyX => Key::X,
        KeyCode::KeyY => Key::Y,
        KeyCode::KeyZ => Key::Z,
        _ => return None,
    };
    Some(key)
}

/// Map a winit mouse button to a tracked button.
pub fn translate_button(button: winit::event::MouseButton) -> Option<MouseButton> {
    match button {
        winit::event::MouseButton::Left => Some(MouseButton::Left),
        winit::event::MouseButton::Middle => Some(MouseButton::Middle),
        winit::event::MouseButton::Right => Some(MouseButton::Right),
        _ => None,
    }
}
