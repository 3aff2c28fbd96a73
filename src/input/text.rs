//! Text capture: accumulates typed characters from keyboard edges.

use super::keys::Key;
use super::state::Keyboard;

/// Keys that produce a character, in scan order. At most one entry is
/// honored per update; simultaneous distinct edges in a single frame are
/// not modeled, the first in this order wins.
const CAPTURE_KEYS: [(Key, char); 40] = [
    (Key::Digit1, '1'),
    (Key::Digit2, '2'),
    (Key::Digit3, '3'),
    (Key::Digit4, '4'),
    (Key::Digit5, '5'),
    (Key::Digit6, '6'),
    (Key::Digit7, '7'),
    (Key::Digit8, '8'),
    (Key::Digit9, '9'),
    (Key::Digit0, '0'),
    (Key::Period, '.'),
    (Key::Underscore, '_'),
    (Key::Minus, '-'),
    (Key::A, 'a'),
    (Key::B, 'b'),
    (Key::C, 'c'),
    (Key::D, 'd'),
    (Key::E, 'e'),
    (Key::F, 'f'),
    (Key::G, 'g'),
    (Key::H, 'h'),
    (Key::I, 'i'),
    (Key::J, 'j'),
    (Key::K, 'k'),
    (Key::L, 'l'),
    (Key::M, 'm'),
    (Key::N, 'n'),
    (Key::O, 'o'),
    (Key::P, 'p'),
    (Key::Q, 'q'),
    (Key::R, 'r'),
    (Key::S, 's'),
    (Key::T, 't'),
    (Key::U, 'u'),
    (Key::V, 'v'),
    (Key::W, 'w'),
    (Key::X, 'x'),
    (Key::Y, 'y'),
    (Key::Z, 'z'),
    (Key::Space, ' '),
];

/// Accumulates alphanumeric input into a string buffer, for naming
/// things and other line-entry UI. Call [`TextCapture::update`] once per
/// frame, after the input poll.
#[derive(Debug, Clone, Default)]
pub struct TextCapture {
    value: String,
}

impl TextCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// The captured text so far.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Consume this frame's keyboard edges. Backspace/delete drops the
    /// last character (empty stays empty); otherwise the first capture
    /// key with a rising edge appends its character, uppercased while a
    /// shift key is held.
    pub fn update(&mut self, keyboard: &Keyboard) {
        if keyboard.pressed(Key::Backspace) || keyboard.pressed(Key::Delete) {
            self.value.pop();
            return;
        }

        let shift = keyboard.shift_down();
        for (key, ch) in CAPTURE_KEYS {
            if keyboard.pressed(key) {
                if shift {
                    self.value.push(ch.to_ascii_uppercase());
                } else {
                    self.value.push(ch);
                }
                break;
            }
        }
    }
}
