//! Input code enumeration.
//!
//! Keys and mouse buttons are a fixed, closed set resolved once at the
//! boundary (string names or winit codes map into these enums). Hot-path
//! queries index fixed-size state arrays and never touch strings.

/// Every key the toolkit tracks. The discriminant doubles as the index
/// into the keyboard state arrays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Key {
    Enter,
    Escape,
    ShiftLeft,
    ShiftRight,
    Space,
    Left,
    Right,
    Up,
    Down,
    Backspace,
    Delete,
    Tab,
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
    Plus,
    Minus,
    Underscore,
    Period,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
}

impl Key {
    /// Number of tracked keys (size of the keyboard state arrays).
    pub const COUNT: usize = 64;

    /// All keys, in discriminant order.
    pub const ALL: [Key; Key::COUNT] = [
        Key::Enter,
        Key::Escape,
        Key::ShiftLeft,
        Key::ShiftRight,
        Key::Space,
        Key::Left,
        Key::Right,
        Key::Up,
        Key::Down,
        Key::Backspace,
        Key::Delete,
        Key::Tab,
        Key::Digit0,
        Key::Digit1,
        Key::Digit2,
        Key::Digit3,
        Key::Digit4,
        Key::Digit5,
        Key::Digit6,
        Key::Digit7,
        Key::Digit8,
        Key::Digit9,
        Key::F1,
        Key::F2,
        Key::F3,
        Key::F4,
        Key::F5,
        Key::F6,
        Key::F7,
        Key::F8,
        Key::F9,
        Key::F10,
        Key::F11,
        Key::F12,
        Key::Plus,
        Key::Minus,
        Key::Underscore,
        Key::Period,
        Key::A,
        Key::B,
        Key::C,
        Key::D,
        Key::E,
        Key::F,
        Key::G,
        Key::H,
        Key::I,
        Key::J,
        Key::K,
        Key::L,
        Key::M,
        Key::N,
        Key::O,
        Key::P,
        Key::Q,
        Key::R,
        Key::S,
        Key::T,
        Key::U,
        Key::V,
        Key::W,
        Key::X,
        Key::Y,
        Key::Z,
    ];

    /// Index into the keyboard state arrays.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Resolve a key name to a code. Unknown names yield `None` so queries
    /// on unsupported keys degrade to `false` instead of erroring.
    pub fn from_name(name: &str) -> Option<Key> {
        let key = match name {
            "enter" => Key::Enter,
            "escape" => Key::Escape,
            "lshift" => Key::ShiftLeft,
            "rshift" => Key::ShiftRight,
            "space" | " " => Key::Space,
            "left" => Key::Left,
            "right" => Key::Right,
            "up" => Key::Up,
            "down" => Key::Down,
            "backspace" => Key::Backspace,
            "delete" => Key::Delete,
            "tab" => Key::Tab,
            "0" => Key::Digit0,
            "1" => Key::Digit1,
            "2" => Key::Digit2,
            "3" => Key::Digit3,
            "4" => Key::Digit4,
            "5" => Key::Digit5,
            "6" => Key::Digit6,
            "7" => Key::Digit7,
            "8" => Key::Digit8,
            "9" => Key::Digit9,
            "F1" => Key::F1,
            "F2" => Key::F2,
            "F3" => Key::F3,
            "F4" => Key::F4,
            "F5" => Key::F5,
            "F6" => Key::F6,
            "F7" => Key::F7,
            "F8" => Key::F8,
            "F9" => Key::F9,
            "F10" => Key::F10,
            "F11" => Key::F11,
            "F12" => Key::F12,
            "+" => Key::Plus,
            "-" => Key::Minus,
            "_" => Key::Underscore,
            "." => Key::Period,
            "a" => Key::A,
            "b" => Key::B,
            "c" => Key::C,
            "d" => Key::D,
            "e" => Key::E,
            "f" => Key::F,
            "g" => Key::G,
            "h" => Key::H,
            "i" => Key::I,
            "j" => Key::J,
            "k" => Key::K,
            "l" => Key::L,
            "m" => Key::M,
            "n" => Key::N,
            "o" => Key::O,
            "p" => Key::P,
            "q" => Key::Q,
            "r" => Key::R,
            "s" => Key::S,
            "t" => Key::T,
            "u" => Key::U,
            "v" => Key::V,
            "w" => Key::W,
            "x" => Key::X,
            "y" => Key::Y,
            "z" => Key::Z,
            _ => return None,
        };
        Some(key)
    }
}

/// Mouse buttons the toolkit tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

impl MouseButton {
    /// Number of tracked buttons.
    pub const COUNT: usize = 3;

    /// All buttons, in discriminant order.
    pub const ALL: [MouseButton; MouseButton::COUNT] =
        [MouseButton::Left, MouseButton::Middle, MouseButton::Right];

    /// Index into the mouse state arrays.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Resolve a button name to a code. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<MouseButton> {
        match name {
            "left" => Some(MouseButton::Left),
            "middle" | "center" => Some(MouseButton::Middle),
            "right" => Some(MouseButton::Right),
            _ => None,
        }
    }
}
