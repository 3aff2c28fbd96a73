//! Double-buffered input snapshots with edge-triggered queries.
//!
//! The frame loop polls exactly once per frame; queries compare the two
//! most recent snapshots, so "pressed" and "released" are rising/falling
//! edges and "down" is the current level. Nothing here blocks or errors.

use glam::Vec2;

use super::keys::{Key, MouseButton};

/// Platform input boundary: something that can report the current
/// pressed-state of every tracked key/button plus the cursor position.
pub trait InputSource {
    fn key_down(&self, key: Key) -> bool;
    fn button_down(&self, button: MouseButton) -> bool;
    fn cursor_position(&self) -> Vec2;
}

/// Two consecutive pressed-state snapshots over a fixed code space.
#[derive(Debug, Clone, Copy)]
pub struct ButtonStates<const N: usize> {
    current: [bool; N],
    previous: [bool; N],
}

impl<const N: usize> ButtonStates<N> {
    /// Start with both snapshots equal: a no-edges baseline.
    pub fn new(snapshot: [bool; N]) -> Self {
        Self {
            current: snapshot,
            previous: snapshot,
        }
    }

    /// Install the next snapshot; the old current becomes previous.
    pub fn update(&mut self, next: [bool; N]) {
        self.previous = self.current;
        self.current = next;
    }

    /// Level query: currently held.
    #[inline]
    pub fn down(&self, index: usize) -> bool {
        self.current[index]
    }

    /// Rising edge: held now, not held in the previous snapshot.
    #[inline]
    pub fn pressed(&self, index: usize) -> bool {
        self.current[index] && !self.previous[index]
    }

    /// Falling edge: released since the previous snapshot.
    #[inline]
    pub fn released(&self, index: usize) -> bool {
        !self.current[index] && self.previous[index]
    }

    /// True if any code shows a rising edge.
    pub fn any_pressed(&self) -> bool {
        (0..N).any(|i| self.pressed(i))
    }
}

impl<const N: usize> Default for ButtonStates<N> {
    fn default() -> Self {
        Self::new([false; N])
    }
}

/// Keyboard state for one frame pair.
#[derive(Debug, Clone, Copy, Default)]
pub struct Keyboard {
    states: ButtonStates<{ Key::COUNT }>,
}

impl Keyboard {
    pub fn from_source(source: &impl InputSource) -> Self {
        Self {
            states: ButtonStates::new(Self::snapshot(source)),
        }
    }

    fn snapshot(source: &impl InputSource) -> [bool; Key::COUNT] {
        let mut snap = [false; Key::COUNT];
        for key in Key::ALL {
            snap[key.index()] = source.key_down(key);
        }
        snap
    }

    pub(crate) fn poll(&mut self, source: &impl InputSource) {
        self.states.update(Self::snapshot(source));
    }

    pub fn down(&self, key: Key) -> bool {
        self.states.down(key.index())
    }

    pub fn pressed(&self, key: Key) -> bool {
        self.states.pressed(key.index())
    }

    pub fn released(&self, key: Key) -> bool {
        self.states.released(key.index())
    }

    /// Scans the full code space for any rising edge.
    pub fn pressed_any(&self) -> bool {
        self.states.any_pressed()
    }

    /// Either shift key currently held (level, not edge).
    pub fn shift_down(&self) -> bool {
        self.down(Key::ShiftLeft) || self.down(Key::ShiftRight)
    }
}

/// Mouse state for one frame pair. The cursor position is read at poll
/// time only, never interpolated between polls.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mouse {
    states: ButtonStates<{ MouseButton::COUNT }>,
    position: Vec2,
}

impl Mouse {
    pub fn from_source(source: &impl InputSource) -> Self {
        Self {
            states: ButtonStates::new(Self::snapshot(source)),
            position: source.cursor_position(),
        }
    }

    fn snapshot(source: &impl InputSource) -> [bool; MouseButton::COUNT] {
        let mut snap = [false; MouseButton::COUNT];
        for button in MouseButton::ALL {
            snap[button.index()] = source.button_down(button);
        }
        snap
    }

    pub(crate) fn poll(&mut self, source: &impl InputSource) {
        self.states.update(Self::snapshot(source));
        self.position = source.cursor_position();
    }

    pub fn down(&self, button: MouseButton) -> bool {
        self.states.down(button.index())
    }

    pub fn pressed(&self, button: MouseButton) -> bool {
        self.states.pressed(button.index())
    }

    pub fn released(&self, button: MouseButton) -> bool {
        self.states.released(button.index())
    }

    /// Cursor position as of the last poll.
    pub fn position(&self) -> Vec2 {
        self.position
    }
}

/// Keyboard + mouse, polled together once per frame by the frame loop.
#[derive(Debug, Clone, Copy, Default)]
pub struct Input {
    pub keyboard: Keyboard,
    pub mouse: Mouse,
}

impl Input {
    /// Seed both devices from the source so the first frame reports no
    /// edges.
    pub fn new(source: &impl InputSource) -> Self {
        Self {
            keyboard: Keyboard::from_source(source),
            mouse: Mouse::from_source(source),
        }
    }

    /// Advance both devices by one frame. Call exactly once per frame,
    /// before canvas update.
    pub fn poll(&mut self, source: &impl InputSource) {
        self.keyboard.poll(source);
        self.mouse.poll(source);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct ScriptedSource {
        keys: Vec<Key>,
        buttons: Vec<MouseButton>,
        cursor: Vec2,
    }

    impl InputSource for ScriptedSource {
        fn key_down(&self, key: Key) -> bool {
            self.keys.contains(&key)
        }

        fn button_down(&self, button: MouseButton) -> bool {
            self.buttons.contains(&button)
        }

        fn cursor_position(&self) -> Vec2 {
            self.cursor
        }
    }

    #[test]
    fn test_initial_state_has_no_edges() {
        let source = ScriptedSource {
            keys: vec![Key::A],
            ..Default::default()
        };
        let input = Input::new(&source);
        assert!(input.keyboard.down(Key::A));
        assert!(!input.keyboard.pressed(Key::A));
        assert!(!input.keyboard.released(Key::A));
    }

    #[test]
    fn test_pressed_fires_on_rising_edge_only() {
        let mut source = ScriptedSource::default();
        let mut input = Input::new(&source);

        source.keys = vec![Key::Space];
        input.poll(&source);
        assert!(input.keyboard.pressed(Key::Space));
        assert!(input.keyboard.down(Key::Space));

        // Held across the next poll: level stays, edge clears.
        input.poll(&source);
        assert!(!input.keyboard.pressed(Key::Space));
        assert!(input.keyboard.down(Key::Space));

        source.keys = vec![];
        input.poll(&source);
        assert!(input.keyboard.released(Key::Space));
        assert!(!input.keyboard.down(Key::Space));
    }

    #[test]
    fn test_pressed_any_scans_full_code_space() {
        let mut source = ScriptedSource::default();
        let mut input = Input::new(&source);
        assert!(!input.keyboard.pressed_any());

        source.keys = vec![Key::F7];
        input.poll(&source);
        assert!(input.keyboard.pressed_any());

        input.poll(&source);
        assert!(!input.keyboard.pressed_any());
    }

    #[test]
    fn test_mouse_cursor_updates_at_poll_time() {
        let mut source = ScriptedSource::default();
        let mut input = Input::new(&source);

        source.cursor = Vec2::new(40.0, 25.0);
        assert_eq!(input.mouse.position(), Vec2::ZERO);
        input.poll(&source);
        assert_eq!(input.mouse.position(), Vec2::new(40.0, 25.0));
    }

    #[test]
    fn test_mouse_button_edges() {
        let mut source = ScriptedSource::default();
        let mut input = Input::new(&source);

        source.buttons = vec![MouseButton::Left];
        input.poll(&source);
        assert!(input.mouse.pressed(MouseButton::Left));
        assert!(!input.mouse.pressed(MouseButton::Right));

        input.poll(&source);
        assert!(!input.mouse.pressed(MouseButton::Left));
        assert!(input.mouse.down(MouseButton::Left));
    }
}
