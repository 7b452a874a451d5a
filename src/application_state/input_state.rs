//! # Input State
//!
//! This module defines the per-frame input report the engine reads when it updates.
//! Keys arrive as named strings (`"w"`, `"Shift"`, `" "`, ...) from whatever windowing
//! layer sits in front of the engine; mouse movement arrives as pixel deltas.

/// The movement keys the engine understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementKey {
    /// `w`
    Forward,
    /// `s`
    Back,
    /// `a`
    Left,
    /// `d`
    Right,
    /// Space bar
    Up,
    /// `Shift`
    Down,
}

impl MovementKey {
    /// Maps a key name to a movement key, if it is bound.
    pub fn from_key_name(key: &str) -> Option<Self> {
        match key {
            "w" => Some(MovementKey::Forward),
            "s" => Some(MovementKey::Back),
            "a" => Some(MovementKey::Left),
            "d" => Some(MovementKey::Right),
            " " => Some(MovementKey::Up),
            "Shift" => Some(MovementKey::Down),
            _ => None,
        }
    }
}

/// A snapshot of held movement keys and the mouse movement since the last frame.
///
/// Key state persists until the key is released. The mouse delta accumulates across
/// events and is cleared by [`InputState::reset`] once a frame has consumed it.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct InputState {
    left: bool,
    right: bool,
    up: bool,
    down: bool,
    forward: bool,
    back: bool,
    /// Horizontal mouse movement in pixels
    pub mouse_dx: f32,
    /// Vertical mouse movement in pixels
    pub mouse_dy: f32,
}

impl InputState {
    /// Creates an input state with nothing held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a key press or release. Unbound keys are ignored.
    ///
    /// # Arguments
    /// * `key` - The key name, e.g. `"w"` or `"Shift"`
    /// * `pressed` - `true` on key down, `false` on key up
    pub fn on_key(&mut self, key: &str, pressed: bool) {
        if let Some(movement) = MovementKey::from_key_name(key) {
            self.set(movement, pressed);
        }
    }

    /// Sets a movement key directly.
    pub fn set(&mut self, key: MovementKey, pressed: bool) {
        let slot = match key {
            MovementKey::Forward => &mut self.forward,
            MovementKey::Back => &mut self.back,
            MovementKey::Left => &mut self.left,
            MovementKey::Right => &mut self.right,
            MovementKey::Up => &mut self.up,
            MovementKey::Down => &mut self.down,
        };
        *slot = pressed;
    }

    /// Adds mouse movement to the pending delta.
    pub fn on_mouse_move(&mut self, dx: f32, dy: f32) {
        self.mouse_dx += dx;
        self.mouse_dy += dy;
    }

    /// Clears the mouse delta. Held keys stay held.
    pub fn reset(&mut self) {
        self.mouse_dx = 0.0;
        self.mouse_dy = 0.0;
    }

    /// Whether `a` is held
    pub fn left(&self) -> bool {
        self.left
    }

    /// Whether `d` is held
    pub fn right(&self) -> bool {
        self.right
    }

    /// Whether space is held
    pub fn up(&self) -> bool {
        self.up
    }

    /// Whether `Shift` is held
    pub fn down(&self) -> bool {
        self.down
    }

    /// Whether `w` is held
    pub fn forward(&self) -> bool {
        self.forward
    }

    /// Whether `s` is held
    pub fn back(&self) -> bool {
        self.back
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_movement() {
        let mut input = InputState::new();
        input.on_key("w", true);
        input.on_key("Shift", true);
        input.on_key(" ", true);
        assert!(input.forward() && input.down() && input.up());
        assert!(!input.back() && !input.left() && !input.right());

        input.on_key("w", false);
        assert!(!input.forward());
    }

    #[test]
    fn unbound_keys_are_ignored() {
        let mut input = InputState::new();
        input.on_key("q", true);
        input.on_key("W", true);
        assert_eq!(input, InputState::default());
    }

    #[test]
    fn mouse_delta_accumulates_until_reset() {
        let mut input = InputState::new();
        input.on_key("a", true);
        input.on_mouse_move(3.0, -1.0);
        input.on_mouse_move(2.0, 4.0);
        assert_eq!((input.mouse_dx, input.mouse_dy), (5.0, 3.0));

        input.reset();
        assert_eq!((input.mouse_dx, input.mouse_dy), (0.0, 0.0));
        assert!(input.left());
    }
}
