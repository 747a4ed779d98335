//! Held-key state.
//!
//! Mutated by key handlers between frames and read at the top of each
//! integration step.

use crate::game::types::MovementKey;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    pressed: [bool; 4],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_key(&mut self, key: MovementKey, pressed: bool) {
        self.pressed[key.index()] = pressed;
    }

    /// Release every key. Called on focus loss so nothing stays stuck.
    pub fn reset_all(&mut self) {
        self.pressed = [false; 4];
    }

    pub fn is_pressed(&self, key: MovementKey) -> bool {
        self.pressed[key.index()]
    }

    /// Raw direction with components in {-1, 0, 1}. Opposing keys cancel.
    pub fn direction(&self) -> (f64, f64) {
        MovementKey::ALL
            .iter()
            .filter(|key| self.is_pressed(**key))
            .map(|key| key.axis())
            .fold((0.0, 0.0), |(x, y), (dx, dy)| (x + dx, y + dy))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_key_tracks_each_key_independently() {
        let mut input = InputState::new();
        input.set_key(MovementKey::Up, true);
        assert!(input.is_pressed(MovementKey::Up));
        assert!(!input.is_pressed(MovementKey::Down));
        input.set_key(MovementKey::Up, false);
        assert_eq!(input, InputState::new());
    }

    #[test]
    fn reset_all_releases_everything() {
        let mut input = InputState::new();
        for key in MovementKey::ALL {
            input.set_key(key, true);
        }
        input.reset_all();
        assert_eq!(input, InputState::new());
        assert_eq!(input.direction(), (0.0, 0.0));
    }

    #[test]
    fn opposing_keys_cancel() {
        let mut input = InputState::new();
        input.set_key(MovementKey::Left, true);
        input.set_key(MovementKey::Right, true);
        input.set_key(MovementKey::Up, true);
        assert_eq!(input.direction(), (0.0, -1.0));
    }
}
