use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The tracked movement keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementKey {
    Up,
    Down,
    Left,
    Right,
}

impl MovementKey {
    pub const ALL: [MovementKey; 4] = [
        MovementKey::Up,
        MovementKey::Down,
        MovementKey::Left,
        MovementKey::Right,
    ];

    /// Map a key character to a movement key, ignoring case.
    pub fn from_char(ch: char) -> Option<Self> {
        match ch.to_ascii_lowercase() {
            'w' => Some(MovementKey::Up),
            's' => Some(MovementKey::Down),
            'a' => Some(MovementKey::Left),
            'd' => Some(MovementKey::Right),
            _ => None,
        }
    }

    /// Unit axis contribution `(dx, dy)`; y grows downwards.
    pub fn axis(self) -> (f64, f64) {
        match self {
            MovementKey::Up => (0.0, -1.0),
            MovementKey::Down => (0.0, 1.0),
            MovementKey::Left => (-1.0, 0.0),
            MovementKey::Right => (1.0, 0.0),
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            MovementKey::Up => 0,
            MovementKey::Down => 1,
            MovementKey::Left => 2,
            MovementKey::Right => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyAction {
    Pressed,
    Released,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub key: MovementKey,
    pub action: KeyAction,
}

#[cfg(test)]
impl KeyEvent {
    pub fn pressed(key: MovementKey) -> Self {
        Self { key, action: KeyAction::Pressed }
    }

    pub fn released(key: MovementKey) -> Self {
        Self { key, action: KeyAction::Released }
    }
}

/// Terminal size in character cells. Each cell holds two vertical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self { cols, rows }
    }

    pub fn pixel_width(&self) -> usize {
        self.cols as usize
    }

    pub fn pixel_height(&self) -> usize {
        self.rows as usize * 2
    }
}

/// Typed scene input delivered to the drivers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneEvent {
    Key(KeyEvent),
    FocusLost,
    Resized(Viewport),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_characters_are_case_insensitive() {
        assert_eq!(MovementKey::from_char('w'), Some(MovementKey::Up));
        assert_eq!(MovementKey::from_char('W'), Some(MovementKey::Up));
        assert_eq!(MovementKey::from_char('A'), Some(MovementKey::Left));
        assert_eq!(MovementKey::from_char('s'), Some(MovementKey::Down));
        assert_eq!(MovementKey::from_char('D'), Some(MovementKey::Right));
    }

    #[test]
    fn untracked_characters_map_to_nothing() {
        assert_eq!(MovementKey::from_char('q'), None);
        assert_eq!(MovementKey::from_char(' '), None);
    }
}
