use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::settings::SceneSettings;
use crate::game::bounds::{CharacterExtents, SceneBounds};
use crate::game::input::InputState;
use crate::game::systems::{integrate, step_discrete};
use crate::game::types::{KeyAction, KeyEvent, MovementKey, Position};

/// Everything the running loop owns: the chef's position, the held keys and
/// the bounds of the surface it moves on.
#[derive(Debug, Clone)]
pub struct SceneState {
    pub position: Position,
    pub input: InputState,
    pub bounds: SceneBounds,
    pub speed: f64,
    pub step: f64,
    extents: CharacterExtents,
    width: f64,
    height: f64,
}

/// Read-only view of the state, handed out to tests and logs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub position: Position,
    pub bounds: SceneBounds,
    pub width: f64,
    pub height: f64,
}

impl SceneState {
    /// Create a scene on a `width` x `height` surface.
    /// The chef spawns horizontally centred, `spawn_offset` above the bottom bound.
    pub fn new(width: f64, height: f64, extents: CharacterExtents, speed: f64, spawn_offset: f64, step: f64) -> Self {
        let bounds = SceneBounds::from_surface(width, height, extents);
        let position = bounds.clamp(Position::new(bounds.center_x(), bounds.max_y - spawn_offset));

        SceneState {
            position,
            input: InputState::new(),
            bounds,
            speed,
            step,
            extents,
            width,
            height,
        }
    }

    /// Scene on the fixed-size canvas from the settings.
    pub fn from_settings(settings: &SceneSettings) -> Self {
        Self::with_surface(settings, settings.canvas_width, settings.canvas_height)
    }

    /// Scene on a surface of the given size, with movement parameters from the settings.
    pub fn with_surface(settings: &SceneSettings, width: f64, height: f64) -> Self {
        Self::new(
            width,
            height,
            settings.extents(),
            settings.speed,
            settings.spawn_offset,
            settings.discrete_step,
        )
    }

    /// Record a key transition for the next integration step.
    pub fn handle_key(&mut self, event: KeyEvent) {
        self.input.set_key(event.key, event.action == KeyAction::Pressed);
    }

    pub fn release_all(&mut self) {
        self.input.reset_all();
    }

    /// Run one integration step. Returns whether the position changed.
    pub fn tick(&mut self) -> bool {
        let next = integrate(&self.input, self.position, &self.bounds, self.speed);
        debug_assert!(self.bounds.contains(next));
        let moved = next != self.position;
        self.position = next;
        moved
    }

    /// Discrete-mode move for a single key-down.
    pub fn step_key(&mut self, key: MovementKey) -> Position {
        self.position = step_discrete(key, self.position, &self.bounds, self.step);
        debug_assert!(self.bounds.contains(self.position));
        self.position
    }

    /// Recompute the bounds for a new surface size and re-clamp the position.
    /// A position already inside the new bounds is left where it is.
    pub fn resize_surface(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.bounds = SceneBounds::from_surface(width, height, self.extents);
        self.position = self.bounds.clamp(self.position);
        debug_assert!(self.bounds.contains(self.position));
        debug!(
            "[SceneState] Resized surface to {}x{} bounds={:?} position={:?}",
            width, height, self.bounds, self.position
        );
    }

    pub fn surface_size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            position: self.position,
            bounds: self.bounds,
            width: self.width,
            height: self.height,
        }
    }
}
