//! Chef movement system.
//!
//! This module turns held keys (or a single key-down in discrete mode) into a
//! new position, always clamped to the scene bounds.

use std::f64::consts::FRAC_1_SQRT_2;

use crate::game::bounds::SceneBounds;
use crate::game::input::InputState;
use crate::game::types::{MovementKey, Position};

/// Constrain `value` to `[lo, hi]`, saturating at the nearer bound.
pub fn clamp(value: f64, lo: f64, hi: f64) -> f64 {
    value.max(lo).min(hi)
}

/// One integration step.
/// Diagonal movement is scaled so its length equals `speed`; with no net
/// direction the position is returned untouched.
pub fn integrate(input: &InputState, pos: Position, bounds: &SceneBounds, speed: f64) -> Position {
    let (mut dx, mut dy) = input.direction();

    if dx == 0.0 && dy == 0.0 {
        return pos;
    }

    if dx != 0.0 && dy != 0.0 {
        dx *= FRAC_1_SQRT_2;
        dy *= FRAC_1_SQRT_2;
    }

    bounds.clamp(Position {
        x: pos.x + dx * speed,
        y: pos.y + dy * speed,
    })
}

/// Move a fixed `step` along the key's axis, then clamp.
pub fn step_discrete(key: MovementKey, pos: Position, bounds: &SceneBounds, step: f64) -> Position {
    let (dx, dy) = key.axis();
    bounds.clamp(Position {
        x: pos.x + dx * step,
        y: pos.y + dy * step,
    })
}
