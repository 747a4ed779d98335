//! Scene bounds.
//!
//! The rectangle the chef's anchor may range over, derived from the surface
//! size and the chef's extents.

use serde::{Deserialize, Serialize};

use crate::game::systems::movement::clamp;
use crate::game::types::Position;

/// Distances from the chef's anchor to the edges of its drawing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CharacterExtents {
    pub half_width: f64,
    pub top_offset: f64,
    pub bottom_offset: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SceneBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl SceneBounds {
    /// Bounds for a surface of `width` x `height` scene units.
    ///
    /// When the surface is smaller than the chef on an axis, that axis
    /// collapses to its midpoint so `min <= max` always holds.
    pub fn from_surface(width: f64, height: f64, extents: CharacterExtents) -> Self {
        let (min_x, max_x) = ordered(extents.half_width, width - extents.half_width);
        let (min_y, max_y) = ordered(extents.top_offset, height - extents.bottom_offset);
        Self { min_x, max_x, min_y, max_y }
    }

    pub fn clamp(&self, pos: Position) -> Position {
        Position::new(
            clamp(pos.x, self.min_x, self.max_x),
            clamp(pos.y, self.min_y, self.max_y),
        )
    }

    pub fn contains(&self, pos: Position) -> bool {
        (self.min_x..=self.max_x).contains(&pos.x) && (self.min_y..=self.max_y).contains(&pos.y)
    }

    pub fn center_x(&self) -> f64 {
        (self.min_x + self.max_x) / 2.0
    }
}

fn ordered(lo: f64, hi: f64) -> (f64, f64) {
    if lo <= hi {
        (lo, hi)
    } else {
        let mid = (lo + hi) / 2.0;
        (mid, mid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chef() -> CharacterExtents {
        CharacterExtents { half_width: 240.0, top_offset: 176.0, bottom_offset: 212.0 }
    }

    #[test]
    fn bounds_follow_surface_and_extents() {
        let bounds = SceneBounds::from_surface(1280.0, 720.0, chef());
        assert_eq!(bounds.min_x, 240.0);
        assert_eq!(bounds.max_x, 1040.0);
        assert_eq!(bounds.min_y, 176.0);
        assert_eq!(bounds.max_y, 508.0);
    }

    #[test]
    fn undersized_surface_collapses_to_midpoint() {
        let bounds = SceneBounds::from_surface(400.0, 300.0, chef());
        assert_eq!(bounds.min_x, bounds.max_x);
        assert_eq!(bounds.min_x, 200.0);
        assert_eq!(bounds.min_y, bounds.max_y);
        let clamped = bounds.clamp(Position::new(0.0, 1000.0));
        assert!(bounds.contains(clamped));
    }
}
