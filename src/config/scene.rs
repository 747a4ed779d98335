/// Scene configuration constants.
///
/// This module defines the default canvas size, the chef's extents and the
/// movement parameters. `SceneSettings` starts from these values.
pub const CANVAS_WIDTH: f64 = 1280.0; // Logical canvas width in scene units.

/// Logical canvas height in scene units.
pub const CANVAS_HEIGHT: f64 = 720.0;

/// Horizontal distance from the chef's anchor to either side of the drawing.
pub const CHEF_HALF_WIDTH: f64 = 240.0;

/// Distance from the chef's anchor to the top of the hat.
pub const CHEF_TOP_OFFSET: f64 = 176.0;

/// Distance from the chef's anchor to the bottom of the shoes.
pub const CHEF_BOTTOM_OFFSET: f64 = 212.0;

/// Distance travelled per frame while a movement key is held.
pub const CHEF_SPEED: f64 = 2.8;

/// The chef spawns this far above the bottom bound.
pub const SPAWN_OFFSET: f64 = 10.0;

/// Target redraw rate of the continuous frame driver.
pub const FRAME_RATE: u32 = 60;

/// Distance travelled per accepted key-down event in discrete mode.
pub const DISCRETE_STEP: f64 = 16.0;

/// Scene units per terminal pixel when the viewport drives the bounds (discrete mode).
pub const UNITS_PER_PIXEL: f64 = 8.0;
