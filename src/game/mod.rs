//! Scene model: typed input, bounds, the owned scene state and its systems.

pub mod types;
pub mod input;
pub mod bounds;
pub mod state;
pub mod canvas;

pub mod systems;
