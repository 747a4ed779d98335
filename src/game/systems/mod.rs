pub mod movement;
pub mod render;

pub use movement::*;
pub use render::*;
