//! Terminal frontend.
//!
//! Owns the terminal, translates its events into `SceneEvent`s and drives the
//! scene from an actix actor, either every frame or on each key-down.

pub mod messages;
pub mod surface;
pub mod terminal;
pub mod events;
pub mod continuous;
pub mod discrete;
