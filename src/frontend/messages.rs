//! Messages the terminal reader and tests send to the scene actors.

use actix::prelude::*;

use crate::game::state::SceneSnapshot;
use crate::game::types::SceneEvent;

/// Input forwarded from the terminal reader to the driving actor.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "()")]
pub struct SceneInput(pub SceneEvent);

/// Stop the scene and the actix system (Esc, Ctrl-C, or a dead terminal).
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "()")]
pub struct Teardown;

/// Current position, bounds and surface size of the running scene.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "SceneSnapshot")]
pub struct GetSnapshot;
