//! Terminal events to scene events.
//!
//! A blocking tokio task polls `crossterm::event` and forwards what it reads
//! into the driving actor's mailbox, so handlers run one at a time on the
//! actor's thread. The task checks the mailbox between polls and returns once
//! the actor is gone, which lets the runtime shut down.

use std::time::Duration;

use actix::Recipient;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use log::{debug, error, info};
use tokio::task::JoinHandle;

use crate::frontend::messages::{SceneInput, Teardown};
use crate::game::types::{KeyAction, KeyEvent, MovementKey, SceneEvent, Viewport};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Translated {
    Scene(SceneEvent),
    /// Esc or Ctrl-C: the user is closing the scene.
    Teardown,
    Ignored,
}

pub fn translate(event: Event) -> Translated {
    match event {
        Event::Key(key) => translate_key(key),
        Event::FocusLost => Translated::Scene(SceneEvent::FocusLost),
        Event::Resize(cols, rows) => Translated::Scene(SceneEvent::Resized(Viewport::new(cols, rows))),
        _ => Translated::Ignored,
    }
}

fn translate_key(key: event::KeyEvent) -> Translated {
    let action = match key.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => KeyAction::Pressed,
        KeyEventKind::Release => KeyAction::Released,
    };

    let ctrl_c = key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL);
    if key.code == KeyCode::Esc || ctrl_c {
        return match action {
            KeyAction::Pressed => Translated::Teardown,
            KeyAction::Released => Translated::Ignored,
        };
    }

    match key.code {
        KeyCode::Char(ch) => match MovementKey::from_char(ch) {
            Some(key) => Translated::Scene(SceneEvent::Key(KeyEvent { key, action })),
            None => Translated::Ignored,
        },
        _ => Translated::Ignored,
    }
}

/// How long one poll waits before the reader checks the mailbox again.
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Start the blocking reader task.
/// It exits after forwarding a teardown, or once the actor is gone.
pub fn spawn_input_reader(input: Recipient<SceneInput>, teardown: Recipient<Teardown>) -> JoinHandle<()> {
    tokio::task::spawn_blocking(move || read_events(&input, &teardown))
}

fn read_events(input: &Recipient<SceneInput>, teardown: &Recipient<Teardown>) {
    loop {
        if !input.connected() {
            debug!("[Input] Scene mailbox closed, stopping reader");
            return;
        }

        let event = match event::poll(POLL_INTERVAL).and_then(|ready| ready.then(event::read).transpose()) {
            Ok(Some(event)) => event,
            Ok(None) => continue,
            Err(e) => {
                error!("[Input] Failed to read terminal event: {}", e);
                teardown.do_send(Teardown);
                return;
            }
        };

        match translate(event) {
            Translated::Scene(scene_event) => input.do_send(SceneInput(scene_event)),
            Translated::Teardown => {
                info!("[Input] Teardown requested");
                teardown.do_send(Teardown);
                return;
            }
            Translated::Ignored => {}
        }
    }
}
