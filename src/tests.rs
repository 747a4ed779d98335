use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::time::Duration;

use actix::Actor;

use crate::config::settings::SceneSettings;
use crate::frontend::continuous::ContinuousScene;
use crate::frontend::discrete::DiscreteScene;
use crate::frontend::messages::{GetSnapshot, SceneInput};
use crate::frontend::surface::Surface;
use crate::game::bounds::SceneBounds;
use crate::game::canvas::PixelCanvas;
use crate::game::input::InputState;
use crate::game::state::SceneState;
use crate::game::systems::integrate;
use crate::game::types::{KeyEvent, MovementKey, Position, SceneEvent, Viewport};

const SPEED: f64 = 2.8;

fn default_scene() -> SceneState {
    SceneState::from_settings(&SceneSettings::default())
}

fn canvas_bounds() -> SceneBounds {
    SceneBounds { min_x: 240.0, max_x: 1040.0, min_y: 176.0, max_y: 508.0 }
}

fn input_from_mask(mask: u8) -> InputState {
    let mut input = InputState::new();
    for (bit, key) in MovementKey::ALL.iter().enumerate() {
        input.set_key(*key, mask & (1 << bit) != 0);
    }
    input
}

#[test]
fn test_spawn_at_bottom_centre() {
    let scene = default_scene();
    assert_eq!(scene.position, Position::new(640.0, 498.0));
    assert_eq!(scene.bounds, canvas_bounds());
}

#[test]
fn test_every_input_state_stays_in_bounds() {
    let bounds = canvas_bounds();
    let starts = [
        Position::new(240.0, 176.0),
        Position::new(1040.0, 508.0),
        Position::new(640.0, 300.0),
        Position::new(241.0, 507.5),
    ];

    for mask in 0..16u8 {
        let input = input_from_mask(mask);
        for start in starts {
            let mut pos = start;
            for _ in 0..400 {
                pos = integrate(&input, pos, &bounds, SPEED);
                assert!(bounds.contains(pos), "mask={mask:04b} start={start:?} pos={pos:?}");
            }
        }
    }
}

#[test]
fn test_diagonal_speed_matches_axis_speed() {
    let bounds = canvas_bounds();
    let start = Position::new(640.0, 300.0);

    let mut right = InputState::new();
    right.set_key(MovementKey::Right, true);
    let axis = integrate(&right, start, &bounds, SPEED);

    let mut diagonal = right;
    diagonal.set_key(MovementKey::Up, true);
    let diag = integrate(&diagonal, start, &bounds, SPEED);

    let axis_len = (axis.x - start.x).hypot(axis.y - start.y);
    let diag_len = (diag.x - start.x).hypot(diag.y - start.y);
    assert!((axis_len - SPEED).abs() < 1e-9);
    assert!((diag_len - SPEED).abs() < 1e-9);
    assert!(diag.x > start.x && diag.y < start.y);
}

#[test]
fn test_opposing_keys_cancel_per_axis() {
    let bounds = canvas_bounds();
    let start = Position::new(640.0, 300.0);

    let mut input = InputState::new();
    input.set_key(MovementKey::Left, true);
    input.set_key(MovementKey::Right, true);
    assert_eq!(integrate(&input, start, &bounds, SPEED), start);

    input.set_key(MovementKey::Down, true);
    let moved = integrate(&input, start, &bounds, SPEED);
    assert_eq!(moved.x, start.x);
    assert_eq!(moved.y, start.y + SPEED);

    input.set_key(MovementKey::Up, true);
    assert_eq!(integrate(&input, start, &bounds, SPEED), start);
}

#[test]
fn test_release_or_focus_loss_halts_movement() {
    let mut scene = default_scene();
    scene.handle_key(KeyEvent::pressed(MovementKey::Left));
    assert!(scene.tick());

    scene.handle_key(KeyEvent::released(MovementKey::Left));
    let stopped = scene.position;
    assert!(!scene.tick());
    assert_eq!(scene.position, stopped);

    scene.handle_key(KeyEvent::pressed(MovementKey::Up));
    scene.handle_key(KeyEvent::pressed(MovementKey::Right));
    assert!(scene.tick());
    scene.release_all();
    let stopped = scene.position;
    for _ in 0..10 {
        assert!(!scene.tick());
    }
    assert_eq!(scene.position, stopped);
}

#[test]
fn test_holding_w_moves_up_by_speed() {
    let mut scene = default_scene();
    let start = scene.position;
    scene.handle_key(KeyEvent::pressed(MovementKey::Up));
    scene.tick();
    assert_eq!(scene.position.x, start.x);
    assert_eq!(scene.position.y, start.y - SPEED);

    // Near the top the step is cut short by the clamp.
    scene.position = Position::new(640.0, 177.0);
    scene.tick();
    assert_eq!(scene.position.y, 176.0);
}

#[test]
fn test_holding_a_at_min_x_stays_put() {
    let mut scene = default_scene();
    scene.position = Position::new(240.0, 400.0);
    scene.handle_key(KeyEvent::pressed(MovementKey::Left));
    for _ in 0..5 {
        assert!(!scene.tick());
        assert_eq!(scene.position.x, 240.0);
    }
}

#[test]
fn test_resize_never_moves_position_already_inside() {
    let settings = SceneSettings::default();
    let mut scene = SceneState::with_surface(&settings, 1280.0, 720.0);
    scene.position = Position::new(700.0, 300.0);

    scene.resize_surface(1000.0, 600.0);
    assert_eq!(scene.position, Position::new(700.0, 300.0));

    scene.resize_surface(800.0, 500.0);
    assert_eq!(scene.position, Position::new(560.0, 288.0));
    assert!(scene.bounds.contains(scene.position));

    let shrunk = scene.position;
    scene.resize_surface(1600.0, 960.0);
    assert_eq!(scene.position, shrunk);
}

#[test]
fn test_discrete_step_moves_fixed_distance() {
    let mut scene = default_scene();
    let start = scene.position;
    scene.step_key(MovementKey::Right);
    assert_eq!(scene.position, Position::new(start.x + 16.0, start.y));
    scene.step_key(MovementKey::Down);
    assert_eq!(scene.position.y, scene.bounds.max_y);
}

struct RecordingSurface {
    presented: Rc<Cell<u32>>,
}

impl Surface for RecordingSurface {
    fn present(&mut self, _canvas: &PixelCanvas) -> io::Result<()> {
        self.presented.set(self.presented.get() + 1);
        Ok(())
    }
}

#[actix::test]
async fn test_frame_driver_integrates_and_redraws() {
    let settings = SceneSettings { frame_rate: 100, ..SceneSettings::default() };
    let presented = Rc::new(Cell::new(0));
    let surface = RecordingSurface { presented: presented.clone() };
    let addr = ContinuousScene::new(&settings, Viewport::new(80, 24), surface).start();

    addr.do_send(SceneInput(SceneEvent::Key(KeyEvent::pressed(MovementKey::Up))));
    tokio::time::sleep(Duration::from_millis(120)).await;
    let moving = addr.send(GetSnapshot).await.expect("scene alive");
    assert!(moving.position.y < 498.0);
    assert!(moving.bounds.contains(moving.position));

    addr.do_send(SceneInput(SceneEvent::FocusLost));
    let halted = addr.send(GetSnapshot).await.expect("scene alive");
    let frames_before = presented.get();
    tokio::time::sleep(Duration::from_millis(80)).await;
    let later = addr.send(GetSnapshot).await.expect("scene alive");

    assert_eq!(later.position, halted.position);
    // Frames keep coming while idle.
    assert!(presented.get() > frames_before);
}

#[actix::test]
async fn test_discrete_driver_steps_on_key_down_and_rebounds_on_resize() {
    let settings = SceneSettings::default();
    let presented = Rc::new(Cell::new(0));
    let surface = RecordingSurface { presented: presented.clone() };
    // 200x120 terminal pixels at 8 units each: a 1600x960 scene.
    let addr = DiscreteScene::new(&settings, Viewport::new(200, 60), surface).start();

    let start = addr.send(GetSnapshot).await.expect("scene alive");
    assert_eq!(start.position, Position::new(800.0, 738.0));

    addr.do_send(SceneInput(SceneEvent::Key(KeyEvent::pressed(MovementKey::Left))));
    addr.do_send(SceneInput(SceneEvent::Key(KeyEvent::released(MovementKey::Left))));
    addr.do_send(SceneInput(SceneEvent::FocusLost));
    let stepped = addr.send(GetSnapshot).await.expect("scene alive");
    assert_eq!(stepped.position, Position::new(784.0, 738.0));
    assert_eq!(presented.get(), 2);

    // 160x90 pixels fit the 1280x720 canvas exactly.
    addr.do_send(SceneInput(SceneEvent::Resized(Viewport::new(160, 45))));
    let shrunk = addr.send(GetSnapshot).await.expect("scene alive");
    assert_eq!((shrunk.width, shrunk.height), (1280.0, 720.0));
    assert_eq!(shrunk.position, Position::new(784.0, 508.0));

    addr.do_send(SceneInput(SceneEvent::Resized(Viewport::new(200, 60))));
    let grown = addr.send(GetSnapshot).await.expect("scene alive");
    assert_eq!(grown.position, shrunk.position);
    assert_eq!(presented.get(), 4);
}

#[actix::test]
async fn test_discrete_driver_moves_vertically_on_small_terminal() {
    let settings = SceneSettings::default();
    let surface = RecordingSurface { presented: Rc::new(Cell::new(0)) };
    let addr = DiscreteScene::new(&settings, Viewport::new(80, 24), surface).start();

    let start = addr.send(GetSnapshot).await.expect("scene alive");
    assert_eq!((start.width, start.height), (1280.0, 768.0));
    assert!(start.bounds.min_y < start.bounds.max_y);
    assert_eq!(start.position, Position::new(640.0, 546.0));

    addr.do_send(SceneInput(SceneEvent::Key(KeyEvent::pressed(MovementKey::Up))));
    let up = addr.send(GetSnapshot).await.expect("scene alive");
    assert_eq!(up.position, Position::new(640.0, 530.0));

    addr.do_send(SceneInput(SceneEvent::Key(KeyEvent::pressed(MovementKey::Down))));
    addr.do_send(SceneInput(SceneEvent::Key(KeyEvent::pressed(MovementKey::Down))));
    let down = addr.send(GetSnapshot).await.expect("scene alive");
    assert_eq!(down.position, Position::new(640.0, 556.0));
}
