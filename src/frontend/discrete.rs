//! Discrete, event-driven mode.
//!
//! No frame timer: each key-down moves the chef one fixed step and redraws
//! straight away. Held keys only repeat at whatever rate the terminal's
//! key-repeat delivers. The scene covers the whole terminal, so a resize
//! recomputes the bounds. On small terminals each pixel stands for more
//! units, so the scene never drops below the configured canvas and both axes
//! keep room to move.

use actix::prelude::*;
use log::{debug, error, info};

use crate::config::settings::SceneSettings;
use crate::frontend::messages::{GetSnapshot, SceneInput, Teardown};
use crate::frontend::surface::{SceneView, Surface};
use crate::game::state::SceneState;
use crate::game::types::{KeyAction, SceneEvent, Viewport};

pub struct DiscreteScene<S: Surface> {
    state: SceneState,
    view: SceneView<S>,
    scale: SceneScale,
    steps: u64,
}

/// How terminal pixels map to scene units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneScale {
    pub units_per_pixel: f64,
    pub min_width: f64,
    pub min_height: f64,
}

impl SceneScale {
    pub fn from_settings(settings: &SceneSettings) -> Self {
        Self {
            units_per_pixel: settings.units_per_pixel,
            min_width: settings.canvas_width,
            min_height: settings.canvas_height,
        }
    }

    /// Logical scene size covering the whole viewport.
    pub fn scene_size(&self, viewport: Viewport) -> (f64, f64) {
        let (cols, rows) = (viewport.pixel_width() as f64, viewport.pixel_height() as f64);
        let mut units = self.units_per_pixel;
        if cols > 0.0 {
            units = units.max(self.min_width / cols);
        }
        if rows > 0.0 {
            units = units.max(self.min_height / rows);
        }
        (cols * units, rows * units)
    }
}

impl<S: Surface> DiscreteScene<S> {
    pub fn new(settings: &SceneSettings, viewport: Viewport, surface: S) -> Self {
        let scale = SceneScale::from_settings(settings);
        let (width, height) = scale.scene_size(viewport);
        Self {
            state: SceneState::with_surface(settings, width, height),
            view: SceneView::new(width, height, viewport, surface),
            scale,
            steps: 0,
        }
    }

    fn redraw(&mut self, ctx: &mut Context<Self>) {
        if let Err(e) = self.view.redraw(self.state.position) {
            error!("[DiscreteScene] Failed to present after {} steps: {}", self.steps, e);
            ctx.stop();
            System::current().stop();
        }
    }
}

impl<S: Surface> Actor for DiscreteScene<S> {
    type Context = Context<Self>;

    fn started(&mut self, ctx: &mut Self::Context) {
        info!(
            "[DiscreteScene] Started: step={} position={:?} bounds={:?}",
            self.state.step, self.state.position, self.state.bounds
        );
        self.redraw(ctx);
    }

    fn stopped(&mut self, _: &mut Self::Context) {
        info!("[DiscreteScene] Stopped after {} steps", self.steps);
    }
}

impl<S: Surface> Handler<SceneInput> for DiscreteScene<S> {
    type Result = ();

    fn handle(&mut self, msg: SceneInput, ctx: &mut Context<Self>) -> Self::Result {
        match msg.0 {
            SceneEvent::Key(event) if event.action == KeyAction::Pressed => {
                let pos = self.state.step_key(event.key);
                self.steps += 1;
                debug!("[DiscreteScene] {:?} -> {:?}", event.key, pos);
                self.redraw(ctx);
            }
            // No held-key state in this mode.
            SceneEvent::Key(_) | SceneEvent::FocusLost => {}
            SceneEvent::Resized(viewport) => {
                let (width, height) = self.scale.scene_size(viewport);
                self.state.resize_surface(width, height);
                self.view.resize(width, height, viewport);
                self.redraw(ctx);
            }
        }
    }
}

impl<S: Surface> Handler<GetSnapshot> for DiscreteScene<S> {
    type Result = MessageResult<GetSnapshot>;

    fn handle(&mut self, _: GetSnapshot, _: &mut Context<Self>) -> Self::Result {
        MessageResult(self.state.snapshot())
    }
}

impl<S: Surface> Handler<Teardown> for DiscreteScene<S> {
    type Result = ();

    fn handle(&mut self, _: Teardown, ctx: &mut Context<Self>) -> Self::Result {
        ctx.stop();
        System::current().stop();
    }
}
